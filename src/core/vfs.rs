//! Filesystem access used by the listing engine and the navigator.
//!
//! Everything askfile needs from a filesystem goes through the [FileSystem] trait:
//! enumerating a directory, reading one child's metadata and resolving a path.
//! [OsFileSystem] is the real implementation backed by `std::fs`.
//! [MemFileSystem] keeps a tree in memory so the navigator can be driven without a disk.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;

/// The subset of metadata captured for one child at listing time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryMeta {
    is_dir: bool,
    len: u64,
    modified: Option<SystemTime>,
}

impl EntryMeta {
    pub fn new(is_dir: bool, len: u64, modified: Option<SystemTime>) -> Self {
        Self {
            is_dir,
            len,
            modified,
        }
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    #[inline]
    pub fn size(&self) -> u64 {
        self.len
    }

    #[inline]
    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }
}

impl From<fs::Metadata> for EntryMeta {
    fn from(md: fs::Metadata) -> Self {
        Self {
            is_dir: md.is_dir(),
            len: md.len(),
            modified: md.modified().ok(),
        }
    }
}

/// One child per item; an `Err` item is a child that could not be read at all.
pub type DirChildren = Vec<io::Result<PathBuf>>;

pub trait FileSystem {
    /// Returns the full paths of the immediate children of `path`.
    ///
    /// Fails if `path` itself cannot be enumerated.
    fn read_dir(&self, path: &Path) -> io::Result<DirChildren>;

    /// Metadata of a single path, following symlinks.
    fn metadata(&self, path: &Path) -> io::Result<EntryMeta>;

    /// Absolute path with `.` and `..` resolved.
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    /// Like [FileSystem::canonicalize] but never fails: falls back to a purely lexical
    /// normalization when the path cannot be resolved on disk.
    fn resolve(&self, path: &Path) -> PathBuf {
        self.canonicalize(path)
            .unwrap_or_else(|_| normalize_lexically(path))
    }
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn read_dir(&self, path: &Path) -> io::Result<DirChildren> {
        (**self).read_dir(path)
    }

    fn metadata(&self, path: &Path) -> io::Result<EntryMeta> {
        (**self).metadata(path)
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        (**self).canonicalize(path)
    }
}

/// Resolves `.` and `..` without touching the disk.
/// The parent of a root is the root itself.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => {
                // pop() refuses to remove the root, so ".." at the top stays put
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(Component::CurDir.as_os_str());
    }
    out
}

/// The real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn read_dir(&self, path: &Path) -> io::Result<DirChildren> {
        Ok(fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.path()))
            .collect())
    }

    fn metadata(&self, path: &Path) -> io::Result<EntryMeta> {
        fs::metadata(path).map(EntryMeta::from)
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        fs::canonicalize(path)
    }
}

#[derive(Debug, Clone)]
struct MemNode {
    meta: EntryMeta,
    denied: bool,
    locked: bool,
    broken: usize,
}

impl MemNode {
    fn new(meta: EntryMeta) -> Self {
        Self {
            meta,
            denied: false,
            locked: false,
            broken: 0,
        }
    }
}

/// An in-memory directory tree.
///
/// Paths are stored normalized and absolute. Adding a file or directory creates any
/// missing ancestors. [MemFileSystem::deny] makes a path behave as if permission was
/// denied: its metadata cannot be read and, for a directory, it cannot be enumerated.
/// [MemFileSystem::lock] only blocks enumeration. [MemFileSystem::corrupt] adds a
/// child that fails before its name is known.
#[derive(Debug, Clone)]
pub struct MemFileSystem {
    nodes: BTreeMap<PathBuf, MemNode>,
}

impl Default for MemFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl MemFileSystem {
    pub fn new() -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert(
            PathBuf::from("/"),
            MemNode::new(EntryMeta::new(true, 0, Some(SystemTime::UNIX_EPOCH))),
        );
        Self { nodes }
    }

    pub fn add_dir(&mut self, path: impl AsRef<Path>) -> &mut Self {
        let path = normalize_lexically(path.as_ref());
        self.insert(path, EntryMeta::new(true, 0, Some(SystemTime::UNIX_EPOCH)));
        self
    }

    pub fn add_file(&mut self, path: impl AsRef<Path>, len: u64) -> &mut Self {
        let path = normalize_lexically(path.as_ref());
        self.insert(path, EntryMeta::new(false, len, Some(SystemTime::UNIX_EPOCH)));
        self
    }

    pub fn deny(&mut self, path: impl AsRef<Path>) -> &mut Self {
        let path = normalize_lexically(path.as_ref());
        if let Some(node) = self.nodes.get_mut(&path) {
            node.denied = true;
        }
        self
    }

    /// Keeps the metadata of a directory readable but refuses to enumerate it.
    pub fn lock(&mut self, path: impl AsRef<Path>) -> &mut Self {
        let path = normalize_lexically(path.as_ref());
        if let Some(node) = self.nodes.get_mut(&path) {
            node.locked = true;
        }
        self
    }

    /// Adds one unreadable child to the directory at `path`.
    pub fn corrupt(&mut self, path: impl AsRef<Path>) -> &mut Self {
        let path = normalize_lexically(path.as_ref());
        if let Some(node) = self.nodes.get_mut(&path) {
            node.broken += 1;
        }
        self
    }

    /// Removes a path and everything below it.
    pub fn remove(&mut self, path: impl AsRef<Path>) -> &mut Self {
        let path = normalize_lexically(path.as_ref());
        self.nodes.retain(|p, _| !p.starts_with(&path));
        self
    }

    fn insert(&mut self, path: PathBuf, meta: EntryMeta) {
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.nodes
                .entry(ancestor.to_path_buf())
                .or_insert_with(|| {
                    MemNode::new(EntryMeta::new(true, 0, Some(SystemTime::UNIX_EPOCH)))
                });
        }
        self.nodes.insert(path, MemNode::new(meta));
    }

    fn node(&self, path: &Path) -> io::Result<&MemNode> {
        let path = normalize_lexically(path);
        self.nodes
            .get(&path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file or directory"))
    }
}

impl FileSystem for MemFileSystem {
    fn read_dir(&self, path: &Path) -> io::Result<DirChildren> {
        let node = self.node(path)?;
        if node.denied || node.locked {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }
        if !node.meta.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                "not a directory",
            ));
        }
        let dir = normalize_lexically(path);
        let mut children: DirChildren = self
            .nodes
            .keys()
            .filter(|p| p.parent() == Some(dir.as_path()))
            .map(|p| Ok(p.clone()))
            .collect();
        children.extend(
            (0..node.broken).map(|_| Err(io::Error::new(io::ErrorKind::InvalidData, "broken entry"))),
        );
        Ok(children)
    }

    fn metadata(&self, path: &Path) -> io::Result<EntryMeta> {
        let node = self.node(path)?;
        if node.denied {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }
        Ok(node.meta)
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        self.node(path)?;
        Ok(normalize_lexically(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn lexical_parent_of_root_is_root() {
        assert_eq!(normalize_lexically(Path::new("/..")), PathBuf::from("/"));
        assert_eq!(normalize_lexically(Path::new("/a/b/../.")), PathBuf::from("/a"));
    }

    #[test]
    fn mem_children_and_errors() -> Result<(), Box<dyn std::error::Error>> {
        let mut fs = MemFileSystem::new();
        fs.add_file("/work/notes.txt", 10).add_dir("/work/src");

        let mut children = fs
            .read_dir(Path::new("/work"))?
            .into_iter()
            .collect::<io::Result<Vec<_>>>()?;
        children.sort();
        assert_eq!(
            children,
            vec![PathBuf::from("/work/notes.txt"), PathBuf::from("/work/src")]
        );

        let err = fs.read_dir(Path::new("/work/notes.txt")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotADirectory);

        fs.deny("/work/src");
        let err = fs.read_dir(Path::new("/work/src")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
        assert!(fs.metadata(Path::new("/work/src")).is_err());
        Ok(())
    }

    #[test]
    fn os_read_dir_lists_children() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        File::create(tmp.path().join("a.txt"))?;
        std::fs::create_dir(tmp.path().join("sub"))?;

        let children = OsFileSystem.read_dir(tmp.path())?;
        assert_eq!(children.len(), 2);
        assert!(children.iter().all(Result::is_ok));

        let meta = OsFileSystem.metadata(&tmp.path().join("sub"))?;
        assert!(meta.is_dir());
        Ok(())
    }

    #[test]
    fn resolve_falls_back_to_lexical() {
        let fs = MemFileSystem::new();
        assert_eq!(
            fs.resolve(Path::new("/gone/away/..")),
            PathBuf::from("/gone")
        );
    }
}
