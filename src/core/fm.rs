//! Directory listing logic for askfile.
//!
//! Provides the [Entry] snapshot used by the renderer and the navigator, the
//! [SelectionMode] and [ExtensionFilter] that shape a listing, and [list_entries]
//! which reads one directory into a sorted and filtered [Listing].

use crate::core::formatter::Formatter;
use crate::core::vfs::{EntryMeta, FileSystem};
use crate::error::Error;

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// What the navigator is trying to pick. Fixed for a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    File,
    Directory,
}

impl SelectionMode {
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            SelectionMode::File => "file",
            SelectionMode::Directory => "directory",
        }
    }
}

/// A set of lowercase file extensions, stored without the leading dot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionFilter {
    exts: BTreeSet<String>,
}

impl ExtensionFilter {
    pub fn new<I, S>(exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let exts = exts
            .into_iter()
            .map(|e| {
                let e = e.as_ref().trim();
                e.strip_prefix('.').unwrap_or(e).to_lowercase()
            })
            .filter(|e| !e.is_empty())
            .collect();
        Self { exts }
    }

    /// Parses a comma separated list such as `"py,txt"` or `".CSV"`.
    pub fn parse(list: &str) -> Self {
        Self::new(list.split(','))
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, ext: &str) -> bool {
        if ext.chars().any(|c| c.is_uppercase()) {
            self.exts.contains(&ext.to_lowercase())
        } else {
            self.exts.contains(ext)
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.exts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.exts.iter().map(String::as_str)
    }
}

impl fmt::Display for ExtensionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, ext) in self.exts.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", ext)?;
        }
        write!(f, "]")
    }
}

/// One child of a directory, captured at listing time.
///
/// All display attributes are derived once in [Entry::new] and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    path: PathBuf,
    is_dir: bool,
    size: u64,
    modified: Option<SystemTime>,
    name: String,
    stem: String,
    type_label: String,
    lowercase_name: String,
}

impl Entry {
    pub fn new(path: PathBuf, meta: EntryMeta) -> Self {
        let is_dir = meta.is_dir();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        // Directories keep their full name: "my.project" is not a "project" directory.
        let stem = if is_dir {
            name.clone()
        } else {
            Path::new(&name)
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| name.clone())
        };

        let type_label = if is_dir {
            "dir".to_string()
        } else {
            Path::new(&name)
                .extension()
                .map(|e| e.to_string_lossy().to_lowercase())
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| "file".to_string())
        };

        let lowercase_name = name.to_lowercase();

        Self {
            path,
            is_dir,
            size: meta.size(),
            modified: meta.modified(),
            name,
            stem,
            type_label,
            lowercase_name,
        }
    }

    // Accessors

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Byte count. Always zero for directories.
    #[inline]
    pub fn size(&self) -> u64 {
        if self.is_dir { 0 } else { self.size }
    }

    #[inline]
    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn stem(&self) -> &str {
        &self.stem
    }

    #[inline]
    pub fn type_label(&self) -> &str {
        &self.type_label
    }

    #[inline]
    pub(crate) fn lowercase_name(&self) -> &str {
        &self.lowercase_name
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    /// True if `value` is exactly this entry's name or stem.
    #[inline]
    pub fn matches(&self, value: &str) -> bool {
        self.name == value || self.stem == value
    }
}

/// Result of reading one directory: the entries that could be inspected,
/// plus a count of children that were skipped because their metadata was unreadable.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    entries: Vec<Entry>,
    skipped: usize,
}

impl Listing {
    #[inline]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[inline]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of the sizes of all listed files.
    pub fn total_size(&self) -> u64 {
        self.entries.iter().map(Entry::size).sum()
    }
}

/// Reads `dir` and returns its children sorted and filtered by `formatter`.
///
/// A child whose metadata cannot be read is left out. If `dir` itself cannot be
/// enumerated the whole call fails with [Error::DirectoryUnreadable].
pub fn list_entries<F: FileSystem + ?Sized>(
    fs: &F,
    dir: &Path,
    formatter: &Formatter,
) -> Result<Listing, Error> {
    let children = fs.read_dir(dir).map_err(|e| {
        tracing::error!(path = %dir.display(), error = %e, "directory cannot be listed");
        Error::directory_unreadable(dir, e)
    })?;

    let mut entries = Vec::with_capacity(children.len());
    let mut skipped = 0;

    for child in children {
        let child = match child {
            Ok(path) => path,
            Err(e) => {
                tracing::debug!(dir = %dir.display(), error = %e, "skipping unreadable entry");
                skipped += 1;
                continue;
            }
        };
        match fs.metadata(&child) {
            Ok(meta) => entries.push(Entry::new(child, meta)),
            Err(e) => {
                tracing::debug!(path = %child.display(), error = %e, "skipping unreadable entry");
                skipped += 1;
            }
        }
    }

    formatter.filter_entries(&mut entries);
    Ok(Listing { entries, skipped })
}
