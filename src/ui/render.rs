//! Screen renderer.
//!
//! Turns one directory listing into the text screen shown before every prompt:
//! a centered title, the current directory and its wrapped path, a fixed-width
//! table with one row per entry, and the total size of the listed files.
//!
//! This module stays "pure rendering": it reads a listing and options and writes text,
//! it never touches the navigator state.

use crate::core::terminal::clear_screen;
use crate::core::{
    DEFAULT_TIME_FORMAT, Entry, ExtensionFilter, SelectionMode, format_file_time, pad, shorten,
    unitsize, wrap,
};
use crate::utils::readable_path;

use std::io::{self, Write};
use std::path::Path;

/// Width of the `=` and `-` rules framing the screen.
pub const SCREEN_WIDTH: usize = 77;
/// Default column at which the current path wraps.
pub const DEFAULT_PATH_WIDTH: usize = 58;

const INDEX_WIDTH: usize = 5;
const NAME_WIDTH: usize = 22;
const TYPE_WIDTH: usize = 4;
const SIZE_WIDTH: usize = 10;
const PATH_INDENT_TABS: usize = 2;
const PATH_INDENT_SPACES: usize = 3;

pub const TABLE_HEADER: &str = "Index | Name                    | Type | Size       | Last Modified";

/// Display knobs that come from the `[display]` config section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    clear_screen: bool,
    time_format: String,
    path_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            clear_screen: true,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            path_width: DEFAULT_PATH_WIDTH,
        }
    }
}

impl RenderOptions {
    pub fn new(clear_screen: bool, time_format: impl Into<String>, path_width: usize) -> Self {
        Self {
            clear_screen,
            time_format: time_format.into(),
            path_width,
        }
    }

    #[inline]
    pub fn clear_screen(&self) -> bool {
        self.clear_screen
    }

    #[inline]
    pub fn time_format(&self) -> &str {
        &self.time_format
    }

    #[inline]
    pub fn path_width(&self) -> usize {
        self.path_width
    }
}

/// Title shown at the top of the screen.
pub fn title(mode: SelectionMode) -> String {
    format!("select a {}", mode.label())
}

/// The line printed right above the prompt describing what can be picked.
pub fn subtitle(mode: SelectionMode, filter: Option<&ExtensionFilter>) -> String {
    match (mode, filter) {
        (SelectionMode::Directory, _) => "select a directory".to_string(),
        (SelectionMode::File, Some(f)) => format!("select a {} file", f),
        (SelectionMode::File, None) => "select any file".to_string(),
    }
}

pub fn prompt_text(mode: SelectionMode) -> &'static str {
    match mode {
        SelectionMode::File => r#"type "..", ".", index or name (":q" to quit): "#,
        SelectionMode::Directory => {
            r#"type ":sel <index or name>" to select directory (":q" to quit): "#
        }
    }
}

/// Formats one table row. `index` is 1-based.
pub fn format_row(index: usize, entry: &Entry, time_format: &str) -> String {
    let index = shorten(&format!("{:>width$}", index, width = INDEX_WIDTH), INDEX_WIDTH, 3);
    let name = pad(&shorten(entry.stem(), NAME_WIDTH, 3), NAME_WIDTH);
    let type_label = pad(&shorten(entry.type_label(), TYPE_WIDTH, 3), TYPE_WIDTH);
    let size = if entry.is_dir() {
        " ".repeat(SIZE_WIDTH)
    } else {
        pad(&unitsize(entry.size()), SIZE_WIDTH)
    };
    let modified = format_file_time(entry.modified(), time_format);

    format!(
        "{} | {}  | {} | {} | {}",
        index, name, type_label, size, modified
    )
}

/// Name shown on the "current directory" line. A root has no name, so its path is used.
fn dir_name(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| readable_path(dir))
}

/// Writes the full screen for `dir` and its `entries`.
///
/// Clears the terminal first unless disabled in `opts`.
pub fn render_directory<W: Write>(
    out: &mut W,
    dir: &Path,
    mode: SelectionMode,
    entries: &[Entry],
    opts: &RenderOptions,
) -> io::Result<()> {
    if opts.clear_screen() {
        clear_screen(out)?;
    }

    let rule = "=".repeat(SCREEN_WIDTH);
    writeln!(out, "{}", rule)?;
    writeln!(out, "{:^width$}", title(mode), width = SCREEN_WIDTH)?;
    writeln!(out, "{}", rule)?;

    let path = wrap(
        &readable_path(dir),
        opts.path_width(),
        PATH_INDENT_TABS,
        PATH_INDENT_SPACES,
    );
    writeln!(out, "current directory : {}", dir_name(dir))?;
    writeln!(out, "path              : {}\n", path)?;

    writeln!(out, "{}", TABLE_HEADER)?;
    writeln!(out, "{}", "-".repeat(SCREEN_WIDTH))?;

    let mut total: u64 = 0;
    for (idx, entry) in entries.iter().enumerate() {
        total += entry.size();
        writeln!(out, "{}", format_row(idx + 1, entry, opts.time_format()))?;
    }

    writeln!(out, "\ntotal file size : {}", unitsize(total))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EntryMeta;
    use std::path::PathBuf;

    fn file(name: &str, len: u64) -> Entry {
        Entry::new(PathBuf::from("/w").join(name), EntryMeta::new(false, len, None))
    }

    #[test]
    fn row_has_fixed_columns() {
        let row = format_row(1, &file("notes.txt", 10), DEFAULT_TIME_FORMAT);
        assert_eq!(
            row,
            "    1 | notes                   | txt  | 10.00 B    | -"
        );
    }

    #[test]
    fn long_names_are_shortened() {
        let row = format_row(
            12,
            &file("a_really_long_file_name_for_testing.markdown", 2048),
            DEFAULT_TIME_FORMAT,
        );
        assert_eq!(
            row,
            "   12 | a_really_long_file_...  | m... | 2.00 KB    | -"
        );
    }

    #[test]
    fn directory_rows_leave_size_blank() {
        let dir = Entry::new(PathBuf::from("/w/src"), EntryMeta::new(true, 4096, None));
        let row = format_row(3, &dir, DEFAULT_TIME_FORMAT);
        assert_eq!(row, "    3 | src                     | dir  |            | -");
    }

    #[test]
    fn subtitle_describes_target() {
        let filter = ExtensionFilter::parse("txt,py");
        assert_eq!(
            subtitle(SelectionMode::File, Some(&filter)),
            "select a [py, txt] file"
        );
        assert_eq!(subtitle(SelectionMode::File, None), "select any file");
        assert_eq!(
            subtitle(SelectionMode::Directory, Some(&filter)),
            "select a directory"
        );
    }

    #[test]
    fn screen_lists_entries_and_total() -> Result<(), Box<dyn std::error::Error>> {
        let entries = vec![
            Entry::new(PathBuf::from("/w/src"), EntryMeta::new(true, 4096, None)),
            file("a.txt", 1024),
            file("b.txt", 1024),
        ];
        let opts = RenderOptions::new(false, DEFAULT_TIME_FORMAT, DEFAULT_PATH_WIDTH);
        let mut out = Vec::new();
        render_directory(&mut out, Path::new("/w"), SelectionMode::File, &entries, &opts)?;

        let text = String::from_utf8(out)?;
        assert!(text.starts_with(&"=".repeat(SCREEN_WIDTH)));
        assert!(text.contains("select a file"));
        assert!(text.contains("current directory : w\n"));
        assert!(text.contains(TABLE_HEADER));
        assert!(text.contains("total file size : 2.00 KB"));
        assert_eq!(text.lines().filter(|l| l.contains(" | ")).count(), 4);
        Ok(())
    }
}
