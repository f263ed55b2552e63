//! Sorting, filtering, and display formatting for directory entries in askfile.
//!
//! The [Formatter] struct holds the rules for ordering and filtering a listing:
//! directories always come first, names compare case-insensitively, and files are
//! kept only if they pass the extension filter.
//!
//! The free functions are the text helpers used by the renderer: [wrap], [shorten],
//! [pad], [unitsize] and [format_file_time].

use crate::core::fm::{Entry, ExtensionFilter, SelectionMode};

use chrono::{DateTime, Local};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use std::cmp::Ordering;
use std::fmt::Write;
use std::time::SystemTime;

const SIZE_UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

/// Default strftime pattern for the "Last Modified" column.
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formatter struct to handle sorting and filtering of entries for one selection mode.
#[derive(Debug, Clone)]
pub struct Formatter {
    filter: Option<ExtensionFilter>,
    show_hidden: bool,
}

impl Formatter {
    /// The filter only applies to file selection, so it is dropped in directory mode.
    /// An empty filter keeps directories only.
    pub fn new(mode: SelectionMode, filter: Option<ExtensionFilter>) -> Self {
        let filter = match mode {
            SelectionMode::File => filter,
            SelectionMode::Directory => None,
        };
        Self {
            filter,
            show_hidden: true,
        }
    }

    pub fn with_show_hidden(mut self, show_hidden: bool) -> Self {
        self.show_hidden = show_hidden;
        self
    }

    #[inline]
    pub fn filter(&self) -> Option<&ExtensionFilter> {
        self.filter.as_ref()
    }

    /// Sorts entries in place: directories first, then by lowercase name.
    pub fn sort_entries(&self, entries: &mut [Entry]) {
        entries.sort_by(|a, b| match (a.is_dir(), b.is_dir()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => a.lowercase_name().cmp(b.lowercase_name()),
        });
    }

    /// Filters the entries in place and sorts what is left.
    pub fn filter_entries(&self, entries: &mut Vec<Entry>) {
        entries.retain(|e| {
            if !self.show_hidden && e.is_hidden() {
                return false;
            }
            if e.is_dir() {
                return true;
            }
            match &self.filter {
                Some(filter) => filter.contains(e.type_label()),
                None => true,
            }
        });
        self.sort_entries(entries);
    }
}

/// Breaks `text` into lines of at most `width` display columns.
///
/// Lines break on whitespace where possible; a word longer than `width` is split.
/// Whitespace inside a line is kept as is, only the run at a break is dropped.
/// Continuation lines start with `indent` tabs followed by `space` spaces.
pub fn wrap(text: &str, width: usize, indent: usize, space: usize) -> String {
    let width = width.max(1);
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    let mut line_w = 0;
    let mut gap = "";

    for (word, next_gap) in word_chunks(text) {
        let word_w = word.width();
        let gap_w = gap.width();

        if line_w + gap_w + word_w <= width {
            line.push_str(gap);
            line.push_str(word);
            line_w += gap_w + word_w;
            gap = next_gap;
            continue;
        }
        gap = next_gap;

        if !line.is_empty() {
            lines.push(std::mem::take(&mut line));
            line_w = 0;
        }

        for ch in word.chars() {
            let w = ch.width().unwrap_or(0);
            if line_w + w > width && line_w > 0 {
                lines.push(std::mem::take(&mut line));
                line_w = 0;
            }
            line.push(ch);
            line_w += w;
        }
    }

    // trailing whitespace belongs to the text, not to a break
    line.push_str(gap);
    if !line.is_empty() {
        lines.push(line);
    }

    let separator = format!("\n{}{}", "\t".repeat(indent), " ".repeat(space));
    lines.join(&separator)
}

/// Splits `text` into words, each paired with the whitespace run that follows it.
/// Leading whitespace comes out as an empty word.
fn word_chunks(text: &str) -> impl Iterator<Item = (&str, &str)> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let word_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let (word, tail) = rest.split_at(word_end);
        let gap_end = tail.find(|c: char| !c.is_whitespace()).unwrap_or(tail.len());
        let (gap, next) = tail.split_at(gap_end);
        rest = next;
        Some((word, gap))
    })
}

/// Cuts `text` to at most `length` display columns, replacing the tail with `dots` periods.
///
/// Text that already fits is returned unchanged. Expects `length > dots`.
pub fn shorten(text: &str, length: usize, dots: usize) -> String {
    if text.width() <= length {
        return text.to_string();
    }
    let budget = length.saturating_sub(dots);
    let mut out = String::with_capacity(length);
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(&".".repeat(dots));
    out
}

/// Right-pads `text` with spaces up to `width` display columns.
pub fn pad(text: &str, width: usize) -> String {
    let w = text.width();
    if w >= width {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() + width - w);
    out.push_str(text);
    out.push_str(&" ".repeat(width - w));
    out
}

/// Formats a byte count with binary units and two decimals, e.g. `"1.50 KB"`.
pub fn unitsize(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", size, SIZE_UNITS[unit])
}

/// Formats the modification time in local time, or "-" if unknown.
/// An invalid strftime `pattern` falls back to [DEFAULT_TIME_FORMAT].
pub fn format_file_time(modified: Option<SystemTime>, pattern: &str) -> String {
    modified
        .map(|mtime| {
            let dt: DateTime<Local> = DateTime::from(mtime);
            let mut out = String::new();
            if write!(out, "{}", dt.format(pattern)).is_err() {
                out.clear();
                let _ = write!(out, "{}", dt.format(DEFAULT_TIME_FORMAT));
            }
            out
        })
        .unwrap_or_else(|| "-".to_string())
}
