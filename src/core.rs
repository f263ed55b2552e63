//! Core runtime logic for askfile.
//!
//! This module contains the non-UI "engine" pieces used by the navigator:
//! - [vfs]: the filesystem seam (see [FileSystem], [OsFileSystem], [MemFileSystem]).
//! - [fm]: entry snapshots and directory listing (see [list_entries], [Entry], [Listing]).
//! - [formatter]: sorting, filtering and the text helpers used for display.
//! - [terminal]: screen clearing and line input.
//!
//! Most callers will import [list_entries], [Entry], and [SelectionMode] from this module.

pub mod fm;
pub mod formatter;
pub mod terminal;
pub mod vfs;

pub use fm::{Entry, ExtensionFilter, Listing, SelectionMode, list_entries};
pub use formatter::{
    DEFAULT_TIME_FORMAT, Formatter, format_file_time, pad, shorten, unitsize, wrap,
};
pub use vfs::{DirChildren, EntryMeta, FileSystem, MemFileSystem, OsFileSystem, normalize_lexically};
