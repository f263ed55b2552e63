//! Navigation state and transition logic for askfile.
//!
//! [NavState] owns the current directory together with the run's fixed mode and
//! filter. [NavState::interpret] maps a parsed command onto the listing that was just
//! rendered and yields a [Transition]; [NavState::apply] performs it.

use crate::app::command::{Command, Target};
use crate::core::{Entry, ExtensionFilter, FileSystem, SelectionMode};

use std::path::{Path, PathBuf};

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Selected(PathBuf),
    Cancelled,
}

impl Outcome {
    pub fn into_path(self) -> Option<PathBuf> {
        match self {
            Outcome::Selected(path) => Some(path),
            Outcome::Cancelled => None,
        }
    }
}

/// Why an input line did not change anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    IndexOutOfRange,
    NoSuchName,
    /// The entry matched the listing but vanished or changed kind before it was used.
    Stale,
    /// A file was picked while selecting a directory.
    NotSelectable,
}

/// Result of interpreting one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Ignore(Ignored),
    ChangeDir(PathBuf),
    Select(PathBuf),
    Quit,
}

/// Holds the navigation state of one run.
#[derive(Debug, Clone)]
pub struct NavState {
    current_dir: PathBuf,
    mode: SelectionMode,
    filter: Option<ExtensionFilter>,
}

impl NavState {
    /// Any filter passed with [SelectionMode::Directory] is dropped.
    pub fn new(current_dir: PathBuf, mode: SelectionMode, filter: Option<ExtensionFilter>) -> Self {
        let filter = match mode {
            SelectionMode::File => filter,
            SelectionMode::Directory => {
                if filter.is_some() {
                    tracing::debug!("extension filter ignored in directory mode");
                }
                None
            }
        };
        Self {
            current_dir,
            mode,
            filter,
        }
    }

    // Getters / Accessors

    #[inline]
    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    #[inline]
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    #[inline]
    pub fn filter(&self) -> Option<&ExtensionFilter> {
        self.filter.as_ref()
    }

    /// Maps `command` onto the `entries` that were shown for the current directory.
    ///
    /// The matched entry is checked against `fs` once more, since the directory may
    /// have changed between rendering and reading the input.
    pub fn interpret<F: FileSystem + ?Sized>(
        &self,
        fs: &F,
        command: &Command,
        entries: &[Entry],
    ) -> Transition {
        let (value, select) = match command {
            Command::Quit => return Transition::Quit,
            Command::SelectIntent(v) => (v.as_str(), true),
            Command::Plain(v) => (v.as_str(), false),
            Command::Escape(name) => {
                return match find_by_name(entries, name) {
                    Some(entry) => self.pick(fs, entry, false),
                    None => Transition::Ignore(Ignored::NoSuchName),
                };
            }
        };

        match Target::classify(value) {
            Target::Relative(token) => {
                let resolved = fs.resolve(&self.current_dir.join(token));
                if select && self.mode == SelectionMode::Directory {
                    Transition::Select(resolved)
                } else {
                    Transition::ChangeDir(resolved)
                }
            }
            Target::Index(idx) => match idx
                .and_then(|i| i.checked_sub(1))
                .and_then(|i| entries.get(i))
            {
                Some(entry) => self.pick(fs, entry, select),
                None => Transition::Ignore(Ignored::IndexOutOfRange),
            },
            Target::Name(name) => match find_by_name(entries, name) {
                Some(entry) => self.pick(fs, entry, select),
                None => Transition::Ignore(Ignored::NoSuchName),
            },
        }
    }

    /// Applies the selection rule to a matched entry.
    fn pick<F: FileSystem + ?Sized>(&self, fs: &F, entry: &Entry, select: bool) -> Transition {
        match fs.metadata(entry.path()) {
            Ok(meta) if meta.is_dir() == entry.is_dir() => {}
            _ => return Transition::Ignore(Ignored::Stale),
        }

        let path = entry.path().to_path_buf();
        match (entry.is_dir(), self.mode) {
            (true, SelectionMode::Directory) if select => Transition::Select(path),
            (true, _) => Transition::ChangeDir(path),
            (false, SelectionMode::File) => Transition::Select(path),
            (false, SelectionMode::Directory) => Transition::Ignore(Ignored::NotSelectable),
        }
    }

    /// Performs `transition`. Returns the outcome if the run is over.
    pub fn apply(&mut self, transition: Transition) -> Option<Outcome> {
        match transition {
            Transition::Quit => Some(Outcome::Cancelled),
            Transition::Select(path) => Some(Outcome::Selected(path)),
            Transition::ChangeDir(path) => {
                tracing::debug!(from = %self.current_dir.display(), to = %path.display(), "changing directory");
                self.current_dir = path;
                None
            }
            Transition::Ignore(reason) => {
                tracing::debug!(?reason, "input ignored");
                None
            }
        }
    }
}

/// First entry whose name or stem equals `value`.
fn find_by_name<'a>(entries: &'a [Entry], value: &str) -> Option<&'a Entry> {
    if value.is_empty() {
        return None;
    }
    entries.iter().find(|e| e.matches(value))
}
