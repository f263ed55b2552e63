//! Error type for askfile.
//!
//! Only two things can end a run with an error: the directory being browsed cannot be
//! enumerated, or the terminal itself fails. Unreadable children and bad input are
//! recovered locally and never show up here.

use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// The current directory is missing, not a directory, or not readable.
    DirectoryUnreadable { path: PathBuf, source: io::Error },
    /// Reading the input line or writing the screen failed.
    Io(io::Error),
}

impl Error {
    pub(crate) fn directory_unreadable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::DirectoryUnreadable {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DirectoryUnreadable { path, source } => {
                write!(f, "cannot read directory '{}': {}", path.display(), source)
            }
            Error::Io(e) => write!(f, "terminal i/o failed: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::DirectoryUnreadable { source, .. } => Some(source),
            Error::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}
