//! askfile: an interactive terminal path selector.
//!
//! The shipped application is the `askfile` binary (`src/main.rs`). The library exposes
//! the same selector to other programs through [select_path], so a tool that needs the
//! user to pick a CSV file can simply ask for one:
//!
//! ```no_run
//! use askfile::{ExtensionFilter, SelectionMode};
//!
//! let picked = askfile::select_path(SelectionMode::File, Some(ExtensionFilter::parse("csv")))?;
//! if let Some(path) = picked {
//!     println!("reading {}", path.display());
//! }
//! # Ok::<(), askfile::Error>(())
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod ui;
pub mod utils;

mod error;

pub use app::{Navigator, Outcome};
pub use config::Config;
pub use core::{Entry, ExtensionFilter, FileSystem, OsFileSystem, SelectionMode};
pub use error::Error;

use std::io::{self, IsTerminal};
use std::path::PathBuf;

/// Lets the user pick a path on the real filesystem, starting in the working directory.
///
/// `filter` is ignored when `mode` is [SelectionMode::Directory].
/// # Returns
/// The absolute selected path, or `None` if the user quit.
pub fn select_path(
    mode: SelectionMode,
    filter: Option<ExtensionFilter>,
) -> Result<Option<PathBuf>, Error> {
    let config = Config::load();
    let start = std::env::current_dir()?;
    select_path_in(&config, mode, filter, start)
}

/// Like [select_path] with an explicit config and start directory.
///
/// The screen goes to stdout when it is a terminal and to stderr otherwise, so only
/// the caller's own output reaches a pipe or `$(...)`.
pub fn select_path_in(
    config: &Config,
    mode: SelectionMode,
    filter: Option<ExtensionFilter>,
    start: PathBuf,
) -> Result<Option<PathBuf>, Error> {
    let mut navigator = Navigator::new(OsFileSystem, mode, filter, start)
        .with_options(config.render_options())
        .with_show_hidden(config.general().show_hidden());

    let mut input = io::stdin().lock();
    let outcome = if io::stdout().is_terminal() {
        navigator.run(&mut input, &mut io::stdout().lock())?
    } else {
        tracing::debug!("stdout is not a terminal, drawing on stderr");
        navigator.run(&mut input, &mut io::stderr().lock())?
    };
    Ok(outcome.into_path())
}
