//! Application loop for askfile.
//!
//! The [Navigator] lists and renders the current directory, reads one line of input,
//! parses it and applies the resulting transition, until a path is selected or the
//! user quits.
//!
//! Submodules:
//! - [command]: the input line parser.
//! - [nav]: navigation state and the selection rules.

pub mod command;
pub mod nav;

pub use command::Command;
pub use nav::{Ignored, NavState, Outcome, Transition};

use crate::core::terminal::{prompt, read_line};
use crate::core::{ExtensionFilter, FileSystem, Formatter, SelectionMode, list_entries};
use crate::error::Error;
use crate::ui::{RenderOptions, prompt_text, render_directory, subtitle};

use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Drives one selection run over a [FileSystem].
pub struct Navigator<F: FileSystem> {
    fs: F,
    state: NavState,
    formatter: Formatter,
    options: RenderOptions,
}

impl<F: FileSystem> Navigator<F> {
    /// `start_dir` is resolved to an absolute path before the first listing.
    pub fn new(
        fs: F,
        mode: SelectionMode,
        filter: Option<ExtensionFilter>,
        start_dir: impl Into<PathBuf>,
    ) -> Self {
        let start_dir = fs.resolve(&start_dir.into());
        let state = NavState::new(start_dir, mode, filter);
        let formatter = Formatter::new(mode, state.filter().cloned());
        Self {
            fs,
            state,
            formatter,
            options: RenderOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_show_hidden(mut self, show_hidden: bool) -> Self {
        self.formatter = self.formatter.with_show_hidden(show_hidden);
        self
    }

    #[inline]
    pub fn state(&self) -> &NavState {
        &self.state
    }

    /// Runs the prompt loop until a path is selected, the user quits or `input` ends.
    ///
    /// Fails only if the current directory cannot be listed or the terminal breaks.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
    ) -> Result<Outcome, Error> {
        let mode = self.state.mode();
        tracing::info!(
            mode = mode.label(),
            start = %self.state.current_dir().display(),
            filter = ?self.state.filter().map(ToString::to_string),
            "selection started"
        );

        loop {
            let listing = list_entries(&self.fs, self.state.current_dir(), &self.formatter)?;
            render_directory(
                out,
                self.state.current_dir(),
                mode,
                listing.entries(),
                &self.options,
            )?;
            writeln!(out, "{}", subtitle(mode, self.state.filter()))?;
            prompt(out, prompt_text(mode))?;

            let Some(line) = read_line(input)? else {
                tracing::info!("input closed, cancelling");
                return Ok(Outcome::Cancelled);
            };

            let command = command::parse(&line);
            let transition = self.state.interpret(&self.fs, &command, listing.entries());
            if let Some(outcome) = self.state.apply(transition) {
                match &outcome {
                    Outcome::Selected(path) => {
                        tracing::info!(path = %path.display(), "path selected")
                    }
                    Outcome::Cancelled => tracing::info!("selection cancelled"),
                }
                return Ok(outcome);
            }
        }
    }
}
