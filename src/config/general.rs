//! The general configuration settings for askfile.
//!
//! This module defines the [General] struct for deserializing the `[general]` table
//! of askfile.toml: whether dotfiles are listed and where logs go.

use serde::Deserialize;

use std::path::{Path, PathBuf};

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct General {
    show_hidden: bool,
    log_file: Option<PathBuf>,
}

impl Default for General {
    fn default() -> Self {
        General {
            show_hidden: true,
            log_file: None,
        }
    }
}

impl General {
    #[inline]
    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    #[inline]
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }
}
