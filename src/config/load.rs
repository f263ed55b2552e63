//! The main config loading module for askfile.
//!
//! Handles loading and deserializing settings from `askfile.toml`.
//!
//! Provides the main [Config] struct, as well as the [RawConfig] used for parsing.
//!
//! Also writes the default config file for `askfile --init`.

use crate::config::{Display, General};
use crate::ui::RenderOptions;
use crate::utils::get_home;

use serde::Deserialize;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

const DEFAULT_CONFIG: &str = r##"# askfile.toml - default configuration for askfile
#
# Commented values are the internal defaults.

[general]
# List dotfiles and dot-directories
show_hidden = true
# Write logs to this file (RUST_LOG controls the level, ASKFILE_LOG overrides the path)
# log_file = "/tmp/askfile.log"

[display]
# Clear the terminal before every redraw
clear_screen = true
# strftime pattern for the "Last Modified" column
# time_format = "%Y-%m-%d %H:%M:%S"
# Column at which the current path wraps
# path_width = 58
"##;

/// Raw configuration as read from the toml file.
/// Every table is optional and falls back to its defaults.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    general: General,
    display: Display,
}

/// Main configuration struct for askfile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    general: General,
    display: Display,
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: raw.general,
            display: raw.display,
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    /// A missing file silently gives the defaults; a broken one gives the defaults with a warning.
    pub fn load() -> Self {
        Self::load_from(&Self::default_path())
    }

    /// Load configuration from `path`.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<RawConfig>(&content) {
                Ok(raw) => raw.into(),
                Err(e) => {
                    eprintln!("[askfile] Error parsing config {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("[askfile] Cannot read config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    // Getters

    #[inline]
    pub fn general(&self) -> &General {
        &self.general
    }

    #[inline]
    pub fn display(&self) -> &Display {
        &self.display
    }

    pub fn render_options(&self) -> RenderOptions {
        self.display.render_options()
    }

    /// Determine the default configuration file path.
    /// Checks the ASKFILE_CONFIG environment variable first,
    /// then XDG_CONFIG_HOME,
    /// then defaults to ~/.config/askfile/askfile.toml.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("ASKFILE_CONFIG") {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("askfile/askfile.toml");
        }

        if let Some(home) = get_home() {
            return home.join(".config/askfile/askfile.toml");
        }
        PathBuf::from("askfile.toml")
    }

    /// Generate a default configuration file at the specified path.
    /// If the file already exists, returns an error.
    pub fn generate_default(path: &Path) -> io::Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {:?}", path),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_CONFIG)
    }
}
