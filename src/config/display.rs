//! Display configuration options for askfile
//!
//! This module defines the `[display]` options which are read from the askfile.toml
//! configuration file. The table layout itself is fixed; only the screen clearing,
//! the timestamp format and the wrap width of the path line can be changed.

use crate::core::DEFAULT_TIME_FORMAT;
use crate::ui::RenderOptions;
use crate::ui::render::DEFAULT_PATH_WIDTH;
use crate::utils::clamp_path_width;

use serde::Deserialize;

/// Display configuration options
///
/// Default values are provided for all options so a partial `[display]` table works.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Display {
    clear_screen: bool,
    time_format: String,
    path_width: usize,
}

impl Default for Display {
    fn default() -> Self {
        Display {
            clear_screen: true,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            path_width: DEFAULT_PATH_WIDTH,
        }
    }
}

impl Display {
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

    /// Builds the renderer options, clamping the path width to a usable range.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::new(
            self.clear_screen,
            self.time_format.clone(),
            clamp_path_width(self.path_width),
        )
    }
}
