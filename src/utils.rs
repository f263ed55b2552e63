//! Miscellaneous utility functions for askfile.
//!
//! This module holds the [helpers] submodule, which provides commonly used utilities such as:
//! - Resolving the home directory and expanding "~" in paths
//! - Printable paths without platform prefixes
//! - Clamping the configured path width
//!
//! [cli] parses the command line of the binary and [logging] sets up tracing.

pub mod cli;
pub mod helpers;
pub mod logging;

pub use helpers::{
    MAX_PATH_WIDTH, MIN_PATH_WIDTH, clamp_path_width, expand_home_path, get_home,
    is_browsable_directory, readable_path,
};
