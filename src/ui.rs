//! Text user interface for askfile.
//!
//! [render] draws the listing screen shown before every prompt.

pub mod render;

pub use render::{
    RenderOptions, format_row, prompt_text, render_directory, subtitle, title,
};
