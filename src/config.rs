//! Configuration for askfile.
//!
//! Settings are read from `askfile.toml` (see [Config::default_path]) into [load::RawConfig]
//! and converted into the [Config] used at runtime.
//!
//! - [general]: listing behavior and logging.
//! - [display]: how the screen is drawn.

pub mod display;
pub mod general;
pub mod load;

pub use display::Display;
pub use general::General;
pub use load::{Config, RawConfig};
