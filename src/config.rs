//! Configuration module for the navigator.
//!
//! Loads `navigator.toml` (see [load]) and exposes the processed [Config].
//! - [general]: name bound, reserved status rows, log level.
//! - [input]: key bindings and the editor command.
//! - [theme]: selection, status line and notice colors.

pub mod general;
pub mod input;
pub mod load;
pub mod theme;

pub use general::{General, InternalGeneral};
pub use input::{Editor, Keys};
pub use load::{Config, RawConfig};
pub use theme::Theme;
