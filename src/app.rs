//! Application state and input handling for the navigator.
//!
//! - [keymap]: config key strings to [Action]s.
//! - [state]: the [Navigator] state machine driven by key presses.

pub mod keymap;
pub mod state;

pub use keymap::{Action, Keymap};
pub use state::{KeypressResult, Navigator};
