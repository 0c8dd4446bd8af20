//! Drawing for the navigator.
//!
//! - [render]: turns the navigator state into row and status line text and paints it with ratatui.
//! - [screen]: the [Screen] seam the renderer draws through, with the terminal and in-memory
//!   implementations.

pub mod render;
pub mod screen;

pub use render::{StatusLine, draw_into, format_row, render};
pub use screen::{MemoryScreen, Screen, TerminalScreen};
