//! Miscellaneous utility functions for the navigator.
//!
//! This module holds the [helpers] submodule, which provides commonly used utilities such as:
//! - Color parsing
//! - Opening a file in the configured editor
//! - Resolving the startup path argument
//! - Log file setup
//!
//! and the [cli] submodule with the command-line handling of the `snav` binary.

pub mod cli;
pub mod helpers;

pub use helpers::{init_logging, log_path, open_in_editor, parse_color, resolve_initial_dir};
