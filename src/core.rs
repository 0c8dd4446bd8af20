//! Core runtime logic for the navigator.
//!
//! This module contains the non-UI "engine" pieces used by the application:
//! - [path]: the current-path string and its descend/ascend arithmetic.
//! - [catalog]: scanning one directory into a sorted [EntryCatalog] with alignment hints.
//! - [viewport]: the selection cursor and the scroll window derived from it.
//! - [error]: the [NavError] type shared by all of the above.
//! - [terminal]: terminal setup/teardown and the main crossterm/ratatui event loop.
//!
//! Most callers will import [EntryCatalog], [Entry] and [PathStack] from this module.

pub mod catalog;
pub mod error;
pub mod path;
pub mod terminal;
pub mod viewport;

pub use catalog::{Entry, EntryCatalog, EntryKind};
pub use error::{NavError, NavResult};
pub use path::{PathStack, ROOT};
pub use viewport::{Viewport, ViewportCursor};
