//! Error types for the navigator core.
//!
//! Every fallible core operation returns [`NavResult<T>`]. Only startup failures are fatal;
//! everything else is reported on the status line and the navigator stays where it was.

use std::io;

/// Unified error type for the navigator.
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    /// No home directory could be determined at startup.
    #[error("could not resolve a home directory")]
    HomeResolution,

    /// A navigation target could not be opened as a directory.
    #[error("cannot open {path}: {source}")]
    DirectoryUnreadable {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The editor was missing, failed to start or exited abnormally.
    #[error("editor '{cmd}' failed: {reason}")]
    EditorLaunch { cmd: String, reason: String },

    /// Terminal setup or teardown failed.
    #[error(transparent)]
    Terminal(#[from] io::Error),
}

/// Convenience alias used throughout the navigator.
pub type NavResult<T> = Result<T, NavError>;
