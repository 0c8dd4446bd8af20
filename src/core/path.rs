//! Current-path handling for the navigator.
//!
//! The text helpers ([descend], [ascend], [normalize]) work on `/`-separated absolute path
//! strings. [PathStack] applies the same arithmetic to the OS path it owns.
//! Nothing in here touches the filesystem: a path that no longer exists is only detected
//! when the next catalog build fails.

use crate::core::error::{NavError, NavResult};

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// The root marker. Ascending from here stays here.
pub const ROOT: &str = "/";

/// Resolves the starting directory: the user's home directory.
///
/// # Errors
/// [NavError::HomeResolution] if no home directory can be determined. Callers fall back to
/// [ROOT].
pub fn init() -> NavResult<String> {
    let home = dirs::home_dir().ok_or(NavError::HomeResolution)?;
    let home = home.to_string_lossy();
    if !home.starts_with('/') {
        return Err(NavError::HomeResolution);
    }
    Ok(normalize(&home))
}

/// Appends `/child` to `current`.
pub fn descend(current: &str, child: &str) -> String {
    if current == ROOT {
        format!("/{child}")
    } else {
        format!("{current}/{child}")
    }
}

/// Removes the last `/segment` from `current`, collapsing to [ROOT]. Never returns an empty string.
pub fn ascend(current: &str) -> String {
    match current.rfind('/') {
        Some(0) | None => ROOT.to_string(),
        Some(idx) => current[..idx].to_string(),
    }
}

/// Strips trailing separators, keeping a lone `/` for the root.
pub fn normalize(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        ROOT.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Owns the navigator's current absolute path.
///
/// The path is kept as the OS gave it, so directories whose names are not valid UTF-8 can
/// still be entered and left. A lossy text copy is kept for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStack {
    current: PathBuf,
    display: String,
}

impl PathStack {
    /// Trailing and repeated separators are dropped; an empty path becomes [ROOT].
    pub fn new(path: impl AsRef<Path>) -> Self {
        let current: PathBuf = path.as_ref().components().collect();
        if current.as_os_str().is_empty() {
            return Self::from_clean(PathBuf::from(ROOT));
        }
        Self::from_clean(current)
    }

    fn from_clean(current: PathBuf) -> Self {
        let display = current.to_string_lossy().into_owned();
        Self { current, display }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.display
    }

    #[inline]
    pub fn as_path(&self) -> &Path {
        &self.current
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.current == Path::new(ROOT)
    }

    /// Path of the named child, without moving. Same result as [descend] for UTF-8 names.
    pub fn child(&self, name: &OsStr) -> PathBuf {
        self.current.join(name)
    }

    /// Path of the parent, without moving. Same result as [ascend]; the root stays the root.
    pub fn parent(&self) -> PathBuf {
        self.current
            .parent()
            .map_or_else(|| PathBuf::from(ROOT), Path::to_path_buf)
    }

    /// Replaces the current path. Used once a catalog build for `path` has succeeded.
    pub fn set(&mut self, path: PathBuf) {
        *self = Self::new(path);
    }
}
