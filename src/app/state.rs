//! Navigator state and input dispatch.
//!
//! [Navigator] is the only UI state the program has: it owns the current path, the catalog
//! of that path and the cursor into it. One key press is fully handled before the next is
//! read; directory changes rebuild the catalog synchronously and only commit on success.

use crate::app::keymap::{Action, Keymap};
use crate::config::Config;
use crate::core::catalog::{Entry, EntryCatalog};
use crate::core::error::NavResult;
use crate::core::path::{self, PathStack, ROOT};
use crate::core::viewport::{Viewport, ViewportCursor};

use crossterm::event::KeyEvent;
use std::path::{Path, PathBuf};

/// Result of handling one key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeypressResult {
    Continue,
    Quit,
    /// The caller must suspend the screen and run the editor on this path.
    OpenEditor(PathBuf),
}

/// The browsing state: path, catalog and cursor, plus a one-shot notice for the status line.
pub struct Navigator<'a> {
    config: &'a Config,
    keymap: Keymap,
    path: PathStack,
    catalog: EntryCatalog,
    cursor: ViewportCursor,
    notice: Option<String>,
}

impl<'a> Navigator<'a> {
    /// Starts at the user's home directory, falling back to `/`.
    pub fn new(config: &'a Config) -> NavResult<Self> {
        let start = path::init().unwrap_or_else(|e| {
            tracing::warn!("{e}, starting at {ROOT}");
            ROOT.to_string()
        });

        match Self::from_dir(config, &start) {
            Err(e) if start != ROOT => {
                tracing::warn!("{e}, starting at {ROOT}");
                Self::from_dir(config, ROOT)
            }
            res => res,
        }
    }

    /// Starts at `initial_path`.
    ///
    /// # Errors
    /// [crate::core::error::NavError::DirectoryUnreadable] if the directory cannot be scanned.
    pub fn from_dir(config: &'a Config, initial_path: impl AsRef<Path>) -> NavResult<Self> {
        let path = PathStack::new(initial_path);
        let catalog =
            EntryCatalog::build_with_limit(path.as_path(), config.general().max_name_chars())?;
        tracing::info!("starting in {}", path.as_str());

        Ok(Self {
            config,
            keymap: Keymap::from_config(config),
            cursor: ViewportCursor::new(catalog.len()),
            path,
            catalog,
            notice: None,
        })
    }

    // Getters / Accessors

    #[inline]
    pub fn config(&self) -> &'a Config {
        self.config
    }

    #[inline]
    pub fn path(&self) -> &str {
        self.path.as_str()
    }

    #[inline]
    pub fn catalog(&self) -> &EntryCatalog {
        &self.catalog
    }

    #[inline]
    pub fn entries(&self) -> &[Entry] {
        self.catalog.entries()
    }

    #[inline]
    pub fn selected_idx(&self) -> usize {
        self.cursor.selected()
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.catalog.get(self.cursor.selected())
    }

    #[inline]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn viewport(&self, visible_rows: usize) -> Viewport {
        self.cursor.viewport(visible_rows)
    }

    /// Central key handler. Any pending notice is dropped first: it lives for one frame.
    pub fn handle_keypress(&mut self, key: KeyEvent) -> KeypressResult {
        self.notice = None;

        match self.keymap.lookup(key) {
            Some(Action::Quit) => KeypressResult::Quit,
            Some(Action::GoUp) => {
                self.cursor.move_up();
                KeypressResult::Continue
            }
            Some(Action::GoDown) => {
                self.cursor.move_down();
                KeypressResult::Continue
            }
            Some(Action::Open) => self.handle_open(),
            None => KeypressResult::Continue,
        }
    }

    /// Reports the outcome of an editor run requested through [KeypressResult::OpenEditor].
    ///
    /// Nothing is re-scanned afterwards.
    pub fn editor_finished(&mut self, result: NavResult<()>) {
        if let Err(e) = result {
            tracing::warn!("{e}");
            self.notice = Some(e.to_string());
        }
    }

    /// Moves to `target` if it can be scanned. On failure the path, catalog and cursor are
    /// left exactly as they were and the error becomes the status line notice.
    pub fn change_dir(&mut self, target: PathBuf) -> bool {
        match EntryCatalog::build_with_limit(&target, self.config.general().max_name_chars()) {
            Ok(catalog) => {
                tracing::debug!("{} -> {}", self.path.as_str(), target.display());
                self.cursor.reset(catalog.len());
                self.catalog = catalog;
                self.path.set(target);
                true
            }
            Err(e) => {
                tracing::warn!("navigation rejected: {e}");
                self.notice = Some(e.to_string());
                false
            }
        }
    }

    fn handle_open(&mut self) -> KeypressResult {
        let Some(entry) = self.selected_entry() else {
            return KeypressResult::Continue;
        };

        if entry.is_dir() {
            let target = if entry.is_parent() {
                self.path.parent()
            } else {
                self.path.child(entry.os_name())
            };
            self.change_dir(target);
            KeypressResult::Continue
        } else {
            KeypressResult::OpenEditor(self.path.child(entry.os_name()))
        }
    }
}
