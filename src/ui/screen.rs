//! Render backends.
//!
//! The renderer only knows the [Screen] trait. [TerminalScreen] buffers one frame and paints
//! it with ratatui over crossterm on [Screen::present]; [MemoryScreen] keeps the frame for
//! inspection in tests.

use crate::config::Theme;
use crate::ui::render::{StatusLine, draw_into};

use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::collections::BTreeMap;
use std::io::{self, Stdout};

/// Minimal drawing surface: numbered rows plus one status line.
pub trait Screen {
    /// Forgets everything drawn since the last present.
    fn clear(&mut self);
    fn draw_row(&mut self, row: usize, highlighted: bool, text: &str);
    fn draw_status(&mut self, status: &StatusLine);
    /// Makes the frame visible.
    fn present(&mut self) -> io::Result<()>;
}

/// One row as handed to a [Screen].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawnRow {
    pub row: usize,
    pub highlighted: bool,
    pub text: String,
}

/// Production backend drawing into the alternate screen.
pub struct TerminalScreen<'t> {
    terminal: &'t mut Terminal<CrosstermBackend<Stdout>>,
    theme: &'t Theme,
    rows: Vec<DrawnRow>,
    status: Option<StatusLine>,
}

impl<'t> TerminalScreen<'t> {
    pub fn new(terminal: &'t mut Terminal<CrosstermBackend<Stdout>>, theme: &'t Theme) -> Self {
        Self {
            terminal,
            theme,
            rows: Vec::new(),
            status: None,
        }
    }
}

impl Screen for TerminalScreen<'_> {
    fn clear(&mut self) {
        self.rows.clear();
        self.status = None;
    }

    fn draw_row(&mut self, row: usize, highlighted: bool, text: &str) {
        self.rows.push(DrawnRow {
            row,
            highlighted,
            text: text.to_string(),
        });
    }

    fn draw_status(&mut self, status: &StatusLine) {
        self.status = Some(status.clone());
    }

    fn present(&mut self) -> io::Result<()> {
        let Self {
            terminal,
            theme,
            rows,
            status,
        } = self;
        terminal.draw(|f| {
            let area = f.area();
            draw_into(area, f.buffer_mut(), rows, status.as_ref(), theme);
        })?;
        Ok(())
    }
}

/// Frame kept in memory. Used by tests and anything that wants the text without a terminal.
#[derive(Debug, Default)]
pub struct MemoryScreen {
    rows: BTreeMap<usize, (bool, String)>,
    status: Option<StatusLine>,
    presents: usize,
}

impl MemoryScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row(&self, row: usize) -> Option<&str> {
        self.rows.get(&row).map(|(_, text)| text.as_str())
    }

    pub fn rows(&self) -> Vec<&str> {
        self.rows.values().map(|(_, text)| text.as_str()).collect()
    }

    pub fn highlighted_rows(&self) -> Vec<usize> {
        self.rows
            .iter()
            .filter(|(_, (highlighted, _))| *highlighted)
            .map(|(row, _)| *row)
            .collect()
    }

    pub fn status(&self) -> Option<&StatusLine> {
        self.status.as_ref()
    }

    pub fn presents(&self) -> usize {
        self.presents
    }
}

impl Screen for MemoryScreen {
    fn clear(&mut self) {
        self.rows.clear();
        self.status = None;
    }

    fn draw_row(&mut self, row: usize, highlighted: bool, text: &str) {
        self.rows.insert(row, (highlighted, text.to_string()));
    }

    fn draw_status(&mut self, status: &StatusLine) {
        self.status = Some(status.clone());
    }

    fn present(&mut self) -> io::Result<()> {
        self.presents += 1;
        Ok(())
    }
}
