//! UI renderer implementation.
//!
//! Contains the top-level [render] entry point used by the terminal loop, the row and status
//! line formatting, and [draw_into] which paints a buffered frame into a ratatui buffer.
//!
//! This module should stay "pure rendering": it reads the navigator and config and produces
//! text and widgets, without touching navigation state.

use crate::app::Navigator;
use crate::config::Theme;
use crate::core::catalog::{Entry, EntryCatalog};
use crate::ui::screen::{DrawnRow, Screen};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use std::io;

/// Width of the type column; fits "Directory".
const TYPE_COLUMN_WIDTH: usize = 9;

/// Everything the status line shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub path: String,
    pub selected: usize,
    pub time: String,
    pub notice: Option<String>,
}

impl StatusLine {
    pub fn new(nav: &Navigator, time: &str) -> Self {
        Self {
            path: nav.path().to_string(),
            selected: nav.selected_idx(),
            time: time.to_string(),
            notice: nav.notice().map(str::to_string),
        }
    }

    /// The status text without the notice.
    pub fn text(&self) -> String {
        format!(
            "[Sakis Navigator] Path: {}, Cursor: {:2}  {}",
            self.path, self.selected, self.time
        )
    }
}

/// Draws one frame of the navigator through `screen`.
///
/// `visible_rows` is the number of listing rows; the status line is drawn separately.
pub fn render<S: Screen>(
    screen: &mut S,
    nav: &Navigator,
    visible_rows: usize,
    time: &str,
) -> io::Result<()> {
    screen.clear();

    let catalog = nav.catalog();
    let view = nav.viewport(visible_rows);
    for (row, idx) in view.visible.clone().enumerate() {
        if let Some(entry) = catalog.get(idx) {
            screen.draw_row(row, view.is_highlighted(row), &format_row(idx, entry, catalog));
        }
    }

    screen.draw_status(&StatusLine::new(nav, time));
    screen.present()
}

/// `[NN] <name> <type> <size> KB`, aligned with the catalog's column hints.
///
/// Directories have no size column.
pub fn format_row(idx: usize, entry: &Entry, catalog: &EntryCatalog) -> String {
    let name = entry.display_name(catalog.max_name_chars());
    let name_w = catalog.max_name_width();
    let label = entry.kind().label();

    if entry.is_dir() {
        format!("[{idx:2}] {name:<name_w$} {label}")
    } else {
        let size_w = catalog.max_size_digits();
        format!(
            "[{idx:2}] {name:<name_w$} {label:<TYPE_COLUMN_WIDTH$} {:>size_w$} KB",
            entry.size_kb()
        )
    }
}

/// Paints rows and the status line into `buf`. The status line takes the last row of `area`.
pub fn draw_into(
    area: Rect,
    buf: &mut Buffer,
    rows: &[DrawnRow],
    status: Option<&StatusLine>,
    theme: &Theme,
) {
    if area.height == 0 {
        return;
    }
    let status_y = area.bottom() - 1;

    for drawn in rows {
        let Ok(offset) = u16::try_from(drawn.row) else {
            continue;
        };
        let y = area.y.saturating_add(offset);
        if y >= status_y {
            continue;
        }
        let style = if drawn.highlighted {
            theme.selection_style()
        } else {
            theme.entry_style()
        };
        Paragraph::new(Line::from(Span::styled(drawn.text.as_str(), style))).render(
            Rect {
                x: area.x,
                y,
                width: area.width,
                height: 1,
            },
            buf,
        );
    }

    if let Some(status) = status {
        let mut spans = vec![Span::styled(status.text(), theme.status_style())];
        if let Some(notice) = &status.notice {
            spans.push(Span::styled(format!("  {notice}"), theme.notice_style()));
        }
        Paragraph::new(Line::from(spans))
            .style(theme.status_style())
            .render(
                Rect {
                    x: area.x,
                    y: status_y,
                    width: area.width,
                    height: 1,
                },
                buf,
            );
    }
}
