//! Terminal rendering and event loop for the navigator.
//!
//! Handles setup/teardown of raw mode and the alternate screen, redraws,
//! and events (keypress, resize) to the navigator.

use crate::app::{KeypressResult, Navigator};
use crate::config::Theme;
use crate::ui::{self, TerminalScreen};
use crate::utils::open_in_editor;

use chrono::Local;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io::{self, Stdout, Write};

/// Raw mode, alternate screen and hidden cursor for as long as the value lives.
///
/// Dropping it restores the terminal, on every return path.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    pub fn start() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide) {
            restore(&mut stdout);
            return Err(e);
        }

        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(e) => {
                restore(&mut io::stdout());
                Err(e)
            }
        }
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore(self.terminal.backend_mut());
    }
}

fn restore<W: Write>(out: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(out, LeaveAlternateScreen, Show);
}

/// Takes over the terminal and runs the main event loop.
///
/// Blocks until quit. Returns an std::io::Error if terminal setup or drawing fails.
pub fn run_terminal(nav: &mut Navigator) -> io::Result<()> {
    let mut session = TerminalSession::start()?;
    event_loop(session.terminal_mut(), nav)
}

/// Main event loop: draws, blocks on the next event and dispatches it. Returns on quit.
fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    nav: &mut Navigator,
) -> io::Result<()> {
    let config = nav.config();
    let reserved_rows = config.general().reserved_rows();

    loop {
        draw(terminal, nav, config.theme(), reserved_rows)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match nav.handle_keypress(key) {
                KeypressResult::Quit => break,
                KeypressResult::OpenEditor(path) => {
                    let result = open_in_editor(config.editor(), &path);
                    nav.editor_finished(result);
                    // full clear/reset after the editor owned the screen
                    terminal.clear()?;
                }
                KeypressResult::Continue => {}
            },
            // Resize: redrawn with the new height at the top of the loop, before the next read.
            Event::Resize(width, height) => {
                tracing::debug!("resized to {width}x{height}");
            }
            _ => {}
        }
    }
    tracing::info!("quit");
    Ok(())
}

fn draw(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    nav: &Navigator,
    theme: &Theme,
    reserved_rows: usize,
) -> io::Result<()> {
    let size = terminal.size()?;
    let visible_rows = usize::from(size.height).saturating_sub(reserved_rows);
    let now = Local::now().format("%H:%M:%S").to_string();

    let mut screen = TerminalScreen::new(terminal, theme);
    ui::render(&mut screen, nav, visible_rows, &now)
}
