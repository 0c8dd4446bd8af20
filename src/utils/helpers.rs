//! Helpers for the navigator.
//!
//! - Color parsing from strings or hex codes
//! - Running the configured editor on a file while the terminal is handed over
//! - Turning the command-line path argument into a normalized absolute path
//! - Setting up the log file

use crate::config::Editor;
use crate::core::error::{NavError, NavResult};
use crate::core::path::PathStack;

use ratatui::style::Color;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Level;

/// Parses a string (color name or hex) into a ratatui::style::color
///
/// Supports standard names (red, green, etc.) as well as hex values (#RRGGBB or #RGB)
pub fn parse_color(s: &str) -> Color {
    match s.to_lowercase().as_str() {
        "default" | "reset" => Color::Reset,
        "yellow" => Color::Yellow,
        "red" => Color::Red,
        "blue" => Color::Blue,
        "green" => Color::Green,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "black" => Color::Black,
        "gray" => Color::Gray,
        "darkgray" => Color::DarkGray,
        _ => {
            if let Some(color) = s.strip_prefix('#') {
                let expanded = match color.len() {
                    6 => Some(color.to_string()),
                    3 => Some(color.chars().map(|c| format!("{}{}", c, c)).collect()),
                    _ => None,
                };
                if let Some(hex) = expanded
                    && let Ok(rgb) = u32::from_str_radix(&hex, 16)
                {
                    return Color::Rgb(
                        ((rgb >> 16) & 0xFF) as u8,
                        ((rgb >> 8) & 0xFF) as u8,
                        (rgb & 0xFF) as u8,
                    );
                }
            }
            // fallback
            Color::Reset
        }
    }
}

/// Opens `file_path` in the configured editor and blocks until it exits.
///
/// Leaves raw mode and the alternate screen while the editor runs. Both are re-entered
/// afterwards even if handing the terminal over failed part way.
///
/// # Errors
/// [NavError::EditorLaunch] if the editor is missing, cannot be started or exits with a
/// non-zero status. [NavError::Terminal] if the terminal cannot be handed over or back; the
/// first such failure is reported.
pub fn open_in_editor(editor: &Editor, file_path: &Path) -> NavResult<()> {
    use crossterm::{
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    };

    let cmd = editor.cmd();
    let launch_error = |reason: String| NavError::EditorLaunch {
        cmd: cmd.to_string(),
        reason,
    };

    if !editor.exists() {
        return Err(launch_error("not found in PATH".to_string()));
    }

    tracing::info!("opening {} with {cmd}", file_path.display());
    let status = with_terminal_handed_over(
        || {
            disable_raw_mode()?;
            execute!(io::stdout(), LeaveAlternateScreen)
        },
        || std::process::Command::new(cmd).arg(file_path).status(),
        || {
            let screen = execute!(io::stdout(), EnterAlternateScreen);
            let raw = enable_raw_mode();
            screen.and(raw)
        },
    )?;

    match status {
        Ok(status) if status.success() => Ok(()),
        Ok(status) => Err(launch_error(format!("exited with {status}"))),
        Err(e) => Err(launch_error(e.to_string())),
    }
}

/// Runs `run` between `hand_over` and `reclaim`.
///
/// `reclaim` always runs, also when `hand_over` failed, in which case `run` is skipped.
/// The first terminal error wins.
fn with_terminal_handed_over<T>(
    hand_over: impl FnOnce() -> io::Result<()>,
    run: impl FnOnce() -> T,
    reclaim: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
    let outcome = hand_over().map(|()| run());
    let reclaimed = reclaim();
    let value = outcome?;
    reclaimed?;
    Ok(value)
}

/// Turns the path given on the command line into an absolute path.
///
/// `~` expands to the home directory and relative paths are taken from the working
/// directory. Existing paths are canonicalized so that `..` segments and symlinks in the
/// argument do not leak into later ascends.
pub fn resolve_initial_dir(arg: &str) -> PathBuf {
    let candidate = if arg == "~" || arg.starts_with("~/") {
        match dirs::home_dir() {
            Some(home) => home.join(arg.trim_start_matches('~').trim_start_matches('/')),
            None => PathBuf::from(arg),
        }
    } else {
        let p = PathBuf::from(arg);
        if p.is_absolute() {
            p
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(&p))
                .unwrap_or(p)
        }
    };

    fs::canonicalize(&candidate)
        .unwrap_or_else(|_| PathStack::new(&candidate).as_path().to_path_buf())
}

/// Location of the log file: `<cache dir>/sakis-navigator/navigator.log`.
pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("sakis-navigator").join("navigator.log"))
}

/// Routes `tracing` output to the log file so it never draws over the TUI.
///
/// Logging stays off if the file cannot be opened.
pub fn init_logging(level: Level) {
    let Some(path) = log_path() else {
        return;
    };
    if let Some(parent) = path.parent()
        && fs::create_dir_all(parent).is_err()
    {
        return;
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let _ = tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::error;
    use tempfile::tempdir;

    #[test]
    fn parses_names_and_hex() {
        assert_eq!(parse_color("Red"), Color::Red);
        assert_eq!(parse_color("default"), Color::Reset);
        assert_eq!(parse_color("#ff8000"), Color::Rgb(255, 128, 0));
        assert_eq!(parse_color("#0f0"), Color::Rgb(0, 255, 0));
        assert_eq!(parse_color("#12"), Color::Reset);
        assert_eq!(parse_color("#zzzzzz"), Color::Reset);
    }

    #[test]
    fn resolves_absolute_paths_without_trailing_separator() -> Result<(), Box<dyn error::Error>> {
        let dir = tempdir()?;
        let canonical = fs::canonicalize(dir.path())?;
        let arg = format!("{}/", dir.path().display());

        assert_eq!(resolve_initial_dir(&arg), canonical);
        assert!(!resolve_initial_dir(&arg).as_os_str().to_string_lossy().ends_with('/'));
        Ok(())
    }

    #[test]
    fn resolves_dotdot_segments() -> Result<(), Box<dyn error::Error>> {
        let dir = tempdir()?;
        fs::create_dir(dir.path().join("sub"))?;
        let canonical = fs::canonicalize(dir.path())?;
        let arg = format!("{}/sub/..", dir.path().display());

        assert_eq!(resolve_initial_dir(&arg), canonical);
        Ok(())
    }

    #[test]
    fn missing_paths_are_kept_for_the_scan_to_reject() {
        let resolved = resolve_initial_dir("/definitely/not/here/");
        assert_eq!(resolved.as_os_str(), "/definitely/not/here");
    }

    #[test]
    fn root_stays_root() {
        assert_eq!(resolve_initial_dir("/").as_os_str(), "/");
    }

    #[test]
    fn missing_editor_is_a_launch_error() -> Result<(), Box<dyn error::Error>> {
        let editor: Editor = toml::from_str(r#"cmd = "surely-not-an-editor-4711""#)?;
        let result = open_in_editor(&editor, Path::new("/tmp/whatever.txt"));
        assert!(matches!(
            result,
            Err(NavError::EditorLaunch { ref cmd, .. }) if cmd == "surely-not-an-editor-4711"
        ));
        Ok(())
    }

    #[test]
    fn failed_hand_over_still_reclaims_and_skips_the_editor() {
        use std::cell::Cell;

        let ran = Cell::new(false);
        let reclaimed = Cell::new(false);
        let result = with_terminal_handed_over(
            || Err(io::Error::other("leave failed")),
            || ran.set(true),
            || {
                reclaimed.set(true);
                Ok(())
            },
        );

        assert!(matches!(result, Err(ref e) if e.to_string() == "leave failed"));
        assert!(!ran.get());
        assert!(reclaimed.get());
    }

    #[test]
    fn reclaim_failure_is_reported_after_the_editor_ran() {
        use std::cell::Cell;

        let ran = Cell::new(false);
        let result = with_terminal_handed_over(
            || Ok(()),
            || ran.set(true),
            || Err(io::Error::other("enter failed")),
        );

        assert!(matches!(result, Err(ref e) if e.to_string() == "enter failed"));
        assert!(ran.get());
    }

    #[test]
    fn first_terminal_error_wins() {
        let result = with_terminal_handed_over(
            || Err(io::Error::other("first")),
            || 1,
            || Err(io::Error::other("second")),
        );
        assert!(matches!(result, Err(ref e) if e.to_string() == "first"));
        assert!(matches!(
            with_terminal_handed_over(|| Ok(()), || 7, || Ok(())),
            Ok(7)
        ));
    }
}
