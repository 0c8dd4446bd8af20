//! main.rs
//! Entry point for snav

use sakis_navigator::app::Navigator;
use sakis_navigator::config::Config;
use sakis_navigator::core::terminal;
use sakis_navigator::utils::cli::{CliAction, handle_args};
use sakis_navigator::utils::{init_logging, resolve_initial_dir};

fn main() -> std::io::Result<()> {
    std::panic::set_hook(Box::new(|info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let mut stdout = std::io::stdout();
        let _ = crossterm::execute!(
            stdout,
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );

        eprintln!("\n[snav] Error occurred: {}", info);

        #[cfg(debug_assertions)]
        {
            let bt = std::backtrace::Backtrace::force_capture();
            eprintln!("\nStack Backtrace:\n{}", bt);
        }
    }));

    let initial_path = match handle_args() {
        CliAction::Exit => return Ok(()),
        CliAction::RunApp => None,
        CliAction::RunAppAtPath(path_arg) => Some(resolve_initial_dir(&path_arg)),
    };

    let config = Config::load();
    init_logging(config.general().log_level());

    let nav = match &initial_path {
        Some(path) => Navigator::from_dir(&config, path),
        None => Navigator::new(&config),
    };
    let mut nav = match nav {
        Ok(nav) => nav,
        Err(e) => {
            tracing::error!("startup failed: {e}");
            eprintln!("\n[snav] Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = terminal::run_terminal(&mut nav) {
        tracing::error!("terminal failure: {e}");
        eprintln!("\n[snav] Error: {}", e);
        std::process::exit(1);
    }
    Ok(())
}
