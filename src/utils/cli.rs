//! Command-line argument parsing and help for the navigator.
//!
//! This module handles the few flags used for config initialization and help.
//!
//! When invoked with no args/flags (snav), the navigator starts at the home directory.

use crate::config::Config;

#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    RunApp,
    RunAppAtPath(String),
    Exit,
}

/// Reads `std::env::args` and acts on informational flags.
pub fn handle_args() -> CliAction {
    let args: Vec<String> = std::env::args().collect();
    parse_args(&args)
}

/// Decides what to do for a full argument vector (program name first).
pub fn parse_args(args: &[String]) -> CliAction {
    if args.len() < 2 {
        return CliAction::RunApp;
    }

    if args.len() > 2 {
        eprintln!("Error: snav accepts only one argument at a time.");
        eprintln!("Usage: snav [PATH] or snav [OPTION]");
        return CliAction::Exit;
    }

    match args[1].as_str() {
        "--version" | "-v" => {
            print_version();
            CliAction::Exit
        }
        "-h" | "--help" => {
            print_help();
            CliAction::Exit
        }
        "--keybinds" | "--keybind" | "--key" => {
            print_keybinds();
            CliAction::Exit
        }
        "--init" => {
            match Config::default_path() {
                Some(path) => {
                    if let Err(e) = Config::generate_default(&path) {
                        eprintln!("Error: {}", e);
                    }
                }
                None => eprintln!("Error: no config directory available on this system"),
            }
            CliAction::Exit
        }
        arg if !arg.starts_with('-') && !arg.trim().is_empty() => {
            CliAction::RunAppAtPath(arg.to_string())
        }
        arg => {
            eprintln!("Unknown argument: {}", arg);
            eprintln!("Try --help for available options");
            CliAction::Exit
        }
    }
}

fn print_version() {
    println!("snav {}", env!("CARGO_PKG_VERSION"));
}

fn print_help() {
    println!(
        r#"snav - Sakis Navigator, a minimal terminal directory browser

USAGE:
  snav [PATH]

PATH:
  Directory to open (defaults to the home directory)

OPTIONS:
      --init              Generate a commented default configuration
      --keybinds          Display the default keybinds
  -h, --help              Print help information
  -v, --version           Display the installed version

ENVIRONMENT:
  SAKIS_NAV_CONFIG        Override the default config path
"#
    );
}

const KEYBINDS_TEXT: &str = r##"
=========================
 Key Bindings
=========================
[keys]
  go_up                     ["w", "W", "up"]
  go_down                   ["s", "S", "down"]
  open                      ["enter"]     (directories are entered, files open in the editor)
  quit                      ["q", "Q"]

  Syntax Reference:
    Modifiers: <c-x> (Ctrl), <m-x>/<a-x> (Alt/Meta), <s-x> (Shift)
    Standard:  ctrl+x, alt+x, shift+x, meta+x
    Special:   " ", "space", "back", "enter", "esc", "tab"

  Note:
    - Shorthand (c-, m-, s-) only works inside brackets <>.
    - Selecting ".." and pressing open goes to the parent directory.
"##;

fn print_keybinds() {
    println!("{}", KEYBINDS_TEXT);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_arguments_runs_at_home() {
        assert_eq!(parse_args(&args(&["snav"])), CliAction::RunApp);
    }

    #[test]
    fn path_argument_runs_there() {
        assert_eq!(
            parse_args(&args(&["snav", "/var/log"])),
            CliAction::RunAppAtPath("/var/log".into())
        );
        assert_eq!(
            parse_args(&args(&["snav", "relative/dir"])),
            CliAction::RunAppAtPath("relative/dir".into())
        );
    }

    #[test]
    fn informational_flags_exit() {
        assert_eq!(parse_args(&args(&["snav", "--version"])), CliAction::Exit);
        assert_eq!(parse_args(&args(&["snav", "-h"])), CliAction::Exit);
        assert_eq!(parse_args(&args(&["snav", "--keybinds"])), CliAction::Exit);
    }

    #[test]
    fn unknown_flags_and_extra_arguments_exit() {
        assert_eq!(parse_args(&args(&["snav", "--bogus"])), CliAction::Exit);
        assert_eq!(parse_args(&args(&["snav", "a", "b"])), CliAction::Exit);
        assert_eq!(parse_args(&args(&["snav", "  "])), CliAction::Exit);
    }
}
