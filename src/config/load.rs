//! The main config loading module for the navigator.
//!
//! Handles loading and deserializing settings from `navigator.toml`.
//!
//! Provides the main [Config] struct, as well as the internal [RawConfig] used for parsing.
//! A missing or broken file never stops the navigator: it falls back to the internal defaults,
//! which reproduce the classic behaviour.

use crate::config::Theme;
use crate::config::{Editor, Keys};
use crate::config::{General, InternalGeneral};

use serde::Deserialize;
use std::{fs, io, path::Path, path::PathBuf};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "SAKIS_NAV_CONFIG";

/// Raw configuration as read from the toml file
/// It uses owned types and is then converted into the main [Config] struct.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    general: General,
    theme: Theme,
    editor: Editor,
    keys: Keys,
}

/// Main configuration struct for the navigator
#[derive(Debug)]
pub struct Config {
    general: InternalGeneral,
    theme: Theme,
    editor: Editor,
    keys: Keys,
}

/// Conversion from RawConfig to Config
impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: InternalGeneral::from(raw.general),
            theme: raw.theme,
            editor: raw.editor,
            keys: raw.keys,
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    /// If the file does not exist or fails to parse, returns the default configuration.
    ///
    /// Called by the entry point before the terminal is taken over.
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load configuration from `path`, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<RawConfig>(&content) {
                Ok(raw) => raw.into(),
                Err(e) => {
                    eprintln!("Error parsing config {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Error reading config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    // Getters

    #[inline]
    pub fn general(&self) -> &InternalGeneral {
        &self.general
    }

    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[inline]
    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    #[inline]
    pub fn keys(&self) -> &Keys {
        &self.keys
    }

    /// Determine the configuration file path.
    /// Checks the SAKIS_NAV_CONFIG environment variable first,
    /// then the platform config dir (~/.config/sakis-navigator/navigator.toml on Linux).
    pub fn default_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("sakis-navigator").join("navigator.toml"))
    }

    /// Generate a default configuration file at the specified path.
    /// If the file already exists, returns an error.
    pub fn generate_default(path: &Path) -> io::Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {:?}", path),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_TOML)?;
        println!("Default config generated at {:?}", path);
        Ok(())
    }
}

/// Default configuration options
impl Default for Config {
    fn default() -> Self {
        RawConfig::default().into()
    }
}

const DEFAULT_TOML: &str = r##"# navigator.toml - default configuration for sakis-navigator
#
# Commented values are the internal defaults.
# Colors take terminal color names ("cyan") or hex codes ("#RRGGBB").

[general]
# Names longer than this are cut in the listing (4..=255)
# max_name_chars = 20
# Rows kept free below the listing for the status line (1..=4)
# reserved_rows = 1
# Log file verbosity: "error", "warn", "info", "debug" or "trace"
# log_level = "info"

[editor]
# cmd = "nvim"

# [theme.selection]
# fg = "black"
# bg = "white"

# [theme.entry]
# fg = "default"
# bg = "default"

# [theme.status]
# fg = "default"
# bg = "default"

# [theme.notice]
# fg = "red"
# bg = "default"

# [keys]
# go_up = ["w", "W", "up"]
# go_down = ["s", "S", "down"]
# open = ["enter"]
# quit = ["q", "Q"]
"##;
