//! Input configuration options for the navigator
//!
//! This module defines the key bindings and the editor command which are read from
//! navigator.toml. The default bindings are the classic w/s/q/Enter set plus the arrow keys.

use serde::Deserialize;

/// Key bindings of all actions
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Keys {
    go_up: Vec<String>,
    go_down: Vec<String>,
    open: Vec<String>,
    quit: Vec<String>,
}

/// Editor configuration options
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Editor {
    cmd: String,
}

macro_rules! accessor {
    ($($name:ident),+ $(,)?) => {
        impl Keys {
            $(
                #[inline]
                pub fn $name(&self) -> &[String] {
                    &self.$name
                }
            )+
        }
    };
}

accessor!(go_up, go_down, open, quit);

impl Default for Keys {
    fn default() -> Self {
        Keys {
            go_up: vec!["w".into(), "W".into(), "Up".into()],
            go_down: vec!["s".into(), "S".into(), "Down".into()],
            open: vec!["Enter".into()],
            quit: vec!["q".into(), "Q".into()],
        }
    }
}

impl Editor {
    /// The editor program. A blank `cmd` falls back to `vim`.
    #[inline]
    pub fn cmd(&self) -> &str {
        let trimmed = self.cmd.trim();
        if trimmed.is_empty() { "vim" } else { trimmed }
    }

    pub fn exists(&self) -> bool {
        which::which(self.cmd()).is_ok()
    }
}

impl Default for Editor {
    fn default() -> Self {
        Editor { cmd: "nvim".into() }
    }
}
