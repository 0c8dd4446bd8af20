//! Theme configuration options for the navigator
//!
//! This module defines the colors read from the `[theme]` table of navigator.toml.
//! The defaults reproduce the classic look: black on white selection bar, plain status line.

use crate::utils::parse_color;

use ratatui::style::{Color, Style};
use serde::Deserialize;

/// Theme configuration options
/// # Examples
/// ```toml
/// [theme.selection]
/// fg = "black"
/// bg = "#d0d0d0"
/// [theme.notice]
/// fg = "red"
/// ```
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Theme {
    selection: ColorPair,
    entry: ColorPair,
    status: ColorPair,
    notice: ColorPair,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            selection: ColorPair {
                fg: Color::Black,
                bg: Color::White,
            },
            entry: ColorPair::default(),
            status: ColorPair::default(),
            notice: ColorPair {
                fg: Color::Red,
                ..ColorPair::default()
            },
        }
    }
}

impl Theme {
    #[inline]
    pub fn selection_style(&self) -> Style {
        self.selection.as_style()
    }

    #[inline]
    pub fn entry_style(&self) -> Style {
        self.entry.as_style()
    }

    #[inline]
    pub fn status_style(&self) -> Style {
        self.status.as_style()
    }

    /// Notice text keeps the status line background unless it sets its own.
    pub fn notice_style(&self) -> Style {
        self.notice.style_or(&self.status)
    }
}

/// Foreground/background pair as written in the config.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ColorPair {
    #[serde(default, deserialize_with = "deserialize_color_field")]
    fg: Color,
    #[serde(default, deserialize_with = "deserialize_color_field")]
    bg: Color,
}

/// Sets both foreground and background to Color::Reset
impl Default for ColorPair {
    fn default() -> Self {
        Self {
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

impl ColorPair {
    /// Resolves the ColorPair by replacing Reset colors with those from another ColorPair.
    pub fn resolve(&self, other: &ColorPair) -> Self {
        Self {
            fg: if self.fg == Color::Reset {
                other.fg
            } else {
                self.fg
            },
            bg: if self.bg == Color::Reset {
                other.bg
            } else {
                self.bg
            },
        }
    }

    pub fn as_style(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn style_or(&self, fallback: &ColorPair) -> Style {
        self.resolve(fallback).as_style()
    }
}

fn deserialize_color_field<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(parse_color(&s))
}
