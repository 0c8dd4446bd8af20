//! The general configuration settings for the navigator.
//!
//! This module defines the [General] struct for deserializing the `[general]` table
//! of navigator.toml and the [InternalGeneral] struct with validated values for internal use.

use crate::core::catalog::DEFAULT_NAME_CHARS;

use serde::Deserialize;
use std::str::FromStr;
use tracing::Level;

/// Smallest accepted name bound.
pub const MIN_NAME_CHARS: usize = 4;
/// Largest accepted name bound.
pub const MAX_NAME_CHARS: usize = 255;
/// Rows kept free below the listing for the status line.
pub const DEFAULT_RESERVED_ROWS: usize = 1;
pub const MAX_RESERVED_ROWS: usize = 4;

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct General {
    max_name_chars: usize,
    reserved_rows: usize,
    log_level: String,
}

impl Default for General {
    fn default() -> Self {
        General {
            max_name_chars: DEFAULT_NAME_CHARS,
            reserved_rows: DEFAULT_RESERVED_ROWS,
            log_level: "info".into(),
        }
    }
}

#[derive(Debug)]
pub struct InternalGeneral {
    max_name_chars: usize,
    reserved_rows: usize,
    log_level: Level,
}

impl From<General> for InternalGeneral {
    fn from(g: General) -> Self {
        Self {
            max_name_chars: clamp_setting(
                "max_name_chars",
                g.max_name_chars,
                MIN_NAME_CHARS,
                MAX_NAME_CHARS,
            ),
            reserved_rows: clamp_setting(
                "reserved_rows",
                g.reserved_rows,
                DEFAULT_RESERVED_ROWS,
                MAX_RESERVED_ROWS,
            ),
            log_level: parse_level(&g.log_level),
        }
    }
}

impl Default for InternalGeneral {
    fn default() -> Self {
        InternalGeneral::from(General::default())
    }
}

impl InternalGeneral {
    #[inline]
    pub fn max_name_chars(&self) -> usize {
        self.max_name_chars
    }

    #[inline]
    pub fn reserved_rows(&self) -> usize {
        self.reserved_rows
    }

    #[inline]
    pub fn log_level(&self) -> Level {
        self.log_level
    }
}

/// Clamps a numeric setting into range, warning when the configured value was out of it.
fn clamp_setting(name: &str, value: usize, min: usize, max: usize) -> usize {
    let clamped = value.clamp(min, max);
    if clamped != value {
        eprintln!(
            "[Warning] {}={} out of range ({}..={}), clamped to {}",
            name, value, min, max, clamped
        );
    }
    clamped
}

fn parse_level(s: &str) -> Level {
    match Level::from_str(s.trim()) {
        Ok(level) => level,
        Err(_) => {
            eprintln!("[Warning] log_level=\"{}\" is not a valid level, using info", s);
            Level::INFO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let general = InternalGeneral::default();
        assert_eq!(general.max_name_chars(), 20);
        assert_eq!(general.reserved_rows(), 1);
        assert_eq!(general.log_level(), Level::INFO);
    }

    #[test]
    fn out_of_range_values_are_clamped() -> Result<(), Box<dyn std::error::Error>> {
        let raw: General = toml::from_str(
            r#"
            max_name_chars = 1
            reserved_rows = 40
            "#,
        )?;
        let general = InternalGeneral::from(raw);
        assert_eq!(general.max_name_chars(), MIN_NAME_CHARS);
        assert_eq!(general.reserved_rows(), MAX_RESERVED_ROWS);
        Ok(())
    }

    #[test]
    fn log_level_is_parsed_case_insensitively() -> Result<(), Box<dyn std::error::Error>> {
        let raw: General = toml::from_str(r#"log_level = "DEBUG""#)?;
        assert_eq!(InternalGeneral::from(raw).log_level(), Level::DEBUG);

        let raw: General = toml::from_str(r#"log_level = "loud""#)?;
        assert_eq!(InternalGeneral::from(raw).log_level(), Level::INFO);
        Ok(())
    }
}
