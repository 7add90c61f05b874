//! Theme request model
//!
//! A [`ThemeRequest`] is built from operator input, consumed once to
//! generate files, then dropped. The id and name newtypes can only be
//! obtained through validation.

use crate::error::{Result, ThemeError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Reserved id prefix; the built-in theme lives under this name
pub const RESERVED_ID_PREFIX: &str = "default";

static THEME_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid theme id pattern"));

static THEME_NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_\- ]+$").expect("valid theme name pattern"));

const THEME_ID_MESSAGE: &str = "Theme id must contain only numbers, letters, underscores (_), or dashes (-), and not start with \"default\"";

const THEME_NAME_MESSAGE: &str =
    "Theme name must contain only numbers, letters, underscores (_), dashes (-), or spaces ( )";

/// Unique theme identifier, used as directory and file name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ThemeId(String);

impl ThemeId {
    /// Validate and wrap an identifier
    pub fn parse(value: &str) -> Result<Self> {
        if value.is_empty() {
            return Err(ThemeError::validation("themeId", "a value is required"));
        }
        if value.starts_with(RESERVED_ID_PREFIX) || !THEME_ID_PATTERN.is_match(value) {
            return Err(ThemeError::validation("themeId", THEME_ID_MESSAGE));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ThemeId {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ThemeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Human readable theme name, written into the package descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeName(String);

impl ThemeName {
    /// Validate and wrap a display name
    pub fn parse(value: &str) -> Result<Self> {
        if value.is_empty() {
            return Err(ThemeError::validation("themeName", "a value is required"));
        }
        if !THEME_NAME_PATTERN.is_match(value) {
            return Err(ThemeError::validation("themeName", THEME_NAME_MESSAGE));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ThemeName {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parse a yes/no answer
///
/// Accepts `true`/`false`, `t`/`f`, `yes`/`no` and `y`/`n`, ignoring case.
pub fn parse_flag(field: &'static str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" => Ok(true),
        "false" | "f" | "no" | "n" => Ok(false),
        "" => Err(ThemeError::validation(field, "a value is required")),
        other => Err(ThemeError::validation(
            field,
            format!("expected true or false, got \"{other}\""),
        )),
    }
}

/// A validated request to scaffold one theme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeRequest {
    pub theme_id: ThemeId,
    pub theme_name: ThemeName,
    /// Whether the theme is published for all clients (adds `package.json`)
    pub is_distributed: bool,
}

impl ThemeRequest {
    pub fn new(theme_id: ThemeId, theme_name: ThemeName, is_distributed: bool) -> Self {
        Self {
            theme_id,
            theme_name,
            is_distributed,
        }
    }

    /// Validate raw field values in one go
    pub fn from_raw(theme_id: &str, theme_name: &str, is_distributed: bool) -> Result<Self> {
        Ok(Self::new(
            ThemeId::parse(theme_id)?,
            ThemeName::parse(theme_name)?,
            is_distributed,
        ))
    }

    /// Number of files the request will generate
    pub fn expected_file_count(&self) -> usize {
        if self.is_distributed { 4 } else { 3 }
    }
}
