//! Error types for theme scaffolding
//!
//! Every failure is terminal for the current invocation; nothing is retried.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while collecting a theme request or generating its files
#[derive(Debug, Error)]
pub enum ThemeError {
    /// A prompted field was missing or did not match its pattern
    #[error("invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// A theme with this id already exists when the request is validated
    #[error("destination for \"{id}\" theme already exists - {}", path.display())]
    DuplicateTheme { id: String, path: PathBuf },

    /// The destination appeared between prompting and file creation
    #[error("non-unique theme id {id} provided; theme directory already exists: {}", path.display())]
    DestinationExists { id: String, path: PathBuf },

    /// A template file could not be copied
    #[error("failed to copy file from {} to {}: {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The expected placeholder tokens were not found in a copied file
    #[error("failed to update {} with specified values: no {tokens} placeholder found", file.display())]
    Substitution { file: PathBuf, tokens: String },

    /// Reading an answer from the operator failed
    #[error("failed to gather theme info from user prompts: {0}")]
    Prompt(#[source] std::io::Error),

    /// Any other filesystem failure
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl ThemeError {
    /// Build a validation error for `field`
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Wrap an I/O error with a short description of what was attempted
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Whether the error was raised before any file was touched
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. } | Self::DuplicateTheme { .. } | Self::Prompt(_)
        )
    }
}

/// A result using [`ThemeError`] as the error type
pub type Result<T, E = ThemeError> = std::result::Result<T, E>;
