//! profile-themes - web profile theme tooling
//!
//! This crate scaffolds new web profile themes from a template set and
//! serves the themes directory over HTTP.
//!
//! # Modules
//!
//! - [`request`] - Validated theme request model
//! - [`prompt`] - Interactive collection of a theme request
//! - [`template`] - Template set and placeholder substitution
//! - [`scaffold`] - Theme directory generation and listing
//! - [`server`] - Static file server for the themes directory
//! - [`registry`] - Host page theme registration contract
//! - [`config`] - `.profile-themes.toml` configuration
//! - [`logging`] - Tracing subscriber setup

pub mod config;
pub mod error;
pub mod logging;
pub mod prompt;
pub mod registry;
pub mod request;
pub mod scaffold;
pub mod server;
pub mod template;

// Re-export commonly used types
pub use config::Config;
pub use error::ThemeError;
pub use prompt::{LinePrompter, Prompter, collect_request};
pub use registry::{ProfileNamespace, RegistrationError, ThemeRegistry, WebProfile, install_theme};
pub use request::{ThemeId, ThemeName, ThemeRequest};
pub use scaffold::{GeneratedFile, ScaffoldReport, ThemeScaffolder, ThemeSummary, list_themes};
pub use server::StaticServer;
pub use template::TemplateFile;
