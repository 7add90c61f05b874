//! Configuration file support for profile-themes
//!
//! Handles `.profile-themes.toml` configuration file loading and saving.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = ".profile-themes.toml";

/// Environment variable overriding the server port
pub const PORT_ENV: &str = "PORT";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding one sub-directory per theme
    #[serde(default = "default_themes_dir")]
    pub themes_dir: PathBuf,

    /// Directory holding the template set copied into new themes
    #[serde(default = "default_template_dir")]
    pub template_dir: PathBuf,

    /// Static server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            themes_dir: default_themes_dir(),
            template_dir: default_template_dir(),
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Static server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind (default: 0.0.0.0)
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on (default: 3000, overridden by `PORT`)
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Pick the listening port: `PORT` wins over the configured value
    ///
    /// `env_port` is the raw value of the environment variable, if set.
    pub fn resolve_port(&self, env_port: Option<&str>) -> Result<u16> {
        match env_port.map(str::trim).filter(|p| !p.is_empty()) {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("Invalid {PORT_ENV} value: {raw}")),
            None => Ok(self.port),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset (default: "info")
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// Default value functions
fn default_themes_dir() -> PathBuf {
    PathBuf::from("themes")
}

fn default_template_dir() -> PathBuf {
    PathBuf::from("template")
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration file (returns default if not found)
    ///
    /// Searches for `.profile-themes.toml` in the current directory.
    pub fn load() -> Result<Self> {
        let config_path = PathBuf::from(CONFIG_FILE_NAME);

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from specified path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to specified path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write configuration file: {}", path.display()))?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default(path: &Path) -> Result<()> {
        let config = Config::default();
        config.save_to(path)
    }

    /// Resolve relative directories against `root`
    pub fn rooted_at(mut self, root: &Path) -> Self {
        if self.themes_dir.is_relative() {
            self.themes_dir = root.join(&self.themes_dir);
        }
        if self.template_dir.is_relative() {
            self.template_dir = root.join(&self.template_dir);
        }
        self
    }
}
