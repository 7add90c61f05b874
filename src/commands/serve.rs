//! Serve command implementation

use anyhow::{Context, Result};
use profile_themes::{Config, StaticServer, config::PORT_ENV};
use std::env;

/// Serve the themes directory until the process is terminated
pub fn run_serve(config: &Config) -> Result<()> {
    let env_port = env::var(PORT_ENV).ok();
    let server = StaticServer::from_config(config, env_port.as_deref())?;

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(server.serve())
}
