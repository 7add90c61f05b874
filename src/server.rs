//! Static file server for the themes directory
//!
//! Every file under the themes root is served as-is. MIME types, directory
//! index resolution and caching headers come from `tower-http`'s `ServeDir`.

use crate::config::Config;
use anyhow::{Context, Result};
use axum::Router;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Serves a themes directory over HTTP
#[derive(Debug, Clone)]
pub struct StaticServer {
    themes_dir: PathBuf,
    bind_address: SocketAddr,
}

impl StaticServer {
    pub fn new(themes_dir: impl Into<PathBuf>, bind_address: SocketAddr) -> Self {
        Self {
            themes_dir: themes_dir.into(),
            bind_address,
        }
    }

    /// Build from configuration; `env_port` is the raw `PORT` value, if any
    pub fn from_config(config: &Config, env_port: Option<&str>) -> Result<Self> {
        let port = config.server.resolve_port(env_port)?;
        let host: IpAddr = config
            .server
            .host
            .parse()
            .with_context(|| format!("Invalid server host: {}", config.server.host))?;

        Ok(Self::new(
            config.themes_dir.clone(),
            SocketAddr::new(host, port),
        ))
    }

    pub fn themes_dir(&self) -> &Path {
        &self.themes_dir
    }

    pub fn bind_address(&self) -> SocketAddr {
        self.bind_address
    }

    /// Router serving the themes directory and nothing else
    pub fn router(&self) -> Router {
        Router::new()
            .fallback_service(ServeDir::new(&self.themes_dir))
            .layer(TraceLayer::new_for_http())
    }

    /// Bind the configured address and serve until the process ends
    pub async fn serve(self) -> Result<()> {
        let listener = TcpListener::bind(self.bind_address)
            .await
            .with_context(|| format!("Failed to bind {}", self.bind_address))?;
        self.serve_on(listener).await
    }

    /// Serve on an already bound listener
    pub async fn serve_on(self, listener: TcpListener) -> Result<()> {
        if !self.themes_dir.is_dir() {
            warn!(
                "Themes directory {} does not exist; every request will 404",
                self.themes_dir.display()
            );
        }

        let address = listener.local_addr()?;
        info!("profile-themes server running at http://{}", address);
        info!("Serving themes from: {}", self.themes_dir.display());

        axum::serve(listener, self.router())
            .await
            .context("Server error")?;

        Ok(())
    }
}
