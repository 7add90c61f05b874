//! CLI argument parsing

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "profile-themes")]
#[command(author, version, about = "Scaffold and serve web profile themes")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Create a new theme from the template set (default)
    Create,
    /// Serve the themes directory over HTTP (port from PORT, default 3000)
    Serve,
    /// Write the default template set and configuration
    Init {
        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
    /// List existing themes
    List,
}
