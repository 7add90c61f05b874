mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use profile_themes::{Config, config::CONFIG_FILE_NAME, logging};
use std::env;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration; relative directories are resolved from the working directory
    let cwd = env::current_dir().context("Failed to get current directory")?;
    let config = Config::load()?.rooted_at(&cwd);

    logging::init(&config.logging)?;

    match cli.command.unwrap_or(Commands::Create) {
        Commands::Create => commands::run_create(&config),
        Commands::Serve => commands::run_serve(&config),
        Commands::Init { force } => commands::run_init(&config, Path::new(CONFIG_FILE_NAME), force),
        Commands::List => commands::run_list(&config),
    }
}
