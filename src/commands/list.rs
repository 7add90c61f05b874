//! List command implementation

use anyhow::Result;
use profile_themes::{Config, list_themes};

/// List existing themes
pub fn run_list(config: &Config) -> Result<()> {
    let themes = list_themes(&config.themes_dir)?;

    if themes.is_empty() {
        println!("No themes found in {}.", config.themes_dir.display());
        return Ok(());
    }

    for theme in &themes {
        let distributed = if theme.is_distributed {
            " [distributed]"
        } else {
            ""
        };
        match &theme.display_name {
            Some(name) => println!("{:<24} {}{}", theme.id, name, distributed),
            None => println!("{}{}", theme.id, distributed),
        }
    }

    println!("\nTotal: {} themes", themes.len());
    Ok(())
}
