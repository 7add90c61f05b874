//! Init command implementation

use anyhow::{Context, Result};
use profile_themes::{Config, TemplateFile};
use std::fs;
use std::path::Path;

/// Run the init command
///
/// Writes the built-in template set into the template directory, creates
/// the themes directory and a default configuration file. Existing files are
/// kept unless `force` is set.
pub fn run_init(config: &Config, config_path: &Path, force: bool) -> Result<()> {
    println!("🚀 Initializing profile-themes...\n");

    // 1. Template directory
    let template_dir = &config.template_dir;
    if !template_dir.exists() {
        fs::create_dir_all(template_dir)
            .with_context(|| format!("Failed to create {}", template_dir.display()))?;
        println!("✅ Created {} directory", template_dir.display());
    } else {
        println!("📁 {} directory already exists", template_dir.display());
    }

    // 2. Template files
    for file in TemplateFile::ALL {
        let path = template_dir.join(file.source_name());
        if !path.exists() || force {
            fs::write(&path, file.default_content())
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("✅ Created template: {}", path.display());
        } else {
            println!(
                "📄 Template {} already exists (use --force to overwrite)",
                path.display()
            );
        }
    }

    // 3. Themes directory
    let themes_dir = &config.themes_dir;
    if !themes_dir.exists() {
        fs::create_dir_all(themes_dir)
            .with_context(|| format!("Failed to create {}", themes_dir.display()))?;
        println!("✅ Created {} directory", themes_dir.display());
    } else {
        println!("📁 {} directory already exists", themes_dir.display());
    }

    // 4. Configuration file
    if !config_path.exists() || force {
        Config::generate_default(config_path)?;
        println!("✅ Created configuration: {}", config_path.display());
    } else {
        println!("📄 Configuration file already exists (use --force to overwrite)");
    }

    println!("\n🎉 profile-themes initialization complete!");
    println!("\nUsage:");
    println!("  1. 'profile-themes create' to scaffold a new theme");
    println!("  2. 'profile-themes serve' to serve {} over HTTP", themes_dir.display());

    Ok(())
}
