//! Create command implementation

use anyhow::Result;
use profile_themes::{
    Config, LinePrompter, Prompter, ScaffoldReport, ThemeScaffolder, collect_request,
};

/// Run the interactive create command
pub fn run_create(config: &Config) -> Result<()> {
    let scaffolder = ThemeScaffolder::from_config(config);
    let mut prompter = LinePrompter::stdio();

    let report = create_theme(&mut prompter, &scaffolder)?;
    print_report(&report);
    Ok(())
}

/// Prompt for a request and generate its files
pub fn create_theme<P: Prompter + ?Sized>(
    prompter: &mut P,
    scaffolder: &ThemeScaffolder,
) -> Result<ScaffoldReport> {
    let request = collect_request(prompter, scaffolder).inspect_err(|_| {
        eprintln!("Could not create theme with given options");
    })?;

    let report = scaffolder.create(&request).inspect_err(|_| {
        eprintln!("Could not create theme files");
    })?;

    Ok(report)
}

fn print_report(report: &ScaffoldReport) {
    println!();
    for file in &report.files {
        println!("✅ Created {}", file.path.display());
    }
    println!("\n🎉 Successfully created new theme {}", report.theme_id);
}
