//! Export command for writing the leaderboards.

use anyhow::Result;
use standings_core::{generate_standings_json, generate_standings_tsv};

use crate::cli::ExportFormat;
use crate::cli_utils::Settings;

/// Export all leaderboards
pub fn run(settings: &Settings, output: Option<&str>, format: ExportFormat) -> Result<()> {
    let league = settings.open_league();

    let content = match format {
        ExportFormat::Tsv => generate_standings_tsv(&league),
        ExportFormat::Json => generate_standings_json(&league)?,
    };

    if let Some(output_path) = output {
        std::fs::write(output_path, &content)?;
        eprintln!("Exported to: {}", output_path);
    } else {
        println!("{}", content);
    }

    Ok(())
}
