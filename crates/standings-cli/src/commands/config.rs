//! Config command for inspecting league settings.

use anyhow::Result;
use standings_core::ScoringTableName;
use strum::IntoEnumIterator;

use crate::cli_utils::Settings;

/// Print the effective configuration, optionally writing it back
pub fn run(settings: &Settings, save: bool) -> Result<()> {
    let config = &settings.config;

    println!("{}", config.to_toml()?);

    eprintln!("Available scoring tables:");
    for table in ScoringTableName::iter() {
        eprintln!("  {:<12} {:?}", table.as_str(), table.points());
    }

    if save {
        config.save(&settings.config_path)?;
        eprintln!("Saved to: {}", settings.config_path.display());
    }

    Ok(())
}
