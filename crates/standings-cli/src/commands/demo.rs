//! Demo command for loading bundled sample data.

use anyhow::{Context, Result};
use standings_core::{DemoSource, demo_files, ingest};

use crate::cli_utils::{self, Settings};

/// Load a bundled demo set into the league
pub fn run(settings: &Settings, set: u8) -> Result<()> {
    let mut league = settings.open_league();
    let files = demo_files(set);

    eprintln!("Loading demo set {}...", set);
    let report = ingest(&mut league, &DemoSource, &files, &settings.config.naming)
        .context("Could not load demo results")?;
    cli_utils::print_report(&report);

    Ok(())
}
