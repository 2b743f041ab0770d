//! Load command for scoring uploaded files.

use anyhow::{Context, Result};
use standings_core::{DiskSource, ingest};

use crate::cli_utils::{self, Settings};

/// Load roster and result files as one event
pub fn run(settings: &Settings, files: &[String]) -> Result<()> {
    let mut league = settings.open_league();

    eprintln!(
        "Scoring with {} (best {} per team)",
        league.scoring_table(),
        league.contribution_policy()
    );

    let report = ingest(&mut league, &DiskSource, files, &settings.config.naming)
        .context("Failed to load results")?;
    cli_utils::print_report(&report);

    Ok(())
}
