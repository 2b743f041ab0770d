//! Common CLI utility functions shared across commands.

use std::path::PathBuf;

use standings_core::{
    ContributionPolicy, FileStore, IngestReport, League, LeagueConfig, ScoringTableName,
};
use tracing::{info, warn};

/// Effective settings: the config file with command-line overrides applied.
pub struct Settings {
    pub data_dir: PathBuf,
    pub config_path: PathBuf,
    pub config: LeagueConfig,
}

impl Settings {
    pub fn resolve(args: &crate::cli::Args) -> Self {
        let mut config = LeagueConfig::load_or_default(&args.config);

        if let Some(table) = &args.table {
            let resolved = ScoringTableName::parse(table).unwrap_or_else(|| {
                warn!("Unknown scoring table {:?}, using {}", table, ScoringTableName::default());
                ScoringTableName::default()
            });
            config.scoring_table = resolved.as_str().to_string();
        }
        if let Some(value) = &args.contributors {
            let policy = ContributionPolicy::parse(value).unwrap_or_else(|| {
                warn!(
                    "Unsupported contributor count {:?}, using {}",
                    value,
                    ContributionPolicy::default()
                );
                ContributionPolicy::default()
            });
            config.contributors = policy.into();
        }

        Self {
            data_dir: args.data_dir.clone(),
            config_path: args.config.clone(),
            config,
        }
    }

    pub fn open_league(&self) -> League<FileStore> {
        League::with_config(FileStore::new(&self.data_dir), &self.config)
    }
}

/// Print a short summary of an ingest to stderr
pub fn print_report(report: &IngestReport) {
    for roster in &report.rosters {
        eprintln!("Roster loaded: {}", roster);
    }
    for file in &report.rejected {
        eprintln!("Skipped (not .csv or .json): {}", file);
    }
    for failure in &report.failures {
        eprintln!("Failed: {} ({})", failure.file, failure.message);
    }
    if report.scored() {
        info!(
            "Scored {} results and {} bonus results",
            report.standard_records, report.bonus_records
        );
        eprintln!(
            "Scored {} results, {} bonus results",
            report.standard_records, report.bonus_records
        );
    }
}
