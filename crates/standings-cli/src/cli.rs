//! CLI argument definitions for standings.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "standings")]
#[command(about = "Racing league standings tracker", version)]
pub struct Args {
    /// Directory holding the persisted leaderboards
    #[arg(long, env = "STANDINGS_DATA_DIR", default_value = "standings-data")]
    pub data_dir: PathBuf,

    /// Path to league config file
    #[arg(short, long, default_value = "league.toml")]
    pub config: PathBuf,

    /// Scoring table (WRC, Powerstage, Rallycross, F1, F1_Sprint)
    #[arg(long, env = "STANDINGS_TABLE")]
    pub table: Option<String>,

    /// Drivers counted per team and event (2, 3, 4 or Two, Three, Four)
    #[arg(long, env = "STANDINGS_CONTRIBUTORS")]
    pub contributors: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load roster and result files as one event
    Load {
        /// Roster (`*_teams.csv`) and result files (.csv or .json)
        #[arg(required = true)]
        files: Vec<String>,
    },
    /// Show the current leaderboards
    Show {
        /// Show only the team leaderboard
        #[arg(long, conflicts_with = "times")]
        teams: bool,
        /// Show only the best-time leaderboard
        #[arg(long)]
        times: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Export the leaderboards
    Export {
        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Output format
        #[arg(short, long, value_enum, default_value = "tsv")]
        format: ExportFormat,
    },
    /// Reset driver and team points to zero, keeping names
    ClearPoints {
        /// Clear only driver points
        #[arg(long, conflicts_with = "teams")]
        drivers: bool,
        /// Clear only team points
        #[arg(long)]
        teams: bool,
    },
    /// Delete every leaderboard and the roster
    DeleteAll {
        /// Skip the confirmation check
        #[arg(long)]
        yes: bool,
    },
    /// Load a bundled demo event
    Demo {
        /// Demo set (1 or 2)
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u8).range(1..=2))]
        set: u8,
    },
    /// Show the effective league configuration
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        save: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Tsv,
    Json,
}
