//! Standings export (console, TSV, JSON)

mod console;

pub use console::*;

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::error::Result;
use crate::standings::{DriverStanding, League, TeamStanding, TimeStanding};
use crate::storage::KeyValueStore;

pub fn format_driver_tsv_header() -> String {
    "Position\tDriver\tTeam\tPoints".to_string()
}

pub fn format_driver_tsv_row(row: &DriverStanding) -> String {
    format!("{}\t{}\t{}\t{}", row.position, row.username, row.team, row.points)
}

pub fn format_team_tsv_row(row: &TeamStanding) -> String {
    format!("{}\t{}\t{}", row.position, row.team, row.points)
}

pub fn format_time_tsv_row(row: &TimeStanding) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        row.position, row.username, row.elapsed_ms, row.display_time
    )
}

/// Snapshot of every leaderboard, as written by the JSON export
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsExport {
    pub generated_at: DateTime<Local>,
    pub scoring_table: String,
    pub contributors: usize,
    pub drivers: Vec<DriverStanding>,
    pub teams: Vec<TeamStanding>,
    pub times: Vec<TimeStanding>,
}

impl StandingsExport {
    pub fn from_league<S: KeyValueStore>(league: &League<S>) -> Self {
        Self {
            generated_at: Local::now(),
            scoring_table: league.scoring_table().to_string(),
            contributors: league.contribution_policy().count(),
            drivers: league.driver_standings(),
            teams: league.team_standings(),
            times: league.time_standings(),
        }
    }
}

/// Three TSV sections separated by blank lines: drivers, teams, best times
pub fn generate_standings_tsv<S: KeyValueStore>(league: &League<S>) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "{}", format_driver_tsv_header());
    for row in league.driver_standings() {
        let _ = writeln!(output, "{}", format_driver_tsv_row(&row));
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "Position\tTeam\tPoints");
    for row in league.team_standings() {
        let _ = writeln!(output, "{}", format_team_tsv_row(&row));
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "Position\tDriver\tElapsedMs\tTime");
    for row in league.time_standings() {
        let _ = writeln!(output, "{}", format_time_tsv_row(&row));
    }

    output
}

pub fn generate_standings_json<S: KeyValueStore>(league: &League<S>) -> Result<String> {
    let export = StandingsExport::from_league(league);
    Ok(serde_json::to_string_pretty(&export)?)
}

pub fn export_standings_tsv<P, S>(path: P, league: &League<S>) -> Result<()>
where
    P: AsRef<Path>,
    S: KeyValueStore,
{
    fs::write(path, generate_standings_tsv(league))?;
    Ok(())
}

pub fn export_standings_json<P, S>(path: P, league: &League<S>) -> Result<()>
where
    P: AsRef<Path>,
    S: KeyValueStore,
{
    fs::write(path, generate_standings_json(league)?)?;
    Ok(())
}
