//! Show command for printing the leaderboards.

use anyhow::Result;
use standings_core::{StandingsExport, format_driver_table, format_team_table, format_time_table};

use crate::cli_utils::Settings;

/// Which leaderboards to print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    All,
    Teams,
    Times,
}

impl View {
    pub fn from_flags(teams: bool, times: bool) -> Self {
        match (teams, times) {
            (true, _) => View::Teams,
            (false, true) => View::Times,
            (false, false) => View::All,
        }
    }
}

pub fn run(settings: &Settings, view: View, json: bool) -> Result<()> {
    let league = settings.open_league();

    if json {
        let export = StandingsExport::from_league(&league);
        let value = match view {
            View::All => serde_json::to_value(&export)?,
            View::Teams => serde_json::to_value(&export.teams)?,
            View::Times => serde_json::to_value(&export.times)?,
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    match view {
        View::All => {
            println!("{}", format_driver_table(&league.driver_standings()));
            println!();
            println!("{}", format_team_table(&league.team_standings()));
        }
        View::Teams => println!("{}", format_team_table(&league.team_standings())),
        View::Times => println!("{}", format_time_table(&league.time_standings())),
    }
    eprintln!(
        "Scoring: {}, best {} per team",
        league.scoring_table(),
        league.contribution_policy()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_from_flags() {
        assert_eq!(View::from_flags(false, false), View::All);
        assert_eq!(View::from_flags(true, false), View::Teams);
        assert_eq!(View::from_flags(false, true), View::Times);
    }
}
