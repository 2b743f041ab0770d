//! Commands that reset league data.

use anyhow::{Result, bail};

use crate::cli_utils::Settings;

/// Zero points while keeping driver and team names
pub fn clear_points(settings: &Settings, drivers_only: bool, teams_only: bool) -> Result<()> {
    let mut league = settings.open_league();

    if drivers_only {
        league.clear_driver_points();
        eprintln!("Driver points cleared");
    } else if teams_only {
        league.clear_team_points();
        eprintln!("Team points cleared");
    } else {
        league.clear_points();
        eprintln!("Driver and team points cleared");
    }

    Ok(())
}

/// Remove every leaderboard, best time and the roster
pub fn delete_all(settings: &Settings, yes: bool) -> Result<()> {
    if !yes {
        bail!(
            "This deletes all standings in {}; re-run with --yes to confirm",
            settings.data_dir.display()
        );
    }

    let mut league = settings.open_league();
    league.delete_all();
    eprintln!("All standings deleted");

    Ok(())
}
