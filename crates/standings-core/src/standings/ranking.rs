use std::collections::BTreeMap;

use serde::Serialize;

use super::{Leaderboard, TimeLeaderboard};
use crate::config::naming::UNKNOWN_TEAM;
use crate::team::TeamRegistry;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriverStanding {
    pub position: usize,
    pub username: String,
    pub team: String,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamStanding {
    pub position: usize,
    pub team: String,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeStanding {
    pub position: usize,
    pub username: String,
    pub elapsed_ms: u64,
    pub display_time: String,
}

/// Driver rows, most points first.
///
/// The team label comes from the roster, then from `record_teams` (the team
/// a driver last raced for in a result file), then `Unknown`.
pub fn driver_standings(
    drivers: &Leaderboard,
    registry: &TeamRegistry,
    record_teams: &BTreeMap<String, String>,
) -> Vec<DriverStanding> {
    drivers
        .ranked()
        .into_iter()
        .enumerate()
        .map(|(index, (username, points))| DriverStanding {
            position: index + 1,
            username: username.to_string(),
            team: registry
                .team_of(username)
                .or_else(|| record_teams.get(username).map(String::as_str))
                .unwrap_or(UNKNOWN_TEAM)
                .to_string(),
            points,
        })
        .collect()
}

pub fn team_standings(teams: &Leaderboard) -> Vec<TeamStanding> {
    teams
        .ranked()
        .into_iter()
        .enumerate()
        .map(|(index, (team, points))| TeamStanding {
            position: index + 1,
            team: team.to_string(),
            points,
        })
        .collect()
}

/// Time rows, fastest first
pub fn time_standings(times: &TimeLeaderboard) -> Vec<TimeStanding> {
    times
        .ranked()
        .into_iter()
        .enumerate()
        .map(|(index, (username, best))| TimeStanding {
            position: index + 1,
            username: username.to_string(),
            elapsed_ms: best.elapsed_ms,
            display_time: best.display_time.clone(),
        })
        .collect()
}
