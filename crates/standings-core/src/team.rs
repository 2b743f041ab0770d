//! Team roster: username to team lookup.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::record::{data_rows, split_row};

const USERNAME_COLUMN: usize = 1;
const TEAM_COLUMN: usize = 2;

/// Persisted form of one roster line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamEntry {
    pub username: String,
    pub team: String,
}

/// Username to team mapping, replaced wholesale on every roster load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<TeamEntry>", into = "Vec<TeamEntry>")]
pub struct TeamRegistry {
    teams: BTreeMap<String, String>,
}

impl TeamRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from roster CSV text (`_,username,team` after a header line).
    ///
    /// Rows with fewer than three columns or an empty username/team are dropped.
    /// A username listed twice keeps its last team.
    pub fn parse(text: &str) -> Self {
        let mut teams = BTreeMap::new();
        for line in data_rows(text) {
            let values = split_row(line);
            match (values.get(USERNAME_COLUMN), values.get(TEAM_COLUMN)) {
                (Some(username), Some(team)) if !username.is_empty() && !team.is_empty() => {
                    teams.insert(username.to_string(), team.to_string());
                }
                _ => debug!("Skipping malformed roster row: {:?}", line),
            }
        }
        Self { teams }
    }

    pub fn team_of(&self, username: &str) -> Option<&str> {
        self.teams.get(username).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.teams.iter()
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

impl From<Vec<TeamEntry>> for TeamRegistry {
    fn from(entries: Vec<TeamEntry>) -> Self {
        Self {
            teams: entries.into_iter().map(|e| (e.username, e.team)).collect(),
        }
    }
}

impl From<TeamRegistry> for Vec<TeamEntry> {
    fn from(registry: TeamRegistry) -> Self {
        registry
            .teams
            .into_iter()
            .map(|(username, team)| TeamEntry { username, team })
            .collect()
    }
}
