//! Configuration and well-known names.
//!
//! This module contains:
//! - `LeagueConfig` - scoring selection and file-naming rules, loaded from TOML
//! - `NamingConvention` - filename suffixes that route files to roster/bonus paths
//! - Storage key and default constants

mod league;

pub use league::*;

/// Keys used in the persisted key-value store.
pub mod keys {
    /// Driver points leaderboard.
    pub const DRIVER_LEADERBOARD: &str = "leaderboard";

    /// Team points leaderboard.
    pub const TEAM_LEADERBOARD: &str = "teamLeaderboard";

    /// Best elapsed time per driver.
    pub const TIME_LEADERBOARD: &str = "timeLeaderboard";

    /// Username to team roster.
    pub const TEAMS: &str = "teams";

    /// Every key the league writes.
    pub const ALL: [&str; 4] = [DRIVER_LEADERBOARD, TEAM_LEADERBOARD, TIME_LEADERBOARD, TEAMS];
}

/// Filename conventions.
pub mod naming {
    /// Default suffix marking a roster file.
    pub const ROSTER_SUFFIX: &str = "_teams.csv";

    /// Default suffix marking a bonus (powerstage) result file.
    pub const BONUS_SUFFIX: &str = "_powerstage.csv";

    /// Team label shown for drivers without a roster entry.
    pub const UNKNOWN_TEAM: &str = "Unknown";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_keys() {
        assert_eq!(keys::ALL.len(), 4);
        assert!(keys::ALL.contains(&"leaderboard"));
        assert!(keys::ALL.contains(&"teamLeaderboard"));
        assert!(keys::ALL.contains(&"timeLeaderboard"));
        assert!(keys::ALL.contains(&"teams"));
    }
}
