use std::cmp::Reverse;
use std::collections::BTreeMap;

use tracing::{debug, info};

use super::{
    DriverStanding, Leaderboard, TeamStanding, TimeLeaderboard, TimeStanding, driver_standings,
    team_standings, time_standings,
};
use crate::batch::FinalizedBatch;
use crate::config::naming::UNKNOWN_TEAM;
use crate::config::{LeagueConfig, keys};
use crate::record::ResultRecord;
use crate::scoring::{ContributionPolicy, ScoringTable, ScoringTableName};
use crate::storage::{self, KeyValueStore};
use crate::team::TeamRegistry;

/// League state: cumulative leaderboards, the team roster and the scoring selection.
///
/// State is loaded from the store on construction and written back after
/// every mutation. Store failures are logged and do not interrupt scoring.
pub struct League<S: KeyValueStore> {
    store: S,
    drivers: Leaderboard,
    teams: Leaderboard,
    times: TimeLeaderboard,
    registry: TeamRegistry,
    /// Team a driver last raced for in a result record; not persisted
    record_teams: BTreeMap<String, String>,
    scoring_table: ScoringTableName,
    policy: ContributionPolicy,
}

impl<S: KeyValueStore> League<S> {
    /// Load league state from `store` with the default scoring selection
    pub fn load(mut store: S) -> Self {
        let drivers: Leaderboard = storage::load_or_default(&mut store, keys::DRIVER_LEADERBOARD);
        let teams: Leaderboard = storage::load_or_default(&mut store, keys::TEAM_LEADERBOARD);
        let times: TimeLeaderboard = storage::load_or_default(&mut store, keys::TIME_LEADERBOARD);
        let registry: TeamRegistry = storage::load_or_default(&mut store, keys::TEAMS);
        debug!(
            "Loaded league: {} drivers, {} teams, {} times, {} roster entries",
            drivers.len(),
            teams.len(),
            times.len(),
            registry.len()
        );

        Self {
            store,
            drivers,
            teams,
            times,
            registry,
            record_teams: BTreeMap::new(),
            scoring_table: ScoringTableName::default(),
            policy: ContributionPolicy::default(),
        }
    }

    pub fn with_config(store: S, config: &LeagueConfig) -> Self {
        let mut league = Self::load(store);
        league.scoring_table = config.scoring_table();
        league.policy = config.contribution_policy();
        league
    }

    pub fn scoring_table(&self) -> ScoringTableName {
        self.scoring_table
    }

    pub fn set_scoring_table(&mut self, table: ScoringTableName) {
        self.scoring_table = table;
    }

    pub fn contribution_policy(&self) -> ContributionPolicy {
        self.policy
    }

    pub fn set_contribution_policy(&mut self, policy: ContributionPolicy) {
        self.policy = policy;
    }

    pub fn drivers(&self) -> &Leaderboard {
        &self.drivers
    }

    pub fn teams(&self) -> &Leaderboard {
        &self.teams
    }

    pub fn times(&self) -> &TimeLeaderboard {
        &self.times
    }

    pub fn registry(&self) -> &TeamRegistry {
        &self.registry
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replace the roster. Team points already accumulated are untouched.
    pub fn replace_registry(&mut self, registry: TeamRegistry) {
        self.registry = registry;
        storage::save(&mut self.store, keys::TEAMS, &self.registry);
    }

    /// Score a finalized batch with the league's table and policy.
    ///
    /// Bonus records are scored with the bonus table and do not affect times.
    pub fn apply_batch(&mut self, batch: &FinalizedBatch) {
        if !batch.standard.is_empty() {
            self.aggregate(&batch.standard, self.scoring_table.table(), self.policy);
        }
        if !batch.bonus.is_empty() {
            self.award_bonus(&batch.bonus, ScoringTableName::BONUS.table(), self.policy);
        }
        info!(
            "Applied batch: {} results, {} bonus results ({} table, best {} per team)",
            batch.standard.len(),
            batch.bonus.len(),
            self.scoring_table,
            self.policy
        );
    }

    /// Add one event's results to the driver, team and time leaderboards
    pub fn aggregate(
        &mut self,
        records: &[ResultRecord],
        table: ScoringTable,
        policy: ContributionPolicy,
    ) {
        self.accumulate_points(records, table, policy);
        for record in records {
            if let Some(elapsed_ms) = record.elapsed_ms
                && self.times.record(&record.username, elapsed_ms)
            {
                debug!("New best time for {}: {}ms", record.username, elapsed_ms);
            }
        }
        self.persist_points();
        storage::save(&mut self.store, keys::TIME_LEADERBOARD, &self.times);
    }

    /// Add bonus points to the driver and team leaderboards only
    pub fn award_bonus(
        &mut self,
        records: &[ResultRecord],
        table: ScoringTable,
        policy: ContributionPolicy,
    ) {
        self.accumulate_points(records, table, policy);
        self.persist_points();
    }

    fn accumulate_points(
        &mut self,
        records: &[ResultRecord],
        table: ScoringTable,
        policy: ContributionPolicy,
    ) {
        let registry = &self.registry;
        let mut contributions: Vec<(&str, u32)> = Vec::new();

        for record in records {
            let points = table.points_for(record.place);
            self.drivers.add(&record.username, points);
            if let Some(team) = record.team.as_deref().filter(|team| *team != UNKNOWN_TEAM) {
                self.record_teams.insert(record.username.clone(), team.to_string());
            }

            if let Some(team) = team_for(registry, record) {
                contributions.push((team, points));
            }
        }

        for (team, points) in best_of_totals(contributions, policy) {
            self.teams.add(team, points);
        }
    }

    /// Reset driver and team points to zero, keeping names
    pub fn clear_points(&mut self) {
        self.drivers.clear_points();
        self.teams.clear_points();
        self.persist_points();
    }

    pub fn clear_driver_points(&mut self) {
        self.drivers.clear_points();
        storage::save(&mut self.store, keys::DRIVER_LEADERBOARD, &self.drivers);
    }

    pub fn clear_team_points(&mut self) {
        self.teams.clear_points();
        storage::save(&mut self.store, keys::TEAM_LEADERBOARD, &self.teams);
    }

    /// Empty every leaderboard and the roster, and remove their persisted keys
    pub fn delete_all(&mut self) {
        self.drivers.clear();
        self.teams.clear();
        self.times.clear();
        self.registry = TeamRegistry::new();
        self.record_teams.clear();
        for key in keys::ALL {
            storage::discard(&mut self.store, key);
        }
        info!("Deleted all league data");
    }

    pub fn driver_standings(&self) -> Vec<DriverStanding> {
        driver_standings(&self.drivers, &self.registry, &self.record_teams)
    }

    pub fn team_standings(&self) -> Vec<TeamStanding> {
        team_standings(&self.teams)
    }

    pub fn time_standings(&self) -> Vec<TimeStanding> {
        time_standings(&self.times)
    }

    fn persist_points(&mut self) {
        storage::save(&mut self.store, keys::DRIVER_LEADERBOARD, &self.drivers);
        storage::save(&mut self.store, keys::TEAM_LEADERBOARD, &self.teams);
    }
}

/// Team credited for a record: its own team, else the roster's
fn team_for<'a>(registry: &'a TeamRegistry, record: &'a ResultRecord) -> Option<&'a str> {
    record
        .team
        .as_deref()
        .or_else(|| registry.team_of(&record.username))
        .filter(|team| *team != UNKNOWN_TEAM)
}

/// Per-team sum of the `policy` highest contributions.
///
/// Teams with fewer contributions than the policy count all of them.
pub fn best_of_totals<'a>(
    contributions: impl IntoIterator<Item = (&'a str, u32)>,
    policy: ContributionPolicy,
) -> BTreeMap<&'a str, u32> {
    let mut by_team: BTreeMap<&str, Vec<u32>> = BTreeMap::new();
    for (team, points) in contributions {
        by_team.entry(team).or_default().push(points);
    }

    by_team
        .into_iter()
        .map(|(team, mut points)| {
            points.sort_by_key(|&p| Reverse(p));
            (team, points.into_iter().take(policy.count()).sum())
        })
        .collect()
}
