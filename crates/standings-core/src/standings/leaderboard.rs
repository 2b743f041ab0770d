use std::cmp::Reverse;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::record::format_elapsed;

/// Name to cumulative points.
///
/// Entries are created on first score and never removed by aggregation;
/// clearing resets values to zero and keeps the names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    points: BTreeMap<String, u32>,
}

pub type DriverLeaderboard = Leaderboard;
pub type TeamLeaderboard = Leaderboard;

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add points to `name`, creating the entry at zero if needed
    pub fn add(&mut self, name: &str, points: u32) {
        let total = self.points.entry(name.to_string()).or_insert(0);
        *total = total.saturating_add(points);
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.points.get(name).copied()
    }

    /// Reset every value to zero, keeping all names
    pub fn clear_points(&mut self) {
        self.points.values_mut().for_each(|points| *points = 0);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &u32)> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Entries by points descending; equal points are ordered by name
    pub fn ranked(&self) -> Vec<(&str, u32)> {
        let mut entries: Vec<(&str, u32)> = self
            .points
            .iter()
            .map(|(name, points)| (name.as_str(), *points))
            .collect();
        // BTreeMap iteration is already name-ordered; the stable sort keeps it for ties
        entries.sort_by_key(|&(_, points)| Reverse(points));
        entries
    }
}

/// A driver's best elapsed time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestTime {
    pub elapsed_ms: u64,
    pub display_time: String,
}

impl BestTime {
    pub fn new(elapsed_ms: u64) -> Self {
        Self {
            elapsed_ms,
            display_time: format_elapsed(elapsed_ms),
        }
    }
}

/// Username to best elapsed time. Values are replaced only by strictly faster times.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeLeaderboard {
    times: BTreeMap<String, BestTime>,
}

impl TimeLeaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a time; returns `true` if it became the driver's best
    pub fn record(&mut self, username: &str, elapsed_ms: u64) -> bool {
        match self.times.get_mut(username) {
            Some(best) if elapsed_ms >= best.elapsed_ms => false,
            Some(best) => {
                *best = BestTime::new(elapsed_ms);
                true
            }
            None => {
                self.times
                    .insert(username.to_string(), BestTime::new(elapsed_ms));
                true
            }
        }
    }

    pub fn get(&self, username: &str) -> Option<&BestTime> {
        self.times.get(username)
    }

    pub fn clear(&mut self) {
        self.times.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BestTime)> {
        self.times.iter()
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Entries by elapsed time ascending; equal times are ordered by username
    pub fn ranked(&self) -> Vec<(&str, &BestTime)> {
        let mut entries: Vec<(&str, &BestTime)> = self
            .times
            .iter()
            .map(|(name, best)| (name.as_str(), best))
            .collect();
        entries.sort_by_key(|&(_, best)| best.elapsed_ms);
        entries
    }
}
