//! Scoring tables and team contribution policy.
//!
//! This module contains:
//! - `ScoringTableName` / `ScoringTable` - named place-to-points tables (WRC, Powerstage, ...)
//! - `ContributionPolicy` - how many drivers per team count toward a team's event total

mod policy;
mod table;

pub use policy::*;
pub use table::*;
