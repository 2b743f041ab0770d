//! Cumulative standings.
//!
//! - `Leaderboard` - name to cumulative points (drivers and teams)
//! - `TimeLeaderboard` - best elapsed time per driver
//! - `League` - owns the leaderboards and roster, aggregates scored batches
//! - Sorted standings rows for display and export

mod leaderboard;
mod league;
mod ranking;

pub use leaderboard::*;
pub use league::*;
pub use ranking::*;
