//! Persistent storage of league state.
//!
//! This module is the only path to durable state:
//!
//! - **Stores**: `KeyValueStore` with in-memory and directory-backed implementations
//! - **Gateway**: typed JSON load/save of the leaderboards and the roster
//!
//! ## Data directory
//!
//! `FileStore` keeps one `<key>.json` file per key:
//! `leaderboard.json`, `teamLeaderboard.json`, `timeLeaderboard.json`, `teams.json`.
//! A value that fails to load is kept as `<key>.corrupt.json` before the
//! league writes over it.

mod gateway;
mod store;

pub use gateway::*;
pub use store::*;
