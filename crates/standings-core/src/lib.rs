//! Racing league standings engine.
//!
//! Event result files (CSV or JSON) are parsed into records, scored against a
//! named points table and accumulated into driver, team and best-time
//! leaderboards that persist in a key-value store.

pub mod batch;
pub mod config;
pub mod demo;
pub mod error;
pub mod export;
pub mod record;
pub mod scoring;
pub mod standings;
pub mod storage;
pub mod team;

pub use batch::{
    BatchCoordinator, DiskSource, FileFailure, FileKind, FileSource, FinalizedBatch, IngestReport,
    classify, ingest, rank_by_time,
};
pub use config::{Contributors, LeagueConfig, NamingConvention};
pub use demo::{DemoSource, demo_files};
pub use error::{Error, Result};
pub use export::{
    StandingsExport, export_standings_json, export_standings_tsv, format_driver_table,
    format_team_table, format_time_table, generate_standings_json, generate_standings_tsv,
};
pub use record::{ResultFormat, ResultRecord, format_elapsed, parse_elapsed, parse_results};
pub use scoring::{ContributionPolicy, ScoringTable, ScoringTableName, points_for, resolve_table};
pub use standings::{
    BestTime, DriverStanding, Leaderboard, League, TeamStanding, TimeLeaderboard, TimeStanding,
};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use team::{TeamEntry, TeamRegistry};
