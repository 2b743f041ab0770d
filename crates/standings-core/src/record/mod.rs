//! Result records and the parsers that produce them.
//!
//! - `ResultRecord` - one driver's result in one event file
//! - CSV and JSON result parsers
//! - `H:MM:SS.mmm` elapsed time codec
//! - Raw file byte decoding

mod csv;
mod decode;
mod json;
mod time;

pub use csv::*;
pub use decode::*;
pub use json::*;
pub use time::*;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single driver's result as read from a result file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    pub username: String,
    /// 1-based finishing place; absent for time-only rows
    pub place: Option<u32>,
    pub elapsed_ms: Option<u64>,
    pub team: Option<String>,
    pub source_file: String,
}

impl ResultRecord {
    pub fn placed(username: &str, place: u32, source_file: &str) -> Self {
        Self {
            username: username.to_string(),
            place: Some(place),
            elapsed_ms: None,
            team: None,
            source_file: source_file.to_string(),
        }
    }

    pub fn timed(username: &str, place: Option<u32>, elapsed_ms: u64, source_file: &str) -> Self {
        Self {
            username: username.to_string(),
            place,
            elapsed_ms: Some(elapsed_ms),
            team: None,
            source_file: source_file.to_string(),
        }
    }

    pub fn with_team(mut self, team: &str) -> Self {
        self.team = Some(team.to_string());
        self
    }

    /// Same record finishing at `place`
    pub fn with_place(mut self, place: u32) -> Self {
        self.place = Some(place);
        self
    }
}

/// Text format of a result file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultFormat {
    Csv,
    Json,
}

/// Parse result file text in the given format.
///
/// Malformed CSV rows are dropped; a JSON document that is not an array
/// fails the whole file.
pub fn parse_results(text: &str, source_file: &str, format: ResultFormat) -> Result<Vec<ResultRecord>> {
    match format {
        ResultFormat::Csv => Ok(parse_csv_results(text, source_file)),
        ResultFormat::Json => parse_json_results(text, source_file),
    }
}
