use serde::Deserialize;
use serde_json::Value as JsonValue;
use tracing::debug;

use super::{ResultRecord, parse_elapsed};
use crate::error::{Error, Result};

/// One entry of a JSON result file
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonRow {
    username: String,
    #[serde(default)]
    place: Option<u32>,
    #[serde(default)]
    time: Option<String>,
    #[serde(default)]
    elapsed_ms: Option<u64>,
    #[serde(default)]
    team: Option<String>,
}

impl JsonRow {
    fn into_record(self, source_file: &str) -> Option<ResultRecord> {
        let username = self.username.trim();
        if username.is_empty() {
            return None;
        }
        let place = self.place.filter(|&p| p >= 1);
        let elapsed_ms = self
            .elapsed_ms
            .or_else(|| self.time.as_deref().and_then(parse_elapsed));

        let record = match (place, elapsed_ms) {
            (_, Some(elapsed)) => ResultRecord::timed(username, place, elapsed, source_file),
            (Some(place), None) => ResultRecord::placed(username, place, source_file),
            (None, None) => return None,
        };

        match self.team.as_deref().map(str::trim) {
            Some(team) if !team.is_empty() => Some(record.with_team(team)),
            _ => Some(record),
        }
    }
}

/// Parse a JSON result file.
///
/// The document must be an array of objects with a `username` and a `place`
/// and/or a time (`time` as `H:MM:SS.mmm` or `elapsedMs`). Entries that do
/// not fit are dropped; a document that is not an array fails the file.
pub fn parse_json_results(text: &str, source_file: &str) -> Result<Vec<ResultRecord>> {
    let rows: Vec<JsonValue> =
        serde_json::from_str(text).map_err(|e| Error::parse_failed(source_file, e.to_string()))?;

    Ok(rows
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| {
            let record = serde_json::from_value::<JsonRow>(value)
                .ok()
                .and_then(|row| row.into_record(source_file));
            if record.is_none() {
                debug!("Skipping malformed entry #{} in {}", index, source_file);
            }
            record
        })
        .collect())
}
