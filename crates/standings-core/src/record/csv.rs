use tracing::debug;

use super::{ResultRecord, parse_elapsed};

const PLACE_COLUMN: usize = 0;
const USERNAME_COLUMN: usize = 1;
const TIME_COLUMN: usize = 3;

/// Non-blank lines after the header line
pub(crate) fn data_rows(text: &str) -> impl Iterator<Item = &str> {
    text.lines().filter(|line| !line.trim().is_empty()).skip(1)
}

pub(crate) fn split_row(line: &str) -> Vec<&str> {
    line.split(',').map(str::trim).collect()
}

/// Parse CSV result text.
///
/// The first non-blank line is a header and is discarded. Each row is either
/// place-only (`place,username,...`) or time-based
/// (`place,username,_,H:MM:SS.mmm,...`); a row counts as time-based when its
/// fourth column contains a `:`. Rows that do not fit either shape are
/// dropped without failing the file.
pub fn parse_csv_results(text: &str, source_file: &str) -> Vec<ResultRecord> {
    data_rows(text)
        .filter_map(|line| {
            let record = parse_row(line, source_file);
            if record.is_none() {
                debug!("Skipping malformed row in {}: {:?}", source_file, line);
            }
            record
        })
        .collect()
}

fn parse_row(line: &str, source_file: &str) -> Option<ResultRecord> {
    let values = split_row(line);
    let username = *values.get(USERNAME_COLUMN)?;
    if username.is_empty() {
        return None;
    }
    let place = parse_place(values[PLACE_COLUMN]);

    match values.get(TIME_COLUMN) {
        Some(time) if time.contains(':') => {
            let elapsed_ms = parse_elapsed(time)?;
            Some(ResultRecord::timed(username, place, elapsed_ms, source_file))
        }
        _ => Some(ResultRecord::placed(username, place?, source_file)),
    }
}

fn parse_place(text: &str) -> Option<u32> {
    text.parse::<u32>().ok().filter(|&place| place >= 1)
}
