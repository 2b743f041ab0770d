//! Bundled demo datasets.
//!
//! Demo files are compiled into the library and served through
//! [`FileSource`], so they go through the same ingest path as user files.

use tracing::debug;

use crate::batch::{FileSource, display_name};
use crate::error::{Error, Result};

pub const DEMO_TEAMS: &str = "demo_teams.csv";
pub const DEMO_RESULTS: &str = "demo_results.csv";
pub const DEMO_RESULTS_2: &str = "demo_results_2.csv";

const DEMO_FILES: [(&str, &str); 3] = [
    (DEMO_TEAMS, include_str!("../demo/demo_teams.csv")),
    (DEMO_RESULTS, include_str!("../demo/demo_results.csv")),
    (DEMO_RESULTS_2, include_str!("../demo/demo_results_2.csv")),
];

/// File source over the bundled demo files
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoSource;

impl FileSource for DemoSource {
    fn read(&self, name: &str) -> Result<Vec<u8>> {
        let wanted = display_name(name);
        let (_, content) = DEMO_FILES
            .iter()
            .find(|(file, _)| *file == wanted)
            .ok_or_else(|| Error::DemoFileNotFound(name.to_string()))?;
        debug!("Serving demo file {}", wanted);
        Ok(content.as_bytes().to_vec())
    }
}

/// Files of a demo set: the roster plus one results file.
///
/// Set 2 selects the second results file; any other value selects the first.
pub fn demo_files(set: u8) -> Vec<String> {
    let results = if set == 2 { DEMO_RESULTS_2 } else { DEMO_RESULTS };
    vec![DEMO_TEAMS.to_string(), results.to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::ingest;
    use crate::config::NamingConvention;
    use crate::standings::League;
    use crate::storage::MemoryStore;

    #[test]
    fn test_demo_source_serves_bundled_files() {
        let bytes = DemoSource.read(DEMO_TEAMS).unwrap();
        assert!(String::from_utf8(bytes).unwrap().starts_with("id,username,team"));
    }

    #[test]
    fn test_demo_source_unknown_file() {
        let err = DemoSource.read("nope.csv").unwrap_err();
        assert!(matches!(err, Error::DemoFileNotFound(_)));
    }

    #[test]
    fn test_demo_files() {
        assert_eq!(demo_files(1), vec![DEMO_TEAMS, DEMO_RESULTS]);
        assert_eq!(demo_files(2), vec![DEMO_TEAMS, DEMO_RESULTS_2]);
    }

    #[test]
    fn test_ingest_demo_set_one() {
        let mut league = League::load(MemoryStore::new());
        let report =
            ingest(&mut league, &DemoSource, &demo_files(1), &NamingConvention::default()).unwrap();

        assert_eq!(report.rosters, vec![DEMO_TEAMS]);
        assert_eq!(report.standard_records, 11);
        assert_eq!(league.drivers().get("Kalle_R"), Some(25));
        assert_eq!(league.drivers().get("PrivateerPete"), Some(0));
        // Best two of Kalle_R 25, OttTanak 15, EsaPekka 6
        assert_eq!(league.teams().get("Nordic Sideways"), Some(40));
        assert_eq!(league.teams().get("Alpine Apex"), Some(29));
        assert_eq!(league.times().get("EsaPekka").unwrap().elapsed_ms, 2_590_900);
    }

    #[test]
    fn test_ingest_demo_set_two_has_no_times() {
        let mut league = League::load(MemoryStore::new());
        ingest(&mut league, &DemoSource, &demo_files(2), &NamingConvention::default()).unwrap();

        assert_eq!(league.drivers().get("ThierryN"), Some(25));
        assert!(league.times().is_empty());
    }
}
