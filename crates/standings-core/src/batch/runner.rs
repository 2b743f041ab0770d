use std::sync::mpsc;
use std::thread;

use tracing::{info, warn};

use super::{BatchCoordinator, FileFailure, FileKind, FileSource, FinalizedBatch, classify, display_name};
use crate::config::NamingConvention;
use crate::error::{Error, Result};
use crate::record::{ResultFormat, ResultRecord, decode_text, parse_results};
use crate::standings::League;
use crate::storage::KeyValueStore;
use crate::team::TeamRegistry;

/// What happened to each file of an upload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Roster files applied, in order (the last one wins)
    pub rosters: Vec<String>,
    /// Files refused because of their extension
    pub rejected: Vec<String>,
    pub failures: Vec<FileFailure>,
    pub standard_records: usize,
    pub bonus_records: usize,
}

impl IngestReport {
    pub fn scored(&self) -> bool {
        self.standard_records + self.bonus_records > 0
    }
}

struct ScoredJob<'a> {
    name: &'a str,
    kind: FileKind,
    format: ResultFormat,
}

/// Load an upload of roster and result files into `league`.
///
/// Rosters are applied first, so results in the same upload see the new
/// teams. Result files are then read concurrently, one thread each, and
/// scored as a single batch once every read has finished.
///
/// Returns [`Error::EmptyBatch`] when result files were given but none
/// produced a record; the league is left unchanged in that case.
pub fn ingest<S, F>(
    league: &mut League<S>,
    source: &F,
    names: &[String],
    naming: &NamingConvention,
) -> Result<IngestReport>
where
    S: KeyValueStore,
    F: FileSource,
{
    let mut report = IngestReport::default();
    let mut rosters = Vec::new();
    let mut jobs = Vec::new();

    for name in names {
        match classify(name, naming) {
            Ok((FileKind::Roster, _)) => rosters.push(name.as_str()),
            Ok((kind, format)) => jobs.push(ScoredJob { name, kind, format }),
            Err(e) => {
                warn!("{}", e);
                report.rejected.push(name.clone());
            }
        }
    }

    for name in rosters {
        match source.read(name) {
            Ok(bytes) => {
                let registry = TeamRegistry::parse(&decode_text(&bytes));
                info!("Loaded {} team assignments from {}", registry.len(), name);
                league.replace_registry(registry);
                report.rosters.push(name.to_string());
            }
            Err(e) => {
                warn!("Failed to read roster {}: {}", name, e);
                report.failures.push(FileFailure {
                    file: name.to_string(),
                    message: e.to_string(),
                });
            }
        }
    }

    if jobs.is_empty() {
        return Ok(report);
    }

    let batch = run_batch(source, &jobs)?;
    report.failures.extend(batch.failures.iter().cloned());
    report.standard_records = batch.standard.len();
    report.bonus_records = batch.bonus.len();
    league.apply_batch(&batch);

    Ok(report)
}

fn run_batch<F: FileSource>(source: &F, jobs: &[ScoredJob<'_>]) -> Result<FinalizedBatch> {
    let coordinator = BatchCoordinator::new();
    let ids: Vec<_> = jobs
        .iter()
        .map(|job| coordinator.submit(job.name, job.kind))
        .collect();

    let (tx, rx) = mpsc::channel();
    thread::scope(|scope| {
        for (job, id) in jobs.iter().zip(ids) {
            let tx = tx.clone();
            let coordinator = &coordinator;
            scope.spawn(move || {
                let outcome = read_records(source, job.name, job.format);
                if let Some(finalized) = coordinator.complete(id, outcome) {
                    // The receiver outlives the scope
                    let _ = tx.send(finalized);
                }
            });
        }
    });
    drop(tx);

    rx.recv().map_err(|_| Error::BatchInterrupted)?
}

fn read_records<F: FileSource>(
    source: &F,
    name: &str,
    format: ResultFormat,
) -> Result<Vec<ResultRecord>> {
    let bytes = source.read(name)?;
    parse_results(&decode_text(&bytes), display_name(name), format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::collections::HashMap;

    struct MapSource(HashMap<String, String>);

    impl MapSource {
        fn new(files: &[(&str, &str)]) -> Self {
            Self(
                files
                    .iter()
                    .map(|(name, content)| (name.to_string(), content.to_string()))
                    .collect(),
            )
        }
    }

    impl FileSource for MapSource {
        fn read(&self, name: &str) -> Result<Vec<u8>> {
            self.0
                .get(name)
                .map(|content| content.as_bytes().to_vec())
                .ok_or_else(|| {
                    Error::Io(std::io::Error::new(std::io::ErrorKind::NotFound, name.to_string()))
                })
        }
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_ingest_single_file() {
        let source = MapSource::new(&[("round1.csv", "place,username\n1,Alice\n2,Bob\n11,Carol\n")]);
        let mut league = League::load(MemoryStore::new());

        let report = ingest(&mut league, &source, &names(&["round1.csv"]), &NamingConvention::default())
            .unwrap();

        assert_eq!(report.standard_records, 3);
        assert!(report.scored());
        assert_eq!(league.drivers().get("Alice"), Some(25));
        assert_eq!(league.drivers().get("Bob"), Some(17));
        assert_eq!(league.drivers().get("Carol"), Some(0));
    }

    #[test]
    fn test_ingest_roster_applied_before_results() {
        let source = MapSource::new(&[
            ("round1.csv", "place,username\n1,Alice\n2,Bob\n"),
            ("league_teams.csv", "id,username,team\n1,Alice,Red\n2,Bob,Red\n"),
        ]);
        let mut league = League::load(MemoryStore::new());

        let report = ingest(
            &mut league,
            &source,
            &names(&["round1.csv", "league_teams.csv"]),
            &NamingConvention::default(),
        )
        .unwrap();

        assert_eq!(report.rosters, vec!["league_teams.csv"]);
        assert_eq!(league.registry().team_of("Alice"), Some("Red"));
        assert_eq!(league.teams().get("Red"), Some(42));
    }

    #[test]
    fn test_ingest_roster_only() {
        let source = MapSource::new(&[("x_teams.csv", "id,username,team\n1,Alice,Red\n")]);
        let mut league = League::load(MemoryStore::new());

        let report =
            ingest(&mut league, &source, &names(&["x_teams.csv"]), &NamingConvention::default()).unwrap();

        assert!(!report.scored());
        assert_eq!(league.registry().len(), 1);
        assert!(league.drivers().is_empty());
    }

    #[test]
    fn test_ingest_rejects_and_failures() {
        let source = MapSource::new(&[("round1.csv", "place,username\n1,Alice\n")]);
        let mut league = League::load(MemoryStore::new());

        let report = ingest(
            &mut league,
            &source,
            &names(&["notes.txt", "round1.csv", "missing.csv"]),
            &NamingConvention::default(),
        )
        .unwrap();

        assert_eq!(report.rejected, vec!["notes.txt"]);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].file, "missing.csv");
        assert_eq!(league.drivers().get("Alice"), Some(25));
    }

    #[test]
    fn test_ingest_empty_batch_leaves_league_unchanged() {
        let source = MapSource::new(&[("round1.csv", "place,username\n")]);
        let mut league = League::load(MemoryStore::new());

        let err = ingest(
            &mut league,
            &source,
            &names(&["round1.csv", "missing.csv"]),
            &NamingConvention::default(),
        )
        .unwrap_err();

        assert!(matches!(err, Error::EmptyBatch));
        assert!(league.drivers().is_empty());
    }

    #[test]
    fn test_ingest_multi_stage_times() {
        let source = MapSource::new(&[
            ("A.csv", "pos,driver,car,time\n1,Ann,Fabia,0:00:01.200\n2,Abe,Fabia,0:00:03.400\n"),
            ("B.csv", "pos,driver,car,time\n1,Ben,i20,0:00:02.000\n"),
        ]);
        let mut league = League::load(MemoryStore::new());

        ingest(&mut league, &source, &names(&["A.csv", "B.csv"]), &NamingConvention::default())
            .unwrap();

        assert_eq!(league.drivers().get("Ann"), Some(25));
        assert_eq!(league.drivers().get("Ben"), Some(17));
        assert_eq!(league.drivers().get("Abe"), Some(15));
        assert_eq!(league.times().get("Ben").unwrap().elapsed_ms, 2000);
    }

    #[test]
    fn test_ingest_bonus_file() {
        let source = MapSource::new(&[
            ("round1.csv", "place,username\n1,Alice\n2,Bob\n"),
            ("round1_powerstage.csv", "place,username\n1,Bob\n2,Alice\n"),
        ]);
        let mut league = League::load(MemoryStore::new());

        let report = ingest(
            &mut league,
            &source,
            &names(&["round1.csv", "round1_powerstage.csv"]),
            &NamingConvention::default(),
        )
        .unwrap();

        assert_eq!(report.bonus_records, 2);
        assert_eq!(league.drivers().get("Alice"), Some(25 + 4));
        assert_eq!(league.drivers().get("Bob"), Some(17 + 5));
    }
}
