use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use super::FileKind;
use crate::error::{Error, Result};
use crate::record::ResultRecord;

/// Identifier handed out by [`BatchCoordinator::submit`]
pub type FileId = usize;

/// A file that could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub file: String,
    pub message: String,
}

/// Records of a completed batch, ready to be scored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FinalizedBatch {
    /// Records scored with the selected table, already in finishing order
    pub standard: Vec<ResultRecord>,
    /// Records scored with the bonus table
    pub bonus: Vec<ResultRecord>,
    pub failures: Vec<FileFailure>,
}

impl FinalizedBatch {
    pub fn record_count(&self) -> usize {
        self.standard.len() + self.bonus.len()
    }
}

#[derive(Debug)]
struct SubmittedFile {
    name: String,
    kind: FileKind,
}

#[derive(Debug, Default)]
struct BatchState {
    files: Vec<SubmittedFile>,
    pending: HashSet<FileId>,
    parsed: HashMap<FileId, Vec<ResultRecord>>,
    failures: Vec<FileFailure>,
    finalized: bool,
}

/// Collects parse completions for a set of files and finalizes the batch once.
///
/// All files must be submitted before the first completion is reported;
/// the completion that empties the pending set finalizes the batch. The
/// pending-set update and the finalized check happen under one lock, so
/// concurrent completions cannot finalize twice.
#[derive(Debug, Default)]
pub struct BatchCoordinator {
    state: Mutex<BatchState>,
}

impl BatchCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, BatchState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a result file and mark it pending
    pub fn submit(&self, name: &str, kind: FileKind) -> FileId {
        debug_assert!(kind != FileKind::Roster, "rosters are not scored");
        let mut state = self.lock();
        if state.finalized {
            warn!("File {} submitted after the batch was finalized", name);
        }
        let id = state.files.len();
        state.files.push(SubmittedFile {
            name: name.to_string(),
            kind,
        });
        state.pending.insert(id);
        id
    }

    pub fn pending_count(&self) -> usize {
        self.lock().pending.len()
    }

    pub fn is_finalized(&self) -> bool {
        self.lock().finalized
    }

    /// Report that a file finished parsing, successfully or not.
    ///
    /// Returns the finalized batch for the completion that empties the pending
    /// set and `None` otherwise. Unknown or repeated ids are ignored. A batch
    /// in which no file produced records finalizes as [`Error::EmptyBatch`].
    pub fn complete(
        &self,
        id: FileId,
        outcome: Result<Vec<ResultRecord>>,
    ) -> Option<Result<FinalizedBatch>> {
        let mut state = self.lock();

        if !state.pending.remove(&id) {
            warn!("Ignoring completion for file #{} which is not pending", id);
            return None;
        }

        let name = state.files[id].name.clone();
        match outcome {
            Ok(records) if records.is_empty() => {
                debug!("{} produced no records", name);
            }
            Ok(records) => {
                debug!("{} parsed: {} records", name, records.len());
                state.parsed.insert(id, records);
            }
            Err(e) => {
                warn!("Failed to read {}: {}", name, e);
                state.failures.push(FileFailure {
                    file: name,
                    message: e.to_string(),
                });
            }
        }

        if !state.pending.is_empty() || state.finalized {
            return None;
        }
        state.finalized = true;
        Some(finalize(&mut state))
    }
}

fn finalize(state: &mut BatchState) -> Result<FinalizedBatch> {
    let mut standard_files: Vec<Vec<ResultRecord>> = Vec::new();
    let mut bonus = Vec::new();

    for (id, file) in state.files.iter().enumerate() {
        if let Some(records) = state.parsed.remove(&id) {
            match file.kind {
                FileKind::Bonus => bonus.extend(records),
                FileKind::Standard | FileKind::Roster => standard_files.push(records),
            }
        }
    }

    if standard_files.is_empty() && bonus.is_empty() {
        return Err(Error::EmptyBatch);
    }

    let standard = if standard_files.len() > 1 {
        rank_by_time(standard_files.into_iter().flatten().collect())
    } else {
        standard_files.into_iter().flatten().collect()
    };

    Ok(FinalizedBatch {
        standard,
        bonus,
        failures: std::mem::take(&mut state.failures),
    })
}

/// Combine per-file results into one ranking by elapsed time.
///
/// Records are stably sorted by elapsed time, with untimed records after all
/// timed ones, and places are reassigned from 1.
pub fn rank_by_time(mut records: Vec<ResultRecord>) -> Vec<ResultRecord> {
    records.sort_by_key(|record| (record.elapsed_ms.is_none(), record.elapsed_ms));
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.with_place(index as u32 + 1))
        .collect()
}
