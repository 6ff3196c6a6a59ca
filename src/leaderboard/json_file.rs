//! JSON-file leaderboard store
//!
//! Offline/local fallback behind the same [`ScoreStore`] contract as the
//! in-memory store, selected at deployment time. The full entry list is
//! written out as JSON after every accepted submission.

use std::fs;
use std::path::{Path, PathBuf};

use crate::leaderboard::{NewScore, ScoreEntry, ScoreError, ScoreStore, now_ms, top_of};

/// Leaderboard persisted to a JSON file
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: Vec<ScoreEntry>,
}

impl JsonFileStore {
    /// Open a store at `path`, loading any previously saved entries.
    ///
    /// A missing file is a fresh board. An unreadable file is a storage
    /// error; an unparsable one is treated as a fresh board (the save is
    /// best-effort local state, not a source of truth worth failing over).
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ScoreError> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str::<Vec<ScoreEntry>>(&json) {
                Ok(entries) => {
                    log::info!("loaded {} leaderboard entries", entries.len());
                    entries
                }
                Err(err) => {
                    log::warn!("discarding corrupt leaderboard file: {err}");
                    Vec::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!("no leaderboard file, starting fresh");
                Vec::new()
            }
            Err(err) => return Err(ScoreError::Storage(err.to_string())),
        };
        Ok(Self { path, entries })
    }

    fn persist(&self) -> Result<(), ScoreError> {
        let json = serde_json::to_string(&self.entries)
            .map_err(|err| ScoreError::Storage(err.to_string()))?;
        fs::write(&self.path, json).map_err(|err| ScoreError::Storage(err.to_string()))
    }

    fn next_id(&self) -> u64 {
        self.entries.iter().map(|e| e.id).max().unwrap_or(0) + 1
    }
}

impl ScoreStore for JsonFileStore {
    fn top_scores(&self) -> Result<Vec<ScoreEntry>, ScoreError> {
        Ok(top_of(&self.entries))
    }

    fn submit(&mut self, score: NewScore) -> Result<ScoreEntry, ScoreError> {
        let (initials, score) = score.validated()?;
        let entry = ScoreEntry {
            id: self.next_id(),
            initials,
            score,
            created_at_ms: now_ms(),
        };
        self.entries.push(entry.clone());
        if let Err(err) = self.persist() {
            // Keep memory and disk consistent on failure
            self.entries.pop();
            return Err(err);
        }
        log::debug!("saved leaderboard ({} entries)", self.entries.len());
        Ok(entry)
    }
}
