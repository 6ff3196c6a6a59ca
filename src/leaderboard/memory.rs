//! In-process leaderboard store

use crate::leaderboard::{NewScore, ScoreEntry, ScoreError, ScoreStore, now_ms, top_of};

/// Canonical in-memory store. Holds every accepted entry; listing sorts and
/// truncates on the way out.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Vec<ScoreEntry>,
    next_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with the arcade-cabinet starter entries, so a
    /// fresh deployment shows a non-empty board.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for (initials, score) in [("AAA", 1000), ("CPU", 800), ("DEV", 500)] {
            store.next_id += 1;
            store.entries.push(ScoreEntry {
                id: store.next_id,
                initials: initials.into(),
                score,
                created_at_ms: now_ms(),
            });
        }
        store
    }

    /// Number of entries held, including those beyond the listing cutoff
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ScoreStore for MemoryStore {
    fn top_scores(&self) -> Result<Vec<ScoreEntry>, ScoreError> {
        Ok(top_of(&self.entries))
    }

    fn submit(&mut self, score: NewScore) -> Result<ScoreEntry, ScoreError> {
        let (initials, score) = score.validated()?;
        self.next_id += 1;
        let entry = ScoreEntry {
            id: self.next_id,
            initials,
            score,
            created_at_ms: now_ms(),
        };
        self.entries.push(entry.clone());
        log::debug!("stored score {}={} (id {})", entry.initials, entry.score, entry.id);
        Ok(entry)
    }
}
