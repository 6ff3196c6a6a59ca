//! Persisted top-score leaderboard
//!
//! The match core never touches persistence; a finished match's result is
//! handed to whichever [`ScoreStore`] the deployment selected. Two stores
//! ship with the crate: [`MemoryStore`] (canonical in-process store) and
//! [`JsonFileStore`] (offline fallback persisting to a JSON file).

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of entries a listing returns
pub const MAX_LEADERBOARD_ENTRIES: usize = 10;

/// A persisted leaderboard record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// Store-assigned identifier
    pub id: u64,
    /// Player initials, stored uppercase
    pub initials: String,
    pub score: u32,
    /// Unix timestamp (ms) the entry was created
    pub created_at_ms: u64,
}

/// A score submission, unvalidated
///
/// `score` is signed so that out-of-range input is representable and can be
/// rejected with a field-level error instead of silently wrapping.
#[derive(Debug, Clone)]
pub struct NewScore {
    pub initials: String,
    pub score: i64,
}

/// Leaderboard failure taxonomy
///
/// `Validation` is the caller's fault (malformed submission); `Storage` is
/// an unexpected backend failure. Callers surface them differently and the
/// match state is never affected by either.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: &'static str,
    },
    #[error("storage unavailable: {0}")]
    Storage(String),
}

impl ScoreError {
    fn invalid(field: &'static str, message: &'static str) -> Self {
        ScoreError::Validation { field, message }
    }
}

/// Storage-agnostic leaderboard contract
pub trait ScoreStore {
    /// Top entries, sorted by score descending (ties: oldest first),
    /// truncated to [`MAX_LEADERBOARD_ENTRIES`] even when storage holds more.
    fn top_scores(&self) -> Result<Vec<ScoreEntry>, ScoreError>;

    /// Validate and persist a submission, returning the stored record with
    /// its assigned id and creation timestamp.
    fn submit(&mut self, score: NewScore) -> Result<ScoreEntry, ScoreError>;
}

impl NewScore {
    /// Validate the submission, returning normalized initials and the score.
    pub(crate) fn validated(&self) -> Result<(String, u32), ScoreError> {
        let initials = self.initials.trim();
        if initials.is_empty() {
            return Err(ScoreError::invalid("initials", "must not be empty"));
        }
        if initials.chars().count() > 3 {
            return Err(ScoreError::invalid("initials", "must be at most 3 characters"));
        }
        if !initials.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ScoreError::invalid("initials", "must be ASCII letters or digits"));
        }
        if self.score < 0 {
            return Err(ScoreError::invalid("score", "must be non-negative"));
        }
        let score = u32::try_from(self.score)
            .map_err(|_| ScoreError::invalid("score", "out of range"))?;
        Ok((initials.to_ascii_uppercase(), score))
    }
}

/// Sorted, truncated view over a full entry list
pub(crate) fn top_of(entries: &[ScoreEntry]) -> Vec<ScoreEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| b.score.cmp(&a.score).then(a.id.cmp(&b.id)));
    sorted.truncate(MAX_LEADERBOARD_ENTRIES);
    sorted
}

/// Current wall-clock time in Unix milliseconds
pub(crate) fn now_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: ScoreError) -> &'static str {
        match err {
            ScoreError::Validation { field, .. } => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn empty_initials_are_rejected() {
        let err = NewScore { initials: "".into(), score: 5 }.validated().unwrap_err();
        assert_eq!(field_of(err), "initials");
    }

    #[test]
    fn whitespace_initials_are_rejected() {
        let err = NewScore { initials: "   ".into(), score: 5 }.validated().unwrap_err();
        assert_eq!(field_of(err), "initials");
    }

    #[test]
    fn long_initials_are_rejected() {
        let err = NewScore { initials: "ABCD".into(), score: 5 }.validated().unwrap_err();
        assert_eq!(field_of(err), "initials");
    }

    #[test]
    fn non_alphanumeric_initials_are_rejected() {
        let err = NewScore { initials: "A!".into(), score: 5 }.validated().unwrap_err();
        assert_eq!(field_of(err), "initials");
    }

    #[test]
    fn negative_score_is_rejected() {
        let err = NewScore { initials: "AB".into(), score: -1 }.validated().unwrap_err();
        assert_eq!(field_of(err), "score");
    }

    #[test]
    fn valid_submission_normalizes_initials() {
        let (initials, score) = NewScore { initials: "ab".into(), score: 42 }
            .validated()
            .unwrap();
        assert_eq!(initials, "AB");
        assert_eq!(score, 42);
    }

    #[test]
    fn validation_error_message_names_the_field() {
        let err = NewScore { initials: "".into(), score: 5 }.validated().unwrap_err();
        assert!(err.to_string().contains("initials"));
    }

    #[test]
    fn top_of_sorts_descending_and_breaks_ties_by_id() {
        let entries: Vec<ScoreEntry> = [(1, 50), (2, 90), (3, 50), (4, 120)]
            .iter()
            .map(|&(id, score)| ScoreEntry {
                id,
                initials: "AAA".into(),
                score,
                created_at_ms: 0,
            })
            .collect();
        let top = top_of(&entries);
        let order: Vec<(u64, u32)> = top.iter().map(|e| (e.id, e.score)).collect();
        assert_eq!(order, vec![(4, 120), (2, 90), (1, 50), (3, 50)]);
    }
}
