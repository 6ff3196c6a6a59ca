//! Arcade Pong - a two-paddle ball game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, match state machine)
//! - `config`: Data-driven field/tuning constants
//! - `leaderboard`: Persisted top-score store behind a storage trait
//!
//! The crate is driven externally: a render/input driver samples input once
//! per frame and advances the simulation one step. Rendering, key mapping and
//! audio synthesis live in the driver; the core hands them `MatchState` and
//! discrete `MatchEvent`s.

pub mod config;
pub mod leaderboard;
pub mod sim;

pub use config::FieldConfig;
pub use leaderboard::{NewScore, ScoreEntry, ScoreError, ScoreStore};
pub use sim::{InputSnapshot, MatchController, MatchEvent, MatchState, Phase, Side, step};

/// Clamp a value to `[min, max]`
///
/// Total over the reals; NaN propagates unchanged.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// 1-D interval overlap test: does `[a_start, a_start + a_len]` intersect
/// `[b_start, b_start + b_len]`?
#[inline]
pub fn spans_overlap(a_start: f32, a_len: f32, b_start: f32, b_len: f32) -> bool {
    a_start + a_len >= b_start && a_start <= b_start + b_len
}
