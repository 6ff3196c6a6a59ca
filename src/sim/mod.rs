//! Deterministic match simulation
//!
//! All gameplay logic lives here. The module is pure and deterministic:
//! - One step per driver frame, no internal timers
//! - Injected RNG only (drivers seed a `rand_pcg::Pcg32`)
//! - No rendering, input, or platform dependencies

pub mod collision;
pub mod control;
pub mod opponent;
pub mod state;
pub mod step;

pub use control::{MatchController, MatchResult};
pub use state::{MatchEvent, MatchState, Phase, Side};
pub use step::{InputSnapshot, step};
