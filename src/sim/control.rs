//! Match lifecycle state machine
//!
//! `Idle -> start -> Running -> win -> Finished -> start -> Running`.
//! The controller owns the `MatchState` and hands the driver a read-only
//! view each frame; on `Finished` it exposes the result for leaderboard
//! submission but never performs persistence itself.

use rand::Rng;

use crate::config::FieldConfig;
use crate::sim::state::{MatchEvent, MatchState, Phase, Side};
use crate::sim::step::{InputSnapshot, step};

/// Final outcome of a finished match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    pub winner: Side,
    pub left_score: u32,
    pub right_score: u32,
}

/// Owns a match from Idle through Finished and back
#[derive(Debug, Clone)]
pub struct MatchController {
    cfg: FieldConfig,
    state: MatchState,
}

impl MatchController {
    /// Create a controller with a match parked at `Idle`
    pub fn new(cfg: FieldConfig) -> Self {
        let state = MatchState::new(&cfg);
        Self { cfg, state }
    }

    /// Start (or restart) the match.
    ///
    /// Valid from `Idle` and `Finished`; a running match is left alone.
    /// Re-initializes everything: centered paddles and ball, zero scores,
    /// the fixed opening serve.
    pub fn start(&mut self) {
        if self.state.phase == Phase::Running {
            log::warn!("start ignored: match already running");
            return;
        }
        self.state = MatchState::new(&self.cfg);
        self.state.phase = Phase::Running;
        log::info!("match started, first to {}", self.cfg.win_threshold);
    }

    /// Advance one frame. Does nothing unless the match is running.
    pub fn frame<R: Rng + ?Sized>(&mut self, input: InputSnapshot, rng: &mut R) {
        step(&mut self.state, input, &self.cfg, rng);
    }

    /// Read-only state snapshot for the render collaborator
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Field configuration this match was created with
    pub fn config(&self) -> &FieldConfig {
        &self.cfg
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Drain the feedback events emitted by the most recent frame
    pub fn drain_events(&mut self) -> impl Iterator<Item = MatchEvent> + '_ {
        self.state.drain_events()
    }

    /// Outcome of the match, available once `Finished`
    pub fn result(&self) -> Option<MatchResult> {
        match (self.state.phase, self.state.winner) {
            (Phase::Finished, Some(winner)) => Some(MatchResult {
                winner,
                left_score: self.state.left_score,
                right_score: self.state.right_score,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn starts_from_idle_with_fixed_serve() {
        let mut ctl = MatchController::new(FieldConfig::default());
        assert_eq!(ctl.phase(), Phase::Idle);
        assert!(ctl.result().is_none());

        ctl.start();
        assert_eq!(ctl.phase(), Phase::Running);
        assert_eq!(ctl.state().ball_vel, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn start_is_ignored_while_running() {
        let mut ctl = MatchController::new(FieldConfig::default());
        ctl.start();
        ctl.state.left_score = 3;
        ctl.start();
        assert_eq!(ctl.state().left_score, 3);
    }

    #[test]
    fn frame_does_nothing_before_start() {
        let mut ctl = MatchController::new(FieldConfig::default());
        let mut rng = Pcg32::seed_from_u64(0);
        let pos = ctl.state().ball_pos;
        ctl.frame(InputSnapshot::default(), &mut rng);
        assert_eq!(ctl.state().ball_pos, pos);
    }

    #[test]
    fn finished_match_exposes_result_and_restarts() {
        let mut ctl = MatchController::new(FieldConfig::default());
        let mut rng = Pcg32::seed_from_u64(0);
        ctl.start();

        // Put the match at match point and push the ball out on the right
        ctl.state.left_score = 9;
        ctl.state.right_score = 4;
        ctl.state.ball_pos = Vec2::new(801.0, 300.0);
        ctl.state.ball_vel = Vec2::new(5.0, 0.0);
        ctl.frame(InputSnapshot::default(), &mut rng);

        assert_eq!(ctl.phase(), Phase::Finished);
        assert_eq!(
            ctl.result(),
            Some(MatchResult {
                winner: Side::Left,
                left_score: 10,
                right_score: 4,
            })
        );

        // Replay: everything back to defaults
        ctl.start();
        assert_eq!(ctl.phase(), Phase::Running);
        assert_eq!((ctl.state().left_score, ctl.state().right_score), (0, 0));
        assert!(ctl.result().is_none());
    }

    #[test]
    fn plays_a_full_match_to_completion() {
        // Nobody defends, so the rallies are short; the match must still
        // terminate with a winner at exactly the threshold.
        let cfg = FieldConfig::default();
        let mut ctl = MatchController::new(cfg.clone());
        let mut rng = Pcg32::seed_from_u64(1234);
        ctl.start();

        let mut frames = 0u32;
        while ctl.phase() == Phase::Running {
            ctl.frame(InputSnapshot::default(), &mut rng);
            frames += 1;
            assert!(frames < 2_000_000, "match never terminated");
        }

        let result = ctl.result().unwrap();
        let winning_score = result.left_score.max(result.right_score);
        assert_eq!(winning_score, cfg.win_threshold);
        assert_eq!(
            result.winner,
            if result.left_score > result.right_score {
                Side::Left
            } else {
                Side::Right
            }
        );
    }
}
