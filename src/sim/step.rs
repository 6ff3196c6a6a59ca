//! Per-frame simulation step
//!
//! The driver calls [`step`] exactly once per rendering frame while the
//! match is running. A step is a pure, infallible state transformation:
//! nothing in it can fail, block, or suspend.

use rand::Rng;

use crate::clamp;
use crate::config::FieldConfig;
use crate::sim::collision::{bounce_off_paddle, bounce_off_walls, score_on_exit};
use crate::sim::opponent::track_ball;
use crate::sim::state::{MatchState, Phase, Side};

/// Resolved movement actions held this frame
///
/// Sampled once per frame by the input collaborator; the physical key
/// mapping is its concern. Opposite actions held together cancel out
/// (both are applied, additively).
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    pub move_up: bool,
    pub move_down: bool,
}

/// Advance the match by one frame.
///
/// Order within the frame: player input, opponent tracking, Euler ball
/// move, wall bounce, both paddle bounces, goal check against the
/// post-movement position, win check. The ball advances one full
/// velocity-scaled step with no sub-stepping, so a sufficiently fast ball
/// can tunnel through a paddle; that is an accepted limit of the design.
///
/// Calling `step` on a non-running match is a no-op, so a driver that keeps
/// ticking after the match finished just observes the frozen final state.
pub fn step<R: Rng + ?Sized>(
    state: &mut MatchState,
    input: InputSnapshot,
    cfg: &FieldConfig,
    rng: &mut R,
) {
    if state.phase != Phase::Running {
        return;
    }
    state.events.clear();

    // Player paddle
    let mut dy = 0.0;
    if input.move_up {
        dy -= cfg.player_speed;
    }
    if input.move_down {
        dy += cfg.player_speed;
    }
    state.left_paddle_y = clamp(state.left_paddle_y + dy, 0.0, cfg.max_paddle_y());

    // Opponent paddle
    state.right_paddle_y = track_ball(state.right_paddle_y, state.ball_pos.y, cfg);

    // Explicit Euler: one velocity-scaled step per frame
    state.ball_pos += state.ball_vel;

    bounce_off_walls(state, cfg);
    bounce_off_paddle(state, cfg, Side::Left);
    bounce_off_paddle(state, cfg, Side::Right);

    // Terminal transition, after scoring. Only the side that just scored
    // can newly reach the threshold.
    if let Some(scorer) = score_on_exit(state, cfg, rng) {
        if state.score(scorer) >= cfg.win_threshold {
            state.phase = Phase::Finished;
            state.winner = Some(scorer);
            log::info!(
                "match finished: {scorer:?} wins {}-{}",
                state.left_score,
                state.right_score
            );
        }
    }
}
