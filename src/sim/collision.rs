//! Collision detection and response
//!
//! Axis-aligned geometry only: the ball is a square, paddles are rectangles
//! pinned to the left and right field edges. Wall and paddle checks are
//! independent axes and may both fire in the same frame; the goal check runs
//! last, against the post-movement ball position.

use rand::Rng;

use crate::config::FieldConfig;
use crate::sim::state::{MatchEvent, MatchState, Side};
use crate::spans_overlap;

/// Reflect the ball off the top/bottom field edges.
///
/// Vertical velocity flips exactly; horizontal velocity is untouched.
pub(crate) fn bounce_off_walls(state: &mut MatchState, cfg: &FieldConfig) {
    if state.ball_pos.y <= 0.0 || state.ball_pos.y >= cfg.max_ball_y() {
        state.ball_vel.y = -state.ball_vel.y;
        state.events.push(MatchEvent::WallHit);
    }
}

/// Bounce the ball off one paddle if it hit this frame.
///
/// A bounce requires all three of:
/// - the ball's leading edge has crossed the paddle hit-line
///   (paddle face plus `paddle_margin`),
/// - the ball vertically overlaps the paddle,
/// - the ball is moving toward that paddle. The velocity sign check keeps
///   the ball from re-bouncing inside the paddle body on consecutive frames.
///
/// On a hit, horizontal velocity reverses and gains `speed_up_factor`, and
/// vertical velocity is recomputed from the impact offset, which is how the
/// player steers the ball.
pub(crate) fn bounce_off_paddle(state: &mut MatchState, cfg: &FieldConfig, side: Side) {
    let at_hit_line = match side {
        Side::Left => {
            state.ball_pos.x <= cfg.paddle_width + cfg.paddle_margin && state.ball_vel.x < 0.0
        }
        Side::Right => {
            state.ball_pos.x >= cfg.field_width - cfg.paddle_width - cfg.paddle_margin - cfg.ball_size
                && state.ball_vel.x > 0.0
        }
    };
    if !at_hit_line {
        return;
    }

    let paddle_y = state.paddle_y(side);
    if !spans_overlap(state.ball_pos.y, cfg.ball_size, paddle_y, cfg.paddle_height) {
        return;
    }

    state.ball_vel.x = -state.ball_vel.x * cfg.speed_up_factor;
    let ball_center = state.ball_pos.y + cfg.ball_size / 2.0;
    let paddle_center = paddle_y + cfg.paddle_height / 2.0;
    state.ball_vel.y = (ball_center - paddle_center) * cfg.deflection_factor;
    state.events.push(MatchEvent::PaddleHit(side));
}

/// Check whether the ball has left the field horizontally and, if so, award
/// the point to the opposite side and serve a fresh ball.
///
/// Returns the scoring side.
pub(crate) fn score_on_exit<R: Rng + ?Sized>(
    state: &mut MatchState,
    cfg: &FieldConfig,
    rng: &mut R,
) -> Option<Side> {
    let exit_side = if state.ball_pos.x < 0.0 {
        Side::Left
    } else if state.ball_pos.x > cfg.field_width {
        Side::Right
    } else {
        return None;
    };

    let scorer = !exit_side;
    *state.score_mut(scorer) += 1;
    state.events.push(MatchEvent::Score(scorer));
    state.serve(cfg, rng);
    Some(scorer)
}
