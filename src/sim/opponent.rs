//! Reactive opponent paddle controller
//!
//! Stateless and deterministic: the new paddle position is a pure function
//! of the current paddle position and the ball's vertical position. No
//! prediction, no history, no randomness. The dead-zone keeps tracking
//! imperfect on purpose: perfect mirroring would make the match unwinnable.

use crate::clamp;
use crate::config::FieldConfig;

/// Compute the opponent paddle's position for this frame.
///
/// Moves one `opponent_speed` step toward the ball whenever the paddle
/// center is more than `opponent_dead_zone` away from it, otherwise holds.
/// The result is clamped to the field's vertical bounds.
pub(crate) fn track_ball(paddle_y: f32, ball_y: f32, cfg: &FieldConfig) -> f32 {
    let center = paddle_y + cfg.paddle_height / 2.0;
    let next = if center < ball_y - cfg.opponent_dead_zone {
        paddle_y + cfg.opponent_speed
    } else if center > ball_y + cfg.opponent_dead_zone {
        paddle_y - cfg.opponent_speed
    } else {
        paddle_y
    };
    clamp(next, 0.0, cfg.max_paddle_y())
}
