//! Field dimensions and gameplay tuning
//!
//! All values are empirically tuned configuration, not derived quantities.
//! A `FieldConfig` is immutable for the lifetime of a match.

use serde::{Deserialize, Serialize};

/// Field geometry and tuning constants for a match
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Playfield width
    pub field_width: f32,
    /// Playfield height
    pub field_height: f32,
    /// Paddle width (hit-line depth)
    pub paddle_width: f32,
    /// Paddle height (vertical extent)
    pub paddle_height: f32,
    /// Ball side length (the ball is a square)
    pub ball_size: f32,
    /// Score at which a side wins the match
    pub win_threshold: u32,
    /// Player paddle movement per frame
    pub player_speed: f32,
    /// Opponent paddle movement per frame
    pub opponent_speed: f32,
    /// Multiplier applied to horizontal ball speed on every paddle bounce.
    /// Unbounded on purpose: the difficulty ramp has no speed cap.
    pub speed_up_factor: f32,
    /// Converts paddle-impact offset into resulting vertical ball velocity
    pub deflection_factor: f32,
    /// Horizontal margin past the paddle face within which a bounce triggers
    pub paddle_margin: f32,
    /// Tolerance band within which the opponent paddle holds still
    pub opponent_dead_zone: f32,
    /// Horizontal ball speed magnitude after a serve
    pub serve_speed: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            field_width: 800.0,
            field_height: 600.0,
            paddle_width: 15.0,
            paddle_height: 100.0,
            ball_size: 12.0,
            win_threshold: 10,
            player_speed: 8.0,
            opponent_speed: 4.5,
            speed_up_factor: 1.05,
            deflection_factor: 0.35,
            paddle_margin: 10.0,
            opponent_dead_zone: 35.0,
            serve_speed: 5.0,
        }
    }
}

impl FieldConfig {
    /// Horizontal center of the field
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.field_width / 2.0
    }

    /// Vertical center of the field
    #[inline]
    pub fn center_y(&self) -> f32 {
        self.field_height / 2.0
    }

    /// Highest legal paddle top position
    #[inline]
    pub fn max_paddle_y(&self) -> f32 {
        self.field_height - self.paddle_height
    }

    /// Paddle top position that centers the paddle vertically
    #[inline]
    pub fn centered_paddle_y(&self) -> f32 {
        (self.field_height - self.paddle_height) / 2.0
    }

    /// Lowest ball top position still inside the field
    #[inline]
    pub fn max_ball_y(&self) -> f32 {
        self.field_height - self.ball_size
    }
}
