//! Match state and core simulation types

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::FieldConfig;

/// Discrete match lifecycle stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Created, waiting for a start command
    #[default]
    Idle,
    /// Active gameplay, stepped once per frame
    Running,
    /// A side reached the win threshold; frozen until reset
    Finished,
}

/// A side of the field. `Left` is the player, `Right` the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl std::ops::Not for Side {
    type Output = Side;

    fn not(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Discrete feedback events emitted during a step, for the audio/UI
/// collaborator. Never gameplay-affecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchEvent {
    /// Ball bounced off the top or bottom field edge
    WallHit,
    /// Ball bounced off the given side's paddle
    PaddleHit(Side),
    /// The given side scored a point
    Score(Side),
}

/// Complete match state, owned exclusively by the stepping driver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    /// Player paddle top edge
    pub left_paddle_y: f32,
    /// Opponent paddle top edge
    pub right_paddle_y: f32,
    /// Ball top-left corner
    pub ball_pos: Vec2,
    /// Ball movement per frame
    pub ball_vel: Vec2,
    pub left_score: u32,
    pub right_score: u32,
    pub phase: Phase,
    /// Set exactly once, on the transition to `Finished`
    pub winner: Option<Side>,
    /// Events emitted by the most recent step (cleared at step start)
    #[serde(skip)]
    pub events: Vec<MatchEvent>,
}

impl MatchState {
    /// Create a match at `Idle`: paddles and ball centered, zero scores.
    /// The serve velocity is fixed at `(serve_speed, serve_speed)` so the
    /// opening exchange is identical every match.
    pub fn new(cfg: &FieldConfig) -> Self {
        Self {
            left_paddle_y: cfg.centered_paddle_y(),
            right_paddle_y: cfg.centered_paddle_y(),
            ball_pos: Vec2::new(cfg.center_x(), cfg.center_y()),
            ball_vel: Vec2::new(cfg.serve_speed, cfg.serve_speed),
            left_score: 0,
            right_score: 0,
            phase: Phase::Idle,
            winner: None,
            events: Vec::new(),
        }
    }

    /// Score tally for one side
    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left_score,
            Side::Right => self.right_score,
        }
    }

    pub(crate) fn score_mut(&mut self, side: Side) -> &mut u32 {
        match side {
            Side::Left => &mut self.left_score,
            Side::Right => &mut self.right_score,
        }
    }

    /// Paddle top edge for one side
    pub fn paddle_y(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.left_paddle_y,
            Side::Right => self.right_paddle_y,
        }
    }

    /// Snap the ball back to field center and serve it with a random
    /// direction: horizontal sign uniform, vertical uniform in
    /// `[-serve_speed, serve_speed]`.
    pub(crate) fn serve<R: Rng + ?Sized>(&mut self, cfg: &FieldConfig, rng: &mut R) {
        self.ball_pos = Vec2::new(cfg.center_x(), cfg.center_y());
        let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.ball_vel = Vec2::new(
            sign * cfg.serve_speed,
            rng.random_range(-cfg.serve_speed..=cfg.serve_speed),
        );
    }

    /// Drain the events emitted by the most recent step
    pub fn drain_events(&mut self) -> impl Iterator<Item = MatchEvent> + '_ {
        self.events.drain(..)
    }
}
