use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{ConfigError, Params, PlayerId};

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub court_width: f64,
    pub court_height: f64,
    pub wall_thickness: f64,
    pub paddle_width: f64,
    pub paddle_height: f64,
    pub paddle_speed: f64,
    pub paddle_inset: f64,
    pub ball_size: f64,
    pub ball_speed: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            court_width: Params::COURT_WIDTH,
            court_height: Params::COURT_HEIGHT,
            wall_thickness: Params::WALL_THICKNESS,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_inset: Params::PADDLE_INSET,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that the configuration describes a playable court
    pub fn validate(&self) -> Result<(), ConfigError> {
        let result = self.check();
        if let Err(err) = &result {
            warn!(%err, "rejected court configuration");
        }
        result
    }

    fn check(&self) -> Result<(), ConfigError> {
        positive("court_width", self.court_width)?;
        positive("court_height", self.court_height)?;
        positive("wall_thickness", self.wall_thickness)?;
        positive("paddle_width", self.paddle_width)?;
        positive("paddle_height", self.paddle_height)?;
        positive("ball_size", self.ball_size)?;
        speed("paddle_speed", self.paddle_speed)?;
        speed("ball_speed", self.ball_speed)?;

        if !self.paddle_inset.is_finite() || self.paddle_inset < 0.0 {
            return Err(ConfigError::NonPositive {
                field: "paddle_inset",
                value: self.paddle_inset,
            });
        }

        if 2.0 * self.wall_thickness >= self.court_width
            || 2.0 * self.wall_thickness >= self.court_height
        {
            return Err(ConfigError::WallsTooThick {
                thickness: self.wall_thickness,
                width: self.court_width,
                height: self.court_height,
            });
        }

        let travel = self.court_height - 2.0 * self.wall_thickness;
        if self.paddle_height > travel {
            return Err(ConfigError::PaddleTooTall {
                paddle_height: self.paddle_height,
                travel,
            });
        }

        if self.paddle_x(PlayerId::One) + self.paddle_width / 2.0
            >= self.paddle_x(PlayerId::Two) - self.paddle_width / 2.0
        {
            return Err(ConfigError::PaddlesOverlap {
                inset: self.paddle_inset,
                width: self.court_width,
            });
        }

        let travel = self.max_ball_travel();
        let limit = self.ball_travel_limit();
        if travel >= limit {
            return Err(ConfigError::BallTooFast { travel, limit });
        }

        Ok(())
    }

    /// Longest distance the ball covers in one `step` sub-step
    pub fn max_ball_travel(&self) -> f64 {
        (self.ball_speed * Params::SUBSTEP_MS as f64).round()
    }

    /// Sub-step travel at or above which the ball can skip a wall or paddle.
    /// Below it the ball's center never leaves the court before the wall
    /// reverses it.
    pub fn ball_travel_limit(&self) -> f64 {
        let wall = self.wall_thickness + self.ball_size / 2.0;
        let paddle = self.paddle_width + self.ball_size;
        wall.min(paddle)
    }

    /// Get X position for paddle based on player ID
    pub fn paddle_x(&self, player: PlayerId) -> f64 {
        match player {
            PlayerId::One => self.wall_thickness + self.paddle_inset,
            PlayerId::Two => self.court_width - self.wall_thickness - self.paddle_inset,
        }
    }

    /// Vertical travel range (bottom, top) shared by both paddles
    pub fn paddle_bounds(&self) -> (f64, f64) {
        (
            self.wall_thickness,
            self.court_height - self.wall_thickness,
        )
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn speed(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidSpeed { field, value })
    }
}
