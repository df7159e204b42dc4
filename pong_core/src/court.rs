use glam::DVec2;

use crate::{Ball, Color, Config, ConfigError, Paddle, PlayerId, Wall, WallId};

/// Court layout derived from a validated [`Config`]
///
/// The origin is the bottom-left corner and y grows upward, so the
/// `Top` wall runs along `y = height` and "up" for a paddle means +y.
#[derive(Debug, Clone)]
pub struct Court {
    pub width: f64,
    pub height: f64,
    config: Config,
}

impl Court {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            width: config.court_width,
            height: config.court_height,
            config: config.clone(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn ball_spawn(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn paddle_spawn(&self, player: PlayerId) -> DVec2 {
        DVec2::new(self.config.paddle_x(player), self.height / 2.0)
    }

    pub fn wall(&self, id: WallId) -> Wall {
        let t = self.config.wall_thickness;
        let (center, size) = match id {
            WallId::Left => (
                DVec2::new(t / 2.0, self.height / 2.0),
                DVec2::new(t, self.height),
            ),
            WallId::Right => (
                DVec2::new(self.width - t / 2.0, self.height / 2.0),
                DVec2::new(t, self.height),
            ),
            WallId::Top => (
                DVec2::new(self.width / 2.0, self.height - t / 2.0),
                DVec2::new(self.width, t),
            ),
            WallId::Bottom => (
                DVec2::new(self.width / 2.0, t / 2.0),
                DVec2::new(self.width, t),
            ),
        };
        Wall::new(id, center, size, Color::GRAY)
    }

    pub fn walls(&self) -> [Wall; 4] {
        WallId::ALL.map(|id| self.wall(id))
    }

    pub fn paddle(&self, player: PlayerId) -> Paddle {
        let color = match player {
            PlayerId::One => Color::GREEN,
            PlayerId::Two => Color::BLUE,
        };
        Paddle::new(
            player,
            self.paddle_spawn(player),
            DVec2::new(self.config.paddle_width, self.config.paddle_height),
            color,
            self.config.paddle_bounds(),
            self.config.paddle_speed,
        )
    }

    pub fn ball(&self) -> Ball {
        Ball::new(
            self.ball_spawn(),
            DVec2::splat(self.config.ball_size),
            Color::WHITE,
            self.config.ball_speed,
        )
    }
}
