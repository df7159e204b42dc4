use crate::{PlayerId, WallId};

/// Time resource for tracking simulation time, in milliseconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Time {
    pub dt_ms: i64,  // Elapsed time for this frame
    pub now_ms: i64, // Total simulated time
}

impl Time {
    pub fn new(dt_ms: i64, now_ms: i64) -> Self {
        Self { dt_ms, now_ms }
    }
}

/// Random number generator shared by every paddle bounce of a game
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Fresh OS-seeded generator, for variety between games
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Collisions that fired during this frame, in the order they were handled
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub wall_hits: Vec<WallId>,
    pub paddle_hits: Vec<PlayerId>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.wall_hits.clear();
        self.paddle_hits.clear();
    }

    pub fn ball_hit_wall(&self) -> bool {
        !self.wall_hits.is_empty()
    }

    pub fn ball_hit_paddle(&self) -> bool {
        !self.paddle_hits.is_empty()
    }
}
