//! Motion and collision core for a two-player paddle game.
//!
//! The entity types can be driven directly, one method call at a time, or
//! stored in a [`hecs::World`] and advanced with [`step`].

pub mod components;
pub mod config;
pub mod court;
pub mod error;
pub mod geometry;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use court::*;
pub use error::*;
pub use geometry::*;
pub use params::*;
pub use resources::*;

use hecs::{Entity, World};
use systems::*;
use tracing::trace;

/// Advance the simulation by `time.dt_ms`
///
/// Long frames are clamped to [`Params::MAX_FRAME_MS`] and split into
/// sub-steps of at most [`Params::SUBSTEP_MS`]. Each sub-step moves the
/// paddles, then the ball, then resolves collisions.
pub fn step(world: &mut World, time: &mut Time, rng: &mut GameRng, events: &mut Events) {
    events.clear();

    let frame_ms = time.dt_ms.clamp(0, Params::MAX_FRAME_MS);
    let mut remaining_ms = frame_ms;
    while remaining_ms > 0 {
        let step_ms = remaining_ms.min(Params::SUBSTEP_MS);
        remaining_ms -= step_ms;

        let step_time = Time::new(step_ms, time.now_ms + (frame_ms - remaining_ms));

        // 1. Move paddles based on intents
        move_paddles(world, &step_time);

        // 2. Move ball
        move_ball(world, &step_time);

        // 3. Check collisions (ball vs walls, paddles)
        check_collisions(world, rng, events);
    }

    time.now_ms += frame_ms;
    trace!(frame_ms, now_ms = time.now_ms, "simulation stepped");
}

/// Entities spawned for one court
#[derive(Debug, Clone, Copy)]
pub struct CourtEntities {
    pub ball: Entity,
    pub paddles: [Entity; 2],
    pub walls: [Entity; 4],
}

/// Spawn the four walls, both paddles and the ball of `court`
pub fn spawn_court(world: &mut World, court: &Court) -> CourtEntities {
    let walls = court.walls().map(|wall| create_wall(world, wall));
    let paddles = [PlayerId::One, PlayerId::Two].map(|id| {
        let paddle = court.paddle(id);
        create_paddle(world, paddle)
    });
    let ball = create_ball(world, court.ball());
    CourtEntities {
        ball,
        paddles,
        walls,
    }
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, paddle: Paddle) -> Entity {
    world.spawn((paddle, PaddleIntent::default()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> Entity {
    world.spawn((ball,))
}

/// Helper to create a wall entity
pub fn create_wall(world: &mut World, wall: Wall) -> Entity {
    world.spawn((wall,))
}
