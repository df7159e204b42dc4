use crate::{Ball, Events, GameRng, Paddle, PlayerId, Sign, Wall};
use hecs::World;

/// Check ball collisions with paddles and walls
///
/// Paddles are tested before walls so a wall's forced direction is always the
/// last word; a paddle's random vertical flip cannot point the ball back into
/// a wall it overlaps. Each kind is tested in ascending id order, so a run is
/// reproducible for a fixed seed.
pub fn check_collisions(world: &mut World, rng: &mut GameRng, events: &mut Events) {
    // Collect obstacles first so the ball query can borrow the world mutably
    let mut walls: Vec<Wall> = world
        .query::<&Wall>()
        .iter()
        .map(|(_e, wall)| wall.clone())
        .collect();
    walls.sort_by_key(Wall::id);

    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| paddle.clone())
        .collect();
    paddles.sort_by_key(Paddle::id);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            // Only a ball heading toward this paddle's goal bounces off it
            if ball.check_paddle_collision(paddle) && should_bounce(ball, paddle) {
                ball.on_player_collision(paddle.id(), &mut rng.0);
                events.paddle_hits.push(paddle.id());
            }
        }

        for wall in &walls {
            if ball.check_wall_collision(wall) {
                ball.on_wall_collision(wall.id());
                events.wall_hits.push(wall.id());
            }
        }
    }
}

fn should_bounce(ball: &Ball, paddle: &Paddle) -> bool {
    let toward_goal = match paddle.id() {
        PlayerId::One => Sign::Minus,
        PlayerId::Two => Sign::Plus,
    };
    ball.direction().x == toward_goal
}
