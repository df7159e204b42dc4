use glam::DVec2;
use rand::Rng;
use tracing::{debug, trace};

use crate::geometry::{Aabb, Direction, Sign};

/// RGB fill color handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 128, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Court edge a wall sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WallId {
    Left,
    Right,
    Top,
    Bottom,
}

impl WallId {
    pub const ALL: [WallId; 4] = [WallId::Left, WallId::Right, WallId::Top, WallId::Bottom];
}

/// Paddle owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlayerId {
    One, // left paddle
    Two, // right paddle
}

/// Read-only view of anything drawn as a filled rectangle
pub trait Body {
    /// Center position, rounded to whole units
    fn center(&self) -> DVec2;
    fn size(&self) -> DVec2;
    fn color(&self) -> Color;

    fn width(&self) -> f64 {
        self.size().x
    }

    fn height(&self) -> f64 {
        self.size().y
    }

    fn hitbox(&self) -> Aabb {
        Aabb::snapped(self.center(), self.size())
    }
}

/// Distance covered in `delta_ms` at `speed`, rounded to whole units.
/// Negative deltas count as zero.
fn travel(delta_ms: i64, speed: f64) -> f64 {
    (delta_ms.max(0) as f64 * speed).round()
}

fn sanitize_speed(speed: f64) -> f64 {
    if speed.is_finite() {
        speed.max(0.0)
    } else {
        0.0
    }
}

/// Tracks side walls whose bounce was handled but not yet cleared
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct CornerGuard {
    left: bool,
    right: bool,
}

/// Ball component - the pong ball
#[derive(Debug, Clone)]
pub struct Ball {
    center: DVec2,
    size: DVec2,
    speed: f64,
    dir: Direction,
    color: Color,
    hitbox: Aabb,
    serve_x: f64,
    guard: CornerGuard,
}

impl Ball {
    /// `speed` is in units per millisecond. The ball starts heading (+1, +1).
    pub fn new(center: DVec2, size: DVec2, color: Color, speed: f64) -> Self {
        let mut ball = Self {
            center,
            size,
            speed: sanitize_speed(speed),
            dir: Direction::default(),
            color,
            hitbox: Aabb::snapped(center, size),
            serve_x: center.x,
            guard: CornerGuard::default(),
        };
        ball.rebuild_hitbox();
        ball
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = sanitize_speed(speed);
    }

    pub fn direction(&self) -> Direction {
        self.dir
    }

    pub fn set_direction(&mut self, dir: Direction) {
        self.dir = dir;
    }

    /// X coordinate that clears the corner-stick guard once crossed
    pub fn serve_x(&self) -> f64 {
        self.serve_x
    }

    pub fn is_guarded(&self, wall: WallId) -> bool {
        match wall {
            WallId::Left => self.guard.left,
            WallId::Right => self.guard.right,
            WallId::Top | WallId::Bottom => false,
        }
    }

    /// Move the ball to `center` after a point; it becomes the new serve line.
    pub fn reset(&mut self, center: DVec2) {
        self.center = center;
        self.serve_x = center.x;
        self.guard = CornerGuard::default();
        self.rebuild_hitbox();
        debug!(x = center.x, y = center.y, "ball reset");
    }

    /// Advance the ball by `delta_ms` milliseconds of travel
    pub fn update(&mut self, delta_ms: i64) {
        let step = travel(delta_ms, self.speed);
        self.center += self.dir.as_vec() * step;
        self.refresh_guard();
        self.rebuild_hitbox();
        trace!(x = self.center.x, y = self.center.y, step, "ball moved");
    }

    /// Whether the ball hits `wall`, with repeat hits on a guarded side wall
    /// suppressed. A suppressed hit still points the ball back into the court.
    pub fn check_wall_collision(&mut self, wall: &Wall) -> bool {
        if !self.hitbox.intersects(&wall.hitbox()) {
            return false;
        }

        match wall.id() {
            WallId::Left if self.guard.left => {
                self.dir.x = Sign::Plus;
                debug!(wall = ?wall.id(), "repeat wall hit suppressed");
                false
            }
            WallId::Right if self.guard.right => {
                self.dir.x = Sign::Minus;
                debug!(wall = ?wall.id(), "repeat wall hit suppressed");
                false
            }
            _ => true,
        }
    }

    pub fn check_paddle_collision(&self, paddle: &Paddle) -> bool {
        self.hitbox.intersects(&paddle.hitbox())
    }

    /// Point the ball away from `wall`
    pub fn on_wall_collision(&mut self, wall: WallId) {
        match wall {
            WallId::Left => {
                self.dir.x = Sign::Plus;
                self.guard = CornerGuard {
                    left: true,
                    right: false,
                };
            }
            WallId::Right => {
                self.dir.x = Sign::Minus;
                self.guard = CornerGuard {
                    left: false,
                    right: true,
                };
            }
            WallId::Top => self.dir.y = Sign::Minus,
            WallId::Bottom => self.dir.y = Sign::Plus,
        }
        debug!(?wall, dir = ?self.dir, "ball bounced off wall");
    }

    /// Send the ball back across the court. The vertical direction is kept
    /// or reversed on a fair coin flip.
    pub fn on_player_collision<R: Rng + ?Sized>(&mut self, player: PlayerId, rng: &mut R) {
        let coin = if rng.gen_bool(0.5) {
            Sign::Plus
        } else {
            Sign::Minus
        };
        self.dir.x = -self.dir.x;
        self.dir.y = self.dir.y * coin;
        debug!(?player, dir = ?self.dir, "ball bounced off paddle");
    }

    fn refresh_guard(&mut self) {
        if self.guard.left && self.center.x > self.serve_x {
            self.guard.left = false;
            trace!("left wall guard cleared");
        }
        if self.guard.right && self.center.x < self.serve_x {
            self.guard.right = false;
            trace!("right wall guard cleared");
        }
    }

    fn rebuild_hitbox(&mut self) {
        self.hitbox = Aabb::snapped(self.center(), self.size);
    }
}

impl Body for Ball {
    fn center(&self) -> DVec2 {
        self.center.round()
    }

    fn size(&self) -> DVec2 {
        self.size
    }

    fn color(&self) -> Color {
        self.color
    }

    fn hitbox(&self) -> Aabb {
        self.hitbox
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    id: PlayerId,
    center: DVec2,
    size: DVec2,
    color: Color,
    bottom: f64,
    top: f64,
    speed: f64,
}

impl Paddle {
    /// `bounds` is the (bottom, top) range the paddle's vertical extent must
    /// stay inside. The starting y is snapped to a whole unit inside that
    /// range, so every later move keeps it whole.
    pub fn new(
        id: PlayerId,
        center: DVec2,
        size: DVec2,
        color: Color,
        bounds: (f64, f64),
        speed: f64,
    ) -> Self {
        let (bottom, top) = bounds;
        let half_height = size.y / 2.0;
        let low = (bottom + half_height).ceil();
        let high = (top - half_height).floor();
        let mut center = center;
        center.y = if low <= high {
            center.y.round().clamp(low, high)
        } else {
            ((bottom + top) / 2.0).round()
        };

        Self {
            id,
            center,
            size,
            color,
            bottom,
            top,
            speed: sanitize_speed(speed),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// (bottom, top) limits of vertical travel
    pub fn bounds(&self) -> (f64, f64) {
        (self.bottom, self.top)
    }

    /// Move toward the top bound unless the move would cross it
    pub fn move_up(&mut self, delta_ms: i64) {
        let step = travel(delta_ms, self.speed);
        if step <= 0.0 {
            return;
        }
        let y = self.center.y + step;
        if y + self.size.y / 2.0 <= self.top {
            self.center.y = y;
        } else {
            trace!(player = ?self.id, "paddle move up rejected at bound");
        }
    }

    /// Move toward the bottom bound unless the move would cross it
    pub fn move_down(&mut self, delta_ms: i64) {
        let step = travel(delta_ms, self.speed);
        if step <= 0.0 {
            return;
        }
        let y = self.center.y - step;
        if y - self.size.y / 2.0 >= self.bottom {
            self.center.y = y;
        } else {
            trace!(player = ?self.id, "paddle move down rejected at bound");
        }
    }

    pub fn apply_intent(&mut self, intent: PaddleIntent, delta_ms: i64) {
        match intent {
            PaddleIntent::Up => self.move_up(delta_ms),
            PaddleIntent::Down => self.move_down(delta_ms),
            PaddleIntent::Idle => {}
        }
    }
}

impl Body for Paddle {
    fn center(&self) -> DVec2 {
        self.center.round()
    }

    fn size(&self) -> DVec2 {
        self.size
    }

    fn color(&self) -> Color {
        self.color
    }
}

/// Movement intent for paddle, set by the input handler each frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaddleIntent {
    #[default]
    Idle,
    Up,
    Down,
}

/// Static obstacle along one court edge
#[derive(Debug, Clone)]
pub struct Wall {
    id: WallId,
    center: DVec2,
    size: DVec2,
    color: Color,
}

impl Wall {
    pub fn new(id: WallId, center: DVec2, size: DVec2, color: Color) -> Self {
        Self {
            id,
            center,
            size,
            color,
        }
    }

    pub fn id(&self) -> WallId {
        self.id
    }
}

impl Body for Wall {
    fn center(&self) -> DVec2 {
        self.center.round()
    }

    fn size(&self) -> DVec2 {
        self.size
    }

    fn color(&self) -> Color {
        self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;

    fn ball_at(x: f64, y: f64) -> Ball {
        Ball::new(
            DVec2::new(x, y),
            DVec2::new(10.0, 10.0),
            Color::WHITE,
            0.5,
        )
    }

    fn wall(id: WallId, x: f64, y: f64, w: f64, h: f64) -> Wall {
        Wall::new(id, DVec2::new(x, y), DVec2::new(w, h), Color::GRAY)
    }

    fn paddle_at(y: f64) -> Paddle {
        Paddle::new(
            PlayerId::One,
            DVec2::new(20.0, y),
            DVec2::new(4.0, 10.0),
            Color::GREEN,
            (0.0, 200.0),
            0.3,
        )
    }

    // gen_bool(0.5) is true for a zero draw and false for u64::MAX
    fn heads() -> StepRng {
        StepRng::new(0, 0)
    }

    fn tails() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    #[test]
    fn test_ball_starts_heading_plus_plus() {
        let ball = ball_at(50.0, 50.0);
        assert_eq!(ball.direction(), Direction::new(Sign::Plus, Sign::Plus));
        assert_eq!(ball.hitbox().min, DVec2::new(45.0, 45.0));
    }

    #[test]
    fn test_ball_update_moves_rounded_distance() {
        let mut ball = ball_at(50.0, 50.0);
        ball.update(20);
        assert_eq!(ball.center(), DVec2::new(60.0, 60.0));
        assert_eq!(ball.hitbox().min, DVec2::new(55.0, 55.0));
        assert_eq!(ball.hitbox().max, DVec2::new(65.0, 65.0));
    }

    #[test]
    fn test_ball_update_rounds_both_directions_alike() {
        let mut ball = ball_at(50.0, 50.0);
        ball.set_direction(Direction::new(Sign::Minus, Sign::Plus));
        // 5 * 0.5 = 2.5 rounds to 3 on both axes
        ball.update(5);
        assert_eq!(ball.center(), DVec2::new(47.0, 53.0));
    }

    #[test]
    fn test_ball_update_zero_and_negative_delta_do_not_move() {
        let mut ball = ball_at(50.0, 50.0);
        ball.update(0);
        assert_eq!(ball.center(), DVec2::new(50.0, 50.0));
        ball.update(-40);
        assert_eq!(ball.center(), DVec2::new(50.0, 50.0));
        assert_eq!(ball.direction(), Direction::default());
    }

    #[test]
    fn test_ball_negative_speed_is_clamped() {
        let mut ball = Ball::new(DVec2::ZERO, DVec2::splat(10.0), Color::WHITE, -1.0);
        assert_eq!(ball.speed(), 0.0);
        ball.set_speed(f64::INFINITY);
        assert_eq!(ball.speed(), 0.0);
        ball.set_speed(0.8);
        assert_eq!(ball.speed(), 0.8);
    }

    #[test]
    fn test_right_wall_overlap_sets_direction_left() {
        let mut ball = ball_at(50.0, 50.0);
        let right = wall(WallId::Right, 58.0, 50.0, 10.0, 100.0);
        assert!(ball.check_wall_collision(&right));
        ball.on_wall_collision(WallId::Right);
        assert_eq!(ball.direction().x, Sign::Minus);
    }

    #[test]
    fn test_wall_reactions_are_unconditional_sets() {
        for start in [Sign::Plus, Sign::Minus] {
            let mut ball = ball_at(50.0, 50.0);
            ball.set_direction(Direction::new(start, start));

            ball.on_wall_collision(WallId::Left);
            assert_eq!(ball.direction().x, Sign::Plus);
            ball.on_wall_collision(WallId::Left);
            assert_eq!(ball.direction().x, Sign::Plus, "Left is a set, not a toggle");

            ball.on_wall_collision(WallId::Right);
            assert_eq!(ball.direction().x, Sign::Minus);

            ball.set_direction(Direction::new(start, start));
            ball.on_wall_collision(WallId::Top);
            assert_eq!(ball.direction().y, Sign::Minus);
            ball.on_wall_collision(WallId::Bottom);
            assert_eq!(ball.direction().y, Sign::Plus);
            assert_eq!(ball.direction().x, start, "Top/Bottom leave x alone");
        }
    }

    #[test]
    fn test_no_collision_when_apart() {
        let mut ball = ball_at(50.0, 50.0);
        let left = wall(WallId::Left, 5.0, 50.0, 10.0, 100.0);
        assert!(!ball.check_wall_collision(&left));
        assert!(!ball.check_paddle_collision(&paddle_at(150.0)));
    }

    #[test]
    fn test_paddle_collision_is_pure() {
        let ball = ball_at(22.0, 100.0);
        let paddle = paddle_at(100.0);
        assert!(ball.check_paddle_collision(&paddle));
        assert!(ball.check_paddle_collision(&paddle));
        assert_eq!(ball.direction(), Direction::default());
    }

    #[test]
    fn test_player_collision_toggles_x_and_keeps_y_on_heads() {
        let mut ball = ball_at(50.0, 50.0);
        ball.on_player_collision(PlayerId::Two, &mut heads());
        assert_eq!(ball.direction(), Direction::new(Sign::Minus, Sign::Plus));
        ball.on_player_collision(PlayerId::One, &mut heads());
        assert_eq!(ball.direction(), Direction::new(Sign::Plus, Sign::Plus));
    }

    #[test]
    fn test_player_collision_reverses_y_on_tails() {
        let mut ball = ball_at(50.0, 50.0);
        ball.on_player_collision(PlayerId::One, &mut tails());
        assert_eq!(ball.direction(), Direction::new(Sign::Minus, Sign::Minus));
    }

    #[test]
    fn test_player_collision_coin_is_fair() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(12345);
        let trials = 10_000;
        let mut kept = 0;
        let mut ball = ball_at(50.0, 50.0);
        for _ in 0..trials {
            let before = ball.direction();
            ball.on_player_collision(PlayerId::One, &mut rng);
            let after = ball.direction();
            assert_eq!(after.x, -before.x);
            if after.y == before.y {
                kept += 1;
            }
        }
        let ratio = kept as f64 / trials as f64;
        assert!(
            (0.45..0.55).contains(&ratio),
            "Coin flip should be fair, kept y {} of {} times",
            kept,
            trials
        );
    }

    #[test]
    fn test_corner_guard_suppresses_repeat_left_hit() {
        let mut ball = ball_at(12.0, 50.0);
        let left = wall(WallId::Left, 5.0, 50.0, 10.0, 100.0);

        assert!(ball.check_wall_collision(&left));
        ball.on_wall_collision(WallId::Left);
        assert!(ball.is_guarded(WallId::Left));

        // Same x, still overlapping: reported as no collision
        assert!(!ball.check_wall_collision(&left));
        assert_eq!(ball.direction().x, Sign::Plus);
    }

    #[test]
    fn test_suppressed_hit_still_forces_outward() {
        let mut ball = ball_at(12.0, 50.0);
        let left = wall(WallId::Left, 5.0, 50.0, 10.0, 100.0);
        ball.on_wall_collision(WallId::Left);
        ball.set_direction(Direction::new(Sign::Minus, Sign::Plus));

        assert!(!ball.check_wall_collision(&left));
        assert_eq!(ball.direction().x, Sign::Plus, "Guard points ball back in");
    }

    #[test]
    fn test_corner_guard_clears_past_serve_line() {
        let mut ball = ball_at(100.0, 50.0);
        ball.reset(DVec2::new(12.0, 50.0));
        let left = wall(WallId::Left, 5.0, 50.0, 10.0, 100.0);

        // Serve line is now 12; arm the guard there
        assert!(ball.check_wall_collision(&left));
        ball.on_wall_collision(WallId::Left);
        assert!(ball.is_guarded(WallId::Left));

        ball.update(2); // moves right by 1
        assert!(ball.center().x > ball.serve_x());
        assert!(!ball.is_guarded(WallId::Left));
    }

    #[test]
    fn test_guard_stays_armed_until_serve_line() {
        let mut ball = ball_at(100.0, 50.0);
        ball.reset(DVec2::new(100.0, 50.0));
        ball.on_wall_collision(WallId::Left);
        ball.update(20); // x 110 > serve line 100
        assert!(!ball.is_guarded(WallId::Left));

        ball.on_wall_collision(WallId::Right);
        assert!(ball.is_guarded(WallId::Right));
        ball.update(10); // x 105, still right of the serve line
        assert!(ball.is_guarded(WallId::Right));
        ball.update(20); // x 95
        assert!(!ball.is_guarded(WallId::Right));
    }

    #[test]
    fn test_opposite_side_hit_swaps_guard() {
        let mut ball = ball_at(50.0, 50.0);
        ball.on_wall_collision(WallId::Left);
        ball.on_wall_collision(WallId::Right);
        assert!(!ball.is_guarded(WallId::Left));
        assert!(ball.is_guarded(WallId::Right));
    }

    #[test]
    fn test_top_bottom_hits_are_never_guarded() {
        let mut ball = ball_at(50.0, 95.0);
        let top = wall(WallId::Top, 50.0, 100.0, 100.0, 4.0);
        assert!(ball.check_wall_collision(&top));
        ball.on_wall_collision(WallId::Top);
        assert!(ball.check_wall_collision(&top), "Top wall has no guard");
        assert!(!ball.is_guarded(WallId::Top));
    }

    #[test]
    fn test_reset_clears_guard_and_moves_hitbox() {
        let mut ball = ball_at(12.0, 50.0);
        ball.on_wall_collision(WallId::Left);
        ball.reset(DVec2::new(400.0, 300.0));
        assert!(!ball.is_guarded(WallId::Left));
        assert_eq!(ball.center(), DVec2::new(400.0, 300.0));
        assert_eq!(ball.hitbox().min, DVec2::new(395.0, 295.0));
        assert_eq!(ball.serve_x(), 400.0);
    }

    #[test]
    fn test_paddle_move_up() {
        let mut paddle = paddle_at(100.0);
        paddle.move_up(100);
        assert_eq!(paddle.center().y, 130.0);
    }

    #[test]
    fn test_paddle_move_down() {
        let mut paddle = paddle_at(100.0);
        paddle.move_down(100);
        assert_eq!(paddle.center().y, 70.0);
    }

    #[test]
    fn test_paddle_move_rejected_at_top() {
        let mut paddle = paddle_at(180.0);
        // 180 + 30 + 5 = 215 > 200
        paddle.move_up(100);
        assert_eq!(paddle.center().y, 180.0);
        // 180 + 15 + 5 = 200 is still inside
        paddle.move_up(50);
        assert_eq!(paddle.center().y, 195.0);
    }

    #[test]
    fn test_paddle_move_rejected_at_bottom() {
        let mut paddle = paddle_at(20.0);
        paddle.move_down(100);
        assert_eq!(paddle.center().y, 20.0);
        paddle.move_down(50);
        assert_eq!(paddle.center().y, 5.0);
    }

    #[test]
    fn test_paddle_ignores_non_positive_delta() {
        let mut paddle = paddle_at(100.0);
        paddle.move_up(0);
        paddle.move_up(-100);
        paddle.move_down(-100);
        assert_eq!(paddle.center().y, 100.0);
    }

    #[test]
    fn test_paddle_spawn_clamped_into_bounds() {
        let paddle = paddle_at(500.0);
        assert_eq!(paddle.center().y, 195.0);
        let paddle = paddle_at(-20.0);
        assert_eq!(paddle.center().y, 5.0);
    }

    #[test]
    fn test_paddle_extent_respects_fractional_bounds() {
        let mut paddle = Paddle::new(
            PlayerId::Two,
            DVec2::new(20.0, 5.2),
            DVec2::new(4.0, 10.0),
            Color::BLUE,
            (0.4, 199.6),
            0.3,
        );
        assert_eq!(paddle.center().y, 6.0, "Snapped up to the first whole y inside");

        paddle.move_down(4); // step 1 would put the bottom edge at 0.0
        assert_eq!(paddle.center().y, 6.0);
        assert!(paddle.center().y - paddle.height() / 2.0 >= 0.4);

        for _ in 0..100 {
            paddle.move_up(20);
        }
        assert_eq!(paddle.center().y, 192.0); // 6 + 31 * 6; one more step would cross
        assert!(paddle.center().y + paddle.height() / 2.0 <= 199.6);
    }

    #[test]
    fn test_paddle_spawn_snapped_to_whole_units() {
        let paddle = paddle_at(100.3);
        assert_eq!(paddle.center().y, 100.0);
        assert_eq!(paddle.hitbox().min.y, 95.0);
    }

    #[test]
    fn test_paddle_apply_intent() {
        let mut paddle = paddle_at(100.0);
        paddle.apply_intent(PaddleIntent::Up, 10);
        assert_eq!(paddle.center().y, 103.0);
        paddle.apply_intent(PaddleIntent::Idle, 10);
        assert_eq!(paddle.center().y, 103.0);
        paddle.apply_intent(PaddleIntent::Down, 20);
        assert_eq!(paddle.center().y, 97.0);
    }

    #[test]
    fn test_body_accessors() {
        let w = wall(WallId::Bottom, 400.0, 10.0, 800.0, 20.0);
        assert_eq!(w.id(), WallId::Bottom);
        assert_eq!(w.width(), 800.0);
        assert_eq!(w.height(), 20.0);
        assert_eq!(w.color(), Color::GRAY);
        assert_eq!(w.hitbox().min, DVec2::new(0.0, 0.0));
    }
}
