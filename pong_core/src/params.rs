/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Court (units are pixels, y grows upward)
    pub const COURT_WIDTH: f64 = 800.0;
    pub const COURT_HEIGHT: f64 = 600.0;
    pub const WALL_THICKNESS: f64 = 20.0;

    // Paddle
    pub const PADDLE_WIDTH: f64 = 20.0;
    pub const PADDLE_HEIGHT: f64 = 100.0;
    pub const PADDLE_SPEED: f64 = 0.5; // units per millisecond
    pub const PADDLE_INSET: f64 = 60.0; // gap between side wall and paddle center

    // Ball
    pub const BALL_SIZE: f64 = 20.0;
    pub const BALL_SPEED: f64 = 0.45; // units per millisecond

    // Stepping
    pub const SUBSTEP_MS: i64 = 16; // Config::validate bounds ball travel per sub-step
    pub const MAX_FRAME_MS: i64 = 100; // clamp to prevent large jumps
}
