use thiserror::Error;

/// Rejected court or body configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be positive and finite, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must be finite and non-negative, got {value}")]
    InvalidSpeed { field: &'static str, value: f64 },

    #[error("walls of thickness {thickness} leave no room inside a {width}x{height} court")]
    WallsTooThick {
        thickness: f64,
        width: f64,
        height: f64,
    },

    #[error("paddle height {paddle_height} exceeds vertical travel range {travel}")]
    PaddleTooTall { paddle_height: f64, travel: f64 },

    #[error("paddles at inset {inset} overlap each other in a court of width {width}")]
    PaddlesOverlap { inset: f64, width: f64 },

    #[error("ball travels {travel} units per sub-step, must stay below {limit} to hit walls and paddles")]
    BallTooFast { travel: f64, limit: f64 },
}
