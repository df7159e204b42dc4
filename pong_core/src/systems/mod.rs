pub mod collision;
pub mod movement;

pub use collision::*;
pub use movement::*;
