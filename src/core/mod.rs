pub mod types;

pub use types::{GameState, Position, Role};
