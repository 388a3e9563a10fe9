pub mod config;
pub mod minimax;
pub mod random;
pub mod weighted;

pub use config::AIConfig;
pub use minimax::MinimaxCat;
pub use random::RandomMouse;
pub use weighted::WeightedMouse;
