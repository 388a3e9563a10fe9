use crate::core::{GameState, Position};
use crate::player::PlayerController;
use rand::seq::SliceRandom;

/// A mouse that scurries uniformly at random. Baseline opponent for
/// self-play batches.
pub struct RandomMouse {
    pub name: String,
}

impl RandomMouse {
    pub fn new(name: &str) -> Self {
        RandomMouse {
            name: name.to_string(),
        }
    }
}

impl PlayerController for RandomMouse {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, _state: &GameState, legal_moves: &[Position]) -> Option<Position> {
        let mut rng = rand::thread_rng();
        legal_moves.choose(&mut rng).copied()
    }

    fn is_local(&self) -> bool {
        true
    }
}
