use crate::core::{GameState, Position};

/// A source of moves for one agent.
///
/// The game loop hands the controller the current state together with the
/// mover's legal destination cells and expects one of them back. `None`
/// means the controller declines to move (a human resigning); it is never
/// returned merely because the choice is hard.
pub trait PlayerController {
    fn choose_move(&self, state: &GameState, legal_moves: &[Position]) -> Option<Position>;
    fn name(&self) -> &str;
    fn is_local(&self) -> bool;
}
