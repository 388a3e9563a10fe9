//! # Game Logic Module
//!
//! Board geometry, terminal-state detection and the static evaluation
//! function. Everything here is a pure function of the `GameState`; the
//! search engine in `player::ai::minimax` and the game loop both build on
//! these primitives.
//!
//! ## Score Conventions
//! Scores are always from the mouse's (maximizer's) perspective:
//! - capture is `-1000`, escape is `+1000`;
//! - the heuristic rewards distance from the cat and closeness to the exit.

use crate::core::{GameState, Position};
use crate::player::ai::AIConfig;

/// Score of a captured mouse, from the mouse's perspective.
pub const CAPTURE_SCORE: i32 = -1000;
/// Score of a mouse standing on the exit.
pub const ESCAPE_SCORE: i32 = 1000;

/// Status of a joint state. Exactly one variant applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    /// Cat and mouse share a cell.
    Captured,
    /// Mouse stands on the exit cell.
    Escaped,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::Ongoing
    }

    /// Terminal score, `0` for an ongoing game.
    pub fn score(self) -> i32 {
        match self {
            Outcome::Ongoing => 0,
            Outcome::Captured => CAPTURE_SCORE,
            Outcome::Escaped => ESCAPE_SCORE,
        }
    }
}

/// Classifies a joint state. Capture is checked before escape, so a mouse
/// that reaches the exit on the same cell as the cat counts as caught.
pub fn outcome(state: &GameState) -> Outcome {
    if state.cat == state.mouse {
        Outcome::Captured
    } else if state.mouse == state.exit {
        Outcome::Escaped
    } else {
        Outcome::Ongoing
    }
}

// Enumeration order up, down, left, right. The search breaks score ties by
// taking the first candidate, so this order is part of the engine's contract.
const OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// The in-bounds 4-neighbourhood of `pos` on a `dim` x `dim` board.
///
/// Returns at most 4 cells; on a 1x1 board the result is empty.
pub fn neighbors(pos: Position, dim: usize) -> Vec<Position> {
    let mut moves = Vec::with_capacity(4);
    for (dr, dc) in OFFSETS {
        let nr = pos.row as i32 + dr;
        let nc = pos.col as i32 + dc;
        if nr >= 0 && nc >= 0 && (nr as usize) < dim && (nc as usize) < dim {
            moves.push(Position::new(nr as usize, nc as usize));
        }
    }
    moves
}

/// Manhattan distance between two cells.
pub fn manhattan(a: Position, b: Position) -> i32 {
    let dr = (a.row as i32 - b.row as i32).abs();
    let dc = (a.col as i32 - b.col as i32).abs();
    dr + dc
}

/// Static evaluation of a non-terminal state, used when the search runs out
/// of depth.
///
/// `cat_w * d(cat, mouse) - exit_w * d(mouse, exit)` with the weights taken
/// from [`AIConfig`] (defaults 2 and 3). High is good for the mouse: the cat
/// far away and the exit close by.
pub fn evaluate(state: &GameState) -> i32 {
    let weights = &AIConfig::get().evaluation;
    weights.cat_distance_weight * manhattan(state.cat, state.mouse)
        - weights.exit_distance_weight * manhattan(state.mouse, state.exit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbor_order_is_up_down_left_right() {
        let moves = neighbors(Position::new(2, 2), 5);
        assert_eq!(
            moves,
            vec![
                Position::new(1, 2),
                Position::new(3, 2),
                Position::new(2, 1),
                Position::new(2, 3),
            ]
        );
    }

    #[test]
    fn neighbors_clipped_at_the_border() {
        // Top-left corner keeps only down and right.
        let moves = neighbors(Position::new(0, 0), 3);
        assert_eq!(moves, vec![Position::new(1, 0), Position::new(0, 1)]);

        // Bottom edge drops the down move.
        let moves = neighbors(Position::new(2, 1), 3);
        assert_eq!(
            moves,
            vec![
                Position::new(1, 1),
                Position::new(2, 0),
                Position::new(2, 2),
            ]
        );
    }

    #[test]
    fn one_by_one_board_has_no_moves() {
        assert!(neighbors(Position::new(0, 0), 1).is_empty());
    }

    #[test]
    fn capture_takes_precedence_over_escape() {
        // Mouse on the exit AND under the cat counts as caught.
        let both = Position::new(1, 1);
        let state = GameState::new(both, both, both, 3);
        assert_eq!(outcome(&state), Outcome::Captured);
        assert_eq!(outcome(&state).score(), CAPTURE_SCORE);
    }

    #[test]
    fn outcome_classification() {
        let state = GameState::classic(4);
        assert_eq!(outcome(&state), Outcome::Ongoing);

        let caught = state.with_position(crate::core::Role::Cat, state.mouse);
        assert_eq!(outcome(&caught), Outcome::Captured);

        let escaped = state.with_position(crate::core::Role::Mouse, state.exit);
        assert_eq!(outcome(&escaped), Outcome::Escaped);
    }

    #[test]
    fn evaluation_rewards_cat_distance() {
        // Exit and mouse fixed; pushing the cat away must strictly raise the
        // score.
        let mouse = Position::new(4, 4);
        let exit = Position::new(0, 7);
        let near = GameState::new(Position::new(4, 5), mouse, exit, 8);
        let far = GameState::new(Position::new(0, 0), mouse, exit, 8);
        assert!(evaluate(&far) > evaluate(&near));
    }

    #[test]
    fn evaluation_rewards_exit_proximity() {
        // Cat fixed, cat-mouse distance held constant; moving the mouse
        // toward the exit must strictly raise the score.
        let cat = Position::new(4, 4);
        let exit = Position::new(0, 0);
        let close = GameState::new(cat, Position::new(2, 4), exit, 8);
        let distant = GameState::new(cat, Position::new(4, 6), exit, 8);
        assert_eq!(
            manhattan(cat, close.mouse),
            manhattan(cat, distant.mouse)
        );
        assert!(evaluate(&close) > evaluate(&distant));
    }

    #[test]
    fn evaluation_matches_default_weights() {
        // 2 * d(cat, mouse) - 3 * d(mouse, exit) with the shipped defaults.
        let state = GameState::new(
            Position::new(0, 0),
            Position::new(2, 2),
            Position::new(0, 2),
            3,
        );
        assert_eq!(evaluate(&state), 2 * 4 - 3 * 2);
    }
}
