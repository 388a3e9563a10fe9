//! # Minimax Search
//!
//! Fixed-depth adversarial search over the joint cat/mouse position space.
//! The mouse is the maximizing side, the cat the minimizing side; plies
//! alternate strictly, the opponent standing still while the mover steps to
//! one of its 4-neighbours. No pruning and no caching: the depth bound is
//! the sole cost control, so the tree is at most `4^depth` nodes.
//!
//! Ties between equally scored candidates go to the first one in
//! [`neighbors`] order (up, down, left, right). That rule is load-bearing:
//! it is what makes the engine deterministic and is asserted by the tests.

use crate::core::{GameState, Position, Role};
use crate::logic::{evaluate, neighbors, outcome};
use crate::player::ai::AIConfig;
use crate::player::PlayerController;
use rayon::prelude::*;

/// Score and the move at the root that achieves it.
///
/// `best_move` is `None` when the state is terminal, when the depth budget
/// is already exhausted, or when the mover has no legal move (a 1x1 board).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub best_move: Option<Position>,
}

/// Recursive minimax over the joint state.
///
/// Terminal states short-circuit before the depth check, so a capture found
/// mid-tree scores `-1000` no matter how much depth remains. At `depth == 0`
/// a non-terminal state scores by the static evaluation.
///
/// `i32::MIN` / `i32::MAX` serve as the initial sentinels; they are never
/// arithmetic operands, only compared against, and every reachable score is
/// bounded well inside them.
pub fn minimax(state: &GameState, depth: u32, mouse_to_move: bool) -> SearchResult {
    let status = outcome(state);
    if status.is_terminal() {
        return SearchResult {
            score: status.score(),
            best_move: None,
        };
    }

    if depth == 0 {
        return SearchResult {
            score: evaluate(state),
            best_move: None,
        };
    }

    if mouse_to_move {
        let mut best_score = i32::MIN;
        let mut best_move = None;
        for mv in neighbors(state.mouse, state.dim) {
            let next = state.with_position(Role::Mouse, mv);
            let result = minimax(&next, depth - 1, false);
            // Strict comparison: the first candidate keeps ties.
            if result.score > best_score {
                best_score = result.score;
                best_move = Some(mv);
            }
        }
        SearchResult {
            score: best_score,
            best_move,
        }
    } else {
        let mut worst_score = i32::MAX;
        let mut best_move = None;
        for mv in neighbors(state.cat, state.dim) {
            let next = state.with_position(Role::Cat, mv);
            let result = minimax(&next, depth - 1, true);
            if result.score < worst_score {
                worst_score = result.score;
                best_move = Some(mv);
            }
        }
        SearchResult {
            score: worst_score,
            best_move,
        }
    }
}

/// The cat's top-level decision: search `depth` plies with the cat to move
/// and return its chosen cell.
///
/// `Ok(None)` means the cat has no legal move and must stay put. Invalid
/// states (out-of-bounds positions, zero-sized board) fail fast instead of
/// searching garbage.
pub fn choose_move(state: &GameState, depth: u32) -> anyhow::Result<Option<Position>> {
    state.validate()?;
    Ok(minimax(state, depth, false).best_move)
}

/// Like [`choose_move`] but scores the root candidates on the rayon pool.
///
/// Each root move gets an independent subtree, so they evaluate in parallel;
/// the winner is then picked sequentially over the indexed scores, which
/// keeps the first-in-order tie-break identical to the serial search.
pub fn choose_move_parallel(state: &GameState, depth: u32) -> anyhow::Result<Option<Position>> {
    state.validate()?;
    if outcome(state).is_terminal() || depth == 0 {
        return Ok(None);
    }

    let moves = neighbors(state.cat, state.dim);
    let scored: Vec<i32> = moves
        .par_iter()
        .map(|&mv| {
            let next = state.with_position(Role::Cat, mv);
            minimax(&next, depth - 1, true).score
        })
        .collect();

    let mut best: Option<(usize, i32)> = None;
    for (i, &score) in scored.iter().enumerate() {
        if best.map_or(true, |(_, best_score)| score < best_score) {
            best = Some((i, score));
        }
    }
    Ok(best.map(|(i, _)| moves[i]))
}

/// The pursuer, as a [`PlayerController`] the game loop can drive.
pub struct MinimaxCat {
    pub name: String,
    pub depth: u32,
    pub parallel: bool,
}

impl MinimaxCat {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            depth: AIConfig::get().search.clamped_depth(),
            parallel: false,
        }
    }

    pub fn with_depth(name: &str, depth: u32) -> Self {
        Self {
            name: name.to_string(),
            depth,
            parallel: false,
        }
    }

    pub fn parallel(mut self) -> Self {
        self.parallel = true;
        self
    }
}

impl PlayerController for MinimaxCat {
    fn choose_move(&self, state: &GameState, legal_moves: &[Position]) -> Option<Position> {
        if legal_moves.is_empty() {
            return None;
        }

        let chosen = if self.parallel {
            choose_move_parallel(state, self.depth)
        } else {
            choose_move(state, self.depth)
        };

        // The loop validated the state already; a search failure here would
        // mean a corrupted state, and standing still is the safe answer.
        chosen.ok().flatten().or_else(|| legal_moves.first().copied())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_local(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::CAPTURE_SCORE;

    fn state(cat: (usize, usize), mouse: (usize, usize), exit: (usize, usize), dim: usize) -> GameState {
        GameState::new(
            Position::new(cat.0, cat.1),
            Position::new(mouse.0, mouse.1),
            Position::new(exit.0, exit.1),
            dim,
        )
    }

    #[test]
    fn terminal_short_circuits_before_depth() {
        // Cat on the mouse: capture score with no move, even with depth left.
        let s = state((1, 1), (1, 1), (2, 2), 3);
        for depth in [0, 1, 5] {
            let result = minimax(&s, depth, false);
            assert_eq!(result.score, CAPTURE_SCORE);
            assert_eq!(result.best_move, None);
        }
    }

    #[test]
    fn depth_zero_returns_static_evaluation() {
        let s = state((0, 0), (2, 2), (0, 2), 3);
        let result = minimax(&s, 0, false);
        assert_eq!(result.score, evaluate(&s));
        assert_eq!(result.best_move, None);
    }

    #[test]
    fn cat_takes_an_adjacent_mouse() {
        // Mouse one step to the right; depth 1 must walk into it.
        let s = state((1, 1), (1, 2), (0, 0), 3);
        let result = minimax(&s, 1, false);
        assert_eq!(result.score, CAPTURE_SCORE);
        assert_eq!(result.best_move, Some(Position::new(1, 2)));
    }

    #[test]
    fn mouse_steps_onto_the_exit() {
        // Mouse adjacent to the exit with the cat far away.
        let s = state((2, 0), (1, 2), (0, 2), 3);
        let result = minimax(&s, 2, true);
        assert_eq!(result.score, crate::logic::ESCAPE_SCORE);
        assert_eq!(result.best_move, Some(Position::new(0, 2)));
    }

    #[test]
    fn chosen_move_is_a_legal_neighbor() {
        let s = state((3, 3), (0, 0), (7, 7), 8);
        let chosen = choose_move(&s, 3).unwrap().unwrap();
        assert!(neighbors(s.cat, s.dim).contains(&chosen));
    }

    #[test]
    fn invalid_state_is_rejected() {
        let s = state((0, 5), (1, 1), (2, 2), 3);
        assert!(choose_move(&s, 3).is_err());
        assert!(choose_move_parallel(&s, 3).is_err());
    }

    #[test]
    fn parallel_root_agrees_with_serial_search() {
        let cases = [
            state((0, 0), (7, 7), (0, 7), 8),
            state((0, 0), (2, 2), (0, 2), 3),
            state((2, 2), (0, 0), (4, 4), 5),
            state((4, 1), (2, 6), (0, 7), 8),
        ];
        for s in cases {
            for depth in 1..=3 {
                assert_eq!(
                    choose_move_parallel(&s, depth).unwrap(),
                    choose_move(&s, depth).unwrap(),
                    "divergence at depth {depth} from {s:?}"
                );
            }
        }
    }

    #[test]
    fn parallel_root_on_settled_states() {
        // Terminal and depth-0 roots yield no move, matching the serial path.
        let caught = state((1, 1), (1, 1), (2, 2), 3);
        assert_eq!(choose_move_parallel(&caught, 3).unwrap(), None);

        let ongoing = state((0, 0), (2, 2), (0, 2), 3);
        assert_eq!(choose_move_parallel(&ongoing, 0).unwrap(), None);
    }
}
