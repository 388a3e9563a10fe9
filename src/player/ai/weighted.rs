use crate::core::{GameState, Position, Role};
use crate::logic::{evaluate, outcome, Outcome, ESCAPE_SCORE};
use crate::player::PlayerController;
use rand::prelude::*;
use std::f64;

/// A mouse that samples its move from a softmax over the static evaluation
/// of each destination. Plays plausibly toward the exit without being
/// deterministic, which makes self-play batches less repetitive than
/// [`super::RandomMouse`].
pub struct WeightedMouse {
    pub name: String,
    pub temperature: f64,
}

impl WeightedMouse {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            temperature: 1.0,
        }
    }

    /// Softmax-like probability distribution from scores
    fn get_probabilities(&self, state: &GameState, moves: &[Position]) -> Vec<f64> {
        let scores: Vec<f64> = moves
            .iter()
            .map(|&mv| {
                let next = state.with_position(Role::Mouse, mv);
                let score = match outcome(&next) {
                    Outcome::Escaped => ESCAPE_SCORE,
                    _ => evaluate(&next),
                };
                score as f64
            })
            .collect();

        if scores.is_empty() {
            return vec![];
        }

        let max_score = scores.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
        let exps: Vec<f64> = scores
            .iter()
            .map(|&s| ((s - max_score) / self.temperature).exp())
            .collect();
        let sum_exp: f64 = exps.iter().sum();

        exps.iter().map(|&e| e / sum_exp).collect()
    }
}

impl PlayerController for WeightedMouse {
    fn choose_move(&self, state: &GameState, moves: &[Position]) -> Option<Position> {
        if moves.is_empty() {
            return None;
        }

        let probs = self.get_probabilities(state, moves);
        let mut rng = thread_rng();

        // Weighted selection
        let mut r = rng.gen::<f64>();
        for (i, &p) in probs.iter().enumerate() {
            if r < p {
                return Some(moves[i]);
            }
            r -= p;
        }

        moves.last().copied()
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

    #[test]
    fn probabilities_form_a_distribution() {
        let mouse = WeightedMouse::new("Weighted");
        let state = GameState::classic(8);
        let moves = crate::logic::neighbors(state.mouse, state.dim);
        let probs = mouse.get_probabilities(&state, &moves);

        assert_eq!(probs.len(), moves.len());
        let total: f64 = probs.iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert!(probs.iter().all(|&p| p >= 0.0));
    }

    #[test]
    fn exit_step_dominates_the_distribution() {
        // Mouse next to the exit: the escaping move should carry almost all
        // of the probability mass.
        let state = GameState::new(
            Position::new(7, 0),
            Position::new(1, 7),
            Position::new(0, 7),
            8,
        );
        let mouse = WeightedMouse::new("Weighted");
        let moves = crate::logic::neighbors(state.mouse, state.dim);
        let probs = mouse.get_probabilities(&state, &moves);

        let exit_idx = moves
            .iter()
            .position(|&m| m == state.exit)
            .expect("exit is adjacent");
        assert!(probs[exit_idx] > 0.99);
    }
}
