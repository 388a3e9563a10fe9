use crate::core::{GameState, Role};
use crate::logic::{neighbors, outcome, Outcome};
use crate::player::ai::MinimaxCat;
use crate::player::{PlayerController, RandomMouse, WeightedMouse};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Which evader the cat plays against in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseKind {
    Random,
    Weighted,
}

pub struct SelfPlayConfig {
    pub num_games: usize,
    pub dim: usize,
    pub depth: u32,
    pub mouse_kind: MouseKind,
    /// Score the cat's root moves on the rayon pool inside each game.
    pub parallel_search: bool,
    pub save_stats: bool,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Option<Role>,
    pub moves: usize,
    pub time_ms: u128,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct SelfPlayStats {
    pub total_games: usize,
    pub cat_wins: usize,
    pub mouse_wins: usize,
    pub draws: usize,
    pub avg_moves: f64,
    pub avg_time_ms: f64,
    pub dim: usize,
    pub depth: u32,
    pub mouse_kind: String,
    pub games: Vec<GameResult>,
}

impl SelfPlayStats {
    pub fn new() -> Self {
        Self {
            total_games: 0,
            cat_wins: 0,
            mouse_wins: 0,
            draws: 0,
            avg_moves: 0.0,
            avg_time_ms: 0.0,
            dim: 0,
            depth: 0,
            mouse_kind: String::new(),
            games: Vec::new(),
        }
    }

    pub fn add_result(&mut self, result: GameResult) {
        self.total_games += 1;
        match result.winner {
            Some(Role::Cat) => self.cat_wins += 1,
            Some(Role::Mouse) => self.mouse_wins += 1,
            None => self.draws += 1,
        }
        self.games.push(result);
        self.recalculate_averages();
    }

    fn recalculate_averages(&mut self) {
        if self.games.is_empty() {
            return;
        }
        let total_moves: usize = self.games.iter().map(|g| g.moves).sum();
        let total_time: u128 = self.games.iter().map(|g| g.time_ms).sum();
        self.avg_moves = total_moves as f64 / self.games.len() as f64;
        self.avg_time_ms = total_time as f64 / self.games.len() as f64;
    }
}

/// Plays every game of the batch across the rayon pool and aggregates the
/// results. Individual games are independent, so ordering within the pool
/// does not affect the stats.
pub fn run_selfplay(config: SelfPlayConfig) -> anyhow::Result<SelfPlayStats> {
    let results: Vec<GameResult> = (0..config.num_games)
        .into_par_iter()
        .map(|_| {
            let start_time = Instant::now();

            let mouse: Box<dyn PlayerController> = match config.mouse_kind {
                MouseKind::Random => Box::new(RandomMouse::new("Random Mouse")),
                MouseKind::Weighted => Box::new(WeightedMouse::new("Weighted Mouse")),
            };
            let mut cat = MinimaxCat::with_depth("Minimax Cat", config.depth);
            if config.parallel_search {
                cat = cat.parallel();
            }

            let (winner, moves) = run_game_silent(
                GameState::classic(config.dim),
                mouse.as_ref(),
                &cat,
                MAX_MOVES,
            );

            GameResult {
                winner,
                moves,
                time_ms: start_time.elapsed().as_millis(),
            }
        })
        .collect();

    let mut stats = SelfPlayStats::new();
    stats.dim = config.dim;
    stats.depth = config.depth;
    stats.mouse_kind = format!("{:?}", config.mouse_kind);
    for result in results {
        stats.add_result(result);
    }

    if config.save_stats {
        save_stats(&stats)?;
    }

    Ok(stats)
}

// Cap against endless chases around the board.
const MAX_MOVES: usize = 500;

/// Headless game loop: no rendering, returns the winner (or `None` for a
/// draw by move limit or a frozen board) and the number of moves played.
pub fn run_game_silent(
    initial: GameState,
    mouse: &dyn PlayerController,
    cat: &dyn PlayerController,
    max_moves: usize,
) -> (Option<Role>, usize) {
    let mut state = initial;
    let mut turn = Role::Mouse;
    let mut move_count = 0;
    let mut stuck_turns = 0;

    loop {
        match outcome(&state) {
            Outcome::Captured => return (Some(Role::Cat), move_count),
            Outcome::Escaped => return (Some(Role::Mouse), move_count),
            Outcome::Ongoing => {}
        }

        if move_count >= max_moves {
            return (None, move_count);
        }

        let moves = neighbors(state.position_of(turn), state.dim);
        if moves.is_empty() {
            turn = turn.opponent();
            stuck_turns += 1;
            if stuck_turns >= 2 {
                return (None, move_count);
            }
            continue;
        }
        stuck_turns = 0;

        let controller = match turn {
            Role::Mouse => mouse,
            Role::Cat => cat,
        };

        match controller.choose_move(&state, &moves) {
            Some(mv) => {
                state = state.with_position(turn, mv);
                turn = turn.opponent();
                move_count += 1;
            }
            None => return (Some(turn.opponent()), move_count),
        }
    }
}

fn save_stats(stats: &SelfPlayStats) -> anyhow::Result<()> {
    let stats_dir = "selfplay_stats";
    std::fs::create_dir_all(stats_dir)?;

    let filename = format!(
        "{}/batch_{}.json",
        stats_dir,
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    );

    let file = std::fs::File::create(filename)?;
    serde_json::to_writer(file, stats)?;
    Ok(())
}

/// Prints the batch summary. Raw-mode friendly (`\r\n`).
pub fn print_summary(stats: &SelfPlayStats) {
    print!("=== Self-Play Results ===\r\n\r\n");
    print!(
        "Board: {}x{} | Cat depth: {} | Mouse: {}\r\n\r\n",
        stats.dim, stats.dim, stats.depth, stats.mouse_kind
    );
    print!(
        "Cat wins:   {} ({:.1}%)\r\n",
        stats.cat_wins,
        stats.cat_wins as f64 / stats.total_games as f64 * 100.0
    );
    print!(
        "Mouse wins: {} ({:.1}%)\r\n",
        stats.mouse_wins,
        stats.mouse_wins as f64 / stats.total_games as f64 * 100.0
    );
    print!(
        "Draws:      {} ({:.1}%)\r\n",
        stats.draws,
        stats.draws as f64 / stats.total_games as f64 * 100.0
    );
    print!("Avg moves: {:.1}\r\n", stats.avg_moves);
    print!("Avg time:  {:.1}ms\r\n\r\n", stats.avg_time_ms);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;

    #[test]
    fn silent_game_terminates_with_a_valid_result() {
        let mouse = RandomMouse::new("Random Mouse");
        let cat = MinimaxCat::with_depth("Cat", 2);
        let (winner, moves) = run_game_silent(GameState::classic(5), &mouse, &cat, 200);
        assert!(moves <= 200);
        assert!(matches!(winner, Some(Role::Cat) | Some(Role::Mouse) | None));
    }

    #[test]
    fn frozen_board_is_a_draw_unless_already_decided() {
        // On 1x1 every position coincides, which is a capture before anyone
        // moves.
        let all = Position::new(0, 0);
        let mouse = RandomMouse::new("Mouse");
        let cat = MinimaxCat::with_depth("Cat", 3);
        let (winner, moves) =
            run_game_silent(GameState::new(all, all, all, 1), &mouse, &cat, 10);
        assert_eq!(winner, Some(Role::Cat));
        assert_eq!(moves, 0);
    }

    #[test]
    fn stats_aggregation() {
        let mut stats = SelfPlayStats::new();
        stats.add_result(GameResult {
            winner: Some(Role::Cat),
            moves: 10,
            time_ms: 4,
        });
        stats.add_result(GameResult {
            winner: Some(Role::Mouse),
            moves: 20,
            time_ms: 8,
        });
        stats.add_result(GameResult {
            winner: None,
            moves: 30,
            time_ms: 12,
        });

        assert_eq!(stats.total_games, 3);
        assert_eq!(stats.cat_wins, 1);
        assert_eq!(stats.mouse_wins, 1);
        assert_eq!(stats.draws, 1);
        assert!((stats.avg_moves - 20.0).abs() < f64::EPSILON);
        assert!((stats.avg_time_ms - 8.0).abs() < f64::EPSILON);
    }
}
