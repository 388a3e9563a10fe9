use crate::core::{GameState, Role};
use crate::display::DisplayState;
use crate::logic::{neighbors, outcome, Outcome};
use crate::player::PlayerController;
use std::time::Duration;

/// Interactive game loop. The mouse moves first, as in the original rules.
pub struct Game {
    pub state: GameState,
    pub turn: Role,
}

impl Game {
    pub fn new(state: GameState) -> Self {
        Game {
            state,
            turn: Role::Mouse,
        }
    }

    /// Runs the game to completion on the terminal. Returns the winner, or
    /// `None` when the game was interrupted or the board froze.
    pub fn play(&mut self, mouse: &dyn PlayerController, cat: &dyn PlayerController) -> Option<Role> {
        // Two consecutive forfeited turns mean the board is frozen.
        let mut stuck_turns = 0;

        loop {
            match outcome(&self.state) {
                Outcome::Captured => {
                    self.show_final(&format!("{} caught the mouse!", cat.name()));
                    return Some(Role::Cat);
                }
                Outcome::Escaped => {
                    self.show_final(&format!("{} reached the exit!", mouse.name()));
                    return Some(Role::Mouse);
                }
                Outcome::Ongoing => {}
            }

            let mover = self.turn;
            let controller = match mover {
                Role::Mouse => mouse,
                Role::Cat => cat,
            };

            let mut display = DisplayState::default();
            display.status_msg = Some(format!("{}'s turn", controller.name()));
            crate::display::render_board(&self.state, &display);

            let moves = neighbors(self.state.position_of(mover), self.state.dim);

            if moves.is_empty() {
                // No legal move: the mover stays put and play passes on.
                self.turn = mover.opponent();
                stuck_turns += 1;
                if stuck_turns >= 2 {
                    return None;
                }
                continue;
            }
            stuck_turns = 0;

            if controller.name().contains("AI") {
                display.status_msg = Some(format!("{} is thinking...", controller.name()));
                crate::display::render_board(&self.state, &display);

                // Throttle AI turns so games are watchable, and allow 'q' to
                // bail out during the wait.
                let timeout = Duration::from_millis(600);
                if crossterm::event::poll(timeout).unwrap_or(false) {
                    if let Ok(crossterm::event::Event::Key(key)) = crossterm::event::read() {
                        if key.code == crossterm::event::KeyCode::Char('q') {
                            return None;
                        }
                    }
                }
            }

            match controller.choose_move(&self.state, &moves) {
                Some(mv) => {
                    self.state = self.state.with_position(mover, mv);
                    self.turn = mover.opponent();
                }
                None => {
                    self.show_final(&format!("{} resigned.", controller.name()));
                    return Some(mover.opponent());
                }
            }
        }
    }

    fn show_final(&self, msg: &str) {
        let mut display = DisplayState::default();
        display.status_msg = Some(msg.to_string());
        crate::display::render_board(&self.state, &display);
        std::thread::sleep(Duration::from_secs(3));
    }
}
