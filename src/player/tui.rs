use crate::core::{GameState, Position};
use crate::display::{render_board, DisplayState};
use crate::player::PlayerController;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use std::time::Duration;

/// Human-driven mouse: arrow keys or WASD step one cell, `q` resigns.
pub struct TuiController {
    name: String,
}

impl TuiController {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl PlayerController for TuiController {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, state: &GameState, legal_moves_list: &[Position]) -> Option<Position> {
        let mut display = DisplayState::default();
        display.status_msg = Some(format!("{}: move the mouse", self.name));

        loop {
            render_board(state, &display);
            print!("[Arrows/WASD]: Move | [q]: Resign\r\n");

            if event::poll(Duration::from_millis(100)).unwrap() {
                if let Event::Key(KeyEvent { code, .. }) = event::read().unwrap() {
                    let delta = match code {
                        KeyCode::Char('q') => return None,
                        KeyCode::Up | KeyCode::Char('w') => (-1, 0),
                        KeyCode::Down | KeyCode::Char('s') => (1, 0),
                        KeyCode::Left | KeyCode::Char('a') => (0, -1),
                        KeyCode::Right | KeyCode::Char('d') => (0, 1),
                        _ => continue,
                    };

                    let (dr, dc): (i32, i32) = delta;
                    let nr = state.mouse.row as i32 + dr;
                    let nc = state.mouse.col as i32 + dc;

                    if nr >= 0
                        && nc >= 0
                        && (nr as usize) < state.dim
                        && (nc as usize) < state.dim
                    {
                        let target = Position::new(nr as usize, nc as usize);
                        if legal_moves_list.contains(&target) {
                            return Some(target);
                        }
                    }
                    // Off-board press: keep asking.
                    display.status_msg =
                        Some(format!("{}: you cannot leave the board", self.name));
                }
            }
        }
    }

    fn is_local(&self) -> bool {
        true
    }
}
