use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Agent role on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Cat,   // pursuer
    Mouse, // evader
}

impl Role {
    pub fn opponent(self) -> Role {
        match self {
            Role::Cat => Role::Mouse,
            Role::Mouse => Role::Cat,
        }
    }
}

/// Grid coordinate (0-indexed, row-major).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Joint game state: both agents plus the fixed exit on a `dim` x `dim` grid.
///
/// The exit and `dim` never change during a game; the cat and mouse positions
/// are updated as moves are applied. Positions may coincide (capture).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub cat: Position,
    pub mouse: Position,
    pub exit: Position,
    pub dim: usize,
}

impl GameState {
    pub fn new(cat: Position, mouse: Position, exit: Position, dim: usize) -> Self {
        GameState {
            cat,
            mouse,
            exit,
            dim,
        }
    }

    /// The classic layout: cat in the top-left corner, mouse in the
    /// bottom-right, exit in the top-right.
    pub fn classic(dim: usize) -> Self {
        GameState {
            cat: Position::new(0, 0),
            mouse: Position::new(dim - 1, dim - 1),
            exit: Position::new(0, dim - 1),
            dim,
        }
    }

    /// Rejects states the engine is not defined over: a zero-sized board or
    /// any position outside `[0, dim)` on either axis.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.dim >= 1, "board dimension must be at least 1");
        for (name, pos) in [("cat", self.cat), ("mouse", self.mouse), ("exit", self.exit)] {
            ensure!(
                pos.row < self.dim && pos.col < self.dim,
                "{} position {} is outside the {}x{} board",
                name,
                pos,
                self.dim,
                self.dim
            );
        }
        Ok(())
    }

    pub fn position_of(&self, role: Role) -> Position {
        match role {
            Role::Cat => self.cat,
            Role::Mouse => self.mouse,
        }
    }

    pub fn with_position(&self, role: Role, pos: Position) -> GameState {
        let mut next = *self;
        match role {
            Role::Cat => next.cat = pos,
            Role::Mouse => next.mouse = pos,
        }
        next
    }
}
