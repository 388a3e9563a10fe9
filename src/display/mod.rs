use crate::core::GameState;
use crossterm::{cursor, execute, style::Stylize, terminal};
use std::io::stdout;

pub struct DisplayState {
    pub status_msg: Option<String>,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self { status_msg: None }
    }
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Draws the grid with the cat, mouse and exit glyphs.
///
/// The cat is tested first per cell, so on a capture square the cat is what
/// you see. Output uses `\r\n` because the terminal is in raw mode.
pub fn render_board(state: &GameState, display: &DisplayState) {
    let mut out = stdout();

    // Clear the whole screen to avoid scrolling between turns.
    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )
    .unwrap();

    print!("=== Cat vs Mouse ===\r\n");
    if let Some(msg) = &display.status_msg {
        print!("{}\r\n", msg.clone().bold().yellow());
    } else {
        print!("\r\n");
    }
    print!("\r\n");

    // Column labels
    print!("    ");
    for col in 0..state.dim {
        print!(" {:2}", col);
    }
    print!("\r\n");
    print!("   +{}+\r\n", "---".repeat(state.dim));

    for row in 0..state.dim {
        print!("{:2} |", row);
        for col in 0..state.dim {
            let here = crate::core::Position::new(row, col);
            if here == state.cat {
                print!(" {}", "C".red().bold());
            } else if here == state.mouse {
                print!(" {}", "M".cyan().bold());
            } else if here == state.exit {
                print!(" {}", "E".green());
            } else {
                print!(" .");
            }
            print!(" ");
        }
        print!("|\r\n");
    }
    print!("   +{}+\r\n", "---".repeat(state.dim));
    print!(
        "{} cat   {} mouse   {} exit\r\n\r\n",
        "C".red().bold(),
        "M".cyan().bold(),
        "E".green()
    );
}
