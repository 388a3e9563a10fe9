use cat_mouse_ai::core::GameState;
use cat_mouse_ai::game::Game;
use cat_mouse_ai::player::ai::AIConfig;
use cat_mouse_ai::player::{MinimaxCat, PlayerController, TuiController, WeightedMouse};
use cat_mouse_ai::selfplay::{self, MouseKind, SelfPlayConfig};
use crossterm::{execute, terminal};
use std::io;

fn main() -> anyhow::Result<()> {
    // Terminal init
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen)?;

    let res = run();

    // Terminal restore
    execute!(io::stdout(), terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    res
}

fn run() -> anyhow::Result<()> {
    use crossterm::event::{self, Event, KeyCode};
    use std::time::Duration;

    print!("=== Cat vs Mouse (Minimax) ===\r\n");

    print!("\r\nSelect mode:\r\n");
    print!("1. Play the mouse vs Minimax cat\r\n");
    print!("2. Watch: Weighted mouse vs Minimax cat\r\n");
    print!("3. Self-play batch\r\n");

    let mode = loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('1') => break "play",
                    KeyCode::Char('2') => break "watch",
                    KeyCode::Char('3') => break "selfplay",
                    KeyCode::Char('q') => return Ok(()),
                    _ => {}
                }
            }
        }
    };

    if mode == "selfplay" {
        return run_selfplay();
    }

    print!("\r\nSelect board:\r\n");
    print!("1. 8x8 (classic)\r\n");
    print!("2. 5x5\r\n");
    print!("3. 12x12\r\n");

    let dim = loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('1') => break 8,
                    KeyCode::Char('2') => break 5,
                    KeyCode::Char('3') => break 12,
                    KeyCode::Char('q') => return Ok(()),
                    _ => {}
                }
            }
        }
    };

    // Interactive play has the rayon pool to itself, so score the cat's
    // root moves in parallel.
    let cat = MinimaxCat::new("Cat AI").parallel();
    let mouse: Box<dyn PlayerController> = match mode {
        "play" => Box::new(TuiController::new("You")),
        _ => Box::new(WeightedMouse::new("Mouse AI")),
    };

    let mut game = Game::new(GameState::classic(dim));
    game.play(mouse.as_ref(), &cat);

    Ok(())
}

fn run_selfplay() -> anyhow::Result<()> {
    use crossterm::event::{self, Event, KeyCode};
    use std::time::Duration;

    print!("\r\nSelect opponent for the cat:\r\n");
    print!("1. Random mouse\r\n");
    print!("2. Weighted mouse\r\n");

    let mouse_kind = loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('1') => break MouseKind::Random,
                    KeyCode::Char('2') => break MouseKind::Weighted,
                    KeyCode::Char('q') => return Ok(()),
                    _ => {}
                }
            }
        }
    };

    print!("\r\nSelect batch size:\r\n");
    print!("1. 20 games\r\n");
    print!("2. 100 games\r\n");

    let num_games = loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('1') => break 20,
                    KeyCode::Char('2') => break 100,
                    KeyCode::Char('q') => return Ok(()),
                    _ => {}
                }
            }
        }
    };

    let config = AIConfig::get();
    print!("\r\nRunning {} games...\r\n", num_games);

    let stats = selfplay::run_selfplay(SelfPlayConfig {
        num_games,
        dim: config.board.dim,
        depth: config.search.clamped_depth(),
        mouse_kind,
        parallel_search: false,
        save_stats: true,
    })?;

    execute!(
        io::stdout(),
        terminal::Clear(terminal::ClearType::All),
        crossterm::cursor::MoveTo(0, 0)
    )?;
    selfplay::print_summary(&stats);
    print!("Stats saved to selfplay_stats/. Press any key to exit.\r\n");

    loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(_) = event::read()? {
                return Ok(());
            }
        }
    }
}
