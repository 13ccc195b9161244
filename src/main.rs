//! Headless autoplay runner (default binary).
//!
//! Plays a session to game over (or a move cap) by always taking the first
//! legal move, printing one JSON snapshot per completed move. Useful for
//! eyeballing determinism and for piping into external tooling:
//!
//! ```text
//! gem-board [seed] [rows] [cols] [colors]
//! ```

use anyhow::{Context, Result};

use gem_board::core::{GameState, SelectOutcome};

const MOVE_CAP: u32 = 500;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let seed: u32 = parse_or(args.next(), 1)?;
    let rows: usize = parse_or(args.next(), 8)?;
    let cols: usize = parse_or(args.next(), 8)?;
    let colors: u8 = parse_or(args.next(), 6)?;

    let mut game = GameState::new(rows, cols, colors, seed)
        .context("could not create game session")?;

    println!("{}", serde_json::to_string(&game.snapshot())?);

    while game.moves_made() < MOVE_CAP {
        let Some((a, b)) = game.hint() else {
            break;
        };

        game.select_cell(a);
        let outcome = game.select_cell(b);
        debug_assert!(matches!(
            outcome,
            SelectOutcome::Resolved(_) | SelectOutcome::SwapReverted
        ));

        println!("{}", serde_json::to_string(&game.snapshot())?);
    }

    let final_snap = game.snapshot();
    eprintln!(
        "finished: status={} score={} level={} moves={}",
        final_snap.status.as_str(),
        final_snap.score,
        final_snap.level,
        final_snap.moves_made
    );
    Ok(())
}

fn parse_or<T: std::str::FromStr>(arg: Option<String>, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match arg {
        Some(s) => s.parse().with_context(|| format!("invalid argument: {}", s)),
        None => Ok(default),
    }
}
