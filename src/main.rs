use std::io::{self, Read};

use anyhow::{Context, Result};
use tracing::info;

use chessroom_game::Game;

/// Replay a move log (one instruction per line) and report where it ends.
///
/// Reads the file named by the first argument, or stdin when none is given.
/// Blank lines and lines starting with `#` are skipped.
fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let log = match std::env::args().nth(1) {
        Some(path) => {
            std::fs::read_to_string(&path).with_context(|| format!("reading move log {path}"))?
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading move log from stdin")?;
            buf
        }
    };

    let moves = log
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'));
    let game = Game::replay(moves).context("replaying move log")?;

    let status = game.status();
    info!(
        moves = game.history().len(),
        phase = %game.phase(),
        white = %status.white,
        black = %status.black,
        "log replayed"
    );
    println!("{}", game.board().pretty());
    match (game.turn(), game.state().result()) {
        (Some(turn), _) => println!("{} to move", turn.label()),
        (None, Some(result)) => match result.winner() {
            Some(winner) => println!("{} wins", winner.label()),
            None => println!("draw"),
        },
        (None, None) => {}
    }
    println!("score: WHITE {} / BLACK {}", status.white, status.black);
    Ok(())
}
