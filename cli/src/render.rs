use std::fmt::Write;
use twenty48_core::{BOARD_SIDE, Game, GameStatus};

const DIVIDER: &str = "+------+------+------+------+";

/// Draws the board, score and any status message, reading only the game's public accessors.
pub(crate) fn render(game: &Game) -> String {
    let mut out = String::new();
    let state = game.state();

    // writing into a String cannot fail
    let _ = writeln!(out, "Score: {}", game.score());
    let _ = writeln!(out, "{DIVIDER}");
    for row in 0..usize::from(BOARD_SIDE) {
        out.push('|');
        for col in 0..usize::from(BOARD_SIDE) {
            match state[[row, col]] {
                0 => out.push_str("      |"),
                tile => {
                    let _ = write!(out, "{tile:^6}|");
                }
            }
        }
        out.push('\n');
        let _ = writeln!(out, "{DIVIDER}");
    }

    if let Some(message) = status_message(game.status()) {
        let _ = writeln!(out, "{message}");
    }
    out
}

pub(crate) fn status_message(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::Idle => Some("Press \"start\" to begin!"),
        GameStatus::Playing => None,
        GameStatus::Win => Some("Winner! Congrats! You did it!"),
        GameStatus::Lose => Some("You lose! Restart the game?"),
    }
}
