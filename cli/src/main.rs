use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use twenty48_core::Game;

use command::Command;
use settings::Settings;

mod command;
mod render;
mod settings;

#[derive(Parser, Debug)]
#[command(version, about = "Play 2048 in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// TOML file with game settings and an optional initial board
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let seed = args.seed.or(settings.seed).unwrap_or_else(clock_seed);
    log::debug!("seed: {}", seed);

    let mut game = settings.build_game(seed)?;
    run(&mut game, io::stdin().lock(), io::stdout().lock())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

fn run(game: &mut Game, input: impl BufRead, mut output: impl Write) -> Result<()> {
    writeln!(output, "Commands: start, restart, left/right/up/down (or WASD), quit")?;
    write!(output, "{}", render::render(game))?;

    for line in input.lines() {
        let line = line.context("Could not read input")?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(command) => {
                if apply(game, command).is_break() {
                    break;
                }
            }
            Err(err) => {
                writeln!(output, "{err}")?;
                continue;
            }
        }

        write!(output, "{}", render::render(game))?;
        output.flush()?;
    }

    Ok(())
}

/// Routes one command to the engine, ignoring moves unless a game is in progress.
fn apply(game: &mut Game, command: Command) -> ControlFlow<()> {
    match command {
        Command::Start if game.status().is_idle() => game.start(),
        Command::Start | Command::Restart => game.restart(),
        Command::Move(direction) if game.status().is_playing() => {
            let outcome = game.slide(direction);
            log::debug!("{} -> {:?}", direction, outcome);
        }
        Command::Move(direction) => {
            log::info!("Ignoring {} while {}", direction, game.status());
        }
        Command::Quit => return ControlFlow::Break(()),
    }
    ControlFlow::Continue(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use twenty48_core::{Direction, GameStatus};

    #[test]
    fn moves_are_ignored_until_started() {
        let mut game = Game::with_state([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]], 1).unwrap();

        let _ = apply(&mut game, Command::Move(Direction::Left));

        assert_eq!(game.tile_at((0, 0)), 2);
        assert_eq!(game.score(), 0);
        assert_eq!(game.status(), GameStatus::Idle);
    }

    #[test]
    fn start_keeps_prepared_board_then_restart_clears_it() {
        let mut game = Game::with_state([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]], 1).unwrap();

        let _ = apply(&mut game, Command::Start);
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.empty_count(), 12);

        // spawned tiles may join the row, but the leading pair always merges
        let _ = apply(&mut game, Command::Move(Direction::Left));
        assert!(game.score() >= 4);

        let _ = apply(&mut game, Command::Start);
        assert_eq!(game.score(), 0);
        assert_eq!(game.empty_count(), 14);
    }

    #[test]
    fn moves_are_ignored_after_a_win() {
        let mut game = Game::with_state([[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]], 1).unwrap();
        let _ = apply(&mut game, Command::Start);
        let _ = apply(&mut game, Command::Move(Direction::Left));
        assert_eq!(game.status(), GameStatus::Win);
        let board = game.state().clone();

        let _ = apply(&mut game, Command::Move(Direction::Right));

        assert_eq!(game.state(), &board);
    }

    #[test]
    fn quit_stops_the_loop() {
        assert!(apply(&mut Game::new(0), Command::Quit).is_break());
    }

    #[test]
    fn run_renders_after_each_command() {
        let mut game = Game::new(4);
        let input = "start\nfly\nquit\nstart\n".as_bytes();
        let mut output = Vec::new();

        run(&mut game, input, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Score:").count(), 2);
        assert!(text.contains("Unknown direction"));
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.empty_count(), 14);
    }
}
