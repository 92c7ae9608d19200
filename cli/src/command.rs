use std::str::FromStr;
use twenty48_core::{Direction, GameError};

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Start,
    Restart,
    Move(Direction),
    Quit,
}

impl FromStr for Command {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" | "start" => Ok(Self::Start),
            "r" | "restart" => Ok(Self::Restart),
            "q" | "quit" | "exit" => Ok(Self::Quit),
            other => other.parse().map(Self::Move),
        }
    }
}
