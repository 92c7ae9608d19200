use thiserror::Error;

use crate::Tile;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board shape does not match a 4x4 grid")]
    InvalidBoardShape,
    #[error("Tile value {0} is neither empty nor a power of two")]
    InvalidTile(Tile),
    #[error("Unknown direction, expected left, right, up or down")]
    UnknownDirection,
    #[error("Invalid game config")]
    InvalidConfig,
}

pub type Result<T> = core::result::Result<T, GameError>;
