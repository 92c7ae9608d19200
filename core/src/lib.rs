#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use line::*;
pub use spawn::*;
pub use types::*;

mod engine;
mod error;
mod line;
mod spawn;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Reaching this tile wins the game.
    pub win_tile: Tile,
    /// Probability that a spawned tile is a 4 instead of a 2.
    pub four_chance: f64,
}

impl GameConfig {
    pub const fn new_unchecked(win_tile: Tile, four_chance: f64) -> Self {
        Self {
            win_tile,
            four_chance,
        }
    }

    pub fn new(win_tile: Tile, four_chance: f64) -> Result<Self> {
        Self::new_unchecked(win_tile, four_chance).validate()
    }

    pub fn validate(self) -> Result<Self> {
        let win_tile_ok = self.win_tile >= 4 && is_valid_tile(self.win_tile);
        let four_chance_ok = (0.0..=1.0).contains(&self.four_chance);
        if win_tile_ok && four_chance_ok {
            Ok(self)
        } else {
            Err(GameError::InvalidConfig)
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(WIN_TILE, 0.1)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    NoChange,
    Moved,
    Won,
    Lost,
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        use MoveOutcome::*;
        match self {
            NoChange => false,
            Moved => true,
            Won => true,
            Lost => true,
        }
    }
}
