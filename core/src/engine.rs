use core::fmt;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Idle -> Playing (start)
/// - Playing -> Win
/// - Playing -> Lose
/// - any -> Playing (restart)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Idle,
    Playing,
    Win,
    Lose,
}

impl GameStatus {
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Win | Self::Lose)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::Idle
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Playing => "playing",
            Self::Win => "win",
            Self::Lose => "lose",
        })
    }
}

/// A 2048 board together with its score and status.
///
/// Moves are not gated by status: the embedding application is expected to stop sending moves once
/// [`Game::status`] is no longer [`GameStatus::Playing`], and a move sent anyway is handled like any
/// other.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    grid: Grid,
    score: Score,
    status: GameStatus,
    spawner: TileSpawner,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        Self::with_config(GameConfig::default(), seed)
    }

    pub fn with_config(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            grid: empty_grid(),
            score: 0,
            status: Default::default(),
            spawner: TileSpawner::new(seed, config.four_chance),
        }
    }

    /// Starts from a prepared board instead of an empty one.
    pub fn with_state(state: [[Tile; 4]; 4], seed: u64) -> Result<Self> {
        Self::from_rows(&state, GameConfig::default(), seed)
    }

    pub fn from_rows<R: AsRef<[Tile]>>(rows: &[R], config: GameConfig, seed: u64) -> Result<Self> {
        let side = usize::from(BOARD_SIDE);
        if rows.len() != side || rows.iter().any(|row| row.as_ref().len() != side) {
            return Err(GameError::InvalidBoardShape);
        }

        if let Some(&bad) = rows
            .iter()
            .flat_map(|row| row.as_ref())
            .find(|&&tile| !is_valid_tile(tile))
        {
            return Err(GameError::InvalidTile(bad));
        }

        let mut game = Self::with_config(config.validate()?, seed);
        game.grid = Array2::from_shape_fn((side, side), |(row, col)| rows[row].as_ref()[col]);
        Ok(game)
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// The live board. Borrowing it blocks further moves until the borrow ends.
    pub fn state(&self) -> &Grid {
        &self.grid
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn tile_at(&self, coords: Coord2) -> Tile {
        self.grid[coords.to_nd_index()]
    }

    pub fn empty_count(&self) -> usize {
        self.grid.iter().filter(|&&tile| tile == 0).count()
    }

    pub fn max_tile(&self) -> Tile {
        self.grid.iter().copied().max().unwrap_or(0)
    }

    /// Whether any move could still change the board.
    pub fn has_moves(&self) -> bool {
        self.empty_count() > 0 || self.has_adjacent_pair()
    }

    pub fn start(&mut self) {
        self.status = GameStatus::Playing;
        self.spawner.spawn(&mut self.grid, 2);
        log::debug!("Game started");
    }

    pub fn restart(&mut self) {
        self.score = 0;
        self.status = GameStatus::Playing;
        self.grid = empty_grid();
        self.spawner.spawn(&mut self.grid, 2);
        log::debug!("Game restarted");
    }

    pub fn move_left(&mut self) -> MoveOutcome {
        self.slide(Direction::Left)
    }

    pub fn move_right(&mut self) -> MoveOutcome {
        self.slide(Direction::Right)
    }

    pub fn move_up(&mut self) -> MoveOutcome {
        self.slide(Direction::Up)
    }

    pub fn move_down(&mut self) -> MoveOutcome {
        self.slide(Direction::Down)
    }

    /// Slides every lane toward `direction`, then spawns a tile and re-evaluates the status if
    /// anything moved.
    pub fn slide(&mut self, direction: Direction) -> MoveOutcome {
        let LineSlide { changed, gained } = slide_grid(&mut self.grid, direction);
        self.score += gained;

        if !changed {
            return MoveOutcome::NoChange;
        }
        log::trace!("Moved {}, gained {}", direction, gained);

        self.after_move()
    }

    fn after_move(&mut self) -> MoveOutcome {
        self.spawner.spawn(&mut self.grid, 1);

        if self.check_win() {
            self.end_game(GameStatus::Win);
            MoveOutcome::Won
        } else if self.check_lose() {
            self.end_game(GameStatus::Lose);
            MoveOutcome::Lost
        } else {
            MoveOutcome::Moved
        }
    }

    fn end_game(&mut self, status: GameStatus) {
        if self.status != status {
            log::debug!("Game ended: {} with score {}", status, self.score);
        }
        self.status = status;
    }

    pub(crate) fn check_win(&self) -> bool {
        self.grid.iter().any(|&tile| tile == self.config.win_tile)
    }

    pub(crate) fn check_lose(&self) -> bool {
        self.empty_count() == 0 && !self.has_adjacent_pair()
    }

    fn has_adjacent_pair(&self) -> bool {
        iter_coords().any(|coords| {
            let tile = self.tile_at(coords);
            iter_orthogonal(coords).any(|pos| can_merge(tile, self.tile_at(pos)))
        })
    }
}
