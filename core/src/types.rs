use core::fmt;
use core::str::FromStr;
use ndarray::{Array2, Axis};
use serde::{Deserialize, Serialize};

use crate::GameError;

/// Value held by a single cell, `0` for an empty cell.
pub type Tile = u32;

/// Accumulated merge score.
pub type Score = u64;

/// Single coordinate axis used for row and column positions.
pub type Coord = u8;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Board grid, indexed `[row, col]`.
pub type Grid = Array2<Tile>;

/// Number of cells along each side of the board.
pub const BOARD_SIDE: Coord = 4;

/// Tile value that wins the game with the default configuration.
pub const WIN_TILE: Tile = 2048;

/// Whether `value` may be stored in a cell: empty, or a power of two from 2 upwards.
pub const fn is_valid_tile(value: Tile) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

/// Largest tile a `Tile` can hold; two of these cannot merge.
pub const MAX_TILE: Tile = 1 << (Tile::BITS - 1);

/// Whether two neighbouring cells would merge on a move.
pub const fn can_merge(a: Tile, b: Tile) -> bool {
    a != 0 && a == b && a < MAX_TILE
}

pub(crate) fn empty_grid() -> Grid {
    let side = usize::from(BOARD_SIDE);
    Array2::zeros((side, side))
}

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    /// Axis along which the lanes of this move run.
    pub(crate) const fn lane_axis(self) -> Axis {
        match self {
            Self::Left | Self::Right => Axis(1),
            Self::Up | Self::Down => Axis(0),
        }
    }

    /// Whether the target edge sits at the end of each lane rather than the start.
    pub(crate) const fn is_reversed(self) -> bool {
        matches!(self, Self::Right | Self::Down)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        })
    }
}

impl FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const NAMES: [(&str, Direction); 8] = [
            ("left", Direction::Left),
            ("right", Direction::Right),
            ("up", Direction::Up),
            ("down", Direction::Down),
            ("a", Direction::Left),
            ("d", Direction::Right),
            ("w", Direction::Up),
            ("s", Direction::Down),
        ];

        let s = s.trim();
        NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|&(_, direction)| direction)
            .ok_or(GameError::UnknownDirection)
    }
}

const DISPLACEMENTS: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// Applies `delta` to `coords`, returning a value only when it remains on the board.
fn apply_delta(coords: Coord2, delta: (isize, isize)) -> Option<Coord2> {
    let (row, col) = coords;
    let (dr, dc) = delta;

    let next_row = row.checked_add_signed(dr.try_into().ok()?)?;
    if next_row >= BOARD_SIDE {
        return None;
    }

    let next_col = col.checked_add_signed(dc.try_into().ok()?)?;
    if next_col >= BOARD_SIDE {
        return None;
    }

    Some((next_row, next_col))
}

/// Iterates the up to four cells sharing an edge with `center`.
pub fn iter_orthogonal(center: Coord2) -> OrthogonalIter {
    OrthogonalIter { center, index: 0 }
}

/// Iterates every board position in row-major order.
pub fn iter_coords() -> impl Iterator<Item = Coord2> {
    (0..BOARD_SIDE).flat_map(|row| (0..BOARD_SIDE).map(move |col| (row, col)))
}

#[derive(Debug)]
pub struct OrthogonalIter {
    center: Coord2,
    index: u8,
}

impl Iterator for OrthogonalIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item = apply_delta(self.center, DISPLACEMENTS[self.index as usize]);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}
