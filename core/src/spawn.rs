use rand::prelude::*;
use smallvec::SmallVec;

use crate::*;

/// Places new tiles on uniformly chosen empty cells, driven by a seeded generator so a game can be
/// replayed exactly from its seed.
#[derive(Clone, Debug)]
pub struct TileSpawner {
    rng: SmallRng,
    four_chance: f64,
}

impl TileSpawner {
    pub fn new(seed: u64, four_chance: f64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            four_chance,
        }
    }

    /// Spawns up to `count` tiles, returning how many were actually placed.
    pub fn spawn(&mut self, grid: &mut Grid, count: usize) -> usize {
        let mut empty_cells: SmallVec<[Coord2; 16]> = iter_coords()
            .filter(|&coords| grid[coords.to_nd_index()] == 0)
            .collect();

        let mut placed = 0;
        while placed < count {
            if empty_cells.is_empty() {
                log::warn!(
                    "Board is full, spawned {} of {} requested tiles",
                    placed,
                    count
                );
                break;
            }

            let index = self.rng.random_range(0..empty_cells.len());
            let coords = empty_cells.swap_remove(index);
            let tile = self.next_tile();
            grid[coords.to_nd_index()] = tile;
            placed += 1;
            log::trace!("Spawned {} at {:?}", tile, coords);
        }

        placed
    }

    fn next_tile(&mut self) -> Tile {
        if self.rng.random_range(0.0..1.0) < self.four_chance {
            4
        } else {
            2
        }
    }
}
