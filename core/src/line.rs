use ndarray::{ArrayViewMut1, Axis};
use smallvec::SmallVec;

use crate::*;

/// Result of sliding a single row or column.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LineSlide {
    pub changed: bool,
    pub gained: Score,
}

/// Slides one lane toward its index 0, merging equal neighbours once each.
///
/// Callers orient the lane so that index 0 is the edge tiles travel to; a reversed view works the
/// same way. Merges are scanned from the target edge outward, so `[2, 2, 2, 0]` becomes
/// `[4, 2, 0, 0]` and `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]`.
pub fn slide_line(mut lane: ArrayViewMut1<'_, Tile>) -> LineSlide {
    let mut packed: SmallVec<[Tile; 4]> = lane.iter().copied().filter(|&tile| tile != 0).collect();

    let mut gained = 0;
    for i in 1..packed.len() {
        // a zeroed slot is a tile already consumed by a merge
        if can_merge(packed[i - 1], packed[i]) {
            packed[i - 1] *= 2;
            gained += Score::from(packed[i - 1]);
            packed[i] = 0;
        }
    }

    packed.retain(|tile| *tile != 0);
    packed.resize(lane.len(), 0);

    let mut changed = false;
    for (cell, &tile) in lane.iter_mut().zip(packed.iter()) {
        if *cell != tile {
            changed = true;
            *cell = tile;
        }
    }

    LineSlide { changed, gained }
}

/// Slides every row or column of `grid` toward the edge named by `direction`.
pub fn slide_grid(grid: &mut Grid, direction: Direction) -> LineSlide {
    let mut total = LineSlide::default();

    for mut lane in grid.lanes_mut(direction.lane_axis()) {
        if direction.is_reversed() {
            lane.invert_axis(Axis(0));
        }
        let slide = slide_line(lane);
        total.changed |= slide.changed;
        total.gained += slide.gained;
    }

    total
}
