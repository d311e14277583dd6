//! The Life step function on a toroidal grid.

use super::{AliveSet, Cell, Coord, Dimensions};

/// Relative positions of the 8 surrounding cells
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Count live neighbors with toroidal wrapping (grid wraps like a torus)
pub fn count_live_neighbors(alive: &AliveSet, coord: Coord, dims: Dimensions) -> u8 {
    NEIGHBOR_OFFSETS
        .iter()
        .map(|&(dr, dc)| coord.wrapped(dr, dc, dims))
        .filter(|&neighbor| alive.contains(neighbor))
        .count() as u8
}

/// Compute the next generation.
///
/// Visits every cell of the grid, so the cost is O(width × height) no matter
/// how many cells are alive. Entries of `alive` outside `dims` are never
/// visited and therefore never carried over.
pub fn next_generation(alive: &AliveSet, dims: Dimensions) -> AliveSet {
    dims.coords()
        .filter(|&coord| {
            let current = Cell::from_alive(alive.contains(coord));
            current
                .evolve(count_live_neighbors(alive, coord, dims))
                .is_alive()
        })
        .collect()
}
