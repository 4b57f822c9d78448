//! Neighbor counting and rule application.
//!
//! One generation is computed as a full sweep over a frozen snapshot:
//! neighbor counts are taken from the input grid for every cell before any
//! cell of the next generation is decided, so the update is simultaneous.
//!
//! Counting is the hot path - O(H*W) per generation with the output vector
//! as the only allocation. Wrapped indices are resolved arithmetically per
//! row/column instead of taking a modulo for each of the eight neighbors.

use super::grid::Grid;

/// Count, for every cell, the live cells among its 8 toroidal neighbors.
///
/// Returns a row-major vector of counts in `[0, 8]`, same shape as the
/// grid. Equivalent to a 2-D convolution with a 3x3 all-ones kernel
/// (center zeroed) under circular boundary handling.
pub fn neighbor_counts(grid: &Grid) -> Vec<u8> {
    let height = grid.height();
    let width = grid.width();
    let cells = grid.as_slice();
    let mut counts = vec![0u8; height * width];

    for row in 0..height {
        let up = if row == 0 { height - 1 } else { row - 1 };
        let down = if row + 1 == height { 0 } else { row + 1 };
        for col in 0..width {
            let left = if col == 0 { width - 1 } else { col - 1 };
            let right = if col + 1 == width { 0 } else { col + 1 };

            let neighbors = [
                (up, left),
                (up, col),
                (up, right),
                (row, left),
                (row, right),
                (down, left),
                (down, col),
                (down, right),
            ];
            let count = neighbors
                .iter()
                .filter(|&&(r, c)| cells[r * width + c])
                .count() as u8;
            counts[row * width + col] = count;
        }
    }

    counts
}

/// Advance one generation, returning a new grid of identical dimensions.
///
/// The rule is exact Game of Life: a cell is alive next generation iff it
/// is alive with exactly 2 neighbors, or has exactly 3 neighbors (which
/// covers both survival-on-3 and birth). Pure function - the input grid is
/// never mutated.
pub fn step(grid: &Grid) -> Grid {
    let counts = neighbor_counts(grid);
    let cells = grid.as_slice();
    let next = cells
        .iter()
        .zip(counts.iter())
        .map(|(&alive, &count)| (alive && count == 2) || count == 3)
        .collect();
    Grid::from_cells(grid.height(), grid.width(), next)
}

// =============================================================================
// TESTS
// =============================================================================
