//! The liveness grid.
//!
//! A [`Grid`] is an H x W boolean matrix with toroidal addressing: row and
//! column indices wrap modulo the grid extent, so every cell has exactly
//! eight neighbors and the automaton has no edge effects.
//!
//! Dimensions are fixed at construction. Cells are stored row-major in a
//! single `Vec<bool>` - the same flat layout the renderer sweeps, so a
//! full-grid pass is one linear scan.

use rand::Rng;
use rand::distr::{Bernoulli, Distribution};

use crate::error::{LifeError, Result};

/// Default probability that a cell is seeded alive.
///
/// Matches the classic 25/75 live/dead split; callers can override it per
/// grid.
pub const DEFAULT_ALIVE_PROBABILITY: f64 = 0.25;

/// Fixed-dimension boolean liveness matrix on a discrete torus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create an all-dead grid.
    ///
    /// # Errors
    ///
    /// Returns [`LifeError::InvalidDimension`] if either dimension is zero.
    pub fn dead(height: usize, width: usize) -> Result<Self> {
        Self::check_dimensions(height, width)?;
        Ok(Self {
            height,
            width,
            cells: vec![false; height * width],
        })
    }

    /// Create a randomly seeded grid using the thread RNG.
    ///
    /// Each cell is independently alive with probability
    /// `alive_probability` via one batched Bernoulli draw over the whole
    /// matrix.
    ///
    /// # Errors
    ///
    /// Returns [`LifeError::InvalidDimension`] if either dimension is zero,
    /// or [`LifeError::InvalidProbability`] if the probability is outside
    /// `[0, 1]`.
    pub fn random(height: usize, width: usize, alive_probability: f64) -> Result<Self> {
        Self::random_with(height, width, alive_probability, &mut rand::rng())
    }

    /// Create a randomly seeded grid from a caller-supplied RNG.
    ///
    /// Injecting the RNG makes seeding reproducible: two calls with
    /// identically seeded RNGs produce identical grids.
    pub fn random_with<R: Rng + ?Sized>(
        height: usize,
        width: usize,
        alive_probability: f64,
        rng: &mut R,
    ) -> Result<Self> {
        Self::check_dimensions(height, width)?;
        let bernoulli = Bernoulli::new(alive_probability)
            .map_err(|_| LifeError::InvalidProbability(alive_probability))?;
        let cells = (0..height * width).map(|_| bernoulli.sample(rng)).collect();
        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// Build a grid from raw parts. Internal - `step` uses this to wrap
    /// its freshly computed generation.
    pub(crate) fn from_cells(height: usize, width: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), height * width);
        Self {
            height,
            width,
            cells,
        }
    }

    fn check_dimensions(height: usize, width: usize) -> Result<()> {
        if height == 0 || width == 0 {
            return Err(LifeError::InvalidDimension { height, width });
        }
        Ok(())
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Liveness at (row, col), with toroidal wrap: indices beyond the grid
    /// extent wrap to the opposite edge.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[(row % self.height) * self.width + (col % self.width)]
    }

    /// Set liveness at (row, col), with toroidal wrap.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        let idx = (row % self.height) * self.width + (col % self.width);
        self.cells[idx] = alive;
    }

    /// The raw row-major cell slice. Read-only: mutation happens only via
    /// [`Grid::set`] or by replacing the grid with a stepped successor.
    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.cells
    }

    /// Iterate over the (row, col) coordinates of live cells.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(idx, _)| (idx / width, idx % width))
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_dead_grid_has_no_live_cells() {
        let grid = Grid::dead(8, 12).unwrap();
        assert_eq!(grid.height(), 8);
        assert_eq!(grid.width(), 12);
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.live_cells().count(), 0);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            Grid::dead(0, 10),
            Err(LifeError::InvalidDimension { height: 0, width: 10 })
        ));
        assert!(matches!(
            Grid::dead(10, 0),
            Err(LifeError::InvalidDimension { height: 10, width: 0 })
        ));
        assert!(matches!(
            Grid::random(0, 0, 0.25),
            Err(LifeError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_invalid_probability_rejected() {
        assert!(matches!(
            Grid::random(4, 4, -0.1),
            Err(LifeError::InvalidProbability(_))
        ));
        assert!(matches!(
            Grid::random(4, 4, 1.5),
            Err(LifeError::InvalidProbability(_))
        ));
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let grid_a = Grid::random_with(16, 16, 0.25, &mut a).unwrap();
        let grid_b = Grid::random_with(16, 16, 0.25, &mut b).unwrap();
        assert_eq!(grid_a, grid_b);
    }

    #[test]
    fn test_probability_extremes() {
        let mut rng = StdRng::seed_from_u64(7);
        let none = Grid::random_with(10, 10, 0.0, &mut rng).unwrap();
        assert_eq!(none.population(), 0);
        let all = Grid::random_with(10, 10, 1.0, &mut rng).unwrap();
        assert_eq!(all.population(), 100);
    }

    #[test]
    fn test_toroidal_get_wraps() {
        let mut grid = Grid::dead(4, 6).unwrap();
        grid.set(0, 0, true);
        assert!(grid.get(4, 6)); // one full wrap in both axes
        assert!(grid.get(0, 6));
        assert!(grid.get(4, 0));
        assert!(!grid.get(1, 1));
    }

    #[test]
    fn test_live_cells_coordinates() {
        let mut grid = Grid::dead(3, 3).unwrap();
        grid.set(0, 2, true);
        grid.set(2, 1, true);
        let cells: Vec<_> = grid.live_cells().collect();
        assert_eq!(cells, vec![(0, 2), (2, 1)]);
    }
}
