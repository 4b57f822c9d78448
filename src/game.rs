//! The game handle - one running automaton.
//!
//! [`Game`] owns the current generation plus exactly one prior snapshot,
//! which is all the history the transition overlay needs. It composes the
//! pure stages from [`sim`](crate::sim) and [`render`](crate::render);
//! callers that want plain liveness never pay for classification or
//! packing.

use rand::Rng;
use tracing::debug;

use crate::error::Result;
use crate::render::braille;
use crate::sim::{DEFAULT_ALIVE_PROBABILITY, Grid, TransitionClass, step, transitions};

/// A running Game of Life: current generation, one prior generation, and a
/// generation counter.
#[derive(Debug, Clone)]
pub struct Game {
    current: Grid,
    previous: Grid,
    generation: u64,
}

impl Game {
    /// Start a game with a random seed at the default density.
    ///
    /// # Errors
    ///
    /// Returns [`crate::LifeError::InvalidDimension`] if either dimension
    /// is zero.
    pub fn new(height: usize, width: usize) -> Result<Self> {
        Self::with_probability(height, width, DEFAULT_ALIVE_PROBABILITY)
    }

    /// Start a game with a random seed at the given live-cell density.
    pub fn with_probability(height: usize, width: usize, alive_probability: f64) -> Result<Self> {
        Ok(Self::from_grid(Grid::random(height, width, alive_probability)?))
    }

    /// Start a game seeded from a caller-supplied RNG (reproducible).
    pub fn with_rng<R: Rng + ?Sized>(
        height: usize,
        width: usize,
        alive_probability: f64,
        rng: &mut R,
    ) -> Result<Self> {
        Ok(Self::from_grid(Grid::random_with(
            height,
            width,
            alive_probability,
            rng,
        )?))
    }

    /// Start a game from an explicit initial grid.
    ///
    /// The prior generation starts all-dead, so every seeded cell
    /// classifies as [`TransitionClass::Born`] until the first step.
    pub fn from_grid(grid: Grid) -> Self {
        let previous = Grid::from_cells(
            grid.height(),
            grid.width(),
            vec![false; grid.height() * grid.width()],
        );
        Self {
            current: grid,
            previous,
            generation: 0,
        }
    }

    /// Advance exactly one generation.
    ///
    /// The outgoing generation is retained as the prior snapshot for
    /// transition classification.
    pub fn step(&mut self) {
        let next = step(&self.current);
        self.previous = std::mem::replace(&mut self.current, next);
        self.generation += 1;
        debug!(
            generation = self.generation,
            population = self.current.population(),
            "stepped"
        );
    }

    /// The current generation's grid (read-only).
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.current
    }

    /// Generations advanced since seeding.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Coordinates of the currently live cells.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.current.live_cells()
    }

    /// Cells that are not dead-and-unchanged, with their transition class.
    ///
    /// Cells that were dead and stayed dead are omitted - they render as
    /// background.
    pub fn transition_cells(&self) -> Vec<(usize, usize, TransitionClass)> {
        let width = self.current.width();
        transitions(&self.previous, &self.current)
            .into_iter()
            .enumerate()
            .filter(|(_, class)| *class != TransitionClass::Dead)
            .map(|(idx, class)| (idx / width, idx % width, class))
            .collect()
    }

    /// The current grid packed into braille glyph offsets, nonzero entries
    /// only, as (row, col, offset).
    ///
    /// # Errors
    ///
    /// Returns [`crate::LifeError::IncompatibleDimensions`] unless the
    /// grid height is a multiple of 4 and the width a multiple of 2.
    pub fn packed_glyphs(&self) -> Result<Vec<(usize, usize, u8)>> {
        Ok(braille::pack(&self.current)?.cells().collect())
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

    fn grid_with(height: usize, width: usize, live: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::dead(height, width).unwrap();
        for &(row, col) in live {
            grid.set(row, col, true);
        }
        grid
    }

    #[test]
    fn test_seeded_games_match() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        let game_a = Game::with_rng(12, 20, 0.25, &mut a).unwrap();
        let game_b = Game::with_rng(12, 20, 0.25, &mut b).unwrap();
        assert_eq!(game_a.grid(), game_b.grid());
    }

    #[test]
    fn test_initial_cells_classify_as_born() {
        let game = Game::from_grid(grid_with(4, 4, &[(1, 1), (2, 2)]));
        let cells = game.transition_cells();
        assert_eq!(cells.len(), 2);
        assert!(
            cells
                .iter()
                .all(|&(_, _, class)| class == TransitionClass::Born)
        );
    }

    #[test]
    fn test_step_tracks_transitions() {
        // Horizontal blinker: after one step the ends die, the cells above
        // and below the center are born, the center survives.
        let mut game = Game::from_grid(grid_with(9, 9, &[(4, 3), (4, 4), (4, 5)]));
        game.step();
        assert_eq!(game.generation(), 1);

        let classes: std::collections::HashMap<(usize, usize), TransitionClass> = game
            .transition_cells()
            .into_iter()
            .map(|(r, c, class)| ((r, c), class))
            .collect();
        assert_eq!(classes[&(4, 4)], TransitionClass::Alive);
        assert_eq!(classes[&(4, 3)], TransitionClass::Died);
        assert_eq!(classes[&(4, 5)], TransitionClass::Died);
        assert_eq!(classes[&(3, 4)], TransitionClass::Born);
        assert_eq!(classes[&(5, 4)], TransitionClass::Born);
        assert_eq!(classes.len(), 5);
    }

    #[test]
    fn test_live_cells_after_step() {
        let mut game = Game::from_grid(grid_with(9, 9, &[(4, 3), (4, 4), (4, 5)]));
        game.step();
        let live: Vec<_> = game.live_cells().collect();
        assert_eq!(live, vec![(3, 4), (4, 4), (5, 4)]);
    }

    #[test]
    fn test_packed_glyphs_nonzero_only() {
        let game = Game::from_grid(grid_with(8, 4, &[(1, 1)]));
        let glyphs = game.packed_glyphs().unwrap();
        assert_eq!(glyphs, vec![(0, 0, 16)]);
    }

    #[test]
    fn test_packed_glyphs_rejects_bad_dimensions() {
        let game = Game::from_grid(grid_with(5, 4, &[]));
        assert!(game.packed_glyphs().is_err());
    }

    #[test]
    fn test_generation_counter() {
        let mut game = Game::from_grid(grid_with(4, 4, &[]));
        assert_eq!(game.generation(), 0);
        game.step();
        game.step();
        assert_eq!(game.generation(), 2);
    }
}
