//! Transition classification between consecutive generations.
//!
//! Renderers that color newly born or freshly died cells differently need
//! to know how each cell changed across the last step. Classification is a
//! derived view over (previous, current) liveness; simulation correctness
//! never depends on it.

use super::grid::Grid;

/// How a cell's liveness changed between two consecutive generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TransitionClass {
    /// Dead in both generations.
    Dead = 0,
    /// Alive previously, dead now.
    Died = 1,
    /// Dead previously, alive now.
    Born = 2,
    /// Alive in both generations.
    Alive = 3,
}

/// Classify one cell from its (previous, current) liveness pair.
#[inline]
pub fn classify(previous: bool, current: bool) -> TransitionClass {
    match (previous, current) {
        (false, false) => TransitionClass::Dead,
        (true, false) => TransitionClass::Died,
        (false, true) => TransitionClass::Born,
        (true, true) => TransitionClass::Alive,
    }
}

/// Classify every cell of `current` against `previous`.
///
/// Returns a row-major vector with the same shape as the grids. Both grids
/// must have identical dimensions; the `Game` handle guarantees this by
/// construction.
pub fn transitions(previous: &Grid, current: &Grid) -> Vec<TransitionClass> {
    debug_assert_eq!(previous.height(), current.height());
    debug_assert_eq!(previous.width(), current.width());
    previous
        .as_slice()
        .iter()
        .zip(current.as_slice())
        .map(|(&prev, &curr)| classify(prev, curr))
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_exhaustive() {
        assert_eq!(classify(false, false), TransitionClass::Dead);
        assert_eq!(classify(true, false), TransitionClass::Died);
        assert_eq!(classify(false, true), TransitionClass::Born);
        assert_eq!(classify(true, true), TransitionClass::Alive);
    }

    #[test]
    fn test_discriminants_match_color_indices() {
        assert_eq!(TransitionClass::Dead as u8, 0);
        assert_eq!(TransitionClass::Died as u8, 1);
        assert_eq!(TransitionClass::Born as u8, 2);
        assert_eq!(TransitionClass::Alive as u8, 3);
    }

    #[test]
    fn test_transitions_over_grids() {
        let mut previous = Grid::dead(2, 2).unwrap();
        previous.set(0, 0, true); // will die
        previous.set(0, 1, true); // will survive
        let mut current = Grid::dead(2, 2).unwrap();
        current.set(0, 1, true);
        current.set(1, 0, true); // born

        assert_eq!(
            transitions(&previous, &current),
            vec![
                TransitionClass::Died,
                TransitionClass::Alive,
                TransitionClass::Born,
                TransitionClass::Dead,
            ]
        );
    }
}
