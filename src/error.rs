//! Error types for the `life-tui` crate.
//!
//! All fallible operations return [`LifeError`] through the crate-level
//! [`Result`] alias. Errors are construction-time contract violations:
//! nothing in the per-generation path (`step`, counting, classification)
//! can fail.

/// Errors that can occur constructing grids or packing them for display.
#[derive(Debug, thiserror::Error)]
pub enum LifeError {
    /// A grid was requested with a zero height or width.
    #[error("invalid grid dimensions {height}x{width}: both must be nonzero")]
    InvalidDimension {
        /// Requested height in cells.
        height: usize,
        /// Requested width in cells.
        width: usize,
    },

    /// The seeding probability is outside `[0, 1]`.
    #[error("seeding probability {0} is outside [0, 1]")]
    InvalidProbability(f64),

    /// The grid cannot be partitioned into 4x2 braille blocks.
    #[error(
        "grid {height}x{width} cannot be braille-packed: height must be a \
         multiple of 4 and width a multiple of 2"
    )]
    IncompatibleDimensions {
        /// Grid height in cells.
        height: usize,
        /// Grid width in cells.
        width: usize,
    },
}

/// Crate-level result alias.
pub type Result<T> = std::result::Result<T, LifeError>;
