//! # life-tui
//!
//! Toroidal Conway's Game of Life for character-cell terminals.
//!
//! The simulation core is a pure generation-to-generation map: a boolean
//! liveness grid on a discrete torus, stepped by the exact Game of Life
//! rule against a frozen snapshot of the previous generation. Two optional,
//! composable stages feed the renderers:
//!
//! - a **transition overlay** classifying each cell as dead / died / born /
//!   alive-sustained across the last step, for color-differentiated
//!   rendering;
//! - a **braille packer** folding 4x2 cell blocks into Unicode Braille
//!   Pattern offsets, for 8x-density rendering.
//!
//! ## Pipeline
//!
//! ```text
//! Grid → neighbor_counts → step → (new Grid, feeding back)
//!   └→ transitions / pack → app painters → terminal
//! ```
//!
//! ## Modules
//!
//! - [`sim`] - Grid, neighbor counting, rule application, transition overlay
//! - [`render`] - Braille packing
//! - [`game`] - The [`Game`] handle composing the stages
//! - [`app`] - Terminal front end (session, painters, frame loop)
//! - [`error`] - Error types

pub mod app;
pub mod error;
pub mod game;
pub mod render;
pub mod sim;

pub use error::{LifeError, Result};
pub use game::Game;

pub use sim::{
    DEFAULT_ALIVE_PROBABILITY, Grid, TransitionClass, classify, neighbor_counts, step, transitions,
};

pub use render::{BRAILLE_BASE, BrailleFrame, Dots, glyph, pack};
