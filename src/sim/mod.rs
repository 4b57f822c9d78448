//! Simulation Module - The cellular automaton core
//!
//! This module contains the generation-to-generation machinery:
//!
//! - **Grid** - Fixed-dimension boolean liveness matrix on a torus
//! - **Step** - Toroidal neighbor counting and rule application
//! - **Overlay** - Per-cell transition classification between generations
//!
//! Everything here is pure and synchronous: a generation is a function of
//! the previous generation and nothing else.

mod grid;
mod overlay;
mod step;

pub use grid::{DEFAULT_ALIVE_PROBABILITY, Grid};
pub use overlay::{TransitionClass, classify, transitions};
pub use step::{neighbor_counts, step};
