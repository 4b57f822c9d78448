//! Render Module - Grid-to-glyph transforms
//!
//! Transforms a liveness grid into drawable data. Nothing here touches the
//! terminal; the application layer owns the actual output stream.
//!
//! - **Braille** - 4x2 block packing into Unicode Braille Pattern offsets

pub mod braille;

pub use braille::{BRAILLE_BASE, BrailleFrame, Dots, glyph, pack};
