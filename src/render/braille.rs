//! Braille packing - sub-cell density rendering.
//!
//! The Unicode Braille Patterns block (U+2800..U+28FF) encodes every
//! combination of an eight-dot cell in a single codepoint, which makes a
//! terminal cell addressable as a 4-row x 2-column pixel block. Packing a
//! liveness grid this way yields 8x the density of one-char-per-cell
//! rendering.
//!
//! # Dot layout
//!
//! Braille dots are numbered down the left column first, with dots 7 and 8
//! forming the bottom row:
//!
//! ```text
//! 1 4        bit 0  bit 3
//! 2 5   =>   bit 1  bit 4
//! 3 6        bit 2  bit 5
//! 7 8        bit 6  bit 7
//! ```
//!
//! The (row, col) -> bit-index table below is fixed by the Unicode
//! standard, not by this crate.

use bitflags::bitflags;

use crate::error::{LifeError, Result};
use crate::sim::Grid;

/// First codepoint of the Unicode Braille Patterns block (blank pattern).
pub const BRAILLE_BASE: u32 = 0x2800;

/// Bit index for each (row, col) position within a 4x2 block.
const BLOCK_BITS: [[u8; 2]; 4] = [[0, 3], [1, 4], [2, 5], [6, 7]];

bitflags! {
    /// The eight dots of one braille cell, as offset bits from
    /// [`BRAILLE_BASE`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Dots: u8 {
        const DOT_1 = 0x01;
        const DOT_2 = 0x02;
        const DOT_3 = 0x04;
        const DOT_4 = 0x08;
        const DOT_5 = 0x10;
        const DOT_6 = 0x20;
        const DOT_7 = 0x40;
        const DOT_8 = 0x80;
    }
}

impl Dots {
    /// The dot for block position (row, col), row in 0..4, col in 0..2.
    #[inline]
    pub fn at(row: usize, col: usize) -> Self {
        Self::from_bits_retain(1 << BLOCK_BITS[row][col])
    }
}

/// A packed frame: one glyph offset per 4x2 source block.
///
/// Dimensions are (grid_height / 4) x (grid_width / 2). A zero byte means
/// "no glyph" - renderers skip it rather than drawing the blank pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrailleFrame {
    rows: usize,
    cols: usize,
    bytes: Vec<u8>,
}

impl BrailleFrame {
    /// Frame height in terminal cells.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Frame width in terminal cells.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Glyph offset at (row, col).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.bytes[row * self.cols + col]
    }

    /// Iterate over the nonzero cells as (row, col, offset).
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        let cols = self.cols;
        self.bytes
            .iter()
            .enumerate()
            .filter(|&(_, &byte)| byte != 0)
            .map(move |(idx, &byte)| (idx / cols, idx % cols, byte))
    }
}

/// Pack a grid into braille glyph offsets, one byte per 4x2 block.
///
/// Each output byte is the OR of the dot bits of the live cells in its
/// block; a fully dead block packs to 0. Adding [`BRAILLE_BASE`] to a
/// nonzero byte yields the codepoint to draw (see [`glyph`]).
///
/// # Errors
///
/// Returns [`LifeError::IncompatibleDimensions`] unless the grid height is
/// a multiple of 4 and the width a multiple of 2. The grid is never
/// truncated or padded to fit.
pub fn pack(grid: &Grid) -> Result<BrailleFrame> {
    let height = grid.height();
    let width = grid.width();
    if height % 4 != 0 || width % 2 != 0 {
        return Err(LifeError::IncompatibleDimensions { height, width });
    }

    let rows = height / 4;
    let cols = width / 2;
    let cells = grid.as_slice();
    let mut bytes = Vec::with_capacity(rows * cols);

    for block_row in 0..rows {
        for block_col in 0..cols {
            let mut dots = Dots::empty();
            for dy in 0..4 {
                for dx in 0..2 {
                    if cells[(block_row * 4 + dy) * width + block_col * 2 + dx] {
                        dots |= Dots::at(dy, dx);
                    }
                }
            }
            bytes.push(dots.bits());
        }
    }

    Ok(BrailleFrame { rows, cols, bytes })
}

/// The drawable character for a packed offset.
///
/// `glyph(0)` is the blank braille pattern; callers normally skip zero
/// offsets instead of drawing it.
#[inline]
pub fn glyph(offset: u8) -> char {
    // The Braille Patterns block is contiguous, so every u8 offset maps to
    // a valid codepoint.
    char::from_u32(BRAILLE_BASE + offset as u32).unwrap_or(' ')
}

// =============================================================================
// TESTS
// =============================================================================
