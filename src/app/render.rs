//! Frame painters.
//!
//! Each painter queues crossterm commands for one whole frame into the
//! output stream and flushes once - a single syscall per frame keeps the
//! animation flicker-free even without diffing (the grid churns nearly
//! everywhere every generation, so diffing buys little here).

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};

use crate::game::Game;
use crate::render::braille;
use crate::sim::TransitionClass;

use super::config::Mode;

/// The character drawn for a live cell in plain and color modes.
const CELL_CHAR: char = 'O';

const ALIVE_COLOR: Color = Color::Magenta;
const BORN_COLOR: Color = Color::White;
const DIED_COLOR: Color = Color::DarkGrey;

/// Paint one frame of `game` in the given mode and flush.
pub fn draw(out: &mut impl Write, game: &Game, mode: Mode) -> io::Result<()> {
    queue!(
        out,
        Clear(ClearType::All),
        SetAttribute(Attribute::Bold),
        SetForegroundColor(ALIVE_COLOR)
    )?;

    match mode {
        Mode::Plain => draw_plain(out, game)?,
        Mode::Color => draw_color(out, game)?,
        Mode::Braille => draw_braille(out, game)?,
    }

    queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
    out.flush()
}

fn draw_plain(out: &mut impl Write, game: &Game) -> io::Result<()> {
    for (row, col) in game.live_cells() {
        queue!(out, MoveTo(col as u16, row as u16), Print(CELL_CHAR))?;
    }
    Ok(())
}

fn draw_color(out: &mut impl Write, game: &Game) -> io::Result<()> {
    let mut current = ALIVE_COLOR;
    for (row, col, class) in game.transition_cells() {
        let color = match class {
            TransitionClass::Alive => ALIVE_COLOR,
            TransitionClass::Born => BORN_COLOR,
            TransitionClass::Died => DIED_COLOR,
            TransitionClass::Dead => continue,
        };
        if color != current {
            queue!(out, SetForegroundColor(color))?;
            current = color;
        }
        queue!(out, MoveTo(col as u16, row as u16), Print(CELL_CHAR))?;
    }
    Ok(())
}

fn draw_braille(out: &mut impl Write, game: &Game) -> io::Result<()> {
    // The run loop sizes the grid as viewport * (4, 2), so packing cannot
    // fail there; direct callers get the error verbatim.
    let glyphs = game.packed_glyphs().map_err(io::Error::other)?;
    for (row, col, offset) in glyphs {
        queue!(
            out,
            MoveTo(col as u16, row as u16),
            Print(braille::glyph(offset))
        )?;
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
