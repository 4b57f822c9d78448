//! The frame loop.
//!
//! Draw the current generation, advance the automaton, then poll the
//! keyboard for the remainder of the frame budget - the poll timeout doubles
//! as the frame-rate sleep. Any key press quits; a terminal resize reseeds
//! the game at the new viewport.

use std::io::{self, Write};
use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use crate::game::Game;

use super::config::{Config, Mode};
use super::render;
use super::session::Session;

/// Grid dimensions for a given viewport and mode.
///
/// In braille mode every terminal cell carries a 4x2 block of grid cells,
/// so the grid is denser than the viewport and the packing precondition
/// holds by construction.
fn grid_size(rows: usize, cols: usize, mode: Mode) -> (usize, usize) {
    match mode {
        Mode::Plain | Mode::Color => (rows, cols),
        Mode::Braille => (rows * 4, cols * 2),
    }
}

/// Run the animation until a key is pressed.
///
/// # Errors
///
/// Returns terminal I/O failures and invalid-viewport construction errors.
/// The terminal is restored before the error propagates.
pub fn run(config: &Config) -> Result<()> {
    let _session = Session::enter()?;
    let (rows, cols) = Session::viewport()?;
    let (height, width) = grid_size(rows, cols, config.mode);
    let mut game = Game::with_probability(height, width, config.density)?;
    info!(rows, cols, height, width, mode = ?config.mode, fps = config.fps, "session started");

    let frame = config.frame_duration();
    let mut out = io::BufWriter::new(io::stdout());

    loop {
        let start = Instant::now();
        render::draw(&mut out, &game, config.mode)?;
        game.step();

        // Keyboard poll for the remainder of the frame budget.
        loop {
            let budget = frame.saturating_sub(start.elapsed());
            if !event::poll(budget)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    info!(generation = game.generation(), "key pressed, quitting");
                    out.flush()?;
                    return Ok(());
                }
                Event::Resize(new_cols, new_rows) => {
                    let (height, width) =
                        grid_size(new_rows as usize, new_cols as usize, config.mode);
                    debug!(height, width, "viewport resized, reseeding");
                    game = Game::with_probability(height, width, config.density)?;
                }
                _ => {}
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
