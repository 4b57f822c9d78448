//! Terminal session guard.
//!
//! Entering a session switches the terminal to raw mode on the alternate
//! screen with the cursor hidden; dropping the guard restores everything,
//! on error paths included. Construct it before any drawing and keep it
//! alive for the duration of the run.

use std::io::{self, stdout};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode, size,
};

/// RAII terminal session: raw mode + alternate screen + hidden cursor.
#[derive(Debug)]
pub struct Session {
    _private: (),
}

impl Session {
    /// Enter the session.
    ///
    /// # Errors
    ///
    /// Propagates any terminal I/O failure; nothing is left half-switched
    /// (raw mode is rolled back if the screen switch fails).
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        if let Err(err) = execute!(stdout(), EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(err);
        }
        Ok(Self { _private: () })
    }

    /// Current viewport as (rows, cols).
    pub fn viewport() -> io::Result<(usize, usize)> {
        let (cols, rows) = size()?;
        Ok((rows as usize, cols as usize))
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        // Best effort: the terminal may already be gone.
        let _ = execute!(stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}
