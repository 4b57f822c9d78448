//! App Module - The terminal front end
//!
//! Thin collaborators around the library core. Nothing in here influences
//! the simulation; it only decides how generations are drawn and when the
//! next one is computed.
//!
//! - **Config** - CLI/env parsing into run parameters
//! - **Session** - RAII raw-mode + alternate-screen terminal session
//! - **Render** - The three frame painters (plain, color, braille)
//! - **Run** - The frame loop: draw, step, poll keyboard, repeat

mod config;
mod render;
mod run;
mod session;

pub use config::{Cli, Config, ConfigError, Mode, USAGE};
pub use run::run;
pub use session::Session;
