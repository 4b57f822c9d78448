//! Binary entry point.
//!
//! Parses arguments, wires up logging, runs the frame loop. Any error is
//! printed after the terminal session guard has restored the screen.

use std::fs::File;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use life_tui::app::{self, Cli, Config, USAGE};

/// Send tracing output to a log file, filtered by `RUST_LOG`.
///
/// Stdout belongs to the alternate screen while the animation runs, so
/// logging is active only when a file path was given.
fn init_tracing(path: &Path) -> anyhow::Result<()> {
    let file = Arc::new(
        File::create(path).with_context(|| format!("cannot open log file {}", path.display()))?,
    );
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(move || Arc::clone(&file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn try_main() -> anyhow::Result<()> {
    let config = match Config::parse(std::env::args().skip(1))? {
        Cli::Help => {
            println!("{USAGE}");
            return Ok(());
        }
        Cli::Run(config) => config,
    };

    if let Some(path) = &config.log_path {
        init_tracing(path)?;
    }

    app::run(&config)
}

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // The session guard has already restored the terminal here.
            eprintln!("life-tui: {err:#}");
            ExitCode::FAILURE
        }
    }
}
