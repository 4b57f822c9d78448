//! Run configuration from CLI arguments and environment.
//!
//! No config file and no CLI framework - three flags and one env var,
//! parsed by hand into a [`Config`].

use std::path::PathBuf;
use std::time::Duration;

/// Frames per second when `--fps` is not given.
pub const DEFAULT_FPS: u32 = 12;

/// Command-line usage text.
pub const USAGE: &str = "\
life-tui - toroidal Game of Life for your terminal

USAGE:
    life-tui [OPTIONS]

OPTIONS:
    --mode <plain|color|braille>   Rendering mode [default: color]
    --fps <N>                      Frames per second [default: 12]
    --density <P>                  Seed live-cell probability in [0,1] [default: 0.25]
    --help                         Print this help

ENVIRONMENT:
    LIFE_TUI_LOG    Write tracing output to this file (filtered by RUST_LOG)

Press any key to quit. Resizing the terminal reseeds the grid.";

/// How generations are painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// One character per live cell, single color.
    Plain,
    /// One character per cell, colored by transition class.
    Color,
    /// One braille glyph per 4x2 cell block (8x density).
    Braille,
}

/// Parsed run parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub mode: Mode,
    pub fps: u32,
    pub density: f64,
    pub log_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::Color,
            fps: DEFAULT_FPS,
            density: crate::sim::DEFAULT_ALIVE_PROBABILITY,
            log_path: std::env::var_os("LIFE_TUI_LOG").map(PathBuf::from),
        }
    }
}

/// Outcome of argument parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum Cli {
    /// Run with the given configuration.
    Run(Config),
    /// `--help` was requested.
    Help,
}

/// Argument parsing errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An argument that is not a known flag.
    #[error("unknown argument `{0}` (try --help)")]
    UnknownArgument(String),

    /// A flag that requires a value was last on the command line.
    #[error("missing value for {0}")]
    MissingValue(&'static str),

    /// A flag value that does not parse or is out of range.
    #[error("invalid value `{value}` for {flag}")]
    InvalidValue {
        /// The offending flag.
        flag: &'static str,
        /// The value as given.
        value: String,
    },
}

impl Config {
    /// Parse command-line arguments (without the program name).
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for unknown flags, missing values, or
    /// values that do not parse / are out of range.
    pub fn parse<I>(args: I) -> Result<Cli, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--help" | "-h" => return Ok(Cli::Help),
                "--mode" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--mode"))?;
                    config.mode = match value.as_str() {
                        "plain" => Mode::Plain,
                        "color" => Mode::Color,
                        "braille" => Mode::Braille,
                        _ => {
                            return Err(ConfigError::InvalidValue {
                                flag: "--mode",
                                value,
                            });
                        }
                    };
                }
                "--fps" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--fps"))?;
                    config.fps = value
                        .parse::<u32>()
                        .ok()
                        .filter(|&fps| fps > 0)
                        .ok_or(ConfigError::InvalidValue {
                            flag: "--fps",
                            value,
                        })?;
                }
                "--density" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--density"))?;
                    config.density = value
                        .parse::<f64>()
                        .ok()
                        .filter(|p| (0.0..=1.0).contains(p))
                        .ok_or(ConfigError::InvalidValue {
                            flag: "--density",
                            value,
                        })?;
                }
                _ => return Err(ConfigError::UnknownArgument(arg)),
            }
        }

        Ok(Cli::Run(config))
    }

    /// The time budget of one frame.
    #[inline]
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.fps
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, ConfigError> {
        Config::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_defaults() {
        let Cli::Run(config) = parse(&[]).unwrap() else {
            panic!("expected Run");
        };
        assert_eq!(config.mode, Mode::Color);
        assert_eq!(config.fps, 12);
        assert_eq!(config.density, 0.25);
    }

    #[test]
    fn test_all_flags() {
        let Cli::Run(config) =
            parse(&["--mode", "braille", "--fps", "30", "--density", "0.4"]).unwrap()
        else {
            panic!("expected Run");
        };
        assert_eq!(config.mode, Mode::Braille);
        assert_eq!(config.fps, 30);
        assert_eq!(config.density, 0.4);
    }

    #[test]
    fn test_help_short_circuits() {
        assert_eq!(parse(&["--help"]).unwrap(), Cli::Help);
        assert_eq!(parse(&["--mode", "plain", "-h"]).unwrap(), Cli::Help);
    }

    #[test]
    fn test_unknown_argument() {
        assert!(matches!(
            parse(&["--speed"]),
            Err(ConfigError::UnknownArgument(arg)) if arg == "--speed"
        ));
    }

    #[test]
    fn test_missing_value() {
        assert!(matches!(
            parse(&["--fps"]),
            Err(ConfigError::MissingValue("--fps"))
        ));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            parse(&["--mode", "fancy"]),
            Err(ConfigError::InvalidValue { flag: "--mode", .. })
        ));
        assert!(matches!(
            parse(&["--fps", "0"]),
            Err(ConfigError::InvalidValue { flag: "--fps", .. })
        ));
        assert!(matches!(
            parse(&["--density", "1.5"]),
            Err(ConfigError::InvalidValue { flag: "--density", .. })
        ));
    }

    #[test]
    fn test_frame_duration() {
        let Cli::Run(config) = parse(&["--fps", "10"]).unwrap() else {
            panic!("expected Run");
        };
        assert_eq!(config.frame_duration(), Duration::from_millis(100));
    }
}
