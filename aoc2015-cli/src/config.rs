//! Configuration resolution from CLI args

use crate::cli::{Args, LogLevel};
use std::path::PathBuf;
use tracing::Level;

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Day to run
    pub puzzle: u8,
    /// Input file; `None` runs the built-in test cases
    pub input: Option<PathBuf>,
    /// Whether to print parse and solve times
    pub timings: bool,
    /// Maximum level of diagnostics written to stderr
    pub log_level: Level,
}

impl Config {
    pub fn from_args(args: Args) -> Self {
        Config {
            puzzle: args.puzzle,
            input: args.input,
            timings: args.timings,
            log_level: args.log_level.into(),
        }
    }
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

/// Route `tracing` events at or above `level` to stderr, keeping stdout for answers.
pub fn init_logging(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn resolves_from_args() {
        let args = Args::parse_from(["advent_of_code", "-p", "3", "--log-level", "debug"]);
        let config = Config::from_args(args);
        assert_eq!(
            config,
            Config {
                puzzle: 3,
                input: None,
                timings: false,
                log_level: Level::DEBUG,
            }
        );
    }
}
