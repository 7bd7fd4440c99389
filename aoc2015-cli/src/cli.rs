//! CLI argument parsing using clap

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Verbosity of the diagnostic log written to stderr
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

/// Advent of Code 2015 solver runner
///
/// Without an input file the puzzle's built-in test cases are run instead.
#[derive(Parser, Debug)]
#[command(
    name = "advent_of_code",
    version = concat!("v", env!("CARGO_PKG_VERSION")),
    disable_version_flag = true
)]
pub struct Args {
    /// Puzzle (day) to run
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub puzzle: u8,

    /// Puzzle input file
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Print parse and solve times after the answers
    #[arg(short, long)]
    pub timings: bool,

    /// Log level for diagnostics on stderr
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,
}
