//! Error types for the solver library

use std::path::PathBuf;
use thiserror::Error;

/// Error type for parsing input data
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input format doesn't match expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from input
    #[error("Missing data: {0}")]
    MissingData(String),
    /// Other parsing errors
    #[error("Parse error: {0}")]
    Other(String),
}

/// Error type for solving a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part number is not implemented
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The requested part number is out of range (exceeds max_parts)
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// The input admits no answer for this part
    #[error("No solution: {0}")]
    NoSolution(String),
    /// An error occurred while solving the part
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for solver operations
#[derive(Debug, Error)]
pub enum SolverError {
    /// Day outside 1..=25
    #[error("Day {0} is not a valid puzzle number (expected 1-25)")]
    InvalidDay(u8),
    /// No solver registered for the given day
    #[error("No solver registered for day {0}")]
    NotFound(u8),
    /// Error occurred during parsing
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    /// Error occurred during solving
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// Attempted to register a second solver for the same day
    #[error("Duplicate solver registration for day {0}")]
    DuplicateSolver(u8),
    /// Day outside 1..=25
    #[error("Cannot register a solver for day {0} (expected 1-25)")]
    InvalidDay(u8),
}

/// Failure to read a puzzle input file
#[derive(Debug, Error)]
#[error("Failed to read the puzzle input from file \"{}\"\n{source}", path.display())]
pub struct InputError {
    /// The path that could not be read
    pub path: PathBuf,
    /// The underlying I/O error
    #[source]
    pub source: std::io::Error,
}
