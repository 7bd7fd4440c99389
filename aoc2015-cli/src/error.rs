//! Error types for the CLI

use aoc2015_solver::{InputError, RegistrationError, SolverError};
use thiserror::Error;

/// Every error that ends the program with a non-zero status
#[derive(Error, Debug)]
pub enum CliError {
    /// Input file could not be read
    #[error(transparent)]
    Input(#[from] InputError),

    /// Solver lookup, parse or solve error
    #[error("{0}")]
    Solver(#[from] SolverError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] RegistrationError),

    /// Writing results failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
