//! Advent of Code 2015 solver framework
//!
//! A small, type-safe contract shared by the 25 puzzle solvers of the 2015
//! calendar, plus the registry that maps a puzzle number to its solver.
//!
//! # Overview
//!
//! - [`AocParser`] turns raw input into a day's shared data
//! - [`PartSolver`] answers one part; [`Solver`] dispatches part numbers
//!   (usually via `#[derive(AocSolver)]`)
//! - [`Puzzle`] adds the title, output template and built-in [`Fixture`]s
//! - [`SolverRegistry`] resolves a day, parses once, solves every part, and
//!   runs fixtures; solvers join it through `#[derive(AutoRegisterSolver)]`
//!
//! # Quick Example
//!
//! ```
//! use aoc2015_solver::{
//!     AocParser, AocSolver, Expected, Fixture, OutputTemplate, ParseError, PartSolver, Puzzle,
//!     RegistryBuilder, SolveError, register_solver,
//! };
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Lisp;
//!
//! impl AocParser for Lisp {
//!     type SharedData<'a> = Vec<i32>;
//!
//!     fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
//!         Ok(input.chars().map(|c| if c == '(' { 1 } else { -1 }).collect())
//!     }
//! }
//!
//! impl PartSolver<1> for Lisp {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i32>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Lisp {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.len().to_string())
//!     }
//! }
//!
//! impl Puzzle for Lisp {
//!     const TITLE: &'static str = "Lisp";
//!     const OUTPUT: OutputTemplate = OutputTemplate::new("floor {0} after {1} moves");
//!     const FIXTURES: &'static [Fixture] =
//!         &[Fixture::new("(()", &[Expected::Answer("1"), Expected::Answer("3")])];
//! }
//!
//! let mut builder = RegistryBuilder::new();
//! register_solver!(builder, Lisp, 1);
//! let registry = builder.build();
//!
//! let solution = registry.solve(1, "(((").unwrap();
//! assert_eq!(solution.answers(), ["3", "3"]);
//! assert!(registry.run_fixtures(1).unwrap().iter().all(|r| r.passed()));
//! ```
//!
//! # No solution
//!
//! A part whose input admits no answer returns [`SolveError::NoSolution`];
//! it renders as [`NO_SOLUTION`] and fixtures can expect it with
//! [`Expected::NoSolution`].

mod error;
mod fixture;
mod input;
mod instance;
mod puzzle;
mod registry;
mod solver;
mod template;

pub use error::{InputError, ParseError, RegistrationError, SolveError, SolverError};
pub use fixture::{Expected, Fixture, FixtureReport};
pub use input::load_input;
pub use instance::{DynSolver, SolveResult, Solution, SolverInstance};
pub use puzzle::Puzzle;
pub use registry::{
    DAYS, PuzzleInfo, RegisterableSolver, RegistryBuilder, SolverFactory, SolverPlugin,
    SolverRegistry, YEAR,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};
pub use template::{NO_SOLUTION, OutputTemplate};

// Re-export inventory for use by the derive macro
pub use inventory;

pub use aoc2015_solver_macros::{AocSolver, AutoRegisterSolver};
