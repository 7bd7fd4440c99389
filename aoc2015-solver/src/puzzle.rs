//! Puzzle metadata attached to a solver

use crate::fixture::Fixture;
use crate::solver::Solver;
use crate::template::OutputTemplate;

/// A solver that also knows how to present itself.
///
/// ```
/// use aoc2015_solver::{
///     AocParser, Expected, Fixture, OutputTemplate, ParseError, Puzzle, SolveError, Solver,
/// };
///
/// struct Echo;
///
/// impl AocParser for Echo {
///     type SharedData<'a> = &'a str;
///     fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
///         Ok(input)
///     }
/// }
///
/// impl Solver for Echo {
///     const PARTS: u8 = 1;
///     fn solve_part(shared: &mut Self::SharedData<'_>, _part: u8) -> Result<String, SolveError> {
///         Ok(shared.len().to_string())
///     }
/// }
///
/// impl Puzzle for Echo {
///     const TITLE: &'static str = "Echo";
///     const OUTPUT: OutputTemplate = OutputTemplate::new("Length {0}");
///     const FIXTURES: &'static [Fixture] = &[Fixture::new("abc", &[Expected::Answer("3")])];
/// }
///
/// assert_eq!(Echo::FIXTURES[0].expected_output(&Echo::OUTPUT), "Length 3");
/// ```
pub trait Puzzle: Solver {
    /// Puzzle title, without the "Day N" prefix.
    const TITLE: &'static str;
    /// How the answers are presented.
    const OUTPUT: OutputTemplate;
    /// Example inputs from the puzzle statement.
    const FIXTURES: &'static [Fixture] = &[];
}
