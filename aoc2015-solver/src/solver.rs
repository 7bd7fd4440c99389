//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Parses a day's puzzle input into the data its parts share.
///
/// Input is always handed in explicitly; nothing about a previous run is
/// retained between calls to [`AocParser::parse`].
///
/// # Example
///
/// ```
/// use aoc2015_solver::{AocParser, ParseError};
///
/// struct Floors;
///
/// impl AocParser for Floors {
///     type SharedData<'a> = &'a str;
///
///     fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
///         if input.is_empty() {
///             return Err(ParseError::MissingData("no instructions".into()));
///         }
///         Ok(input)
///     }
/// }
///
/// assert_eq!(Floors::parse("(()").unwrap(), "(()");
/// ```
pub trait AocParser {
    /// Parsed input plus any results cached for later parts.
    ///
    /// Borrow from the input (`&'a str`) when no transformation is needed,
    /// otherwise own the data.
    type SharedData<'a>;

    /// Parse the input string into the shared data structure.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Solves part `N` of a puzzle.
///
/// # Example
///
/// ```
/// use aoc2015_solver::{AocParser, ParseError, PartSolver, SolveError};
///
/// struct Floors;
///
/// impl AocParser for Floors {
///     type SharedData<'a> = &'a str;
///
///     fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
///         Ok(input)
///     }
/// }
///
/// impl PartSolver<1> for Floors {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         let floor: i32 = shared.chars().map(|c| if c == '(' { 1 } else { -1 }).sum();
///         Ok(floor.to_string())
///     }
/// }
///
/// let mut shared = Floors::parse("(()").unwrap();
/// assert_eq!(<Floors as PartSolver<1>>::solve(&mut shared).unwrap(), "1");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    /// Solve this part using (and possibly caching into) the shared data.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// Dispatches a part number to the matching [`PartSolver`].
///
/// Usually generated with `#[derive(AocSolver)]` and `#[aoc_solver(max_parts = N)]`.
/// Parts run in ascending order on one shared value, so a later part may
/// reuse something an earlier part cached, but each part must still produce
/// its answer when run alone.
///
/// # Example
///
/// ```
/// use aoc2015_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Presents;
///
/// impl AocParser for Presents {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// impl Solver for Presents {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.iter().sum::<u32>().to_string()),
///             2 => shared
///                 .iter()
///                 .max()
///                 .map(u32::to_string)
///                 .ok_or_else(|| SolveError::NoSolution("empty list".into())),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut shared = Presents::parse("3\n9\n4").unwrap();
/// assert_eq!(Presents::solve_part(&mut shared, 1).unwrap(), "16");
/// assert_eq!(Presents::solve_part(&mut shared, 2).unwrap(), "9");
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the problem
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - The part is not implemented
    /// * `Err(SolveError::NoSolution)` - The input has no answer for this part
    /// * `Err(SolveError::SolveFailed)` - An error occurred while solving
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked access to [`Solver::solve_part`].
pub trait SolverExt: Solver {
    /// Reject parts outside `1..=PARTS` before dispatching.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
