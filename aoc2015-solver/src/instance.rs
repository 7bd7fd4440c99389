//! Parsed solver instances and their results

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use crate::template::{NO_SOLUTION, OutputTemplate};
use chrono::{DateTime, TimeDelta, Utc};
use tracing::debug;

/// Result from solving a puzzle part, including timing information
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The answer string
    pub answer: String,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    /// Get the solve duration as TimeDelta
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// Owns the parsed input for one day and the parse timestamps.
pub struct SolverInstance<'a, S: Solver> {
    day: u8,
    shared: S::SharedData<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input` and record how long it took.
    pub fn new(day: u8, input: &'a str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let shared = S::parse(input)?;
        let parse_end = Utc::now();
        debug!(day, elapsed = ?(parse_end - parse_start), "parsed input");

        Ok(Self {
            day,
            shared,
            parse_start,
            parse_end,
        })
    }
}

/// Type-erased interface over any [`SolverInstance`].
///
/// ```no_run
/// use aoc2015_solver::DynSolver;
///
/// fn example(mut solver: Box<dyn DynSolver>) -> Result<(), Box<dyn std::error::Error>> {
///     for part in 1..=solver.parts() {
///         let result = solver.solve(part)?;
///         println!("Part {part}: {} (took {})", result.answer, result.duration());
///     }
///     println!("Parse took {}", solver.parse_duration());
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve the specified part with timing
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    /// Get the parse start time (UTC)
    fn parse_start(&self) -> DateTime<Utc>;

    /// Get the parse end time (UTC)
    fn parse_end(&self) -> DateTime<Utc>;

    /// Get the day for this solver
    fn day(&self) -> u8;

    /// Get the number of parts this solver supports
    fn parts(&self) -> u8;

    /// Convenience: get parse duration as TimeDelta
    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }

    /// Solve every part in order.
    fn solve_all(&mut self) -> Vec<Result<SolveResult, SolveError>> {
        (1..=self.parts()).map(|part| self.solve(part)).collect()
    }
}

impl<'a, S: SolverExt> DynSolver for SolverInstance<'a, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part_checked_range(&mut self.shared, part)?;
        let solve_end = Utc::now();
        debug!(day = self.day, part, elapsed = ?(solve_end - solve_start), "solved part");

        Ok(SolveResult {
            answer,
            solve_start,
            solve_end,
        })
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// Every part of one day solved against one input.
#[derive(Debug)]
pub struct Solution {
    pub day: u8,
    pub parse_duration: TimeDelta,
    pub parts: Vec<Result<SolveResult, SolveError>>,
}

impl Solution {
    pub fn from_solver(solver: &mut dyn DynSolver) -> Self {
        Self {
            day: solver.day(),
            parse_duration: solver.parse_duration(),
            parts: solver.solve_all(),
        }
    }

    /// Answer text per part: the answer, `none`, or the error message.
    pub fn answers(&self) -> Vec<String> {
        self.parts.iter().map(render_outcome).collect()
    }

    pub fn render(&self, template: &OutputTemplate) -> String {
        template.render(&self.answers())
    }

    pub fn total_solve_duration(&self) -> TimeDelta {
        self.parts
            .iter()
            .filter_map(|part| part.as_ref().ok())
            .map(SolveResult::duration)
            .sum()
    }
}

fn render_outcome(outcome: &Result<SolveResult, SolveError>) -> String {
    match outcome {
        Ok(result) => result.answer.clone(),
        Err(SolveError::NoSolution(_)) => NO_SOLUTION.to_string(),
        Err(e) => e.to_string(),
    }
}
