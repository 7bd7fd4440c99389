//! Built-in example cases used to self-check a solver

use crate::template::{NO_SOLUTION, OutputTemplate};

/// The expected outcome of one part of a fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// The part answers with exactly this text.
    Answer(&'static str),
    /// The part reports that no answer exists.
    NoSolution,
}

impl Expected {
    pub fn as_str(&self) -> &'static str {
        match self {
            Expected::Answer(answer) => answer,
            Expected::NoSolution => NO_SOLUTION,
        }
    }
}

/// A literal input paired with one expected outcome per part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixture {
    pub input: &'static str,
    pub expected: &'static [Expected],
}

impl Fixture {
    pub const fn new(input: &'static str, expected: &'static [Expected]) -> Self {
        Self { input, expected }
    }

    /// The expected answers pushed through a puzzle's output template.
    pub fn expected_output(&self, template: &OutputTemplate) -> String {
        let answers: Vec<&str> = self.expected.iter().map(Expected::as_str).collect();
        template.render(&answers)
    }
}

/// Outcome of running one fixture: both sides rendered with the same template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureReport {
    pub input: &'static str,
    pub expected: String,
    pub actual: String,
}

impl FixtureReport {
    pub fn passed(&self) -> bool {
        self.expected == self.actual
    }
}
