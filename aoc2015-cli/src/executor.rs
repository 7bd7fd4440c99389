//! Runs one puzzle: its built-in fixtures, or a real input file

use crate::config::Config;
use crate::error::CliError;
use aoc2015_solver::{FixtureReport, PuzzleInfo, Solution, SolverRegistry, load_input};
use tracing::info;

/// What running a puzzle produced, ready for the output formatter
#[derive(Debug)]
pub enum RunOutcome {
    /// No input file was given; every fixture was checked
    Fixtures {
        info: PuzzleInfo,
        reports: Vec<FixtureReport>,
    },
    /// The input file was parsed once and every part solved
    Solved { info: PuzzleInfo, solution: Solution },
}

/// Resolves the configured puzzle in the registry and runs it
pub struct Executor {
    registry: SolverRegistry,
}

impl Executor {
    pub fn new(registry: SolverRegistry) -> Self {
        Self { registry }
    }

    pub fn execute(&self, config: &Config) -> Result<RunOutcome, CliError> {
        let info = *self.registry.info(config.puzzle)?;

        match &config.input {
            None => {
                info!(day = info.day, fixtures = info.fixtures.len(), "running test cases");
                let reports = self.registry.run_fixtures(info.day)?;
                Ok(RunOutcome::Fixtures { info, reports })
            }
            Some(path) => {
                let input = load_input(path)?;
                info!(day = info.day, path = %path.display(), "solving puzzle input");
                let solution = self.registry.solve(info.day, &input)?;
                Ok(RunOutcome::Solved { info, solution })
            }
        }
    }
}
