use aoc2015_solver::Expected::Answer;
use aoc2015_solver::{AocParser, Fixture, OutputTemplate, ParseError, PartSolver, Puzzle, SolveError};
use aoc2015_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::parse::lenient_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 17, tags = ["combinatorics"])]
pub struct Solver;

const EGGNOG_LITRES: u32 = 150;

pub struct SharedData {
    containers: Vec<u32>,
    /// `by_size[k]`: ways to hold the eggnog in exactly `k` containers.
    by_size: Option<Vec<usize>>,
}

fn ways_by_size(containers: &[u32], litres: u32) -> Vec<usize> {
    (0..=containers.len())
        .map(|k| {
            containers
                .iter()
                .combinations(k)
                .filter(|chosen| chosen.iter().copied().sum::<u32>() == litres)
                .count()
        })
        .collect()
}

fn by_size(shared: &mut SharedData) -> &[usize] {
    shared
        .by_size
        .get_or_insert_with(|| ways_by_size(&shared.containers, EGGNOG_LITRES))
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(SharedData {
            containers: lenient_lines(input, |line| line.trim().parse().ok()),
            by_size: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(by_size(shared).iter().sum::<usize>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        by_size(shared)
            .iter()
            .find(|&&ways| ways > 0)
            .map(|ways| ways.to_string())
            .ok_or_else(|| SolveError::NoSolution("no combination holds the eggnog".to_string()))
    }
}

impl Puzzle for Solver {
    const TITLE: &'static str = "No Such Thing as Too Much";
    const OUTPUT: OutputTemplate = OutputTemplate::new(
        "The number of 150 litre container combinations is {0}.\n\
         The number of 150 litre fewest container combinations is {1}.",
    );
    const FIXTURES: &'static [Fixture] =
        &[Fixture::new("120\n90\n60\n30\n30", &[Answer("4"), Answer("3")])];
}
