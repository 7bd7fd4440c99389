use anyhow::Context;
use aoc2015_solver::Expected::Answer;
use aoc2015_solver::{AocParser, Fixture, OutputTemplate, ParseError, PartSolver, Puzzle, SolveError};
use aoc2015_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 20, tags = ["number-theory"])]
pub struct Solver;

/// How elves deliver: presents per visit and how many houses each elf visits.
#[derive(Debug, Clone, Copy)]
struct Route {
    presents_per_elf: u32,
    houses_per_elf: Option<u32>,
}

const ENDLESS: Route = Route {
    presents_per_elf: 10,
    houses_per_elf: None,
};
const LAZY: Route = Route {
    presents_per_elf: 11,
    houses_per_elf: Some(50),
};

/// First house receiving at least `target` presents.
///
/// House `n` always gets at least elf `n`'s own delivery, so no house past
/// `target / presents_per_elf + 1` needs checking.
fn first_house(target: u32, route: Route) -> u32 {
    let limit = (target / route.presents_per_elf + 1) as usize;
    let mut presents = vec![0u32; limit + 1];

    for elf in 1..=limit {
        let visits = route.houses_per_elf.map_or(usize::MAX, |n| n as usize);
        for house in (elf..=limit).step_by(elf).take(visits) {
            presents[house] += elf as u32 * route.presents_per_elf;
        }
    }

    presents
        .iter()
        .enumerate()
        .skip(1)
        .find(|&(_, &p)| p >= target)
        .map_or(limit as u32, |(house, _)| house as u32)
}

impl AocParser for Solver {
    type SharedData<'a> = u32;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let target = input.trim();
        target
            .parse()
            .with_context(|| format!("{target:?} is not a present count"))
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(first_house(*shared, ENDLESS).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(first_house(*shared, LAZY).to_string())
    }
}

impl Puzzle for Solver {
    const TITLE: &'static str = "Infinite Elves and Infinite Houses";
    const OUTPUT: OutputTemplate = OutputTemplate::new(
        "The first house number with at least as many presents is {0}.\n\
         The second house number with at least as many presents is {1}",
    );
    const FIXTURES: &'static [Fixture] = &[
        Fixture::new("60", &[Answer("4"), Answer("4")]),
        Fixture::new("120", &[Answer("6"), Answer("6")]),
        Fixture::new("150", &[Answer("8"), Answer("8")]),
    ];
}
