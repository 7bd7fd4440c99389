use std::collections::HashMap;

use aoc2015_solver::Expected::Answer;
use aoc2015_solver::{AocParser, Fixture, OutputTemplate, ParseError, PartSolver, Puzzle, SolveError};
use aoc2015_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::parse::lenient_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 9, tags = ["permutations", "graph"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData<'a> {
    towns: Vec<&'a str>,
    distances: HashMap<(usize, usize), u32>,
    route_bounds: Option<Option<(u32, u32)>>,
}

fn parse_leg(line: &str) -> Option<(&str, &str, u32)> {
    let (towns, distance) = line.split_once('=')?;
    let (from, to) = towns.split_once(" to ")?;
    Some((from.trim(), to.trim(), distance.trim().parse().ok()?))
}

impl SharedData<'_> {
    fn route_length(&self, route: &[usize]) -> Option<u32> {
        route
            .iter()
            .tuple_windows()
            .map(|(a, b)| self.distances.get(&(*a, *b)).copied())
            .sum()
    }

    /// Shortest and longest complete route, if any route visits every town.
    fn route_bounds(&mut self) -> Option<(u32, u32)> {
        if let Some(bounds) = self.route_bounds {
            return bounds;
        }
        let bounds = (0..self.towns.len())
            .permutations(self.towns.len())
            .filter_map(|route| self.route_length(&route))
            .minmax()
            .into_option();
        self.route_bounds = Some(bounds);
        bounds
    }
}

fn no_route() -> SolveError {
    SolveError::NoSolution("no route visits every town".to_string())
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut towns: Vec<&str> = Vec::new();
        let mut distances = HashMap::new();

        for (from, to, distance) in lenient_lines(input, parse_leg) {
            let mut index_of = |town| match towns.iter().position(|&t| t == town) {
                Some(index) => index,
                None => {
                    towns.push(town);
                    towns.len() - 1
                }
            };
            let (a, b) = (index_of(from), index_of(to));
            distances.insert((a, b), distance);
            distances.insert((b, a), distance);
        }

        if towns.is_empty() {
            return Err(ParseError::MissingData("no distances listed".to_string()));
        }
        Ok(SharedData {
            towns,
            distances,
            route_bounds: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (shortest, _) = shared.route_bounds().ok_or_else(no_route)?;
        Ok(shortest.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (_, longest) = shared.route_bounds().ok_or_else(no_route)?;
        Ok(longest.to_string())
    }
}

impl Puzzle for Solver {
    const TITLE: &'static str = "All in a Single Night";
    const OUTPUT: OutputTemplate = OutputTemplate::new(
        "The distance for the shortest route is {0}\nThe distance for the longest route is {1}",
    );
    const FIXTURES: &'static [Fixture] = &[Fixture::new(
        "London to Dublin = 464\nLondon to Belfast = 518\nDublin to Belfast = 141",
        &[Answer("605"), Answer("982")],
    )];
}
