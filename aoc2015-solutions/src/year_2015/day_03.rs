use std::collections::HashSet;

use aoc2015_solver::Expected::Answer;
use aoc2015_solver::{AocParser, Fixture, OutputTemplate, ParseError, PartSolver, Puzzle, SolveError};
use aoc2015_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 3, tags = ["grid"])]
pub struct Solver;

type Step = (i32, i32);

/// Count houses visited when `couriers` take turns following the moves.
fn houses_visited(moves: &[Step], couriers: usize) -> usize {
    let mut positions = vec![(0, 0); couriers];
    let mut visited = HashSet::from([(0, 0)]);

    for (i, (dx, dy)) in moves.iter().enumerate() {
        let position = &mut positions[i % couriers];
        *position = (position.0 + dx, position.1 + dy);
        visited.insert(*position);
    }
    visited.len()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Step>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(input
            .chars()
            .filter_map(|c| match c {
                '^' => Some((0, 1)),
                'v' => Some((0, -1)),
                '>' => Some((1, 0)),
                '<' => Some((-1, 0)),
                _ => None,
            })
            .collect())
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(houses_visited(shared, 1).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(houses_visited(shared, 2).to_string())
    }
}

impl Puzzle for Solver {
    const TITLE: &'static str = "Perfectly Spherical Houses in a Vacuum";
    const OUTPUT: OutputTemplate = OutputTemplate::new(
        "The first year, Santa drops off presents at {0} houses.\n\
         The second year, presents are dropped off at {1} houses.",
    );
    const FIXTURES: &'static [Fixture] = &[
        Fixture::new(">", &[Answer("2"), Answer("2")]),
        Fixture::new("^v", &[Answer("2"), Answer("3")]),
        Fixture::new("^>v<", &[Answer("4"), Answer("3")]),
        Fixture::new("^v^v^v^v^v", &[Answer("2"), Answer("11")]),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_route_visits_the_start() {
        assert_eq!(houses_visited(&[], 1), 1);
        assert_eq!(houses_visited(&[], 2), 1);
    }
}
