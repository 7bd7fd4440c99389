use aoc2015_solver::Expected::Answer;
use aoc2015_solver::{AocParser, Fixture, OutputTemplate, ParseError, PartSolver, Puzzle, SolveError};
use aoc2015_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use tracing::debug;

use crate::utils::parse::lenient_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 24, tags = ["combinatorics", "search"])]
pub struct Solver;

fn quantum_entanglement(group: &[u64]) -> u64 {
    group.iter().product()
}

/// Whether `weights` can be shared out into `groups` groups of exactly `target` each.
fn can_split(weights: &[u64], groups: usize, target: u64) -> bool {
    fn place(weights: &[u64], loads: &mut [u64], target: u64) -> bool {
        let Some((&weight, rest)) = weights.split_first() else {
            return loads.iter().all(|&load| load == target);
        };
        for i in 0..loads.len() {
            // an empty group is interchangeable with every later empty group
            if loads[i] + weight > target || (loads[i] == 0 && loads[..i].contains(&0)) {
                continue;
            }
            loads[i] += weight;
            if place(rest, loads, target) {
                return true;
            }
            loads[i] -= weight;
        }
        false
    }

    let mut sorted = weights.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    place(&sorted, &mut vec![0; groups], target)
}

/// Lowest entanglement of a smallest front group, given that the rest of the
/// packages still balance into the other groups.
fn best_entanglement(weights: &[u64], groups: usize) -> Result<u64, SolveError> {
    let total: u64 = weights.iter().sum();
    if groups == 0 || weights.is_empty() || total % groups as u64 != 0 {
        return Err(SolveError::NoSolution(format!(
            "{total} does not divide into {groups} equal groups"
        )));
    }
    let target = total / groups as u64;

    for size in 1..=weights.len() {
        let mut candidates: Vec<(u64, Vec<usize>)> = (0..weights.len())
            .combinations(size)
            .filter(|chosen| chosen.iter().map(|&i| weights[i]).sum::<u64>() == target)
            .map(|chosen| {
                let group: Vec<u64> = chosen.iter().map(|&i| weights[i]).collect();
                (quantum_entanglement(&group), chosen)
            })
            .collect();
        candidates.sort_unstable();

        for (entanglement, chosen) in candidates {
            let rest: Vec<u64> = (0..weights.len())
                .filter(|i| !chosen.contains(i))
                .map(|i| weights[i])
                .collect();
            if can_split(&rest, groups - 1, target) {
                debug!(groups, size, entanglement, "front group found");
                return Ok(entanglement);
            }
        }
    }

    Err(SolveError::NoSolution(format!("packages cannot balance into {groups} groups")))
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<u64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(lenient_lines(input, |line| line.trim().parse().ok()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        best_entanglement(shared, 3).map(|qe| qe.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        best_entanglement(shared, 4).map(|qe| qe.to_string())
    }
}

impl Puzzle for Solver {
    const TITLE: &'static str = "It Hangs in the Balance";
    const OUTPUT: OutputTemplate = OutputTemplate::new(
        "The best quantum entanglement for the first 3 groups is {0}.\n\
         The best quantum entanglement for the first 4 groups is {1}.",
    );
    const FIXTURES: &'static [Fixture] = &[Fixture::new(
        "1\n2\n3\n4\n5\n7\n8\n9\n10\n11",
        &[Answer("99"), Answer("44")],
    )];
}
