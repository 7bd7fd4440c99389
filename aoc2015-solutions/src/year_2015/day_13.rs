use std::collections::HashMap;

use aoc2015_solver::Expected::Answer;
use aoc2015_solver::{AocParser, Fixture, OutputTemplate, ParseError, PartSolver, Puzzle, SolveError};
use aoc2015_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::parse::lenient_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 13, tags = ["permutations"])]
pub struct Solver;

/// `happiness[a][b]`: how `a` feels about sitting next to `b`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    happiness: Vec<Vec<i32>>,
}

/// `Alice would gain 54 happiness units by sitting next to Bob.`
fn parse_preference(line: &str) -> Option<(&str, &str, i32)> {
    let words: Vec<&str> = line.trim().trim_end_matches('.').split_whitespace().collect();
    let [guest, "would", direction, amount, "happiness", "units", "by", "sitting", "next", "to", neighbor] =
        words[..]
    else {
        return None;
    };
    let amount: i32 = amount.parse().ok()?;
    let change = match direction {
        "gain" => amount,
        "lose" => -amount,
        _ => return None,
    };
    Some((guest, neighbor, change))
}

impl Preferences {
    fn with_neutral_guest(&self) -> Self {
        let mut happiness = self.happiness.clone();
        for row in &mut happiness {
            row.push(0);
        }
        happiness.push(vec![0; happiness.len() + 1]);
        Self { happiness }
    }

    /// Best total over every circular seating. The first guest's seat is
    /// fixed since rotations of a table are the same arrangement.
    fn best_arrangement(&self) -> i32 {
        let guests = self.happiness.len();
        match guests {
            0 | 1 => return 0,
            // two guests share a single pair of seats
            2 => return self.happiness[0][1] + self.happiness[1][0],
            _ => {}
        }
        (1..guests)
            .permutations(guests - 1)
            .map(|rest| {
                let table: Vec<usize> = std::iter::once(0).chain(rest).collect();
                table
                    .iter()
                    .circular_tuple_windows()
                    .map(|(&a, &b)| self.happiness[a][b] + self.happiness[b][a])
                    .sum::<i32>()
            })
            .max()
            .unwrap_or(0)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Preferences;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let entries = lenient_lines(input, parse_preference);
        let names: Vec<&str> = entries
            .iter()
            .flat_map(|&(guest, neighbor, _)| [guest, neighbor])
            .unique()
            .collect();
        let index: HashMap<&str, usize> = names.iter().enumerate().map(|(i, &n)| (n, i)).collect();

        let mut happiness = vec![vec![0; names.len()]; names.len()];
        for (guest, neighbor, change) in entries {
            happiness[index[guest]][index[neighbor]] = change;
        }
        Ok(Preferences { happiness })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.best_arrangement().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.with_neutral_guest().best_arrangement().to_string())
    }
}

impl Puzzle for Solver {
    const TITLE: &'static str = "Knights of the Dinner Table";
    const OUTPUT: OutputTemplate = OutputTemplate::new(
        "The total change in happiness for the first arrangement is {0}\n\
         The total change in happiness for the second arrangement is {1}",
    );
    const FIXTURES: &'static [Fixture] = &[Fixture::new(
        "Alice would gain 54 happiness units by sitting next to Bob.\n\
         Alice would lose 79 happiness units by sitting next to Carol.\n\
         Alice would lose 2 happiness units by sitting next to David.\n\
         Bob would gain 83 happiness units by sitting next to Alice.\n\
         Bob would lose 7 happiness units by sitting next to Carol.\n\
         Bob would lose 63 happiness units by sitting next to David.\n\
         Carol would lose 62 happiness units by sitting next to Alice.\n\
         Carol would gain 60 happiness units by sitting next to Bob.\n\
         Carol would gain 55 happiness units by sitting next to David.\n\
         David would gain 46 happiness units by sitting next to Alice.\n\
         David would lose 7 happiness units by sitting next to Bob.\n\
         David would gain 41 happiness units by sitting next to Carol.",
        &[Answer("330"), Answer("286")],
    )];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preference_line() {
        assert_eq!(
            parse_preference("Bob would lose 7 happiness units by sitting next to Carol."),
            Some(("Bob", "Carol", -7))
        );
        assert_eq!(parse_preference("Bob would shrug next to Carol."), None);
    }

    #[test]
    fn two_guests_are_counted_as_one_pair() {
        let shared = Solver::parse(
            "A would gain 3 happiness units by sitting next to B.\n\
             B would lose 1 happiness units by sitting next to A.",
        )
        .unwrap();
        assert_eq!(shared.best_arrangement(), 2);
        assert_eq!(shared.with_neutral_guest().best_arrangement(), 2);
    }
}
