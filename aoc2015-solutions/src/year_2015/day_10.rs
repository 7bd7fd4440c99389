use aoc2015_solver::Expected::Answer;
use aoc2015_solver::{AocParser, Fixture, OutputTemplate, ParseError, PartSolver, Puzzle, SolveError};
use aoc2015_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 10, tags = ["strings", "simulation"])]
pub struct Solver;

const FIRST_ROUNDS: usize = 40;
const SECOND_ROUNDS: usize = 50;

pub struct SharedData {
    digits: Vec<u8>,
    rounds: usize,
}

/// One look-and-say round: each run of a digit becomes its length then the digit.
fn look_and_say(digits: &[u8]) -> Vec<u8> {
    let mut next = Vec::with_capacity(digits.len() * 2);
    for (count, digit) in digits.iter().dedup_with_count() {
        next.extend(count.to_string().bytes().map(|b| b - b'0'));
        next.push(*digit);
    }
    next
}

/// Advance the cached sequence to `rounds`; earlier rounds are never replayed.
fn length_after(shared: &mut SharedData, rounds: usize) -> usize {
    while shared.rounds < rounds {
        shared.digits = look_and_say(&shared.digits);
        shared.rounds += 1;
    }
    shared.digits.len()
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let seed = input.trim();
        if seed.is_empty() {
            return Err(ParseError::MissingData("starting sequence is empty".to_string()));
        }
        let digits = seed
            .chars()
            .map(|c| c.to_digit(10).map(|d| d as u8))
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(|| ParseError::InvalidFormat(format!("{seed:?} is not a digit string")))?;
        Ok(SharedData { digits, rounds: 0 })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(length_after(shared, FIRST_ROUNDS).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(length_after(shared, SECOND_ROUNDS).to_string())
    }
}

impl Puzzle for Solver {
    const TITLE: &'static str = "Elves Look, Elves Say";
    const OUTPUT: OutputTemplate = OutputTemplate::new(
        "The length of the output after 40 iterations is {0}\n\
         The length of the output after 50 iterations is {1}",
    );
    const FIXTURES: &'static [Fixture] = &[Fixture::new("1", &[Answer("82350"), Answer("1166642")])];
}
