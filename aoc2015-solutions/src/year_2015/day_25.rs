use aoc2015_solver::Expected::Answer;
use aoc2015_solver::{AocParser, Fixture, OutputTemplate, ParseError, PartSolver, Puzzle, SolveError};
use aoc2015_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::integers;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(day = 25, tags = ["number-theory"])]
pub struct Solver;

const FIRST_CODE: u64 = 20151125;
const MULTIPLIER: u64 = 252533;
const MODULUS: u64 = 33554393;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    row: u64,
    column: u64,
}

impl Position {
    /// 1-based place of this cell in the diagonal fill order.
    fn ordinal(&self) -> u64 {
        let diagonal = self.row + self.column - 1;
        diagonal * (diagonal - 1) / 2 + self.column
    }
}

fn mod_pow(mut base: u64, mut exponent: u64, modulus: u64) -> u64 {
    let mut result = 1;
    base %= modulus;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = result * base % modulus;
        }
        base = base * base % modulus;
        exponent >>= 1;
    }
    result
}

fn code_at(position: Position) -> u64 {
    FIRST_CODE * mod_pow(MULTIPLIER, position.ordinal() - 1, MODULUS) % MODULUS
}

impl AocParser for Solver {
    type SharedData<'a> = Position;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        match integers::<u64>(input)[..] {
            [row, column, ..] if row > 0 && column > 0 => Ok(Position { row, column }),
            [_, _, ..] => Err(ParseError::InvalidFormat(
                "row and column start at 1".to_string(),
            )),
            _ => Err(ParseError::MissingData("expected a row and a column".to_string())),
        }
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(code_at(*shared).to_string())
    }
}

impl Puzzle for Solver {
    const TITLE: &'static str = "Let It Snow";
    const OUTPUT: OutputTemplate = OutputTemplate::new("The code to give the machine is {0}.");
    const FIXTURES: &'static [Fixture] = &[
        Fixture::new("Enter the code at row 1, column 1.", &[Answer("20151125")]),
        Fixture::new("Enter the code at row 4, column 4.", &[Answer("9380097")]),
        Fixture::new("Enter the code at row 6, column 6.", &[Answer("27995004")]),
        Fixture::new("Enter the code at row 2, column 1.", &[Answer("31916031")]),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_ordering() {
        let ordinal = |row, column| Position { row, column }.ordinal();
        assert_eq!(ordinal(1, 1), 1);
        assert_eq!(ordinal(2, 1), 2);
        assert_eq!(ordinal(1, 2), 3);
        assert_eq!(ordinal(4, 2), 12);
        assert_eq!(ordinal(1, 6), 21);
    }

    #[test]
    fn codes_follow_the_example_table() {
        let code = |row, column| code_at(Position { row, column });
        assert_eq!(code(1, 2), 18749137);
        assert_eq!(code(3, 4), 7981243);
        assert_eq!(code(6, 1), 33071741);
    }

    #[test]
    fn row_and_column_are_required() {
        assert!(matches!(Solver::parse("row 3"), Err(ParseError::MissingData(_))));
        assert!(matches!(Solver::parse("row 0, column 3"), Err(ParseError::InvalidFormat(_))));
    }
}
