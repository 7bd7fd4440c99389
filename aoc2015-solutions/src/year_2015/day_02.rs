use aoc2015_solver::Expected::Answer;
use aoc2015_solver::{AocParser, Fixture, OutputTemplate, ParseError, PartSolver, Puzzle, SolveError};
use aoc2015_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::lenient_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 2, tags = ["arithmetic"])]
pub struct Solver;

/// Box dimensions, smallest first.
type Dimensions = [u64; 3];

fn parse_box(line: &str) -> Option<Dimensions> {
    let mut sides = line.trim().split('x').map(|side| side.parse::<u64>().ok());
    let mut dims = [sides.next()??, sides.next()??, sides.next()??];
    if sides.next().is_some() {
        return None;
    }
    dims.sort_unstable();
    Some(dims)
}

fn wrapping_paper([a, b, c]: Dimensions) -> u64 {
    2 * (a * b + b * c + a * c) + a * b
}

fn ribbon([a, b, c]: Dimensions) -> u64 {
    2 * (a + b) + a * b * c
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Dimensions>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(lenient_lines(input, parse_box))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().copied().map(wrapping_paper).sum::<u64>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().copied().map(ribbon).sum::<u64>().to_string())
    }
}

impl Puzzle for Solver {
    const TITLE: &'static str = "I Was Told There Would Be No Math";
    const OUTPUT: OutputTemplate = OutputTemplate::new(
        "The elves should order {0} feet of wrapping paper\nand {1} feet of ribbon.",
    );
    const FIXTURES: &'static [Fixture] = &[
        Fixture::new("2x3x4", &[Answer("58"), Answer("34")]),
        Fixture::new("1x1x10", &[Answer("43"), Answer("14")]),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_are_sorted() {
        assert_eq!(parse_box("4x2x3"), Some([2, 3, 4]));
    }

    #[test]
    fn malformed_boxes_are_skipped() {
        assert_eq!(parse_box("2x3"), None);
        assert_eq!(parse_box("2x3x4x5"), None);
        assert_eq!(parse_box("2xyx4"), None);
        assert_eq!(Solver::parse("2x3x4\nbad\n1x1x10").unwrap().len(), 2);
    }
}
