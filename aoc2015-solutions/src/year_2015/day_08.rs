use aoc2015_solver::Expected::Answer;
use aoc2015_solver::{AocParser, Fixture, OutputTemplate, ParseError, PartSolver, Puzzle, SolveError};
use aoc2015_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::lenient_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 8, tags = ["strings"])]
pub struct Solver;

fn quoted(line: &str) -> Option<&str> {
    let line = line.trim();
    (line.len() >= 2 && line.starts_with('"') && line.ends_with('"')).then_some(line)
}

/// Characters the string literal holds once its escapes are decoded.
fn memory_len(literal: &str) -> usize {
    let body = &literal.as_bytes()[1..literal.len() - 1];
    let mut len = 0;
    let mut i = 0;
    while i < body.len() {
        i += match body[i..] {
            [b'\\', b'x', a, b, ..] if a.is_ascii_hexdigit() && b.is_ascii_hexdigit() => 4,
            [b'\\', b'\\' | b'"', ..] => 2,
            _ => 1,
        };
        len += 1;
    }
    len
}

/// Characters needed to write the literal itself as a new string literal.
fn encoded_len(literal: &str) -> usize {
    let escaped = literal.bytes().filter(|b| matches!(b, b'"' | b'\\')).count();
    literal.len() + escaped + 2
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(lenient_lines(input, quoted))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let overhead: usize = shared.iter().map(|s| s.len() - memory_len(s)).sum();
        Ok(overhead.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let growth: usize = shared.iter().map(|s| encoded_len(s) - s.len()).sum();
        Ok(growth.to_string())
    }
}

impl Puzzle for Solver {
    const TITLE: &'static str = "Matchsticks";
    const OUTPUT: OutputTemplate = OutputTemplate::new(
        "Total characters of code minus total characters in memory: {0}\n\
         Total decoded characters minus total characters of code:   {1}",
    );
    const FIXTURES: &'static [Fixture] = &[
        Fixture::new(r#""""#, &[Answer("2"), Answer("4")]),
        Fixture::new(r#""abc""#, &[Answer("2"), Answer("4")]),
        Fixture::new(r#""aaa\"aaa""#, &[Answer("3"), Answer("6")]),
        Fixture::new(r#""\x27""#, &[Answer("5"), Answer("5")]),
    ];
}
