use aoc2015_solver::Expected::Answer;
use aoc2015_solver::{AocParser, Fixture, OutputTemplate, ParseError, PartSolver, Puzzle, SolveError};
use aoc2015_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 1, tags = ["strings"])]
pub struct Solver;

/// `(` goes up a floor, `)` goes down; anything else is ignored.
fn steps(instructions: &str) -> impl Iterator<Item = i32> + '_ {
    instructions.chars().filter_map(|c| match c {
        '(' => Some(1),
        ')' => Some(-1),
        _ => None,
    })
}

impl AocParser for Solver {
    type SharedData<'a> = &'a str;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(steps(shared).sum::<i32>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let position = steps(shared)
            .scan(0, |floor, step| {
                *floor += step;
                Some(*floor)
            })
            .position(|floor| floor < 0)
            .map_or(0, |index| index + 1);
        Ok(position.to_string())
    }
}

impl Puzzle for Solver {
    const TITLE: &'static str = "Not Quite Lisp";
    const OUTPUT: OutputTemplate = OutputTemplate::new(
        "The instructions took Santa to floor {0}.\n\
         Instruction number {1} caused Santa to first enter the basement.",
    );
    const FIXTURES: &'static [Fixture] = &[
        Fixture::new("(())", &[Answer("0"), Answer("0")]),
        Fixture::new("()()", &[Answer("0"), Answer("0")]),
        Fixture::new("(((", &[Answer("3"), Answer("0")]),
        Fixture::new("(()(()(", &[Answer("3"), Answer("0")]),
        Fixture::new("))(((((", &[Answer("3"), Answer("1")]),
        Fixture::new("())", &[Answer("-1"), Answer("3")]),
        Fixture::new("))(", &[Answer("-1"), Answer("1")]),
        Fixture::new(")))", &[Answer("-3"), Answer("1")]),
        Fixture::new(")())())", &[Answer("-3"), Answer("1")]),
        Fixture::new(")", &[Answer("-1"), Answer("1")]),
        Fixture::new("()())", &[Answer("-1"), Answer("5")]),
    ];
}
