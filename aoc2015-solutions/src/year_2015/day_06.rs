use aoc2015_solver::Expected::Answer;
use aoc2015_solver::{AocParser, Fixture, OutputTemplate, ParseError, PartSolver, Puzzle, SolveError};
use aoc2015_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::{integers, lenient_lines};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 6, tags = ["grid", "simulation"])]
pub struct Solver;

const SIDE: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    TurnOn,
    TurnOff,
    Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    action: Action,
    from: (usize, usize),
    to: (usize, usize),
}

impl Instruction {
    fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let action = if line.starts_with("turn on") {
            Action::TurnOn
        } else if line.starts_with("turn off") {
            Action::TurnOff
        } else if line.starts_with("toggle") {
            Action::Toggle
        } else {
            return None;
        };

        let corners: Vec<usize> = integers(line);
        let [x1, y1, x2, y2] = corners[..] else {
            return None;
        };
        if x1.max(x2) >= SIDE || y1.max(y2) >= SIDE {
            return None;
        }
        Some(Self {
            action,
            from: (x1.min(x2), y1.min(y2)),
            to: (x1.max(x2), y1.max(y2)),
        })
    }

    fn cells(&self) -> impl Iterator<Item = usize> + '_ {
        (self.from.0..=self.to.0)
            .flat_map(move |x| (self.from.1..=self.to.1).map(move |y| x * SIDE + y))
    }
}

/// Run every instruction over a grid of `T`, then sum the lights with `measure`.
fn run<T: Copy + Default>(
    instructions: &[Instruction],
    apply: impl Fn(Action, T) -> T,
    measure: impl Fn(T) -> u64,
) -> u64 {
    let mut grid = vec![T::default(); SIDE * SIDE];
    for instruction in instructions {
        for cell in instruction.cells() {
            grid[cell] = apply(instruction.action, grid[cell]);
        }
    }
    grid.into_iter().map(measure).sum()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Instruction>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(lenient_lines(input, Instruction::parse))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let lit = run(
            shared,
            |action, on: bool| match action {
                Action::TurnOn => true,
                Action::TurnOff => false,
                Action::Toggle => !on,
            },
            u64::from,
        );
        Ok(lit.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let brightness = run(
            shared,
            |action, level: u32| match action {
                Action::TurnOn => level + 1,
                Action::TurnOff => level.saturating_sub(1),
                Action::Toggle => level + 2,
            },
            u64::from,
        );
        Ok(brightness.to_string())
    }
}

impl Puzzle for Solver {
    const TITLE: &'static str = "Probably a Fire Hazard";
    const OUTPUT: OutputTemplate = OutputTemplate::new(
        "The first grid had {0} lights lit and\nthe second grid had a total brightness of {1}",
    );
    const FIXTURES: &'static [Fixture] = &[
        Fixture::new("turn on 0,0 through 999,999", &[Answer("1000000"), Answer("1000000")]),
        Fixture::new("toggle 0,0 through 999,0", &[Answer("1000"), Answer("2000")]),
        Fixture::new(
            "turn on 0,0 through 999,999\ntoggle 0,0 through 999,0",
            &[Answer("999000"), Answer("1002000")],
        ),
        Fixture::new("turn off 499,499 through 500,500", &[Answer("0"), Answer("0")]),
        Fixture::new(
            "turn on 0,0 through 999,999\nturn off 499,499 through 500,500",
            &[Answer("999996"), Answer("999996")],
        ),
        Fixture::new("turn on 0,0 through 0,0", &[Answer("1"), Answer("1")]),
        Fixture::new("toggle 0,0 through 999,999", &[Answer("1000000"), Answer("2000000")]),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instruction_parsing() {
        let parsed = Instruction::parse("turn off 660,55 through 986,197").unwrap();
        assert_eq!(parsed.action, Action::TurnOff);
        assert_eq!((parsed.from, parsed.to), ((660, 55), (986, 197)));
        assert_eq!(Instruction::parse("turn sideways 1,1 through 2,2"), None);
        assert_eq!(Instruction::parse("toggle 1,1 through 1000,2"), None);
    }

    #[test]
    fn brightness_never_goes_negative() {
        let instructions = Solver::parse("turn off 0,0 through 0,0\nturn on 0,0 through 0,0").unwrap();
        let mut shared = instructions;
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "1");
    }
}
