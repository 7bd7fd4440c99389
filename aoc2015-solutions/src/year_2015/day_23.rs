use aoc2015_solver::Expected::Answer;
use aoc2015_solver::{AocParser, Fixture, OutputTemplate, ParseError, PartSolver, Puzzle, SolveError};
use aoc2015_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::debug;

use crate::utils::parse::lenient_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 23, tags = ["interpreter"])]
pub struct Solver;

/// Give up on programs that run longer than this.
const STEP_LIMIT: usize = 10_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    A,
    B,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Half(Register),
    Triple(Register),
    Increment(Register),
    Jump(isize),
    JumpIfEven(Register, isize),
    JumpIfOne(Register, isize),
}

fn parse_register(token: Option<&str>) -> Option<Register> {
    match token? {
        "a" => Some(Register::A),
        "b" => Some(Register::B),
        _ => None,
    }
}

impl Instruction {
    /// `inc a`, `jmp +7`, `jie b, -2`
    fn parse(line: &str) -> Option<Self> {
        let (op, args) = line.trim().split_once(' ')?;
        let mut args = args.split(',').map(str::trim);

        let instruction = match op {
            "hlf" => Self::Half(parse_register(args.next())?),
            "tpl" => Self::Triple(parse_register(args.next())?),
            "inc" => Self::Increment(parse_register(args.next())?),
            "jmp" => Self::Jump(args.next()?.parse().ok()?),
            "jie" => Self::JumpIfEven(parse_register(args.next())?, args.next()?.parse().ok()?),
            "jio" => Self::JumpIfOne(parse_register(args.next())?, args.next()?.parse().ok()?),
            _ => return None,
        };
        Some(instruction)
    }
}

#[derive(Debug, Default)]
struct Machine {
    a: u64,
    b: u64,
}

impl Machine {
    fn read(&self, register: Register) -> u64 {
        match register {
            Register::A => self.a,
            Register::B => self.b,
        }
    }

    fn register(&mut self, register: Register) -> &mut u64 {
        match register {
            Register::A => &mut self.a,
            Register::B => &mut self.b,
        }
    }

    /// Run until the program counter leaves the program.
    fn run(mut self, program: &[Instruction]) -> Result<Self, SolveError> {
        let mut pc = 0isize;
        let mut steps = 0;

        while let Some(instruction) = usize::try_from(pc).ok().and_then(|i| program.get(i)) {
            steps += 1;
            if steps > STEP_LIMIT {
                return Err(SolveError::NoSolution(format!(
                    "program still running after {STEP_LIMIT} steps"
                )));
            }

            pc += match *instruction {
                Instruction::Half(r) => {
                    *self.register(r) /= 2;
                    1
                }
                Instruction::Triple(r) => {
                    let value = self.register(r);
                    *value = value.wrapping_mul(3);
                    1
                }
                Instruction::Increment(r) => {
                    let value = self.register(r);
                    *value = value.wrapping_add(1);
                    1
                }
                Instruction::Jump(offset) => offset,
                Instruction::JumpIfEven(r, offset) if self.read(r) % 2 == 0 => offset,
                Instruction::JumpIfOne(r, offset) if self.read(r) == 1 => offset,
                Instruction::JumpIfEven(..) | Instruction::JumpIfOne(..) => 1,
            };
        }

        debug!(steps, a = self.a, b = self.b, "program halted");
        Ok(self)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Instruction>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(lenient_lines(input, Instruction::parse))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let machine = Machine::default().run(shared)?;
        Ok(machine.b.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let machine = Machine { a: 1, b: 0 }.run(shared)?;
        Ok(machine.b.to_string())
    }
}

impl Puzzle for Solver {
    const TITLE: &'static str = "Opening the Turing Lock";
    const OUTPUT: OutputTemplate = OutputTemplate::new(
        "The value in register b when the program finished was {0}.\n\
         The value in register b when register a is set to 1 was {1}.",
    );
    const FIXTURES: &'static [Fixture] = &[
        Fixture::new("inc a", &[Answer("0"), Answer("0")]),
        Fixture::new("inc b", &[Answer("1"), Answer("1")]),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc2015_solver::Solver as _;

    #[test]
    fn example_program() {
        let program = Solver::parse("inc a\njio a, +2\ntpl a\ninc a").unwrap();
        let machine = Machine::default().run(&program).unwrap();
        assert_eq!((machine.a, machine.b), (2, 0));
    }

    #[test]
    fn parses_every_instruction() {
        let program = Solver::parse("hlf a\ntpl b\ninc a\njmp -7\njie b, +4\njio a, -1").unwrap();
        assert_eq!(
            program,
            [
                Instruction::Half(Register::A),
                Instruction::Triple(Register::B),
                Instruction::Increment(Register::A),
                Instruction::Jump(-7),
                Instruction::JumpIfEven(Register::B, 4),
                Instruction::JumpIfOne(Register::A, -1),
            ]
        );
    }

    #[test]
    fn unknown_lines_are_skipped() {
        let program = Solver::parse("inc c\nnop\ninc b\n").unwrap();
        assert_eq!(program, [Instruction::Increment(Register::B)]);
    }

    #[test]
    fn jumping_backwards_out_of_the_program_halts() {
        let mut shared = Solver::parse("inc b\njmp -5\ninc b").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "1");
    }

    #[test]
    fn endless_loop_has_no_solution() {
        let mut shared = Solver::parse("jmp +0").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 1),
            Err(SolveError::NoSolution(_))
        ));
    }
}
