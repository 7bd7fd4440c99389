use std::collections::HashMap;

use aoc2015_solver::Expected::Answer;
use aoc2015_solver::{AocParser, Fixture, OutputTemplate, ParseError, PartSolver, Puzzle, SolveError};
use aoc2015_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
use crate::utils::parse::lenient_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 7, tags = ["graph", "memoization"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operand<'a> {
    Wire(&'a str),
    Signal(u16),
}

impl<'a> Operand<'a> {
    fn parse(token: &'a str) -> Option<Self> {
        if let Ok(signal) = token.parse() {
            Some(Operand::Signal(signal))
        } else if !token.is_empty() && token.bytes().all(|b| b.is_ascii_lowercase()) {
            Some(Operand::Wire(token))
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gate<'a> {
    Assign(Operand<'a>),
    Not(Operand<'a>),
    And(Operand<'a>, Operand<'a>),
    Or(Operand<'a>, Operand<'a>),
    LShift(Operand<'a>, Operand<'a>),
    RShift(Operand<'a>, Operand<'a>),
}

impl<'a> Gate<'a> {
    fn operands(&self) -> Vec<Operand<'a>> {
        match *self {
            Gate::Assign(x) | Gate::Not(x) => vec![x],
            Gate::And(x, y) | Gate::Or(x, y) | Gate::LShift(x, y) | Gate::RShift(x, y) => {
                vec![x, y]
            }
        }
    }

    fn eval(&self, values: &[u16]) -> u16 {
        match (self, values) {
            (Gate::Assign(_), [x]) => *x,
            (Gate::Not(_), [x]) => !x,
            (Gate::And(..), [x, y]) => x & y,
            (Gate::Or(..), [x, y]) => x | y,
            (Gate::LShift(..), [x, y]) => x.checked_shl(u32::from(*y)).unwrap_or(0),
            (Gate::RShift(..), [x, y]) => x.checked_shr(u32::from(*y)).unwrap_or(0),
            _ => 0,
        }
    }
}

/// `<expr> -> <wire>`
fn parse_connection(line: &str) -> Option<(&str, Gate<'_>)> {
    let (expr, target) = line.split_once("->")?;
    let target = target.trim();
    let Operand::Wire(target) = Operand::parse(target)? else {
        return None;
    };

    let tokens: Vec<&str> = expr.split_whitespace().collect();
    let gate = match tokens[..] {
        [x] => Gate::Assign(Operand::parse(x)?),
        ["NOT", x] => Gate::Not(Operand::parse(x)?),
        [x, op, y] => {
            let (x, y) = (Operand::parse(x)?, Operand::parse(y)?);
            match op {
                "AND" => Gate::And(x, y),
                "OR" => Gate::Or(x, y),
                "LSHIFT" => Gate::LShift(x, y),
                "RSHIFT" => Gate::RShift(x, y),
                _ => return None,
            }
        }
        _ => return None,
    };
    Some((target, gate))
}

/// The wiring as a dependency graph over wire names.
struct Circuit<'g, 'a> {
    gates: &'g HashMap<&'a str, Gate<'a>>,
    /// Signal forced onto wire `b`, ignoring its own gate.
    b_override: Option<u16>,
}

impl<'a> DpProblem<&'a str, u16> for Circuit<'_, 'a> {
    fn deps(&self, wire: &&'a str) -> Option<Vec<&'a str>> {
        if *wire == "b" && self.b_override.is_some() {
            return Some(Vec::new());
        }
        let gate = self.gates.get(wire)?;
        Some(
            gate.operands()
                .into_iter()
                .filter_map(|operand| match operand {
                    Operand::Wire(name) => Some(name),
                    Operand::Signal(_) => None,
                })
                .collect(),
        )
    }

    fn compute(&self, wire: &&'a str, deps: Vec<u16>) -> u16 {
        if *wire == "b" {
            if let Some(signal) = self.b_override {
                return signal;
            }
        }
        let Some(gate) = self.gates.get(wire) else {
            return 0;
        };

        let mut resolved = deps.into_iter();
        let values: Vec<u16> = gate
            .operands()
            .into_iter()
            .map(|operand| match operand {
                Operand::Signal(signal) => signal,
                Operand::Wire(_) => resolved.next().unwrap_or(0),
            })
            .collect();
        gate.eval(&values)
    }
}

pub struct SharedData<'a> {
    gates: HashMap<&'a str, Gate<'a>>,
    signal_a: Option<u16>,
}

fn signal_on_a<'a>(
    gates: &HashMap<&'a str, Gate<'a>>,
    b_override: Option<u16>,
) -> Result<u16, SolveError> {
    let cache: DpCache<&str, u16, _, _> =
        DpCache::with_problem(HashMapBackend::new(), Circuit { gates, b_override });
    cache
        .get(&"a")
        .map_err(|e| SolveError::NoSolution(e.to_string()))
}

fn first_signal_on_a(shared: &mut SharedData<'_>) -> Result<u16, SolveError> {
    if let Some(signal) = shared.signal_a {
        return Ok(signal);
    }
    let signal = signal_on_a(&shared.gates, None)?;
    Ok(*shared.signal_a.insert(signal))
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        // a wire defined twice keeps its last definition
        let gates = lenient_lines(input, parse_connection).into_iter().collect();
        Ok(SharedData {
            gates,
            signal_a: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        first_signal_on_a(shared).map(|signal| signal.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let a = first_signal_on_a(shared)?;
        let b_override = shared.gates.contains_key("b").then_some(a);
        signal_on_a(&shared.gates, b_override).map(|signal| signal.to_string())
    }
}

impl Puzzle for Solver {
    const TITLE: &'static str = "Some Assembly Required";
    const OUTPUT: OutputTemplate = OutputTemplate::new(
        "Wire \"a\" initially had a signal of {0}, but after feeding it\n\
         back in to Wire \"b\", Wire \"a\" ultimately had a signal of {1}",
    );
    const FIXTURES: &'static [Fixture] = &[
        Fixture::new("123 -> a", &[Answer("123"), Answer("123")]),
        Fixture::new("123 -> a\n321 -> a", &[Answer("321"), Answer("321")]),
        Fixture::new("123 -> b\n456 -> c\nb AND c -> a", &[Answer("72"), Answer("72")]),
        Fixture::new("123 -> b\n456 -> c\nb OR c -> a", &[Answer("507"), Answer("507")]),
        Fixture::new("123 -> b\nNOT b -> a", &[Answer("65412"), Answer("123")]),
        Fixture::new("123 -> b\nb LSHIFT 2 -> a", &[Answer("492"), Answer("1968")]),
        Fixture::new("123 -> b\nb RSHIFT 2 -> a", &[Answer("30"), Answer("7")]),
    ];
}
