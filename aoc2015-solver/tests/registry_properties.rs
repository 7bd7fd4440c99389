//! Tests for day registration, lookup, solving and fixture reports
//!
//! **Feature: day-registry**

use aoc2015_solver::{
    AocParser, AocSolver, DynSolver, Expected, Fixture, OutputTemplate, ParseError, PartSolver, Puzzle,
    PuzzleInfo, RegistrationError, RegistryBuilder, SolveError, SolverError, SolverInstance,
    SolverRegistry, register_solver,
};
use proptest::prelude::*;

/// Counts `inc b` instructions; part 2 has no solution for an empty program.
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct Registers;

impl AocParser for Registers {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(|line| match line {
                "inc a" | "inc b" => Ok(line),
                _ => Err(ParseError::InvalidFormat(line.to_string())),
            })
            .collect()
    }
}

fn run(program: &[&str]) -> usize {
    program.iter().filter(|op| **op == "inc b").count()
}

fn factory<'a>(input: &'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> {
    Ok(Box::new(SolverInstance::<Registers>::new(1, input)?))
}

impl PartSolver<1> for Registers {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(run(shared).to_string())
    }
}

impl PartSolver<2> for Registers {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.is_empty() {
            return Err(SolveError::NoSolution("empty program".into()));
        }
        Ok(run(shared).to_string())
    }
}

impl Puzzle for Registers {
    const TITLE: &'static str = "Registers";
    const OUTPUT: OutputTemplate = OutputTemplate::new("b = {0}\nb from a = 1: {1}");
    const FIXTURES: &'static [Fixture] = &[
        Fixture::new("inc a", &[Expected::Answer("0"), Expected::Answer("0")]),
        Fixture::new("inc b", &[Expected::Answer("1"), Expected::Answer("1")]),
        Fixture::new("inc b", &[Expected::Answer("7"), Expected::Answer("1")]),
        Fixture::new("", &[Expected::Answer("0"), Expected::NoSolution]),
        Fixture::new("dec c", &[Expected::Answer("0"), Expected::Answer("0")]),
    ];
}

fn registry() -> SolverRegistry {
    let mut builder = RegistryBuilder::new();
    register_solver!(builder, Registers, 23);
    builder.build()
}

#[test]
fn solve_renders_every_part() {
    let solution = registry().solve(23, "inc b\ninc a\ninc b").unwrap();
    assert_eq!(solution.day, 23);
    assert_eq!(solution.answers(), ["2", "2"]);
    assert_eq!(solution.render(&Registers::OUTPUT), "b = 2\nb from a = 1: 2");
}

#[test]
fn no_solution_renders_as_none() {
    let solution = registry().solve(23, "").unwrap();
    assert!(matches!(solution.parts[1], Err(SolveError::NoSolution(_))));
    assert_eq!(solution.answers(), ["0", "none"]);
}

#[test]
fn fixtures_report_without_aborting() {
    let reports = registry().run_fixtures(23).unwrap();
    let passed: Vec<bool> = reports.iter().map(|r| r.passed()).collect();
    assert_eq!(passed, [true, true, false, true, false]);

    assert_eq!(reports[2].expected, "b = 7\nb from a = 1: 1");
    assert_eq!(reports[2].actual, "b = 1\nb from a = 1: 1");
    assert!(reports[4].actual.contains("dec c"));
}

#[test]
fn unregistered_and_invalid_days() {
    let registry = registry();
    assert!(matches!(registry.info(22), Err(SolverError::NotFound(22))));
    assert!(matches!(registry.solve(0, ""), Err(SolverError::InvalidDay(0))));
    assert!(matches!(registry.run_fixtures(26), Err(SolverError::InvalidDay(26))));
}

#[test]
fn parse_failure_propagates_from_solve() {
    assert!(matches!(
        registry().solve(23, "jmp +1"),
        Err(SolverError::ParseError(ParseError::InvalidFormat(_)))
    ));
}

#[test]
fn duplicate_day_is_rejected() {
    let builder = RegistryBuilder::new()
        .register(PuzzleInfo::of::<Registers>(1), factory)
        .unwrap();
    let err = builder
        .register(PuzzleInfo::of::<Registers>(1), factory)
        .err()
        .unwrap();
    assert!(matches!(err, RegistrationError::DuplicateSolver(1)));
}

#[test]
fn out_of_calendar_day_is_rejected() {
    let result = RegistryBuilder::new().register(PuzzleInfo::of::<Registers>(26), factory);
    assert!(matches!(result.err(), Some(RegistrationError::InvalidDay(26))));
}

#[test]
fn info_lists_registered_days_in_order() {
    let mut builder = RegistryBuilder::new();
    register_solver!(builder, Registers, 12);
    register_solver!(builder, Registers, 3);
    let registry = builder.build();

    let days: Vec<u8> = registry.iter_info().map(|info| info.day).collect();
    assert_eq!(days, [3, 12]);
    assert_eq!(registry.info(3).unwrap().heading(), "Advent of Code 2015 Day 3: Registers");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// **Feature: day-registry, Property 1: Idempotent solving**
    /// *For any* program, solving it twice through the registry gives identical answers.
    #[test]
    fn prop_solving_twice_is_identical(ops in prop::collection::vec(prop_oneof![Just("inc a"), Just("inc b")], 0..20)) {
        let input = ops.join("\n");
        let registry = registry();
        let first = registry.solve(23, &input).unwrap().answers();
        let second = registry.solve(23, &input).unwrap().answers();
        prop_assert_eq!(first, second);
    }
}
