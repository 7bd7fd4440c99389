//! **Feature: built-in fixtures**
//!
//! Every registered day must pass its own fixtures through the registry,
//! exactly as the command line runs them.

use aoc2015_solutions as _;
use aoc2015_solver::{DAYS, RegistryBuilder, SolverRegistry};
use proptest::prelude::*;

fn registry() -> SolverRegistry {
    RegistryBuilder::new()
        .register_all_plugins()
        .expect("plugins register without conflicts")
        .build()
}

fn assert_fixtures_pass(registry: &SolverRegistry, day: u8) {
    let reports = registry.run_fixtures(day).unwrap();
    for report in reports {
        assert!(
            report.passed(),
            "day {day} fixture {:?}\nexpected:\n{}\nactual:\n{}",
            report.input,
            report.expected,
            report.actual
        );
    }
}

#[test]
fn every_day_is_registered() {
    let registry = registry();
    assert_eq!(registry.len(), DAYS);
    let days: Vec<u8> = registry.iter_info().map(|info| info.day).collect();
    assert_eq!(days, (1..=25).collect::<Vec<u8>>());
}

#[test]
fn only_day_16_has_no_fixtures() {
    let registry = registry();
    let without: Vec<u8> = registry
        .iter_info()
        .filter(|info| info.fixtures.is_empty())
        .map(|info| info.day)
        .collect();
    assert_eq!(without, [16]);
}

#[test]
fn day_25_has_a_single_part() {
    let registry = registry();
    assert_eq!(registry.info(25).unwrap().parts, 1);
    assert!(registry.iter_info().filter(|info| info.day != 25).all(|info| info.parts == 2));
}

#[test]
fn fixtures_pass() {
    let registry = registry();
    for day in (1..=25).filter(|&day| day != 4) {
        assert_fixtures_pass(&registry, day);
    }
}

#[test]
#[ignore = "slow in debug builds"]
fn hash_mining_fixtures_pass() {
    assert_fixtures_pass(&registry(), 4);
}

#[test]
fn headings_name_the_year_and_title() {
    let registry = registry();
    assert_eq!(
        registry.info(1).unwrap().heading(),
        "Advent of Code 2015 Day 1: Not Quite Lisp"
    );
    assert_eq!(
        registry.info(22).unwrap().heading(),
        "Advent of Code 2015 Day 22: Wizard Simulator 20XX"
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// **Feature: built-in fixtures, Property 1: Re-entrancy**
    /// *For any* pair of inputs, solving one never changes the answers for
    /// the other.
    #[test]
    fn prop_solving_is_independent_of_previous_input(
        first in "[()]{0,40}",
        second in "[()]{0,40}",
    ) {
        let registry = registry();
        let before = registry.solve(1, &second).unwrap().answers();
        registry.solve(1, &first).unwrap();
        prop_assert_eq!(registry.solve(1, &second).unwrap().answers(), before);
    }

    /// **Feature: built-in fixtures, Property 2: Rendered no-solution**
    /// *For any* divisor-breaking package list, Day 24 renders `none`.
    #[test]
    fn prop_unbalanced_packages_render_none(weights in prop::collection::vec(1u64..50, 1..6)) {
        let total: u64 = weights.iter().sum();
        prop_assume!(total % 3 != 0 && total % 4 != 0);
        let input = weights.iter().map(u64::to_string).collect::<Vec<_>>().join("\n");
        let solution = registry().solve(24, &input).unwrap();
        prop_assert_eq!(solution.answers(), ["none", "none"]);
    }
}
