use aoc2015_solver::Expected::{Answer, NoSolution};
use aoc2015_solver::{AocParser, Fixture, OutputTemplate, ParseError, PartSolver, Puzzle, SolveError};
use aoc2015_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::combat::{Boss, first_striker_wins};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 21, tags = ["combat", "brute-force"])]
pub struct Solver;

const PLAYER_HIT_POINTS: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Item {
    cost: u32,
    damage: i32,
    armor: i32,
}

const fn item(cost: u32, damage: i32, armor: i32) -> Item {
    Item {
        cost,
        damage,
        armor,
    }
}

const WEAPONS: [Item; 5] = [item(8, 4, 0), item(10, 5, 0), item(25, 6, 0), item(40, 7, 0), item(74, 8, 0)];
const ARMOR: [Item; 5] = [item(13, 0, 1), item(31, 0, 2), item(53, 0, 3), item(75, 0, 4), item(102, 0, 5)];
const RINGS: [Item; 6] = [
    item(25, 1, 0),
    item(50, 2, 0),
    item(100, 3, 0),
    item(20, 0, 1),
    item(40, 0, 2),
    item(80, 0, 3),
];

/// Every legal loadout: one weapon, at most one armor, at most two different rings.
fn loadouts() -> impl Iterator<Item = Vec<Item>> {
    let armor = std::iter::once(None).chain(ARMOR.into_iter().map(Some));
    let rings = (0..=2).flat_map(|n| RINGS.into_iter().combinations(n));
    WEAPONS
        .into_iter()
        .cartesian_product(armor)
        .cartesian_product(rings.collect_vec())
        .map(|((weapon, armor), rings)| {
            std::iter::once(weapon).chain(armor).chain(rings).collect()
        })
}

/// Cost of each loadout and whether it beats `boss`.
fn outcomes(boss: &Boss) -> impl Iterator<Item = (u32, bool)> + '_ {
    loadouts().map(move |items| {
        let player = Boss::new(
            PLAYER_HIT_POINTS,
            items.iter().map(|i| i.damage).sum(),
            items.iter().map(|i| i.armor).sum(),
        );
        let cost = items.iter().map(|i| i.cost).sum();
        (cost, first_striker_wins(&player, boss))
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Boss;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Boss::parse(input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        outcomes(shared)
            .filter_map(|(cost, won)| won.then_some(cost))
            .min()
            .map(|cost| cost.to_string())
            .ok_or_else(|| SolveError::NoSolution("no equipment beats the boss".to_string()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        outcomes(shared)
            .filter_map(|(cost, won)| (!won).then_some(cost))
            .max()
            .map(|cost| cost.to_string())
            .ok_or_else(|| SolveError::NoSolution("every loadout beats the boss".to_string()))
    }
}

impl Puzzle for Solver {
    const TITLE: &'static str = "RPG Simulator 20XX";
    const OUTPUT: OutputTemplate = OutputTemplate::new(
        "The least amount of gold needed to win is {0}.\n\
         The greatest amount of gold needed to lose is {1}",
    );
    const FIXTURES: &'static [Fixture] = &[
        Fixture::new("Hit Points: 1\nDamage: 1000\nArmor: 1", &[Answer("8"), NoSolution]),
        Fixture::new("Hit Points: 1\nDamage: 1\nArmor: 1000", &[Answer("8"), NoSolution]),
        Fixture::new("Hit Points: 1000\nDamage: 1000\nArmor: 1000", &[NoSolution, Answer("356")]),
        Fixture::new("Hit Points: 200\nDamage: 0\nArmor: 3", &[Answer("10"), Answer("230")]),
        Fixture::new("Hit Points: 150\nDamage: 7\nArmor: 2", &[Answer("101"), Answer("189")]),
    ];
}
