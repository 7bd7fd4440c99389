use aoc2015_solver::Expected::{Answer, NoSolution};
use aoc2015_solver::{AocParser, Fixture, OutputTemplate, ParseError, PartSolver, Puzzle, SolveError};
use aoc2015_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::combat::{Boss, Difficulty, Wizard, least_mana_to_win};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 22, tags = ["combat", "search"])]
pub struct Solver;

const WIZARD: Wizard = Wizard::new(50, 500);

fn least_mana(boss: Boss, difficulty: Difficulty) -> Result<String, SolveError> {
    least_mana_to_win(WIZARD, boss, difficulty)
        .map(|mana| mana.to_string())
        .ok_or_else(|| SolveError::NoSolution(format!("no spell sequence wins on {difficulty:?}")))
}

impl AocParser for Solver {
    type SharedData<'a> = Boss;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        // spells ignore armor, and so does the boss here
        let boss = Boss::parse(input)?;
        Ok(Boss::new(boss.hit_points, boss.damage, 0))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        least_mana(*shared, Difficulty::Normal)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        least_mana(*shared, Difficulty::Hard)
    }
}

impl Puzzle for Solver {
    const TITLE: &'static str = "Wizard Simulator 20XX";
    const OUTPUT: OutputTemplate = OutputTemplate::new(
        "The least amount of mana needed to win normally is {0}.\n\
         The least amount of mana needed to win on hard mode is {1}",
    );
    const FIXTURES: &'static [Fixture] = &[
        Fixture::new("Hit Points: 1\nDamage: 100", &[Answer("53"), Answer("53")]),
        Fixture::new("Hit Points: 5\nDamage: 49", &[Answer("106"), Answer("126")]),
        Fixture::new("Hit Points: 50\nDamage: 1", &[Answer("787"), Answer("787")]),
        Fixture::new("Hit Points: 50\nDamage: 8", &[Answer("787"), Answer("900")]),
        Fixture::new("Hit Points: 1\nDamage: 1000", &[Answer("53"), Answer("53")]),
        Fixture::new(
            "Hit Points: 1000\nDamage: 1000\nArmor: 1000",
            &[NoSolution, NoSolution],
        ),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc2015_solver::Solver as _;

    #[test]
    fn boss_armor_is_ignored() {
        let boss = Solver::parse("Hit Points: 13\nDamage: 8\nArmor: 9").unwrap();
        assert_eq!(boss, Boss::new(13, 8, 0));
    }

    #[test]
    fn missing_damage_is_a_parse_error() {
        assert!(matches!(Solver::parse("Hit Points: 13"), Err(ParseError::MissingData(_))));
    }

    #[test]
    fn unwinnable_fight_renders_none() {
        let mut shared = Boss::new(1000, 1000, 0);
        assert!(matches!(
            Solver::solve_part(&mut shared, 2),
            Err(SolveError::NoSolution(_))
        ));
    }
}
