use aoc2015_solver::{AocParser, OutputTemplate, ParseError, PartSolver, Puzzle, SolveError};
use aoc2015_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::lenient_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 16, tags = ["matching"])]
pub struct Solver;

/// What the MFCSAM detected on the gift.
const READOUT: [(&str, u32); 10] = [
    ("children", 3),
    ("cats", 7),
    ("samoyeds", 2),
    ("pomeranians", 3),
    ("akitas", 0),
    ("vizslas", 0),
    ("goldfish", 5),
    ("trees", 3),
    ("cars", 2),
    ("perfumes", 1),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aunt<'a> {
    number: u32,
    things: Vec<(&'a str, u32)>,
}

impl<'a> Aunt<'a> {
    /// `Sue 12: cars: 9, goldfish: 5, vizslas: 8`
    fn parse(line: &'a str) -> Option<Self> {
        let (name, things) = line.trim().split_once(':')?;
        let number = name.strip_prefix("Sue ")?.trim().parse().ok()?;
        let things = things
            .split(',')
            .map(|thing| {
                let (compound, count) = thing.split_once(':')?;
                Some((compound.trim(), count.trim().parse().ok()?))
            })
            .collect::<Option<Vec<_>>>()?;
        Some(Self { number, things })
    }

    fn matches(&self, reading_fits: impl Fn(&str, u32, u32) -> bool) -> bool {
        self.things.iter().all(|&(compound, count)| {
            READOUT
                .iter()
                .find(|(known, _)| *known == compound)
                .is_some_and(|&(_, reading)| reading_fits(compound, count, reading))
        })
    }
}

fn exact(_: &str, count: u32, reading: u32) -> bool {
    count == reading
}

/// Cats and trees read low, pomeranians and goldfish read high.
fn ranged(compound: &str, count: u32, reading: u32) -> bool {
    match compound {
        "cats" | "trees" => count > reading,
        "pomeranians" | "goldfish" => count < reading,
        _ => count == reading,
    }
}

/// The one aunt consistent with the readout. Several candidates are as
/// unanswerable as none.
fn find_aunt(aunts: &[Aunt<'_>], reading_fits: fn(&str, u32, u32) -> bool) -> Result<String, SolveError> {
    let candidates: Vec<u32> = aunts
        .iter()
        .filter(|aunt| aunt.matches(reading_fits))
        .map(|aunt| aunt.number)
        .collect();
    match candidates[..] {
        [number] => Ok(number.to_string()),
        [] => Err(SolveError::NoSolution("no aunt matches the readout".to_string())),
        _ => Err(SolveError::NoSolution(format!(
            "{} aunts match the readout",
            candidates.len()
        ))),
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Aunt<'a>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(lenient_lines(input, Aunt::parse))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        find_aunt(shared, exact)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        find_aunt(shared, ranged)
    }
}

impl Puzzle for Solver {
    const TITLE: &'static str = "Aunt Sue";
    const OUTPUT: OutputTemplate = OutputTemplate::new(
        "The number of the Aunt Sue was thought to be {0}.\n\
         The number of the \"real\" Aunt Sue is {1}.",
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc2015_solver::Solver as _;

    const AUNTS: &str = "Sue 1: cars: 9, akitas: 3, goldfish: 0\n\
                         Sue 2: cats: 7, trees: 3, goldfish: 5\n\
                         Sue 3: cats: 8, trees: 4, pomeranians: 2\n\
                         Sue 4: children: 3, unicorns: 1";

    #[test]
    fn parses_an_aunt() {
        let aunt = Aunt::parse("Sue 12: cars: 9, goldfish: 5").unwrap();
        assert_eq!(aunt.number, 12);
        assert_eq!(aunt.things, [("cars", 9), ("goldfish", 5)]);
    }

    #[test]
    fn exact_and_ranged_readings_pick_different_aunts() {
        let mut shared = Solver::parse(AUNTS).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "2");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "3");
    }

    #[test]
    fn ambiguous_readout_has_no_solution() {
        let mut shared = Solver::parse("Sue 1: children: 3\nSue 2: cars: 2, perfumes: 1").unwrap();
        let Err(SolveError::NoSolution(reason)) = Solver::solve_part(&mut shared, 1) else {
            panic!("two matching aunts must not produce an answer");
        };
        assert_eq!(reason, "2 aunts match the readout");
    }

    #[test]
    fn unknown_compound_never_matches() {
        let mut shared = Solver::parse("Sue 4: children: 3, unicorns: 1").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 1),
            Err(SolveError::NoSolution(_))
        ));
    }
}
