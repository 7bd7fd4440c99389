use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use aoc2015_solver::Expected::Answer;
use aoc2015_solver::{AocParser, Fixture, OutputTemplate, ParseError, PartSolver, Puzzle, SolveError};
use aoc2015_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::debug;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 19, tags = ["strings", "search"])]
pub struct Solver;

const ELECTRON: &str = "e";

type Molecule<'a> = Vec<&'a str>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule<'a> {
    from: Molecule<'a>,
    to: Molecule<'a>,
}

#[derive(Debug)]
pub struct SharedData<'a> {
    rules: Vec<Rule<'a>>,
    molecule: Molecule<'a>,
}

/// Split a formula into elements: an uppercase letter plus any lowercase
/// letters after it. A leading lowercase run (the electron) is its own element.
fn elements(formula: &str) -> Molecule<'_> {
    let mut starts: Vec<usize> = formula
        .char_indices()
        .filter(|(_, c)| c.is_ascii_uppercase())
        .map(|(i, _)| i)
        .collect();
    if starts.first() != Some(&0) && !formula.is_empty() {
        starts.insert(0, 0);
    }
    starts
        .iter()
        .enumerate()
        .map(|(n, &start)| &formula[start..starts.get(n + 1).copied().unwrap_or(formula.len())])
        .collect()
}

/// Every molecule made by swapping one occurrence of `pattern` for `replacement`.
fn substitutions<'m, 'a>(
    molecule: &'m [&'a str],
    pattern: &'m [&'a str],
    replacement: &'m [&'a str],
) -> impl Iterator<Item = Molecule<'a>> + 'm {
    let width = pattern.len();
    (0..=molecule.len().saturating_sub(width))
        .filter(move |&i| width > 0 && molecule.len() >= width && molecule[i..i + width] == *pattern)
        .map(move |i| {
            let mut next = Vec::with_capacity(molecule.len() - width + replacement.len());
            next.extend_from_slice(&molecule[..i]);
            next.extend_from_slice(replacement);
            next.extend_from_slice(&molecule[i + width..]);
            next
        })
}

fn calibrate(shared: &SharedData<'_>) -> usize {
    shared
        .rules
        .iter()
        .flat_map(|rule| substitutions(&shared.molecule, &rule.from, &rule.to))
        .collect::<HashSet<_>>()
        .len()
}

/// Fewest replacements that build the molecule from a single electron.
///
/// Searches backwards from the medicine, always expanding the shortest
/// molecule first (fewest steps on ties). Electron rules only apply when
/// they produce the whole molecule. Rules that would shrink a molecule going
/// forward are ignored so the backwards search always terminates.
fn synthesize(shared: &SharedData<'_>) -> Option<usize> {
    let goal = vec![ELECTRON];
    let mut frontier = BinaryHeap::from([Reverse((shared.molecule.len(), 0usize, shared.molecule.clone()))]);
    let mut seen = HashSet::new();

    while let Some(Reverse((_, steps, molecule))) = frontier.pop() {
        if molecule == goal {
            debug!(steps, explored = seen.len(), "molecule synthesized");
            return Some(steps);
        }
        if !seen.insert(molecule.clone()) {
            continue;
        }

        for rule in &shared.rules {
            if rule.to.len() < rule.from.len() {
                continue;
            }
            if rule.from == goal {
                if molecule == rule.to {
                    frontier.push(Reverse((1, steps + 1, goal.clone())));
                }
                continue;
            }
            for previous in substitutions(&molecule, &rule.to, &rule.from) {
                if !seen.contains(&previous) {
                    frontier.push(Reverse((previous.len(), steps + 1, previous)));
                }
            }
        }
    }

    debug!(explored = seen.len(), "molecule cannot be synthesized");
    None
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut rules = Vec::new();
        let mut molecule = None;

        for line in input.lines().map(str::trim).filter(|line| !line.is_empty()) {
            match line.split_once("=>") {
                Some((from, to)) => rules.push(Rule {
                    from: elements(from.trim()),
                    to: elements(to.trim()),
                }),
                None => molecule = Some(elements(line)),
            }
        }

        let molecule = molecule
            .ok_or_else(|| ParseError::MissingData("no medicine molecule".to_string()))?;
        Ok(SharedData { rules, molecule })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(calibrate(shared).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        synthesize(shared)
            .map(|steps| steps.to_string())
            .ok_or_else(|| SolveError::NoSolution("molecule cannot be built from e".to_string()))
    }
}

impl Puzzle for Solver {
    const TITLE: &'static str = "Medicine for Rudolph";
    const OUTPUT: OutputTemplate = OutputTemplate::new(
        "There are {0} unique substitutions for the calibration molecule.\n\
         The medicine molecule takes at least {1} steps to synthesize.",
    );
    const FIXTURES: &'static [Fixture] = &[
        Fixture::new(
            "e => H\ne => O\nH => HO\nH => OH\nO => HH\n\nHOH",
            &[Answer("4"), Answer("3")],
        ),
        Fixture::new(
            "e => H\ne => O\nH => HO\nH => OH\nO => HH\n\nHOHOHO",
            &[Answer("7"), Answer("6")],
        ),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc2015_solver::Solver as _;

    #[test]
    fn splits_formula_into_elements() {
        assert_eq!(elements("CRnCaSiRnB"), ["C", "Rn", "Ca", "Si", "Rn", "B"]);
        assert_eq!(elements("e"), ["e"]);
        assert!(elements("").is_empty());
    }

    #[test]
    fn replacement_does_not_split_an_element() {
        // "H" must not match the start of "He"
        let shared = Solver::parse("H => O\n\nHeH").unwrap();
        assert_eq!(calibrate(&shared), 1);
    }

    #[test]
    fn electron_rule_needs_the_whole_molecule() {
        let mut shared = Solver::parse("e => HH\nH => OO\n\nHHO").unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 2),
            Err(SolveError::NoSolution(_))
        ));

        let mut shared = Solver::parse("e => HH\nH => OO\n\nOOOO").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "3");
    }

    #[test]
    fn missing_molecule_is_a_parse_error() {
        assert!(matches!(Solver::parse("H => HO"), Err(ParseError::MissingData(_))));
    }
}
