use aoc2015_solver::Expected::Answer;
use aoc2015_solver::{AocParser, Fixture, OutputTemplate, ParseError, PartSolver, Puzzle, SolveError};
use aoc2015_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 5, tags = ["strings"])]
pub struct Solver;

const FORBIDDEN: [&str; 4] = ["ab", "cd", "pq", "xy"];

fn nice_by_old_rules(word: &str) -> bool {
    let bytes = word.as_bytes();
    let vowels = bytes.iter().filter(|b| b"aeiou".contains(b)).count();
    let double = bytes.windows(2).any(|pair| pair[0] == pair[1]);
    vowels >= 3 && double && !FORBIDDEN.iter().any(|f| word.contains(f))
}

fn nice_by_new_rules(word: &str) -> bool {
    let bytes = word.as_bytes();
    let repeated_pair = (0..bytes.len().saturating_sub(3))
        .any(|i| bytes[i + 2..].windows(2).any(|pair| pair == &bytes[i..i + 2]));
    let sandwich = bytes.windows(3).any(|w| w[0] == w[2]);
    repeated_pair && sandwich
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(input.lines().map(str::trim).filter(|line| !line.is_empty()).collect())
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|w| nice_by_old_rules(w)).count().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|w| nice_by_new_rules(w)).count().to_string())
    }
}

impl Puzzle for Solver {
    const TITLE: &'static str = "Doesn't He Have Intern-Elves For This?";
    const OUTPUT: OutputTemplate = OutputTemplate::new(
        "The text file had {0} nice strings using the original rules\n\
         and it had {1} nice strings using the new rules.",
    );
    const FIXTURES: &'static [Fixture] = &[
        Fixture::new("ugknbfddgicrmopn", &[Answer("1"), Answer("0")]),
        Fixture::new("aaa", &[Answer("1"), Answer("0")]),
        Fixture::new("jchzalrnumimnmhp", &[Answer("0"), Answer("0")]),
        Fixture::new("haegwjzuvuyypxyu", &[Answer("0"), Answer("0")]),
        Fixture::new("dvszwmarrgswjxmb", &[Answer("0"), Answer("0")]),
        Fixture::new("xyxy", &[Answer("0"), Answer("1")]),
        Fixture::new("aabcdefgaa", &[Answer("0"), Answer("0")]),
        Fixture::new("qjhvhtzxzqqjkmpb", &[Answer("0"), Answer("1")]),
        Fixture::new("xxyxx", &[Answer("0"), Answer("1")]),
        Fixture::new("uurcxstgmygtbstg", &[Answer("0"), Answer("0")]),
        Fixture::new("ieodomkazucvgmuy", &[Answer("0"), Answer("0")]),
        Fixture::new("aaccacc", &[Answer("1"), Answer("1")]),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_pair_does_not_repeat() {
        assert!(!nice_by_new_rules("aaa"));
        assert!(nice_by_new_rules("aaaa"));
    }

    #[test]
    fn forbidden_pair_spoils_an_otherwise_nice_word() {
        assert!(nice_by_old_rules("aaeiouu"));
        assert!(!nice_by_old_rules("aaeiouuxy"));
    }
}
