use aoc2015_solver::Expected::Answer;
use aoc2015_solver::{AocParser, Fixture, OutputTemplate, ParseError, PartSolver, Puzzle, SolveError};
use aoc2015_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::trace;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 11, tags = ["strings"])]
pub struct Solver;

const CONFUSING: [u8; 3] = [b'i', b'o', b'l'];

pub struct SharedData {
    current: Vec<u8>,
    first: Option<Vec<u8>>,
}

fn has_straight(password: &[u8]) -> bool {
    password.windows(3).any(|w| w[0] + 1 == w[1] && w[1] + 1 == w[2])
}

fn has_two_pairs(password: &[u8]) -> bool {
    let mut pairs = password.windows(2).filter(|w| w[0] == w[1]).map(|w| w[0]);
    pairs.next().is_some_and(|first| pairs.any(|other| other != first))
}

fn is_valid(password: &[u8]) -> bool {
    has_straight(password) && !password.iter().any(|c| CONFUSING.contains(c)) && has_two_pairs(password)
}

/// Replace the first confusing letter with its successor and reset the tail,
/// jumping over every candidate that would still contain it.
fn skip_confusing(password: &mut [u8]) {
    if let Some(i) = password.iter().position(|c| CONFUSING.contains(c)) {
        password[i] += 1;
        password[i + 1..].fill(b'a');
    }
}

/// Next password in `a..z` order. `None` once every letter is `z`.
fn increment(password: &mut [u8]) -> Option<()> {
    for c in password.iter_mut().rev() {
        if *c == b'z' {
            *c = b'a';
        } else {
            *c += 1;
            if CONFUSING.contains(c) {
                *c += 1;
            }
            return Some(());
        }
    }
    None
}

fn as_text(password: &[u8]) -> String {
    String::from_utf8_lossy(password).into_owned()
}

/// Advance `password` in place to the next one satisfying every rule.
fn next_password(password: &mut [u8]) -> Result<(), SolveError> {
    loop {
        increment(password)
            .ok_or_else(|| SolveError::NoSolution("password space exhausted".to_string()))?;
        skip_confusing(password);
        if is_valid(password) {
            trace!(password = %as_text(password), "found password");
            return Ok(());
        }
    }
}

fn first_password(shared: &mut SharedData) -> Result<Vec<u8>, SolveError> {
    if let Some(first) = &shared.first {
        return Ok(first.clone());
    }
    next_password(&mut shared.current)?;
    Ok(shared.first.insert(shared.current.clone()).clone())
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let password = input.trim();
        if password.is_empty() || !password.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(ParseError::InvalidFormat(format!(
                "{password:?} is not a lowercase password"
            )));
        }
        Ok(SharedData {
            current: password.as_bytes().to_vec(),
            first: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        first_password(shared).map(|password| as_text(&password))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut password = first_password(shared)?;
        next_password(&mut password)?;
        Ok(as_text(&password))
    }
}

impl Puzzle for Solver {
    const TITLE: &'static str = "Corporate Policy";
    const OUTPUT: OutputTemplate = OutputTemplate::new(
        "Santa's next password should be \"{0}\"\n\
         Santa's next password after that should be \"{1}\"",
    );
    const FIXTURES: &'static [Fixture] = &[
        Fixture::new("hijklmmn", &[Answer("hjaaabcc"), Answer("hjaabbcd")]),
        Fixture::new("abbceffg", &[Answer("abbcefgg"), Answer("abbcffgh")]),
        Fixture::new("abbcegjk", &[Answer("abbcffgh"), Answer("abbcfghh")]),
        Fixture::new("abcdefgh", &[Answer("abcdffaa"), Answer("abcdffbb")]),
        Fixture::new("ghijklmn", &[Answer("ghjaabcc"), Answer("ghjbbcdd")]),
    ];
}
