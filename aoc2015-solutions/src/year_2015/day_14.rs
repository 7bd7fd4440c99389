use aoc2015_solver::Expected::Answer;
use aoc2015_solver::{AocParser, Fixture, OutputTemplate, ParseError, PartSolver, Puzzle, SolveError};
use aoc2015_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::{integers, lenient_lines};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 14, tags = ["simulation"])]
pub struct Solver;

const RACE_SECONDS: u32 = 2503;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reindeer {
    speed: u32,
    stamina: u32,
    rest: u32,
}

impl Reindeer {
    /// `Comet can fly 14 km/s for 10 seconds, but then must rest for 127 seconds.`
    fn parse(line: &str) -> Option<Self> {
        match integers::<u32>(line)[..] {
            [speed, stamina, rest] if stamina > 0 => Some(Self {
                speed,
                stamina,
                rest,
            }),
            _ => None,
        }
    }

    /// Fits in `u64` for any `u32` speed and time.
    fn distance_after(&self, seconds: u32) -> u64 {
        let (seconds, stamina) = (u64::from(seconds), u64::from(self.stamina));
        let cycle = stamina + u64::from(self.rest);
        let flying = seconds / cycle * stamina + (seconds % cycle).min(stamina);
        flying * u64::from(self.speed)
    }
}

fn farthest(herd: &[Reindeer], seconds: u32) -> u64 {
    herd.iter().map(|r| r.distance_after(seconds)).max().unwrap_or(0)
}

/// Each second every reindeer in the lead scores a point.
fn most_points(herd: &[Reindeer], seconds: u32) -> u32 {
    let mut points = vec![0; herd.len()];
    for second in 1..=seconds {
        let lead = farthest(herd, second);
        for (score, reindeer) in points.iter_mut().zip(herd) {
            if reindeer.distance_after(second) == lead {
                *score += 1;
            }
        }
    }
    points.into_iter().max().unwrap_or(0)
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Reindeer>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(lenient_lines(input, Reindeer::parse))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(farthest(shared, RACE_SECONDS).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(most_points(shared, RACE_SECONDS).to_string())
    }
}

impl Puzzle for Solver {
    const TITLE: &'static str = "Reindeer Olympics";
    const OUTPUT: OutputTemplate = OutputTemplate::new(
        "The fastest reindeer travelled {0} km after 2503 seconds.\n\
         The winning reindeer had {1} points after 2503 seconds.",
    );
    const FIXTURES: &'static [Fixture] = &[Fixture::new(
        "Comet can fly 14 km/s for 10 seconds, but then must rest for 127 seconds.\n\
         Dancer can fly 16 km/s for 11 seconds, but then must rest for 162 seconds.",
        &[Answer("2660"), Answer("1564")],
    )];
}
