use aoc2015_solver::Expected::Answer;
use aoc2015_solver::{AocParser, Fixture, OutputTemplate, ParseError, PartSolver, Puzzle, SolveError};
use aoc2015_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::lenient_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(day = 18, tags = ["grid", "simulation"])]
pub struct Solver;

const STEPS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lights {
    rows: usize,
    cols: usize,
    on: Vec<bool>,
}

impl Lights {
    fn lit_neighbors(&self, row: usize, col: usize) -> usize {
        let mut count = 0;
        for r in row.saturating_sub(1)..=(row + 1).min(self.rows - 1) {
            for c in col.saturating_sub(1)..=(col + 1).min(self.cols - 1) {
                if (r, c) != (row, col) && self.on[r * self.cols + c] {
                    count += 1;
                }
            }
        }
        count
    }

    fn step(&self) -> Self {
        let on = (0..self.rows * self.cols)
            .map(|i| {
                let lit = self.lit_neighbors(i / self.cols, i % self.cols);
                lit == 3 || (lit == 2 && self.on[i])
            })
            .collect();
        Self { on, ..*self }
    }

    fn force_corners_on(&mut self) {
        if self.on.is_empty() {
            return;
        }
        let last_row = (self.rows - 1) * self.cols;
        for i in [0, self.cols - 1, last_row, last_row + self.cols - 1] {
            self.on[i] = true;
        }
    }

    fn lit(&self) -> usize {
        self.on.iter().filter(|&&on| on).count()
    }
}

fn animate(lights: &Lights, steps: usize, corners_stuck: bool) -> usize {
    let mut lights = lights.clone();
    if corners_stuck {
        lights.force_corners_on();
    }
    for _ in 0..steps {
        lights = lights.step();
        if corners_stuck {
            lights.force_corners_on();
        }
    }
    lights.lit()
}

impl AocParser for Solver {
    type SharedData<'a> = Lights;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let rows = lenient_lines(input, |line| {
            let line = line.trim();
            (!line.is_empty() && line.bytes().all(|b| b == b'#' || b == b'.'))
                .then(|| line.bytes().map(|b| b == b'#').collect::<Vec<_>>())
        });
        let cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != cols) {
            return Err(ParseError::InvalidFormat("light rows differ in length".to_string()));
        }
        Ok(Lights {
            rows: rows.len(),
            cols,
            on: rows.concat(),
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(animate(shared, STEPS, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(animate(shared, STEPS, true).to_string())
    }
}

impl Puzzle for Solver {
    const TITLE: &'static str = "Like a GIF For Your Yard";
    const OUTPUT: OutputTemplate =
        OutputTemplate::new("The first grid had {0} lights lit.\nThe broken grid had {1} lights lit.");
    const FIXTURES: &'static [Fixture] = &[Fixture::new(
        ".#.#.#\n...##.\n#....#\n..#...\n#.#..#\n####..",
        &[Answer("4"), Answer("7")],
    )];
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = ".#.#.#\n...##.\n#....#\n..#...\n#.#..#\n####..";

    #[test]
    fn example_animation() {
        let lights = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(lights.lit(), 15);
        assert_eq!(animate(&lights, 4, false), 4);
        assert_eq!(animate(&lights, 5, true), 17);
    }

    #[test]
    fn ragged_grid_is_rejected() {
        assert!(Solver::parse("##\n#").is_err());
    }

    #[test]
    fn empty_grid_stays_dark() {
        let lights = Solver::parse("").unwrap();
        assert_eq!(animate(&lights, 3, true), 0);
    }
}
