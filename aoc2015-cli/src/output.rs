//! Output formatting for puzzle runs

use crate::executor::RunOutcome;
use aoc2015_solver::{FixtureReport, PuzzleInfo, Solution};
use chrono::TimeDelta;
use std::io::{self, Write};

/// Writes run outcomes as the plain text shown on stdout
pub struct OutputFormatter {
    timings: bool,
}

impl OutputFormatter {
    pub fn new(timings: bool) -> Self {
        Self { timings }
    }

    pub fn write_outcome(&self, out: &mut impl Write, outcome: &RunOutcome) -> io::Result<()> {
        match outcome {
            RunOutcome::Fixtures { info, reports } => write_fixtures(out, info, reports),
            RunOutcome::Solved { info, solution } => self.write_solution(out, info, solution),
        }
    }

    fn write_solution(&self, out: &mut impl Write, info: &PuzzleInfo, solution: &Solution) -> io::Result<()> {
        writeln!(out, "{}", info.heading())?;
        writeln!(out, "{}", solution.render(&info.output))?;

        if self.timings {
            writeln!(out)?;
            writeln!(out, "Parse time: {}", format_duration(solution.parse_duration))?;
            for (part, result) in (1..).zip(&solution.parts) {
                match result {
                    Ok(result) => {
                        writeln!(out, "Part {part} solve time: {}", format_duration(result.duration()))?
                    }
                    Err(e) => writeln!(out, "Part {part} did not finish: {e}")?,
                }
            }
            writeln!(
                out,
                "Total solve time: {}",
                format_duration(solution.total_solve_duration())
            )?;
        }
        Ok(())
    }
}

fn write_fixtures(out: &mut impl Write, info: &PuzzleInfo, reports: &[FixtureReport]) -> io::Result<()> {
    writeln!(out, "No puzzle input was provided")?;
    if reports.is_empty() {
        writeln!(out, "There are no test cases to run...")?;
        return Ok(());
    }

    writeln!(out, "Running test cases for {}", info.heading())?;
    for report in reports {
        if report.passed() {
            writeln!(out, "Test passed for input {}", report.input)?;
        } else {
            writeln!(out, "Test failed for input {}", report.input)?;
            writeln!(out, "Correct output:\n{}\n", report.expected)?;
            writeln!(out, "Test output:\n{}\n", report.actual)?;
        }
    }

    let passed = reports.iter().filter(|r| r.passed()).count();
    writeln!(out, "{passed} of {} test cases passed", reports.len())
}

/// Format a TimeDelta for display
pub fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}
