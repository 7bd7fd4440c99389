//! advent_of_code - run an Advent of Code 2015 puzzle against its test cases or an input file

mod cli;
mod config;
mod error;
mod executor;
mod output;

// Import aoc2015-solutions to link the solver plugins
use aoc2015_solutions as _;

use aoc2015_solver::{RegistryBuilder, SolverRegistry};
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use output::OutputFormatter;

fn main() {
    let config = Config::from_args(Args::parse());
    config::init_logging(config.log_level);

    if let Err(e) = run(&config) {
        eprintln!("ERROR: {e}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), CliError> {
    let executor = Executor::new(build_registry()?);
    let outcome = executor.execute(config)?;

    let stdout = std::io::stdout();
    OutputFormatter::new(config.timings).write_outcome(&mut stdout.lock(), &outcome)?;
    Ok(())
}

fn build_registry() -> Result<SolverRegistry, CliError> {
    Ok(RegistryBuilder::new().register_all_plugins()?.build())
}
