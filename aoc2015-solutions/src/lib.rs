//! Advent of Code 2015 puzzle solutions with automatic registration
//!
//! One module per day under [`year_2015`]. Each solution derives
//! `AocSolver` and `AutoRegisterSolver`, so linking this crate is enough for
//! `RegistryBuilder::register_all_plugins` to find all 25 days.

pub mod utils;
pub mod year_2015;
