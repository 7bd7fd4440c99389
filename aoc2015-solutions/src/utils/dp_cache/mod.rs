//! Memoized evaluation over a dependency graph
//!
//! A [`DpProblem`] names the indices each index depends on and combines
//! their resolved values. [`DpCache`] resolves dependencies on demand,
//! computes every index at most once, and reports indices the problem does
//! not define and dependency cycles as [`DpError`]s.
//!
//! # Example
//!
//! ```rust
//! use aoc2015_solutions::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
//!
//! // Signals on wires: "x" = 6, "y" = x * 7
//! struct Wires;
//!
//! impl DpProblem<&'static str, u16> for Wires {
//!     fn deps(&self, wire: &&'static str) -> Option<Vec<&'static str>> {
//!         match *wire {
//!             "x" => Some(vec![]),
//!             "y" => Some(vec!["x"]),
//!             _ => None,
//!         }
//!     }
//!
//!     fn compute(&self, wire: &&'static str, deps: Vec<u16>) -> u16 {
//!         if *wire == "x" { 6 } else { deps[0] * 7 }
//!     }
//! }
//!
//! let cache: DpCache<&str, u16, _, _> = DpCache::with_problem(HashMapBackend::new(), Wires);
//! assert_eq!(cache.get(&"y").unwrap(), 42);
//! assert!(cache.get(&"z").is_err());
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, HashMapBackend};
pub use cache::{DpCache, DpError};
pub use problem::DpProblem;

#[cfg(test)]
mod tests;
