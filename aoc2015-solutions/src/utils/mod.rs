//! Helpers shared between days

pub mod combat;
pub mod dp_cache;
pub mod parse;
