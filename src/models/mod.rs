//! Core data models for player comparison.

mod comparison;
mod player;
mod stat_key;

pub use comparison::*;
pub use player::*;
pub use stat_key::*;

#[cfg(test)]
pub(crate) use player::fixtures;
