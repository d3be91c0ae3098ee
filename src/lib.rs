//! Enumerating every combination of values drawn from a map of named axes.
//!
//! Given entries such as `x: [0, 1], y: [2, 3]`, a [`ProductIterator`] walks
//! `{x: 0, y: 2}`, `{x: 1, y: 2}`, `{x: 0, y: 3}` and `{x: 1, y: 3}` lazily.
//! Entries whose value is not a non-empty sequence are left out of every
//! combination.

pub mod axis;
pub mod combination;
pub mod config;
pub mod cursor;
pub mod output;
pub mod permutations;
pub mod runner;
pub mod utils;

pub use axis::AsAxis;
pub use combination::Combination;
pub use permutations::{ProductIterator, permutations, permutations_of_value};

