//! Core domain types for word ladders
//!
//! This module contains the fundamental domain types with no I/O.
//! Everything here is pure and independently testable.

mod ladder;
mod puzzle;
mod word;

pub use ladder::{changed_positions, letter_distance};
pub use puzzle::Puzzle;
pub use word::{Word, WordError};
