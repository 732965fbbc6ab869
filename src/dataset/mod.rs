//! Word chain dataset
//!
//! Provides the embedded chain table and the non-empty, ordered puzzle list
//! that daily and shuffle selection index into.

pub mod check;
mod embedded;
pub mod loader;

pub use embedded::{CHAINS, CHAINS_COUNT, EmbeddedChain};
pub use loader::{ChainRecord, DatasetError};

use crate::core::Puzzle;
use std::num::NonZeroUsize;
use std::path::Path;

/// An ordered, non-empty list of puzzles
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<ChainRecord>,
    puzzles: Vec<Puzzle>,
}

impl Dataset {
    /// Build a dataset from raw records
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::Empty` if there are no records.
    pub fn from_records(records: Vec<ChainRecord>) -> Result<Self, DatasetError> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }
        let puzzles = records.iter().map(ChainRecord::to_puzzle).collect();
        Ok(Self { records, puzzles })
    }

    /// The dataset compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::Empty` if the build produced no chains.
    pub fn embedded() -> Result<Self, DatasetError> {
        Self::from_records(loader::records_from_embedded(CHAINS))
    }

    /// Load a dataset from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `DatasetError` if the file cannot be read, parsed, or is empty.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        Self::from_records(loader::load_from_file(path)?)
    }

    /// Number of puzzles, never zero
    #[must_use]
    pub fn len(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.puzzles.len()).unwrap_or(NonZeroUsize::MIN)
    }

    /// Always false; construction rejects empty datasets
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    /// Puzzle at `index`, if in range
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Puzzle> {
        self.puzzles.get(index)
    }

    /// All puzzles in dataset order
    #[must_use]
    pub fn puzzles(&self) -> &[Puzzle] {
        &self.puzzles
    }

    /// The raw records the puzzles were built from
    #[must_use]
    pub fn records(&self) -> &[ChainRecord] {
        &self.records
    }
}
