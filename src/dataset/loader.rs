//! Dataset loading utilities
//!
//! Reads chain records from JSON files or from the embedded table.

use super::embedded::EmbeddedChain;
use crate::core::Puzzle;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// A raw chain record as supplied by the dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainRecord {
    pub start_word: String,
    pub end_word: String,
    /// Comma-separated ladder words
    pub solution: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_words: Option<usize>,
}

impl ChainRecord {
    /// Turn the record into a playable puzzle without validating it
    #[must_use]
    pub fn to_puzzle(&self) -> Puzzle {
        Puzzle::new(
            &self.start_word,
            &self.end_word,
            &self.solution,
            self.number_of_words,
        )
    }
}

impl From<&EmbeddedChain> for ChainRecord {
    fn from(chain: &EmbeddedChain) -> Self {
        Self {
            start_word: chain.start_word.to_string(),
            end_word: chain.end_word.to_string(),
            solution: chain.solution.to_string(),
            number_of_words: chain.number_of_words,
        }
    }
}

/// Errors raised while reading a dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("dataset contains no chains")]
    Empty,
}

/// Load chain records from a JSON file
///
/// The file must hold an array of objects with `start_word`, `end_word`,
/// `solution` and an optional `number_of_words`.
///
/// # Errors
///
/// Returns `DatasetError` if the file cannot be read or is not valid JSON.
///
/// # Examples
/// ```no_run
/// use chainmail::dataset::loader::load_from_file;
///
/// let records = load_from_file("data/word_chains.json").unwrap();
/// println!("Loaded {} chains", records.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<ChainRecord>, DatasetError> {
    let content = fs::read_to_string(path)?;
    parse_records(&content)
}

/// Parse chain records from JSON text
///
/// # Errors
///
/// Returns `DatasetError::Parse` if the text is not a JSON array of records.
pub fn parse_records(json: &str) -> Result<Vec<ChainRecord>, DatasetError> {
    Ok(serde_json::from_str(json)?)
}

/// Convert the embedded table to owned records
///
/// # Examples
/// ```
/// use chainmail::dataset::loader::records_from_embedded;
/// use chainmail::dataset::CHAINS;
///
/// let records = records_from_embedded(CHAINS);
/// assert_eq!(records.len(), CHAINS.len());
/// ```
#[must_use]
pub fn records_from_embedded(chains: &[EmbeddedChain]) -> Vec<ChainRecord> {
    chains.iter().map(ChainRecord::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_records_reads_all_fields() {
        let json = r#"[
            {"start_word": "cat", "end_word": "dog", "solution": "cat,cot,cog,dog", "number_of_words": 4}
        ]"#;
        let records = parse_records(json).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].start_word, "cat");
        assert_eq!(records[0].end_word, "dog");
        assert_eq!(records[0].solution, "cat,cot,cog,dog");
        assert_eq!(records[0].number_of_words, Some(4));
    }

    #[test]
    fn parse_records_number_of_words_optional() {
        let json = r#"[{"start_word": "pig", "end_word": "bat", "solution": "pig,big,bag,bat"}]"#;
        let records = parse_records(json).unwrap();

        assert_eq!(records[0].number_of_words, None);
        assert_eq!(records[0].to_puzzle().number_of_words(), 4);
    }

    #[test]
    fn parse_records_rejects_malformed_json() {
        assert!(matches!(
            parse_records(r#"[{"start_word": "cat"}]"#),
            Err(DatasetError::Parse(_))
        ));
        assert!(matches!(parse_records("not json"), Err(DatasetError::Parse(_))));
    }

    #[test]
    fn parse_records_empty_array() {
        assert!(parse_records("[]").unwrap().is_empty());
    }

    #[test]
    fn load_from_missing_file() {
        assert!(matches!(
            load_from_file("does/not/exist.json"),
            Err(DatasetError::Io(_))
        ));
    }

    #[test]
    fn embedded_records_convert() {
        let chain = EmbeddedChain {
            start_word: "cat",
            end_word: "dog",
            solution: "cat,cot,cog,dog",
            number_of_words: Some(4),
        };
        let records = records_from_embedded(&[chain]);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].to_puzzle().end_word(), "dog");
    }
}
