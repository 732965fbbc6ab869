//! Dataset integrity checks
//!
//! Offline report over chain records. Gameplay never runs these; they exist so
//! a dataset can be vetted before it ships.

use super::ChainRecord;
use crate::core::{Word, WordError, letter_distance};
use indicatif::ProgressBar;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::fmt;

/// A single problem found in a chain record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    EmptySolution,
    InvalidWord { word: String, reason: WordError },
    UnequalLength { word: String, expected: usize },
    NotSingleStep { from: String, to: String },
    StartNotFirst,
    EndNotLast,
    RepeatedWord(String),
    WordCountMismatch { declared: usize, actual: usize },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySolution => write!(f, "solution is empty"),
            Self::InvalidWord { word, reason } => write!(f, "'{word}': {reason}"),
            Self::UnequalLength { word, expected } => write!(
                f,
                "'{word}' has {} letters, expected {expected}",
                word.chars().count()
            ),
            Self::NotSingleStep { from, to } => {
                write!(f, "'{from}' -> '{to}' is not a single-letter change")
            }
            Self::StartNotFirst => write!(f, "start word is not the first solution word"),
            Self::EndNotLast => write!(f, "end word is not the last solution word"),
            Self::RepeatedWord(word) => write!(f, "'{word}' appears more than once"),
            Self::WordCountMismatch { declared, actual } => write!(
                f,
                "number_of_words is {declared} but the solution has {actual} words"
            ),
        }
    }
}

/// Problems found in one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordReport {
    pub index: usize,
    pub start_word: String,
    pub end_word: String,
    pub issues: Vec<Issue>,
}

/// Result of checking a whole dataset
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub total_records: usize,
    /// Only records with at least one issue, in dataset order
    pub failures: Vec<RecordReport>,
}

impl CheckReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.failures.iter().map(|r| r.issues.len()).sum()
    }
}

/// Check every record in parallel, advancing `progress` once per record
pub fn check_records(records: &[ChainRecord], progress: &ProgressBar) -> CheckReport {
    let mut failures: Vec<RecordReport> = records
        .par_iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let issues = check_record(record);
            progress.inc(1);
            (!issues.is_empty()).then(|| RecordReport {
                index,
                start_word: record.start_word.clone(),
                end_word: record.end_word.clone(),
                issues,
            })
        })
        .collect();
    failures.sort_by_key(|r| r.index);

    CheckReport {
        total_records: records.len(),
        failures,
    }
}

/// All problems with a single record
#[must_use]
pub fn check_record(record: &ChainRecord) -> Vec<Issue> {
    let puzzle = record.to_puzzle();
    let solution = puzzle.solution();
    let mut issues = Vec::new();

    if solution.is_empty() {
        issues.push(Issue::EmptySolution);
        return issues;
    }

    let expected = puzzle.word_length();
    let mut seen = FxHashSet::default();
    for word in solution {
        let letters = match Word::new(word) {
            Ok(valid) => valid.len(),
            Err(reason) => {
                issues.push(Issue::InvalidWord {
                    word: word.clone(),
                    reason,
                });
                word.chars().count()
            }
        };
        if letters != expected {
            issues.push(Issue::UnequalLength {
                word: word.clone(),
                expected,
            });
        }
        if !seen.insert(word.as_str()) {
            issues.push(Issue::RepeatedWord(word.clone()));
        }
    }

    for pair in solution.windows(2) {
        // Length mismatches are already reported above
        if let Some(distance) = letter_distance(&pair[0], &pair[1])
            && distance != 1
        {
            issues.push(Issue::NotSingleStep {
                from: pair[0].clone(),
                to: pair[1].clone(),
            });
        }
    }

    if !solution[0].eq_ignore_ascii_case(puzzle.start_word()) {
        issues.push(Issue::StartNotFirst);
    }
    if !solution[solution.len() - 1].eq_ignore_ascii_case(puzzle.end_word()) {
        issues.push(Issue::EndNotLast);
    }

    if let Some(declared) = record.number_of_words
        && declared != solution.len()
    {
        issues.push(Issue::WordCountMismatch {
            declared,
            actual: solution.len(),
        });
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{CHAINS, loader::records_from_embedded};

    fn record(start: &str, end: &str, solution: &str, count: Option<usize>) -> ChainRecord {
        ChainRecord {
            start_word: start.to_string(),
            end_word: end.to_string(),
            solution: solution.to_string(),
            number_of_words: count,
        }
    }

    #[test]
    fn valid_record_has_no_issues() {
        let r = record("cat", "dog", "cat,cot,cog,dog", Some(4));
        assert!(check_record(&r).is_empty());
    }

    #[test]
    fn multi_letter_step_reported() {
        let r = record("cat", "dog", "cat,cog,dog", None);
        assert_eq!(
            check_record(&r),
            vec![Issue::NotSingleStep {
                from: "cat".to_string(),
                to: "cog".to_string()
            }]
        );
    }

    #[test]
    fn unequal_length_reported() {
        let r = record("cat", "dog", "cat,cats,dog", None);
        let issues = check_record(&r);
        assert!(issues.contains(&Issue::UnequalLength {
            word: "cats".to_string(),
            expected: 3
        }));
    }

    #[test]
    fn start_and_end_placement_reported() {
        let r = record("cat", "dog", "cot,cog", None);
        let issues = check_record(&r);
        assert!(issues.contains(&Issue::StartNotFirst));
        assert!(issues.contains(&Issue::EndNotLast));
    }

    #[test]
    fn repeated_word_reported() {
        let r = record("cat", "cat", "cat,cot,cat", None);
        assert!(check_record(&r).contains(&Issue::RepeatedWord("cat".to_string())));
    }

    #[test]
    fn word_count_mismatch_reported() {
        let r = record("cat", "dog", "cat,cot,cog,dog", Some(5));
        assert_eq!(
            check_record(&r),
            vec![Issue::WordCountMismatch {
                declared: 5,
                actual: 4
            }]
        );
    }

    #[test]
    fn empty_solution_reported() {
        let r = record("cat", "dog", " , ", None);
        assert_eq!(check_record(&r), vec![Issue::EmptySolution]);
    }

    #[test]
    fn invalid_word_reported() {
        let r = record("cat", "dog", "cat,c0t,cog,dog", None);
        assert!(check_record(&r).contains(&Issue::InvalidWord {
            word: "c0t".to_string(),
            reason: WordError::InvalidCharacters,
        }));
    }

    #[test]
    fn unequal_length_counts_letters_not_bytes() {
        let r = record("cat", "dog", "cat,café,dog", None);
        let issues = check_record(&r);
        let unequal = issues
            .iter()
            .find(|issue| matches!(issue, Issue::UnequalLength { .. }))
            .unwrap();
        assert_eq!(unequal.to_string(), "'café' has 4 letters, expected 3");
        assert!(issues.contains(&Issue::InvalidWord {
            word: "café".to_string(),
            reason: WordError::NonAscii,
        }));
    }

    #[test]
    fn report_keeps_dataset_order() {
        let records = vec![
            record("cat", "dog", "cat,cot,cog,dog", None),
            record("cat", "dog", "cat,dog", None),
            record("pig", "bat", "pig,big,bag,bat", None),
            record("pig", "bat", "pig,bat", None),
        ];
        let report = check_records(&records, &ProgressBar::hidden());

        assert_eq!(report.total_records, 4);
        assert_eq!(
            report.failures.iter().map(|r| r.index).collect::<Vec<_>>(),
            vec![1, 3]
        );
        assert_eq!(report.issue_count(), 2);
        assert!(!report.is_clean());
    }

    #[test]
    fn embedded_dataset_is_clean() {
        let records = records_from_embedded(CHAINS);
        let report = check_records(&records, &ProgressBar::hidden());
        assert!(report.is_clean(), "{:?}", report.failures);
    }
}
