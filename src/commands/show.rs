//! Puzzle lookup command
//!
//! Shows which puzzle a date or index selects, optionally with its solution.

use crate::core::Puzzle;
use crate::dataset::Dataset;
use crate::output::{print_puzzle_header, print_solution};
use crate::session::daily_index;
use anyhow::{Result, bail};
use chrono::NaiveDate;

/// How to pick the puzzle to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Date(NaiveDate),
    Index(usize),
}

/// Resolve a selection to a dataset index and puzzle
///
/// # Errors
///
/// Returns an error if an explicit index is past the end of the dataset.
pub fn select_puzzle(dataset: &Dataset, selection: Selection) -> Result<(usize, &Puzzle)> {
    let index = match selection {
        Selection::Date(date) => daily_index(date, dataset.len()),
        Selection::Index(index) => index,
    };

    match dataset.get(index) {
        Some(puzzle) => Ok((index, puzzle)),
        None => bail!(
            "Puzzle index {index} out of range (dataset has {} puzzles)",
            dataset.len()
        ),
    }
}

/// Print the selected puzzle
///
/// # Errors
///
/// Returns an error if the selection does not resolve to a puzzle.
pub fn run_show(dataset: &Dataset, selection: Selection, reveal: bool) -> Result<()> {
    let (index, puzzle) = select_puzzle(dataset, selection)?;

    let title = match selection {
        Selection::Date(date) => format!("Daily Puzzle · {date} · #{index}"),
        Selection::Index(_) => format!("Puzzle #{index}"),
    };
    print_puzzle_header(&title, puzzle);

    if reveal {
        print_solution(puzzle);
    }
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::CHAINS_COUNT;

    #[test]
    fn date_selection_matches_daily_index() {
        let dataset = Dataset::embedded().unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let (index, puzzle) = select_puzzle(&dataset, Selection::Date(date)).unwrap();

        assert_eq!(index, daily_index(date, dataset.len()));
        assert_eq!(puzzle, &dataset.puzzles()[index]);
    }

    #[test]
    fn index_selection() {
        let dataset = Dataset::embedded().unwrap();
        let (index, puzzle) = select_puzzle(&dataset, Selection::Index(0)).unwrap();
        assert_eq!(index, 0);
        assert_eq!(puzzle.start_word(), "cat");
    }

    #[test]
    fn index_out_of_range() {
        let dataset = Dataset::embedded().unwrap();
        assert!(select_puzzle(&dataset, Selection::Index(CHAINS_COUNT)).is_err());
    }
}
