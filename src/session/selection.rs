//! Puzzle selection
//!
//! Daily selection is a pure function of the calendar date so every player
//! gets the same puzzle on the same day. Shuffle selection is a uniform draw.

use chrono::{Datelike, NaiveDate};
use rand::Rng;
use std::num::NonZeroUsize;

/// Numeric key for a calendar date, `yyyymmdd`
///
/// # Examples
/// ```
/// use chainmail::session::date_key;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
/// assert_eq!(date_key(date), 20_240_309);
/// ```
#[must_use]
pub fn date_key(date: NaiveDate) -> u64 {
    // Years before 0 are clamped; the key only has to be stable
    let year = u64::try_from(date.year()).unwrap_or(0);
    year * 10_000 + u64::from(date.month()) * 100 + u64::from(date.day())
}

/// Index of the daily puzzle for `date` in a dataset of `dataset_len` puzzles
#[must_use]
pub fn daily_index(date: NaiveDate, dataset_len: NonZeroUsize) -> usize {
    (date_key(date) % dataset_len.get() as u64) as usize
}

/// Uniformly random puzzle index
pub fn shuffle_index<R: Rng + ?Sized>(rng: &mut R, dataset_len: NonZeroUsize) -> usize {
    rng.random_range(0..dataset_len.get())
}
