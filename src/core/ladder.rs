//! Ladder step comparison
//!
//! Marks which letters of an accepted word differ from the word before it,
//! so each rung shows the substitution the player made.

/// Per-position change marks for `word` against its predecessor
///
/// The first word of a ladder has no predecessor and nothing is marked.
/// Positions past the end of a shorter predecessor count as changed.
///
/// # Examples
/// ```
/// use chainmail::core::changed_positions;
///
/// assert_eq!(changed_positions(Some("cat"), "cot"), vec![false, true, false]);
/// assert_eq!(changed_positions(None, "cat"), vec![false, false, false]);
/// ```
#[must_use]
pub fn changed_positions(previous: Option<&str>, word: &str) -> Vec<bool> {
    let Some(previous) = previous else {
        return vec![false; word.chars().count()];
    };

    let mut before = previous.chars();
    word.chars().map(|c| before.next() != Some(c)).collect()
}

/// Number of positions at which two words differ
///
/// Words of unequal length return `None`.
#[must_use]
pub fn letter_distance(a: &str, b: &str) -> Option<usize> {
    if a.chars().count() != b.chars().count() {
        return None;
    }
    Some(a.chars().zip(b.chars()).filter(|(x, y)| x != y).count())
}
