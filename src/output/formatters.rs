//! Formatting utilities for terminal output

/// Upper-case the letters marked as changed
///
/// Gives an uncolored rendering of a ladder rung, e.g. `cOt` after `cat`.
#[must_use]
pub fn mark_changes(word: &str, changed: &[bool]) -> String {
    word.chars()
        .enumerate()
        .map(|(i, c)| {
            if changed.get(i).copied().unwrap_or(false) {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Ladder progress bar: rungs reached against the advertised chain length
#[must_use]
pub fn ladder_progress(rungs: usize, number_of_words: usize, width: usize) -> String {
    create_progress_bar(rungs as f64, number_of_words as f64, width)
}
