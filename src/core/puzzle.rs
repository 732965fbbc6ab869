//! Puzzle definition
//!
//! A puzzle is one pre-built chain: the words shown to the player, the
//! ordered solution, and the set of words a submission may match.

use rustc_hash::FxHashSet;

/// An immutable word ladder puzzle
///
/// Built as-is from the dataset. No integrity checks are made here; a chain
/// whose steps are not single-letter changes simply plays badly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    start_word: String,
    end_word: String,
    solution: Vec<String>,
    accepted: FxHashSet<String>,
    number_of_words: usize,
}

impl Puzzle {
    /// Build a puzzle from raw dataset fields
    ///
    /// `solution` is a comma-separated chain. Each entry is trimmed and
    /// lower-cased; empty entries are dropped. When `number_of_words` is absent
    /// the solution length is used.
    ///
    /// # Examples
    /// ```
    /// use chainmail::core::Puzzle;
    ///
    /// let puzzle = Puzzle::new("cat", "dog", "cat, Cot,cog,dog", None);
    /// assert!(puzzle.accepts("cot"));
    /// assert_eq!(puzzle.word_length(), 3);
    /// assert_eq!(puzzle.number_of_words(), 4);
    /// ```
    #[must_use]
    pub fn new(
        start_word: &str,
        end_word: &str,
        solution: &str,
        number_of_words: Option<usize>,
    ) -> Self {
        let solution: Vec<String> = solution
            .split(',')
            .map(|word| word.trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        let accepted = solution.iter().cloned().collect();
        let number_of_words = number_of_words.unwrap_or(solution.len());

        Self {
            start_word: start_word.trim().to_string(),
            end_word: end_word.trim().to_string(),
            solution,
            accepted,
            number_of_words,
        }
    }

    /// The word the ladder starts from, as written in the dataset
    #[inline]
    #[must_use]
    pub fn start_word(&self) -> &str {
        &self.start_word
    }

    /// The word the player is trying to reach, as written in the dataset
    #[inline]
    #[must_use]
    pub fn end_word(&self) -> &str {
        &self.end_word
    }

    /// The known solution chain, lower-cased
    #[inline]
    #[must_use]
    pub fn solution(&self) -> &[String] {
        &self.solution
    }

    /// Letters per word, taken from the start word
    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.start_word.chars().count()
    }

    /// Advertised chain length
    #[inline]
    #[must_use]
    pub fn number_of_words(&self) -> usize {
        self.number_of_words
    }

    /// Whether a (lower-cased) word belongs to the solution vocabulary
    #[inline]
    #[must_use]
    pub fn accepts(&self, word: &str) -> bool {
        self.accepted.contains(word)
    }

    /// Whether `word` is the end word, ignoring case
    #[must_use]
    pub fn is_end_word(&self, word: &str) -> bool {
        self.end_word.eq_ignore_ascii_case(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat_to_dog() -> Puzzle {
        Puzzle::new("cat", "dog", "cat,cot,cog,dog", Some(4))
    }

    #[test]
    fn solution_is_split_and_normalized() {
        let puzzle = Puzzle::new("cat", "dog", " CAT , cot,Cog ,dog ", None);
        assert_eq!(puzzle.solution(), ["cat", "cot", "cog", "dog"]);
    }

    #[test]
    fn empty_solution_entries_are_dropped() {
        let puzzle = Puzzle::new("cat", "dog", "cat,,cot, ,dog,", None);
        assert_eq!(puzzle.solution(), ["cat", "cot", "dog"]);
        assert_eq!(puzzle.number_of_words(), 3);
    }

    #[test]
    fn accepts_solution_words_only() {
        let puzzle = cat_to_dog();
        assert!(puzzle.accepts("cat"));
        assert!(puzzle.accepts("cog"));
        assert!(puzzle.accepts("dog"));
        assert!(!puzzle.accepts("cut"));
        assert!(!puzzle.accepts("COT"));
    }

    #[test]
    fn word_length_follows_start_word() {
        assert_eq!(cat_to_dog().word_length(), 3);
        let puzzle = Puzzle::new("stone", "shame", "stone,store,shore,share,shame", None);
        assert_eq!(puzzle.word_length(), 5);
    }

    #[test]
    fn number_of_words_prefers_record_value() {
        let puzzle = Puzzle::new("cat", "dog", "cat,cot,cog,dog", Some(7));
        assert_eq!(puzzle.number_of_words(), 7);
    }

    #[test]
    fn end_word_comparison_ignores_case() {
        let puzzle = Puzzle::new("cat", "Dog", "cat,cot,cog,dog", None);
        assert!(puzzle.is_end_word("dog"));
        assert!(puzzle.is_end_word("DOG"));
        assert!(!puzzle.is_end_word("cog"));
    }
}
