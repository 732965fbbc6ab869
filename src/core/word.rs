//! Ladder word representation
//!
//! A Word stores a lower-cased, ASCII-alphabetic word of any non-zero length.

use thiserror::Error;

/// A validated ladder word
///
/// Always lower-case, so two words compare equal regardless of how they were typed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and the text is lower-cased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed text is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use chainmail::core::Word;
    ///
    /// let word = Word::new(" Cat ").unwrap();
    /// assert_eq!(word, Word::new("cat").unwrap());
    /// assert_eq!(word.len(), 3);
    ///
    /// assert!(Word::new("c4t").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self {
            text: text.to_ascii_lowercase(),
        })
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; a `Word` cannot be built from empty text
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("ladder").unwrap();
        assert_eq!(word.len(), 6);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        assert_eq!(Word::new("CAT").unwrap(), Word::new("cat").unwrap());
        assert_eq!(Word::new("CoG").unwrap(), Word::new("cog").unwrap());
    }

    #[test]
    fn word_creation_trims_whitespace() {
        assert_eq!(Word::new("  dog\t").unwrap(), Word::new("dog").unwrap());
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("   "), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("c4t"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("ca t"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cat!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("café"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_equality_case_insensitive() {
        assert_eq!(Word::new("cat").unwrap(), Word::new("CAT").unwrap());
        assert_ne!(Word::new("cat").unwrap(), Word::new("cot").unwrap());
    }
}
