//! Word representation
//!
//! A Word is a lowercase ASCII letter sequence of fixed length. The length is
//! checked at construction; a [`Vocabulary`](super::Vocabulary) then enforces
//! that all of its words share one length.

use std::fmt;
use thiserror::Error;

/// Longest word accepted by [`Word::new`]
pub const MAX_WORD_LEN: usize = 16;

/// Number of letters in the alphabet words are drawn from
pub(crate) const ALPHABET: usize = 26;

/// A guessable word
///
/// Stores the lowercased text; letters are available as bytes in `b'a'..=b'z'`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must have between 1 and {MAX_WORD_LEN} letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
    #[error("guess has {guess} letters but target has {target}")]
    LengthMismatch { guess: usize, target: usize },
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is 0 or greater than [`MAX_WORD_LEN`]
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_env::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("cr4ne").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.is_empty() || text.len() > MAX_WORD_LEN {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters as bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed word; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> u8 {
        self.letters()[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters().contains(&letter)
    }

    /// Count of each letter, indexed by `letter - b'a'`
    #[must_use]
    pub(crate) fn letter_counts(&self) -> [u8; ALPHABET] {
        let mut counts = [0u8; ALPHABET];
        for &letter in self.letters() {
            counts[letter_slot(letter)] += 1;
        }
        counts
    }
}

/// Index of a lowercase letter in a per-letter table
#[inline]
pub(crate) const fn letter_slot(letter: u8) -> usize {
    (letter - b'a') as usize
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.letters(), b"crane");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        assert_eq!(Word::new("CRANE").unwrap().text(), "crane");
        assert_eq!(Word::new("CrAnE").unwrap().text(), "crane");
    }

    #[test]
    fn word_creation_other_lengths() {
        assert_eq!(Word::new("cat").unwrap().len(), 3);
        assert_eq!(Word::new("puzzles").unwrap().len(), 7);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
        assert_eq!(
            Word::new("a".repeat(MAX_WORD_LEN + 1)),
            Err(WordError::InvalidLength(MAX_WORD_LEN + 1))
        );
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cranë"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_letter_at_and_has_letter() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.letter_at(0), b'c');
        assert_eq!(word.letter_at(4), b'e');
        assert!(word.has_letter(b'r'));
        assert!(!word.has_letter(b'z'));
    }

    #[test]
    fn word_letter_counts_duplicates() {
        let counts = Word::new("speed").unwrap().letter_counts();
        assert_eq!(counts[letter_slot(b'e')], 2);
        assert_eq!(counts[letter_slot(b's')], 1);
        assert_eq!(counts[letter_slot(b'z')], 0);
        assert_eq!(counts.iter().map(|&c| usize::from(c)).sum::<usize>(), 5);
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "Slate".parse().unwrap();
        assert_eq!(format!("{word}"), "slate");
    }
}
