//! Ordered, deduplicated word list shared read-only by episodes
//!
//! Guesses are referenced by index, so the order fixed at construction must
//! not change while any episode borrows the vocabulary.

use super::word::{Word, WordError};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Error building a vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabularyError {
    #[error("vocabulary is empty")]
    Empty,
    #[error("'{word}' has {found} letters, expected {expected}")]
    MixedLength {
        word: String,
        expected: usize,
        found: usize,
    },
    #[error("invalid word '{word}': {source}")]
    InvalidWord {
        word: String,
        #[source]
        source: WordError,
    },
}

/// Guessable words of a single length, in caller-supplied order
#[derive(Debug, Clone)]
pub struct Vocabulary {
    words: Vec<Word>,
    index: FxHashMap<String, usize>,
    word_len: usize,
}

impl Vocabulary {
    /// Build a vocabulary from words
    ///
    /// Duplicates keep their first position.
    ///
    /// # Errors
    /// Returns `VocabularyError::Empty` for no words and
    /// `VocabularyError::MixedLength` when lengths differ.
    ///
    /// # Examples
    /// ```
    /// use wordle_env::core::{Vocabulary, Word};
    ///
    /// let words = ["crane", "slate", "crane"].map(|w| Word::new(w).unwrap());
    /// let vocabulary = Vocabulary::new(words).unwrap();
    /// assert_eq!(vocabulary.len(), 2);
    /// assert_eq!(vocabulary.index_of("slate"), Some(1));
    /// ```
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self, VocabularyError> {
        let mut iter = words.into_iter();
        let first = iter.next().ok_or(VocabularyError::Empty)?;
        let word_len = first.len();

        let mut vocabulary = Self {
            words: Vec::new(),
            index: FxHashMap::default(),
            word_len,
        };
        vocabulary.push(first);

        for word in iter {
            if word.len() != word_len {
                return Err(VocabularyError::MixedLength {
                    word: word.text().to_string(),
                    expected: word_len,
                    found: word.len(),
                });
            }
            vocabulary.push(word);
        }

        Ok(vocabulary)
    }

    /// Build a vocabulary from strings, rejecting invalid words
    ///
    /// # Errors
    /// Returns `VocabularyError::InvalidWord` for the first string that is
    /// not a valid word, otherwise as [`Vocabulary::new`].
    pub fn from_strs<S: AsRef<str>>(
        words: impl IntoIterator<Item = S>,
    ) -> Result<Self, VocabularyError> {
        let words = words
            .into_iter()
            .map(|s| {
                let s = s.as_ref();
                Word::new(s).map_err(|source| VocabularyError::InvalidWord {
                    word: s.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(words)
    }

    fn push(&mut self, word: Word) {
        if self.index.contains_key(word.text()) {
            return;
        }
        self.index.insert(word.text().to_string(), self.words.len());
        self.words.push(word);
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    /// Position of a word, matching case-insensitively
    #[must_use]
    pub fn index_of(&self, text: &str) -> Option<usize> {
        self.index
            .get(text)
            .or_else(|| self.index.get(&text.to_lowercase()))
            .copied()
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.index_of(text).is_some()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: construction rejects empty input
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Letters per word
    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_order_and_first_duplicate() {
        let vocabulary = Vocabulary::from_strs(["slate", "crane", "slate", "trace"]).unwrap();
        let texts: Vec<&str> = vocabulary.iter().map(Word::text).collect();
        assert_eq!(texts, ["slate", "crane", "trace"]);
        assert_eq!(vocabulary.index_of("trace"), Some(2));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let vocabulary = Vocabulary::from_strs(["crane"]).unwrap();
        assert_eq!(vocabulary.index_of("CRANE"), Some(0));
        assert!(vocabulary.contains("Crane"));
        assert!(!vocabulary.contains("slate"));
    }

    #[test]
    fn rejects_empty() {
        let words: [&str; 0] = [];
        assert_eq!(
            Vocabulary::from_strs(words).unwrap_err(),
            VocabularyError::Empty
        );
    }

    #[test]
    fn rejects_mixed_lengths() {
        let err = Vocabulary::from_strs(["crane", "cat"]).unwrap_err();
        assert_eq!(
            err,
            VocabularyError::MixedLength {
                word: "cat".to_string(),
                expected: 5,
                found: 3
            }
        );
    }

    #[test]
    fn rejects_invalid_words() {
        let err = Vocabulary::from_strs(["crane", "cr4ne"]).unwrap_err();
        assert!(matches!(err, VocabularyError::InvalidWord { ref word, .. } if word == "cr4ne"));
    }

    #[test]
    fn supports_other_word_lengths() {
        let vocabulary = Vocabulary::from_strs(["cat", "dog", "cow"]).unwrap();
        assert_eq!(vocabulary.word_len(), 3);
        assert_eq!(vocabulary.get(2).map(Word::text), Some("cow"));
        assert!(vocabulary.get(3).is_none());
    }
}
