//! Candidate narrowing
//!
//! A candidate survives a (guess, feedback) pair only if classifying the
//! guess against the candidate, as if it were the target, reproduces the
//! feedback exactly. Repeated letters are therefore handled by the same
//! rules that produced the feedback.

use crate::core::{Feedback, Vocabulary, Word};

/// Check that `word` could be the target given every entry in `history`
///
/// Entries whose guess or feedback length differs from `word` never match.
///
/// # Examples
/// ```
/// use wordle_env::core::{Feedback, Word};
/// use wordle_env::solver::is_consistent;
///
/// let guess = Word::new("crane").unwrap();
/// let target = Word::new("crate").unwrap();
/// let history = vec![(guess.clone(), Feedback::classify(&guess, &target))];
///
/// assert!(is_consistent(&target, &history));
/// assert!(!is_consistent(&Word::new("slate").unwrap(), &history));
/// ```
#[must_use]
pub fn is_consistent(word: &Word, history: &[(Word, Feedback)]) -> bool {
    history
        .iter()
        .all(|(guess, feedback)| matches_feedback(word, guess, feedback))
}

#[inline]
fn matches_feedback(word: &Word, guess: &Word, feedback: &Feedback) -> bool {
    guess.len() == word.len()
        && feedback.len() == word.len()
        && Feedback::classify(guess, word) == *feedback
}

/// Words of a vocabulary still consistent with the feedback seen so far
///
/// Stored as ascending vocabulary indices, so iteration order is stable.
#[derive(Debug, Clone)]
pub struct CandidateSet<'v> {
    vocabulary: &'v Vocabulary,
    indices: Vec<usize>,
}

impl<'v> CandidateSet<'v> {
    /// Every word of the vocabulary
    #[must_use]
    pub fn full(vocabulary: &'v Vocabulary) -> Self {
        Self {
            vocabulary,
            indices: (0..vocabulary.len()).collect(),
        }
    }

    /// Recompute candidates from scratch over the whole vocabulary
    #[must_use]
    pub fn from_history(vocabulary: &'v Vocabulary, history: &[(Word, Feedback)]) -> Self {
        let indices = vocabulary
            .iter()
            .enumerate()
            .filter(|(_, word)| is_consistent(word, history))
            .map(|(index, _)| index)
            .collect();

        Self {
            vocabulary,
            indices,
        }
    }

    /// Drop candidates inconsistent with one more (guess, feedback) pair
    ///
    /// Only current survivors are checked. Returns the number removed.
    pub fn narrow(&mut self, guess: &Word, feedback: &Feedback) -> usize {
        let before = self.indices.len();
        let vocabulary = self.vocabulary;

        self.indices
            .retain(|&index| matches_feedback(&vocabulary.words()[index], guess, feedback));

        let removed = before - self.indices.len();
        log::trace!(
            "{guess} {feedback}: {before} -> {} candidates",
            self.indices.len()
        );
        removed
    }

    /// Narrowed copy, leaving `self` untouched
    #[must_use]
    pub fn narrowed(&self, guess: &Word, feedback: &Feedback) -> Self {
        let mut next = self.clone();
        next.narrow(guess, feedback);
        next
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Vocabulary indices of the candidates, ascending
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Candidates paired with their vocabulary index
    pub fn iter(&self) -> impl Iterator<Item = (usize, &'v Word)> + '_ {
        let words = self.vocabulary.words();
        self.indices.iter().map(move |&index| (index, &words[index]))
    }

    /// Candidate words in vocabulary order
    pub fn words(&self) -> impl Iterator<Item = &'v Word> + '_ {
        self.iter().map(|(_, word)| word)
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.vocabulary
            .index_of(text)
            .is_some_and(|index| self.indices.binary_search(&index).is_ok())
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &'v Vocabulary {
        self.vocabulary
    }
}
