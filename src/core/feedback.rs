//! Guess feedback: per-position classification of a guess against a target
//!
//! Each position is marked [`Mark::Exact`], [`Mark::Present`] or
//! [`Mark::Absent`]. Repeated letters are resolved by consuming target
//! letters: exact matches first, then left-to-right presence against the
//! target letters that are still unconsumed.

use super::word::{Word, WordError, letter_slot};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Letter not in the target (or all of its occurrences already consumed)
    Absent,
    /// Letter in the target at another position
    Present,
    /// Letter in the target at this position
    Exact,
}

impl Mark {
    /// Numeric value used in state vectors: 2, 1, -1
    #[inline]
    #[must_use]
    pub const fn state_value(self) -> i8 {
        match self {
            Self::Exact => 2,
            Self::Present => 1,
            Self::Absent => -1,
        }
    }

    /// Base-3 digit used by [`Feedback::code`]
    #[inline]
    const fn digit(self) -> u32 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Exact => 2,
        }
    }

    /// Single-character form: `G`, `Y` or `-`
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Exact => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Exact),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | 'X' | 'x' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback for one guess
///
/// A pure function of (guess, target); it never carries information from
/// earlier turns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback {
    marks: Vec<Mark>,
}

/// Error parsing feedback text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackParseError {
    #[error("feedback is empty")]
    Empty,
    #[error("invalid feedback symbol '{0}' (use G/Y/- or 🟩🟨⬜)")]
    InvalidSymbol(char),
}

impl Feedback {
    /// Classify `guess` as if `target` were the hidden word
    ///
    /// # Algorithm
    /// 1. Mark every exact position match and consume that target letter
    /// 2. Left to right, mark remaining guess letters present while unconsumed
    ///    copies of the letter are left in the target
    /// 3. Everything else stays absent
    ///
    /// Both words must have the same length; see [`Feedback::try_classify`]
    /// for a checked version.
    ///
    /// # Examples
    /// ```
    /// use wordle_env::core::{Feedback, Mark, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let target = Word::new("erase").unwrap();
    /// let feedback = Feedback::classify(&guess, &target);
    ///
    /// use Mark::{Absent, Present};
    /// assert_eq!(feedback.marks(), &[Present, Absent, Present, Present, Absent]);
    /// ```
    #[must_use]
    pub fn classify(guess: &Word, target: &Word) -> Self {
        debug_assert_eq!(guess.len(), target.len(), "guess and target lengths differ");

        let guess_letters = guess.letters();
        let target_letters = target.letters();
        let mut marks = vec![Mark::Absent; guess_letters.len()];
        let mut available = target.letter_counts();

        for (i, (&g, &t)) in guess_letters.iter().zip(target_letters).enumerate() {
            if g == t {
                marks[i] = Mark::Exact;
                available[letter_slot(g)] -= 1;
            }
        }

        for (mark, &g) in marks.iter_mut().zip(guess_letters) {
            if *mark == Mark::Absent {
                let remaining = &mut available[letter_slot(g)];
                if *remaining > 0 {
                    *mark = Mark::Present;
                    *remaining -= 1;
                }
            }
        }

        Self { marks }
    }

    /// Checked [`Feedback::classify`]
    ///
    /// # Errors
    /// Returns `WordError::LengthMismatch` if the words differ in length.
    pub fn try_classify(guess: &Word, target: &Word) -> Result<Self, WordError> {
        if guess.len() != target.len() {
            return Err(WordError::LengthMismatch {
                guess: guess.len(),
                target: target.len(),
            });
        }
        Ok(Self::classify(guess, target))
    }

    /// Build feedback directly from marks
    #[must_use]
    pub const fn from_marks(marks: Vec<Mark>) -> Self {
        Self { marks }
    }

    /// Feedback of the given length with every position exact
    #[must_use]
    pub fn perfect(len: usize) -> Self {
        Self {
            marks: vec![Mark::Exact; len],
        }
    }

    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Check if every position is exact
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.marks.is_empty() && self.marks.iter().all(|&m| m == Mark::Exact)
    }

    /// Count positions carrying the given mark
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.marks.iter().filter(|&&m| m == mark).count()
    }

    /// Numeric state vector: `Exact → 2`, `Present → 1`, `Absent → -1`
    #[must_use]
    pub fn to_state(&self) -> Vec<i8> {
        self.marks.iter().map(|m| m.state_value()).collect()
    }

    /// Compact base-3 code, position `i` contributing `digit × 3^i`
    ///
    /// Unique for feedback of equal length; fits in a `u32` for words up to
    /// 20 letters.
    ///
    /// ```
    /// use wordle_env::core::Feedback;
    ///
    /// let feedback: Feedback = "GY-GY".parse().unwrap();
    /// // 2 + 1×3 + 0×9 + 2×27 + 1×81
    /// assert_eq!(feedback.code(), 140);
    /// ```
    #[must_use]
    pub fn code(&self) -> u32 {
        self.marks
            .iter()
            .rev()
            .fold(0, |acc, mark| acc * 3 + mark.digit())
    }

    /// Render as emoji squares, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.marks.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.marks
            .iter()
            .try_for_each(|m| write!(f, "{}", m.symbol()))
    }
}

impl FromStr for Feedback {
    type Err = FeedbackParseError;

    /// Parse feedback like "GY-GY", "gyxgy" or "🟩🟨⬜🟩🟨"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(FeedbackParseError::Empty);
        }

        let marks = s
            .chars()
            .map(|ch| Mark::from_symbol(ch).ok_or(FeedbackParseError::InvalidSymbol(ch)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { marks })
    }
}
