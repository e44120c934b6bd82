//! Positional letter-frequency scoring
//!
//! For each position, the fraction of candidates carrying each letter there.
//! A word scores the product of its letters' positional frequencies, so words
//! built from common letters in common places rank first.

use super::filter::CandidateSet;
use crate::core::Word;
use rustc_hash::{FxHashMap, FxHashSet};

/// Frequency used for a letter never seen at a position
pub const DEFAULT_FLOOR: f64 = 1e-6;

/// Score multiplier for preferred words
pub const DEFAULT_PREFERRED_BOOST: f64 = 5.0;

/// Scoring knobs
#[derive(Debug, Clone)]
pub struct ScorerConfig {
    /// Substitute for a zero positional frequency
    pub floor: f64,
    /// Words whose score is multiplied by `preferred_boost`
    pub preferred: FxHashSet<String>,
    pub preferred_boost: f64,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            floor: DEFAULT_FLOOR,
            preferred: FxHashSet::default(),
            preferred_boost: DEFAULT_PREFERRED_BOOST,
        }
    }
}

/// Letter → fraction of words with that letter, for every position
#[derive(Debug, Clone, Default)]
pub struct PositionalFrequencies {
    positions: Vec<FxHashMap<u8, f64>>,
}

impl PositionalFrequencies {
    /// Build tables from a set of equal-length words
    ///
    /// With no words every frequency is zero.
    ///
    /// # Examples
    /// ```
    /// use wordle_env::core::Word;
    /// use wordle_env::solver::PositionalFrequencies;
    ///
    /// let words = ["crane", "crate", "slate"].map(|w| Word::new(w).unwrap());
    /// let frequencies = PositionalFrequencies::from_words(&words);
    ///
    /// assert!((frequencies.frequency(0, b'c') - 2.0 / 3.0).abs() < 1e-12);
    /// assert_eq!(frequencies.frequency(2, b'a'), 1.0);
    /// assert_eq!(frequencies.frequency(0, b'z'), 0.0);
    /// ```
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a Word>) -> Self {
        let mut counts: Vec<FxHashMap<u8, usize>> = Vec::new();
        let mut total = 0usize;

        for word in words {
            if counts.len() < word.len() {
                counts.resize_with(word.len(), FxHashMap::default);
            }
            for (position, &letter) in word.letters().iter().enumerate() {
                *counts[position].entry(letter).or_insert(0) += 1;
            }
            total += 1;
        }

        let positions = counts
            .into_iter()
            .map(|letters| {
                letters
                    .into_iter()
                    .map(|(letter, count)| (letter, count as f64 / total as f64))
                    .collect()
            })
            .collect();

        Self { positions }
    }

    /// Tables over the words of a candidate set
    #[must_use]
    pub fn from_candidates(candidates: &CandidateSet<'_>) -> Self {
        Self::from_words(candidates.words())
    }

    /// Fraction of words with `letter` at `position`, zero if never seen
    #[must_use]
    pub fn frequency(&self, position: usize, letter: u8) -> f64 {
        self.positions
            .get(position)
            .and_then(|letters| letters.get(&letter))
            .copied()
            .unwrap_or(0.0)
    }

    /// Product of positional frequencies, with `floor` standing in for zero
    #[must_use]
    pub fn score(&self, word: &Word, floor: f64) -> f64 {
        word.letters()
            .iter()
            .enumerate()
            .map(|(position, &letter)| {
                let frequency = self.frequency(position, letter);
                if frequency > 0.0 { frequency } else { floor }
            })
            .product()
    }
}

/// A ranked guess
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion<'v> {
    /// Position in the vocabulary
    pub index: usize,
    pub word: &'v Word,
    /// Relative weight, not a probability
    pub score: f64,
}

/// Ranks words by positional letter frequency
#[derive(Debug, Clone, Default)]
pub struct LetterFrequencyScorer {
    config: ScorerConfig,
}

impl LetterFrequencyScorer {
    #[must_use]
    pub const fn new(config: ScorerConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ScorerConfig {
        &self.config
    }

    /// Top `k` candidates, scored against the candidates' own frequencies
    ///
    /// Sorted by score descending, ties by vocabulary index ascending.
    /// An empty candidate set yields an empty list.
    ///
    /// # Examples
    /// ```
    /// use wordle_env::core::Vocabulary;
    /// use wordle_env::solver::{CandidateSet, LetterFrequencyScorer};
    ///
    /// let vocabulary = Vocabulary::from_strs(["crane", "crate", "slate", "xylyl"]).unwrap();
    /// let candidates = CandidateSet::full(&vocabulary);
    /// let ranked = LetterFrequencyScorer::default().rank(&candidates, 2);
    ///
    /// assert_eq!(ranked.len(), 2);
    /// assert_eq!(ranked[0].word.text(), "crate");
    /// ```
    #[must_use]
    pub fn rank<'v>(&self, candidates: &CandidateSet<'v>, k: usize) -> Vec<Suggestion<'v>> {
        let frequencies = PositionalFrequencies::from_candidates(candidates);
        self.rank_pool(&frequencies, candidates.iter(), k)
    }

    /// Top `k` words of an arbitrary pool, scored against given frequencies
    pub fn rank_pool<'v>(
        &self,
        frequencies: &PositionalFrequencies,
        pool: impl IntoIterator<Item = (usize, &'v Word)>,
        k: usize,
    ) -> Vec<Suggestion<'v>> {
        let mut ranked: Vec<Suggestion<'v>> = pool
            .into_iter()
            .map(|(index, word)| Suggestion {
                index,
                word,
                score: self.score(frequencies, word),
            })
            .collect();

        ranked.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.index.cmp(&b.index)));
        ranked.truncate(k);
        ranked
    }

    /// Score of one word, including the preferred-word boost
    #[must_use]
    pub fn score(&self, frequencies: &PositionalFrequencies, word: &Word) -> f64 {
        let score = frequencies.score(word, self.config.floor);
        if self.config.preferred.contains(word.text()) {
            score * self.config.preferred_boost
        } else {
            score
        }
    }
}

/// Scores rescaled to sum to one, for display as probabilities
#[must_use]
pub fn normalized(suggestions: &[Suggestion<'_>]) -> Vec<f64> {
    let total: f64 = suggestions.iter().map(|s| s.score).sum();
    if total > 0.0 {
        suggestions.iter().map(|s| s.score / total).collect()
    } else {
        vec![0.0; suggestions.len()]
    }
}
