//! Episode state machine
//!
//! One play-through against a fixed target: `Active` until the target is
//! guessed (`Won`) or the guess budget runs out (`Lost`).

use super::config::EpisodeConfig;
use super::error::{EpisodeError, GuessError, TargetError};
use crate::core::{Feedback, Vocabulary, Word};
use crate::solver::{CandidateSet, LetterFrequencyScorer, PositionalFrequencies, Suggestion};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EpisodeStatus {
    Active,
    Won,
    Lost,
}

impl EpisodeStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }
}

impl fmt::Display for EpisodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Active => "active",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// Result of one accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub feedback: Feedback,
    /// Numeric form of `feedback`
    pub state: Vec<i8>,
    /// Reward for this turn only
    pub reward: i32,
    pub done: bool,
    pub status: EpisodeStatus,
    /// Candidates left after narrowing
    pub remaining: usize,
}

/// One game against a hidden target
///
/// Borrows the vocabulary read-only; any number of episodes can share it.
#[derive(Debug, Clone)]
pub struct Episode<'v> {
    vocabulary: &'v Vocabulary,
    target: Word,
    config: EpisodeConfig,
    scorer: LetterFrequencyScorer,
    openers: Vec<usize>,
    history: Vec<(Word, Feedback)>,
    candidates: CandidateSet<'v>,
    state: Vec<i8>,
    turn: usize,
    status: EpisodeStatus,
    total_reward: i32,
}

impl<'v> Episode<'v> {
    /// Start an episode with the default configuration
    ///
    /// # Errors
    /// Returns `EpisodeError::InvalidTarget` if `target` is not a valid word
    /// or its length differs from the vocabulary's.
    ///
    /// # Examples
    /// ```
    /// use wordle_env::core::{Mark, Vocabulary};
    /// use wordle_env::episode::{Episode, EpisodeStatus};
    ///
    /// let vocabulary = Vocabulary::from_strs(["crane", "slate", "crate"]).unwrap();
    /// let mut episode = Episode::new("crate", &vocabulary).unwrap();
    ///
    /// let outcome = episode.step(0).unwrap();
    /// assert_eq!(outcome.feedback.count(Mark::Exact), 4);
    /// assert!(!outcome.done);
    ///
    /// let outcome = episode.step(2).unwrap();
    /// assert_eq!(outcome.status, EpisodeStatus::Won);
    /// ```
    pub fn new(target: &str, vocabulary: &'v Vocabulary) -> Result<Self, EpisodeError> {
        Self::with_config(target, vocabulary, EpisodeConfig::default())
    }

    /// Start an episode with explicit settings
    ///
    /// # Errors
    /// As [`Episode::new`].
    pub fn with_config(
        target: &str,
        vocabulary: &'v Vocabulary,
        config: EpisodeConfig,
    ) -> Result<Self, EpisodeError> {
        let invalid = |reason: TargetError| EpisodeError::InvalidTarget {
            target: target.to_string(),
            reason,
        };

        let target = Word::new(target).map_err(|e| invalid(e.into()))?;
        if target.len() != vocabulary.word_len() {
            return Err(invalid(TargetError::LengthMismatch {
                expected: vocabulary.word_len(),
                found: target.len(),
            }));
        }

        let mut openers: Vec<usize> = config
            .openers
            .iter()
            .filter_map(|text| vocabulary.index_of(text))
            .collect();
        openers.sort_unstable();
        openers.dedup();

        log::debug!(
            "new episode: {} words, {} openers, {} guesses",
            vocabulary.len(),
            openers.len(),
            config.max_guesses
        );

        Ok(Self {
            vocabulary,
            state: vec![0; target.len()],
            target,
            scorer: LetterFrequencyScorer::new(config.scorer.clone()),
            config,
            openers,
            history: Vec::new(),
            candidates: CandidateSet::full(vocabulary),
            turn: 0,
            status: EpisodeStatus::Active,
            total_reward: 0,
        })
    }

    /// Return to the initial state and give the all-zero state vector
    pub fn reset(&mut self) -> Vec<i8> {
        self.history.clear();
        self.candidates = CandidateSet::full(self.vocabulary);
        self.state = vec![0; self.target.len()];
        self.turn = 0;
        self.status = EpisodeStatus::Active;
        self.total_reward = 0;
        self.state.clone()
    }

    /// Guess the vocabulary word at `guess_index`
    ///
    /// # Errors
    /// - `EpisodeError::InvalidTransition` once the episode has ended
    /// - `EpisodeError::InvalidGuess` for an index outside the vocabulary
    ///
    /// Nothing changes when an error is returned.
    pub fn step(&mut self, guess_index: usize) -> Result<StepOutcome, EpisodeError> {
        if self.status.is_terminal() {
            return Err(EpisodeError::InvalidTransition {
                status: self.status,
            });
        }

        let vocabulary = self.vocabulary;
        let guess = vocabulary.get(guess_index).ok_or(GuessError::OutOfRange {
            index: guess_index,
            len: vocabulary.len(),
        })?;

        let feedback = Feedback::classify(guess, &self.target);
        self.history.push((guess.clone(), feedback.clone()));
        self.turn += 1;

        self.candidates.narrow(guess, &feedback);

        let reward = self.config.rewards.reward(&feedback);
        self.total_reward += reward;

        self.status = if *guess == self.target {
            EpisodeStatus::Won
        } else if self.turn >= self.config.max_guesses {
            EpisodeStatus::Lost
        } else {
            EpisodeStatus::Active
        };

        self.state = feedback.to_state();

        log::debug!(
            "turn {}: {guess} {feedback} reward {reward}, {} candidates, {}",
            self.turn,
            self.candidates.len(),
            self.status
        );

        Ok(StepOutcome {
            state: self.state.clone(),
            feedback,
            reward,
            done: self.status.is_terminal(),
            status: self.status,
            remaining: self.candidates.len(),
        })
    }

    /// Guess a word by its text
    ///
    /// # Errors
    /// `EpisodeError::InvalidGuess` if the word is not in the vocabulary,
    /// otherwise as [`Episode::step`].
    pub fn step_word(&mut self, text: &str) -> Result<StepOutcome, EpisodeError> {
        if self.status.is_terminal() {
            return Err(EpisodeError::InvalidTransition {
                status: self.status,
            });
        }
        let index = self
            .vocabulary
            .index_of(text)
            .ok_or_else(|| GuessError::NotInVocabulary(text.to_string()))?;
        self.step(index)
    }

    /// Top `k` suggestions for the next guess
    ///
    /// Before the first guess this ranks the configured openers found in the
    /// vocabulary (scored over the whole vocabulary); afterwards it ranks the
    /// remaining candidates. An empty candidate set gives an empty list.
    #[must_use]
    pub fn rank(&self, k: usize) -> Vec<Suggestion<'v>> {
        if self.history.is_empty() && !self.openers.is_empty() {
            let frequencies = PositionalFrequencies::from_candidates(&self.candidates);
            let words = self.vocabulary.words();
            let pool = self.openers.iter().map(|&index| (index, &words[index]));
            return self.scorer.rank_pool(&frequencies, pool, k);
        }
        self.scorer.rank(&self.candidates, k)
    }

    /// [`Episode::rank`], falling back to the whole vocabulary when no
    /// candidate is left
    #[must_use]
    pub fn rank_or_fallback(&self, k: usize) -> Vec<Suggestion<'v>> {
        let ranked = self.rank(k);
        if ranked.is_empty() && k > 0 {
            log::debug!("no candidates left, ranking the whole vocabulary");
            return self
                .scorer
                .rank(&CandidateSet::full(self.vocabulary), k);
        }
        ranked
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Guesses made so far
    #[must_use]
    pub const fn turn_count(&self) -> usize {
        self.turn
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.config.max_guesses.saturating_sub(self.turn)
    }

    #[must_use]
    pub const fn status(&self) -> EpisodeStatus {
        self.status
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet<'v> {
        &self.candidates
    }

    /// Current state vector: zeros before the first guess, then the latest
    /// feedback
    #[must_use]
    pub fn state(&self) -> &[i8] {
        &self.state
    }

    /// Sum of turn rewards since the last reset
    #[must_use]
    pub const fn total_reward(&self) -> i32 {
        self.total_reward
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &'v Vocabulary {
        self.vocabulary
    }

    #[must_use]
    pub const fn config(&self) -> &EpisodeConfig {
        &self.config
    }
}
