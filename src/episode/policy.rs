//! Guess policies and the episode driver
//!
//! An episode only needs something that picks a vocabulary index. Heuristic
//! and learned agents plug in through [`Policy`].

use super::error::EpisodeError;
use super::state::{Episode, EpisodeStatus};
use crate::core::Feedback;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Chooses the next guess from read-only episode state
pub trait Policy {
    /// Vocabulary index to guess next, or `None` to give up
    fn choose(&mut self, episode: &Episode<'_>) -> Option<usize>;
}

/// Always guesses the top suggestion
///
/// Falls back to the best word of the whole vocabulary when no candidate is
/// left.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyPolicy;

impl Policy for GreedyPolicy {
    fn choose(&mut self, episode: &Episode<'_>) -> Option<usize> {
        episode.rank_or_fallback(1).first().map(|s| s.index)
    }
}

/// Picks uniformly among the top `top_k` suggestions
pub struct SampledPolicy<R: Rng> {
    rng: R,
    top_k: usize,
}

impl<R: Rng> SampledPolicy<R> {
    #[must_use]
    pub const fn new(rng: R, top_k: usize) -> Self {
        Self { rng, top_k }
    }
}

impl<R: Rng> Policy for SampledPolicy<R> {
    fn choose(&mut self, episode: &Episode<'_>) -> Option<usize> {
        episode
            .rank_or_fallback(self.top_k)
            .choose(&mut self.rng)
            .map(|s| s.index)
    }
}

/// What happened during one episode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeSummary {
    pub guesses: Vec<String>,
    pub feedback: Vec<Feedback>,
    pub rewards: Vec<i32>,
    pub total_reward: i32,
    pub status: EpisodeStatus,
}

impl EpisodeSummary {
    #[must_use]
    pub fn won(&self) -> bool {
        self.status == EpisodeStatus::Won
    }
}

/// Reset `episode` and let `policy` play until it ends
///
/// Stops early, leaving the episode `Active`, if the policy returns `None`.
///
/// # Errors
/// Propagates `EpisodeError::InvalidGuess` when the policy picks an index
/// outside the vocabulary.
///
/// # Examples
/// ```
/// use wordle_env::core::Vocabulary;
/// use wordle_env::episode::{Episode, GreedyPolicy, play};
///
/// let vocabulary = Vocabulary::from_strs(["crane", "slate", "trace", "crate"]).unwrap();
/// let mut episode = Episode::new("trace", &vocabulary).unwrap();
///
/// let summary = play(&mut episode, &mut GreedyPolicy).unwrap();
/// assert!(summary.won());
/// assert_eq!(summary.guesses.last().map(String::as_str), Some("trace"));
/// ```
pub fn play<P: Policy + ?Sized>(
    episode: &mut Episode<'_>,
    policy: &mut P,
) -> Result<EpisodeSummary, EpisodeError> {
    episode.reset();

    let mut guesses = Vec::new();
    let mut feedback = Vec::new();
    let mut rewards = Vec::new();

    while !episode.is_terminal() {
        let Some(index) = policy.choose(episode) else {
            log::debug!("policy gave up after {} guesses", episode.turn_count());
            break;
        };

        let outcome = episode.step(index)?;
        if let Some(word) = episode.vocabulary().get(index) {
            guesses.push(word.text().to_string());
        }
        feedback.push(outcome.feedback);
        rewards.push(outcome.reward);
    }

    Ok(EpisodeSummary {
        guesses,
        feedback,
        rewards,
        total_reward: episode.total_reward(),
        status: episode.status(),
    })
}
