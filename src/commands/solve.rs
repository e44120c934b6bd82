//! Word solving command
//!
//! Plays a known target with the greedy policy and records every step.

use crate::core::{Feedback, Vocabulary};
use crate::episode::{Episode, EpisodeConfig, EpisodeError, EpisodeStatus};

/// Configuration for solving a word
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub target: String,
    pub episode: EpisodeConfig,
}

impl SolveConfig {
    #[must_use]
    pub fn new(target: String) -> Self {
        Self {
            target,
            episode: EpisodeConfig::default(),
        }
    }
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
    pub total_reward: i32,
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    pub reward: i32,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Frequency score the guess was ranked with
    pub score: f64,
}

/// Solve `config.target` by always taking the top suggestion
///
/// Same choice as [`crate::episode::GreedyPolicy`], with the ranking score
/// kept for each step.
///
/// # Errors
///
/// Returns an error if the target is not a word of the vocabulary's length.
pub fn solve_word(vocabulary: &Vocabulary, config: SolveConfig) -> Result<SolveResult, EpisodeError> {
    let mut episode = Episode::with_config(&config.target, vocabulary, config.episode)?;
    let mut guesses = Vec::new();

    while !episode.is_terminal() {
        let Some(top) = episode.rank_or_fallback(1).into_iter().next() else {
            break;
        };
        let candidates_before = episode.candidates().len();
        let outcome = episode.step(top.index)?;

        guesses.push(GuessStep {
            word: top.word.text().to_string(),
            feedback: outcome.feedback,
            reward: outcome.reward,
            candidates_before,
            candidates_after: outcome.remaining,
            score: top.score,
        });
    }

    Ok(SolveResult {
        success: episode.status() == EpisodeStatus::Won,
        guesses,
        target: episode.target().text().to_string(),
        total_reward: episode.total_reward(),
    })
}
