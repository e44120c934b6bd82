//! Episode configuration

use crate::core::{Feedback, Mark};
use crate::solver::ScorerConfig;

/// Guesses allowed before an episode is lost
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Suggestions offered per turn
pub const DEFAULT_SUGGESTIONS: usize = 10;

/// First-turn suggestions, used before any feedback narrows the candidates
pub const DEFAULT_OPENERS: &[&str] = &["crane", "slate", "trace", "crate", "caret"];

/// Per-position reward for each mark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardScheme {
    pub exact: i32,
    pub present: i32,
    pub absent: i32,
}

impl RewardScheme {
    /// Sum of per-position rewards for one guess
    ///
    /// ```
    /// use wordle_env::core::Feedback;
    /// use wordle_env::episode::RewardScheme;
    ///
    /// let rewards = RewardScheme::default();
    /// assert_eq!(rewards.reward(&Feedback::perfect(5)), 50);
    /// assert_eq!(rewards.reward(&"-----".parse().unwrap()), -15);
    /// ```
    #[must_use]
    pub fn reward(&self, feedback: &Feedback) -> i32 {
        feedback
            .marks()
            .iter()
            .map(|mark| match mark {
                Mark::Exact => self.exact,
                Mark::Present => self.present,
                Mark::Absent => self.absent,
            })
            .sum()
    }
}

impl Default for RewardScheme {
    fn default() -> Self {
        Self {
            exact: 10,
            present: 6,
            absent: -3,
        }
    }
}

/// Settings shared by every episode created from it
#[derive(Debug, Clone)]
pub struct EpisodeConfig {
    pub max_guesses: usize,
    pub rewards: RewardScheme,
    /// Ranked on the first turn instead of the whole vocabulary; words
    /// missing from the vocabulary are ignored
    pub openers: Vec<String>,
    pub scorer: ScorerConfig,
}

impl Default for EpisodeConfig {
    fn default() -> Self {
        Self {
            max_guesses: DEFAULT_MAX_GUESSES,
            rewards: RewardScheme::default(),
            openers: DEFAULT_OPENERS.iter().map(ToString::to_string).collect(),
            scorer: ScorerConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn default_rewards() {
        let rewards = RewardScheme::default();
        let feedback = Feedback::classify(
            &Word::new("crane").unwrap(),
            &Word::new("crate").unwrap(),
        );
        // Four exact, one absent
        assert_eq!(rewards.reward(&feedback), 37);
    }

    #[test]
    fn rewards_use_multiplicity_aware_feedback() {
        let rewards = RewardScheme::default();
        // SPEED vs ERASE: three present, two absent
        let feedback = Feedback::classify(
            &Word::new("speed").unwrap(),
            &Word::new("erase").unwrap(),
        );
        assert_eq!(rewards.reward(&feedback), 3 * 6 - 2 * 3);
    }

    #[test]
    fn default_config() {
        let config = EpisodeConfig::default();
        assert_eq!(config.max_guesses, 6);
        assert_eq!(config.openers.len(), 5);
        assert_eq!(config.openers[0], "crane");
    }
}
