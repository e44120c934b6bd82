//! Candidate narrowing and guess ranking
//!
//! [`CandidateSet`] tracks the words consistent with all feedback so far;
//! [`LetterFrequencyScorer`] ranks them to suggest the next guess.

mod filter;
mod scorer;

pub use filter::{CandidateSet, is_consistent};
pub use scorer::{
    DEFAULT_FLOOR, DEFAULT_PREFERRED_BOOST, LetterFrequencyScorer, PositionalFrequencies,
    ScorerConfig, Suggestion, normalized,
};
