//! Episode errors
//!
//! Every error leaves the episode exactly as it was before the call.

use super::EpisodeStatus;
use crate::core::WordError;
use thiserror::Error;

/// Why a guess was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("index {index} is out of range for a vocabulary of {len} words")]
    OutOfRange { index: usize, len: usize },
    #[error("'{0}' is not in the vocabulary")]
    NotInVocabulary(String),
}

/// Why a target was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    #[error(transparent)]
    Word(#[from] WordError),
    #[error("target has {found} letters but vocabulary words have {expected}")]
    LengthMismatch { expected: usize, found: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EpisodeError {
    #[error("invalid guess: {0}")]
    InvalidGuess(#[from] GuessError),
    #[error("episode is already {status}")]
    InvalidTransition { status: EpisodeStatus },
    #[error("invalid target '{target}': {reason}")]
    InvalidTarget {
        target: String,
        #[source]
        reason: TargetError,
    },
}
