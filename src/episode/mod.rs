//! Game episodes
//!
//! An [`Episode`] composes feedback, candidate narrowing and scoring into one
//! play-through. Policies drive episodes for simulation and training; the
//! session registry keeps many of them alive for a serving layer.

mod config;
mod error;
mod policy;
mod session;
mod state;

pub use config::{
    DEFAULT_MAX_GUESSES, DEFAULT_OPENERS, DEFAULT_SUGGESTIONS, EpisodeConfig, RewardScheme,
};
pub use error::{EpisodeError, GuessError, TargetError};
pub use policy::{EpisodeSummary, GreedyPolicy, Policy, SampledPolicy, play};
pub use session::{
    GuessReport, Session, SessionError, SessionId, SessionRegistry, SessionStart, TargetSource,
};
pub use state::{Episode, EpisodeStatus, StepOutcome};
