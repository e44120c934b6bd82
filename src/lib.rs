//! Wordle Environment
//!
//! A Wordle game environment for agents and people: multiplicity-correct
//! feedback, candidate narrowing, letter-frequency suggestions, per-letter
//! rewards and a state vector suitable for learning agents.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_env::core::Vocabulary;
//! use wordle_env::episode::Episode;
//!
//! let vocabulary = Vocabulary::from_strs(["crane", "slate", "trace", "crate", "caret"]).unwrap();
//! let mut episode = Episode::new("crate", &vocabulary).unwrap();
//! episode.reset();
//!
//! let outcome = episode.step_word("crane").unwrap();
//! assert_eq!(outcome.feedback.to_string(), "GGG-G");
//! assert_eq!(outcome.reward, 37);
//! assert_eq!(outcome.state, [2, 2, 2, -1, 2]);
//! assert!(!outcome.done);
//!
//! let best = episode.rank(1);
//! assert_eq!(best[0].word.text(), "crate");
//! ```

// Core domain types
pub mod core;

// Candidate filtering and scoring
pub mod solver;

// Game episodes, policies and sessions
pub mod episode;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;
