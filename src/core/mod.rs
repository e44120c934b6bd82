//! Core domain types
//!
//! Words, the vocabulary they are drawn from, and the feedback a guess
//! receives. Everything here is pure and shared read-only between episodes.

mod feedback;
mod vocabulary;
mod word;

pub use feedback::{Feedback, FeedbackParseError, Mark};
pub use vocabulary::{Vocabulary, VocabularyError};
pub use word::{MAX_WORD_LEN, Word, WordError};
