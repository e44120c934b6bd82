//! Session registry for serving many concurrent games
//!
//! Each session owns one episode and is removed as soon as that episode
//! ends. The registry is a plain value owned by the serving layer; wrap it in
//! a lock there if handlers run on several threads.

use super::config::{DEFAULT_SUGGESTIONS, EpisodeConfig};
use super::error::EpisodeError;
use super::state::Episode;
use crate::core::{Feedback, Vocabulary, Word};
use crate::solver::Suggestion;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Opaque session handle, shown as 16 hex digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        u64::from_str_radix(s, 16).map(Self)
    }
}

/// Where a session's target came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSource {
    /// Drawn from an answer list
    Random,
    /// Supplied by a daily puzzle provider
    Daily,
    /// Chosen by the caller
    Fixed,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("unknown session {0}")]
    UnknownSession(SessionId),
    #[error("no targets to choose from")]
    NoTargets,
    #[error(transparent)]
    Episode(#[from] EpisodeError),
}

#[derive(Debug)]
pub struct Session<'v> {
    pub episode: Episode<'v>,
    pub source: TargetSource,
}

/// A freshly started session
#[derive(Debug)]
pub struct SessionStart<'v> {
    pub id: SessionId,
    pub suggestions: Vec<Suggestion<'v>>,
}

/// Everything a client needs after one guess
#[derive(Debug)]
pub struct GuessReport<'v> {
    pub feedback: Feedback,
    pub state: Vec<i8>,
    pub reward: i32,
    pub done: bool,
    pub suggestions: Vec<Suggestion<'v>>,
    /// Guesses made so far
    pub current_row: usize,
    pub source: TargetSource,
    /// Revealed once the game is over
    pub target: Option<Word>,
}

/// Live sessions keyed by id
pub struct SessionRegistry<'v> {
    vocabulary: &'v Vocabulary,
    config: EpisodeConfig,
    suggestions: usize,
    sessions: FxHashMap<SessionId, Session<'v>>,
}

impl<'v> SessionRegistry<'v> {
    #[must_use]
    pub fn new(vocabulary: &'v Vocabulary) -> Self {
        Self::with_config(vocabulary, EpisodeConfig::default(), DEFAULT_SUGGESTIONS)
    }

    #[must_use]
    pub fn with_config(
        vocabulary: &'v Vocabulary,
        config: EpisodeConfig,
        suggestions: usize,
    ) -> Self {
        Self {
            vocabulary,
            config,
            suggestions,
            sessions: FxHashMap::default(),
        }
    }

    /// Open a session against `target`
    ///
    /// # Errors
    /// `SessionError::Episode` if the target is rejected.
    pub fn start(
        &mut self,
        target: &str,
        source: TargetSource,
    ) -> Result<SessionStart<'v>, SessionError> {
        let mut episode = Episode::with_config(target, self.vocabulary, self.config.clone())?;
        episode.reset();
        let suggestions = episode.rank_or_fallback(self.suggestions);

        let id = self.fresh_id();
        self.sessions.insert(id, Session { episode, source });
        log::info!("session {id} started ({source:?}), {} live", self.sessions.len());

        Ok(SessionStart { id, suggestions })
    }

    /// Open a session against a target drawn uniformly from `answers`
    ///
    /// # Errors
    /// `SessionError::NoTargets` if `answers` is empty, otherwise as
    /// [`SessionRegistry::start`].
    pub fn start_random<R: Rng + ?Sized>(
        &mut self,
        answers: &[Word],
        rng: &mut R,
    ) -> Result<SessionStart<'v>, SessionError> {
        let target = answers.choose(rng).ok_or(SessionError::NoTargets)?;
        self.start(target.text(), TargetSource::Random)
    }

    /// Submit a guess; the session is closed when the game ends
    ///
    /// # Errors
    /// - `SessionError::UnknownSession` for an id that is not live
    /// - `SessionError::Episode` if the guess is rejected (the session stays
    ///   open and unchanged)
    pub fn guess(&mut self, id: SessionId, word: &str) -> Result<GuessReport<'v>, SessionError> {
        let session = self
            .sessions
            .get_mut(&id)
            .ok_or(SessionError::UnknownSession(id))?;

        let outcome = session.episode.step_word(word)?;
        let report = GuessReport {
            suggestions: session.episode.rank_or_fallback(self.suggestions),
            current_row: session.episode.turn_count(),
            source: session.source,
            target: outcome.done.then(|| session.episode.target().clone()),
            feedback: outcome.feedback,
            state: outcome.state,
            reward: outcome.reward,
            done: outcome.done,
        };

        if report.done {
            self.sessions.remove(&id);
            log::info!("session {id} finished, {} live", self.sessions.len());
        }

        Ok(report)
    }

    #[must_use]
    pub fn get(&self, id: SessionId) -> Option<&Session<'v>> {
        self.sessions.get(&id)
    }

    /// Close a session early
    pub fn end(&mut self, id: SessionId) -> Option<Session<'v>> {
        self.sessions.remove(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn fresh_id(&self) -> SessionId {
        loop {
            let id = SessionId(rand::random());
            if !self.sessions.contains_key(&id) {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn vocabulary() -> Vocabulary {
        Vocabulary::from_strs(["crane", "slate", "trace", "crate", "caret"]).unwrap()
    }

    #[test]
    fn session_lives_until_game_ends() {
        let vocabulary = vocabulary();
        let mut registry = SessionRegistry::new(&vocabulary);

        let start = registry.start("crate", TargetSource::Fixed).unwrap();
        assert_eq!(start.suggestions.len(), 5);
        assert_eq!(registry.len(), 1);

        let report = registry.guess(start.id, "crane").unwrap();
        assert!(!report.done);
        assert_eq!(report.reward, 37);
        assert_eq!(report.current_row, 1);
        assert!(report.target.is_none());
        assert_eq!(registry.len(), 1);

        let report = registry.guess(start.id, "CRATE").unwrap();
        assert!(report.done);
        assert_eq!(report.target.map(|w| w.text().to_string()), Some("crate".into()));
        assert!(registry.is_empty());

        assert!(matches!(
            registry.guess(start.id, "crate"),
            Err(SessionError::UnknownSession(_))
        ));
    }

    #[test]
    fn rejected_guess_keeps_session() {
        let vocabulary = vocabulary();
        let mut registry = SessionRegistry::new(&vocabulary);
        let start = registry.start("crate", TargetSource::Daily).unwrap();

        let err = registry.guess(start.id, "zebra").unwrap_err();
        assert!(matches!(err, SessionError::Episode(EpisodeError::InvalidGuess(_))));

        let session = registry.get(start.id).unwrap();
        assert_eq!(session.episode.turn_count(), 0);
        assert_eq!(session.source, TargetSource::Daily);
    }

    #[test]
    fn sessions_are_independent() {
        let vocabulary = vocabulary();
        let mut registry = SessionRegistry::new(&vocabulary);
        let a = registry.start("crate", TargetSource::Fixed).unwrap().id;
        let b = registry.start("slate", TargetSource::Fixed).unwrap().id;
        assert_ne!(a, b);

        registry.guess(a, "crane").unwrap();
        assert_eq!(registry.get(a).unwrap().episode.turn_count(), 1);
        assert_eq!(registry.get(b).unwrap().episode.turn_count(), 0);

        assert!(registry.end(b).is_some());
        assert!(registry.get(b).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn random_start_uses_answer_list() {
        let vocabulary = vocabulary();
        let mut registry = SessionRegistry::new(&vocabulary);
        let answers = vec![Word::new("caret").unwrap()];
        let mut rng = StdRng::seed_from_u64(1);

        let id = registry.start_random(&answers, &mut rng).unwrap().id;
        let session = registry.get(id).unwrap();
        assert_eq!(session.episode.target().text(), "caret");
        assert_eq!(session.source, TargetSource::Random);

        assert!(matches!(
            registry.start_random(&[], &mut rng),
            Err(SessionError::NoTargets)
        ));
    }

    #[test]
    fn invalid_target_is_rejected() {
        let vocabulary = vocabulary();
        let mut registry = SessionRegistry::new(&vocabulary);
        assert!(matches!(
            registry.start("cat", TargetSource::Fixed),
            Err(SessionError::Episode(EpisodeError::InvalidTarget { .. }))
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn session_id_round_trips_through_text() {
        let id = SessionId(0xdead_beef);
        assert_eq!(id.to_string(), "00000000deadbeef");
        assert_eq!("00000000deadbeef".parse::<SessionId>(), Ok(id));
    }
}
