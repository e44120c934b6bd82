//! Assistant mode for an outside game
//!
//! The target is unknown: the user plays elsewhere, reports the feedback they
//! got, and the candidate set narrows accordingly.

use super::play::PlayConfig;
use super::prompt;
use crate::core::{Feedback, FeedbackParseError, Vocabulary, Word, WordError};
use crate::output::{print_celebration, print_suggestions};
use crate::solver::{CandidateSet, LetterFrequencyScorer, PositionalFrequencies, Suggestion};
use anyhow::Result;
use std::io::BufRead;
use thiserror::Error;

/// Where the assistant stopped
#[derive(Debug, Clone, PartialEq)]
pub struct AssistOutcome {
    pub history: Vec<(Word, Feedback)>,
    /// Candidates consistent with `history`
    pub remaining: usize,
    pub solved: bool,
}

#[derive(Debug, Error)]
enum EntryError {
    #[error("no suggestion to apply feedback to, enter 'WORD FEEDBACK'")]
    NoSuggestion,
    #[error("expected 'FEEDBACK' or 'WORD FEEDBACK'")]
    Malformed,
    #[error(transparent)]
    Word(#[from] WordError),
    #[error(transparent)]
    Feedback(#[from] FeedbackParseError),
    #[error("expected {expected} letters, got {found}")]
    Length { expected: usize, found: usize },
}

/// Run the assistant, reading feedback lines from `input`
///
/// Each line is either a feedback string for the suggested word, a
/// `WORD FEEDBACK` pair, or one of `undo`, `new` and `quit`.
///
/// # Errors
///
/// Returns an error if input cannot be read.
pub fn run_assist<R: BufRead>(
    vocabulary: &Vocabulary,
    config: &PlayConfig,
    mut input: R,
) -> Result<AssistOutcome> {
    let scorer = LetterFrequencyScorer::new(config.episode.scorer.clone());
    let openers: Vec<usize> = config
        .episode
        .openers
        .iter()
        .filter_map(|opener| vocabulary.index_of(opener))
        .collect();

    println!("\nEnter the feedback you got for each guess:");
    println!("  - G/g/🟩 for correct position");
    println!("  - Y/y/🟨 for wrong position");
    println!("  - -/_/⬜ for not in word");
    println!("Type just the feedback to use my suggestion, or 'WORD FEEDBACK' for your own guess.");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n");

    let mut history: Vec<(Word, Feedback)> = Vec::new();
    let mut candidates = CandidateSet::full(vocabulary);
    let mut solved = false;

    loop {
        let opening = if history.is_empty() { openers.as_slice() } else { &[] };
        let ranked = suggestions(&scorer, &candidates, opening, config.suggestions);

        if candidates.is_empty() {
            println!("\n❌ No candidates remain! Your feedback may be incorrect.");
            println!("Type 'undo' to go back, or 'new' to start over.\n");
        } else {
            println!("────────────────────────────────────────────────────────────");
            println!("Turn {}: {} candidates remaining", history.len() + 1, candidates.len());
            println!("────────────────────────────────────────────────────────────");
            print_suggestions(&ranked);

            if candidates.len() <= 10 {
                println!("Remaining candidates:");
                for candidate in candidates.words() {
                    println!("  • {}", candidate.text().to_uppercase());
                }
                println!();
            }
        }

        let suggested = ranked.first().map(|s| s.word);
        let Some(line) = prompt(&mut input, "Feedback (G/Y/-), 'WORD FEEDBACK', or command")? else {
            break;
        };

        match line.to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                break;
            }
            "new" | "n" => {
                history.clear();
                candidates = CandidateSet::full(vocabulary);
                println!("\n🔄 New game started!\n");
            }
            "undo" | "u" => {
                if history.pop().is_some() {
                    candidates = CandidateSet::from_history(vocabulary, &history);
                    println!("✓ Undone! Back to turn {}\n", history.len() + 1);
                } else {
                    println!("Nothing to undo!\n");
                }
            }
            entry => match parse_entry(entry, suggested, vocabulary.word_len()) {
                Ok((word, feedback)) => {
                    let removed = candidates.narrow(&word, &feedback);
                    log::debug!("{word} {feedback} removed {removed} candidates");
                    solved = feedback.is_perfect();
                    history.push((word, feedback));
                    if solved {
                        print_celebration(&history);
                        break;
                    }
                }
                Err(e) => println!("❌ {e}\n"),
            },
        }
    }

    Ok(AssistOutcome {
        remaining: candidates.len(),
        history,
        solved,
    })
}

fn suggestions<'v>(
    scorer: &LetterFrequencyScorer,
    candidates: &CandidateSet<'v>,
    openers: &[usize],
    k: usize,
) -> Vec<Suggestion<'v>> {
    if openers.is_empty() {
        return scorer.rank(candidates, k);
    }
    let words = candidates.vocabulary().words();
    let frequencies = PositionalFrequencies::from_candidates(candidates);
    scorer.rank_pool(&frequencies, openers.iter().map(|&i| (i, &words[i])), k)
}

fn parse_entry(
    entry: &str,
    suggested: Option<&Word>,
    word_len: usize,
) -> Result<(Word, Feedback), EntryError> {
    let mut parts = entry.split_whitespace();
    let (word, pattern) = match (parts.next(), parts.next(), parts.next()) {
        (Some(pattern), None, None) => (suggested.cloned().ok_or(EntryError::NoSuggestion)?, pattern),
        (Some(word), Some(pattern), None) => (Word::new(word)?, pattern),
        _ => return Err(EntryError::Malformed),
    };

    if word.len() != word_len {
        return Err(EntryError::Length {
            expected: word_len,
            found: word.len(),
        });
    }

    let feedback = match pattern {
        "win" | "correct" | "solved" => Feedback::perfect(word.len()),
        _ => pattern.parse::<Feedback>()?,
    };
    if feedback.len() != word.len() {
        return Err(EntryError::Length {
            expected: word.len(),
            found: feedback.len(),
        });
    }

    Ok((word, feedback))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn vocabulary() -> Vocabulary {
        Vocabulary::from_strs(["crane", "slate", "trace", "crate", "caret"]).unwrap()
    }

    fn assist(vocabulary: &Vocabulary, input: &str) -> AssistOutcome {
        run_assist(vocabulary, &PlayConfig::default(), Cursor::new(input.to_string())).unwrap()
    }

    #[test]
    fn explicit_word_and_feedback() {
        let vocabulary = vocabulary();
        let outcome = assist(&vocabulary, "slate --GGG\n");

        assert!(!outcome.solved);
        assert_eq!(outcome.history.len(), 1);
        assert_eq!(outcome.history[0].0.text(), "slate");
        assert_eq!(outcome.remaining, 1);
    }

    #[test]
    fn perfect_feedback_solves() {
        let vocabulary = vocabulary();
        let outcome = assist(&vocabulary, "crane ggggg\nslate -----\n");

        assert!(outcome.solved);
        assert_eq!(outcome.history.len(), 1);
        assert_eq!(outcome.remaining, 1);
    }

    #[test]
    fn win_applies_to_suggested_word() {
        let vocabulary = vocabulary();
        let outcome = assist(&vocabulary, "win\n");

        assert!(outcome.solved);
        assert!(outcome.history[0].1.is_perfect());
        assert!(vocabulary.contains(outcome.history[0].0.text()));
    }

    #[test]
    fn bare_feedback_uses_suggestion() {
        let vocabulary = vocabulary();
        let outcome = assist(&vocabulary, "-----\n");

        assert_eq!(outcome.history.len(), 1);
        assert!(crate::episode::DEFAULT_OPENERS.contains(&outcome.history[0].0.text()));
    }

    #[test]
    fn undo_recomputes_candidates() {
        let vocabulary = vocabulary();
        let outcome = assist(&vocabulary, "slate --GGG\nundo\n");

        assert!(outcome.history.is_empty());
        assert_eq!(outcome.remaining, 5);
    }

    #[test]
    fn new_game_clears_history() {
        let vocabulary = vocabulary();
        let outcome = assist(&vocabulary, "slate --GGG\ncrate GGGG-\nnew\nquit\n");

        assert!(outcome.history.is_empty());
        assert_eq!(outcome.remaining, 5);
    }

    #[test]
    fn malformed_entries_are_ignored() {
        let vocabulary = vocabulary();
        let outcome = assist(&vocabulary, "slate GG\nxyz\nslate --GGG extra\ncat ---\n\n");

        assert!(outcome.history.is_empty());
        assert!(!outcome.solved);
    }

    #[test]
    fn contradictory_feedback_empties_candidates() {
        let vocabulary = vocabulary();
        let outcome = assist(&vocabulary, "slate --GGG\ncrate -----\n");

        assert_eq!(outcome.history.len(), 2);
        assert_eq!(outcome.remaining, 0);
    }

    #[test]
    fn parse_entry_errors() {
        let word = Word::new("crane").unwrap();
        assert!(matches!(parse_entry("gg-yy", None, 5), Err(EntryError::NoSuggestion)));
        assert!(matches!(parse_entry("a b c", Some(&word), 5), Err(EntryError::Malformed)));
        assert!(matches!(
            parse_entry("gg", Some(&word), 5),
            Err(EntryError::Length { expected: 5, found: 2 })
        ));
        assert!(matches!(parse_entry("cr4ne gg---", None, 5), Err(EntryError::Word(_))));
        assert!(matches!(parse_entry("gg-?y", Some(&word), 5), Err(EntryError::Feedback(_))));

        let (parsed, feedback) = parse_entry("slate y-g--", Some(&word), 5).unwrap();
        assert_eq!(parsed.text(), "slate");
        assert_eq!(feedback.to_string(), "Y-G--");
    }
}
