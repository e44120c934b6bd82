//! Interactive game against a hidden target
//!
//! The player types guesses; each one is scored, the feedback shown, and the
//! next suggestions printed.

use super::prompt;
use crate::core::Vocabulary;
use crate::episode::{DEFAULT_SUGGESTIONS, Episode, EpisodeConfig, EpisodeError, EpisodeStatus};
use crate::output::{print_game_over, print_suggestions, print_turn};
use anyhow::Result;
use std::io::BufRead;

/// Settings for an interactive game
#[derive(Debug, Clone)]
pub struct PlayConfig {
    pub suggestions: usize,
    pub episode: EpisodeConfig,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            suggestions: DEFAULT_SUGGESTIONS,
            episode: EpisodeConfig::default(),
        }
    }
}

/// Play one game reading guesses from `input`
///
/// Returns the final status; `Active` if the player quit or input ended.
///
/// # Errors
///
/// Returns an error if the target is rejected or input cannot be read.
pub fn run_play<R: BufRead>(
    vocabulary: &Vocabulary,
    target: &str,
    config: &PlayConfig,
    mut input: R,
) -> Result<EpisodeStatus> {
    let mut episode = Episode::with_config(target, vocabulary, config.episode.clone())?;
    episode.reset();

    println!("\nGuess the {}-letter word.", vocabulary.word_len());
    println!(
        "You have {} guesses. Type 'quit' to give up.\n",
        config.episode.max_guesses
    );

    while !episode.is_terminal() {
        print_suggestions(&episode.rank_or_fallback(config.suggestions));

        let prompt_text = format!("Guess {}/{}", episode.turn_count() + 1, config.episode.max_guesses);
        let Some(line) = prompt(&mut input, &prompt_text)? else {
            break;
        };

        match line.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => {
                println!("The word was {}", episode.target().text().to_uppercase());
                return Ok(episode.status());
            }
            guess => match episode.step_word(guess) {
                Ok(outcome) => {
                    let word = &episode.history()[episode.turn_count() - 1].0;
                    print_turn(episode.turn_count(), word, &outcome.feedback, outcome.reward, outcome.remaining);
                }
                Err(EpisodeError::InvalidGuess(e)) => println!("❌ {e}\n"),
                Err(e) => return Err(e.into()),
            },
        }
    }

    if episode.is_terminal() {
        print_game_over(
            episode.status(),
            episode.target(),
            episode.history(),
            episode.total_reward(),
        );
    }

    Ok(episode.status())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn vocabulary() -> Vocabulary {
        Vocabulary::from_strs(["crane", "slate", "trace", "crate", "caret"]).unwrap()
    }

    #[test]
    fn winning_game() {
        let vocabulary = vocabulary();
        let input = Cursor::new("crane\ncrate\n");
        let status = run_play(&vocabulary, "crate", &PlayConfig::default(), input).unwrap();
        assert_eq!(status, EpisodeStatus::Won);
    }

    #[test]
    fn invalid_words_do_not_use_a_turn() {
        let vocabulary = vocabulary();
        let config = PlayConfig {
            episode: EpisodeConfig {
                max_guesses: 1,
                ..EpisodeConfig::default()
            },
            ..PlayConfig::default()
        };
        let input = Cursor::new("zebra\n\nCRATE\n");
        let status = run_play(&vocabulary, "crate", &config, input).unwrap();
        assert_eq!(status, EpisodeStatus::Won);
    }

    #[test]
    fn losing_game() {
        let vocabulary = vocabulary();
        let config = PlayConfig {
            episode: EpisodeConfig {
                max_guesses: 2,
                ..EpisodeConfig::default()
            },
            ..PlayConfig::default()
        };
        let input = Cursor::new("slate\ntrace\ncrate\n");
        let status = run_play(&vocabulary, "crate", &config, input).unwrap();
        assert_eq!(status, EpisodeStatus::Lost);
    }

    #[test]
    fn quitting_and_end_of_input_leave_game_active() {
        let vocabulary = vocabulary();
        let config = PlayConfig::default();
        let status = run_play(&vocabulary, "crate", &config, Cursor::new("slate\nquit\n")).unwrap();
        assert_eq!(status, EpisodeStatus::Active);

        let status = run_play(&vocabulary, "crate", &config, Cursor::new("")).unwrap();
        assert_eq!(status, EpisodeStatus::Active);
    }

    #[test]
    fn bad_target_is_an_error() {
        let vocabulary = vocabulary();
        assert!(run_play(&vocabulary, "cat", &PlayConfig::default(), Cursor::new("")).is_err());
    }
}
