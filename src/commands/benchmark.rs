//! Benchmark command
//!
//! Plays the greedy policy against many targets in parallel.

use crate::core::{Vocabulary, Word};
use crate::episode::{Episode, EpisodeConfig, EpisodeError, EpisodeSummary, GreedyPolicy, play};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub wins: usize,
    pub losses: usize,
    pub win_rate: f64,
    /// Mean guesses over won games
    pub average_guesses: f64,
    pub average_reward: f64,
    /// Guess count of each won game
    pub distribution: BTreeMap<usize, usize>,
    /// Targets the policy failed on, sorted
    pub failures: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Play every target once with [`GreedyPolicy`]
///
/// # Errors
///
/// Returns the first episode error, e.g. a target of the wrong length.
pub fn run_benchmark(
    vocabulary: &Vocabulary,
    targets: &[Word],
    config: &EpisodeConfig,
    show_progress: bool,
) -> Result<BenchmarkResult, EpisodeError> {
    let start = Instant::now();

    let pb = if show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let summaries = targets
        .par_iter()
        .map(|target| -> Result<_, EpisodeError> {
            let mut episode = Episode::with_config(target.text(), vocabulary, config.clone())?;
            let summary = play(&mut episode, &mut GreedyPolicy)?;
            pb.inc(1);
            Ok((target.text(), summary))
        })
        .collect::<Result<Vec<_>, _>>()?;

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    Ok(summarize(&summaries, duration))
}

fn summarize(summaries: &[(&str, EpisodeSummary)], duration: Duration) -> BenchmarkResult {
    let total_words = summaries.len();
    let mut distribution = BTreeMap::new();
    let mut failures = Vec::new();
    let mut won_guesses = 0;
    let mut total_reward = 0_i64;

    for (target, summary) in summaries {
        total_reward += i64::from(summary.total_reward);
        if summary.won() {
            won_guesses += summary.guesses.len();
            *distribution.entry(summary.guesses.len()).or_insert(0) += 1;
        } else {
            failures.push((*target).to_string());
        }
    }
    failures.sort();

    let wins = total_words - failures.len();
    let ratio = |num: f64, den: usize| if den == 0 { 0.0 } else { num / den as f64 };

    BenchmarkResult {
        total_words,
        wins,
        losses: failures.len(),
        win_rate: ratio(wins as f64, total_words),
        average_guesses: ratio(won_guesses as f64, wins),
        average_reward: ratio(total_reward as f64, total_words),
        distribution,
        failures,
        duration,
        words_per_second: words_per_second(total_words, duration),
    }
}

fn words_per_second(words: usize, duration: Duration) -> f64 {
    let secs = duration.as_secs_f64();
    if secs > 0.0 { words as f64 / secs } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use crate::wordlists::{ALLOWED, ANSWERS};

    fn vocabulary() -> Vocabulary {
        Vocabulary::new(words_from_slice(ALLOWED)).unwrap()
    }

    #[test]
    fn benchmark_runs() {
        let vocabulary = vocabulary();
        let targets = words_from_slice(&ANSWERS[..10]);
        let result = run_benchmark(&vocabulary, &targets, &EpisodeConfig::default(), false).unwrap();

        assert_eq!(result.total_words, 10);
        assert_eq!(result.wins + result.losses, 10);
        assert!((0.0..=1.0).contains(&result.win_rate));
        if result.wins > 0 {
            assert!(result.average_guesses >= 1.0);
            assert!(result.average_guesses <= 6.0);
        }
    }

    #[test]
    fn benchmark_distribution_sums_to_wins() {
        let vocabulary = vocabulary();
        let targets = words_from_slice(&ANSWERS[..20]);
        let result = run_benchmark(&vocabulary, &targets, &EpisodeConfig::default(), false).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.wins);
        for &guess_count in result.distribution.keys() {
            assert!((1..=6).contains(&guess_count));
        }
    }

    #[test]
    fn small_vocabulary_is_always_solved() {
        let vocabulary = Vocabulary::from_strs(["crane", "slate", "trace", "crate", "caret"]).unwrap();
        let targets = vocabulary.words().to_vec();
        let result = run_benchmark(&vocabulary, &targets, &EpisodeConfig::default(), false).unwrap();

        assert_eq!(result.wins, 5);
        assert!(result.failures.is_empty());
        assert!((result.win_rate - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn one_guess_budget_records_failures() {
        let vocabulary = Vocabulary::from_strs(["crane", "slate", "trace", "crate", "caret"]).unwrap();
        let targets = words_from_slice(&["slate", "caret"]);
        let config = EpisodeConfig {
            max_guesses: 1,
            ..EpisodeConfig::default()
        };
        let result = run_benchmark(&vocabulary, &targets, &config, false).unwrap();

        assert!(result.losses >= 1);
        assert_eq!(result.losses, result.failures.len());
        assert!(result.failures.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn benchmark_empty_target_list() {
        let vocabulary = vocabulary();
        let result = run_benchmark(&vocabulary, &[], &EpisodeConfig::default(), false).unwrap();

        assert_eq!(result.total_words, 0);
        assert_eq!(result.wins, 0);
        assert!(result.win_rate.abs() < f64::EPSILON);
    }

    #[test]
    fn wrong_length_target_is_an_error() {
        let vocabulary = vocabulary();
        let targets = words_from_slice(&["cat"]);
        assert!(run_benchmark(&vocabulary, &targets, &EpisodeConfig::default(), false).is_err());
    }
}
