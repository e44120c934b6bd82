//! Wordle Environment - CLI
//!
//! Play, get assistance, or watch the greedy policy solve words.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::io;
use wordle_env::{
    commands::{PlayConfig, SolveConfig, run_assist, run_benchmark, run_play, solve_word},
    core::{Vocabulary, Word},
    episode::{DEFAULT_MAX_GUESSES, DEFAULT_SUGGESTIONS, EpisodeConfig},
    logging,
    output::{print_benchmark_result, print_solve_result},
    wordlists::{
        ALLOWED, ANSWERS, choose_target,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_env",
    about = "Wordle game environment with letter-frequency suggestions and rewards",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default), 'answers', or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Guesses allowed per game
    #[arg(short = 'm', long, global = true, default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: usize,

    /// Number of suggestions to show
    #[arg(short = 'k', long, global = true, default_value_t = DEFAULT_SUGGESTIONS)]
    suggestions: usize,

    /// Seed for target selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Guess a hidden word (default)
    Play {
        /// Play against this word instead of a random answer
        #[arg(short, long)]
        target: Option<String>,
    },

    /// Get suggestions for a game played elsewhere
    Assist,

    /// Let the greedy policy solve a specific word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts, scores and rewards per turn
        #[arg(short, long)]
        details: bool,
    },

    /// Play the greedy policy over many answers
    Benchmark {
        /// Number of answers to test (default: all)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
}

/// Load wordlists based on the -w flag
///
/// Returns (`vocabulary`, `answers`)
/// - "all": every allowed word is guessable, targets come from the answers
/// - "answers": answers only, for both
/// - "<path>": custom word list; targets are the answers it contains, or the
///   whole list if it holds none
fn load_wordlists(wordlist_mode: &str) -> Result<(Vocabulary, Vec<Word>)> {
    let (words, answers) = match wordlist_mode {
        "all" => (words_from_slice(ALLOWED), words_from_slice(ANSWERS)),
        "answers" => {
            let answers = words_from_slice(ANSWERS);
            (answers.clone(), answers)
        }
        path => {
            let custom = load_from_file(path)
                .with_context(|| format!("failed to read word list '{path}'"))?;
            (custom, Vec::new())
        }
    };

    let vocabulary = Vocabulary::new(words).context("invalid word list")?;
    let mut answers: Vec<Word> = answers
        .into_iter()
        .filter(|answer| vocabulary.contains(answer.text()))
        .collect();
    if answers.is_empty() {
        answers = vocabulary.words().to_vec();
    }

    log::debug!(
        "vocabulary of {} words, {} possible targets",
        vocabulary.len(),
        answers.len()
    );
    Ok((vocabulary, answers))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if cli.max_guesses == 0 {
        bail!("--max-guesses must be at least 1");
    }

    let (vocabulary, answers) = load_wordlists(&cli.wordlist)?;
    let mut rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    let play_config = PlayConfig {
        suggestions: cli.suggestions,
        episode: EpisodeConfig {
            max_guesses: cli.max_guesses,
            ..EpisodeConfig::default()
        },
    };

    let command = cli.command.unwrap_or(Commands::Play { target: None });

    match command {
        Commands::Play { target } => {
            let target = match target {
                Some(word) => word,
                None => choose_target(&answers, &mut rng)
                    .context("no targets available")?
                    .text()
                    .to_string(),
            };
            run_play(&vocabulary, &target, &play_config, io::stdin().lock())?;
        }
        Commands::Assist => {
            run_assist(&vocabulary, &play_config, io::stdin().lock())?;
        }
        Commands::Solve { word, details } => {
            let config = SolveConfig {
                target: word,
                episode: play_config.episode,
            };
            let result = solve_word(&vocabulary, config)?;
            print_solve_result(&result, details);
        }
        Commands::Benchmark { count } => {
            let targets: Vec<Word> = match count {
                Some(n) if n < answers.len() => {
                    answers.choose_multiple(&mut rng, n).cloned().collect()
                }
                _ => answers,
            };
            println!("🎯 Testing {} words...", targets.len());
            let result = run_benchmark(&vocabulary, &targets, &play_config.episode, true)?;
            print_benchmark_result(&result);
        }
    }

    Ok(())
}
