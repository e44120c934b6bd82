//! Display functions for command results

use super::formatters::{colored_guess, probability_bar};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::{Feedback, Word};
use crate::episode::EpisodeStatus;
use crate::solver::{Suggestion, normalized};
use colored::Colorize;

/// Print ranked suggestions with their share of the listed score mass
pub fn print_suggestions(suggestions: &[Suggestion<'_>]) {
    if suggestions.is_empty() {
        println!("No suggestions available.\n");
        return;
    }

    println!("\n💡 {}", "Suggestions:".bright_cyan().bold());
    for (rank, (suggestion, probability)) in suggestions.iter().zip(normalized(suggestions)).enumerate() {
        println!(
            "   {:>2}. {}  [{}] {:5.1}%",
            rank + 1,
            suggestion.word.text().to_uppercase().bright_white().bold(),
            probability_bar(probability, 20).green(),
            probability * 100.0
        );
    }
    println!();
}

/// Print one scored guess
pub fn print_turn(turn: usize, word: &Word, feedback: &Feedback, reward: i32, remaining: usize) {
    let reward_text = format!("{reward:+}");
    let reward_text = if reward >= 0 {
        reward_text.green()
    } else {
        reward_text.red()
    };
    println!(
        "\nTurn {turn}: {}  {}  reward {reward_text}  ({remaining} candidates left)\n",
        colored_guess(word, feedback),
        feedback.to_emoji(),
    );
}

/// Print the winning banner with the guess history
pub fn print_celebration(history: &[(Word, Feedback)]) {
    let turn = history.len();

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "    🎉 🎊 ✨  W O R D L E   S O L V E D !  ✨ 🎊 🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    let performance = match turn {
        1 => ("🏆 Perfect!", "Incredible hole-in-one!"),
        2 => ("⭐ Excellent!", "Outstanding performance!"),
        3 => ("💫 Great!", "Very well played!"),
        4 => ("✨ Good!", "Nice work!"),
        5 => ("👍 Solved!", "Got it!"),
        _ => ("✓ Complete!", "Success!"),
    };

    println!("\n  {}", performance.0.bright_yellow().bold());
    println!("  {}", performance.1.bright_white());
    println!(
        "\n  Solution found in {} {}",
        turn.to_string().bright_cyan().bold(),
        if turn == 1 { "guess" } else { "guesses" }
    );

    println!("\n  Guess history:");
    for (i, (word, feedback)) in history.iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            word.text().to_uppercase().bright_white().bold(),
            feedback.to_emoji()
        );
    }

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}

/// Print how a played game ended
pub fn print_game_over(status: EpisodeStatus, target: &Word, history: &[(Word, Feedback)], total_reward: i32) {
    match status {
        EpisodeStatus::Won => print_celebration(history),
        EpisodeStatus::Lost => println!(
            "\n{} The word was {}",
            "❌ Out of guesses!".red().bold(),
            target.text().to_uppercase().bright_yellow().bold()
        ),
        EpisodeStatus::Active => return,
    }
    println!("Total reward: {}\n", total_reward.to_string().bright_cyan().bold());
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}",
            turn,
            step.word.to_uppercase(),
            step.feedback.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Score:      {:.3e}", step.score);
            println!("  Reward:     {:+}", step.reward);
            println!("  State:      {:?}", step.feedback.to_state());
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
    println!("Total reward: {}", result.total_reward);
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate * 100.0).bright_yellow().bold()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("   Average reward:   {:.1}", result.average_reward);
    println!(
        "   Losses:           {}",
        format!("{}", result.losses).red()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.wins > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for (&guess_count, &count) in &result.distribution {
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    if !result.failures.is_empty() {
        println!("\n❌ {}", "Failed words:".red().bold());
        for word in result.failures.iter().take(20) {
            println!("   • {}", word.to_uppercase());
        }
        if result.failures.len() > 20 {
            println!("   … and {} more", result.failures.len() - 20);
        }
    }
}
