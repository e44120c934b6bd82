//! Command implementations

pub mod assist;
pub mod benchmark;
pub mod play;
pub mod solve;

pub use assist::{AssistOutcome, run_assist};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use play::{PlayConfig, run_play};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};

use std::io::{self, BufRead, Write};

/// Print a prompt and read one trimmed line
///
/// Returns `None` at end of input.
pub(crate) fn prompt<R: BufRead>(input: &mut R, message: &str) -> io::Result<Option<String>> {
    print!("{message}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
