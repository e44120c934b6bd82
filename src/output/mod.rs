//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_celebration, print_game_over, print_solve_result,
    print_suggestions, print_turn,
};
