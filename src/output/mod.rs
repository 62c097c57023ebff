//! Terminal output formatting
//!
//! Gallows artwork, display utilities for line mode and pretty-printing.

pub mod display;
pub mod formatters;
pub mod gallows;

pub use display::{clear_screen, print_round, print_round_end, print_scoreboard};
