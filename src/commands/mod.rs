//! Command implementations

pub mod scores;
pub mod simple;

pub use scores::run_scores;
pub use simple::{SimpleSummary, play_rounds, run_simple};
