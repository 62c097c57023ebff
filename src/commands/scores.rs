//! Score board command

use crate::output::print_scoreboard;
use crate::scores::{ScoreError, ScoreFile, tally};

/// Print every recorded round and per-player totals
///
/// # Errors
///
/// Returns an error if the score file exists but cannot be read.
pub fn run_scores(file: &ScoreFile) -> Result<(), ScoreError> {
    let entries = file.read()?;
    let tallies = tally(&entries);
    print_scoreboard(&entries, &tallies);
    Ok(())
}
