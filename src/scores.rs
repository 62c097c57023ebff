//! Score keeping
//!
//! Finished rounds are appended to a plain text file, one `<player> - won` or
//! `<player> - lost` line per round. Recording is best-effort: callers log a
//! failure and carry on.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default score file, relative to the working directory
pub const DEFAULT_SCORE_FILE: &str = "scores.txt";

const WON: &str = "won";
const LOST: &str = "lost";
const SEPARATOR: &str = " - ";

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("could not write score to {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("could not read scores from {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
}

/// Destination for finished round results
pub trait ScoreSink {
    /// Record one finished round
    ///
    /// # Errors
    /// Returns `ScoreError` if the result could not be stored.
    fn record(&self, player: &str, won: bool) -> Result<(), ScoreError>;
}

/// Sink that keeps nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ScoreSink for NullSink {
    fn record(&self, _player: &str, _won: bool) -> Result<(), ScoreError> {
        Ok(())
    }
}

/// One line of the score file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    pub player: String,
    pub won: bool,
}

impl ScoreEntry {
    /// Parse a `<player> - won|lost` line
    ///
    /// The player name may itself contain the separator; the result is
    /// whatever follows the last one.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let (player, result) = line.trim().rsplit_once(SEPARATOR)?;
        let won = match result.trim() {
            WON => true,
            LOST => false,
            _ => return None,
        };
        Some(Self {
            player: player.to_string(),
            won,
        })
    }
}

impl fmt::Display for ScoreEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = if self.won { WON } else { LOST };
        write!(f, "{}{SEPARATOR}{result}", self.player)
    }
}

/// Append-only score file
#[derive(Debug, Clone)]
pub struct ScoreFile {
    path: PathBuf,
}

impl ScoreFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every well-formed entry, oldest first
    ///
    /// A missing file reads as no scores.
    ///
    /// # Errors
    /// Returns `ScoreError::Read` if the file exists but cannot be read.
    pub fn read(&self) -> Result<Vec<ScoreEntry>, ScoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(ScoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        Ok(content.lines().filter_map(ScoreEntry::parse).collect())
    }
}

impl ScoreSink for ScoreFile {
    fn record(&self, player: &str, won: bool) -> Result<(), ScoreError> {
        let entry = ScoreEntry {
            player: player.to_string(),
            won,
        };
        let write_err = |source| ScoreError::Write {
            path: self.path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(write_err)?;
        writeln!(file, "{entry}").map_err(write_err)
    }
}

/// Totals for one player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerTally {
    pub player: String,
    pub wins: usize,
    pub losses: usize,
}

/// Tally entries per player, most wins first, then by name
#[must_use]
pub fn tally(entries: &[ScoreEntry]) -> Vec<PlayerTally> {
    let mut totals: rustc_hash::FxHashMap<&str, (usize, usize)> = rustc_hash::FxHashMap::default();
    for entry in entries {
        let total = totals.entry(entry.player.as_str()).or_insert((0, 0));
        if entry.won {
            total.0 += 1;
        } else {
            total.1 += 1;
        }
    }

    let mut tallies: Vec<PlayerTally> = totals
        .into_iter()
        .map(|(player, (wins, losses))| PlayerTally {
            player: player.to_string(),
            wins,
            losses,
        })
        .collect();
    tallies.sort_by(|a, b| b.wins.cmp(&a.wins).then_with(|| a.player.cmp(&b.player)));
    tallies
}
