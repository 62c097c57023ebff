//! Difficulty levels and their starting lives

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Difficulty level selected at round start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Round-start configuration derived from a difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyConfig {
    pub attempts: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty {0:?} (expected easy, medium or hard)")]
pub struct UnknownDifficulty(String);

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Lives a round starts with at this difficulty
    #[must_use]
    pub const fn attempts(self) -> i32 {
        match self {
            Self::Easy => 10,
            Self::Medium => 7,
            Self::Hard => 5,
        }
    }

    #[must_use]
    pub const fn config(self) -> DifficultyConfig {
        DifficultyConfig {
            attempts: self.attempts(),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl DifficultyConfig {
    /// Apply an explicit lives override, ignoring values below one
    #[must_use]
    pub fn with_lives(self, lives: Option<u32>) -> Self {
        match lives.and_then(|l| i32::try_from(l).ok()).filter(|&l| l >= 1) {
            Some(attempts) => Self { attempts },
            None => self,
        }
    }
}

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(UnknownDifficulty(s.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
