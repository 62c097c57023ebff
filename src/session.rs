//! Per-session game registry
//!
//! Each player session owns its own `Game`, looked up by a `SessionId`. The
//! map shard is held only to insert, look up or remove a session; a guess
//! locks just the session it targets, so independent sessions never wait on
//! each other and two guesses on the same session are serialized.

use crate::core::{DifficultyConfig, RoundStatus};
use crate::game::{Game, GameError, Turn};
use crate::scores::ScoreSink;
use crate::wordlists::WordSource;
use dashmap::{DashMap, mapref::entry::Entry as DMEntry};
use rand::RngCore;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tracing::debug;

/// Opaque session key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        u64::from_str_radix(s, 16).map(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("unknown session {0}")]
    UnknownSession(SessionId),
    #[error(transparent)]
    Game(#[from] GameError),
}

/// Read-only view of a session, everything a page needs to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub player: String,
    pub revealed: String,
    pub lives: i32,
    pub tried: Vec<String>,
    pub message: Option<String>,
    pub status: RoundStatus,
    pub gallows_stage: usize,
}

impl SessionSnapshot {
    fn of(game: &Game) -> Self {
        let round = game.round();
        Self {
            player: game.player().to_string(),
            revealed: round.revealed().to_string(),
            lives: game.display_lives(),
            tried: round.tried().iter().map(str::to_string).collect(),
            message: game.message().map(str::to_string),
            status: game.status(),
            gallows_stage: game.gallows_stage(),
        }
    }
}

/// Registry of active games keyed by session
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<SessionId, Arc<Mutex<Game>>>,
}

fn lock(game: &Mutex<Game>) -> MutexGuard<'_, Game> {
    // Guess evaluation has no panicking paths, so a poisoned game is still consistent
    game.lock().unwrap_or_else(PoisonError::into_inner)
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a round in a new session
    ///
    /// # Errors
    /// Returns `SessionError::Game` if no word could be drawn.
    pub fn start<S: WordSource + ?Sized>(
        &self,
        player: impl Into<String>,
        config: DifficultyConfig,
        source: &S,
        rng: &mut dyn RngCore,
    ) -> Result<SessionId, SessionError> {
        let game = Arc::new(Mutex::new(Game::start(player, config, source, rng)?));

        let id = loop {
            let candidate = SessionId(rng.next_u64());
            if let DMEntry::Vacant(slot) = self.sessions.entry(candidate) {
                slot.insert(game);
                break candidate;
            }
        };

        debug!(session = %id, active = self.sessions.len(), "session started");
        Ok(id)
    }

    fn get(&self, id: SessionId) -> Result<Arc<Mutex<Game>>, SessionError> {
        self.sessions
            .get(&id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or(SessionError::UnknownSession(id))
    }

    /// Submit a guess to a session
    ///
    /// # Errors
    /// - `SessionError::UnknownSession` if the session does not exist
    /// - `SessionError::Game` if the input is invalid or the round is over
    pub fn guess(
        &self,
        id: SessionId,
        raw: &str,
        sink: &dyn ScoreSink,
    ) -> Result<(Turn, SessionSnapshot), SessionError> {
        let session = self.get(id)?;
        let mut game = lock(&session);
        let turn = game.submit(raw, sink)?;
        Ok((turn, SessionSnapshot::of(&game)))
    }

    /// Current view of a session
    ///
    /// # Errors
    /// Returns `SessionError::UnknownSession` if the session does not exist.
    pub fn snapshot(&self, id: SessionId) -> Result<SessionSnapshot, SessionError> {
        let session = self.get(id)?;
        let game = lock(&session);
        Ok(SessionSnapshot::of(&game))
    }

    /// Remove a session, returning its final view
    ///
    /// # Errors
    /// Returns `SessionError::UnknownSession` if the session does not exist.
    pub fn end(&self, id: SessionId) -> Result<SessionSnapshot, SessionError> {
        let (_, session) = self
            .sessions
            .remove(&id)
            .ok_or(SessionError::UnknownSession(id))?;
        let game = lock(&session);

        debug!(session = %id, status = ?game.status(), "session ended");
        Ok(SessionSnapshot::of(&game))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
