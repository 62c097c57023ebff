//! One player's game
//!
//! `Game` wraps a round with everything the front ends share: input
//! validation, refusing guesses once the round is over, keeping the last
//! message for display and reporting the result to a score sink exactly once.
//! The line mode, the TUI and the session registry all drive rounds through it.

use crate::core::{DifficultyConfig, Guess, GuessError, Outcome, RoundState, RoundStatus};
use crate::output::gallows;
use crate::scores::ScoreSink;
use crate::wordlists::{NoWordsAvailableError, WordSource};
use rand::RngCore;
use rand::prelude::IndexedRandom;
use thiserror::Error;
use tracing::{debug, info, warn};

const WIN_REMARKS: [&str; 2] = ["Congratulations! You won!", "Well done, you found the word!"];
const LOSS_REMARKS: [&str; 2] = [
    "Unfortunately, that's a defeat.",
    "No luck this time! Try again.",
];

/// Message shown when input is rejected before evaluation
pub const INVALID_INPUT_MESSAGE: &str = "Please enter letters only.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    InvalidInput(#[from] GuessError),
    #[error("the round is already over")]
    RoundOver,
    #[error(transparent)]
    NoWordsAvailable(#[from] NoWordsAvailableError),
}

/// Result of one accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Guess,
    pub outcome: Outcome,
    pub status: RoundStatus,
}

/// A round being played by one player
#[derive(Debug, Clone)]
pub struct Game {
    player: String,
    round: RoundState,
    starting_lives: i32,
    /// Guesses already tried when this game took the round over
    prior_guesses: usize,
    message: Option<String>,
    recorded: bool,
}

impl Game {
    /// Draw a word from `source` and start a round
    ///
    /// # Errors
    /// Returns `GameError::NoWordsAvailable` if the source is empty.
    pub fn start<S: WordSource + ?Sized>(
        player: impl Into<String>,
        config: DifficultyConfig,
        source: &S,
        rng: &mut dyn RngCore,
    ) -> Result<Self, GameError> {
        let secret = source.choose(rng)?;
        let round = RoundState::start(secret, config, rng);
        Ok(Self::from_round(player, round))
    }

    /// Play an already prepared round
    ///
    /// The round may be a resumed one; lives shown to the player are counted
    /// from the lives it holds now.
    #[must_use]
    pub fn from_round(player: impl Into<String>, round: RoundState) -> Self {
        let player = player.into();
        info!(
            player = %player,
            letters = round.secret().len(),
            lives = round.lives(),
            "round started"
        );

        Self {
            player,
            starting_lives: round.lives(),
            prior_guesses: round.tried().len(),
            round,
            message: None,
            recorded: false,
        }
    }

    /// Validate and evaluate raw player input
    ///
    /// When the guess ends the round, the result goes to `sink`. A sink
    /// failure is logged and does not affect the returned turn.
    ///
    /// # Errors
    /// - `GameError::RoundOver` if the round was already won or lost; a
    ///   result not yet reported goes to `sink` first
    /// - `GameError::InvalidInput` if the input is not letters only; the
    ///   round is unchanged
    pub fn submit(&mut self, raw: &str, sink: &dyn ScoreSink) -> Result<Turn, GameError> {
        let status = self.status();
        if status.is_over() {
            self.finish(status == RoundStatus::Won, sink);
            return Err(GameError::RoundOver);
        }

        let guess = match Guess::parse(raw) {
            Ok(guess) => guess,
            Err(e) => {
                self.message = Some(INVALID_INPUT_MESSAGE.to_string());
                return Err(e.into());
            }
        };

        let outcome = self.round.guess(&guess);
        let status = self.round.status();
        self.message = Some(outcome.message().to_string());

        debug!(
            guess = %guess,
            ?outcome,
            lives = self.round.lives(),
            revealed = %self.round.revealed(),
            "guess evaluated"
        );

        if status.is_over() {
            self.finish(status == RoundStatus::Won, sink);
        }

        Ok(Turn {
            guess,
            outcome,
            status,
        })
    }

    fn finish(&mut self, won: bool, sink: &dyn ScoreSink) {
        if self.recorded {
            return;
        }
        self.recorded = true;

        info!(player = %self.player, won, word = %self.round.secret(), "round finished");
        if let Err(e) = sink.record(&self.player, won) {
            warn!(error = %e, "failed to record score");
        }
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.round.status()
    }

    #[must_use]
    pub const fn round(&self) -> &RoundState {
        &self.round
    }

    #[must_use]
    pub fn player(&self) -> &str {
        &self.player
    }

    #[must_use]
    pub const fn starting_lives(&self) -> i32 {
        self.starting_lives
    }

    /// Message produced by the last submission, if any
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Gallows stage for the lives left
    ///
    /// A won round keeps showing the stage it was won at instead of the
    /// zero-lives win marker.
    #[must_use]
    pub fn gallows_stage(&self) -> usize {
        gallows::stage_for_lives(self.display_lives())
    }

    /// Lives to show the player
    ///
    /// After a whole-word win the round holds 0 lives as a win marker; the
    /// lives lost to wrong guesses made in this game are counted instead.
    #[must_use]
    pub fn display_lives(&self) -> i32 {
        if self.status() != RoundStatus::Won || self.round.lives() > 0 {
            return self.round.lives();
        }

        let secret = self.round.secret();
        let lost: i32 = self
            .round
            .tried()
            .iter()
            .skip(self.prior_guesses)
            .map(|guess| {
                let mut chars = guess.chars();
                match (chars.next(), chars.next()) {
                    (Some(letter), None) if !secret.has_letter(letter) => 1,
                    (Some(_), Some(_)) if guess != secret.text() => 3,
                    _ => 0,
                }
            })
            .sum();
        self.starting_lives - lost
    }
}

/// Pick a closing remark matching the result of a finished round
#[must_use]
pub fn closing_remark(won: bool, rng: &mut dyn RngCore) -> &'static str {
    let remarks: &[&str] = if won { &WIN_REMARKS } else { &LOSS_REMARKS };
    remarks.choose(rng).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Difficulty, SecretWord, TriedGuesses};
    use crate::scores::{NullSink, ScoreError};
    use crate::wordlists::WordList;
    use crate::wordlists::loader::words_from_slice;
    use rand::{SeedableRng, rngs::StdRng};
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemorySink {
        results: RefCell<Vec<(String, bool)>>,
    }

    impl ScoreSink for MemorySink {
        fn record(&self, player: &str, won: bool) -> Result<(), ScoreError> {
            self.results.borrow_mut().push((player.to_string(), won));
            Ok(())
        }
    }

    struct FailingSink;

    impl ScoreSink for FailingSink {
        fn record(&self, _player: &str, _won: bool) -> Result<(), ScoreError> {
            Err(ScoreError::Write {
                path: "unwritable".into(),
                source: std::io::Error::other("disk full"),
            })
        }
    }

    fn game(secret: &str, lives: i32) -> Game {
        Game::from_round(
            "tester",
            RoundState::hidden(SecretWord::new(secret).unwrap(), lives),
        )
    }

    #[test]
    fn start_draws_from_source() {
        let source = WordList::new("single", words_from_slice(&["renard"]));
        let mut rng = StdRng::seed_from_u64(3);

        let game = Game::start("alice", Difficulty::Easy.config(), &source, &mut rng).unwrap();

        assert_eq!(game.round().secret().text(), "renard");
        assert_eq!(game.round().lives(), 10);
        assert_eq!(game.player(), "alice");
        assert_eq!(game.status(), RoundStatus::Active);
        assert_eq!(game.message(), None);
    }

    #[test]
    fn start_with_empty_source_fails() {
        let source = WordList::new("nothing", Vec::new());
        let mut rng = StdRng::seed_from_u64(3);

        let result = Game::start("alice", Difficulty::Easy.config(), &source, &mut rng);
        assert!(matches!(result, Err(GameError::NoWordsAvailable(_))));
    }

    #[test]
    fn invalid_input_leaves_round_unchanged() {
        let mut game = game("chat", 5);
        let before = game.round().clone();

        let result = game.submit("c4t", &NullSink);

        assert!(matches!(result, Err(GameError::InvalidInput(_))));
        assert_eq!(game.round(), &before);
        assert_eq!(game.message(), Some(INVALID_INPUT_MESSAGE));
    }

    #[test]
    fn submit_reports_outcome_and_message() {
        let mut game = game("banana", 5);

        let turn = game.submit(" a ", &NullSink).unwrap();

        assert_eq!(turn.guess, Guess::Letter('a'));
        assert_eq!(turn.outcome, Outcome::LetterFound { revealed: 3 });
        assert_eq!(turn.status, RoundStatus::Active);
        assert_eq!(game.message(), Some("Well done!"));

        game.submit("a", &NullSink).unwrap();
        assert_eq!(game.message(), Some("already tried"));
    }

    #[test]
    fn win_is_recorded_once_and_round_closes() {
        let sink = MemorySink::default();
        let mut game = game("chat", 5);

        let turn = game.submit("chat", &sink).unwrap();
        assert_eq!(turn.status, RoundStatus::Won);

        assert_eq!(game.submit("c", &sink), Err(GameError::RoundOver));
        assert_eq!(*sink.results.borrow(), vec![("tester".to_string(), true)]);
    }

    #[test]
    fn loss_is_recorded() {
        let sink = MemorySink::default();
        let mut game = game("chat", 2);

        game.submit("x", &sink).unwrap();
        let turn = game.submit("y", &sink).unwrap();

        assert_eq!(turn.status, RoundStatus::Lost);
        assert_eq!(*sink.results.borrow(), vec![("tester".to_string(), false)]);
    }

    #[test]
    fn sink_failure_does_not_change_outcome() {
        let mut game = game("chat", 1);

        let turn = game.submit("z", &FailingSink).unwrap();

        assert_eq!(turn.status, RoundStatus::Lost);
        assert_eq!(turn.outcome, Outcome::LetterMissing);
    }

    #[test]
    fn display_lives_ignores_win_marker() {
        let mut game = game("chat", 9);
        game.submit("z", &NullSink).unwrap();
        game.submit("chien", &NullSink).unwrap();
        game.submit("c", &NullSink).unwrap();
        game.submit("chat", &NullSink).unwrap();

        assert_eq!(game.round().lives(), 0);
        assert_eq!(game.status(), RoundStatus::Won);
        assert_eq!(game.display_lives(), 5);
        assert_eq!(game.gallows_stage(), 4);
    }

    #[test]
    fn display_lives_while_active() {
        let mut game = game("chat", 9);
        game.submit("z", &NullSink).unwrap();
        assert_eq!(game.display_lives(), 8);
        assert_eq!(game.starting_lives(), 9);
    }

    #[test]
    fn display_lives_after_resume_counts_new_guesses_only() {
        let secret = SecretWord::new("chat").unwrap();
        let tried: TriedGuesses = ["z", "chien"].into_iter().collect();
        let round = RoundState::from_parts(secret, "____", tried, 6).unwrap();
        let mut game = Game::from_round("tester", round);

        game.submit("y", &NullSink).unwrap();
        game.submit("chat", &NullSink).unwrap();

        assert_eq!(game.status(), RoundStatus::Won);
        assert_eq!(game.display_lives(), 5);
    }

    #[test]
    fn finished_round_is_recorded_on_next_submit() {
        let sink = MemorySink::default();
        let secret = SecretWord::new("loup").unwrap();
        let round = RoundState::from_parts(secret, "loup", TriedGuesses::new(), 5).unwrap();
        let mut game = Game::from_round("tester", round);

        assert_eq!(game.submit("b", &sink), Err(GameError::RoundOver));
        assert_eq!(game.submit("c", &sink), Err(GameError::RoundOver));
        assert_eq!(*sink.results.borrow(), vec![("tester".to_string(), true)]);
    }

    #[test]
    fn one_letter_word_is_playable() {
        let sink = MemorySink::default();
        let source = WordList::new("tiny", words_from_slice(&["a"]));
        let mut rng = StdRng::seed_from_u64(8);
        let mut game = Game::start("tester", Difficulty::Easy.config(), &source, &mut rng).unwrap();
        assert_eq!(game.status(), RoundStatus::Active);

        let turn = game.submit("b", &sink).unwrap();
        assert_eq!(turn.outcome, Outcome::LetterMissing);
        let turn = game.submit("a", &sink).unwrap();
        assert_eq!(turn.status, RoundStatus::Won);
        assert_eq!(*sink.results.borrow(), vec![("tester".to_string(), true)]);
    }

    #[test]
    fn closing_remark_matches_result() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..10 {
            assert!(WIN_REMARKS.contains(&closing_remark(true, &mut rng)));
            assert!(LOSS_REMARKS.contains(&closing_remark(false, &mut rng)));
        }
    }
}
