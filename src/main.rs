//! Hangman - CLI
//!
//! Play hangman in a full-screen TUI or a plain line mode, and browse the
//! score board.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{run_scores, run_simple},
    core::{Difficulty, DifficultyConfig},
    interactive::{App, run_tui},
    logging::init_tracing,
    scores::{DEFAULT_SCORE_FILE, ScoreFile},
    wordlists::{WordList, loader::load_from_file},
};
use rand::{SeedableRng, rngs::StdRng};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the word one letter at a time before the gallows is complete",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty: easy (10 lives), medium (7 lives, default), hard (5 lives)
    #[arg(short, long, global = true, default_value = "medium")]
    difficulty: Difficulty,

    /// Word list file to draw from instead of the built-in list for the difficulty
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Starting lives, overriding the difficulty
    #[arg(short, long, global = true)]
    lives: Option<u32>,

    /// Player name recorded with scores
    #[arg(short, long, global = true, default_value = "anonymous")]
    player: String,

    /// Score file
    #[arg(long, global = true, default_value = DEFAULT_SCORE_FILE)]
    scores: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode without the TUI
    Simple,

    /// Show the score board
    Scores,
}

/// Load the word list based on the -w flag
///
/// - no flag: the embedded list for the difficulty
/// - "<path>": words from the file, whitespace separated
fn load_word_list(difficulty: Difficulty, path: Option<&PathBuf>) -> Result<WordList> {
    match path {
        None => Ok(WordList::embedded(difficulty)),
        Some(path) => {
            let words = load_from_file(path)
                .with_context(|| format!("failed to read word list {}", path.display()))?;
            Ok(WordList::new(path.display().to_string(), words))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let score_file = ScoreFile::new(&cli.scores);

    // Default to Play mode if no command given
    match cli.command.as_ref().unwrap_or(&Commands::Play) {
        Commands::Play => run_play_command(&cli, &score_file),
        Commands::Simple => run_simple_command(&cli, &score_file),
        Commands::Scores => Ok(run_scores(&score_file)?),
    }
}

fn prepare_round_settings(cli: &Cli) -> Result<(WordList, DifficultyConfig)> {
    let words = load_word_list(cli.difficulty, cli.wordlist.as_ref())?;
    let config = cli.difficulty.config().with_lives(cli.lives);
    info!(
        difficulty = %cli.difficulty,
        lives = config.attempts,
        words = words.len(),
        source = words.name(),
        "starting"
    );
    Ok((words, config))
}

fn run_play_command(cli: &Cli, score_file: &ScoreFile) -> Result<()> {
    let (words, config) = prepare_round_settings(cli)?;
    let app = App::new(
        &words,
        score_file,
        cli.player.clone(),
        cli.difficulty,
        config,
        StdRng::from_os_rng(),
    )?;
    run_tui(app)
}

fn run_simple_command(cli: &Cli, score_file: &ScoreFile) -> Result<()> {
    let (words, config) = prepare_round_settings(cli)?;
    let summary = run_simple(&words, &cli.player, config, score_file)?;
    info!(
        played = summary.rounds_played,
        won = summary.rounds_won,
        "line mode finished"
    );
    Ok(())
}
