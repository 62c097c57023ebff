//! Display functions for line mode and command results

use super::formatters::{lives_bar, percentage, spaced, tried_list};
use super::gallows;
use crate::core::RoundStatus;
use crate::game::Game;
use crate::scores::{PlayerTally, ScoreEntry};
use colored::Colorize;

/// Clear the terminal and move the cursor home
pub fn clear_screen() {
    print!("\x1b[H\x1b[2J");
}

/// Print the gallows, the word and the lives left
pub fn print_round(game: &Game) {
    let round = game.round();

    println!("{}", gallows::drawing(game.gallows_stage()).bright_black());
    println!();
    println!(
        "Word to guess: {}",
        spaced(round.revealed()).bright_yellow().bold()
    );
    println!(
        "Lives:         [{}] {}",
        lives_bar(game.display_lives(), game.starting_lives()).red(),
        game.display_lives()
    );
    println!("Tried:         {}", tried_list(round.tried()).bright_black());

    if let Some(message) = game.message() {
        println!("\n{}", message.cyan());
    }
}

/// Print the end-of-round banner
pub fn print_round_end(game: &Game, remark: &str) {
    let word = game.round().secret().text();

    println!("\n{}", "═".repeat(60).bright_cyan());
    match game.status() {
        RoundStatus::Won => {
            println!("  {}", remark.bright_green().bold());
            println!("  The word was {}", word.bright_yellow().bold());
        }
        RoundStatus::Lost => {
            println!("{}", gallows::drawing(game.gallows_stage()).red());
            println!("\n  {}", remark.red().bold());
            println!("  The word was {}", word.bright_yellow().bold());
        }
        RoundStatus::Active => {
            println!("  Round abandoned. The word was {}", word.bright_yellow());
        }
    }
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Print the score board
pub fn print_scoreboard(entries: &[ScoreEntry], tallies: &[PlayerTally]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SCORES".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if entries.is_empty() {
        println!("\nNo scores available.");
        return;
    }

    let wins = entries.iter().filter(|e| e.won).count();
    println!("\n📊 {}", "Overall:".bright_cyan().bold());
    println!("   Rounds played:  {}", entries.len());
    println!(
        "   Rounds won:     {} {}",
        wins,
        format!("({:.1}%)", percentage(wins, entries.len())).green()
    );

    println!("\n🏆 {}", "Players:".bright_cyan().bold());
    for tally in tallies {
        let played = tally.wins + tally.losses;
        println!(
            "   {} {} won, {} lost ({:.0}%)",
            format!("{:<20}", tally.player).bright_white().bold(),
            tally.wins.to_string().green(),
            tally.losses.to_string().red(),
            percentage(tally.wins, played)
        );
    }

    println!("\n📜 {}", "History:".bright_cyan().bold());
    for entry in entries {
        let result = if entry.won {
            "won".green()
        } else {
            "lost".red()
        };
        println!("   {} - {result}", entry.player);
    }
}
