//! Timed game round
//!
//! The interactive loop: roll tiles, read comma-separated guesses from stdin
//! until the clock runs out, then score the round.

use crate::core::LetterBudget;
use crate::game::{LotteryConfig, RoundStats, generate_letters, parse_guess};
use crate::index::AnagramIndex;
use crate::output::{format_tiles, print_round_stats};
use anyhow::{Context, Result};
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Configuration for one round
pub struct PlayConfig {
    pub time_limit: Duration,
    pub lottery: LotteryConfig,
    pub seed: u64,
}

/// Run one timed round end to end
///
/// # Errors
///
/// Returns an error only on stdin/stdout failures; game outcomes are never
/// errors.
pub fn run_play(index: &AnagramIndex, config: &PlayConfig) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let budget = generate_letters(&mut rng, index, &config.lottery);

    println!("\n{}", "Welcome to Anagame!".bright_cyan().bold());
    println!("\nEnter anagram guesses as two comma-separated words: eat,tea");
    println!("Type 'quit' to end the round early, or 'hint' for a useful word.\n");
    println!(
        "You have {} seconds to find as many anagram pairs as possible!",
        config.time_limit.as_secs()
    );
    println!("Letters: {}\n", format_tiles(&budget).bright_yellow().bold());

    let guesses = collect_guesses(index, &budget, config.time_limit)?;
    let stats = RoundStats::compute(&guesses, &budget, index);
    print_round_stats(&stats);
    Ok(())
}

/// Read guesses until the time limit elapses, the player quits, or stdin ends
///
/// Reading blocks, so the clock is checked between guesses rather than
/// interrupting one; a guess typed after the limit is not recorded.
fn collect_guesses(
    index: &AnagramIndex,
    budget: &LetterBudget,
    time_limit: Duration,
) -> Result<Vec<(String, String)>> {
    let start = Instant::now();
    let mut guesses = Vec::new();

    while start.elapsed() < time_limit {
        let Some(line) = prompt("Enter your guess")? else {
            break; // stdin closed
        };

        if start.elapsed() >= time_limit {
            println!("{}", "Time's up!".bright_red().bold());
            break;
        }

        match line.to_ascii_lowercase().as_str() {
            "quit" => break,
            "hint" => {
                match index.largest_reachable_group(budget) {
                    Some(word) => println!("Hint: try anagrams of '{}'", word.bright_green()),
                    None => println!("No hint available for these letters."),
                }
                continue;
            }
            _ => {}
        }

        match parse_guess(&line) {
            Some(pair) => guesses.push(pair),
            None => println!("Invalid guess format. Please use the format 'word1,word2'."),
        }
    }

    Ok(guesses)
}

/// Prompt for one line; `None` when stdin reaches end of input
fn prompt(message: &str) -> Result<Option<String>> {
    print!("{message}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let bytes = io::stdin()
        .read_line(&mut line)
        .context("failed to read guess")?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
