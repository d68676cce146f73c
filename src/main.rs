//! Anagame - CLI
//!
//! Timed anagram-pair word game over a letter-multiset index, with
//! exploration and benchmarking modes.

use anagame::commands::{PlayConfig, check_pair, explore, roll_letters, run_bench, run_play};
use anagame::core::LetterBudget;
use anagame::game::{LetterDistribution, LotteryConfig};
use anagame::index::AnagramIndex;
use anagame::output::{
    print_bench_result, print_check_report, print_explore_report, print_letters_report,
};
use anagame::wordlists::{
    WORDS,
    loader::{load_from_file, words_from_slice},
};
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "anagame",
    about = "Timed anagram-pair word game over a letter-multiset index",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default, curated corpus) or path to a file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a timed round (default)
    Play {
        /// Round length in seconds
        #[arg(short, long, default_value_t = 60)]
        time_limit: u64,

        /// Number of tiles to draw
        #[arg(long, default_value_t = 7)]
        tiles: usize,

        /// Minimum anagram words a draw must offer
        #[arg(short, long, default_value_t = 20)]
        fun_factor: usize,

        /// Letter distribution: scrabble (default) or uniform
        #[arg(short, long, default_value = "scrabble")]
        distribution: String,

        /// Seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List every anagram word reachable from a letter string
    Explore {
        /// Available letters, e.g. 'potsria'
        letters: String,
    },

    /// Check whether a word pair is a valid anagram move
    Check {
        word1: String,
        word2: String,

        /// Available letters, e.g. 'potsria'
        #[arg(short, long)]
        letters: String,
    },

    /// Roll a letter draw without playing
    Letters {
        /// Number of tiles to draw
        #[arg(long, default_value_t = 7)]
        tiles: usize,

        /// Minimum anagram words a draw must offer
        #[arg(short, long, default_value_t = 20)]
        fun_factor: usize,

        /// Letter distribution: scrabble (default) or uniform
        #[arg(short, long, default_value = "scrabble")]
        distribution: String,

        /// Seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Benchmark index construction and query throughput
    Bench {
        /// Number of random draws to query
        #[arg(short = 'n', long, default_value_t = 200)]
        draws: usize,

        /// Tiles per draw
        #[arg(long, default_value_t = 7)]
        tiles: usize,

        /// Seed for reproducible draws
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Load the corpus selected by the -w flag
fn load_corpus(wordlist_mode: &str) -> Result<Vec<String>> {
    match wordlist_mode {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => load_from_file(path)
            .with_context(|| format!("failed to load word list from {path}")),
    }
}

fn parse_budget(letters: &str) -> Result<LetterBudget> {
    LetterBudget::try_from_letters(letters).map_err(|e| anyhow::anyhow!("invalid letters: {e}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let corpus = load_corpus(&cli.wordlist)?;
    if corpus.is_empty() {
        bail!("word list '{}' contains no usable words", cli.wordlist);
    }
    let index = AnagramIndex::build(corpus.iter().map(String::as_str));

    // Default to a round of play when no command is given
    let command = cli.command.unwrap_or(Commands::Play {
        time_limit: 60,
        tiles: 7,
        fun_factor: 20,
        distribution: "scrabble".to_string(),
        seed: None,
    });

    match command {
        Commands::Play {
            time_limit,
            tiles,
            fun_factor,
            distribution,
            seed,
        } => {
            let config = PlayConfig {
                time_limit: Duration::from_secs(time_limit),
                lottery: lottery_config(tiles, fun_factor, &distribution),
                seed: seed.unwrap_or_else(rand::random),
            };
            run_play(&index, &config)
        }
        Commands::Explore { letters } => {
            let budget = parse_budget(&letters)?;
            print_explore_report(&explore(&index, &budget));
            Ok(())
        }
        Commands::Check {
            word1,
            word2,
            letters,
        } => {
            let budget = parse_budget(&letters)?;
            print_check_report(&check_pair(&index, &word1, &word2, &budget));
            Ok(())
        }
        Commands::Letters {
            tiles,
            fun_factor,
            distribution,
            seed,
        } => {
            let config = lottery_config(tiles, fun_factor, &distribution);
            let report = roll_letters(&index, &config, seed.unwrap_or_else(rand::random));
            print_letters_report(&report);
            Ok(())
        }
        Commands::Bench { draws, tiles, seed } => {
            let result = run_bench(&corpus, draws, tiles, seed.unwrap_or(0));
            print_bench_result(&result);
            Ok(())
        }
    }
}

fn lottery_config(tiles: usize, fun_factor: usize, distribution: &str) -> LotteryConfig {
    LotteryConfig {
        tiles,
        fun_factor,
        distribution: LetterDistribution::from_name(distribution),
        ..LotteryConfig::default()
    }
}
