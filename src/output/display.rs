//! Display functions for command results

use super::formatters::{format_pairs, format_tiles, format_word_lines};
use crate::commands::{BenchResult, CheckReport, ExploreReport, LettersReport};
use crate::game::RoundStats;
use colored::Colorize;

const WORDS_PER_LINE: usize = 8;

/// Print the end-of-round report
pub fn print_round_stats(stats: &RoundStats) {
    println!("\nThanks for playing Anagame!\n");
    println!("{}", "─".repeat(60).cyan());

    println!(
        "Accuracy: {}",
        format!("{}%", stats.accuracy).bright_yellow().bold()
    );
    println!(
        "  valid guesses ({}):   {}",
        stats.valid.len(),
        format_pairs(&stats.valid).green()
    );
    println!(
        "  invalid guesses ({}): {}",
        stats.invalid.len(),
        format_pairs(&stats.invalid).red()
    );

    println!("{}", "─".repeat(60).cyan());
    println!(
        "Skill: {}",
        format!("{}%", stats.skill).bright_yellow().bold()
    );
    println!("  Unique words used ({}):", stats.guessed.len());
    if !stats.guessed.is_empty() {
        println!("{}", format_word_lines(stats.guessed.iter().map(String::as_str), WORDS_PER_LINE));
    }
    println!("  Words you could have used ({}):", stats.missed.len());
    if !stats.missed.is_empty() {
        println!("{}", format_word_lines(stats.missed.iter().map(String::as_str), WORDS_PER_LINE));
    }

    println!("{}", "─".repeat(60).cyan());
    println!(
        "Anagame - Final Score: {}",
        stats.score.to_string().bright_green().bold()
    );
    println!("{}", "─".repeat(60).cyan());
}

/// Print the exploration report for a letter budget
pub fn print_explore_report(report: &ExploreReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {}",
        "LETTERS:".bright_cyan().bold(),
        format_tiles(&report.budget).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if report.reachable.is_empty() {
        println!("\nNo anagram pairs can be formed from these letters.");
        return;
    }

    println!("\nReachable anagram words ({}):", report.reachable.len());
    println!(
        "{}",
        format_word_lines(report.reachable.iter().map(String::as_str), WORDS_PER_LINE)
    );

    if let Some(representative) = &report.largest_family {
        println!(
            "\nLargest family: {} ({})",
            representative.bright_green().bold(),
            report.family_members.join(", ")
        );
    }
}

/// Print the verdict for a checked pair
pub fn print_check_report(report: &CheckReport) {
    if report.is_valid() {
        println!(
            "{} {},{} is a valid anagram pair",
            "✅".green(),
            report.word1.bright_green().bold(),
            report.word2.bright_green().bold()
        );
    } else if let Some(failure) = &report.failure {
        println!(
            "{} {},{} rejected: {failure}",
            "❌".red(),
            report.word1.yellow(),
            report.word2.yellow()
        );
    }
}

/// Print a rolled letter draw
pub fn print_letters_report(report: &LettersReport) {
    println!(
        "Letters: {}",
        format_tiles(&report.budget).bright_yellow().bold()
    );
    println!("Anagram words offered: {}", report.offered);
    if let Some(word) = &report.largest_family {
        println!("Largest family around: '{}'", word.bright_green());
    }
}

/// Print the result of a benchmark
pub fn print_bench_result(result: &BenchResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Index:".bright_cyan().bold());
    println!("   Corpus words:     {}", result.corpus_words);
    println!("   Distinct words:   {}", result.distinct_words);
    println!("   Anagram groups:   {}", result.group_count);
    println!(
        "   Build time:       {:.2}ms",
        result.build_time.as_secs_f64() * 1000.0
    );

    println!("\n📊 {}", "Queries:".bright_cyan().bold());
    println!("   Random draws:     {}", result.draws);
    println!(
        "   Avg reachable:    {}",
        format!("{:.1}", result.avg_reachable).bright_yellow()
    );
    println!("   Max reachable:    {}", result.max_reachable);
    println!(
        "   Sequential:       {:.2}ms ({:.0} queries/s)",
        result.sequential_time.as_secs_f64() * 1000.0,
        result.queries_per_second
    );
    println!(
        "   Parallel:         {:.2}ms",
        result.parallel_time.as_secs_f64() * 1000.0
    );

    if result.total_reachable == result.parallel_total_reachable {
        println!(
            "\n{}",
            "✅ Parallel and sequential passes agree".green()
        );
    } else {
        println!(
            "\n{}",
            "❌ Parallel and sequential passes disagree!".red().bold()
        );
    }
}
