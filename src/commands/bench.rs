//! Benchmark command
//!
//! Measures index construction and query throughput over random letter
//! draws, sequentially and in parallel. The parallel phase shares one
//! `&AnagramIndex` across rayon workers, leaning on the index being
//! read-only after construction.

use crate::core::LetterBudget;
use crate::game::{LetterDistribution, draw_letters};
use crate::index::AnagramIndex;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchResult {
    pub corpus_words: usize,
    pub distinct_words: usize,
    pub group_count: usize,
    pub build_time: Duration,
    pub draws: usize,
    pub sequential_time: Duration,
    pub parallel_time: Duration,
    /// Summed reachable-word counts from the sequential pass
    pub total_reachable: usize,
    /// Same sum from the parallel pass; must match the sequential one
    pub parallel_total_reachable: usize,
    pub avg_reachable: f64,
    pub max_reachable: usize,
    pub queries_per_second: f64,
}

/// Benchmark index construction and reachability queries over random draws
#[must_use]
pub fn run_bench(corpus: &[String], draws: usize, tiles: usize, seed: u64) -> BenchResult {
    let build_start = Instant::now();
    let index = AnagramIndex::build(corpus.iter().map(String::as_str));
    let build_time = build_start.elapsed();

    let mut rng = StdRng::seed_from_u64(seed);
    let budgets: Vec<LetterBudget> = (0..draws)
        .map(|_| draw_letters(&mut rng, tiles, LetterDistribution::Scrabble))
        .collect();

    // Sequential pass, with progress
    let pb = ProgressBar::new(draws as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let sequential_start = Instant::now();
    let mut total_reachable = 0;
    let mut max_reachable = 0;
    for budget in &budgets {
        let reachable = index.reachable_anagram_words(budget).len();
        total_reachable += reachable;
        max_reachable = max_reachable.max(reachable);
        pb.inc(1);
    }
    let sequential_time = sequential_start.elapsed();
    pb.finish_and_clear();

    // Parallel pass over the same draws, one shared read-only index
    let parallel_start = Instant::now();
    let parallel_total_reachable: usize = budgets
        .par_iter()
        .map(|budget| index.reachable_anagram_words(budget).len())
        .sum();
    let parallel_time = parallel_start.elapsed();

    BenchResult {
        corpus_words: corpus.len(),
        distinct_words: index.word_count(),
        group_count: index.group_count(),
        build_time,
        draws,
        sequential_time,
        parallel_time,
        total_reachable,
        parallel_total_reachable,
        avg_reachable: if draws == 0 {
            0.0
        } else {
            total_reachable as f64 / draws as f64
        },
        max_reachable,
        queries_per_second: draws as f64 / sequential_time.as_secs_f64().max(f64::EPSILON),
    }
}
