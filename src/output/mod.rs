//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{
    print_bench_result, print_check_report, print_explore_report, print_letters_report,
    print_round_stats,
};
pub use formatters::{format_pairs, format_tiles, format_word_lines};
