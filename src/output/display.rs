//! Display functions for command results

use crate::commands::AdviseResult;
use colored::Colorize;

/// Pattern grammar help, shown by `--help` and the `/h` alias
pub const PATTERN_USAGE: &str = "\
Pattern is a string, where each letter must be prefixed with one of the
three characters:
    -c   The letter c does not appear in the desired word.
    +c   The letter c appears in the desired word, but not in this location.
    !c   The letter c appears in the word in this location.

Examples:
!A+B-O+D-E     The desired word starts with an A, contains B somewhere, etc...";

/// Print the result of an advise run
pub fn print_advise_result(result: &AdviseResult) {
    for pattern in &result.patterns {
        println!("pattern : {}", pattern.bright_yellow());
    }

    println!(
        "{} of {} candidates remain",
        result.survivors.to_string().bright_cyan(),
        result.pool_size
    );

    for (i, ranked) in result.rankings.iter().enumerate() {
        println!(
            "{:02}: {}     score: {}",
            i + 1,
            ranked.word.bright_yellow().bold(),
            ranked.score.to_string().green()
        );
    }

    if result.rankings.is_empty() {
        println!("{}", "no candidates match the given patterns".red());
    }
}
