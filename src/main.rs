//! Wordle Advisor - CLI
//!
//! Filters a dictionary against feedback patterns from prior guesses and
//! prints the top candidates ranked by letter-frequency score.

use anyhow::{Context, Result};
use clap::Parser;
use wordle_advisor::{
    commands::{AdviseConfig, advise},
    output::{PATTERN_USAGE, print_advise_result},
    wordlists::{DEFAULT_WORDLIST, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_advisor",
    about = "Wordle candidate eliminator with letter-frequency ranking",
    after_help = PATTERN_USAGE,
    version,
    author
)]
struct Cli {
    /// Feedback patterns from prior guesses, applied in order
    patterns: Vec<String>,

    /// Path to the dictionary file (one word per line)
    #[arg(short = 'w', long, default_value = DEFAULT_WORDLIST)]
    wordlist: String,

    /// Number of top candidates to print
    #[arg(short = 'n', long, default_value_t = AdviseConfig::DEFAULT_TOP)]
    top: usize,
}

/// Case-insensitive match for the short help spellings, `-h` and the
/// DOS-style `/h`
fn is_help_flag(arg: &str) -> bool {
    arg.eq_ignore_ascii_case("-h") || arg.eq_ignore_ascii_case("/h")
}

/// Short help exits non-zero like every other early-termination path, so it
/// runs ahead of clap; `--help` keeps clap's usual behavior
fn check_help_flags() {
    if std::env::args().skip(1).any(|arg| is_help_flag(&arg)) {
        eprintln!("usage: wordle_advisor [OPTIONS] [PATTERNS]...\n");
        eprintln!("{PATTERN_USAGE}");
        std::process::exit(2);
    }
}

fn main() -> Result<()> {
    check_help_flags();
    let cli = Cli::parse();

    let dictionary = load_from_file(&cli.wordlist)
        .with_context(|| format!("unable to open wordlist [{}]", cli.wordlist))?;

    let mut config = AdviseConfig::new(cli.patterns);
    config.top = cli.top;

    let result = advise(&config, &dictionary).map_err(|e| anyhow::anyhow!(e))?;
    print_advise_result(&result);

    Ok(())
}
