//! The advise command
//!
//! Runs the full elimination pipeline over a dictionary: validate every
//! pattern up front, drop repeated-letter words, apply each pattern filter in
//! argument order, then rank the survivors and keep the top candidates.

use crate::advisor::CandidateList;
use crate::core::{Pattern, Word};

/// Configuration for one advise run
pub struct AdviseConfig {
    /// Raw feedback patterns, applied conjunctively in order
    pub patterns: Vec<String>,
    /// How many ranked candidates to keep
    pub top: usize,
}

impl AdviseConfig {
    pub const DEFAULT_TOP: usize = 10;

    #[must_use]
    pub const fn new(patterns: Vec<String>) -> Self {
        Self {
            patterns,
            top: Self::DEFAULT_TOP,
        }
    }
}

/// One ranked surviving candidate
#[derive(Debug)]
pub struct RankedWord {
    pub word: String,
    pub score: u32,
}

/// Result of an advise run
#[derive(Debug)]
pub struct AdviseResult {
    /// Applied patterns in original spelling and order, for echoing back
    pub patterns: Vec<String>,
    /// Dictionary size before any filtering
    pub pool_size: usize,
    /// Candidates remaining after all filters
    pub survivors: usize,
    /// Top candidates, best first
    pub rankings: Vec<RankedWord>,
}

/// Filter the dictionary by the configured patterns and rank the survivors
///
/// All patterns are parsed and validated before any filtering happens, so a
/// malformed pattern aborts the run with no partial output. Pattern letters
/// are uppercased to match the dictionary's case convention.
///
/// # Errors
///
/// Returns an error naming the offending pattern if any pattern is empty,
/// has odd length, or uses an unknown marker.
pub fn advise(config: &AdviseConfig, dictionary: &[Word]) -> Result<AdviseResult, String> {
    // Validate everything before touching the candidate pool
    let patterns: Vec<Pattern> = config
        .patterns
        .iter()
        .map(|raw| {
            Pattern::parse(&raw.to_uppercase())
                .map_err(|e| format!("the pattern [{raw}] is invalid: {e}"))
        })
        .collect::<Result<_, _>>()?;

    let mut candidates =
        CandidateList::from_dictionary(dictionary).without_repeated_letters(dictionary);

    for pattern in &patterns {
        candidates = candidates.matching(dictionary, pattern);
    }

    let ranked = candidates.ranked(dictionary);
    let rankings = ranked
        .top(config.top)
        .iter()
        .map(|candidate| RankedWord {
            word: dictionary[candidate.index].text().to_string(),
            score: candidate.score,
        })
        .collect();

    Ok(AdviseResult {
        patterns: config.patterns.clone(),
        pool_size: dictionary.len(),
        survivors: ranked.len(),
        rankings,
    })
}
