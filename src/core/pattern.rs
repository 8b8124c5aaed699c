//! Feedback pattern grammar and matching
//!
//! A pattern is a flat string of (marker, letter) pairs describing the
//! feedback from a prior guess:
//! - `-c` — the letter c does not appear in the desired word
//! - `+c` — the letter c appears in the desired word, but not at this position
//! - `!c` — the letter c appears at exactly this position
//!
//! The pair at byte offset `i` constrains word position `i / 2`.

use super::Word;
use std::fmt;

/// A single parsed position constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Letter occurs nowhere in the word
    Absent(u8),
    /// Letter occurs somewhere, but not at this position
    PresentElsewhere { position: usize, letter: u8 },
    /// Letter occurs at exactly this position
    FixedAt { position: usize, letter: u8 },
}

/// Error type for malformed patterns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    Empty,
    OddLength(usize),
    InvalidMarker { position: usize, found: char },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty pattern"),
            Self::OddLength(len) => {
                write!(f, "pattern must have even length, got {len}")
            }
            Self::InvalidMarker { position, found } => {
                write!(
                    f,
                    "marker at position {} must be one of -/+/!, found '{found}'",
                    position + 1
                )
            }
        }
    }
}

impl std::error::Error for PatternError {}

/// A validated feedback pattern
///
/// Holds the constraints in their original left-to-right pair order. Truth
/// value does not depend on order, but evaluation preserves it and
/// short-circuits on the first failing constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    raw: String,
    constraints: Vec<Constraint>,
}

impl Pattern {
    /// Parse and validate a raw pattern string
    ///
    /// Letters are taken as given; callers must pre-normalize them to
    /// uppercase to match the dictionary's case convention.
    ///
    /// # Errors
    /// Returns `PatternError` if:
    /// - The string is empty
    /// - The string has odd length
    /// - Any marker byte is not one of `-`, `+`, `!`
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::Pattern;
    ///
    /// let pattern = Pattern::parse("!A+B-O").unwrap();
    /// assert_eq!(pattern.raw(), "!A+B-O");
    ///
    /// assert!(Pattern::parse("").is_err());
    /// assert!(Pattern::parse("*A").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        let bytes = raw.as_bytes();

        if bytes.is_empty() {
            return Err(PatternError::Empty);
        }
        if bytes.len() % 2 != 0 {
            return Err(PatternError::OddLength(bytes.len()));
        }

        let mut constraints = Vec::with_capacity(bytes.len() / 2);
        for i in (0..bytes.len()).step_by(2) {
            let position = i / 2;
            let letter = bytes[i + 1];
            let constraint = match bytes[i] {
                b'-' => Constraint::Absent(letter),
                b'+' => Constraint::PresentElsewhere { position, letter },
                b'!' => Constraint::FixedAt { position, letter },
                other => {
                    return Err(PatternError::InvalidMarker {
                        position: i,
                        found: other as char,
                    });
                }
            };
            constraints.push(constraint);
        }

        Ok(Self {
            raw: raw.to_string(),
            constraints,
        })
    }

    /// The original pattern text
    #[inline]
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The parsed constraints in pair order
    #[inline]
    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Evaluate whether a word satisfies every constraint
    ///
    /// Pure predicate; no side effects. A `PresentElsewhere` constraint whose
    /// position lies beyond the word's end requires containment only — the
    /// positional exclusion is skipped.
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        let bytes = word.bytes();

        for &constraint in &self.constraints {
            let ok = match constraint {
                Constraint::FixedAt { position, letter } => {
                    bytes.get(position) == Some(&letter)
                }
                Constraint::PresentElsewhere { position, letter } => {
                    word.has_letter(letter) && bytes.get(position) != Some(&letter)
                }
                Constraint::Absent(letter) => !word.has_letter(letter),
            };
            if !ok {
                return false;
            }
        }

        true
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
