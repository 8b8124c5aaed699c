//! Dictionary word representation
//!
//! A Word stores an uppercase word along with letter position indices for
//! fast containment and repeat checks.

use rustc_hash::FxHashMap;
use std::fmt;

/// An uppercase dictionary word with letter position tracking
///
/// Stores the word as text and maintains a map of letter positions. The core
/// imposes no length constraint; fixed length (usually 5) is a convention of
/// the dictionary, not of the matching logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    char_positions: FxHashMap<u8, Vec<usize>>,
}

impl Word {
    /// Create a new Word from a string, normalizing to uppercase
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::Word;
    ///
    /// let word = Word::new("crane");
    /// assert_eq!(word.text(), "CRANE");
    /// assert!(word.has_letter(b'R'));
    /// ```
    pub fn new(text: impl Into<String>) -> Self {
        let text: String = text.into().to_uppercase();

        // Build position map for fast lookup
        let mut char_positions: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in text.as_bytes().iter().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Self {
            text,
            char_positions,
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte slice
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Word length in bytes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.char_positions.contains_key(&letter)
    }

    /// Check whether any letter occurs at two distinct positions
    #[must_use]
    pub fn has_repeated_letters(&self) -> bool {
        self.char_positions
            .values()
            .any(|positions| positions.len() > 1)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
