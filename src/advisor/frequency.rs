//! Letter frequency counting and word scoring
//!
//! A word's frequency score is the sum, over its letters, of how often each
//! letter occurs across the current candidate set. Words built from common
//! letters score high and tend to yield informative feedback.

use crate::core::Word;

/// Occurrence counts for the restricted A–Z alphabet
///
/// Bytes outside A–Z are silently ignored both when counting and when
/// scoring, so malformed input contributes nothing.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: [u32; 26],
}

impl FrequencyTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table over a set of words
    pub fn from_words<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a Word>,
    {
        let mut table = Self::new();
        for word in words {
            table.count(word);
        }
        table
    }

    /// Add one word's letters to the counts
    pub fn count(&mut self, word: &Word) {
        for &byte in word.bytes() {
            if let Some(slot) = Self::index_of(byte) {
                self.counts[slot] += 1;
            }
        }
    }

    /// Occurrence count for a single letter
    #[must_use]
    pub fn letter_count(&self, letter: u8) -> u32 {
        Self::index_of(letter).map_or(0, |slot| self.counts[slot])
    }

    /// Sum the counts of a word's letters
    #[must_use]
    pub fn score(&self, word: &Word) -> u32 {
        word.bytes()
            .iter()
            .filter_map(|&byte| Self::index_of(byte))
            .map(|slot| self.counts[slot])
            .sum()
    }

    fn index_of(byte: u8) -> Option<usize> {
        if byte.is_ascii_uppercase() {
            Some(usize::from(byte - b'A'))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_letters_across_words() {
        let words = [Word::new("CRANE"), Word::new("TRACE")];
        let table = FrequencyTable::from_words(&words);

        assert_eq!(table.letter_count(b'C'), 2);
        assert_eq!(table.letter_count(b'R'), 2);
        assert_eq!(table.letter_count(b'A'), 2);
        assert_eq!(table.letter_count(b'N'), 1);
        assert_eq!(table.letter_count(b'E'), 2);
        assert_eq!(table.letter_count(b'T'), 1);
        assert_eq!(table.letter_count(b'Z'), 0);
    }

    #[test]
    fn score_sums_letter_counts() {
        let words = [Word::new("CRANE"), Word::new("TRACE")];
        let table = FrequencyTable::from_words(&words);

        // C+R+A+N+E = 2+2+2+1+2, T+R+A+C+E = 1+2+2+2+2
        assert_eq!(table.score(&words[0]), 9);
        assert_eq!(table.score(&words[1]), 9);
    }

    #[test]
    fn repeated_letters_counted_per_occurrence() {
        let words = [Word::new("SPEED")];
        let table = FrequencyTable::from_words(&words);

        assert_eq!(table.letter_count(b'E'), 2);
        // S+P+E+E+D = 1+1+2+2+1
        assert_eq!(table.score(&words[0]), 7);
    }

    #[test]
    fn out_of_alphabet_bytes_ignored() {
        let words = [Word::new("A-B'C")];
        let table = FrequencyTable::from_words(&words);

        assert_eq!(table.letter_count(b'A'), 1);
        assert_eq!(table.letter_count(b'-'), 0);
        assert_eq!(table.score(&words[0]), 3);
    }

    #[test]
    fn empty_table_scores_zero() {
        let table = FrequencyTable::new();
        assert_eq!(table.score(&Word::new("CRANE")), 0);
    }
}
