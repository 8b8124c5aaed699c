//! Candidate list filtering and ranking
//!
//! The working list holds lightweight references into the dictionary. Every
//! filter produces a new list rather than shrinking in place, so each stage
//! can be tested in isolation and the input list stays reusable.

use super::FrequencyTable;
use crate::core::{Pattern, Word};

/// A dictionary reference with its current frequency score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub index: usize,
    pub score: u32,
}

impl Candidate {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self { index, score: 0 }
    }
}

/// An ordered sequence of candidates referencing a dictionary slice
///
/// Shrinks monotonically as filters are applied; relative order is preserved
/// by every operation, including ranking ties.
#[derive(Debug, Clone, Default)]
pub struct CandidateList {
    entries: Vec<Candidate>,
}

impl CandidateList {
    /// Start from the full dictionary, one candidate per word
    #[must_use]
    pub fn from_dictionary(dictionary: &[Word]) -> Self {
        Self {
            entries: (0..dictionary.len()).map(Candidate::new).collect(),
        }
    }

    /// Keep only candidates whose word has no repeated letter
    #[must_use]
    pub fn without_repeated_letters(&self, dictionary: &[Word]) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|candidate| !dictionary[candidate.index].has_repeated_letters())
                .copied()
                .collect(),
        }
    }

    /// Keep only candidates whose word satisfies the pattern
    ///
    /// Applying several patterns in sequence is a conjunction: the output of
    /// one filter is the input of the next.
    #[must_use]
    pub fn matching(&self, dictionary: &[Word], pattern: &Pattern) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|candidate| pattern.matches(&dictionary[candidate.index]))
                .copied()
                .collect(),
        }
    }

    /// Score and order candidates by descending letter-frequency score
    ///
    /// The frequency table is built over exactly the current candidate set,
    /// not the full dictionary, so scores reflect the surviving pool. The
    /// sort is stable: equal scores keep their pre-sort relative order.
    #[must_use]
    pub fn ranked(&self, dictionary: &[Word]) -> Self {
        let table = FrequencyTable::from_words(
            self.entries
                .iter()
                .map(|candidate| &dictionary[candidate.index]),
        );

        let mut entries: Vec<Candidate> = self
            .entries
            .iter()
            .map(|candidate| Candidate {
                index: candidate.index,
                score: table.score(&dictionary[candidate.index]),
            })
            .collect();

        entries.sort_by(|a, b| b.score.cmp(&a.score));

        Self { entries }
    }

    /// The first `min(k, len)` candidates, order preserved
    #[must_use]
    pub fn top(&self, k: usize) -> &[Candidate] {
        &self.entries[..self.entries.len().min(k)]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a CandidateList {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(words: &[&str]) -> Vec<Word> {
        words.iter().map(|&w| Word::new(w)).collect()
    }

    fn texts<'a>(list: &CandidateList, dict: &'a [Word]) -> Vec<&'a str> {
        list.iter().map(|c| dict[c.index].text()).collect()
    }

    #[test]
    fn from_dictionary_covers_every_word() {
        let dict = dictionary(&["CRANE", "TRACE", "ROBOT"]);
        let list = CandidateList::from_dictionary(&dict);

        assert_eq!(list.len(), 3);
        assert_eq!(texts(&list, &dict), ["CRANE", "TRACE", "ROBOT"]);
    }

    #[test]
    fn repeated_letter_filter_drops_repeats_only() {
        let dict = dictionary(&["ROBOT", "CRANE", "SPEED", "SPLIT"]);
        let list = CandidateList::from_dictionary(&dict).without_repeated_letters(&dict);

        assert_eq!(texts(&list, &dict), ["CRANE", "SPLIT"]);
    }

    #[test]
    fn pattern_filter_is_non_destructive() {
        let dict = dictionary(&["CRANE", "TRACE", "SPLIT"]);
        let list = CandidateList::from_dictionary(&dict);
        let pattern = Pattern::parse("+R-O").unwrap();

        let filtered = list.matching(&dict, &pattern);
        assert_eq!(texts(&filtered, &dict), ["CRANE", "TRACE"]);
        // Input list untouched
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn pattern_filters_are_conjunctive() {
        let dict = dictionary(&["CRANE", "TRACE", "BRICK"]);
        let list = CandidateList::from_dictionary(&dict);

        let first = Pattern::parse("+R").unwrap();
        let second = Pattern::parse("-K").unwrap();
        let survivors = list.matching(&dict, &first).matching(&dict, &second);

        assert_eq!(texts(&survivors, &dict), ["CRANE", "TRACE"]);
    }

    #[test]
    fn pattern_filter_is_idempotent() {
        let dict = dictionary(&["CRANE", "TRACE", "ROBOT", "SPLIT"]);
        let pattern = Pattern::parse("+R-O").unwrap();

        let once = CandidateList::from_dictionary(&dict).matching(&dict, &pattern);
        let twice = once.matching(&dict, &pattern);

        assert_eq!(texts(&once, &dict), texts(&twice, &dict));
    }

    #[test]
    fn ranking_orders_by_descending_score() {
        // Pool: STARE, STORE, QUIZ. Q/U/I/Z are rare in this pool.
        let dict = dictionary(&["QUIZ", "STARE", "STORE"]);
        let ranked = CandidateList::from_dictionary(&dict).ranked(&dict);

        let ordered = texts(&ranked, &dict);
        assert_eq!(ordered[2], "QUIZ");
        assert!(ranked.iter().next().unwrap().score >= ranked.iter().last().unwrap().score);
    }

    #[test]
    fn ranking_ties_keep_input_order() {
        // CRANE and TRACE are anagram-adjacent: both score 9 over this pool
        let dict = dictionary(&["CRANE", "TRACE"]);
        let ranked = CandidateList::from_dictionary(&dict).ranked(&dict);

        assert_eq!(texts(&ranked, &dict), ["CRANE", "TRACE"]);
        assert!(ranked.iter().all(|c| c.score == 9));

        // Reversed input keeps reversed tie order
        let dict2 = dictionary(&["TRACE", "CRANE"]);
        let ranked2 = CandidateList::from_dictionary(&dict2).ranked(&dict2);
        assert_eq!(texts(&ranked2, &dict2), ["TRACE", "CRANE"]);
    }

    #[test]
    fn ranking_scores_against_surviving_pool_only() {
        let dict = dictionary(&["CRANE", "TRACE", "ZZZZZ"]);
        let pattern = Pattern::parse("-Z").unwrap();
        let ranked = CandidateList::from_dictionary(&dict)
            .matching(&dict, &pattern)
            .ranked(&dict);

        // ZZZZZ eliminated before counting, so scores match the two-word pool
        assert!(ranked.iter().all(|c| c.score == 9));
    }

    #[test]
    fn top_truncates_and_preserves_order() {
        let dict = dictionary(&["CRANE", "TRACE", "SPLIT"]);
        let list = CandidateList::from_dictionary(&dict);

        assert_eq!(list.top(2).len(), 2);
        assert_eq!(list.top(2)[0].index, 0);
        assert_eq!(list.top(2)[1].index, 1);
    }

    #[test]
    fn top_with_oversize_k_returns_full_list() {
        let dict = dictionary(&["CRANE", "TRACE"]);
        let list = CandidateList::from_dictionary(&dict);

        assert_eq!(list.top(10).len(), 2);
        assert_eq!(list.top(10), list.top(2));
    }

    #[test]
    fn empty_list_operations() {
        let dict: Vec<Word> = Vec::new();
        let list = CandidateList::from_dictionary(&dict);

        assert!(list.is_empty());
        assert!(list.ranked(&dict).is_empty());
        assert!(list.top(10).is_empty());
    }
}
