//! The set of words still consistent with every round of feedback.

use std::collections::BTreeSet;

use crate::index::WordSet;
use crate::word::Word;

/// An ordered, persistent set of candidate words.
///
/// Filtering never mutates a set in place: `intersect` and `subtract` hand back
/// a new set and the caller drops the old one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet(BTreeSet<Word>);

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.0.contains(word)
    }

    /// Words in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &Word> + '_ {
        self.0.iter()
    }

    pub(crate) fn as_btree(&self) -> &BTreeSet<Word> {
        &self.0
    }

    /// Words present both here and in `other`.
    pub fn intersect(&self, other: &WordSet) -> Self {
        Self(self.0.iter().filter(|w| other.contains(*w)).copied().collect())
    }

    /// Words present here but not in `other`.
    pub fn subtract(&self, other: &WordSet) -> Self {
        Self(self.0.iter().filter(|w| !other.contains(*w)).copied().collect())
    }

    pub fn to_vec(&self) -> Vec<Word> {
        self.0.iter().copied().collect()
    }
}

impl FromIterator<Word> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Word;
    type IntoIter = std::collections::btree_set::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> CandidateSet {
        words.iter().map(|w| Word::parse(w).unwrap()).collect()
    }

    fn word_set(words: &[&str]) -> WordSet {
        words.iter().map(|w| Word::parse(w).unwrap()).collect()
    }

    #[test]
    fn deduplicates_and_orders() {
        let candidates = set(&["plate", "crane", "plate"]);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates.to_vec()[0].to_string(), "crane");
    }

    #[test]
    fn intersect_and_subtract_return_new_sets() {
        let candidates = set(&["crane", "crate", "grate"]);
        let other = word_set(&["crate", "grate", "plate"]);

        assert_eq!(candidates.intersect(&other), set(&["crate", "grate"]));
        assert_eq!(candidates.subtract(&other), set(&["crane"]));
        assert_eq!(candidates.len(), 3);
    }
}
