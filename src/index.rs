//! Dictionary index over a candidate set.
//!
//! The index answers three set queries in constant time: words containing a
//! letter, words containing a letter at least `n` times, and words holding a
//! letter at a given position. It also picks the next guess by scoring every
//! candidate against those tables.

use std::cmp::Ordering;

use rayon::prelude::*;
use rustc_hash::FxHashSet;

use crate::candidates::CandidateSet;
use crate::error::{Error, Result};
use crate::word::{letter_index, Word};
use crate::{ALPHABET_SIZE, MAX_LETTER_COUNT, WORD_LENGTH};

/// Weight of the positional score relative to the letter score.
pub const EXACT_WEIGHT: usize = 5;

pub type WordSet = FxHashSet<Word>;

/// Score breakdown for a potential guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessScore {
    pub word: Word,
    /// Sum of `|words containing letter|` over the distinct letters of the word.
    pub inexact: usize,
    /// Sum of `|words with letter at position|` over all five positions.
    pub exact: usize,
}

impl GuessScore {
    pub fn combined(&self) -> usize {
        self.inexact + EXACT_WEIGHT * self.exact
    }

    /// Higher combined score first; equal scores fall back to the
    /// lexicographically smaller word.
    fn rank(&self, other: &Self) -> Ordering {
        other
            .combined()
            .cmp(&self.combined())
            .then_with(|| self.word.cmp(&other.word))
    }
}

/// Read-only lookup tables built from one candidate set.
///
/// A new candidate set needs a new index; nothing here is mutated after
/// construction.
#[derive(Debug, Clone)]
pub struct DictionaryIndex {
    words: CandidateSet,
    by_letter: [WordSet; ALPHABET_SIZE],
    /// `by_letter_count[l][n - 1]` holds words with letter `l` at least `n` times.
    by_letter_count: [[WordSet; MAX_LETTER_COUNT]; ALPHABET_SIZE],
    by_position: [[WordSet; ALPHABET_SIZE]; WORD_LENGTH],
    empty: WordSet,
}

impl DictionaryIndex {
    pub fn new(words: CandidateSet) -> Self {
        let mut by_letter: [WordSet; ALPHABET_SIZE] = std::array::from_fn(|_| WordSet::default());
        let mut by_letter_count: [[WordSet; MAX_LETTER_COUNT]; ALPHABET_SIZE] =
            std::array::from_fn(|_| std::array::from_fn(|_| WordSet::default()));
        let mut by_position: [[WordSet; ALPHABET_SIZE]; WORD_LENGTH] =
            std::array::from_fn(|_| std::array::from_fn(|_| WordSet::default()));

        for &word in &words {
            for (letter, &count) in word.letter_counts().iter().enumerate() {
                if count == 0 {
                    continue;
                }
                by_letter[letter].insert(word);
                for n in 0..(count as usize).min(MAX_LETTER_COUNT) {
                    by_letter_count[letter][n].insert(word);
                }
            }

            for (pos, &b) in word.letters().iter().enumerate() {
                by_position[pos][letter_index(b)].insert(word);
            }
        }

        Self {
            words,
            by_letter,
            by_letter_count,
            by_position,
            empty: WordSet::default(),
        }
    }

    /// The candidate set this index was built from.
    pub fn words(&self) -> &CandidateSet {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words containing `letter` at least once.
    pub fn words_containing(&self, letter: u8) -> &WordSet {
        if !letter.is_ascii_lowercase() {
            return &self.empty;
        }
        &self.by_letter[letter_index(letter)]
    }

    /// Words containing `letter` at least `n` times.
    ///
    /// `n` is meaningful in `1..=MAX_LETTER_COUNT`; anything else, or a
    /// letter outside `a..=z`, yields the empty set.
    pub fn words_containing_at_least(&self, letter: u8, n: usize) -> &WordSet {
        match n {
            1..=MAX_LETTER_COUNT if letter.is_ascii_lowercase() => {
                &self.by_letter_count[letter_index(letter)][n - 1]
            }
            _ => &self.empty,
        }
    }

    /// Words with `letter` at position `pos`. Empty when no word matches,
    /// `pos` is past the end of a word or `letter` is outside `a..=z`.
    pub fn words_at_position(&self, pos: usize, letter: u8) -> &WordSet {
        match self.by_position.get(pos) {
            Some(letters) if letter.is_ascii_lowercase() => &letters[letter_index(letter)],
            _ => &self.empty,
        }
    }

    pub fn score(&self, word: &Word) -> GuessScore {
        let mut inexact = 0;
        let mut exact = 0;
        for (pos, &letter) in word.letters().iter().enumerate() {
            // Repeated letters add no new information, so only the first one
            // counts towards the letter score.
            if word.is_first_occurrence(pos) {
                inexact += self.words_containing(letter).len();
            }
            exact += self.words_at_position(pos, letter).len();
        }
        GuessScore {
            word: *word,
            inexact,
            exact,
        }
    }

    /// The highest scoring candidate.
    pub fn best_guess(&self) -> Result<Word> {
        self.words
            .as_btree()
            .par_iter()
            .map(|word| self.score(word))
            .min_by(GuessScore::rank)
            .map(|score| score.word)
            .ok_or(Error::InvalidState)
    }

    /// The top `n` candidates, best first.
    pub fn ranked_guesses(&self, n: usize) -> Vec<GuessScore> {
        let mut scores: Vec<GuessScore> = self
            .words
            .as_btree()
            .par_iter()
            .map(|word| self.score(word))
            .collect();
        scores.par_sort_unstable_by(GuessScore::rank);
        scores.truncate(n);
        scores
    }
}
