//! Feedback-driven filtering of the candidate set.
//!
//! Each round the solver proposes the index's best guess, takes the player's
//! feedback, narrows the candidate set with set algebra over the index, and
//! rebuilds the index over what is left.

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::candidates::CandidateSet;
use crate::error::Result;
use crate::feedback::{Feedback, Mark};
use crate::index::DictionaryIndex;
use crate::word::{letter_index, Word};
use crate::ALPHABET_SIZE;

/// Green and yellow marks seen so far for each letter within one round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounter([usize; ALPHABET_SIZE]);

impl LetterCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, letter: u8) -> usize {
        self.0[letter_index(letter)]
    }

    /// Count one more confirmed instance of `letter` and return the new total.
    pub fn bump(&mut self, letter: u8) -> usize {
        let count = &mut self.0[letter_index(letter)];
        *count += 1;
        *count
    }
}

/// Narrow `candidates` by one mark of one position.
///
/// Misses only eliminate words needing more copies of the letter than the
/// counter has confirmed, so the order marks are applied in matters.
pub fn apply_mark(
    candidates: &CandidateSet,
    index: &DictionaryIndex,
    guess: &Word,
    pos: usize,
    mark: Mark,
    counter: &mut LetterCounter,
) -> CandidateSet {
    let letter = guess.letter(pos);
    match mark {
        Mark::Green => {
            counter.bump(letter);
            candidates.intersect(index.words_at_position(pos, letter))
        }
        Mark::Yellow => {
            let needed = counter.bump(letter);
            candidates
                .intersect(index.words_containing_at_least(letter, needed))
                .subtract(index.words_at_position(pos, letter))
        }
        Mark::Miss => {
            candidates.subtract(index.words_containing_at_least(letter, counter.get(letter) + 1))
        }
    }
}

/// Apply one round of feedback for `guess`, scanning positions left to right.
pub fn filter_candidates(
    candidates: &CandidateSet,
    index: &DictionaryIndex,
    guess: &Word,
    feedback: &Feedback,
) -> CandidateSet {
    let mut counter = LetterCounter::new();
    let mut remaining = candidates.clone();
    for (pos, &mark) in feedback.marks().iter().enumerate() {
        remaining = apply_mark(&remaining, index, guess, pos, mark, &mut counter);
        debug!(
            "{} at {} ({:?}): {} candidates",
            guess.letter(pos) as char,
            pos,
            mark,
            remaining.len()
        );
    }
    remaining
}

/// What is left after a feedback round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    pub remaining: usize,
    /// The remaining words, present only when few enough are left to list.
    pub revealed: Option<Vec<Word>>,
}

/// Owns the candidate set and its index for one game.
#[derive(Debug, Clone)]
pub struct Solver {
    dictionary: CandidateSet,
    index: DictionaryIndex,
    reveal_below: usize,
    rounds: usize,
}

impl Solver {
    pub fn new(dictionary: CandidateSet) -> Self {
        Self {
            index: DictionaryIndex::new(dictionary.clone()),
            dictionary,
            reveal_below: crate::DEFAULT_REVEAL_BELOW,
            rounds: 0,
        }
    }

    /// List remaining candidates after a round when fewer than `n` remain.
    pub fn with_reveal_below(mut self, n: usize) -> Self {
        self.reveal_below = n;
        self
    }

    pub fn candidates(&self) -> &CandidateSet {
        self.index.words()
    }

    pub fn remaining_count(&self) -> usize {
        self.index.len()
    }

    pub fn index(&self) -> &DictionaryIndex {
        &self.index
    }

    pub fn dictionary(&self) -> &CandidateSet {
        &self.dictionary
    }

    /// Feedback rounds applied since the start of the game.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Start over from the full dictionary.
    pub fn reset(&mut self) {
        self.index = DictionaryIndex::new(self.dictionary.clone());
        self.rounds = 0;
    }

    pub fn next_guess(&self) -> Result<Word> {
        self.index.best_guess()
    }

    pub fn apply_feedback(&mut self, guess: &Word, feedback: &Feedback) -> RoundReport {
        let before = self.remaining_count();
        let remaining = filter_candidates(self.index.words(), &self.index, guess, feedback);
        self.index = DictionaryIndex::new(remaining);
        self.rounds += 1;

        let remaining = self.remaining_count();
        info!(
            "round {}: {} {} left {} of {} candidates",
            self.rounds,
            guess,
            feedback.to_symbols(),
            remaining,
            before
        );
        if remaining == 0 {
            warn!("feedback for {} eliminated every candidate", guess);
        }

        RoundReport {
            remaining,
            revealed: (remaining < self.reveal_below).then(|| self.candidates().to_vec()),
        }
    }

    /// Play rounds until a guess earns all-green feedback.
    /// Returns the sequence of guesses made
    pub fn solve_with_feedback<F>(&mut self, mut get_feedback: F) -> Result<Vec<(Word, Feedback)>>
    where
        F: FnMut(&Word) -> Feedback,
    {
        let mut guesses = Vec::new();
        loop {
            let guess = self.next_guess()?;
            let feedback = get_feedback(&guess);
            guesses.push((guess, feedback));
            if feedback.is_win() {
                return Ok(guesses);
            }
            self.apply_feedback(&guess, &feedback);
        }
    }

    /// Solve a puzzle knowing the answer (for testing/benchmarking)
    pub fn solve_for_target(&mut self, answer: &Word) -> Result<Vec<(Word, Feedback)>> {
        self.solve_with_feedback(|guess| Feedback::score(guess, answer))
    }

    /// Self-play against every dictionary word.
    ///
    /// Returns `(guesses, games)` pairs in ascending order of guess count and
    /// the number of games that ended with no candidates left.
    pub fn benchmark_guess_distribution(&self) -> (Vec<(usize, usize)>, usize) {
        let outcomes: Vec<Option<usize>> = self
            .dictionary
            .as_btree()
            .par_iter()
            .map(|answer| {
                let mut solver = Solver::new(self.dictionary.clone());
                solver.solve_for_target(answer).ok().map(|guesses| guesses.len())
            })
            .collect();

        let failures = outcomes.iter().filter(|o| o.is_none()).count();
        let max_guesses = outcomes.iter().flatten().copied().max().unwrap_or(0);
        let mut distribution = vec![0usize; max_guesses + 1];
        for count in outcomes.into_iter().flatten() {
            distribution[count] += 1;
        }

        let distribution = distribution
            .into_iter()
            .enumerate()
            .filter(|(_, count)| *count > 0)
            .collect();
        (distribution, failures)
    }
}
