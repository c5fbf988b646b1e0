//! # Wordle Assistant
//!
//! An interactive assistant for five-letter word deduction games.
//!
//! The assistant keeps the set of words still consistent with the feedback seen
//! so far, indexes it by letter, letter multiplicity and position, and proposes
//! the candidate that shares the most letters (and letter positions) with the
//! rest of the set.

pub mod candidates;
pub mod dictionary;
pub mod error;
pub mod feedback;
pub mod index;
pub mod session;
pub mod solver;
pub mod word;

pub use candidates::CandidateSet;
pub use dictionary::{load_dictionary, read_dictionary};
pub use error::{Error, InputError, Result};
pub use feedback::{Feedback, Mark};
pub use index::{DictionaryIndex, GuessScore, WordSet};
pub use session::Session;
pub use solver::{filter_candidates, LetterCounter, RoundReport, Solver};
pub use word::Word;

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;

/// Number of letters in the alphabet words are drawn from
pub const ALPHABET_SIZE: usize = 26;

/// Highest letter multiplicity the index tracks.
///
/// Counts above this are never produced by a feedback round, so the index
/// answers them with the empty set.
pub const MAX_LETTER_COUNT: usize = 4;

/// Candidates are listed after a round when fewer than this many remain.
pub const DEFAULT_REVEAL_BELOW: usize = 10;
