//! Per-letter feedback for a guess.
//!
//! Feedback arrives as one line of five characters: `g` for green, `y` for
//! yellow, anything else for a miss.

use std::fmt;
use std::str::FromStr;

use crate::error::InputError;
use crate::word::{letter_index, Word};
use crate::{ALPHABET_SIZE, WORD_LENGTH};

/// Represents the feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Correct letter in correct position
    Green,
    /// Letter present elsewhere in the word
    Yellow,
    /// No further occurrence of the letter
    Miss,
}

impl Mark {
    /// Parse a feedback symbol. Anything but `g` or `y` is a miss.
    pub fn from_char(c: char) -> Self {
        match c {
            'g' => Mark::Green,
            'y' => Mark::Yellow,
            _ => Mark::Miss,
        }
    }

    /// The symbol a player types for this mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::Green => 'g',
            Mark::Yellow => 'y',
            Mark::Miss => 'm',
        }
    }

    pub fn to_emoji(self) -> char {
        match self {
            Mark::Green => '🟩',
            Mark::Yellow => '🟨',
            Mark::Miss => '⬛',
        }
    }
}

/// Marks for all five positions of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LENGTH]);

impl Feedback {
    pub const ALL_GREEN: Self = Self([Mark::Green; WORD_LENGTH]);

    pub fn new(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    /// Parse a feedback line such as `"gymmg"`.
    ///
    /// Only the length is checked; characters other than `g`/`y` (including
    /// `G`/`Y`) are misses.
    pub fn parse(s: &str) -> Result<Self, InputError> {
        let found = s.chars().count();
        if found != WORD_LENGTH {
            return Err(InputError::WrongLength {
                expected: WORD_LENGTH,
                found,
            });
        }
        let mut marks = [Mark::Miss; WORD_LENGTH];
        for (mark, c) in marks.iter_mut().zip(s.chars()) {
            *mark = Mark::from_char(c);
        }
        Ok(Self(marks))
    }

    /// Feedback the game would give for `guess` when the answer is `answer`.
    ///
    /// Greens are assigned first; yellows then go left to right while the
    /// answer still has unmatched copies of the letter.
    pub fn score(guess: &Word, answer: &Word) -> Self {
        let mut marks = [Mark::Miss; WORD_LENGTH];
        let mut unmatched = [0u8; ALPHABET_SIZE];

        for pos in 0..WORD_LENGTH {
            if guess.letter(pos) == answer.letter(pos) {
                marks[pos] = Mark::Green;
            } else {
                unmatched[letter_index(answer.letter(pos))] += 1;
            }
        }

        for pos in 0..WORD_LENGTH {
            if marks[pos] == Mark::Green {
                continue;
            }
            let slot = &mut unmatched[letter_index(guess.letter(pos))];
            if *slot > 0 {
                marks[pos] = Mark::Yellow;
                *slot -= 1;
            }
        }

        Self(marks)
    }

    pub fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    pub fn is_win(&self) -> bool {
        *self == Self::ALL_GREEN
    }

    /// The feedback as typed symbols, e.g. `"gymmg"`.
    pub fn to_symbols(&self) -> String {
        self.0.iter().map(|m| m.symbol()).collect()
    }
}

impl FromStr for Feedback {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.to_emoji())?;
        }
        Ok(())
    }
}
