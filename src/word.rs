//! The five-letter word value type.

use std::fmt;
use std::str::FromStr;

use crate::error::InputError;
use crate::WORD_LENGTH;

/// A 5 letter word. Each byte is an ascii lowercase letter a-z.
///
/// Ordering is lexicographic, which is also the order candidates are listed in
/// and the order used to break ties between equally scored guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Parse a word, rejecting anything that is not exactly five lowercase
    /// ASCII letters.
    pub fn parse(s: &str) -> Result<Self, InputError> {
        let bytes: [u8; WORD_LENGTH] = s
            .as_bytes()
            .try_into()
            .map_err(|_| InputError::InvalidWord(s.to_string()))?;
        if !bytes.iter().all(u8::is_ascii_lowercase) {
            return Err(InputError::InvalidWord(s.to_string()));
        }
        Ok(Self(bytes))
    }

    pub fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    pub fn letter(&self, pos: usize) -> u8 {
        self.0[pos]
    }

    /// How many times each letter of the alphabet occurs, indexed by
    /// `letter - b'a'`.
    pub fn letter_counts(&self) -> [u8; crate::ALPHABET_SIZE] {
        let mut counts = [0u8; crate::ALPHABET_SIZE];
        for &b in &self.0 {
            counts[letter_index(b)] += 1;
        }
        counts
    }

    /// True if `pos` holds the first occurrence of its letter in this word.
    pub fn is_first_occurrence(&self, pos: usize) -> bool {
        !self.0[..pos].contains(&self.0[pos])
    }

    pub fn as_str(&self) -> &str {
        // Only lowercase ASCII is ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

/// Alphabet slot for a lowercase ASCII letter.
pub(crate) fn letter_index(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_lowercase());
    (letter - b'a') as usize
}

impl FromStr for Word {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lowercase_words() {
        let word = Word::parse("crane").unwrap();
        assert_eq!(word.to_string(), "crane");
        assert_eq!(word.letter(2), b'a');
    }

    #[test]
    fn rejects_bad_words() {
        assert!(Word::parse("cran").is_err());
        assert!(Word::parse("cranes").is_err());
        assert!(Word::parse("Crane").is_err());
        assert!(Word::parse("cr4ne").is_err());
        assert!(Word::parse("").is_err());
    }

    #[test]
    fn counts_repeated_letters() {
        let word = Word::parse("sissy").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts[letter_index(b's')], 3);
        assert_eq!(counts[letter_index(b'i')], 1);
        assert_eq!(counts[letter_index(b'y')], 1);
        assert_eq!(counts.iter().map(|&c| c as usize).sum::<usize>(), 5);
    }

    #[test]
    fn first_occurrence() {
        let word = Word::parse("allot").unwrap();
        assert!(word.is_first_occurrence(0));
        assert!(word.is_first_occurrence(1));
        assert!(!word.is_first_occurrence(2));
        assert!(word.is_first_occurrence(3));
    }

    #[test]
    fn orders_lexicographically() {
        let mut words: Vec<Word> = ["grate", "crate", "crane"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        words.sort();
        let sorted: Vec<String> = words.iter().map(Word::to_string).collect();
        assert_eq!(sorted, ["crane", "crate", "grate"]);
    }
}
