//! Scramble-able word representation
//!
//! A Word is a lowercase alphabetic word with at least two distinct letters,
//! which guarantees that some rearrangement of its letters differs from it.

use std::fmt;

/// A validated game word
///
/// Stores the normalized text along with its sorted-letter key, which is shared
/// by every anagram of the word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letter_key: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    TooShort(usize),
    InvalidCharacters,
    SingleLetter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort(len) => {
                write!(f, "Word must have at least 2 letters, got {len}")
            }
            Self::InvalidCharacters => write!(f, "Word must contain only letters"),
            Self::SingleLetter(c) => {
                write!(f, "Word made only of '{c}' cannot be scrambled")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and the text is lowercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Fewer than 2 letters remain
    /// - Contains non-alphabetic characters
    /// - Every letter is the same (no scramble can differ from it)
    ///
    /// # Examples
    /// ```
    /// use unscramble::core::Word;
    ///
    /// let word = Word::new("Pizza").unwrap();
    /// assert_eq!(word.text(), "pizza");
    ///
    /// assert!(Word::new("a").is_err());
    /// assert!(Word::new("zz").is_err());
    /// assert!(Word::new("x-ray").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();

        if !text.chars().all(char::is_alphabetic) {
            return Err(WordError::InvalidCharacters);
        }

        let mut letters: Vec<char> = text.chars().collect();
        if letters.len() < 2 {
            return Err(WordError::TooShort(letters.len()));
        }

        if letters.iter().all(|&c| c == letters[0]) {
            return Err(WordError::SingleLetter(letters[0]));
        }

        letters.sort_unstable();
        let letter_key = letters.into_iter().collect();

        Ok(Self { text, letter_key })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Sorted letters of the word; equal for all of its anagrams
    #[inline]
    #[must_use]
    pub fn letter_key(&self) -> &str {
        &self.letter_key
    }

    /// Number of letters (not bytes)
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Always false; a valid word has at least two letters
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Case-insensitive comparison against free-form player input
    #[must_use]
    pub fn matches_guess(&self, guess: &str) -> bool {
        guess.to_lowercase() == self.text
    }
}

/// Sorted-letter key of arbitrary text, lowercased
///
/// Two strings are anagrams of each other exactly when their keys are equal.
#[must_use]
pub fn letter_key(text: &str) -> String {
    let mut letters: Vec<char> = text.to_lowercase().chars().collect();
    letters.sort_unstable();
    letters.into_iter().collect()
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("bat").unwrap();
        assert_eq!(word.text(), "bat");
        assert_eq!(word.letter_key(), "abt");
        assert_eq!(word.len(), 3);
    }

    #[test]
    fn word_creation_normalized() {
        let word = Word::new("  CrUiSe\n").unwrap();
        assert_eq!(word.text(), "cruise");
    }

    #[test]
    fn word_creation_too_short() {
        assert!(matches!(Word::new(""), Err(WordError::TooShort(0))));
        assert!(matches!(Word::new("a"), Err(WordError::TooShort(1))));
    }

    #[test]
    fn word_creation_single_letter() {
        assert_eq!(Word::new("zz"), Err(WordError::SingleLetter('z')));
        assert_eq!(Word::new("OOOO"), Err(WordError::SingleLetter('o')));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("x-ray"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("ice cream"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("r2d2"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_non_ascii_letters() {
        let word = Word::new("Über").unwrap();
        assert_eq!(word.text(), "über");
        assert_eq!(word.len(), 4);
    }

    #[test]
    fn matches_guess_ignores_case() {
        let word = Word::new("cup").unwrap();
        assert!(word.matches_guess("cup"));
        assert!(word.matches_guess("CuP"));
        assert!(!word.matches_guess("pcu"));
        assert!(!word.matches_guess(""));
        assert!(!word.matches_guess(" cup"));
    }

    #[test]
    fn anagrams_share_letter_key() {
        let listen = Word::new("listen").unwrap();
        let silent = Word::new("silent").unwrap();
        assert_eq!(listen.letter_key(), silent.letter_key());
        assert_eq!(letter_key("TINSEL"), listen.letter_key());
        assert_ne!(letter_key("tinsels"), listen.letter_key());
    }

    #[test]
    fn word_display() {
        let word = Word::new("zebra").unwrap();
        assert_eq!(format!("{word}"), "zebra");
    }

    #[test]
    fn word_error_display() {
        assert_eq!(
            WordError::TooShort(1).to_string(),
            "Word must have at least 2 letters, got 1"
        );
        assert_eq!(
            WordError::SingleLetter('a').to_string(),
            "Word made only of 'a' cannot be scrambled"
        );
    }
}
