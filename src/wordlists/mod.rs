//! Word lists for the game
//!
//! Provides the embedded word list compiled into the binary, and loading of
//! custom lists from files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_NO_OF_WORDS;
    use crate::core::Word;
    use std::collections::HashSet;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid() {
        for &word in WORDS {
            assert!(Word::new(word).is_ok(), "Word '{word}' cannot be scrambled");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_are_distinct() {
        let distinct: HashSet<_> = WORDS.iter().collect();
        assert_eq!(distinct.len(), WORDS.len());
    }

    #[test]
    fn enough_words_for_a_game() {
        // Far more words than rounds keeps random draws from repeating often
        assert!(WORDS_COUNT >= MAX_NO_OF_WORDS * 10);
    }
}
