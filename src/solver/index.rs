//! Anagram lookup over the word list

use crate::core::{Word, letter_key};
use rustc_hash::{FxHashMap, FxHashSet};

/// Dictionary words grouped by their sorted letters
///
/// Looking up a scramble yields every distinct word that uses exactly its
/// letters, one of which is the hidden answer.
pub struct AnagramIndex<'a> {
    by_key: FxHashMap<&'a str, Vec<&'a Word>>,
}

impl<'a> AnagramIndex<'a> {
    /// Index `words`, ignoring duplicates
    #[must_use]
    pub fn new(words: &'a [Word]) -> Self {
        let mut seen = FxHashSet::default();
        let mut by_key: FxHashMap<&'a str, Vec<&'a Word>> = FxHashMap::default();

        for word in words {
            if seen.insert(word.text()) {
                by_key.entry(word.letter_key()).or_default().push(word);
            }
        }

        Self { by_key }
    }

    /// Words whose letters match `scrambled`, in word list order
    ///
    /// The scramble itself is never the answer, so it is excluded.
    #[must_use]
    pub fn candidates(&self, scrambled: &str) -> Vec<&'a Word> {
        let key = letter_key(scrambled);
        let scrambled = scrambled.to_lowercase();

        self.by_key
            .get(key.as_str())
            .map(|words| {
                words
                    .iter()
                    .copied()
                    .filter(|word| word.text() != scrambled)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of distinct letter sets
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}
