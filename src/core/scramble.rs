//! Letter scrambling
//!
//! A scramble is a uniformly random rearrangement of a word's letters that is
//! never the word itself.

use super::Word;
use rand::Rng;
use rand::seq::SliceRandom;

/// Reshuffles tried before falling back to a rotation
pub const MAX_SHUFFLE_ATTEMPTS: usize = 64;

/// Scramble the letters of `word`
///
/// Reshuffles the whole word until the result differs from the original, up to
/// [`MAX_SHUFFLE_ATTEMPTS`] times. If every attempt reproduced the word, the
/// letters are rotated left by one instead. A rotation only equals the original
/// when all letters are identical, which [`Word`] rules out.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use unscramble::core::{Word, scramble};
///
/// let word = Word::new("puzzle").unwrap();
/// let scrambled = scramble(&word, &mut StdRng::seed_from_u64(7));
/// assert_ne!(scrambled, "puzzle");
/// ```
pub fn scramble<R: Rng + ?Sized>(word: &Word, rng: &mut R) -> String {
    scramble_bounded(word, rng, MAX_SHUFFLE_ATTEMPTS)
}

fn scramble_bounded<R: Rng + ?Sized>(word: &Word, rng: &mut R, attempts: usize) -> String {
    let original: Vec<char> = word.text().chars().collect();
    let mut letters = original.clone();

    for _ in 0..attempts {
        letters.shuffle(rng);
        if letters != original {
            return letters.into_iter().collect();
        }
    }

    letters.copy_from_slice(&original);
    letters.rotate_left(1);
    letters.into_iter().collect()
}

/// Check whether `candidate` is a valid scramble of `word`
///
/// True when it uses exactly the same letters and is not the word itself.
#[must_use]
pub fn is_scramble_of(candidate: &str, word: &Word) -> bool {
    candidate != word.text() && super::word::letter_key(candidate) == word.letter_key()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn scramble_is_permutation_and_differs() {
        let mut rng = StdRng::seed_from_u64(42);
        for text in ["bat", "cup", "ab", "kaleidoscope", "moon", "yoyo", "über"] {
            let word = Word::new(text).unwrap();
            for _ in 0..200 {
                let scrambled = scramble(&word, &mut rng);
                assert!(
                    is_scramble_of(&scrambled, &word),
                    "'{scrambled}' is not a scramble of '{text}'"
                );
            }
        }
    }

    #[test]
    fn two_letter_word_always_swaps() {
        let word = Word::new("on").unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            assert_eq!(scramble(&word, &mut rng), "no");
        }
    }

    #[test]
    fn scramble_reaches_every_arrangement() {
        let word = Word::new("cat").unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(scramble(&word, &mut rng));
        }
        // 3! arrangements minus the word itself
        assert_eq!(seen.len(), 5);
        assert!(!seen.contains("cat"));
    }

    #[test]
    fn exhausted_attempts_fall_back_to_rotation() {
        let mut rng = StdRng::seed_from_u64(9);

        let word = Word::new("abab").unwrap();
        assert_eq!(scramble_bounded(&word, &mut rng, 0), "baba");

        let word = Word::new("seed").unwrap();
        let rotated = scramble_bounded(&word, &mut rng, 0);
        assert_eq!(rotated, "eeds");
        assert!(is_scramble_of(&rotated, &word));
    }

    #[test]
    fn is_scramble_of_rejects_identity_and_other_letters() {
        let word = Word::new("cup").unwrap();
        assert!(is_scramble_of("pcu", &word));
        assert!(!is_scramble_of("cup", &word));
        assert!(!is_scramble_of("cap", &word));
        assert!(!is_scramble_of("cupp", &word));
    }
}
