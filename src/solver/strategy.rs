//! Simulated players
//!
//! Defines the Player trait and the concrete ways a simulated player answers a
//! scramble.

use super::AnagramIndex;
use crate::core::{GameUiState, Phase};
use rand::Rng;
use rand::seq::SliceRandom;

/// What a player does on its turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Move {
    Guess(String),
    Skip,
}

/// A strategy for answering the current scramble
pub trait Player {
    /// Choose the next move for `state`
    fn next_move<R: Rng + ?Sized>(&mut self, state: &GameUiState, rng: &mut R) -> Move;
}

/// Enum wrapper for all player types
///
/// Allows runtime selection of the player while maintaining static dispatch.
pub enum PlayerType<'a> {
    /// Tries dictionary anagrams one by one (default)
    Anagram(AnagramPlayer<'a>),
    /// Anagram player that sometimes submits nonsense
    Careless(CarelessPlayer<'a>),
    /// Skips every word
    Skip(SkipPlayer),
}

impl Player for PlayerType<'_> {
    fn next_move<R: Rng + ?Sized>(&mut self, state: &GameUiState, rng: &mut R) -> Move {
        match self {
            Self::Anagram(p) => p.next_move(state, rng),
            Self::Careless(p) => p.next_move(state, rng),
            Self::Skip(p) => p.next_move(state, rng),
        }
    }
}

impl<'a> PlayerType<'a> {
    /// Names accepted by [`PlayerType::from_name`]
    pub const NAMES: [&'static str; 3] = ["anagram", "careless", "skip"];

    /// The name [`PlayerType::from_name`] actually plays as
    ///
    /// Unrecognized names resolve to "anagram".
    #[must_use]
    pub fn resolve_name(name: &str) -> &'static str {
        Self::NAMES
            .into_iter()
            .find(|&known| known == name)
            .unwrap_or(Self::NAMES[0])
    }

    /// Create player from name string
    ///
    /// Supported names: "anagram", "careless", "skip".
    /// Defaults to anagram if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, index: &'a AnagramIndex<'a>) -> Self {
        match Self::resolve_name(name) {
            "careless" => Self::Careless(CarelessPlayer::new(index, CarelessPlayer::DEFAULT_SLIP)),
            "skip" => Self::Skip(SkipPlayer),
            _ => Self::Anagram(AnagramPlayer::new(index)),
        }
    }
}

/// Guesses every dictionary word that fits the scramble, in random order
///
/// Skips once every candidate has been rejected, which only happens when the
/// answer is missing from the index.
pub struct AnagramPlayer<'a> {
    index: &'a AnagramIndex<'a>,
    round: Option<(usize, String)>,
    queue: Vec<&'a str>,
}

impl<'a> AnagramPlayer<'a> {
    #[must_use]
    pub const fn new(index: &'a AnagramIndex<'a>) -> Self {
        Self {
            index,
            round: None,
            queue: Vec::new(),
        }
    }
}

impl Player for AnagramPlayer<'_> {
    fn next_move<R: Rng + ?Sized>(&mut self, state: &GameUiState, rng: &mut R) -> Move {
        let Phase::Playing { round, .. } = state.phase else {
            return Move::Skip;
        };

        let key = (round, state.scrambled_word.clone());
        if self.round.as_ref() != Some(&key) {
            self.queue = self
                .index
                .candidates(&state.scrambled_word)
                .into_iter()
                .map(|word| word.text())
                .collect();
            self.queue.shuffle(rng);
            self.round = Some(key);
        }

        self.queue
            .pop()
            .map_or(Move::Skip, |word| Move::Guess(word.to_string()))
    }
}

/// Anagram player that submits the scramble itself with probability `slip`
pub struct CarelessPlayer<'a> {
    inner: AnagramPlayer<'a>,
    slip: f64,
}

impl<'a> CarelessPlayer<'a> {
    pub const DEFAULT_SLIP: f64 = 0.3;

    /// `slip` is clamped to `0.0..=1.0`
    #[must_use]
    pub fn new(index: &'a AnagramIndex<'a>, slip: f64) -> Self {
        Self {
            inner: AnagramPlayer::new(index),
            slip: slip.clamp(0.0, 1.0),
        }
    }
}

impl Player for CarelessPlayer<'_> {
    fn next_move<R: Rng + ?Sized>(&mut self, state: &GameUiState, rng: &mut R) -> Move {
        if !state.is_game_over() && rng.random_bool(self.slip) {
            // The scramble never equals the answer
            return Move::Guess(state.scrambled_word.clone());
        }
        self.inner.next_move(state, rng)
    }
}

/// Skips every word
pub struct SkipPlayer;

impl Player for SkipPlayer {
    fn next_move<R: Rng + ?Sized>(&mut self, _state: &GameUiState, _rng: &mut R) -> Move {
        Move::Skip
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn playing(scrambled: &str, round: usize) -> GameUiState {
        GameUiState {
            scrambled_word: scrambled.to_string(),
            score: 0,
            phase: Phase::Playing {
                round,
                wrong_guess: false,
            },
        }
    }

    #[test]
    fn anagram_player_tries_each_candidate_once() {
        let words = words_from_slice(&["listen", "silent", "enlist", "bat"]);
        let index = AnagramIndex::new(&words);
        let mut player = AnagramPlayer::new(&index);
        let mut rng = StdRng::seed_from_u64(1);
        let state = playing("tinsel", 1);

        let mut guesses = Vec::new();
        for _ in 0..3 {
            match player.next_move(&state, &mut rng) {
                Move::Guess(word) => guesses.push(word),
                Move::Skip => panic!("skipped with candidates left"),
            }
        }
        guesses.sort();
        assert_eq!(guesses, ["enlist", "listen", "silent"]);

        assert_eq!(player.next_move(&state, &mut rng), Move::Skip);
    }

    #[test]
    fn anagram_player_restarts_on_new_round() {
        let words = words_from_slice(&["bat", "cup"]);
        let index = AnagramIndex::new(&words);
        let mut player = AnagramPlayer::new(&index);
        let mut rng = StdRng::seed_from_u64(2);

        assert_eq!(
            player.next_move(&playing("tab", 1), &mut rng),
            Move::Guess("bat".to_string())
        );
        assert_eq!(player.next_move(&playing("tab", 1), &mut rng), Move::Skip);
        assert_eq!(
            player.next_move(&playing("tab", 2), &mut rng),
            Move::Guess("bat".to_string())
        );
    }

    #[test]
    fn careless_player_always_slips_at_one() {
        let words = words_from_slice(&["bat"]);
        let index = AnagramIndex::new(&words);
        let mut player = CarelessPlayer::new(&index, 5.0);
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..10 {
            assert_eq!(
                player.next_move(&playing("tab", 1), &mut rng),
                Move::Guess("tab".to_string())
            );
        }
    }

    #[test]
    fn careless_player_never_slips_at_zero() {
        let words = words_from_slice(&["bat"]);
        let index = AnagramIndex::new(&words);
        let mut player = CarelessPlayer::new(&index, 0.0);
        let mut rng = StdRng::seed_from_u64(4);

        assert_eq!(
            player.next_move(&playing("tab", 1), &mut rng),
            Move::Guess("bat".to_string())
        );
    }

    #[test]
    fn from_name_defaults_to_anagram() {
        let words = words_from_slice(&["bat"]);
        let index = AnagramIndex::new(&words);

        assert!(matches!(
            PlayerType::from_name("anagram", &index),
            PlayerType::Anagram(_)
        ));
        assert!(matches!(
            PlayerType::from_name("careless", &index),
            PlayerType::Careless(_)
        ));
        assert!(matches!(
            PlayerType::from_name("skip", &index),
            PlayerType::Skip(_)
        ));
        assert!(matches!(
            PlayerType::from_name("unknown", &index),
            PlayerType::Anagram(_)
        ));
    }

    #[test]
    fn everyone_skips_after_game_over() {
        let words = words_from_slice(&["bat"]);
        let index = AnagramIndex::new(&words);
        let over = GameUiState {
            scrambled_word: "tab".to_string(),
            score: 20,
            phase: Phase::GameOver {
                rounds: 1,
                final_score: 20,
            },
        };
        let mut rng = StdRng::seed_from_u64(5);

        for name in PlayerType::NAMES {
            let mut player = PlayerType::from_name(name, &index);
            assert_eq!(player.next_move(&over, &mut rng), Move::Skip);
        }
    }

    #[test]
    fn unknown_names_resolve_to_anagram() {
        assert_eq!(PlayerType::resolve_name("careless"), "careless");
        assert_eq!(PlayerType::resolve_name("skip"), "skip");
        assert_eq!(PlayerType::resolve_name("bogus"), "anagram");
        assert_eq!(PlayerType::resolve_name(""), "anagram");
    }
}
