//! The game state holder
//!
//! `GameState` owns everything that changes during play: the hidden answer, the
//! words already shown, the player's in-progress guess and the observable
//! [`GameUiState`] snapshot. Commands mutate it synchronously and every changed
//! snapshot is pushed to subscribers.

use super::subscribers::{Subscribers, SubscriptionId};
use super::{GameUiState, Phase, Word, scramble};
use crate::config::GameConfig;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;
use tracing::{debug, info, trace};

/// Random draws tried before choosing directly among the unused words
pub const MAX_PICK_ATTEMPTS: usize = 32;

/// State of one unscramble game
///
/// # Examples
/// ```
/// use unscramble::config::GameConfig;
/// use unscramble::core::GameState;
///
/// let config = GameConfig::from_strs(&["bat", "cup"], 2, 20).unwrap();
/// let mut game = GameState::new(&config);
/// assert_eq!(game.ui_state().current_word_count(), 1);
///
/// game.update_user_guess("definitely wrong");
/// game.check_user_guess();
/// assert!(game.ui_state().is_guessed_word_wrong());
/// assert_eq!(game.user_guess(), "");
///
/// game.skip_word();
/// game.skip_word();
/// assert!(game.ui_state().is_game_over());
/// assert_eq!(game.ui_state().score, 0);
/// ```
pub struct GameState<'a, R: Rng = StdRng> {
    config: &'a GameConfig,
    rng: R,
    current_word: &'a Word,
    used_words: FxHashSet<&'a str>,
    ui_state: GameUiState,
    user_guess: String,
    subscribers: Subscribers<'a>,
}

impl<'a> GameState<'a> {
    /// Start a game seeded from the operating system
    #[must_use]
    pub fn new(config: &'a GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }
}

impl<'a, R: Rng> GameState<'a, R> {
    /// Start a game drawing words and scrambles from `rng`
    pub fn with_rng(config: &'a GameConfig, rng: R) -> Self {
        let mut game = Self {
            config,
            rng,
            current_word: &config.words()[0],
            used_words: FxHashSet::default(),
            ui_state: GameUiState::new_game(String::new()),
            user_guess: String::new(),
            subscribers: Subscribers::default(),
        };
        game.reset_game();
        game
    }

    /// Latest snapshot
    #[inline]
    #[must_use]
    pub const fn ui_state(&self) -> &GameUiState {
        &self.ui_state
    }

    /// The player's in-progress guess
    #[inline]
    #[must_use]
    pub fn user_guess(&self) -> &str {
        &self.user_guess
    }

    /// Number of distinct words shown so far in this game
    #[inline]
    #[must_use]
    pub fn used_word_count(&self) -> usize {
        self.used_words.len()
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &'a GameConfig {
        self.config
    }

    /// Register an observer
    ///
    /// The callback receives the current snapshot right away, then every
    /// snapshot that differs from the previous one.
    pub fn subscribe(&mut self, mut callback: impl FnMut(&GameUiState) + 'a) -> SubscriptionId {
        callback(&self.ui_state);
        self.subscribers.add(callback)
    }

    /// Returns false if `id` was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    /// Replace the in-progress guess. No validation is done.
    pub fn update_user_guess(&mut self, guess: impl Into<String>) {
        self.user_guess = guess.into();
    }

    /// Submit the in-progress guess
    ///
    /// A case-insensitive match scores and moves to the next round (or ends the
    /// game). Anything else only flags the guess as wrong. The guess is cleared
    /// either way. After the game is over, guesses are discarded.
    pub fn check_user_guess(&mut self) {
        match self.ui_state.phase {
            Phase::GameOver { .. } => debug!("guess ignored after game over"),
            Phase::Playing { round, .. } => {
                if self.current_word.matches_guess(&self.user_guess) {
                    let updated_score = self
                        .ui_state
                        .score
                        .saturating_add(self.config.score_increase());
                    debug!(round, score = updated_score, "correct guess");
                    self.update_game_state(updated_score);
                } else {
                    debug!(round, "wrong guess");
                    self.publish(GameUiState {
                        phase: Phase::Playing {
                            round,
                            wrong_guess: true,
                        },
                        ..self.ui_state.clone()
                    });
                }
            }
        }

        self.user_guess.clear();
    }

    /// Give up on the current word without changing the score
    pub fn skip_word(&mut self) {
        if let Phase::Playing { round, .. } = self.ui_state.phase {
            debug!(round, "word skipped");
            self.update_game_state(self.ui_state.score);
        }

        self.user_guess.clear();
    }

    /// Start a new game from round 1
    pub fn reset_game(&mut self) {
        self.used_words.clear();
        let scrambled_word = self.pick_random_word_and_shuffle();
        self.user_guess.clear();
        info!(
            rounds = self.config.max_words(),
            words = self.config.words().len(),
            "new game"
        );
        self.publish(GameUiState::new_game(scrambled_word));
    }

    /// Move past the current round with `updated_score`
    fn update_game_state(&mut self, updated_score: u32) {
        let round = self.ui_state.current_word_count();

        let next = if self.used_words.len() >= self.config.max_words() {
            info!(rounds = round, final_score = updated_score, "game over");
            GameUiState {
                scrambled_word: self.ui_state.scrambled_word.clone(),
                score: updated_score,
                phase: Phase::GameOver {
                    rounds: round,
                    final_score: updated_score,
                },
            }
        } else {
            GameUiState {
                scrambled_word: self.pick_random_word_and_shuffle(),
                score: updated_score,
                phase: Phase::Playing {
                    round: round + 1,
                    wrong_guess: false,
                },
            }
        };

        self.publish(next);
    }

    fn pick_random_word_and_shuffle(&mut self) -> String {
        let word = self.pick_unused_word();
        self.used_words.insert(word.text());
        self.current_word = word;
        trace!(word = word.text(), used = self.used_words.len(), "picked word");
        scramble(word, &mut self.rng)
    }

    fn pick_unused_word(&mut self) -> &'a Word {
        let config = self.config;
        let words = config.words();

        for _ in 0..MAX_PICK_ATTEMPTS {
            let word = &words[self.rng.random_range(0..words.len())];
            if !self.used_words.contains(word.text()) {
                return word;
            }
        }

        let unused: Vec<&'a Word> = words
            .iter()
            .filter(|word| !self.used_words.contains(word.text()))
            .collect();
        debug!(unused = unused.len(), "random draws kept hitting used words");

        unused
            .choose(&mut self.rng)
            .copied()
            .expect("config guarantees an unused word while rounds remain")
    }

    fn publish(&mut self, next: GameUiState) {
        if next != self.ui_state {
            self.ui_state = next;
            self.subscribers.notify(&self.ui_state);
        }
    }
}
