//! Game configuration
//!
//! The word list and the two game constants, validated once up front so that
//! the game itself never has to handle a configuration it cannot play.

use crate::core::{Word, WordError};
use crate::wordlists::WORDS;
use rustc_hash::FxHashSet;
use std::fmt;

/// Rounds in a default game
pub const MAX_NO_OF_WORDS: usize = 10;

/// Points awarded for each correct guess in a default game
pub const SCORE_INCREASE: u32 = 20;

/// Validated game configuration
#[derive(Debug, Clone)]
pub struct GameConfig {
    words: Vec<Word>,
    max_words: usize,
    score_increase: u32,
}

/// Reasons a configuration is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyWordList,
    ZeroRounds,
    ZeroScoreIncrease,
    NotEnoughWords { distinct: usize, max_words: usize },
    InvalidWord { word: String, source: WordError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "Word list is empty"),
            Self::ZeroRounds => write!(f, "A game needs at least one round"),
            Self::ZeroScoreIncrease => write!(f, "Score increase must be positive"),
            Self::NotEnoughWords {
                distinct,
                max_words,
            } => write!(
                f,
                "Word list has {distinct} distinct words but a game needs {max_words}"
            ),
            Self::InvalidWord { word, source } => write!(f, "Invalid word '{word}': {source}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl GameConfig {
    /// Build a configuration from already validated words
    ///
    /// Duplicates are kept (they make a word more likely to be drawn) but only
    /// distinct words count towards `max_words`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the list is empty, either constant is zero, or
    /// the list has fewer distinct words than rounds in a game.
    pub fn new(
        words: Vec<Word>,
        max_words: usize,
        score_increase: u32,
    ) -> Result<Self, ConfigError> {
        if words.is_empty() {
            return Err(ConfigError::EmptyWordList);
        }
        if max_words == 0 {
            return Err(ConfigError::ZeroRounds);
        }
        if score_increase == 0 {
            return Err(ConfigError::ZeroScoreIncrease);
        }

        let distinct = words
            .iter()
            .map(Word::text)
            .collect::<FxHashSet<_>>()
            .len();
        if distinct < max_words {
            return Err(ConfigError::NotEnoughWords {
                distinct,
                max_words,
            });
        }

        Ok(Self {
            words,
            max_words,
            score_increase,
        })
    }

    /// Build a configuration from raw strings
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWord` for the first string that is not a
    /// valid [`Word`], otherwise the same errors as [`GameConfig::new`].
    ///
    /// # Examples
    /// ```
    /// use unscramble::config::GameConfig;
    ///
    /// let config = GameConfig::from_strs(&["bat", "cup"], 2, 20).unwrap();
    /// assert_eq!(config.words().len(), 2);
    ///
    /// assert!(GameConfig::from_strs(&["bat"], 2, 20).is_err());
    /// ```
    pub fn from_strs<S: AsRef<str>>(
        words: &[S],
        max_words: usize,
        score_increase: u32,
    ) -> Result<Self, ConfigError> {
        let words = words
            .iter()
            .map(|raw| {
                Word::new(raw).map_err(|source| ConfigError::InvalidWord {
                    word: raw.as_ref().to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(words, max_words, score_increase)
    }

    /// Embedded word list with the default constants
    ///
    /// # Errors
    ///
    /// Only fails if the embedded list itself is broken, which the word list
    /// tests rule out.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_strs(WORDS, MAX_NO_OF_WORDS, SCORE_INCREASE)
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub const fn max_words(&self) -> usize {
        self.max_words
    }

    #[inline]
    #[must_use]
    pub const fn score_increase(&self) -> u32 {
        self.score_increase
    }

    /// Score of a game where every word is guessed, saturating at `u32::MAX`
    #[must_use]
    pub fn perfect_score(&self) -> u32 {
        let rounds = u32::try_from(self.max_words).unwrap_or(u32::MAX);
        self.score_increase.saturating_mul(rounds)
    }

    /// Copy of this configuration with different game constants
    ///
    /// # Errors
    ///
    /// Same validation as [`GameConfig::new`].
    pub fn with_limits(&self, max_words: usize, score_increase: u32) -> Result<Self, ConfigError> {
        Self::new(self.words.clone(), max_words, score_increase)
    }
}
