//! Unscramble
//!
//! A word-unscrambling game: each round shows a shuffled word, correct guesses
//! score points, and the game ends after a fixed number of words.
//!
//! # Quick Start
//!
//! ```rust
//! use unscramble::config::GameConfig;
//! use unscramble::core::GameState;
//!
//! let config = GameConfig::from_strs(&["bat", "cup"], 2, 20).unwrap();
//! let mut game = GameState::new(&config);
//!
//! game.update_user_guess("nope");
//! game.check_user_guess();
//! assert!(game.ui_state().is_guessed_word_wrong());
//!
//! game.skip_word();
//! assert_eq!(game.ui_state().current_word_count(), 2);
//! ```

// Core domain types and the game state holder
pub mod core;

// Game configuration
pub mod config;

// Word lists
pub mod wordlists;

// Automatic players
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
