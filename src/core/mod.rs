//! Core domain types for the unscramble game
//!
//! Words, scrambling, the observable snapshot and the game state holder. Nothing
//! in here does I/O; every operation runs to completion synchronously.

mod game;
mod scramble;
mod state;
mod subscribers;
mod word;

pub use game::{GameState, MAX_PICK_ATTEMPTS};
pub use scramble::{MAX_SHUFFLE_ATTEMPTS, is_scramble_of, scramble};
pub use state::{GameUiState, Phase};
pub use subscribers::{Subscribers, SubscriptionId};
pub use word::{Word, WordError, letter_key};
