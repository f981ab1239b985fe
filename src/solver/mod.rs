//! Automatic players
//!
//! Anagram lookup and the simulated players used to exercise games in bulk.

mod index;
pub mod strategy;

pub use index::AnagramIndex;
pub use strategy::{AnagramPlayer, CarelessPlayer, Move, Player, PlayerType, SkipPlayer};
