//! Command implementations

pub mod simple;
pub mod simulate;

pub use simple::run_simple;
pub use simulate::{GameOutcome, SimulationResult, play_game, run_simulation};
