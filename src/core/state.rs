//! Observable game snapshot
//!
//! `GameUiState` is what the presentation layer sees: the scrambled word, the
//! score and the phase of the game. It is replaced as a whole on every change.

/// Phase of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// A round is active. `round` is 1-based.
    Playing { round: usize, wrong_guess: bool },
    /// Every round has been played
    GameOver { rounds: usize, final_score: u32 },
}

/// Snapshot of the game as presented to the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameUiState {
    pub scrambled_word: String,
    pub score: u32,
    pub phase: Phase,
}

impl GameUiState {
    /// State at the start of a game
    #[must_use]
    pub fn new_game(scrambled_word: String) -> Self {
        Self {
            scrambled_word,
            score: 0,
            phase: Phase::Playing {
                round: 1,
                wrong_guess: false,
            },
        }
    }

    /// 1-based number of the current (or, after the game, last) round
    #[must_use]
    pub const fn current_word_count(&self) -> usize {
        match self.phase {
            Phase::Playing { round, .. } => round,
            Phase::GameOver { rounds, .. } => rounds,
        }
    }

    /// Whether the last submitted guess was wrong
    #[must_use]
    pub const fn is_guessed_word_wrong(&self) -> bool {
        matches!(
            self.phase,
            Phase::Playing {
                wrong_guess: true,
                ..
            }
        )
    }

    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_starts_at_round_one() {
        let state = GameUiState::new_game("tab".to_string());
        assert_eq!(state.current_word_count(), 1);
        assert_eq!(state.score, 0);
        assert!(!state.is_guessed_word_wrong());
        assert!(!state.is_game_over());
    }

    #[test]
    fn accessors_follow_phase() {
        let mut state = GameUiState::new_game("tab".to_string());
        state.phase = Phase::Playing {
            round: 3,
            wrong_guess: true,
        };
        assert_eq!(state.current_word_count(), 3);
        assert!(state.is_guessed_word_wrong());

        state.phase = Phase::GameOver {
            rounds: 10,
            final_score: 160,
        };
        assert_eq!(state.current_word_count(), 10);
        assert!(state.is_game_over());
        assert!(!state.is_guessed_word_wrong());
    }
}
