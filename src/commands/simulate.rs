//! Simulate command
//!
//! Plays many seeded games with an automatic player and checks the game rules
//! on every transition.

use crate::config::GameConfig;
use crate::core::{GameState, GameUiState};
use crate::solver::{AnagramIndex, Move, Player, PlayerType};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Wrong guesses allowed in one round before the simulation skips the word
pub const MAX_ATTEMPTS_PER_ROUND: usize = 16;

/// Result of a single simulated game
#[derive(Debug, Clone, Default)]
pub struct GameOutcome {
    pub final_score: u32,
    pub rounds: usize,
    pub correct: usize,
    pub skipped: usize,
    pub forced_skips: usize,
    pub wrong_guesses: usize,
    pub violations: Vec<String>,
}

/// Aggregate result of a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub player: String,
    pub games: usize,
    pub average_score: f64,
    pub min_score: u32,
    pub max_score: u32,
    pub perfect_score: u32,
    pub perfect_games: usize,
    pub total_correct: usize,
    pub total_skipped: usize,
    pub total_forced_skips: usize,
    pub total_wrong_guesses: usize,
    pub score_distribution: BTreeMap<u32, usize>,
    pub violations: Vec<String>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Play one game to the end with `player`
///
/// The game and the player draw from separate generators derived from `seed`,
/// so a seed fully determines the game.
pub fn play_game<P: Player>(config: &GameConfig, player: &mut P, seed: u64) -> GameOutcome {
    let snapshots = RefCell::new(Vec::new());
    let mut player_rng = StdRng::seed_from_u64(!seed);
    let mut game = GameState::with_rng(config, StdRng::seed_from_u64(seed));
    game.subscribe(|state: &GameUiState| snapshots.borrow_mut().push(state.clone()));

    let mut outcome = GameOutcome::default();
    let mut attempts = 0;

    while !game.ui_state().is_game_over() {
        let before = game.ui_state().clone();

        let guessed = if attempts >= MAX_ATTEMPTS_PER_ROUND {
            debug!(round = before.current_word_count(), "forcing skip");
            game.skip_word();
            outcome.forced_skips += 1;
            false
        } else {
            match player.next_move(&before, &mut player_rng) {
                Move::Guess(text) => {
                    game.update_user_guess(text);
                    game.check_user_guess();
                    true
                }
                Move::Skip => {
                    game.skip_word();
                    outcome.skipped += 1;
                    false
                }
            }
        };

        let after = game.ui_state();
        if guessed && after.score == before.score {
            outcome.wrong_guesses += 1;
            attempts += 1;
            check_wrong_guess(&before, after, &mut outcome.violations);
        } else {
            if guessed {
                outcome.correct += 1;
                check_scored(&before, after, config.score_increase(), &mut outcome.violations);
            } else if after.score != before.score {
                outcome.violations.push(format!(
                    "skip changed score from {} to {}",
                    before.score, after.score
                ));
            }
            attempts = 0;
            check_advanced(&before, after, &mut outcome.violations);
        }

        if !game.user_guess().is_empty() {
            outcome.violations.push("guess not cleared".to_string());
        }
        check_used_words(after, game.used_word_count(), config, &mut outcome.violations);
    }

    outcome.final_score = game.ui_state().score;
    outcome.rounds = game.ui_state().current_word_count();
    drop(game);

    check_history(
        &snapshots.into_inner(),
        config.score_increase(),
        &mut outcome.violations,
    );
    outcome
}

fn check_wrong_guess(before: &GameUiState, after: &GameUiState, violations: &mut Vec<String>) {
    if !after.is_guessed_word_wrong() {
        violations.push("wrong guess not flagged".to_string());
    }
    if after.current_word_count() != before.current_word_count()
        || after.scrambled_word != before.scrambled_word
    {
        violations.push(format!(
            "wrong guess moved round {} to {}",
            before.current_word_count(),
            after.current_word_count()
        ));
    }
}

fn check_scored(
    before: &GameUiState,
    after: &GameUiState,
    score_increase: u32,
    violations: &mut Vec<String>,
) {
    if after.score != before.score.saturating_add(score_increase) {
        violations.push(format!(
            "correct guess scored {} -> {}",
            before.score, after.score
        ));
    }
}

fn check_advanced(before: &GameUiState, after: &GameUiState, violations: &mut Vec<String>) {
    if after.is_guessed_word_wrong() {
        violations.push("wrong-guess flag survived a new round".to_string());
    }
    if !after.is_game_over() && after.current_word_count() != before.current_word_count() + 1 {
        violations.push(format!(
            "round went from {} to {}",
            before.current_word_count(),
            after.current_word_count()
        ));
    }
}

fn check_used_words(
    state: &GameUiState,
    used: usize,
    config: &GameConfig,
    violations: &mut Vec<String>,
) {
    let expected = if state.is_game_over() {
        config.max_words()
    } else {
        state.current_word_count()
    };
    if used != expected {
        violations.push(format!("{used} words used, expected {expected}"));
    }
}

/// Checks over everything subscribers were shown
fn check_history(history: &[GameUiState], score_increase: u32, violations: &mut Vec<String>) {
    for pair in history.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if prev == next {
            violations.push("duplicate snapshot published".to_string());
        }
        if next.score < prev.score {
            violations.push(format!("score dropped from {} to {}", prev.score, next.score));
        } else if next.score != prev.score
            && next.score != prev.score.saturating_add(score_increase)
        {
            violations.push(format!("score jumped from {} to {}", prev.score, next.score));
        }
    }
}

/// Simulate `games` games in parallel
///
/// Game `i` uses seed `seed + i`, so runs are reproducible regardless of
/// thread scheduling.
pub fn run_simulation(
    config: &GameConfig,
    player_name: &str,
    games: usize,
    seed: u64,
    show_progress: bool,
) -> SimulationResult {
    let player_name = PlayerType::resolve_name(player_name);
    let index = AnagramIndex::new(config.words());

    let pb = if show_progress {
        ProgressBar::new(games as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message(format!("player: {player_name}"));

    let start = Instant::now();

    let outcomes: Vec<(u64, GameOutcome)> = (0..games as u64)
        .into_par_iter()
        .map(|i| {
            let game_seed = seed.wrapping_add(i);
            let mut player = PlayerType::from_name(player_name, &index);
            let outcome = play_game(config, &mut player, game_seed);
            pb.inc(1);
            (game_seed, outcome)
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut score_distribution = BTreeMap::new();
    let mut violations = Vec::new();
    let mut totals = GameOutcome::default();
    let perfect_score = config.perfect_score();

    for (game_seed, outcome) in &outcomes {
        *score_distribution.entry(outcome.final_score).or_insert(0) += 1;
        totals.correct += outcome.correct;
        totals.skipped += outcome.skipped;
        totals.forced_skips += outcome.forced_skips;
        totals.wrong_guesses += outcome.wrong_guesses;
        for violation in &outcome.violations {
            warn!(seed = game_seed, %violation, "rule violated");
            violations.push(format!("seed {game_seed}: {violation}"));
        }
    }

    let total_score: u64 = outcomes.iter().map(|(_, o)| u64::from(o.final_score)).sum();
    let scores = || outcomes.iter().map(|(_, o)| o.final_score);

    SimulationResult {
        player: player_name.to_string(),
        games,
        average_score: if games > 0 {
            total_score as f64 / games as f64
        } else {
            0.0
        },
        min_score: scores().min().unwrap_or(0),
        max_score: scores().max().unwrap_or(0),
        perfect_score,
        perfect_games: scores().filter(|&s| s == perfect_score).count(),
        total_correct: totals.correct,
        total_skipped: totals.skipped,
        total_forced_skips: totals.forced_skips,
        total_wrong_guesses: totals.wrong_guesses,
        score_distribution,
        violations,
        duration,
        games_per_second: games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
