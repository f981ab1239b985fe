//! TUI application state and logic

use crate::config::GameConfig;
use crate::core::{GameState, GameUiState};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::mpsc::{self, Receiver};

/// Messages kept for the message panel
const MAX_MESSAGES: usize = 6;

/// Application state
pub struct App<'a> {
    pub game: GameState<'a>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    updates: Receiver<GameUiState>,
    last_seen: GameUiState,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Totals across the games played in this session
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub best_score: u32,
    pub total_score: u64,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(config: &'a GameConfig) -> Self {
        Self::from_game(GameState::new(config))
    }

    /// Wrap an existing game; the app subscribes to its snapshots
    #[must_use]
    pub fn from_game(mut game: GameState<'a>) -> Self {
        let (tx, updates) = mpsc::channel();
        game.subscribe(move |state: &GameUiState| {
            // The receiver lives as long as the app, which owns the game
            let _ = tx.send(state.clone());
        });
        let last_seen = game.ui_state().clone();

        let mut app = Self {
            game,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            updates,
            last_seen,
        };
        app.process_updates();
        app.add_message(
            "Unscramble the word using all the letters.",
            MessageStyle::Info,
        );
        app
    }

    /// Turn snapshot changes into messages and statistics
    pub fn process_updates(&mut self) {
        while let Ok(state) = self.updates.try_recv() {
            let last = std::mem::replace(&mut self.last_seen, state.clone());

            if state.score < last.score
                || state.current_word_count() < last.current_word_count()
                || (last.is_game_over() && !state.is_game_over())
            {
                self.add_message("New game started!", MessageStyle::Info);
                continue;
            }

            if state.score > last.score {
                self.add_message(
                    &format!("Correct! +{}", state.score - last.score),
                    MessageStyle::Success,
                );
            } else if state.current_word_count() > last.current_word_count() {
                self.add_message("Word skipped.", MessageStyle::Info);
            } else if state.is_guessed_word_wrong() && !last.is_guessed_word_wrong() {
                self.add_message("Wrong guess! Try again.", MessageStyle::Error);
            }

            if state.is_game_over() && !last.is_game_over() {
                self.stats.games_played += 1;
                self.stats.best_score = self.stats.best_score.max(state.score);
                self.stats.total_score += u64::from(state.score);
                self.add_message(
                    &format!("Game over! You scored {}.", state.score),
                    MessageStyle::Success,
                );
            }
        }
    }

    /// Start over, whatever state the current game is in
    ///
    /// A reset on a fresh round 1 can look like any other snapshot change, so
    /// the message comes from here rather than from `process_updates`.
    pub fn new_game(&mut self) {
        self.process_updates();
        self.game.reset_game();
        while let Ok(state) = self.updates.try_recv() {
            self.last_seen = state;
        }
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            }
        } else if self.game.ui_state().is_game_over() {
            match key.code {
                KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Enter | KeyCode::Char('n') => self.new_game(),
                _ => {}
            }
        } else {
            match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => {
                    let mut guess = self.game.user_guess().to_string();
                    guess.push(c);
                    self.game.update_user_guess(guess);
                }
                KeyCode::Backspace => {
                    let mut guess = self.game.user_guess().to_string();
                    guess.pop();
                    self.game.update_user_guess(guess);
                }
                KeyCode::Enter => {
                    if !self.game.user_guess().is_empty() {
                        self.game.check_user_guess();
                    }
                }
                KeyCode::Tab => self.game.skip_word(),
                _ => {}
            }
        }

        self.process_updates();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn average_score(&self) -> f64 {
        if self.stats.games_played == 0 {
            0.0
        } else {
            self.stats.total_score as f64 / self.stats.games_played as f64
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }

    Ok(())
}
