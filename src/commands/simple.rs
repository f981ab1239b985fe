//! Simple interactive CLI mode
//!
//! Line-based game without TUI

use crate::core::GameState;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple line-based game until the player quits or input ends
///
/// Lines starting with `:` are commands (`:skip`, `:new`, `:quit`); anything
/// else is submitted as a guess.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R, I, W>(
    game: &mut GameState<'_, R>,
    mut input: I,
    out: &mut W,
) -> io::Result<()>
where
    R: Rng,
    I: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                 Unscramble - Interactive Mode                ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Unscramble the word using all the letters.")?;
    writeln!(out, "Commands: ':skip' to skip a word, ':new' for new game, ':quit' to exit\n")?;

    let max_words = game.config().max_words();

    loop {
        let state = game.ui_state().clone();

        if state.is_game_over() {
            writeln!(out, "\n{}", "═".repeat(62).bright_cyan())?;
            writeln!(
                out,
                "Game over! Final score: {}",
                state.score.to_string().bright_yellow().bold()
            )?;
            writeln!(out, "{}", "═".repeat(62).bright_cyan())?;

            let answer = prompt(&mut input, out, "Play again? (yes/no)")?;
            match answer.map(|a| a.to_lowercase()).as_deref() {
                Some("yes" | "y") => {
                    game.reset_game();
                    writeln!(out, "\n🔄 New game started!\n")?;
                    continue;
                }
                _ => {
                    writeln!(out, "\n👋 Thanks for playing!\n")?;
                    return Ok(());
                }
            }
        }

        writeln!(out, "{}", "─".repeat(62))?;
        writeln!(
            out,
            "Word {}/{max_words}   Score: {}",
            state.current_word_count(),
            state.score
        )?;
        if state.is_guessed_word_wrong() {
            writeln!(out, "{}", "❌ Wrong guess! Try again.".red())?;
        }
        writeln!(
            out,
            "\n  {}\n",
            state.scrambled_word.to_uppercase().bright_white().bold()
        )?;

        let Some(line) = prompt(&mut input, out, "Your guess")? else {
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            ":quit" | ":q" | ":exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            ":skip" | ":s" => game.skip_word(),
            ":new" | ":n" => {
                game.reset_game();
                writeln!(out, "\n🔄 New game started!\n")?;
            }
            "" => {}
            _ => {
                game.update_user_guess(line);
                game.check_user_guess();
                let gained = game.ui_state().score.saturating_sub(state.score);
                if gained > 0 {
                    writeln!(out, "{}", format!("✅ Correct! +{gained}").green().bold())?;
                }
            }
        }
    }
}

/// Print `label` and read one trimmed line; `None` at end of input
fn prompt<I: BufRead, W: Write>(
    input: &mut I,
    out: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn play<'a>(config: &'a GameConfig, script: &str) -> (GameState<'a>, String) {
        let mut game = GameState::with_rng(config, StdRng::seed_from_u64(1));
        let mut out = Vec::new();
        run_simple(&mut game, script.as_bytes(), &mut out).unwrap();
        (game, String::from_utf8(out).unwrap())
    }

    #[test]
    fn correct_guess_finishes_single_word_game() {
        let config = GameConfig::from_strs(&["bat"], 1, 20).unwrap();
        let (game, out) = play(&config, "BAT\nno\n");

        assert!(game.ui_state().is_game_over());
        assert_eq!(game.ui_state().score, 20);
        assert!(out.contains("Correct! +20"));
        assert!(out.contains("Game over! Final score: "));
        assert!(out.contains("Thanks for playing"));
    }

    #[test]
    fn wrong_guess_is_reported() {
        let config = GameConfig::from_strs(&["bat", "cup"], 2, 20).unwrap();
        let (game, out) = play(&config, "nope\n:quit\n");

        assert!(game.ui_state().is_guessed_word_wrong());
        assert!(out.contains("Wrong guess! Try again."));
        assert_eq!(game.user_guess(), "");
    }

    #[test]
    fn skipping_every_word_ends_game() {
        let config = GameConfig::from_strs(&["bat", "cup"], 2, 20).unwrap();
        let (game, out) = play(&config, ":skip\n:s\n");

        assert!(game.ui_state().is_game_over());
        assert_eq!(game.ui_state().score, 0);
        assert!(out.contains("Word 2/2"));
    }

    #[test]
    fn play_again_resets() {
        let config = GameConfig::from_strs(&["bat", "cup"], 2, 20).unwrap();
        let (game, out) = play(&config, ":skip\n:skip\nyes\n");

        assert!(!game.ui_state().is_game_over());
        assert_eq!(game.ui_state().current_word_count(), 1);
        assert!(out.contains("New game started"));
    }

    #[test]
    fn blank_lines_are_ignored() {
        let config = GameConfig::from_strs(&["bat", "cup"], 2, 20).unwrap();
        let (game, _) = play(&config, "\n\n");

        assert!(!game.ui_state().is_guessed_word_wrong());
        assert_eq!(game.ui_state().current_word_count(), 1);
    }
}
