//! Display functions for command results

use super::formatters::{create_progress_bar, percentage};
use crate::commands::SimulationResult;
use colored::Colorize;

/// Violations listed before the rest are summarized
const MAX_VIOLATIONS_SHOWN: usize = 10;

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Player:           {}", result.player);
    println!("   Games played:     {}", result.games);
    println!(
        "   Average score:    {}",
        format!("{:.1}", result.average_score)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best game:        {}",
        format!("{}", result.max_score).green()
    );
    println!(
        "   Worst game:       {}",
        format!("{}", result.min_score).yellow()
    );
    println!(
        "   Perfect games:    {} ({:.1}% of {} points)",
        result.perfect_games,
        percentage(result.perfect_games, result.games),
        result.perfect_score
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n🎯 {}", "Moves:".bright_cyan().bold());
    println!("   Correct guesses:  {}", result.total_correct);
    println!("   Wrong guesses:    {}", result.total_wrong_guesses);
    println!("   Skipped words:    {}", result.total_skipped);
    if result.total_forced_skips > 0 {
        println!(
            "   Forced skips:     {}",
            result.total_forced_skips.to_string().red()
        );
    }

    println!("\n📈 {}", "Score Distribution:".bright_cyan().bold());
    let max_count = result
        .score_distribution
        .values()
        .copied()
        .max()
        .unwrap_or(0);
    for (score, &count) in &result.score_distribution {
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        let pct = percentage(count, result.games);
        println!("   {score:5}: {} {count:5} ({pct:5.1}%)", bar.green());
    }

    println!();
    if result.violations.is_empty() {
        println!("{}", "✅ All game rules held".green().bold());
    } else {
        println!(
            "{}",
            format!("❌ {} rule violations", result.violations.len())
                .red()
                .bold()
        );
        for violation in result.violations.iter().take(MAX_VIOLATIONS_SHOWN) {
            println!("   • {violation}");
        }
        if result.violations.len() > MAX_VIOLATIONS_SHOWN {
            println!(
                "   … and {} more",
                result.violations.len() - MAX_VIOLATIONS_SHOWN
            );
        }
    }
}
