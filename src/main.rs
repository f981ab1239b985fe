//! Unscramble - CLI
//!
//! Word-unscrambling game with TUI and line-based modes, plus a simulator that
//! plays seeded games automatically.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::Level;
use unscramble::{
    commands::{run_simple, run_simulation},
    config::{GameConfig, MAX_NO_OF_WORDS, SCORE_INCREASE},
    core::GameState,
    output::print_simulation_result,
    solver::PlayerType,
    wordlists::loader::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "unscramble",
    about = "Unscramble the word using all the letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Words per game
    #[arg(short = 'r', long, global = true, default_value_t = MAX_NO_OF_WORDS)]
    max_words: usize,

    /// Points for a correct guess
    #[arg(long, global = true, default_value_t = SCORE_INCREASE)]
    score_increase: u32,

    /// Log to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without TUI
    Simple,

    /// Play many games automatically and check the game rules
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        games: usize,

        /// Player: anagram (default), careless, skip
        #[arg(short, long, default_value = "anagram")]
        player: String,

        /// Seed of the first game (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Install the stderr log subscriber when verbosity was requested
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => return,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Build the game configuration from the -w, -r and --score-increase flags
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let config = match cli.wordlist.as_str() {
        "embedded" => GameConfig::embedded()
            .context("embedded wordlist is invalid")?
            .with_limits(cli.max_words, cli.score_increase),
        path => {
            let words = load_from_file(path).with_context(|| format!("loading wordlist {path}"))?;
            GameConfig::new(words, cli.max_words, cli.score_increase)
        }
    };

    config.with_context(|| format!("invalid configuration from wordlist '{}'", cli.wordlist))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Simulate {
            games,
            player,
            seed,
        } => {
            run_simulate_command(&config, &player, games, seed);
            Ok(())
        }
    }
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    use unscramble::interactive::{App, run_tui};

    let app = App::new(config);
    run_tui(app)
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let mut game = GameState::new(config);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_simple(&mut game, stdin.lock(), &mut stdout).context("simple mode I/O failed")
}

fn run_simulate_command(config: &GameConfig, player: &str, games: usize, seed: Option<u64>) {
    let resolved = PlayerType::resolve_name(player);
    if resolved != player {
        println!("Unknown player '{player}', using {resolved}");
    }
    let seed = seed.unwrap_or_else(rand::random);

    println!(
        "Simulating {games} games ({} words each) with seed {seed}...",
        config.max_words()
    );

    let result = run_simulation(config, resolved, games, seed, true);
    print_simulation_result(&result);
}
