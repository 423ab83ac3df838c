//! Mini Wordle - CLI
//!
//! Word-guessing game with TUI and line-based modes, plus one-shot commands to
//! score a guess or replay a game.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mini_wordle::{
    commands::{ReplayConfig, evaluate_guess, replay, run_simple},
    config::Config,
    core::Word,
    game::{Game, RandomSelector},
    logging::{self, LogTarget},
    output::{print_evaluation, print_replay_result},
    wordlists::{
        ANSWERS,
        loader::{load_from_file, words_from_slice},
    },
};
use std::io;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "mini_wordle",
    about = "Guess the 5-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Start with hard mode on
    #[arg(long, global = true)]
    hard: bool,

    /// Seed for picking targets (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Answer pool file, one word per line (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Config file, overriding the path set in the environment
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Full-screen game (default)
    Play,

    /// Line-based game without the TUI
    Simple,

    /// Score one guess against a target
    Evaluate {
        guess: String,
        target: String,
    },

    /// Play a list of guesses against a known target
    Replay {
        target: String,

        /// Guesses in the order they are submitted
        #[arg(required = true)]
        guesses: Vec<String>,
    },
}

impl Cli {
    /// Command-line flags win over the config file and environment
    fn apply_to(&self, config: &mut Config) {
        if self.hard {
            config.hard_mode = true;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.wordlist.is_some() {
            config.wordlist.clone_from(&self.wordlist);
        }
        if self.log_file.is_some() {
            config.log_file.clone_from(&self.log_file);
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    cli.apply_to(&mut config);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let log_target = match (&config.log_file, &command) {
        (Some(path), _) => LogTarget::File(path),
        (None, Commands::Play) => LogTarget::Discard,
        (None, _) => LogTarget::Stderr,
    };
    logging::init(cli.verbose, log_target)?;

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Evaluate { guess, target } => run_evaluate_command(&guess, &target),
        Commands::Replay { target, guesses } => {
            run_replay_command(target, guesses, config.hard_mode)
        }
    }
}

/// Load the answer pool from the configured file, or the embedded list
fn load_pool(config: &Config) -> Result<Vec<Word>> {
    let pool = match &config.wordlist {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to read word list {}", path.display()))?,
        None => words_from_slice(ANSWERS),
    };
    info!(words = pool.len(), "answer pool ready");
    Ok(pool)
}

fn new_game(config: &Config) -> Result<Game<RandomSelector>> {
    let selector = RandomSelector::new(load_pool(config)?, config.seed);
    Game::new(selector, config.hard_mode).context("could not start a game")
}

fn run_play_command(config: &Config) -> Result<()> {
    use mini_wordle::interactive::{App, run_tui};

    let app = App::new(new_game(config)?, config, Instant::now());
    run_tui(app)
}

fn run_simple_command(config: &Config) -> Result<()> {
    let mut game = new_game(config)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_simple(&mut game, stdin.lock(), &mut stdout)
}

fn run_evaluate_command(guess: &str, target: &str) -> Result<()> {
    let result = evaluate_guess(guess, target)?;
    print_evaluation(&result);
    Ok(())
}

fn run_replay_command(target: String, guesses: Vec<String>, hard_mode: bool) -> Result<()> {
    let result = replay(ReplayConfig {
        target,
        guesses,
        hard_mode,
    })?;
    print_replay_result(&result);
    Ok(())
}
