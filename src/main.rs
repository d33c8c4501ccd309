//! Checkers-Rust: a draughts engine with a bounded look-ahead opponent.
//!
//! ## Usage
//!
//! - `checkers-rust` - Show a self-play demo
//! - `checkers-rust play` - Start the text protocol on stdin/stdout
//! - `checkers-rust demo --turns 40` - Let the engine play both sides

use clap::{Parser, Subcommand};
use log::{LevelFilter, info};

use checkers_rust::constants::{MAX_PREDICTION_DEPTH, X_SIZE, Y_SIZE};
use checkers_rust::game::Game;
use checkers_rust::notation::str_turn;
use checkers_rust::protocol::ProtocolEngine;
use checkers_rust::search::{CandidatePolicy, SearchConfig};

/// Checkers-Rust: a draughts engine
#[derive(Parser)]
#[command(name = "checkers-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board width
    #[arg(long, global = true, default_value_t = X_SIZE)]
    width: usize,
    /// Board height
    #[arg(long, global = true, default_value_t = Y_SIZE)]
    height: usize,
    /// Search depth in turns (at least 1)
    #[arg(long, global = true, default_value_t = MAX_PREDICTION_DEPTH)]
    depth: usize,
    /// Seed for tie-breaking between equally good turns
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// Score only the sequences at which the search stops
    #[arg(long, global = true)]
    leaves_only: bool,
    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the text protocol for use with a front end or a terminal
    Play,
    /// Let the engine play against itself
    Demo {
        /// Stop after this many turns
        #[arg(long, default_value_t = 200)]
        turns: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    simple_logger::SimpleLogger::new()
        .with_level(cli.log_level)
        .init()?;

    anyhow::ensure!(
        (1..=26).contains(&cli.width) && cli.height >= 4,
        "board must be 1-26 columns wide and at least 4 rows high"
    );

    let policy = if cli.leaves_only {
        CandidatePolicy::LeavesOnly
    } else {
        CandidatePolicy::EveryPrefix
    };
    let config = SearchConfig::new(cli.depth, policy)?;
    let rng = match cli.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    let game = Game::with_config(cli.width, cli.height, config, rng);

    match cli.command {
        Some(Commands::Play) => ProtocolEngine::with_game(game).run(),
        Some(Commands::Demo { turns }) => {
            run_demo(game, turns);
            Ok(())
        }
        None => {
            run_demo(game, 200);
            Ok(())
        }
    }
}

fn run_demo(mut game: Game, turns: usize) {
    println!("Checkers-Rust: self-play demo\n");
    println!("{}", game.board());

    let height = game.board().height();
    for n in 1..=turns {
        let side = game.turn();
        let turn = game.play_engine_turn();
        if turn.is_empty() {
            break;
        }
        println!("{n}. {side}: {}", str_turn(&turn, height));
        println!("{}", game.board());

        if let Some(loser) = game.is_game_over() {
            println!("{} wins: {loser} has no moves", loser.opposite());
            return;
        }
    }
    info!("demo stopped after {turns} turns");
    println!("No result after {turns} turns");
}
