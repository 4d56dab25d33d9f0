//! Perfect Play - command-line front end
//!
//! Asks the engine for moves, evaluates positions and runs matches between
//! the engine and simple opponents.

#![warn(missing_docs)]

mod cli;
mod orchestrator;
mod players;
mod settings;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, MarkArg, PlayerKind};
use orchestrator::Orchestrator;
use perfect_play::{
    Board, MoveSelector, Player as Mark, Position, SelectorConfig, evaluate, evaluate_full,
};
use players::{PerfectPlayer, Player, RandomPlayer, SimpleAI};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => settings::load(path)?,
        None => SelectorConfig::default(),
    };

    match cli.command {
        Command::BestMove { board, mark } => run_best_move(config, &board, mark),
        Command::Evaluate { board, last, mark } => run_evaluate(&board, last, mark),
        Command::Play { x, o, games } => run_play(config, x, o, games),
    }
}

/// Print the engine's move and score for a position
#[instrument(skip(config))]
fn run_best_move(config: SelectorConfig, board: &str, mark: MarkArg) -> Result<()> {
    let mut board: Board = board.parse().context("Failed to parse board")?;
    let mut selector = MoveSelector::new(mark.into(), config);

    let pos = selector.choose_move(&mut board)?;
    println!("{}\n", board);
    println!("{} plays {} ({})", selector.player(), pos.to_index(), pos);

    if board.remaining_count() < Position::ALL.len() || !*selector.config().opening_book() {
        let result = selector.analyze(&mut board)?;
        println!("score: {}", result.score);
    } else {
        println!("score: opening book");
    }
    Ok(())
}

/// Print the outcome of a position
#[instrument]
fn run_evaluate(board: &str, last: Option<usize>, mark: Option<MarkArg>) -> Result<()> {
    let board: Board = board.parse().context("Failed to parse board")?;

    let outcome = match (last, mark) {
        (Some(index), Some(mark)) => {
            let pos = Position::try_from(index)?;
            evaluate(&board, pos, mark.into())
        }
        _ => evaluate_full(&board),
    };
    println!("{}\n", board);
    println!("{}", outcome);
    Ok(())
}

/// Play a series of games and print the tally
#[instrument(skip(config))]
fn run_play(config: SelectorConfig, x: PlayerKind, o: PlayerKind, games: usize) -> Result<()> {
    let seed = *config.seed();
    let mut orchestrator = Orchestrator::new(
        make_player(x, Mark::X, &config, seed),
        make_player(o, Mark::O, &config, seed.map(|s| s.wrapping_add(1))),
    );

    info!(games, "Starting series");
    let tally = orchestrator.play_series(games)?;
    println!(
        "X wins: {}  O wins: {}  draws: {}  ({} games)",
        tally.x_wins,
        tally.o_wins,
        tally.draws,
        tally.total()
    );
    Ok(())
}

fn make_player(
    kind: PlayerKind,
    mark: Mark,
    config: &SelectorConfig,
    seed: Option<u64>,
) -> Box<dyn Player> {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let name = format!("{kind:?} ({mark})");
    match kind {
        PlayerKind::Perfect => Box::new(PerfectPlayer::new(
            name,
            MoveSelector::with_rng(mark, config.clone(), rng),
        )),
        PlayerKind::Random => Box::new(RandomPlayer::new(name, rng)),
        PlayerKind::First => Box::new(SimpleAI::new(name)),
    }
}
