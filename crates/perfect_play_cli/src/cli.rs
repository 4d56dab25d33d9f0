//! Command-line interface for perfect_play.

use clap::{Parser, Subcommand, ValueEnum};
use perfect_play::Player as Mark;

/// Perfect Play - tic-tac-toe minimax engine
#[derive(Parser, Debug)]
#[command(name = "perfect_play_cli")]
#[command(about = "Perfect-play tic-tac-toe engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML selector config (opening_book, pruning, seed)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Choose the engine's move for a position
    BestMove {
        /// Board in 9-cell notation, e.g. "XX./OO./..."
        #[arg(short, long)]
        board: String,

        /// Side to move
        #[arg(short, long, value_enum)]
        mark: MarkArg,
    },

    /// Report the outcome of a position
    Evaluate {
        /// Board in 9-cell notation
        #[arg(short, long)]
        board: String,

        /// Index (0-8) of the last move; scans every line when omitted
        #[arg(short, long, requires = "mark")]
        last: Option<usize>,

        /// Side that made the last move
        #[arg(short, long, value_enum)]
        mark: Option<MarkArg>,
    },

    /// Play games between two players and print the tally
    Play {
        /// Player for X
        #[arg(short = 'x', long = "x", value_enum, default_value = "perfect")]
        x: PlayerKind,

        /// Player for O
        #[arg(short = 'o', long = "o", value_enum, default_value = "random")]
        o: PlayerKind,

        /// Number of games
        #[arg(short, long, default_value = "100")]
        games: usize,
    },
}

/// Side argument.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkArg {
    /// Player X
    X,
    /// Player O
    O,
}

impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}

/// Kind of player for the `play` command.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    /// Minimax engine
    Perfect,
    /// Uniformly random legal moves
    Random,
    /// First empty square
    First,
}
