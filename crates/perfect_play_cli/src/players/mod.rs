//! Player trait and implementations.

mod perfect;
mod random;
mod simple_ai;

pub use perfect::PerfectPlayer;
pub use random::RandomPlayer;
pub use simple_ai::SimpleAI;

use anyhow::Result;
use perfect_play::{Board, Position};

/// Trait for players that can make moves.
pub trait Player {
    /// Gets a move from this player for the given board.
    fn get_move(&mut self, board: &Board) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
