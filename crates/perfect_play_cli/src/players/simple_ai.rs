//! Simple AI that picks the first available square.

use super::Player;
use anyhow::Result;
use perfect_play::{Board, Position};
use tracing::debug;

/// Simple AI that picks first available square.
pub struct SimpleAI {
    name: String,
}

impl SimpleAI {
    /// Creates a new simple AI.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for SimpleAI {
    fn get_move(&mut self, board: &Board) -> Result<Position> {
        let Some(pos) = board.legal_moves().first().copied() else {
            anyhow::bail!("No valid moves available")
        };
        debug!(ai = %self.name, position = %pos, "AI chose position");
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
