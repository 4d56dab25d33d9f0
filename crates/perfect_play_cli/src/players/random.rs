//! Uniformly random opponent.

use super::Player;
use anyhow::{Context, Result};
use perfect_play::{Board, Position};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

/// Plays a uniformly random legal move.
pub struct RandomPlayer<R> {
    name: String,
    rng: R,
}

impl<R: Rng> RandomPlayer<R> {
    /// Creates a random player drawing from `rng`.
    pub fn new(name: impl Into<String>, rng: R) -> Self {
        Self {
            name: name.into(),
            rng,
        }
    }
}

impl<R: Rng> Player for RandomPlayer<R> {
    fn get_move(&mut self, board: &Board) -> Result<Position> {
        let pos = *board
            .legal_moves()
            .choose(&mut self.rng)
            .context("No valid moves available")?;
        debug!(player = %self.name, position = %pos, "Random move");
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
