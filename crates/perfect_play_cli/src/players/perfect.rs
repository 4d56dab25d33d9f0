//! Minimax engine as a player.

use super::Player;
use anyhow::Result;
use perfect_play::{Board, MoveSelector, Position};
use rand::Rng;

/// Plays the engine's move.
pub struct PerfectPlayer<R> {
    name: String,
    selector: MoveSelector<R>,
}

impl<R: Rng> PerfectPlayer<R> {
    /// Wraps a selector.
    pub fn new(name: impl Into<String>, selector: MoveSelector<R>) -> Self {
        Self {
            name: name.into(),
            selector,
        }
    }
}

impl<R: Rng> Player for PerfectPlayer<R> {
    fn get_move(&mut self, board: &Board) -> Result<Position> {
        let mut scratch = *board;
        Ok(self.selector.choose_move(&mut scratch)?)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
