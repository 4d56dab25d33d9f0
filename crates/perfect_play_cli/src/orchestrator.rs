//! Game orchestration between players.

use crate::players::Player;
use anyhow::{Context, Result};
use perfect_play::{Board, Outcome, Player as Mark, evaluate};
use tracing::{debug, info, instrument};

/// Running totals over a series of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Games won by X.
    pub x_wins: usize,
    /// Games won by O.
    pub o_wins: usize,
    /// Drawn games.
    pub draws: usize,
}

impl Tally {
    /// Adds a finished game.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won(Mark::X) => self.x_wins += 1,
            Outcome::Won(Mark::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Undecided => {}
        }
    }

    /// Number of games recorded.
    pub fn total(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>) -> Self {
        Self { player_x, player_o }
    }

    /// Plays one game from the empty board, X first.
    #[instrument(skip(self), fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub fn play_game(&mut self) -> Result<Outcome> {
        let mut board = Board::new();
        let mut mover = Mark::X;

        loop {
            let player = match mover {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };

            debug!(player = %player.name(), "Waiting for move");
            let pos = player.get_move(&board)?;
            board
                .place(pos, mover)
                .with_context(|| format!("{} played an illegal move", player.name()))?;

            let outcome = evaluate(&board, pos, mover);
            if outcome.is_decided() {
                info!(%outcome, notation = %board.notation(), "Game over");
                return Ok(outcome);
            }
            mover = mover.opponent();
        }
    }

    /// Plays `games` games and tallies the results.
    #[instrument(skip(self))]
    pub fn play_series(&mut self, games: usize) -> Result<Tally> {
        let mut tally = Tally::default();
        for _ in 0..games {
            tally.record(self.play_game()?);
        }
        Ok(tally)
    }
}
