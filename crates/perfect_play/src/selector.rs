//! Move selection policy on top of the search.

use crate::error::{EngineError, EngineErrorKind};
use crate::rules::evaluate_full;
use crate::search::{SearchResult, search, search_pruned};
use crate::{Board, Outcome, Player, Position, SelectorConfig};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument, warn};

/// Picks moves for one side.
#[derive(Debug, Clone)]
pub struct MoveSelector<R = StdRng> {
    player: Player,
    config: SelectorConfig,
    rng: R,
}

impl MoveSelector<StdRng> {
    /// Creates a selector seeded from the configuration, or from entropy
    /// when no seed is set.
    #[instrument]
    pub fn new(player: Player, config: SelectorConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(player, config, rng)
    }
}

impl<R: Rng> MoveSelector<R> {
    /// Creates a selector drawing opening moves from `rng`.
    pub fn with_rng(player: Player, config: SelectorConfig, rng: R) -> Self {
        Self {
            player,
            config,
            rng,
        }
    }

    /// The side this selector plays.
    pub fn player(&self) -> Player {
        self.player
    }

    /// The active configuration.
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Chooses a move for this selector's side.
    ///
    /// The board is searched in place and handed back unchanged.
    ///
    /// # Errors
    ///
    /// `SearchOnTerminalPosition` if the game is already decided, `TurnOrder`
    /// if the mark counts say the other side is to move.
    #[instrument(skip(self, board), fields(player = %self.player, notation = %board.notation()))]
    pub fn choose_move(&mut self, board: &mut Board) -> Result<Position, EngineError> {
        self.check_playable(board)?;

        if *self.config.opening_book() && board.remaining_count() == Position::ALL.len() {
            let pos = *Position::OPENINGS
                .choose(&mut self.rng)
                .unwrap_or(&Position::Center);
            debug!(position = %pos, "Opening book move");
            return Ok(pos);
        }

        let result = self.run_search(board);
        result.best.ok_or_else(|| {
            EngineError::new(EngineErrorKind::SearchOnTerminalPosition(evaluate_full(board)))
        })
    }

    /// Runs the full search for this side and returns move and score,
    /// bypassing the opening book.
    ///
    /// # Errors
    ///
    /// Same as [`MoveSelector::choose_move`].
    #[instrument(skip(self, board), fields(player = %self.player, notation = %board.notation()))]
    pub fn analyze(&self, board: &mut Board) -> Result<SearchResult, EngineError> {
        self.check_playable(board)?;
        Ok(self.run_search(board))
    }

    fn run_search(&self, board: &mut Board) -> SearchResult {
        if *self.config.pruning() {
            search_pruned(board, self.player, self.player)
        } else {
            search(board, self.player, self.player)
        }
    }

    /// Rejects decided positions and positions where the other side is to move.
    fn check_playable(&self, board: &Board) -> Result<(), EngineError> {
        let outcome = evaluate_full(board);
        if outcome != Outcome::Undecided {
            warn!(%outcome, "Move requested on a finished game");
            return Err(EngineError::new(EngineErrorKind::SearchOnTerminalPosition(
                outcome,
            )));
        }

        let mine = board.count(self.player);
        let theirs = board.count(self.player.opponent());
        if mine != theirs && mine + 1 != theirs {
            warn!(mine, theirs, "Move requested out of turn");
            let (x, o) = match self.player {
                Player::X => (mine, theirs),
                Player::O => (theirs, mine),
            };
            return Err(EngineError::new(EngineErrorKind::TurnOrder {
                mover: self.player,
                x,
                o,
            }));
        }
        Ok(())
    }
}

/// Chooses a move for `player` with the default configuration.
///
/// # Errors
///
/// See [`MoveSelector::choose_move`].
#[instrument(skip(board))]
pub fn choose_move(board: &mut Board, player: Player) -> Result<Position, EngineError> {
    MoveSelector::new(player, SelectorConfig::default()).choose_move(board)
}
