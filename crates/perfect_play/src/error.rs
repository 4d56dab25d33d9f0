//! Engine error types.

use crate::{Outcome, Player, Position};
use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong. Every kind is caller misuse; valid input never errors.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum EngineErrorKind {
    /// Index outside 0-8.
    #[display("Cell index {} is outside 0-8", _0)]
    InvalidCell(usize),

    /// Placement on a square that is already taken.
    #[display("Square {} is already occupied", _0)]
    OccupiedCell(Position),

    /// Move requested on a position that has already ended.
    #[display("Cannot search a finished position ({})", _0)]
    SearchOnTerminalPosition(Outcome),

    /// Move requested for the side that is not to move.
    #[display("{} is not to move (X: {}, O: {})", mover, x, o)]
    TurnOrder {
        /// Side the move was requested for.
        mover: Player,
        /// Number of X marks on the board.
        x: usize,
        /// Number of O marks on the board.
        o: usize,
    },

    /// Board text could not be parsed.
    #[display("Invalid board notation: {}", _0)]
    BoardNotation(String),
}

/// Engine error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Engine error: {} at {}:{}", kind, file, line)]
pub struct EngineError {
    /// Error kind.
    pub kind: EngineErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl EngineError {
    /// Creates a new engine error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: EngineErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<EngineErrorKind> for EngineError {
    #[track_caller]
    fn from(kind: EngineErrorKind) -> Self {
        Self::new(kind)
    }
}
