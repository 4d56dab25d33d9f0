//! Board positions.
//!
//! Positions are the only way the engine addresses cells, so an index outside
//! 0-8 is rejected once, at the boundary, and never reaches a board.

use crate::error::{EngineError, EngineErrorKind};
use serde::{Deserialize, Serialize};
use strum::EnumIter;
use tracing::instrument;

/// A cell of the 3x3 board, in row-major order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIter,
)]
pub enum Position {
    /// Row 0, column 0 (index 0).
    TopLeft,
    /// Row 0, column 1 (index 1).
    TopCenter,
    /// Row 0, column 2 (index 2).
    TopRight,
    /// Row 1, column 0 (index 3).
    MiddleLeft,
    /// Row 1, column 1 (index 4).
    Center,
    /// Row 1, column 2 (index 5).
    MiddleRight,
    /// Row 2, column 0 (index 6).
    BottomLeft,
    /// Row 2, column 1 (index 7).
    BottomCenter,
    /// Row 2, column 2 (index 8).
    BottomRight,
}

impl Position {
    /// All 9 positions in ascending index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Opening book: the four corners and the center.
    pub const OPENINGS: [Position; 5] = [
        Position::TopLeft,
        Position::TopRight,
        Position::Center,
        Position::BottomLeft,
        Position::BottomRight,
    ];

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2).
    pub fn column(self) -> usize {
        self.to_index() % 3
    }

    /// Creates position from row and column.
    pub fn from_row_column(row: usize, column: usize) -> Option<Self> {
        if row < 3 && column < 3 {
            Self::from_index(row * 3 + column)
        } else {
            None
        }
    }

    /// True for the center and the corners, the only cells on a diagonal.
    pub fn on_diagonal(self) -> bool {
        self.to_index() % 2 == 0
    }

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }
}

impl TryFrom<usize> for Position {
    type Error = EngineError;

    #[track_caller]
    #[instrument]
    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or_else(|| EngineError::new(EngineErrorKind::InvalidCell(index)))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
