//! The 3x3 board and its move primitives.

use crate::error::{EngineError, EngineErrorKind};
use crate::{Player, Position, Square};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Overwrites the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Every empty position, in ascending index order.
    pub fn legal_moves(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.is_empty(pos))
            .collect()
    }

    /// Number of empty squares.
    pub fn remaining_count(&self) -> usize {
        self.squares.iter().filter(|&&s| s == Square::Empty).count()
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.remaining_count() == 0
    }

    /// Number of marks `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|&&s| s == Square::Occupied(player))
            .count()
    }

    /// Places `player` at `pos` if the square is empty.
    ///
    /// Returns whether the placement happened; an occupied square is left
    /// untouched.
    pub fn apply(&mut self, pos: Position, player: Player) -> bool {
        if !self.is_empty(pos) {
            return false;
        }
        self.set(pos, Square::Occupied(player));
        true
    }

    /// Clears a square. Only used to undo a trial move.
    pub fn retract(&mut self, pos: Position) {
        self.set(pos, Square::Empty);
    }

    /// Places `player` at `pos`, reporting an occupied square as an error.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, player: Player) -> Result<(), EngineError> {
        if self.apply(pos, player) {
            Ok(())
        } else {
            Err(EngineError::new(EngineErrorKind::OccupiedCell(pos)))
        }
    }

    /// Compact 9-character notation, e.g. `XO..X...O`.
    pub fn notation(&self) -> String {
        self.squares.iter().map(|s| s.symbol()).collect()
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl FromStr for Board {
    type Err = EngineError;

    /// Parses `X`, `O` and `.`/`_`/`-` cells; whitespace, `/` and `|` are
    /// separators.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut index = 0;
        for c in s.chars() {
            let square = match c {
                '.' | '_' | '-' => Square::Empty,
                '/' | '|' => continue,
                c if c.is_whitespace() => continue,
                c => match Player::from_char(c) {
                    Some(player) => Square::Occupied(player),
                    None => {
                        return Err(EngineError::new(EngineErrorKind::BoardNotation(format!(
                            "unexpected character {c:?}"
                        ))));
                    }
                },
            };
            let pos = Position::from_index(index).ok_or_else(|| {
                EngineError::new(EngineErrorKind::BoardNotation(format!(
                    "more than 9 cells in {s:?}"
                )))
            })?;
            board.set(pos, square);
            index += 1;
        }
        if index != 9 {
            return Err(EngineError::new(EngineErrorKind::BoardNotation(format!(
                "expected 9 cells, found {index}"
            ))));
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legal_moves_ascending() {
        let board: Board = "X.. .O. ..X".parse().unwrap();
        let moves: Vec<usize> = board.legal_moves().iter().map(|p| p.to_index()).collect();
        assert_eq!(moves, vec![1, 2, 3, 5, 6, 7]);
        assert_eq!(board.remaining_count(), 6);
    }

    #[test]
    fn test_apply_occupied_fails_without_mutation() {
        let mut board = Board::new();
        assert!(board.apply(Position::Center, Player::X));
        let before = board;
        assert!(!board.apply(Position::Center, Player::O));
        assert_eq!(board, before);
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
    }

    #[test]
    fn test_retract_restores_empty() {
        let mut board = Board::new();
        board.apply(Position::TopRight, Player::O);
        board.retract(Position::TopRight);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_place_reports_occupied() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Player::X).unwrap();
        let err = board.place(Position::TopLeft, Player::O).unwrap_err();
        assert_eq!(err.kind, EngineErrorKind::OccupiedCell(Position::TopLeft));
    }

    #[test]
    fn test_notation_round_trip() {
        let board: Board = "XO_/_X_/__O".parse().unwrap();
        assert_eq!(board.notation(), "XO..X...O");
        assert_eq!(board.count(Player::X), 2);
        assert_eq!(board.count(Player::O), 2);
    }

    #[test]
    fn test_notation_rejects_bad_input() {
        assert!("XO".parse::<Board>().is_err());
        assert!("XXXXXXXXXX".parse::<Board>().is_err());
        assert!("XO?......".parse::<Board>().is_err());
    }

    #[test]
    fn test_display_numbers_empty_squares() {
        let board: Board = "X.. .O. ...".parse().unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}
