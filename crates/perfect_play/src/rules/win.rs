//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use tracing::instrument;

/// All eight winning lines.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks whether the move `player` just made at `last` completed a line.
///
/// Only the row, the column and (for the center and corners) the diagonals
/// through `last` are examined. A single move cannot complete any other line.
pub fn line_completed(board: &Board, last: Position, player: Player) -> bool {
    let mark = Square::Occupied(player);
    let row = last.row() * 3;
    let col = last.column();
    let at = |i: usize| board.squares()[i] == mark;

    if at(row) && at(row + 1) && at(row + 2) {
        return true;
    }
    if at(col) && at(col + 3) && at(col + 6) {
        return true;
    }
    if last.on_diagonal() {
        if at(0) && at(4) && at(8) {
            return true;
        }
        if at(2) && at(4) && at(6) {
            return true;
        }
    }
    false
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first line found with three equal marks,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Square::Occupied(player) => Some(player),
                Square::Empty => None,
            };
        }
    }

    None
}
