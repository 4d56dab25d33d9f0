//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Win detection after a move is anchored
//! to that move; the full-board scan exists for positions that arrive
//! without a last move.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{check_winner, line_completed};

use crate::{Board, Outcome, Player, Position};
use tracing::instrument;

/// Outcome of the position right after `last_mark` played at `last`.
#[instrument(skip(board), fields(notation = %board.notation()))]
pub fn evaluate(board: &Board, last: Position, last_mark: Player) -> Outcome {
    if line_completed(board, last, last_mark) {
        Outcome::Won(last_mark)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Undecided
    }
}

/// Outcome of a position with no known last move, by scanning every line.
#[instrument(skip(board), fields(notation = %board.notation()))]
pub fn evaluate_full(board: &Board) -> Outcome {
    match check_winner(board) {
        Some(player) => Outcome::Won(player),
        None if board.is_full() => Outcome::Draw,
        None => Outcome::Undecided,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board: Board = "XOX OXX OXO".parse().unwrap();
        assert_eq!(evaluate(&board, Position::BottomRight, Player::O), Outcome::Draw);
        assert_eq!(evaluate_full(&board), Outcome::Draw);
    }

    #[test]
    fn test_winning_last_move() {
        let board: Board = "XXX OO. ...".parse().unwrap();
        assert_eq!(evaluate(&board, Position::TopRight, Player::X), Outcome::Won(Player::X));
    }

    #[test]
    fn test_win_on_final_square_beats_draw() {
        let board: Board = "XOX OXO OXX".parse().unwrap();
        assert_eq!(evaluate(&board, Position::BottomRight, Player::X), Outcome::Won(Player::X));
    }

    #[test]
    fn test_undecided() {
        let board: Board = "X.. .O. ...".parse().unwrap();
        assert_eq!(evaluate(&board, Position::Center, Player::O), Outcome::Undecided);
        assert_eq!(evaluate_full(&board), Outcome::Undecided);
    }
}
