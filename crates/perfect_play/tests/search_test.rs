//! Tests for the minimax search.

mod common;

use common::{oracle_best_moves, oracle_value, reachable_positions};
use perfect_play::{Board, Player, Position, search, search_pruned};

#[test]
fn test_search_leaves_board_untouched_everywhere() {
    for (board, mover) in reachable_positions() {
        let mut scratch = board;
        search(&mut scratch, mover, mover);
        assert_eq!(scratch, board, "plain search mutated {}", board.notation());
        search_pruned(&mut scratch, mover, mover.opponent());
        assert_eq!(scratch, board, "pruned search mutated {}", board.notation());
    }
}

#[test]
fn test_search_matches_oracle_everywhere() {
    for (board, mover) in reachable_positions() {
        let mut scratch = board;
        let result = search(&mut scratch, mover, mover);
        assert_eq!(
            result.score,
            oracle_value(&board, mover, mover),
            "score mismatch on {}",
            board.notation()
        );

        let optimal = oracle_best_moves(&board, mover);
        assert_eq!(
            result.best,
            optimal.first().copied(),
            "expected lowest-index optimal move on {}",
            board.notation()
        );
    }
}

#[test]
fn test_minimizing_side_score_matches_oracle() {
    for (board, mover) in reachable_positions().into_iter().step_by(7) {
        let mut scratch = board;
        let result = search(&mut scratch, mover, mover.opponent());
        assert_eq!(result.score, oracle_value(&board, mover, mover.opponent()));
        assert_eq!(result.score, -search(&mut scratch, mover, mover).score);
    }
}

#[test]
fn test_pruned_search_identical_everywhere() {
    for (board, mover) in reachable_positions() {
        for maximizer in [Player::X, Player::O] {
            let mut scratch = board;
            let plain = search(&mut scratch, mover, maximizer);
            let pruned = search_pruned(&mut scratch, mover, maximizer);
            assert_eq!(plain, pruned, "divergence on {} ({mover} to move)", board.notation());
        }
    }
}

#[test]
fn test_prefers_immediate_win_over_later_win() {
    // X O . / . X O / . . .  X wins at once on 8, or forks with 2 or 3.
    let mut board: Board = "XO. .XO ...".parse().unwrap();
    let result = search(&mut board, Player::X, Player::X);
    assert_eq!(result.best, Some(Position::BottomRight));
    assert_eq!(result.score, 5);

    // The fork at 2 wins too, two plies later.
    board.apply(Position::TopRight, Player::X);
    let later = search(&mut board, Player::O, Player::X);
    assert_eq!(later.score, 3);
}

#[test]
fn test_prefers_slower_loss() {
    // . . . / . X . / . O X  O is lost, but blocking at 0 delays the end.
    let mut board: Board = "... .X. .OX".parse().unwrap();
    let result = search(&mut board, Player::O, Player::O);
    assert_eq!(result.best, Some(Position::TopLeft));
    assert_eq!(result.score, -3);

    board.apply(Position::TopCenter, Player::O);
    let faster = search(&mut board, Player::X, Player::O);
    assert_eq!(faster.score, -5);
}

#[test]
fn test_corner_center_opening_is_a_draw() {
    let mut board: Board = "X.. .O. ...".parse().unwrap();
    let result = search(&mut board, Player::X, Player::X);
    assert_eq!(result.score, 0);

    let reply = result.best.unwrap();
    board.apply(reply, Player::X);
    let answer = search(&mut board, Player::O, Player::O);
    assert!(answer.score <= 0, "{} lets O force a win", reply);
}

#[test]
fn test_empty_board_is_a_draw_for_both_sides() {
    let mut board = Board::new();
    assert_eq!(search(&mut board, Player::X, Player::X).score, 0);
    assert_eq!(search(&mut board, Player::X, Player::O).score, 0);
    assert_eq!(board, Board::new());
}
