//! Shared helpers: reachable position enumeration and a reference oracle.

#![allow(dead_code)]

use perfect_play::{Board, Outcome, Player, Position, Square, evaluate};
use std::collections::HashSet;

/// Every reachable position with the game still undecided, X moving first,
/// paired with the side to move.
pub fn reachable_positions() -> Vec<(Board, Player)> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    let mut board = Board::new();
    walk(&mut board, Player::X, &mut seen, &mut out);
    out
}

fn walk(
    board: &mut Board,
    mover: Player,
    seen: &mut HashSet<Board>,
    out: &mut Vec<(Board, Player)>,
) {
    if !seen.insert(*board) {
        return;
    }
    out.push((*board, mover));
    for pos in board.legal_moves() {
        board.apply(pos, mover);
        if evaluate(board, pos, mover) == Outcome::Undecided {
            walk(board, mover.opponent(), seen, out);
        }
        board.retract(pos);
    }
}

type Cells = [Option<Player>; 9];

fn cells(board: &Board) -> Cells {
    let mut cells = [None; 9];
    for (i, square) in board.squares().iter().enumerate() {
        if let Square::Occupied(player) = square {
            cells[i] = Some(*player);
        }
    }
    cells
}

fn naive_winner(cells: &Cells) -> Option<Player> {
    let lines = [
        (0, 1, 2),
        (3, 4, 5),
        (6, 7, 8),
        (0, 3, 6),
        (1, 4, 7),
        (2, 5, 8),
        (0, 4, 8),
        (2, 4, 6),
    ];
    lines.iter().find_map(|&(a, b, c)| match (cells[a], cells[b], cells[c]) {
        (Some(p), Some(q), Some(r)) if p == q && q == r => Some(p),
        _ => None,
    })
}

fn value(cells: Cells, mover: Player, maximizer: Player) -> i32 {
    let empty = cells.iter().filter(|c| c.is_none()).count() as i32;
    if let Some(winner) = naive_winner(&cells) {
        return if winner == maximizer { empty + 1 } else { -(empty + 1) };
    }
    if empty == 0 {
        return 0;
    }
    let children = (0..9).filter(|&i| cells[i].is_none()).map(|i| {
        let mut next = cells;
        next[i] = Some(mover);
        value(next, mover.opponent(), maximizer)
    });
    if mover == maximizer {
        children.max().unwrap_or(0)
    } else {
        children.min().unwrap_or(0)
    }
}

/// Depth-weighted minimax value computed on copies with a full line scan.
pub fn oracle_value(board: &Board, mover: Player, maximizer: Player) -> i32 {
    value(cells(board), mover, maximizer)
}

/// Every move achieving the oracle value, in ascending order.
pub fn oracle_best_moves(board: &Board, mover: Player) -> Vec<Position> {
    let root = cells(board);
    let target = value(root, mover, mover);
    Position::ALL
        .iter()
        .copied()
        .filter(|pos| root[pos.to_index()].is_none())
        .filter(|pos| {
            let mut next = root;
            next[pos.to_index()] = Some(mover);
            value(next, mover.opponent(), mover) == target
        })
        .collect()
}
