//! Exhaustive minimax search.
//!
//! Scores are from the fixed perspective of the maximizing side. A decided
//! game scores `remaining + 1`, where `remaining` is the number of empty
//! squares left when the line was completed, so faster wins and slower
//! losses are preferred. Draws score 0.
//!
//! The board is searched in place: every trial move is retracted before the
//! next candidate is tried, and nothing returns between a placement and its
//! retraction. The caller gets its board back unchanged.

use crate::rules::line_completed;
use crate::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Best move and minimax value of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchResult {
    /// Best move, `None` on a terminal position.
    pub best: Option<Position>,
    /// Value for the maximizing side.
    pub score: i32,
}

impl SearchResult {
    /// Result of a terminal position.
    pub fn terminal(score: i32) -> Self {
        Self { best: None, score }
    }

    /// Board index of the best move.
    pub fn index(&self) -> Option<usize> {
        self.best.map(Position::to_index)
    }
}

/// Computes the minimax value of `board` with `mover` to play.
///
/// Ties go to the lowest-index move.
#[instrument(skip(board), fields(notation = %board.notation()))]
pub fn search(board: &mut Board, mover: Player, maximizer: Player) -> SearchResult {
    #[cfg(debug_assertions)]
    let before = *board;

    let mut minimax = Minimax::new(maximizer);
    let result = minimax.exhaustive(board, mover, None);

    #[cfg(debug_assertions)]
    debug_assert_eq!(before, *board, "search left trial moves on the board");

    debug!(
        best = ?result.best,
        score = result.score,
        nodes = minimax.nodes,
        "Exhaustive search complete"
    );
    result
}

/// Same result as [`search`], with alpha-beta cutoffs.
#[instrument(skip(board), fields(notation = %board.notation()))]
pub fn search_pruned(board: &mut Board, mover: Player, maximizer: Player) -> SearchResult {
    #[cfg(debug_assertions)]
    let before = *board;

    let mut minimax = Minimax::new(maximizer);
    let result = minimax.alpha_beta(board, mover, None, i32::MIN, i32::MAX);

    #[cfg(debug_assertions)]
    debug_assert_eq!(before, *board, "search left trial moves on the board");

    debug!(
        best = ?result.best,
        score = result.score,
        nodes = minimax.nodes,
        "Pruned search complete"
    );
    result
}

/// Per-call search state.
struct Minimax {
    maximizer: Player,
    nodes: u64,
}

impl Minimax {
    fn new(maximizer: Player) -> Self {
        Self {
            maximizer,
            nodes: 0,
        }
    }

    /// Score of the position if the game is over, given the previous ply.
    fn terminal_score(&self, board: &Board, mover: Player, last: Option<Position>) -> Option<i32> {
        let just_moved = mover.opponent();
        if let Some(last) = last
            && line_completed(board, last, just_moved)
        {
            let magnitude = board.remaining_count() as i32 + 1;
            return Some(if just_moved == self.maximizer {
                magnitude
            } else {
                -magnitude
            });
        }
        if board.is_full() {
            return Some(0);
        }
        None
    }

    fn exhaustive(&mut self, board: &mut Board, mover: Player, last: Option<Position>) -> SearchResult {
        self.nodes += 1;
        if let Some(score) = self.terminal_score(board, mover, last) {
            return SearchResult::terminal(score);
        }

        let maximizing = mover == self.maximizer;
        let mut best = SearchResult::terminal(if maximizing { i32::MIN } else { i32::MAX });

        for pos in board.legal_moves() {
            board.apply(pos, mover);
            let score = self.exhaustive(board, mover.opponent(), Some(pos)).score;
            board.retract(pos);

            let better = if maximizing {
                score > best.score
            } else {
                score < best.score
            };
            if better {
                best = SearchResult {
                    best: Some(pos),
                    score,
                };
            }
        }

        best
    }

    /// Fail-soft alpha-beta. Within the window the value is exact, and the
    /// root window is unbounded, so the root move and score match
    /// [`Minimax::exhaustive`].
    fn alpha_beta(
        &mut self,
        board: &mut Board,
        mover: Player,
        last: Option<Position>,
        mut alpha: i32,
        mut beta: i32,
    ) -> SearchResult {
        self.nodes += 1;
        if let Some(score) = self.terminal_score(board, mover, last) {
            return SearchResult::terminal(score);
        }

        let maximizing = mover == self.maximizer;
        let mut best = SearchResult::terminal(if maximizing { i32::MIN } else { i32::MAX });

        for pos in board.legal_moves() {
            board.apply(pos, mover);
            let score = self
                .alpha_beta(board, mover.opponent(), Some(pos), alpha, beta)
                .score;
            board.retract(pos);

            if maximizing {
                if score > best.score {
                    best = SearchResult {
                        best: Some(pos),
                        score,
                    };
                }
                alpha = alpha.max(best.score);
            } else {
                if score < best.score {
                    best = SearchResult {
                        best: Some(pos),
                        score,
                    };
                }
                beta = beta.min(best.score);
            }
            if alpha >= beta {
                break;
            }
        }

        best
    }
}
