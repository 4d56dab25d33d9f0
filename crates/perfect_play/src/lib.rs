//! Perfect play for 3x3 tic-tac-toe.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid, move primitives and win/draw rules
//! - **Search**: exhaustive depth-weighted minimax, optionally with
//!   alpha-beta cutoffs that never change the result
//! - **Selector**: opening book on the empty board, search everywhere else
//!
//! Collaborators call two entry points: [`choose_move`] once per engine
//! turn and [`evaluate`] after every move.
//!
//! # Example
//!
//! ```
//! use perfect_play::{Board, Outcome, Player, Position, choose_move, evaluate};
//!
//! # fn example() -> Result<(), perfect_play::EngineError> {
//! let mut board: Board = "XX. OO. ...".parse()?;
//! let pos = choose_move(&mut board, Player::O)?;
//! assert_eq!(pos, Position::MiddleRight);
//!
//! board.place(pos, Player::O)?;
//! assert_eq!(evaluate(&board, pos, Player::O), Outcome::Won(Player::O));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod config;
mod error;
mod position;
pub mod rules;
mod search;
mod selector;
mod types;

pub use board::Board;
pub use config::SelectorConfig;
pub use error::{EngineError, EngineErrorKind};
pub use position::Position;
pub use rules::{check_winner, evaluate, evaluate_full, line_completed};
pub use search::{SearchResult, search, search_pruned};
pub use selector::{MoveSelector, choose_move};
pub use types::{Outcome, Player, Square};
