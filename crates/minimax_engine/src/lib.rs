//! Full-depth minimax search for tic-tac-toe.
//!
//! The engine scores positions for a fixed maximizing player: +1 if that
//! player wins with best play from both sides, -1 if they lose, 0 for a
//! draw. Scores are not shaped by depth, so a quick win and a slow win are
//! worth the same.
//!
//! # Example
//!
//! ```
//! use minimax_board::{Board, Outcome, Player, Position};
//! use minimax_engine::{best_move, evaluate_terminal};
//!
//! let mut board: Board = "XX_ OO_ ___".parse().unwrap();
//! assert_eq!(evaluate_terminal(&board), Outcome::InProgress);
//!
//! let result = best_move(&mut board, Player::X).unwrap();
//! assert_eq!(result.best_move, Position::TopRight);
//! assert_eq!(result.score, 1);
//! ```

#![warn(missing_docs)]

mod score;
mod search;

pub use score::{DRAW, LOSS, Score, WIN, terminal_score};
pub use search::{Engine, MoveScore, SearchError, SearchMode, SearchResult, SearchStats, minimax};

use minimax_board::{Board, Outcome, Player};

/// Evaluates whether the game on `board` has ended.
///
/// Callers check this after every move, and before asking for a
/// [`best_move`].
pub fn evaluate_terminal(board: &Board) -> Outcome {
    board.evaluate()
}

/// Finds the best move for `maximizer` with an exhaustive search.
///
/// # Errors
///
/// Returns [`SearchError::GameOver`] if the game has already ended.
pub fn best_move(board: &mut Board, maximizer: Player) -> Result<SearchResult, SearchError> {
    Engine::default().best_move(board, maximizer)
}
