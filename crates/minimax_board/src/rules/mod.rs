//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are separated from board
//! storage so the search can call them on every node without copying.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LineKind, WIN_PATTERNS, WinningLine, check_winner, winning_line};

use crate::{Board, Outcome};

/// Evaluates the board: a win, a draw, or still in progress.
///
/// Wins take precedence over a full board. When several patterns are
/// satisfied at once (only possible on boards built by hand), the first
/// one in [`WIN_PATTERNS`] order decides the winner.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Win(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
