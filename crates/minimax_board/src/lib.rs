//! Tic-tac-toe board model.
//!
//! A fixed 3x3 grid that is mutated in place: marks are placed and later
//! undone in stack order, which lets a game-tree search walk every
//! continuation without copying the board.
//!
//! # Example
//!
//! ```
//! use minimax_board::{Board, Outcome, Player, Position};
//!
//! let mut board: Board = "XX_ OO_ ___".parse().unwrap();
//! assert_eq!(board.evaluate(), Outcome::InProgress);
//!
//! board.place(Position::TopRight, Player::X);
//! assert_eq!(board.evaluate(), Outcome::Win(Player::X));
//! board.undo(Position::TopRight);
//! assert!(board.is_empty(Position::TopRight));
//! ```

#![warn(missing_docs)]

mod board;
mod position;
pub mod rules;
mod types;

pub use board::{Board, BoardParseError, Placed};
pub use position::{LegalMoves, NUM_SQUARES, Position};
pub use rules::{LineKind, WIN_PATTERNS, WinningLine};
pub use types::{Cell, Outcome, Player, PlayerParseError};

/// A move is the square being marked.
pub type Move = Position;
