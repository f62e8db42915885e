//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Player, Position};
use serde::{Deserialize, Serialize};

/// Every line that wins the game, in the order they are checked.
///
/// Rows first, then columns, then the two diagonals.
pub const WIN_PATTERNS: [[Position; 3]; 8] = [
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

/// The shape of a winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// A row.
    Horizontal,
    /// A column.
    Vertical,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

/// A satisfied win pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    /// The player holding the line.
    pub player: Player,
    /// Squares of the line, lowest index first.
    pub positions: [Position; 3],
    /// Shape of the line.
    pub kind: LineKind,
}

fn line_kind(pattern_index: usize) -> LineKind {
    match pattern_index {
        0..=2 => LineKind::Horizontal,
        3..=5 => LineKind::Vertical,
        6 => LineKind::Diagonal,
        _ => LineKind::AntiDiagonal,
    }
}

/// Returns the first satisfied win pattern, if any.
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    WIN_PATTERNS
        .iter()
        .enumerate()
        .find_map(|(i, &[a, b, c])| match board.get(a) {
            Cell::Occupied(player)
                if board.get(b) == board.get(a) && board.get(c) == board.get(a) =>
            {
                let mut positions = [a, b, c];
                positions.sort();
                Some(WinningLine {
                    player,
                    positions,
                    kind: line_kind(i),
                })
            }
            _ => None,
        })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in WIN_PATTERNS {
        let sq = board.get(a);
        if sq != Cell::Empty && sq == board.get(b) && sq == board.get(c) {
            return sq.player();
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_every_pattern_detected() {
        for player in [Player::X, Player::O] {
            for pattern in WIN_PATTERNS {
                let mut board = Board::new();
                for pos in pattern {
                    board.place(pos, player);
                }
                assert_eq!(check_winner(&board), Some(player), "{pattern:?}");
            }
        }
    }

    #[test]
    fn test_winning_line_kind() {
        let board: Board = "__O _O_ O__".parse().unwrap();
        let line = winning_line(&board).unwrap();
        assert_eq!(line.player, Player::O);
        assert_eq!(line.kind, LineKind::AntiDiagonal);
        assert_eq!(
            line.positions,
            [Position::TopRight, Position::Center, Position::BottomLeft]
        );

        let board: Board = "_X_ _X_ _X_".parse().unwrap();
        assert_eq!(winning_line(&board).unwrap().kind, LineKind::Vertical);
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let board: Board = "XXO ___ ___".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }
}
