//! Board positions and legal-move enumeration.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Number of squares on the board.
pub const NUM_SQUARES: usize = 9;

/// A position on the tic-tac-toe board (0-8, row-major).
///
/// Raw indices only become positions through [`Position::from_index`],
/// so an out-of-bounds square cannot be named.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in ascending index order.
    pub const ALL: [Position; NUM_SQUARES] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse from a number (0-8) or a label such as `"top-left"`.
    ///
    /// Labels match case-insensitively, with or without the hyphen.
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return Self::from_index(num);
        }

        let wanted: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();
        Position::iter().find(|pos| {
            let label: String = pos
                .label()
                .chars()
                .filter(|c| c.is_alphanumeric())
                .flat_map(char::to_lowercase)
                .collect();
            label == wanted
        })
    }

    /// Returns true for the four corner squares.
    pub fn is_corner(self) -> bool {
        matches!(
            self,
            Position::TopLeft | Position::TopRight | Position::BottomLeft | Position::BottomRight
        )
    }

    fn bit(self) -> u16 {
        1 << self.to_index()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Iterator over the empty squares of a board, lowest index first.
///
/// This is a snapshot: it holds a copy of the empty-square set rather than
/// a borrow, so the board can be mutated while iterating. Callers that do
/// so must restore the board before the next item is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalMoves {
    mask: u16,
}

impl LegalMoves {
    pub(crate) fn from_positions(positions: impl IntoIterator<Item = Position>) -> Self {
        let mask = positions.into_iter().fold(0, |mask, pos| mask | pos.bit());
        Self { mask }
    }
}

impl Iterator for LegalMoves {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.mask == 0 {
            return None;
        }
        let index = self.mask.trailing_zeros() as usize;
        self.mask &= self.mask - 1;
        Position::from_index(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.mask.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for LegalMoves {}

impl std::iter::FusedIterator for LegalMoves {}
