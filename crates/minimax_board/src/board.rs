//! The 3x3 board and its in-place mutation.

use crate::position::{LegalMoves, NUM_SQUARES, Position};
use crate::rules;
use crate::types::{Cell, Outcome, Player};
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use tracing::instrument;

/// 3x3 tic-tac-toe board.
///
/// The board is mutated in place during search. Every [`Board::place`] must
/// be paired with exactly one [`Board::undo`] of the same square, in
/// reverse order, to get the previous position back. [`Board::place_scoped`]
/// does the pairing automatically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; NUM_SQUARES],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; NUM_SQUARES],
        }
    }

    /// Creates a board from its cells in row-major order.
    pub fn from_cells(cells: [Cell; NUM_SQUARES]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; NUM_SQUARES] {
        &self.cells
    }

    /// Marks an empty square for `player`.
    ///
    /// # Panics
    ///
    /// Panics if the square is already occupied. Callers validate moves
    /// before placing; the search only places on legal moves.
    pub fn place(&mut self, pos: Position, player: Player) {
        assert!(
            self.is_empty(pos),
            "place on occupied square {pos} ({:?})",
            self.get(pos)
        );
        self.cells[pos.to_index()] = Cell::Occupied(player);
    }

    /// Clears a square marked by the matching [`Board::place`].
    ///
    /// # Panics
    ///
    /// Panics if the square is already empty, which means place and undo
    /// were not paired.
    pub fn undo(&mut self, pos: Position) {
        assert!(!self.is_empty(pos), "undo on empty square {pos}");
        self.cells[pos.to_index()] = Cell::Empty;
    }

    /// Places a mark and returns a guard that undoes it when dropped.
    ///
    /// The guard dereferences to the board, so the child position can be
    /// inspected and searched through it.
    ///
    /// # Panics
    ///
    /// Panics if the square is already occupied.
    pub fn place_scoped(&mut self, pos: Position, player: Player) -> Placed<'_> {
        self.place(pos, player);
        Placed { board: self, pos }
    }

    /// Evaluates the position: win, draw, or still in progress.
    pub fn evaluate(&self) -> Outcome {
        rules::evaluate(self)
    }

    /// The first satisfied win pattern, for highlighting.
    pub fn winning_line(&self) -> Option<rules::WinningLine> {
        rules::winning_line(self)
    }

    /// Empty squares in ascending index order.
    pub fn legal_moves(&self) -> LegalMoves {
        LegalMoves::from_positions(Position::ALL.into_iter().filter(|&pos| self.is_empty(pos)))
    }

    /// Number of squares marked by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(player))
            .count()
    }

    /// The player whose turn it is, assuming X moved first.
    pub fn to_move(&self) -> Player {
        if self.count(Player::X) > self.count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }
}

/// A placed mark that is undone when the guard is dropped.
///
/// Returned by [`Board::place_scoped`].
#[derive(Debug)]
pub struct Placed<'a> {
    board: &'a mut Board,
    pos: Position,
}

impl Placed<'_> {
    /// The square this guard marked.
    pub fn position(&self) -> Position {
        self.pos
    }
}

impl Deref for Placed<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placed<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placed<'_> {
    fn drop(&mut self) {
        // No assertion here: a panic while unwinding would abort.
        self.board.cells[self.pos.to_index()] = Cell::Empty;
    }
}

/// Failed to parse a [`Board`] from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// The text does not describe exactly nine cells.
    #[display("a board has 9 cells, got {}", _0)]
    WrongLength(usize),

    /// A character is neither a mark nor an empty-cell marker.
    #[display("'{}' is not a board cell (expected X, O, _, ., - or a digit)", _0)]
    InvalidChar(char),
}

impl std::error::Error for BoardParseError {}

impl std::str::FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells in row-major order.
    ///
    /// Whitespace and `|` separators are ignored. `X` and `O` (any case)
    /// are marks; `_`, `.`, `-` and digits are empty squares.
    #[instrument(level = "debug")]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .map(|c| match c {
                '_' | '.' | '-' => Ok(Cell::Empty),
                c if c.is_ascii_digit() => Ok(Cell::Empty),
                c => Player::from_char(c)
                    .map(Cell::Occupied)
                    .map_err(|_| BoardParseError::InvalidChar(c)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let cells: [Cell; NUM_SQUARES] = cells
            .try_into()
            .map_err(|cells: Vec<Cell>| BoardParseError::WrongLength(cells.len()))?;
        Ok(Self { cells })
    }
}

impl std::fmt::Display for Board {
    /// Renders the grid with each empty square showing its index.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            let symbols: Vec<String> = (0..3)
                .map(|col| {
                    let index = row * 3 + col;
                    match self.cells[index] {
                        Cell::Empty => index.to_string(),
                        Cell::Occupied(player) => player.to_string(),
                    }
                })
                .collect();
            writeln!(f, "{}", symbols.join(" | "))?;
            if row < 2 {
                writeln!(f, "--+---+--")?;
            }
        }
        Ok(())
    }
}
