//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Parses a player from a single character, ignoring case.
    pub fn from_char(c: char) -> Result<Self, PlayerParseError> {
        match c {
            'x' | 'X' => Ok(Player::X),
            'o' | 'O' => Ok(Player::O),
            c => Err(PlayerParseError::InvalidChar(c)),
        }
    }
}

impl std::str::FromStr for Player {
    type Err = PlayerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => Err(PlayerParseError::InvalidLength(s.chars().count())),
        }
    }
}

/// Failed to parse a [`Player`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PlayerParseError {
    /// The input must be exactly one character.
    #[display("a player is one character, got {} characters", _0)]
    InvalidLength(usize),

    /// The character is not `X` or `O`.
    #[display("'{}' is not a valid player (expected X or O)", _0)]
    InvalidChar(char),
}

impl std::error::Error for PlayerParseError {}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// Result of evaluating a board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Outcome {
    /// Game is ongoing.
    #[display("in progress")]
    InProgress,
    /// Game ended in a win.
    #[display("{} wins", _0)]
    Win(Player),
    /// Game ended in a draw.
    #[display("Draw")]
    Draw,
}

impl Outcome {
    /// Returns true if the game has concluded.
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }

    /// Returns the winner, if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(player),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_parse_player() {
        assert_eq!("x".parse::<Player>(), Ok(Player::X));
        assert_eq!(" O ".parse::<Player>(), Ok(Player::O));
        assert_eq!(
            "xo".parse::<Player>(),
            Err(PlayerParseError::InvalidLength(2))
        );
        assert_eq!(
            "".parse::<Player>(),
            Err(PlayerParseError::InvalidLength(0))
        );
        assert_eq!(
            "z".parse::<Player>(),
            Err(PlayerParseError::InvalidChar('z'))
        );
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Win(Player::O).to_string(), "O wins");
        assert_eq!(Outcome::Draw.to_string(), "Draw");
        assert!(!Outcome::InProgress.is_terminal());
        assert_eq!(Outcome::Win(Player::X).winner(), Some(Player::X));
        assert_eq!(Outcome::Draw.winner(), None);
    }
}
