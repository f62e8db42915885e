//! Scores of terminal positions.

use minimax_board::{Outcome, Player};

/// Game-theoretic value of a position for the maximizing player.
pub type Score = i8;

/// The maximizing player has won.
pub const WIN: Score = 1;

/// Neither player can win.
pub const DRAW: Score = 0;

/// The minimizing player has won.
pub const LOSS: Score = -1;

/// Scores a finished game for `maximizer`.
///
/// Returns `None` while the game is still in progress. The score does not
/// depend on how many plies it took to get here.
pub fn terminal_score(outcome: Outcome, maximizer: Player) -> Option<Score> {
    match outcome {
        Outcome::InProgress => None,
        Outcome::Draw => Some(DRAW),
        Outcome::Win(winner) if winner == maximizer => Some(WIN),
        Outcome::Win(_) => Some(LOSS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_scores() {
        assert_eq!(terminal_score(Outcome::InProgress, Player::X), None);
        assert_eq!(terminal_score(Outcome::Draw, Player::O), Some(DRAW));
        assert_eq!(terminal_score(Outcome::Win(Player::O), Player::O), Some(WIN));
        assert_eq!(terminal_score(Outcome::Win(Player::X), Player::O), Some(LOSS));
    }
}
