//! Full-depth minimax over the board model.
//!
//! The board is explored in place: each child is reached by placing a mark
//! through [`Board::place_scoped`], whose guard undoes it before the next
//! sibling is tried. Legal moves are always visited in ascending index
//! order, and the root keeps the first move that strictly improves the best
//! score, so ties go to the lowest index.

use crate::score::{Score, terminal_score};
use minimax_board::{Board, Move, Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// How the tree is walked.
///
/// Both modes return the same score and the same move for every position;
/// they differ only in how many nodes they visit.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SearchMode {
    /// Visit every reachable leaf.
    #[default]
    Exhaustive,
    /// Alpha-beta pruning with the same move order.
    AlphaBeta,
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions evaluated, the root included.
    pub nodes: u64,
}

/// The engine's answer for a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct SearchResult {
    /// Lowest-index move achieving the best score.
    pub best_move: Move,
    /// Value of the position for the maximizing player.
    pub score: Score,
    /// Search counters.
    pub stats: SearchStats,
}

/// Score of one root move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct MoveScore {
    /// The move.
    pub position: Move,
    /// Value after the move, for the player making it.
    pub score: Score,
}

/// Error returned when asking the engine about a finished game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// The board is already won or drawn, so there is nothing to search.
    #[display("Game is already over ({})", _0)]
    GameOver(Outcome),
}

impl std::error::Error for SearchError {}

/// Minimax search engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Engine {
    mode: SearchMode,
}

impl Engine {
    /// Creates an engine using the given search mode.
    pub fn new(mode: SearchMode) -> Self {
        Self { mode }
    }

    /// Returns the search mode.
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Finds the best move for `maximizer`, who is to move on `board`.
    ///
    /// The board is mutated during the search and restored before this
    /// returns.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::GameOver`] if the board is already won or
    /// drawn, which includes every board without an empty square.
    #[instrument(skip(self, board, maximizer), fields(mode = %self.mode, maximizer = %maximizer))]
    pub fn best_move(
        &self,
        board: &mut Board,
        maximizer: Player,
    ) -> Result<SearchResult, SearchError> {
        let outcome = board.evaluate();
        if outcome.is_terminal() {
            return Err(SearchError::GameOver(outcome));
        }

        let mut stats = SearchStats { nodes: 1 };
        let mut best: Option<(Move, Score)> = None;

        for pos in board.legal_moves() {
            let best_score = best.map_or(Score::MIN, |(_, score)| score);
            let score = {
                let mut child = board.place_scoped(pos, maximizer);
                match self.mode {
                    SearchMode::Exhaustive => {
                        minimax(&mut child, maximizer, maximizer.opponent(), &mut stats)
                    }
                    SearchMode::AlphaBeta => alpha_beta(
                        &mut child,
                        maximizer,
                        maximizer.opponent(),
                        best_score,
                        Score::MAX,
                        &mut stats,
                    ),
                }
            };
            trace!(position = %pos, score, "Root move searched");

            if score > best_score {
                best = Some((pos, score));
            }
        }

        // A board that is not terminal always has an empty square.
        let (best_move, score) = best.ok_or(SearchError::GameOver(outcome))?;
        debug!(best_move = %best_move, score, nodes = stats.nodes, "Search complete");
        Ok(SearchResult::new(best_move, score, stats))
    }

    /// Scores every legal move for `maximizer`, in ascending index order.
    ///
    /// Always searches exhaustively so each score is exact, not a bound.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::GameOver`] if the board is already won or
    /// drawn.
    #[instrument(skip(self, board, maximizer), fields(maximizer = %maximizer))]
    pub fn analyze(
        &self,
        board: &mut Board,
        maximizer: Player,
    ) -> Result<Vec<MoveScore>, SearchError> {
        let outcome = board.evaluate();
        if outcome.is_terminal() {
            return Err(SearchError::GameOver(outcome));
        }

        let mut stats = SearchStats { nodes: 1 };
        let scores: Vec<MoveScore> = board
            .legal_moves()
            .map(|pos| {
                let mut child = board.place_scoped(pos, maximizer);
                let score = minimax(&mut child, maximizer, maximizer.opponent(), &mut stats);
                MoveScore::new(pos, score)
            })
            .collect();

        debug!(moves = scores.len(), nodes = stats.nodes, "Analysis complete");
        Ok(scores)
    }
}

/// Value of `board` for `maximizer` when `to_move` is about to play.
///
/// Plain minimax: every continuation is searched to the end of the game.
pub fn minimax(
    board: &mut Board,
    maximizer: Player,
    to_move: Player,
    stats: &mut SearchStats,
) -> Score {
    stats.nodes += 1;
    if let Some(score) = terminal_score(board.evaluate(), maximizer) {
        return score;
    }

    let maximizing = to_move == maximizer;
    let mut best = if maximizing { Score::MIN } else { Score::MAX };
    for pos in board.legal_moves() {
        let mut child = board.place_scoped(pos, to_move);
        let score = minimax(&mut child, maximizer, to_move.opponent(), stats);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}

/// Fail-soft alpha-beta.
///
/// Returns the exact minimax value when it lies strictly inside
/// `(alpha, beta)`, a value `<= alpha` when the true value is `<= alpha`,
/// and a value `>= beta` when the true value is `>= beta`.
fn alpha_beta(
    board: &mut Board,
    maximizer: Player,
    to_move: Player,
    mut alpha: Score,
    mut beta: Score,
    stats: &mut SearchStats,
) -> Score {
    stats.nodes += 1;
    if let Some(score) = terminal_score(board.evaluate(), maximizer) {
        return score;
    }

    let maximizing = to_move == maximizer;
    let mut best = if maximizing { Score::MIN } else { Score::MAX };
    for pos in board.legal_moves() {
        let score = {
            let mut child = board.place_scoped(pos, to_move);
            alpha_beta(&mut child, maximizer, to_move.opponent(), alpha, beta, stats)
        };
        if maximizing {
            best = best.max(score);
            alpha = alpha.max(score);
        } else {
            best = best.min(score);
            beta = beta.min(score);
        }
        if alpha >= beta {
            break;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::{DRAW, LOSS, WIN};
    use minimax_board::Position;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_completes_own_row() {
        let mut b = board("XX_ OO_ ___");
        let before = b.clone();
        let result = Engine::default().best_move(&mut b, Player::X).unwrap();
        assert_eq!(result.best_move, Position::TopRight);
        assert_eq!(result.score, WIN);
        assert_eq!(b, before);
    }

    #[test]
    fn test_blocks_when_cannot_win() {
        // O to move; X threatens the top row and O has no win of its own.
        let mut b = board("XX_ _O_ ___");
        let result = Engine::default().best_move(&mut b, Player::O).unwrap();
        assert_eq!(result.best_move, Position::TopRight);
        assert_eq!(result.score, DRAW);
    }

    #[test]
    fn test_lost_position_scores_loss() {
        // X has a double threat; whatever O does, X wins.
        let mut b = board("X_X _O_ X_O");
        let result = Engine::default().best_move(&mut b, Player::O).unwrap();
        assert_eq!(result.score, LOSS);
        assert!(b.is_empty(result.best_move));
    }

    #[test]
    fn test_slow_win_scores_same_as_immediate_win() {
        // X wins at once on 7, but 0 forks (threats on 2 and 7) and wins a
        // move later. Both score WIN, so the lower index is chosen.
        let mut b = board("_X_ OX_ __O");
        let scores = Engine::default().analyze(&mut b, Player::X).unwrap();
        let score_of = |pos: Position| scores.iter().find(|s| s.position == pos).unwrap().score;
        assert_eq!(score_of(Position::TopLeft), WIN);
        assert_eq!(score_of(Position::BottomCenter), WIN);

        let result = Engine::default().best_move(&mut b, Player::X).unwrap();
        assert_eq!(result.best_move, Position::TopLeft);
        assert_eq!(result.score, WIN);
    }

    #[test]
    fn test_game_over_is_an_error() {
        let mut won = board("XXX OO_ ___");
        assert_eq!(
            Engine::default().best_move(&mut won, Player::O),
            Err(SearchError::GameOver(Outcome::Win(Player::X)))
        );

        let mut full = board("XOX XOO OXX");
        assert_eq!(
            Engine::default().best_move(&mut full, Player::X),
            Err(SearchError::GameOver(Outcome::Draw))
        );
        assert!(Engine::default().analyze(&mut full, Player::X).is_err());
    }

    #[test]
    fn test_last_square() {
        // X O X / X O O / O X _ : one move left, X fills it for a draw.
        let mut b = board("XOX XOO OX_");
        let result = Engine::default().best_move(&mut b, Player::X).unwrap();
        assert_eq!(result.best_move, Position::BottomRight);
        assert_eq!(result.score, DRAW);
        assert_eq!(result.stats.nodes, 2);
    }

    #[test]
    fn test_alpha_beta_visits_fewer_nodes() {
        let mut b = Board::new();
        let full = Engine::new(SearchMode::Exhaustive)
            .best_move(&mut b, Player::X)
            .unwrap();
        let pruned = Engine::new(SearchMode::AlphaBeta)
            .best_move(&mut b, Player::X)
            .unwrap();
        assert_eq!(full.best_move, pruned.best_move);
        assert_eq!(full.score, pruned.score);
        assert!(pruned.stats.nodes < full.stats.nodes);
        assert_eq!(b, Board::new());
    }

    #[test]
    fn test_search_mode_parse() {
        assert_eq!("alpha_beta".parse::<SearchMode>().unwrap(), SearchMode::AlphaBeta);
        assert_eq!("exhaustive".parse::<SearchMode>().unwrap(), SearchMode::Exhaustive);
        assert!("pvs".parse::<SearchMode>().is_err());
        assert_eq!(SearchMode::AlphaBeta.to_string(), "alpha_beta");
    }
}
