//! Per-move position analysis.

use minimax_board::{Board, Player};
use minimax_engine::{Engine, MoveScore, SearchError, SearchResult};
use serde::Serialize;
use std::io::Write;
use tracing::instrument;

/// Scores of every legal move plus the engine's choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    /// The analyzed board.
    pub board: Board,
    /// The player the scores are for.
    pub player: Player,
    /// Score of each legal move, lowest index first.
    pub moves: Vec<MoveScore>,
    /// The move the engine would play.
    pub best: SearchResult,
}

impl AnalysisReport {
    /// Analyzes `board` for `player`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::GameOver`] if the game is already finished.
    #[instrument(skip(board, player, engine), fields(player = %player))]
    pub fn build(mut board: Board, player: Player, engine: Engine) -> Result<Self, SearchError> {
        let moves = engine.analyze(&mut board, player)?;
        let best = engine.best_move(&mut board, player)?;
        Ok(Self {
            board,
            player,
            moves,
            best,
        })
    }

    /// Writes a human-readable table.
    pub fn write_text<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        write!(out, "{}", self.board)?;
        writeln!(out, "Scores for {}:", self.player)?;
        for entry in &self.moves {
            writeln!(
                out,
                "  {} {:<13} {:>2}",
                entry.position.to_index(),
                entry.position.label(),
                entry.score
            )?;
        }
        writeln!(
            out,
            "Best move: {} ({}), score {}, {} nodes",
            self.best.best_move.to_index(),
            self.best.best_move,
            self.best.score,
            self.best.stats.nodes
        )
    }
}
