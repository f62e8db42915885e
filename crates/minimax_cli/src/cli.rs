//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use minimax_board::{Board, Player};
use minimax_engine::SearchMode;
use std::path::PathBuf;

/// Strictly Minimax - tic-tac-toe against a full-depth minimax engine
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Play tic-tac-toe against a perfect opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the game configuration file
    #[arg(long, global = true, default_value = "strictly_minimax.toml")]
    pub config: PathBuf,

    /// Search mode (exhaustive or alpha_beta); overrides the config file
    #[arg(long, global = true)]
    pub mode: Option<SearchMode>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the engine
    Play {
        /// Mark to play as (X or O)
        #[arg(long)]
        human: Option<Player>,

        /// Let the engine move first
        #[arg(long)]
        engine_first: bool,
    },

    /// Watch the engine play itself
    Selfplay {
        /// Starting board, nine cells such as "X__ _O_ ___"
        #[arg(long)]
        board: Option<Board>,
    },

    /// Score every legal move on a board
    Analyze {
        /// Board to analyze, nine cells such as "XX_ OO_ ___"
        #[arg(long)]
        board: Board,

        /// Player to analyze for; defaults to the side to move
        #[arg(long)]
        player: Option<Player>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from([
            "strictly_minimax",
            "analyze",
            "--board",
            "XX_OO____",
            "--player",
            "x",
            "--mode",
            "alpha_beta",
        ])
        .unwrap();
        assert_eq!(cli.mode, Some(SearchMode::AlphaBeta));
        match cli.command {
            Command::Analyze { board, player, json } => {
                assert_eq!(board, "XX_ OO_ ___".parse::<Board>().unwrap());
                assert_eq!(player, Some(Player::X));
                assert!(!json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_rejects_bad_board() {
        assert!(Cli::try_parse_from(["strictly_minimax", "analyze", "--board", "XX"]).is_err());
    }
}
