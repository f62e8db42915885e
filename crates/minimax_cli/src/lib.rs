//! Turn loop, self-play, and analysis front end for the minimax engine.

#![warn(missing_docs)]

mod analysis;
mod cli;
mod config;
mod turn_loop;

pub use analysis::AnalysisReport;
pub use cli::{Cli, Command};
pub use config::{ConfigError, GameConfig};
pub use turn_loop::{MoveInputError, PlayError, TurnLoop, parse_human_move, self_play};
