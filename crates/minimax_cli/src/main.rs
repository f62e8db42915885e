//! Strictly Minimax - unified CLI

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use minimax_board::{Board, Player};
use minimax_cli::{AnalysisReport, Cli, Command, GameConfig, TurnLoop, self_play};
use minimax_engine::Engine;
use std::io::Write;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = GameConfig::load_or_default(&cli.config)?;
    let mode = cli.mode.unwrap_or(*config.mode());

    match cli.command {
        Command::Play {
            human,
            engine_first,
        } => run_play(config.with_overrides(human, engine_first, Some(mode))),
        Command::Selfplay { board } => run_selfplay(board.unwrap_or_default(), Engine::new(mode)),
        Command::Analyze {
            board,
            player,
            json,
        } => run_analyze(board, player, json, Engine::new(mode)),
    }
}

/// Logs go to stderr so the board on stdout stays readable.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Play a game against the engine on the terminal
#[instrument(skip_all)]
fn run_play(config: GameConfig) -> Result<()> {
    info!(?config, "Starting game");
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut game = TurnLoop::new(
        stdin.lock(),
        stdout.lock(),
        Engine::new(*config.mode()),
        *config.human(),
        *config.human_first(),
    );
    game.run().context("Game aborted")?;
    Ok(())
}

/// Let the engine play itself
#[instrument(skip(engine))]
fn run_selfplay(board: Board, engine: Engine) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{}", board)?;
    self_play(board, engine, &mut stdout).context("Self-play failed")?;
    Ok(())
}

/// Print the score of every legal move
#[instrument(skip(board, engine))]
fn run_analyze(board: Board, player: Option<Player>, json: bool, engine: Engine) -> Result<()> {
    let player = player.unwrap_or_else(|| board.to_move());
    let report = AnalysisReport::build(board, player, engine).context("Cannot analyze board")?;

    let mut stdout = std::io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, &report)?;
        writeln!(stdout)?;
    } else {
        report.write_text(&mut stdout)?;
    }
    Ok(())
}
