//! Human-vs-engine and engine-vs-engine game loops.
//!
//! The loops are generic over their input and output so a game can be
//! scripted in tests.

use minimax_board::{Board, Outcome, Player, Position};
use minimax_engine::{Engine, SearchError, evaluate_terminal};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Why a human's move was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveInputError {
    /// The input is neither a number nor a square name.
    #[display("'{}' is not a position", _0)]
    NotAPosition(String),

    /// The number is not a square on the board.
    #[display("{} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The square already holds a mark.
    #[display("{} is already taken", _0)]
    Occupied(Position),
}

impl std::error::Error for MoveInputError {}

/// Parses a human's move and checks that it can be played on `board`.
pub fn parse_human_move(input: &str, board: &Board) -> Result<Position, MoveInputError> {
    let input = input.trim();
    let pos = match input.parse::<usize>() {
        Ok(index) => Position::from_index(index).ok_or(MoveInputError::OutOfRange(index))?,
        Err(_) => Position::from_label_or_number(input)
            .ok_or_else(|| MoveInputError::NotAPosition(input.to_string()))?,
    };

    if !board.is_empty(pos) {
        return Err(MoveInputError::Occupied(pos));
    }
    Ok(pos)
}

/// Error that ends a game early.
#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum PlayError {
    /// Reading input or writing output failed.
    #[display("I/O error: {}", _0)]
    #[from]
    Io(std::io::Error),

    /// Input ended before the game did.
    #[display("Input closed before the game ended")]
    InputClosed,

    /// The engine was asked to move in a finished game.
    #[display("Engine error: {}", _0)]
    #[from]
    Search(SearchError),
}

impl std::error::Error for PlayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::InputClosed => None,
            Self::Search(e) => Some(e),
        }
    }
}

/// A game between a human on `input`/`output` and the engine.
#[derive(Debug)]
pub struct TurnLoop<R, W> {
    input: R,
    output: W,
    engine: Engine,
    human: Player,
    human_first: bool,
    board: Board,
}

impl<R: BufRead, W: Write> TurnLoop<R, W> {
    /// Creates a game on an empty board.
    pub fn new(input: R, output: W, engine: Engine, human: Player, human_first: bool) -> Self {
        Self {
            input,
            output,
            engine,
            human,
            human_first,
            board: Board::new(),
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Consumes the loop, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays until someone wins or the board fills up.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::InputClosed`] if input ends mid-game, or
    /// [`PlayError::Io`] if the terminal cannot be read or written.
    #[instrument(skip(self), fields(human = %self.human, human_first = self.human_first))]
    pub fn run(&mut self) -> Result<Outcome, PlayError> {
        let engine_side = self.human.opponent();
        info!("Game started");
        writeln!(self.output, "You are {}, engine is {}", self.human, engine_side)?;
        write!(self.output, "{}", self.board)?;

        let mut human_turn = self.human_first;
        let outcome = loop {
            if human_turn {
                let pos = self.read_human_move()?;
                self.board.place(pos, self.human);
                debug!(position = %pos, "Human moved");
            } else {
                let result = self.engine.best_move(&mut self.board, engine_side)?;
                self.board.place(result.best_move, engine_side);
                info!(
                    position = %result.best_move,
                    score = result.score,
                    nodes = result.stats.nodes,
                    "Engine moved"
                );
                writeln!(
                    self.output,
                    "Engine plays {} ({})",
                    result.best_move.to_index(),
                    result.best_move
                )?;
            }

            let outcome = evaluate_terminal(&self.board);
            if outcome.is_terminal() {
                break outcome;
            }
            if !human_turn {
                write!(self.output, "{}", self.board)?;
            }
            human_turn = !human_turn;
        };

        write!(self.output, "{}", self.board)?;
        writeln!(self.output, "Result: {}", outcome)?;
        info!(%outcome, "Game over");
        Ok(outcome)
    }

    /// Prompts until the human enters a playable square.
    fn read_human_move(&mut self) -> Result<Position, PlayError> {
        loop {
            write!(self.output, "Enter position (0-8): ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                warn!("Input closed mid-game");
                return Err(PlayError::InputClosed);
            }

            match parse_human_move(&line, &self.board) {
                Ok(pos) => return Ok(pos),
                Err(e) => {
                    warn!(input = line.trim(), error = %e, "Rejected move");
                    writeln!(self.output, "Invalid move! {}", e)?;
                }
            }
        }
    }
}

/// Lets the engine play both sides from `board` until the game ends.
///
/// Each side searches as the maximizing player for itself. The side to
/// move is derived from the mark counts, X moving first.
///
/// # Errors
///
/// Returns [`PlayError::Search`] if `board` is already finished.
#[instrument(skip(board, output), fields(mode = %engine.mode()))]
pub fn self_play<W: Write>(
    mut board: Board,
    engine: Engine,
    output: &mut W,
) -> Result<Outcome, PlayError> {
    let outcome = evaluate_terminal(&board);
    if outcome.is_terminal() {
        return Err(SearchError::GameOver(outcome).into());
    }

    loop {
        let side = board.to_move();
        let result = engine.best_move(&mut board, side)?;
        board.place(result.best_move, side);
        debug!(%side, position = %result.best_move, score = result.score, "Self-play move");
        writeln!(
            output,
            "{} plays {} ({}), score {}",
            side,
            result.best_move.to_index(),
            result.best_move,
            result.score
        )?;

        let outcome = evaluate_terminal(&board);
        if outcome.is_terminal() {
            write!(output, "{}", board)?;
            writeln!(output, "Result: {}", outcome)?;
            return Ok(outcome);
        }
    }
}
