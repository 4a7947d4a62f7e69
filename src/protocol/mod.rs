//! Line-oriented text protocol.
//!
//! Modelled on UCI: the front end sends commands on stdin and the engine
//! answers on stdout. Errors go to the log and never end the session.
//!
//! ```text
//! engine                               -> id / option lines, engineok
//! isready                              -> readyok
//! newgame
//! position startpos [moves f5 d6 ...]
//! position board <64 x -BW> <b|w> [moves ...]
//! go [delay <ms>]                      -> info ..., bestmove <sq> score <n> source <src>
//! legal                                -> legal <sq> ...
//! d                                    -> board diagram
//! setoption name <name> value <value>
//! quit
//! ```

use std::fmt;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::board::{MoveParseError, Player, Position, PositionError};
use crate::engine::{EngineController, SearchOutcome, SearchParams};

pub mod command;
pub mod options;
pub mod print;

use command::{parse_command, Command};
use options::{parse_setoption, EngineOptions};

/// Error type for protocol command handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Missing required parts in the command
    MissingParts,
    /// Invalid 64-character board
    InvalidBoard(PositionError),
    /// Side to move is not `b` or `w`
    InvalidSide { token: String },
    /// Invalid move in the move list
    InvalidMove { notation: String, error: MoveParseError },
    /// `pass` while the side to move has a legal move
    IllegalPass,
    UnknownOption { name: String },
    InvalidOptionValue { name: String, value: String },
    UnknownCommand(String),
    /// The search worker could not be started
    Spawn(String),
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::MissingParts => write!(f, "Missing required parts in command"),
            ProtocolError::InvalidBoard(e) => write!(f, "Invalid board: {e}"),
            ProtocolError::InvalidSide { token } => {
                write!(f, "Invalid side to move '{token}' (expected b or w)")
            }
            ProtocolError::InvalidMove { notation, error } => {
                write!(f, "Invalid move '{notation}': {error}")
            }
            ProtocolError::IllegalPass => write!(f, "Cannot pass while a legal move exists"),
            ProtocolError::UnknownOption { name } => write!(f, "Unknown option '{name}'"),
            ProtocolError::InvalidOptionValue { name, value } => {
                write!(f, "Invalid value '{value}' for option '{name}'")
            }
            ProtocolError::UnknownCommand(line) => write!(f, "Unknown command '{line}'"),
            ProtocolError::Spawn(e) => write!(f, "Cannot start search: {e}"),
        }
    }
}

impl std::error::Error for ProtocolError {}

impl From<PositionError> for ProtocolError {
    fn from(e: PositionError) -> Self {
        ProtocolError::InvalidBoard(e)
    }
}

/// Play one move-list token for `mover`, returning the new position and side to move.
///
/// `pass` is accepted only when `mover` is blocked. A move token for a
/// blocked `mover` is taken as the opponent's move after an implied pass.
pub fn play_token(
    position: &Position,
    mover: Player,
    token: &str,
) -> Result<(Position, Player), ProtocolError> {
    let blocked = !position.has_legal_move(mover);
    if token.eq_ignore_ascii_case("pass") {
        return if blocked {
            Ok((*position, mover.opponent()))
        } else {
            Err(ProtocolError::IllegalPass)
        };
    }

    let mover = if blocked { mover.opponent() } else { mover };
    let mv = position
        .parse_move(mover, token)
        .map_err(|error| ProtocolError::InvalidMove {
            notation: token.to_string(),
            error,
        })?;
    Ok((position.apply_move(&mv, mover), mover.opponent()))
}

/// Parse a `position` command into a position and side to move.
///
/// Nothing is applied until the whole command has been validated.
pub fn parse_position_command(parts: &[&str]) -> Result<(Position, Player), ProtocolError> {
    let mut i = 1;

    let (mut position, mut mover) = match parts.get(i).copied() {
        Some("startpos") => {
            i += 1;
            (Position::new(), Player::Black)
        }
        Some("board") => {
            let board = parts.get(i + 1).ok_or(ProtocolError::MissingParts)?;
            let side = parts.get(i + 2).ok_or(ProtocolError::MissingParts)?;
            let position = Position::from_board_string(board)?;
            let mover = Player::from_token(side).ok_or_else(|| ProtocolError::InvalidSide {
                token: (*side).to_string(),
            })?;
            i += 3;
            (position, mover)
        }
        _ => return Err(ProtocolError::MissingParts),
    };

    if parts.get(i) == Some(&"moves") {
        for token in &parts[i + 1..] {
            (position, mover) = play_token(&position, mover, token)?;
        }
    }

    Ok((position, mover))
}

fn parse_go(parts: &[&str]) -> SearchParams {
    let mut params = SearchParams::default();
    let mut i = 1;
    while i < parts.len() {
        match parts[i] {
            "delay" => {
                if let Some(ms) = parts.get(i + 1).and_then(|v| v.parse::<u64>().ok()) {
                    params.delay = Duration::from_millis(ms);
                }
                i += 2;
            }
            _ => i += 1,
        }
    }
    params
}

/// What the loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One protocol session. Output is shared with the search worker, which
/// writes its own `bestmove` line.
pub struct Session<W: Write + Send + 'static> {
    controller: EngineController,
    options: EngineOptions,
    out: Arc<Mutex<W>>,
}

impl<W: Write + Send + 'static> Session<W> {
    pub fn new(out: W) -> Self {
        let options = EngineOptions::default();
        Session {
            controller: EngineController::new(options.kind, options.config.clone()),
            options,
            out: Arc::new(Mutex::new(out)),
        }
    }

    #[must_use]
    pub fn controller(&self) -> &EngineController {
        &self.controller
    }

    /// Handle one input line.
    pub fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        let Some(cmd) = parse_command(line) else {
            return Ok(Flow::Continue);
        };
        match self.execute(cmd) {
            Ok(flow) => Ok(flow),
            Err(HandleError::Protocol(e)) => {
                log_warn!("{e}");
                writeln!(self.out.lock(), "info string error: {e}")?;
                self.out.lock().flush()?;
                Ok(Flow::Continue)
            }
            Err(HandleError::Io(e)) => Err(e),
        }
    }

    fn execute(&mut self, cmd: Command) -> Result<Flow, HandleError> {
        match cmd {
            Command::Engine => {
                let mut out = self.out.lock();
                self.options.print(&mut *out)?;
                out.flush()?;
            }
            Command::IsReady => print::print_ready(&mut *self.out.lock())?,
            Command::NewGame => self.controller.new_game(),
            Command::Position(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                let (position, mover) = parse_position_command(&parts)?;
                self.controller.set_position(position, mover);
            }
            Command::Go(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                self.go(parse_go(&parts))?;
            }
            Command::Legal => {
                let moves = self.controller.legal_moves();
                print::print_legal(&mut *self.out.lock(), moves.as_slice())?;
            }
            Command::Display => {
                let (position, mover) = (*self.controller.position(), self.controller.mover());
                print::print_board(&mut *self.out.lock(), &position, mover)?;
            }
            Command::SetOption(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                let (name, value) = parse_setoption(&parts).ok_or(ProtocolError::MissingParts)?;
                let mut updated = self.options.clone();
                updated.apply_setoption(&name, value.as_deref())?;
                log_info!("option {name} set to {}", value.as_deref().unwrap_or(""));
                self.controller
                    .configure(updated.kind, updated.config.clone());
                self.options = updated;
            }
            Command::Quit => {
                self.controller.wait_for_search();
                return Ok(Flow::Quit);
            }
            Command::Unknown(line) => return Err(ProtocolError::UnknownCommand(line).into()),
        }
        Ok(Flow::Continue)
    }

    fn go(&mut self, params: SearchParams) -> Result<(), HandleError> {
        let position = *self.controller.position();
        let mover = self.controller.mover();
        let out = Arc::clone(&self.out);
        self.controller
            .start_search(params, move |outcome: SearchOutcome| {
                let mut out = out.lock();
                if let Err(e) = print::print_outcome(&mut *out, &outcome, &position, mover) {
                    log_warn!("cannot write search result: {e}");
                }
            })
            .map_err(|e| ProtocolError::Spawn(e.to_string()))?;
        Ok(())
    }

    /// Wait for a running search so its output is complete.
    pub fn finish(&mut self) {
        self.controller.wait_for_search();
    }
}

enum HandleError {
    Protocol(ProtocolError),
    Io(io::Error),
}

impl From<ProtocolError> for HandleError {
    fn from(e: ProtocolError) -> Self {
        HandleError::Protocol(e)
    }
}

impl From<io::Error> for HandleError {
    fn from(e: io::Error) -> Self {
        HandleError::Io(e)
    }
}

/// Serve the protocol until `quit` or end of input.
pub fn run<R: BufRead, W: Write + Send + 'static>(input: R, output: W) -> io::Result<()> {
    let mut session = Session::new(output);
    for line in input.lines() {
        if session.handle_line(&line?)? == Flow::Quit {
            break;
        }
    }
    session.finish();
    Ok(())
}

/// Serve the protocol on stdin/stdout.
pub fn run_stdio() -> io::Result<()> {
    run(io::stdin().lock(), io::stdout())
}
