use std::io::{self, Write};

use crate::board::{Move, Player, Position};
use crate::engine::SearchOutcome;

pub fn print_ready(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "readyok")?;
    out.flush()
}

pub fn print_legal(out: &mut impl Write, moves: &[Move]) -> io::Result<()> {
    write!(out, "legal")?;
    for mv in moves {
        write!(out, " {mv}")?;
    }
    writeln!(out)?;
    out.flush()
}

pub fn print_board(out: &mut impl Write, position: &Position, mover: Player) -> io::Result<()> {
    writeln!(out, "{position}")?;
    writeln!(out, "turn {mover}")?;
    writeln!(out, "board {}", position.to_board_string())?;
    out.flush()
}

/// `info` line plus `bestmove`, or `bestmove pass` when the mover is blocked.
pub fn print_outcome(
    out: &mut impl Write,
    outcome: &SearchOutcome,
    position: &Position,
    mover: Player,
) -> io::Result<()> {
    let time_ms = outcome.elapsed.as_millis();
    match &outcome.result {
        Some(result) => {
            writeln!(
                out,
                "info depth {} nodes {} score {} source {} time {time_ms}",
                result.depth, result.nodes, result.score, result.source
            )?;
            writeln!(
                out,
                "bestmove {} score {} source {}",
                result.best_move, result.score, result.source
            )?;
        }
        None if position.is_game_over() => {
            writeln!(
                out,
                "info string game over black {} white {} time {time_ms}",
                position.disc_count(Player::Black),
                position.disc_count(Player::White)
            )?;
            writeln!(out, "bestmove pass")?;
        }
        None => {
            writeln!(out, "info string {mover} has no legal move time {time_ms}")?;
            writeln!(out, "bestmove pass")?;
        }
    }
    out.flush()
}
