//! Parsing of typed player input into commands and moves.
//!
//! Moves are two squares, spaced or compact (`e2 e4`, `e2e4`), with an
//! optional piece letter in front that is accepted and ignored
//! (`Ng1f3`). Castling is `OO`/`O-O` or `OOO`/`O-O-O`. Single words
//! select the session commands.

use arbiter_core::{CastleSide, Coord, Move, PieceKind, Player};
use thiserror::Error;

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(Move),
    Save,
    Load,
    Help,
    Quit,
}

/// Why a line of input could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("nothing entered")]
    Empty,
    #[error("could not read a move from '{0}'")]
    BadMove(String),
    #[error("'{0}' is not a square")]
    BadSquare(String),
}

/// Parses one line of input from `player`.
pub fn parse_command(player: Player, input: &str) -> Result<Command, NotationError> {
    let line = input.trim();
    if line.is_empty() {
        return Err(NotationError::Empty);
    }
    match line {
        "q" | "x" | "quit" | "exit" => return Ok(Command::Quit),
        "s" | "save" => return Ok(Command::Save),
        "l" | "load" => return Ok(Command::Load),
        "h" | "?" | "help" => return Ok(Command::Help),
        "OO" | "oo" | "O-O" | "0-0" => {
            return Ok(Command::Play(Move::castle(player, CastleSide::Short)));
        }
        "OOO" | "ooo" | "O-O-O" | "0-0-0" => {
            return Ok(Command::Play(Move::castle(player, CastleSide::Long)));
        }
        _ => {}
    }
    parse_relocation(player, line).map(Command::Play)
}

/// Parses a promotion choice: a piece letter or a full piece name.
pub fn parse_promotion(input: &str) -> Option<PieceKind> {
    match input.trim().to_lowercase().as_str() {
        "q" | "queen" => Some(PieceKind::Queen),
        "r" | "rook" => Some(PieceKind::Rook),
        "b" | "bishop" => Some(PieceKind::Bishop),
        "n" | "knight" => Some(PieceKind::Knight),
        _ => None,
    }
}

fn parse_relocation(player: Player, line: &str) -> Result<Move, NotationError> {
    let mut rest = line;
    let mut chars = rest.chars();
    if let Some(first) = chars.next() {
        if PieceKind::from_letter(first).is_some() {
            rest = chars.as_str();
        }
    }
    let (from_text, to_text) = match rest.split_once(char::is_whitespace) {
        Some((from_text, to_text)) => (from_text, to_text.trim_start()),
        None if rest.len() == 4 && rest.is_ascii() => rest.split_at(2),
        None => return Err(NotationError::BadMove(line.to_string())),
    };
    let from = parse_square(from_text)?;
    let to = parse_square(to_text)?;
    Ok(Move::new(player, from, to))
}

fn parse_square(text: &str) -> Result<Coord, NotationError> {
    Coord::from_algebraic(text).ok_or_else(|| NotationError::BadSquare(text.to_string()))
}
