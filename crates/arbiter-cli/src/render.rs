//! Terminal rendering of the board, rank 8 at the top.

use arbiter_core::{Coord, Piece, PieceKind, Player, Shade};
use arbiter_engine::Board;

use crate::config::CliConfig;

const LIGHT_BG: &str = "\x1b[46m";
const DARK_BG: &str = "\x1b[40m";
const ONE_FG: &str = "\x1b[37m";
const TWO_FG: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Renders the board as text, honoring the glyph and color settings.
///
/// Player One's pieces are uppercase letters (or the white glyphs),
/// Player Two's are lowercase (or the black glyphs).
pub fn render_board(board: &Board, config: &CliConfig) -> String {
    let mut out = String::new();
    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');
        for file in 0..8u8 {
            push_square(&mut out, board, Coord::new(file, rank), config);
        }
        out.push('\n');
    }
    out.push_str("   a  b  c  d  e  f  g  h\n");
    out
}

fn push_square(out: &mut String, board: &Board, at: Coord, config: &CliConfig) {
    let piece = board.piece_at(at);
    let glyph = match piece {
        Some(piece) if config.unicode_pieces => unicode_glyph(piece),
        Some(piece) => letter_glyph(piece),
        // With shaded squares the shade alone marks an empty cell.
        None if config.color => ' ',
        None => '·',
    };
    if config.color {
        out.push_str(match board.shade_at(at) {
            Shade::Light => LIGHT_BG,
            Shade::Dark => DARK_BG,
        });
        if let Some(piece) = piece {
            out.push_str(match piece.player {
                Player::One => ONE_FG,
                Player::Two => TWO_FG,
            });
        }
        out.push(' ');
        out.push(glyph);
        out.push(' ');
        out.push_str(RESET);
    } else {
        out.push(' ');
        out.push(glyph);
        out.push(' ');
    }
}

fn letter_glyph(piece: Piece) -> char {
    match piece.player {
        Player::One => piece.kind.letter(),
        Player::Two => piece.kind.letter().to_ascii_lowercase(),
    }
}

fn unicode_glyph(piece: Piece) -> char {
    match (piece.player, piece.kind) {
        (Player::One, PieceKind::Pawn) => '♙',
        (Player::One, PieceKind::Knight) => '♘',
        (Player::One, PieceKind::Bishop) => '♗',
        (Player::One, PieceKind::Rook) => '♖',
        (Player::One, PieceKind::Queen) => '♕',
        (Player::One, PieceKind::King) => '♔',
        (Player::Two, PieceKind::Pawn) => '♟',
        (Player::Two, PieceKind::Knight) => '♞',
        (Player::Two, PieceKind::Bishop) => '♝',
        (Player::Two, PieceKind::Rook) => '♜',
        (Player::Two, PieceKind::Queen) => '♛',
        (Player::Two, PieceKind::King) => '♚',
    }
}
