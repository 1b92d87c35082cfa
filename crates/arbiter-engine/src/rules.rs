//! Per-kind movement legality.
//!
//! Each rule judges one move for one kind of piece against the current
//! board, without relocating anything. Discovered check is not judged
//! here; the board layer runs a trial relocation afterwards for every
//! piece except the king, whose destination is probed directly.

use arbiter_core::{Coord, Move, Piece, PieceKind};

use crate::board::{Board, Execution};
use crate::error::MoveError;

/// Judges whether `piece` may make `mov`, and how the move would
/// execute if it may.
pub(crate) fn check_piece_move(
    board: &Board,
    piece: Piece,
    mov: &Move,
) -> Result<Execution, MoveError> {
    match piece.kind {
        PieceKind::Pawn => check_pawn(board, piece, mov),
        PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen => check_slider(board, piece, mov),
        PieceKind::Knight => check_knight(board, piece, mov),
        PieceKind::King => check_king(board, piece, mov),
    }
}

fn check_pawn(board: &Board, piece: Piece, mov: &Move) -> Result<Execution, MoveError> {
    let delta = mov.relative_delta();
    if !piece.kind.reachable(delta) {
        return Err(MoveError::UnreachableDestination);
    }
    if delta == (0, 2) && piece.moved {
        return Err(MoveError::UnreachableDestination);
    }
    if board.owner_at(mov.to()) == Some(piece.player) {
        return Err(MoveError::FriendlyDestination);
    }
    if delta.0 == 0 {
        // A push may not capture.
        if board.piece_at(mov.to()).is_some() {
            return Err(MoveError::BlockedPath);
        }
        return Ok(Execution::Plain);
    }
    // Diagonal, so a capture: directly or in passing.
    if board.piece_at(mov.to()).is_some() {
        return Ok(Execution::Plain);
    }
    if board.en_passant_allowed(mov) {
        Ok(Execution::EnPassant {
            captured: Coord::new(mov.to().file, mov.from().rank),
        })
    } else {
        Err(MoveError::EnPassantNotAllowed)
    }
}

/// Rooks, bishops, and queens: the line to the destination must be
/// clear. The path is tested before the destination, so a blocked line
/// to a friendly square reports the blocked path.
fn check_slider(board: &Board, piece: Piece, mov: &Move) -> Result<Execution, MoveError> {
    if !piece.kind.reachable(mov.relative_delta()) {
        return Err(MoveError::UnreachableDestination);
    }
    let (clear, _) = board.path_clear(mov.from(), mov.to());
    if !clear {
        return Err(MoveError::BlockedPath);
    }
    if board.owner_at(mov.to()) == Some(piece.player) {
        return Err(MoveError::FriendlyDestination);
    }
    Ok(Execution::Plain)
}

fn check_knight(board: &Board, piece: Piece, mov: &Move) -> Result<Execution, MoveError> {
    if !piece.kind.reachable(mov.relative_delta()) {
        return Err(MoveError::UnreachableDestination);
    }
    if board.owner_at(mov.to()) == Some(piece.player) {
        return Err(MoveError::FriendlyDestination);
    }
    Ok(Execution::Plain)
}

/// The king may not step onto a threatened square. The threat scan runs
/// with the king still on its starting square.
fn check_king(board: &Board, piece: Piece, mov: &Move) -> Result<Execution, MoveError> {
    if !piece.kind.reachable(mov.relative_delta()) {
        return Err(MoveError::UnreachableDestination);
    }
    if board.owner_at(mov.to()) == Some(piece.player) {
        return Err(MoveError::FriendlyDestination);
    }
    let (threatened, _) = board.square_threatened(piece.player, mov.to());
    if threatened {
        return Err(MoveError::ExposesOwnKing);
    }
    Ok(Execution::Plain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbiter_core::Player;

    fn coord(text: &str) -> Coord {
        Coord::from_algebraic(text).unwrap()
    }

    fn mov(player: Player, from: &str, to: &str) -> Move {
        Move::new(player, coord(from), coord(to))
    }

    fn judge(board: &Board, from: &str, to: &str) -> Result<Execution, MoveError> {
        let piece = board.piece_at(coord(from)).unwrap();
        check_piece_move(board, piece, &mov(piece.player, from, to))
    }

    #[test]
    fn pawn_pushes_forward_only() {
        let board = Board::new();
        assert_eq!(judge(&board, "e2", "e3"), Ok(Execution::Plain));
        assert_eq!(judge(&board, "e2", "e4"), Ok(Execution::Plain));
        assert_eq!(
            judge(&board, "e2", "e5"),
            Err(MoveError::UnreachableDestination)
        );
        assert_eq!(
            judge(&board, "e7", "e8"),
            Err(MoveError::UnreachableDestination)
        );
    }

    #[test]
    fn moved_pawn_loses_the_double_step() {
        let mut board = Board::new();
        let mut pawn = board.remove(coord("e2")).unwrap();
        pawn.moved = true;
        board.place(coord("e3"), pawn);
        assert_eq!(
            judge(&board, "e3", "e5"),
            Err(MoveError::UnreachableDestination)
        );
        assert_eq!(judge(&board, "e3", "e4"), Ok(Execution::Plain));
    }

    #[test]
    fn pawn_push_cannot_capture() {
        let mut board = Board::new();
        let enemy = board.remove(coord("d7")).unwrap();
        board.place(coord("e3"), enemy);
        assert_eq!(judge(&board, "e2", "e3"), Err(MoveError::BlockedPath));
    }

    #[test]
    fn pawn_captures_diagonally() {
        let mut board = Board::new();
        let enemy = board.remove(coord("d7")).unwrap();
        board.place(coord("d3"), enemy);
        assert_eq!(judge(&board, "e2", "d3"), Ok(Execution::Plain));
        assert_eq!(
            judge(&board, "e2", "f3"),
            Err(MoveError::EnPassantNotAllowed)
        );
    }

    #[test]
    fn slider_reports_blocked_path_before_friendly_destination() {
        let board = Board::new();
        // a1 to a8 is blocked by the pawn on a2 before the rook ever
        // considers who stands on a8.
        assert_eq!(judge(&board, "a1", "a8"), Err(MoveError::BlockedPath));

        let mut open = Board::new();
        open.remove(coord("a2"));
        open.remove(coord("a7"));
        let friendly = open.remove(coord("b2")).unwrap();
        open.place(coord("a5"), friendly);
        assert_eq!(
            judge(&open, "a1", "a5"),
            Err(MoveError::FriendlyDestination)
        );
    }

    #[test]
    fn slider_shapes_are_enforced() {
        let mut board = Board::new();
        board.remove(coord("a2"));
        assert_eq!(
            judge(&board, "a1", "b3"),
            Err(MoveError::UnreachableDestination)
        );
        assert_eq!(judge(&board, "a1", "a6"), Ok(Execution::Plain));
    }

    #[test]
    fn knight_jumps_over_the_pawn_wall() {
        let board = Board::new();
        assert_eq!(judge(&board, "b1", "c3"), Ok(Execution::Plain));
        assert_eq!(
            judge(&board, "b1", "d2"),
            Err(MoveError::FriendlyDestination)
        );
        assert_eq!(
            judge(&board, "b1", "b3"),
            Err(MoveError::UnreachableDestination)
        );
    }

    #[test]
    fn king_refuses_threatened_squares() {
        use arbiter_core::{Piece, PieceKind};

        let mut board = Board::empty();
        board.place(coord("e1"), Piece::new(PieceKind::King, Player::One));
        board.place(coord("d8"), Piece::new(PieceKind::Rook, Player::Two));
        assert_eq!(judge(&board, "e1", "d1"), Err(MoveError::ExposesOwnKing));
        assert_eq!(judge(&board, "e1", "e2"), Ok(Execution::Plain));
        assert_eq!(
            judge(&board, "e1", "e3"),
            Err(MoveError::UnreachableDestination)
        );
    }
}
