//! The board: piece placement, threat detection, and move execution.
//!
//! Every relocation goes through a two-step protocol. [`Board::check_move`]
//! judges a [`Move`] and, when it is legal, returns a [`ValidMove`] token
//! recording how the move executes. [`Board::apply_move`] consumes the
//! token and mutates the board. Nothing else mutates the board during
//! play, so an applied move is always one that was just validated.

use arbiter_core::{CastleSide, Coord, Move, Piece, PieceKind, Player, Shade, Square};
use serde::{Deserialize, Serialize};

use crate::error::MoveError;
use crate::rules;

/// Neighbor offsets probed when testing whether a king can step out of
/// check, in the order they are tried.
const ADJACENT: [(i8, i8); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// Back-rank layout at setup, from the a file to the h file.
const BACK_RANK_KINDS: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// How a validated move executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Execution {
    /// Relocate the piece, capturing whatever sits on the destination.
    Plain,
    /// A diagonal pawn move that captures the pawn on `captured` in
    /// passing.
    EnPassant { captured: Coord },
    /// Relocate king and rook together.
    Castle(CastleSide),
}

/// Proof that a move passed [`Board::check_move`]. Feed it back to
/// [`Board::apply_move`] on the same board. The token cannot be built
/// outside this crate, so every applied move has been validated.
#[derive(Debug, Clone)]
pub struct ValidMove {
    mov: Move,
    execution: Execution,
}

impl ValidMove {
    /// The request this token validates.
    #[inline]
    pub fn mov(&self) -> &Move {
        &self.mov
    }
}

/// Result of the most recent check scan for one player.
#[derive(Debug, Clone, Default)]
struct CheckStatus {
    in_check: bool,
    threats: Vec<Coord>,
}

/// A serializable copy of everything that defines a position: the 64
/// squares in file-major order, both king locations, and the pawns
/// eligible for en passant capture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pieces: Vec<Option<Piece>>,
    king_location: [Coord; 2],
    two_step_pawn: [Option<Coord>; 2],
}

/// An 8x8 chess board with the bookkeeping the rules need: where each
/// king stands, which pawn just moved two squares, and the threats
/// found by the last check scan.
///
/// Coordinates index `squares[file][rank]`. Callers are trusted to stay
/// on the board; out-of-range coordinates panic.
#[derive(Debug, Clone)]
pub struct Board {
    squares: [[Square; 8]; 8],
    king_location: [Coord; 2],
    two_step_pawn: [Option<Coord>; 2],
    check: [CheckStatus; 2],
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Board {
    /// Creates a board with the standard starting position.
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.setup_pieces();
        board
    }

    /// Creates a board with no pieces. King locations hold their
    /// nominal starting squares until kings are placed.
    pub fn empty() -> Self {
        let squares: [[Square; 8]; 8] = std::array::from_fn(|file| {
            std::array::from_fn(|rank| {
                Square::empty(Shade::of(Coord::new(file as u8, rank as u8)))
            })
        });
        Board {
            squares,
            king_location: [Coord::new(4, 0), Coord::new(4, 7)],
            two_step_pawn: [None, None],
            check: [CheckStatus::default(), CheckStatus::default()],
        }
    }

    /// Clears the board and sets the starting position up again.
    pub fn reset(&mut self) {
        self.clear();
        self.setup_pieces();
    }

    /// Removes every piece and forgets all bookkeeping.
    pub fn clear(&mut self) {
        for file in 0..8 {
            for rank in 0..8 {
                self.squares[file][rank].take();
            }
        }
        self.king_location = [Coord::new(4, 0), Coord::new(4, 7)];
        self.two_step_pawn = [None, None];
        self.check = [CheckStatus::default(), CheckStatus::default()];
    }

    fn setup_pieces(&mut self) {
        for player in Player::ALL {
            let back = player.back_rank();
            for (file, kind) in BACK_RANK_KINDS.iter().enumerate() {
                self.place(Coord::new(file as u8, back), Piece::new(*kind, player));
            }
            for file in 0..8 {
                let at = Coord::new(file, player.pawn_rank());
                self.place(at, Piece::new(PieceKind::Pawn, player));
            }
        }
    }

    fn square(&self, at: Coord) -> &Square {
        &self.squares[at.file as usize][at.rank as usize]
    }

    fn square_mut(&mut self, at: Coord) -> &mut Square {
        &mut self.squares[at.file as usize][at.rank as usize]
    }

    /// The piece on a square, if any.
    #[inline]
    pub fn piece_at(&self, at: Coord) -> Option<Piece> {
        self.square(at).piece()
    }

    /// The owner of the piece on a square, if any.
    #[inline]
    pub fn owner_at(&self, at: Coord) -> Option<Player> {
        self.piece_at(at).map(|piece| piece.player)
    }

    /// The fixed shade of a square.
    #[inline]
    pub fn shade_at(&self, at: Coord) -> Shade {
        self.square(at).shade()
    }

    /// Where the player's king was last recorded.
    #[inline]
    pub fn king_location(&self, player: Player) -> Coord {
        self.king_location[player.index()]
    }

    /// The pawn of `player` that just moved two squares, if any.
    #[inline]
    pub fn two_step_pawn(&self, player: Player) -> Option<Coord> {
        self.two_step_pawn[player.index()]
    }

    /// Puts a piece on a square, replacing any occupant. Placing a king
    /// records its location.
    pub fn place(&mut self, at: Coord, piece: Piece) {
        if piece.kind == PieceKind::King {
            self.king_location[piece.player.index()] = at;
        }
        self.square_mut(at).put(piece);
    }

    /// Removes and returns the piece on a square.
    pub fn remove(&mut self, at: Coord) -> Option<Piece> {
        self.square_mut(at).take()
    }

    /// Moves whatever sits on `from` onto `to` with no bookkeeping at
    /// all, returning the displaced occupant of `to`.
    fn relocate(&mut self, from: Coord, to: Coord) -> Option<Piece> {
        let displaced = self.square_mut(to).take();
        if let Some(piece) = self.square_mut(from).take() {
            self.square_mut(to).put(piece);
        }
        displaced
    }

    /// Walks the straight or diagonal line between two squares,
    /// excluding both endpoints. Returns whether the line is open and
    /// the squares visited; when a blocker stops the walk it is the
    /// last square in the list. Identical or non-colinear endpoints
    /// report `(false, vec![])`, adjacent ones `(true, vec![])`.
    pub fn path_clear(&self, from: Coord, to: Coord) -> (bool, Vec<Coord>) {
        if from == to {
            return (false, Vec::new());
        }
        let (df, dr) = from.delta_to(to);
        if df.abs() <= 1 && dr.abs() <= 1 {
            return (true, Vec::new());
        }
        if df != 0 && dr != 0 && df.abs() != dr.abs() {
            return (false, Vec::new());
        }
        let step = (df.signum(), dr.signum());
        let mut path = Vec::new();
        let mut file = from.file as i8 + step.0;
        let mut rank = from.rank as i8 + step.1;
        while (file, rank) != (to.file as i8, to.rank as i8) {
            let here = Coord::new(file as u8, rank as u8);
            path.push(here);
            if self.square(here).occupied() {
                return (false, path);
            }
            file += step.0;
            rank += step.1;
        }
        (true, path)
    }

    /// Scans the board for enemies of `friend` that could move onto
    /// `location`. The probed square itself is skipped, so its occupant
    /// never counts. Returns whether any threat exists and the squares
    /// the threats stand on, in scan order.
    pub fn square_threatened(&self, friend: Player, location: Coord) -> (bool, Vec<Coord>) {
        let mut threats = Vec::new();
        for rank in 0..8 {
            for file in 0..8 {
                let here = Coord::new(file, rank);
                if here == location {
                    continue;
                }
                let piece = match self.piece_at(here) {
                    Some(piece) if piece.player != friend => piece,
                    _ => continue,
                };
                let delta = Move::new(piece.player, here, location).relative_delta();
                if !piece.kind.reachable(delta) {
                    continue;
                }
                let threatens = match piece.kind {
                    // Pawns only take diagonally, so a square straight
                    // ahead of one is not threatened by it.
                    PieceKind::Pawn => delta == (-1, 1) || delta == (1, 1),
                    PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen => {
                        self.path_clear(here, location).0
                    }
                    PieceKind::Knight | PieceKind::King => true,
                };
                if threatens {
                    threats.push(here);
                }
            }
        }
        (!threats.is_empty(), threats)
    }

    /// Relocates `from` onto `to` provisionally and reports whether the
    /// player's king would be threatened, with the threatening squares.
    /// The position is restored before returning.
    pub fn trial_move(&mut self, player: Player, from: Coord, to: Coord) -> (bool, Vec<Coord>) {
        let trial = TrialRelocation::new(self, from, to);
        let king = trial.board().king_location(player);
        trial.board().square_threatened(player, king)
    }

    /// Whether the player's king is threatened right now. The result
    /// and the threatening squares are kept until the next scan.
    pub fn in_check(&mut self, player: Player) -> bool {
        let king = self.king_location(player);
        let (in_check, threats) = self.square_threatened(player, king);
        self.check[player.index()] = CheckStatus { in_check, threats };
        in_check
    }

    /// Whether the player is checkmated. A player not in check is never
    /// mated. Otherwise the first recorded threat must be uncapturable,
    /// its line unblockable, and every king step illegal.
    pub fn checkmate(&mut self, player: Player) -> bool {
        if !self.in_check(player) {
            return false;
        }
        let threat = match self.check[player.index()].threats.first() {
            Some(&threat) => threat,
            None => return false,
        };
        let king = self.king_location(player);

        // Any piece but the king may capture the threat; the king's own
        // capture is judged with the escape steps below.
        let (_, mut capturers) = self.square_threatened(player.opponent(), threat);
        capturers.retain(|&loc| loc != king);
        if !capturers.is_empty() {
            return false;
        }

        // A line attack can be interposed against.
        if let Some(threat_piece) = self.piece_at(threat) {
            if threat_piece.kind.slides() {
                let (clear, line) = self.path_clear(king, threat);
                if !clear {
                    return false;
                }
                for block in line {
                    if self.can_block(player, block) {
                        return false;
                    }
                }
            }
        }

        for to in adjacent(king) {
            let mov = Move::new(player, king, to);
            if self.check_move(&mov).is_ok() {
                return false;
            }
        }
        true
    }

    /// Whether any piece of `player` could relocate onto the empty
    /// square `block`. Pawns count with pushes only, and kings never
    /// block.
    fn can_block(&self, player: Player, block: Coord) -> bool {
        for rank in 0..8 {
            for file in 0..8 {
                let here = Coord::new(file, rank);
                if here == block {
                    continue;
                }
                let piece = match self.piece_at(here) {
                    Some(piece) if piece.player == player => piece,
                    _ => continue,
                };
                let delta = Move::new(player, here, block).relative_delta();
                if !piece.kind.reachable(delta) {
                    continue;
                }
                let blocks = match piece.kind {
                    PieceKind::Pawn => delta == (0, 1) || (!piece.moved && delta == (0, 2)),
                    PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen => {
                        self.path_clear(here, block).0
                    }
                    PieceKind::Knight => true,
                    PieceKind::King => false,
                };
                if blocks {
                    return true;
                }
            }
        }
        false
    }

    /// Validates a move request. On success the token carries how the
    /// move executes; refusals report the first rule that failed.
    pub fn check_move(&mut self, mov: &Move) -> Result<ValidMove, MoveError> {
        if let Some(side) = mov.castle_side() {
            if !self.castle_allowed(mov.player(), side) {
                return Err(MoveError::CastleNotAllowed);
            }
            return Ok(ValidMove {
                mov: *mov,
                execution: Execution::Castle(side),
            });
        }
        let piece = self.piece_at(mov.from()).ok_or(MoveError::NoPieceOnSquare)?;
        if piece.player != mov.player() {
            return Err(MoveError::NotYourPiece);
        }
        let execution = rules::check_piece_move(self, piece, mov)?;
        if piece.kind != PieceKind::King {
            let (exposed, _) = self.trial_move(mov.player(), mov.from(), mov.to());
            if exposed {
                return Err(MoveError::ExposesOwnKing);
            }
        }
        Ok(ValidMove {
            mov: *mov,
            execution,
        })
    }

    /// Executes a validated move. Returns the destination square when
    /// the move leaves a pawn on its promotion rank, so the caller can
    /// ask for a promotion choice.
    pub fn apply_move(&mut self, valid: ValidMove) -> Option<Coord> {
        let ValidMove { mov, execution } = valid;
        let player = mov.player();

        if let Execution::Castle(side) = execution {
            self.execute_castle(player, side);
            return None;
        }

        let mut piece = match self.remove(mov.from()) {
            Some(piece) => piece,
            None => return None,
        };

        self.two_step_pawn[player.index()] = None;
        if piece.kind == PieceKind::Pawn && mov.relative_delta() == (0, 2) {
            self.two_step_pawn[player.index()] = Some(mov.to());
        }
        if let Execution::EnPassant { captured } = execution {
            self.remove(captured);
            self.two_step_pawn[player.opponent().index()] = None;
        }
        if piece.kind.tracks_moved() {
            piece.moved = true;
        }
        self.place(mov.to(), piece);

        if piece.kind == PieceKind::Pawn && mov.to().rank == player.last_rank() {
            Some(mov.to())
        } else {
            None
        }
    }

    fn execute_castle(&mut self, player: Player, side: CastleSide) {
        let back = player.back_rank();
        let (rook_from, rook_to, king_to) = match side {
            CastleSide::Short => (Coord::new(7, back), Coord::new(5, back), Coord::new(6, back)),
            CastleSide::Long => (Coord::new(0, back), Coord::new(3, back), Coord::new(2, back)),
        };
        let king_from = self.king_location(player);
        self.relocate_and_mark(rook_from, rook_to);
        self.relocate_and_mark(king_from, king_to);
    }

    fn relocate_and_mark(&mut self, from: Coord, to: Coord) {
        if let Some(mut piece) = self.remove(from) {
            piece.moved = true;
            self.place(to, piece);
        }
    }

    /// Whether the player may castle on the given side right now: the
    /// king stands unmoved on its back-rank square, the rook unmoved on
    /// its corner, the king is not in check, the line between rook and
    /// king is open, and neither square the king crosses is threatened.
    pub fn castle_allowed(&mut self, player: Player, side: CastleSide) -> bool {
        let back = player.back_rank();
        let king_loc = self.king_location(player);
        let king = match self.piece_at(king_loc) {
            Some(piece) => piece,
            None => return false,
        };
        if king.kind != PieceKind::King || king.player != player || king.moved {
            return false;
        }
        if king_loc.rank != back {
            return false;
        }
        let rook_loc = match side {
            CastleSide::Short => Coord::new(7, back),
            CastleSide::Long => Coord::new(0, back),
        };
        let rook = match self.piece_at(rook_loc) {
            Some(piece) => piece,
            None => return false,
        };
        if rook.kind != PieceKind::Rook || rook.player != player || rook.moved {
            return false;
        }
        if self.in_check(player) {
            return false;
        }
        if !self.path_clear(rook_loc, king_loc).0 {
            return false;
        }
        let crossings = match side {
            CastleSide::Short => [Coord::new(5, back), Coord::new(6, back)],
            CastleSide::Long => [Coord::new(2, back), Coord::new(3, back)],
        };
        crossings
            .iter()
            .all(|&square| !self.square_threatened(player, square).0)
    }

    /// Whether the diagonal pawn move `mov` is a capture in passing:
    /// the pawn starts on its fifth rank, the destination is empty, and
    /// the square it passes holds an enemy pawn that just moved two
    /// squares.
    pub fn en_passant_allowed(&self, mov: &Move) -> bool {
        let player = mov.player();
        let (from_rel, _) = mov.player_relative();
        if from_rel.rank != 4 {
            return false;
        }
        let delta = mov.relative_delta();
        if delta.0.abs() != 1 || delta.1.abs() != 1 {
            return false;
        }
        if self.piece_at(mov.to()).is_some() {
            return false;
        }
        let capture = Coord::new(mov.to().file, mov.from().rank);
        match self.piece_at(capture) {
            Some(piece) if piece.player != player && piece.kind == PieceKind::Pawn => {}
            _ => return false,
        }
        self.two_step_pawn(player.opponent()) == Some(capture)
    }

    /// Replaces the pawn of `player` on `location` with `choice`, which
    /// must be a promotion piece. Returns whether anything changed. The
    /// far-rank condition is the caller's to enforce.
    pub fn promote_piece(&mut self, player: Player, location: Coord, choice: PieceKind) -> bool {
        match self.piece_at(location) {
            Some(piece) if piece.kind == PieceKind::Pawn && piece.player == player => {}
            _ => return false,
        }
        if !choice.promotable() {
            return false;
        }
        self.place(location, Piece::new(choice, player));
        true
    }

    /// Captures the position. Check scan results are not part of a
    /// snapshot; they are rebuilt on demand.
    pub fn snapshot(&self) -> BoardSnapshot {
        let mut pieces = Vec::with_capacity(64);
        for file in 0..8 {
            for rank in 0..8 {
                pieces.push(self.piece_at(Coord::new(file, rank)));
            }
        }
        BoardSnapshot {
            pieces,
            king_location: self.king_location,
            two_step_pawn: self.two_step_pawn,
        }
    }

    /// Restores a previously captured position.
    pub fn restore(&mut self, snapshot: &BoardSnapshot) {
        self.clear();
        let mut pieces = snapshot.pieces.iter().copied();
        for file in 0..8 {
            for rank in 0..8 {
                if let Some(piece) = pieces.next().flatten() {
                    self.squares[file][rank].put(piece);
                }
            }
        }
        self.king_location = snapshot.king_location;
        self.two_step_pawn = snapshot.two_step_pawn;
    }

    /// Builds a board from a snapshot.
    pub fn from_snapshot(snapshot: &BoardSnapshot) -> Self {
        let mut board = Board::empty();
        board.restore(snapshot);
        board
    }
}

/// Temporarily relocates a piece, restoring the previous occupants when
/// dropped. Holds the board exclusively while alive.
struct TrialRelocation<'a> {
    board: &'a mut Board,
    from: Coord,
    to: Coord,
    displaced: Option<Piece>,
}

impl<'a> TrialRelocation<'a> {
    fn new(board: &'a mut Board, from: Coord, to: Coord) -> Self {
        let displaced = board.relocate(from, to);
        TrialRelocation {
            board,
            from,
            to,
            displaced,
        }
    }

    fn board(&self) -> &Board {
        self.board
    }
}

impl Drop for TrialRelocation<'_> {
    fn drop(&mut self) {
        self.board.relocate(self.to, self.from);
        if let Some(piece) = self.displaced {
            self.board.square_mut(self.to).put(piece);
        }
    }
}

/// The on-board neighbors of a square.
fn adjacent(location: Coord) -> Vec<Coord> {
    ADJACENT
        .iter()
        .filter_map(|&(df, dr)| {
            let file = location.file as i8 + df;
            let rank = location.rank as i8 + dr;
            if (0..8).contains(&file) && (0..8).contains(&rank) {
                Some(Coord::new(file as u8, rank as u8))
            } else {
                None
            }
        })
        .collect()
}
