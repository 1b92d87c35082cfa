//! Piece kinds, their movement shapes, and piece state.

use crate::player::Player;
use serde::{Deserialize, Serialize};

/// Every delta a pawn can ever use, as seen from its owner's side.
/// The double step stays reachable after the pawn has moved; the
/// first-move restriction is enforced by the legality rules.
const PAWN_DELTAS: [(i8, i8); 4] = [(0, 1), (-1, 1), (1, 1), (0, 2)];

/// The eight knight jumps.
const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
];

/// The six kinds of chess piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Rook = 1,
    Knight = 2,
    Bishop = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// All kinds in index order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Returns the single-letter code used in rendering ('N' for Knight).
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Rook => 'R',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Parses a single-letter code.
    pub const fn from_letter(c: char) -> Option<PieceKind> {
        match c {
            'P' => Some(PieceKind::Pawn),
            'R' => Some(PieceKind::Rook),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Returns true if a piece of this kind could ever move by the given
    /// player-relative (file, rank) delta, ignoring everything on the
    /// board. This is the pure shape test; blocking, capture targets,
    /// and first-move restrictions belong to the legality rules.
    pub fn reachable(self, delta: (i8, i8)) -> bool {
        match self {
            PieceKind::Pawn => PAWN_DELTAS.contains(&delta),
            PieceKind::Rook => delta.0 == 0 || delta.1 == 0,
            PieceKind::Knight => KNIGHT_DELTAS.contains(&delta),
            PieceKind::Bishop => delta.0.abs() == delta.1.abs(),
            PieceKind::Queen => {
                delta.0.abs() == delta.1.abs() || delta.0 == 0 || delta.1 == 0
            }
            PieceKind::King => delta.0.abs() <= 1 && delta.1.abs() <= 1,
        }
    }

    /// Returns true for kinds that move along open lines and therefore
    /// need a clear path to their destination.
    #[inline]
    pub const fn slides(self) -> bool {
        matches!(self, PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen)
    }

    /// Returns true for kinds whose first relocation is remembered:
    /// pawns for the double step, rooks and kings for castling.
    #[inline]
    pub const fn tracks_moved(self) -> bool {
        matches!(self, PieceKind::Pawn | PieceKind::Rook | PieceKind::King)
    }

    /// Returns true if a pawn may promote to this kind.
    #[inline]
    pub const fn promotable(self) -> bool {
        matches!(
            self,
            PieceKind::Rook | PieceKind::Knight | PieceKind::Bishop | PieceKind::Queen
        )
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Rook => "rook",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        write!(f, "{}", name)
    }
}

/// A piece on the board: its kind, its owner, and whether it has been
/// moved. The `moved` flag only ever becomes true for pawns, rooks, and
/// kings, the kinds whose rules care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub player: Player,
    pub moved: bool,
}

impl Piece {
    /// Creates an unmoved piece.
    #[inline]
    pub const fn new(kind: PieceKind, player: Player) -> Self {
        Piece {
            kind,
            player,
            moved: false,
        }
    }
}
