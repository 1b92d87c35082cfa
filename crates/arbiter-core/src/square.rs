//! A single board square: fixed shade plus current occupant.

use crate::coord::Coord;
use crate::piece::Piece;
use serde::{Deserialize, Serialize};

/// The checkered coloring of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shade {
    Light,
    Dark,
}

impl Shade {
    /// The shade of the square at the given coordinate. a1 is dark.
    #[inline]
    pub const fn of(at: Coord) -> Shade {
        if (at.file + at.rank) % 2 == 0 {
            Shade::Dark
        } else {
            Shade::Light
        }
    }
}

/// One cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Square {
    shade: Shade,
    piece: Option<Piece>,
}

impl Square {
    /// Creates an empty square of the given shade.
    #[inline]
    pub const fn empty(shade: Shade) -> Self {
        Square { shade, piece: None }
    }

    #[inline]
    pub const fn shade(self) -> Shade {
        self.shade
    }

    #[inline]
    pub const fn piece(self) -> Option<Piece> {
        self.piece
    }

    #[inline]
    pub const fn occupied(self) -> bool {
        self.piece.is_some()
    }

    /// Places a piece, replacing any occupant.
    #[inline]
    pub fn put(&mut self, piece: Piece) {
        self.piece = Some(piece);
    }

    /// Removes and returns the occupant, if any.
    #[inline]
    pub fn take(&mut self) -> Option<Piece> {
        self.piece.take()
    }
}
