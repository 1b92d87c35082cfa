//! Move requests as entered by a player.

use crate::coord::Coord;
use crate::player::Player;
use serde::{Deserialize, Serialize};

/// The two castling directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CastleSide {
    /// Kingside, toward the h file.
    Short,
    /// Queenside, toward the a file.
    Long,
}

/// A request to relocate a piece, or to castle. Carries the requesting
/// player so the rules can judge ownership and orientation without any
/// extra context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    player: Player,
    castle: Option<CastleSide>,
    from: Coord,
    to: Coord,
}

impl Move {
    /// Creates an ordinary from-square to-square request.
    #[inline]
    pub const fn new(player: Player, from: Coord, to: Coord) -> Self {
        Move {
            player,
            castle: None,
            from,
            to,
        }
    }

    /// Creates a castling request. The coordinates record the king's
    /// nominal hop on the player's back rank; execution relocates both
    /// king and rook itself.
    pub const fn castle(player: Player, side: CastleSide) -> Self {
        let back = player.back_rank();
        let king_file = match side {
            CastleSide::Short => 6,
            CastleSide::Long => 2,
        };
        Move {
            player,
            castle: Some(side),
            from: Coord::new(4, back),
            to: Coord::new(king_file, back),
        }
    }

    /// The player who made the request.
    #[inline]
    pub const fn player(self) -> Player {
        self.player
    }

    /// The castling side, if this is a castling request.
    #[inline]
    pub const fn castle_side(self) -> Option<CastleSide> {
        self.castle
    }

    /// The starting square.
    #[inline]
    pub const fn from(self) -> Coord {
        self.from
    }

    /// The destination square.
    #[inline]
    pub const fn to(self) -> Coord {
        self.to
    }

    /// Both endpoints mirrored into the requesting player's frame.
    pub const fn player_relative(self) -> (Coord, Coord) {
        (
            self.from.player_relative(self.player),
            self.to.player_relative(self.player),
        )
    }

    /// The (file, rank) delta of the move as the requesting player sees
    /// it, so a forward pawn push is always a positive rank delta.
    pub const fn relative_delta(self) -> (i8, i8) {
        let (from, to) = self.player_relative();
        from.delta_to(to)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.castle {
            Some(CastleSide::Short) => write!(f, "O-O"),
            Some(CastleSide::Long) => write!(f, "O-O-O"),
            None => write!(f, "{}{}", self.from, self.to),
        }
    }
}
