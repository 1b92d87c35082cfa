//! Board coordinates.

use crate::player::Player;
use serde::{Deserialize, Serialize};

/// A location on the board as a (file, rank) pair, each in `0..8`.
///
/// File 0 is the a-file and rank 0 is Player 1's back rank, so `a1` is
/// `Coord::new(0, 0)` and `h8` is `Coord::new(7, 7)`. Coordinates are
/// trusted to be on the board; feeding an out-of-range value into the
/// engine panics when the grid is indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub file: u8,
    pub rank: u8,
}

impl Coord {
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Self {
        Coord { file, rank }
    }

    /// Parses algebraic notation such as `"e4"`.
    pub fn from_algebraic(s: &str) -> Option<Coord> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = match bytes[0] {
            b @ b'a'..=b'h' => b - b'a',
            _ => return None,
        };
        let rank = match bytes[1] {
            b @ b'1'..=b'8' => b - b'1',
            _ => return None,
        };
        Some(Coord::new(file, rank))
    }

    /// Returns this coordinate as seen from the given player's side of
    /// the board: Player 1 sees it as is, Player 2 with the rank
    /// mirrored. Movement rules are written once for Player 1's forward
    /// direction and evaluated in this frame.
    #[inline]
    pub const fn player_relative(self, player: Player) -> Coord {
        match player {
            Player::One => self,
            Player::Two => Coord::new(self.file, 7 - self.rank),
        }
    }

    /// Returns the signed (file, rank) difference from `self` to `other`.
    #[inline]
    pub const fn delta_to(self, other: Coord) -> (i8, i8) {
        (
            other.file as i8 - self.file as i8,
            other.rank as i8 - self.rank as i8,
        )
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, self.rank + 1)
    }
}
