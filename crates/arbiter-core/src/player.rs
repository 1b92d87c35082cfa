//! Player identity and board orientation.

use serde::{Deserialize, Serialize};

/// Represents the two players. `One` owns the light pieces and moves up
/// the board from rank 0; `Two` owns the dark pieces and moves down from
/// rank 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Player {
    One = 0,
    Two = 1,
}

impl Player {
    /// Both players in index order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Returns the opposing player.
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Returns the index (0 for One, 1 for Two).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the rank holding this player's major pieces at setup.
    #[inline]
    pub const fn back_rank(self) -> u8 {
        match self {
            Player::One => 0,
            Player::Two => 7,
        }
    }

    /// Returns the rank holding this player's pawns at setup.
    #[inline]
    pub const fn pawn_rank(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 6,
        }
    }

    /// Returns the far rank a pawn must reach to promote.
    #[inline]
    pub const fn last_rank(self) -> u8 {
        match self {
            Player::One => 7,
            Player::Two => 0,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}
