//! Move legality, check detection, and game flow for two-player chess.
//!
//! The crate is built around a two-step protocol:
//!
//! - [`Board`] owns piece placement and answers threat, check, and
//!   checkmate questions.
//! - [`Board::check_move`] judges a request and returns a [`ValidMove`]
//!   token; [`Board::apply_move`] consumes the token and mutates the
//!   board. A move that was never validated cannot be applied.
//! - [`Game`] adds turn order and promotion flow on top.
//!
//! ```
//! use arbiter_core::{Coord, Move, Player};
//! use arbiter_engine::Board;
//!
//! let mut board = Board::new();
//! let mov = Move::new(Player::One, Coord::new(4, 1), Coord::new(4, 3));
//! let valid = board.check_move(&mov)?;
//! board.apply_move(valid);
//! assert!(board.piece_at(Coord::new(4, 3)).is_some());
//! # Ok::<(), arbiter_engine::MoveError>(())
//! ```

mod board;
mod error;
mod game;
mod rules;

pub use board::{Board, BoardSnapshot, ValidMove};
pub use error::MoveError;
pub use game::{Game, GameSnapshot, GameStatus, MoveOutcome};
