//! Core types for the arbiter chess engine.
//!
//! This crate provides the board-agnostic values shared by the engine and
//! its consumers:
//! - [`Player`] for the two sides and their board orientation
//! - [`Coord`] for board coordinates
//! - [`Piece`] and [`PieceKind`] for pieces and their movement shapes
//! - [`Move`] and [`CastleSide`] for proposed actions
//! - [`Square`] for a single board cell
//!
//! Nothing here knows about the full 8x8 grid; legality lives in the
//! `arbiter-engine` crate.

mod coord;
mod mov;
mod piece;
mod player;
mod square;

pub use coord::Coord;
pub use mov::{CastleSide, Move};
pub use piece::{Piece, PieceKind};
pub use player::Player;
pub use square::{Shade, Square};
