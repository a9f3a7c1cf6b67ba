//! Core chess types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - compact board square index (u8)
//! - `Bitboard` - 64-bit set of squares
//! - `Move`, `MoveFlag` and `MoveList` - packed move representation
//! - `CastlingRights` - castling state
//! - `Axis`, `Direction` and `Pins` - ray geometry for pin detection

mod bitboard;
mod castling;
mod geometry;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use castling::{king_home, CastleSide, CastlingRights};
pub use geometry::{Axis, Direction, Pins};
pub use moves::{Move, MoveFlag, MoveList, MAX_MOVES};
pub use piece::{Color, Piece};
pub use square::Square;
