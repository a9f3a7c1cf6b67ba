//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use bitboard_chess::board::prelude::*;
//! ```

pub use super::{
    init_board, AttackTables, Bitboard, Board, CastlingRights, Color, FenError, Move, MoveFlag,
    MoveList, MoveParseError, Piece, Square, SquareError,
};
