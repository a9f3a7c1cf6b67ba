//! Bitboard chess position engine.
//!
//! Magic-hash slider tables, pin detection and fully legal move generation
//! over a bitboard position.
//!
//! # Example
//! ```
//! use bitboard_chess::board::{AttackTables, Board, Color};
//!
//! let tables = AttackTables::shared();
//! let mut board = Board::new();
//! board.update_board(tables, Color::White);
//! println!("Starting position has {} legal moves", board.legal_moves().len());
//! assert_eq!(board.legal_moves().len(), 20);
//! ```

mod apply;
pub mod attack_tables;
pub mod attacks;
mod diagnostics;
mod error;
mod fen;
mod movegen;
mod perft;
pub mod pins;
pub mod prelude;
mod random;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use attack_tables::{AttackTables, TableOptions};
pub use diagnostics::draw_bitboard;
pub use error::{FenError, MoveParseError, SquareError};
pub use random::rand_board;
pub use state::{init_board, Board};
pub use types::{
    king_home, Axis, Bitboard, BitboardIter, CastleSide, CastlingRights, Color, Direction, Move,
    MoveFlag, MoveList, Piece, Pins, Square, MAX_MOVES,
};
