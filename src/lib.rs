/// Forward to the `log` crate when the `logging` feature is on; expands to
/// nothing otherwise.
macro_rules! engine_log {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "logging")]
        {
            log::$level!($($arg)+);
        }
    };
}

pub mod board;

pub use board::{AttackTables, Board, Color, Move, Piece, Square};
