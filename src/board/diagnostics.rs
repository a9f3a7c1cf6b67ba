//! Text rendering of boards and bitboards for debugging.

use std::fmt;

use super::types::{Bitboard, CastleSide, Color, Piece, Square};
use super::Board;

/// Render a labelled bitboard: a hex header line followed by a 0/1 grid,
/// rank 8 on top.
#[must_use]
pub fn draw_bitboard(label: &str, bb: Bitboard) -> String {
    format!("{label} {:#018x}\n{bb}\n", bb.0)
}

/// Rank 8 on top, uppercase for White, `.` for empty squares.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let sq = Square::new(rank, file);
                let c = match (self.piece_on(sq), self.color_on(sq)) {
                    (Some(piece), Some(color)) => piece.to_fen_char(color),
                    _ => '.',
                };
                write!(f, "{c} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

impl Board {
    /// Every piece bitboard in hex plus castling and en passant state.
    #[must_use]
    pub fn dump_bitboards(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("All occupied: {:#018x}\n", self.occupied.0));
        for color in Color::BOTH {
            for piece in Piece::ALL {
                let bb = self.pieces(color, piece).0;
                out.push_str(&format!("{color} {}: {bb:#018x}\n", piece.to_fen_char(color)));
            }
            out.push_str(&format!("{color} attacks: {:#018x}\n", self.attacks_all(color).0));
            let ep = self.en_passant(color);
            if ep.is_nonempty() {
                out.push_str(&format!("{color} en passant: {}\n", ep.lsb()));
            }
        }
        let mut castling = String::new();
        for color in Color::BOTH {
            for side in CastleSide::BOTH {
                if self.castling_rights.has(color, side) {
                    castling.push(match (color, side) {
                        (Color::White, CastleSide::Short) => 'K',
                        (Color::White, CastleSide::Long) => 'Q',
                        (Color::Black, CastleSide::Short) => 'k',
                        (Color::Black, CastleSide::Long) => 'q',
                    });
                }
            }
        }
        let castling = if castling.is_empty() { "-" } else { castling.as_str() };
        out.push_str(&format!("Castling: {castling}\n"));
        out.push_str("------------------------------------\n");
        out
    }
}
