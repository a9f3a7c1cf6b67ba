//! Castling rights type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

/// Which rook the king castles with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    /// Toward the h-file (O-O)
    Short,
    /// Toward the a-file (O-O-O)
    Long,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Short, CastleSide::Long];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            CastleSide::Short => 0,
            CastleSide::Long => 1,
        }
    }

    /// Home square of the rook for this side
    #[must_use]
    pub const fn rook_home(self, color: Color) -> Square {
        match (color, self) {
            (Color::White, CastleSide::Short) => Square::H1,
            (Color::White, CastleSide::Long) => Square::A1,
            (Color::Black, CastleSide::Short) => Square::H8,
            (Color::Black, CastleSide::Long) => Square::A8,
        }
    }

    /// Square the rook lands on after castling
    #[must_use]
    pub const fn rook_target(self, color: Color) -> Square {
        match (color, self) {
            (Color::White, CastleSide::Short) => Square::F1,
            (Color::White, CastleSide::Long) => Square::D1,
            (Color::Black, CastleSide::Short) => Square::F8,
            (Color::Black, CastleSide::Long) => Square::D8,
        }
    }

    /// Square the king lands on after castling
    #[must_use]
    pub const fn king_target(self, color: Color) -> Square {
        match (color, self) {
            (Color::White, CastleSide::Short) => Square::G1,
            (Color::White, CastleSide::Long) => Square::C1,
            (Color::Black, CastleSide::Short) => Square::G8,
            (Color::Black, CastleSide::Long) => Square::C8,
        }
    }
}

/// King home square for a color
#[must_use]
pub const fn king_home(color: Color) -> Square {
    match color {
        Color::White => Square::E1,
        Color::Black => Square::E8,
    }
}

/// Castling rights: one flag per color and side.
///
/// Rights can only be removed. A board never grants a right back once the
/// king or the rook has left its home square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights([[bool; 2]; 2]);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights([[false; 2]; 2])
    }

    /// All castling rights (both sides can castle short and long)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights([[true; 2]; 2])
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0[color.index()][side.index()]
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, side: CastleSide) {
        self.0[color.index()][side.index()] = false;
    }

    /// Remove both rights of a color
    #[inline]
    pub fn remove_all(&mut self, color: Color) {
        self.0[color.index()] = [false; 2];
    }

    /// Drop whatever right depends on a piece standing on `sq`.
    pub(crate) fn revoke_for_square(&mut self, sq: Square) {
        for color in Color::BOTH {
            if sq == king_home(color) {
                self.remove_all(color);
            }
            for side in CastleSide::BOTH {
                if sq == side.rook_home(color) {
                    self.remove(color, side);
                }
            }
        }
    }

    /// Build from individual flags; used by FEN parsing.
    pub(crate) fn grant(&mut self, color: Color, side: CastleSide) {
        self.0[color.index()][side.index()] = true;
    }
}
