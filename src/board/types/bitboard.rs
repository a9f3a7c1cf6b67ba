//! Bitboard type and operations.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// A 64-bit set of squares. Bit `i` stands for square `i` (a1 = 0, h8 = 63).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bitboard(pub u64);

// File masks (columns)
impl Bitboard {
    pub const FILE_A: Bitboard = Bitboard(0x0101010101010101);
    pub const FILE_B: Bitboard = Bitboard(0x0202020202020202);
    pub const FILE_C: Bitboard = Bitboard(0x0404040404040404);
    pub const FILE_D: Bitboard = Bitboard(0x0808080808080808);
    pub const FILE_E: Bitboard = Bitboard(0x1010101010101010);
    pub const FILE_F: Bitboard = Bitboard(0x2020202020202020);
    pub const FILE_G: Bitboard = Bitboard(0x4040404040404040);
    pub const FILE_H: Bitboard = Bitboard(0x8080808080808080);

    pub const RANK_1: Bitboard = Bitboard(0x00000000000000FF);
    pub const RANK_2: Bitboard = Bitboard(0x000000000000FF00);
    pub const RANK_3: Bitboard = Bitboard(0x0000000000FF0000);
    pub const RANK_4: Bitboard = Bitboard(0x00000000FF000000);
    pub const RANK_5: Bitboard = Bitboard(0x000000FF00000000);
    pub const RANK_6: Bitboard = Bitboard(0x0000FF0000000000);
    pub const RANK_7: Bitboard = Bitboard(0x00FF000000000000);
    pub const RANK_8: Bitboard = Bitboard(0xFF00000000000000);

    pub const EMPTY: Bitboard = Bitboard(0);
    pub const ALL: Bitboard = Bitboard(!0);
}

impl Bitboard {
    /// Create a bitboard with a single square set
    #[inline]
    #[must_use]
    pub const fn from_square(sq: Square) -> Self {
        Bitboard(1 << sq.0)
    }

    /// Returns an iterator over the squares set in this bitboard, lowest first
    #[inline]
    #[must_use]
    pub fn iter(self) -> BitboardIter {
        BitboardIter(self)
    }

    /// Returns true if the bitboard is empty
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if at least one square is set
    #[inline]
    #[must_use]
    pub const fn is_nonempty(self) -> bool {
        self.0 != 0
    }

    /// Returns the number of set bits (population count)
    #[inline]
    #[must_use]
    pub const fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if exactly one bit is set
    #[inline]
    #[must_use]
    pub const fn is_single(self) -> bool {
        self.0.is_power_of_two()
    }

    /// Returns true if the given square is set
    #[inline]
    #[must_use]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 & (1 << sq.0)) != 0
    }

    /// Returns true if the two sets share a square
    #[inline]
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Lowest set square. The bitboard must not be empty.
    #[inline]
    #[must_use]
    pub const fn lsb(self) -> Square {
        debug_assert!(self.0 != 0);
        Square(self.0.trailing_zeros() as u8)
    }

    /// Highest set square. The bitboard must not be empty.
    #[inline]
    #[must_use]
    pub const fn msb(self) -> Square {
        debug_assert!(self.0 != 0);
        Square(63 - self.0.leading_zeros() as u8)
    }

    /// Remove and return the lowest set square
    #[inline]
    pub fn pop_lsb(&mut self) -> Square {
        let sq = self.lsb();
        self.0 &= self.0 - 1;
        sq
    }

    /// Set a square
    #[inline]
    pub fn set(&mut self, sq: Square) {
        self.0 |= 1 << sq.0;
    }

    /// Shift by a file/rank offset. Squares that would leave the board are
    /// dropped instead of wrapping onto the opposite edge.
    #[must_use]
    pub const fn shift(self, files: i32, ranks: i32) -> Self {
        let mut bits = self.0;
        // Clear the source files that would wrap.
        let mut f = 0;
        while f < files {
            bits &= !(Self::FILE_H.0 >> f);
            f += 1;
        }
        while f > files {
            bits &= !(Self::FILE_A.0 << (-f));
            f -= 1;
        }
        let delta = files + 8 * ranks;
        if delta >= 0 {
            Bitboard(bits << delta)
        } else {
            Bitboard(bits >> (-delta))
        }
    }

    /// Get the file mask for a given file index (0-7)
    #[inline]
    #[must_use]
    pub const fn file_mask(file: usize) -> Self {
        Bitboard(Self::FILE_A.0 << file)
    }

    /// Get the rank mask for a given rank index (0-7)
    #[inline]
    #[must_use]
    pub const fn rank_mask(rank: usize) -> Self {
        Bitboard(Self::RANK_1.0 << (rank * 8))
    }
}

impl BitAnd for Bitboard {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitOr for Bitboard {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitXor for Bitboard {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl Not for Bitboard {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Bitboard(!self.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitXorAssign for Bitboard {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl From<Square> for Bitboard {
    fn from(sq: Square) -> Self {
        Bitboard::from_square(sq)
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Bitboard::EMPTY, |acc, sq| acc | Bitboard::from_square(sq))
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIter;

    fn into_iter(self) -> Self::IntoIter {
        BitboardIter(self)
    }
}

/// Renders the set as an 8x8 grid of `0`/`1`, rank 8 on top.
impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let bit = (self.0 >> (rank * 8 + file)) & 1;
                write!(f, "{bit} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.pop_lsb())
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.popcount() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitboardIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_drops_wrapping_squares() {
        let h4 = Bitboard::from_square(Square::new(3, 7));
        assert!(h4.shift(1, 0).is_empty());
        assert!(h4.shift(2, 1).is_empty());
        assert_eq!(h4.shift(-1, 0), Bitboard::from_square(Square::new(3, 6)));

        let a4 = Bitboard::from_square(Square::new(3, 0));
        assert!(a4.shift(-1, 1).is_empty());
        assert!(a4.shift(-2, -1).is_empty());
        assert_eq!(a4.shift(1, 2), Bitboard::from_square(Square::new(5, 1)));
    }

    #[test]
    fn test_file_and_rank_masks() {
        assert_eq!(Bitboard::file_mask(0), Bitboard::FILE_A);
        assert_eq!(Bitboard::file_mask(7), Bitboard::FILE_H);
        assert_eq!(Bitboard::rank_mask(0), Bitboard::RANK_1);
        assert_eq!(Bitboard::rank_mask(3), Bitboard::RANK_4);
        let e4 = Square::new(3, 4);
        assert_eq!(
            Bitboard::file_mask(e4.file()) & Bitboard::rank_mask(e4.rank()),
            Bitboard::from_square(e4)
        );
    }

    #[test]
    fn test_shift_off_top_and_bottom() {
        assert!(Bitboard::RANK_8.shift(0, 1).is_empty());
        assert!(Bitboard::RANK_1.shift(0, -1).is_empty());
        assert_eq!(Bitboard::RANK_2.shift(0, 2), Bitboard::RANK_4);
    }

    #[test]
    fn test_lsb_msb_pop() {
        let mut bb = Bitboard(0b1010_0000);
        assert_eq!(bb.lsb(), Square(5));
        assert_eq!(bb.msb(), Square(7));
        assert_eq!(bb.pop_lsb(), Square(5));
        assert_eq!(bb, Bitboard(0b1000_0000));
    }

    #[test]
    fn test_iter_collects_back() {
        let bb = Bitboard::FILE_C | Bitboard::RANK_5;
        let rebuilt: Bitboard = bb.iter().collect();
        assert_eq!(rebuilt, bb);
        assert_eq!(bb.iter().len(), 15);
    }

    #[test]
    fn test_display_grid() {
        let text = Bitboard::from_square(Square::new(0, 0)).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[7], "1 1 0 0 0 0 0 0 0 ");
        assert_eq!(lines[8], "  a b c d e f g h");
    }
}
