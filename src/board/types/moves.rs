//! Move types and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::Square;

/// The kind of a move, stored in the top four bits of a [`Move`].
///
/// Values 6 and 7 are unused.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum MoveFlag {
    Quiet = 0,
    DoublePush = 1,
    ShortCastle = 2,
    LongCastle = 3,
    Capture = 4,
    EnPassant = 5,
    PromoKnight = 8,
    PromoBishop = 9,
    PromoRook = 10,
    PromoQueen = 11,
    PromoKnightCapture = 12,
    PromoBishopCapture = 13,
    PromoRookCapture = 14,
    PromoQueenCapture = 15,
}

impl MoveFlag {
    /// Decode a 4-bit flag nibble.
    ///
    /// # Panics
    /// Panics on the two unused values, which no generator produces.
    #[must_use]
    pub const fn from_bits(bits: u16) -> Self {
        match bits {
            0 => MoveFlag::Quiet,
            1 => MoveFlag::DoublePush,
            2 => MoveFlag::ShortCastle,
            3 => MoveFlag::LongCastle,
            4 => MoveFlag::Capture,
            5 => MoveFlag::EnPassant,
            8 => MoveFlag::PromoKnight,
            9 => MoveFlag::PromoBishop,
            10 => MoveFlag::PromoRook,
            11 => MoveFlag::PromoQueen,
            12 => MoveFlag::PromoKnightCapture,
            13 => MoveFlag::PromoBishopCapture,
            14 => MoveFlag::PromoRookCapture,
            15 => MoveFlag::PromoQueenCapture,
            _ => panic!("malformed move flag"),
        }
    }

    #[inline]
    #[must_use]
    pub const fn bits(self) -> u16 {
        self as u16
    }

    /// Promotion flag for `piece`, capturing or not
    ///
    /// # Panics
    /// Panics for pawns and kings.
    #[must_use]
    pub const fn promotion(piece: Piece, capture: bool) -> Self {
        match (piece, capture) {
            (Piece::Knight, false) => MoveFlag::PromoKnight,
            (Piece::Bishop, false) => MoveFlag::PromoBishop,
            (Piece::Rook, false) => MoveFlag::PromoRook,
            (Piece::Queen, false) => MoveFlag::PromoQueen,
            (Piece::Knight, true) => MoveFlag::PromoKnightCapture,
            (Piece::Bishop, true) => MoveFlag::PromoBishopCapture,
            (Piece::Rook, true) => MoveFlag::PromoRookCapture,
            (Piece::Queen, true) => MoveFlag::PromoQueenCapture,
            _ => panic!("pawns promote to knight, bishop, rook or queen"),
        }
    }

    /// Returns true if a piece is removed from the destination or, for en passant, beside it
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        matches!(
            self,
            MoveFlag::Capture
                | MoveFlag::EnPassant
                | MoveFlag::PromoKnightCapture
                | MoveFlag::PromoBishopCapture
                | MoveFlag::PromoRookCapture
                | MoveFlag::PromoQueenCapture
        )
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.bits() >= 8
    }

    #[inline]
    #[must_use]
    pub const fn is_castle(self) -> bool {
        matches!(self, MoveFlag::ShortCastle | MoveFlag::LongCastle)
    }

    /// Piece a pawn turns into
    #[must_use]
    pub const fn promotion_piece(self) -> Option<Piece> {
        match self {
            MoveFlag::PromoKnight | MoveFlag::PromoKnightCapture => Some(Piece::Knight),
            MoveFlag::PromoBishop | MoveFlag::PromoBishopCapture => Some(Piece::Bishop),
            MoveFlag::PromoRook | MoveFlag::PromoRookCapture => Some(Piece::Rook),
            MoveFlag::PromoQueen | MoveFlag::PromoQueenCapture => Some(Piece::Queen),
            _ => None,
        }
    }
}

/// Compact 16-bit move representation.
///
/// Encoding:
/// - bits 0-5:   from square (0-63)
/// - bits 6-11:  to square (0-63)
/// - bits 12-15: flags (move type)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move(u16);

impl Move {
    /// Create a null/empty move (used for initialization)
    #[inline]
    #[must_use]
    pub const fn null() -> Self {
        Move(0)
    }

    /// Pack a move
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square, flag: MoveFlag) -> Self {
        Move(from.0 as u16 | ((to.0 as u16) << 6) | (flag.bits() << 12))
    }

    /// Pack a move from raw square indices.
    ///
    /// # Panics
    /// Panics if either index is outside 0-63.
    #[must_use]
    pub const fn from_indices(from: usize, to: usize, flag: MoveFlag) -> Self {
        assert!(from < 64 && to < 64, "move square out of range");
        Move::new(Square(from as u8), Square(to as u8), flag)
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        Square((self.0 & 0x3F) as u8)
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        Square(((self.0 >> 6) & 0x3F) as u8)
    }

    /// Get the move kind
    #[inline]
    #[must_use]
    pub const fn flag(self) -> MoveFlag {
        MoveFlag::from_bits(self.0 >> 12)
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.flag().is_capture()
    }

    /// Returns true if this move is en passant
    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.flag(), MoveFlag::EnPassant)
    }

    /// Returns true if this move is castling (short or long)
    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        self.flag().is_castle()
    }

    /// Returns true if this move is a double pawn push
    #[inline]
    #[must_use]
    pub const fn is_double_push(self) -> bool {
        matches!(self.flag(), MoveFlag::DoublePush)
    }

    /// Returns true if this move is a pawn promotion
    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.flag().is_promotion()
    }

    /// Get the promotion piece, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        self.flag().promotion_piece()
    }

    /// Get the raw 16-bit value
    #[inline]
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// Create from raw 16-bit value
    #[inline]
    #[must_use]
    pub const fn from_u16(value: u16) -> Self {
        Move(value)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{} {:?})", self.from(), self.to(), self.flag())
    }
}

/// Long algebraic notation, e.g. `e2e4` or `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())?;
        if let Some(promo) = self.promotion() {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

pub const MAX_MOVES: usize = 256;

/// List of moves with fixed-size backing array.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    #[must_use]
    pub const fn new() -> Self {
        MoveList {
            moves: [Move::null(); MAX_MOVES],
            len: 0,
        }
    }

    /// Append a move.
    ///
    /// # Panics
    /// Panics when the list is full; no reachable position has that many moves.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        assert!(
            self.len < MAX_MOVES,
            "move list capacity of {MAX_MOVES} exceeded"
        );
        self.moves[self.len] = mv;
        self.len += 1;
    }

    pub(crate) fn clear(&mut self) {
        self.len = 0;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.as_slice().get(idx).copied()
    }

    /// Render each move as `FROM:`/`TO:`/`FLAG:` lines separated by a rule
    #[must_use]
    pub fn display_moves(&self) -> String {
        let mut out = String::new();
        for mv in self {
            out.push_str(&format!("FROM: {}\n", mv.from()));
            out.push_str(&format!("TO: {}\n", mv.to()));
            out.push_str(&format!("FLAG: {}\n", mv.flag().bits()));
            out.push_str("------------\n");
        }
        out
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

/// Lists compare by their live prefix only.
impl PartialEq for MoveList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for MoveList {}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}
