//! Knight, king and pawn attacks.
//!
//! The set-wise functions apply a fixed offset pattern to every square of a
//! bitboard at once; `Bitboard::shift` drops anything that would wrap around
//! a board edge. The per-square tables are those same patterns evaluated on
//! single squares.

use crate::board::types::{Bitboard, Color, Square};

const KNIGHT_DELTAS: [(i32, i32); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const KING_DELTAS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Squares attacked by knights on any square of `knights`
#[must_use]
pub fn knight_attacks_set(knights: Bitboard) -> Bitboard {
    KNIGHT_DELTAS
        .iter()
        .fold(Bitboard::EMPTY, |acc, &(df, dr)| acc | knights.shift(df, dr))
}

/// Squares attacked by a king on any square of `kings`
#[must_use]
pub fn king_attacks_set(kings: Bitboard) -> Bitboard {
    KING_DELTAS
        .iter()
        .fold(Bitboard::EMPTY, |acc, &(df, dr)| acc | kings.shift(df, dr))
}

/// Diagonal-forward squares attacked by `color` pawns on `pawns`
#[must_use]
pub fn pawn_attacks_set(color: Color, pawns: Bitboard) -> Bitboard {
    let dr = color.pawn_direction();
    pawns.shift(1, dr) | pawns.shift(-1, dr)
}

pub(super) fn knight_table() -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    for sq in Square::all() {
        table[sq.index()] = knight_attacks_set(Bitboard::from_square(sq));
    }
    table
}

pub(super) fn king_table() -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    for sq in Square::all() {
        table[sq.index()] = king_attacks_set(Bitboard::from_square(sq));
    }
    table
}

pub(super) fn pawn_table() -> [[Bitboard; 64]; 2] {
    let mut table = [[Bitboard::EMPTY; 64]; 2];
    for color in Color::BOTH {
        for sq in Square::all() {
            table[color.index()][sq.index()] = pawn_attacks_set(color, Bitboard::from_square(sq));
        }
    }
    table
}
