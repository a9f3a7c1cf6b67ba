//! Attack generation for one color.

use super::attack_tables::{king_attacks_set, knight_attacks_set, pawn_attacks_set, AttackTables};
use super::types::{Bitboard, Color, Piece, Square};

/// Attack bitboard of each piece type of `color`, indexed by `Piece::index`.
///
/// Pawn entries hold diagonal captures only; pushes are not attacks.
#[must_use]
pub fn generate_attacks(
    tables: &AttackTables,
    color: Color,
    pieces: &[Bitboard; 6],
    occupancy: Bitboard,
) -> [Bitboard; 6] {
    let mut attacks = [Bitboard::EMPTY; 6];
    attacks[Piece::Pawn.index()] = pawn_attacks_set(color, pieces[Piece::Pawn.index()]);
    attacks[Piece::Knight.index()] = knight_attacks_set(pieces[Piece::Knight.index()]);
    attacks[Piece::King.index()] = king_attacks_set(pieces[Piece::King.index()]);

    for sq in pieces[Piece::Bishop.index()] {
        attacks[Piece::Bishop.index()] |= tables.bishop_attacks(sq, occupancy);
    }
    for sq in pieces[Piece::Rook.index()] {
        attacks[Piece::Rook.index()] |= tables.rook_attacks(sq, occupancy);
    }
    for sq in pieces[Piece::Queen.index()] {
        attacks[Piece::Queen.index()] |= tables.queen_attacks(sq, occupancy);
    }
    attacks
}

/// Union of the per-type sets
#[must_use]
pub fn union(attacks: &[Bitboard; 6]) -> Bitboard {
    attacks.iter().fold(Bitboard::EMPTY, |acc, &bb| acc | bb)
}

/// Pieces of `color` (given as `pieces`) that attack `sq` under `occupancy`.
#[must_use]
pub fn attackers_of(
    tables: &AttackTables,
    sq: Square,
    color: Color,
    pieces: &[Bitboard; 6],
    occupancy: Bitboard,
) -> Bitboard {
    let diagonal = pieces[Piece::Bishop.index()] | pieces[Piece::Queen.index()];
    let orthogonal = pieces[Piece::Rook.index()] | pieces[Piece::Queen.index()];

    // A `color` pawn attacks sq exactly when an opposite pawn on sq would attack it back.
    (tables.pawn_attacks(!color, sq) & pieces[Piece::Pawn.index()])
        | (tables.knight_attacks(sq) & pieces[Piece::Knight.index()])
        | (tables.king_attacks(sq) & pieces[Piece::King.index()])
        | (tables.bishop_attacks(sq, occupancy) & diagonal)
        | (tables.rook_attacks(sq, occupancy) & orthogonal)
}
