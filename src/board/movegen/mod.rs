//! Legal move generation.
//!
//! Moves are generated fully legal: pinned pieces stay on their pin line,
//! check evasions are enforced through a target mask and the king never
//! steps onto an attacked square.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attack_tables::AttackTables;
use super::attacks::{generate_attacks, union};
use super::types::{Bitboard, Color, Move, MoveFlag, MoveList, Piece, Pins, Square};
use super::Board;

/// Per-call view of the position shared by the piece generators.
pub(crate) struct MoveGenContext {
    pub(crate) us: Color,
    pub(crate) own: Bitboard,
    pub(crate) enemy: Bitboard,
    pub(crate) occupied: Bitboard,
    pub(crate) king: Option<Square>,
    pub(crate) checkers: Bitboard,
    /// Squares a non-king move must land on: everywhere out of check, the
    /// checker or a blocking square under single check, nowhere under
    /// double check.
    pub(crate) evasion: Bitboard,
    pub(crate) pins: Pins,
}

impl MoveGenContext {
    /// Squares a piece on `from` may move to without breaking its pin
    pub(crate) fn pin_line(&self, tables: &AttackTables, from: Square) -> Bitboard {
        match (self.king, self.pins.axis_of(Bitboard::from_square(from))) {
            (Some(king), Some(axis)) => tables.line(king, axis),
            _ => Bitboard::ALL,
        }
    }

    pub(crate) fn is_pinned(&self, from: Square) -> bool {
        self.pins.all().contains(from)
    }
}

/// Push one move per target, flagged as capture when the target holds an enemy piece.
pub(crate) fn push_targets(
    ctx: &MoveGenContext,
    from: Square,
    targets: Bitboard,
    moves: &mut MoveList,
) {
    for to in targets {
        let flag = if ctx.enemy.contains(to) {
            MoveFlag::Capture
        } else {
            MoveFlag::Quiet
        };
        moves.push(Move::new(from, to, flag));
    }
}

impl Board {
    fn movegen_context(&self, tables: &AttackTables, us: Color) -> MoveGenContext {
        let them = !us;
        let king = self.king_square(us);
        let checkers = match king {
            Some(k) => self.attackers_to(tables, k, them),
            None => Bitboard::EMPTY,
        };
        let evasion = match (king, checkers.popcount()) {
            (_, 0) => Bitboard::ALL,
            (Some(k), 1) => checkers | tables.between(k, checkers.lsb()),
            _ => Bitboard::EMPTY,
        };
        MoveGenContext {
            us,
            own: self.pieces_all(us),
            enemy: self.pieces_all(them),
            occupied: self.occupied,
            king,
            checkers,
            evasion,
            pins: self.pins[us.index()],
        }
    }

    /// Squares the enemy attacks once our king no longer blocks its rays.
    pub(crate) fn king_danger(&self, tables: &AttackTables, us: Color) -> Bitboard {
        let them = !us;
        let occupancy = self.occupied & !self.pieces(us, Piece::King);
        union(&generate_attacks(
            tables,
            them,
            &self.pieces[them.index()],
            occupancy,
        ))
    }

    /// Fill `moves` with every legal move of `us`. Expects `pins[us]` to be current.
    pub(crate) fn generate_legal_moves(
        &self,
        tables: &AttackTables,
        us: Color,
        moves: &mut MoveList,
    ) {
        moves.clear();
        let ctx = self.movegen_context(tables, us);

        self.generate_king_moves(tables, &ctx, moves);
        if ctx.evasion.is_empty() {
            return;
        }
        self.generate_pawn_moves(tables, &ctx, moves);
        self.generate_knight_moves(tables, &ctx, moves);
        self.generate_slider_moves(tables, &ctx, moves);
    }
}
