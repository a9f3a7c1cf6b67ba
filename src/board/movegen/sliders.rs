use super::super::attack_tables::AttackTables;
use super::super::types::{MoveList, Piece};
use super::super::Board;
use super::{push_targets, MoveGenContext};

impl Board {
    /// Bishops, rooks and queens. A pinned slider keeps the part of its
    /// attack set that lies on the pin line, so it can still move toward or
    /// capture the pinner.
    pub(crate) fn generate_slider_moves(
        &self,
        tables: &AttackTables,
        ctx: &MoveGenContext,
        moves: &mut MoveList,
    ) {
        for piece in [Piece::Bishop, Piece::Rook, Piece::Queen] {
            for from in self.pieces(ctx.us, piece) {
                let attacks = match piece {
                    Piece::Bishop => tables.bishop_attacks(from, ctx.occupied),
                    Piece::Rook => tables.rook_attacks(from, ctx.occupied),
                    _ => tables.queen_attacks(from, ctx.occupied),
                };
                let targets = attacks & !ctx.own & ctx.evasion & ctx.pin_line(tables, from);
                push_targets(ctx, from, targets, moves);
            }
        }
    }
}
