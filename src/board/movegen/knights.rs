use super::super::attack_tables::AttackTables;
use super::super::types::{MoveList, Piece};
use super::super::Board;
use super::{push_targets, MoveGenContext};

impl Board {
    pub(crate) fn generate_knight_moves(
        &self,
        tables: &AttackTables,
        ctx: &MoveGenContext,
        moves: &mut MoveList,
    ) {
        // A pinned knight can never stay on its pin line.
        for from in self.pieces(ctx.us, Piece::Knight) {
            if ctx.is_pinned(from) {
                continue;
            }
            let targets = tables.knight_attacks(from) & !ctx.own & ctx.evasion;
            push_targets(ctx, from, targets, moves);
        }
    }
}
