use super::super::attack_tables::AttackTables;
use super::super::types::{king_home, Bitboard, CastleSide, Move, MoveFlag, MoveList, Piece};
use super::super::Board;
use super::{push_targets, MoveGenContext};

impl Board {
    pub(crate) fn generate_king_moves(
        &self,
        tables: &AttackTables,
        ctx: &MoveGenContext,
        moves: &mut MoveList,
    ) {
        let Some(from) = ctx.king else {
            return;
        };
        let danger = self.king_danger(tables, ctx.us);
        let targets = tables.king_attacks(from) & !ctx.own & !danger;
        push_targets(ctx, from, targets, moves);

        if from != king_home(ctx.us) || ctx.checkers.is_nonempty() {
            return;
        }
        for side in CastleSide::BOTH {
            if !self.castling_rights.has(ctx.us, side) {
                continue;
            }
            let rook_home = side.rook_home(ctx.us);
            if !self.pieces(ctx.us, Piece::Rook).contains(rook_home) {
                continue;
            }
            if tables.between(from, rook_home).intersects(ctx.occupied) {
                continue;
            }
            let king_to = side.king_target(ctx.us);
            let path = tables.between(from, king_to) | Bitboard::from_square(king_to);
            if path.intersects(danger) {
                continue;
            }
            let flag = match side {
                CastleSide::Short => MoveFlag::ShortCastle,
                CastleSide::Long => MoveFlag::LongCastle,
            };
            moves.push(Move::new(from, king_to, flag));
        }
    }
}
