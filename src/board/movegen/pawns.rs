use super::super::attack_tables::AttackTables;
use super::super::types::{Bitboard, Move, MoveFlag, MoveList, Piece, Square};
use super::super::Board;
use super::MoveGenContext;

const PROMOTION_PIECES: [Piece; 4] = [Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen];

fn push_pawn_move(
    ctx: &MoveGenContext,
    from: Square,
    to: Square,
    capture: bool,
    moves: &mut MoveList,
) {
    if ctx.us.promotion_rank().contains(to) {
        for piece in PROMOTION_PIECES {
            moves.push(Move::new(from, to, MoveFlag::promotion(piece, capture)));
        }
    } else if capture {
        moves.push(Move::new(from, to, MoveFlag::Capture));
    } else {
        moves.push(Move::new(from, to, MoveFlag::Quiet));
    }
}

impl Board {
    pub(crate) fn generate_pawn_moves(
        &self,
        tables: &AttackTables,
        ctx: &MoveGenContext,
        moves: &mut MoveList,
    ) {
        let dir = ctx.us.pawn_direction() as isize;
        let ep = self.en_passant(ctx.us);

        for from in self.pieces(ctx.us, Piece::Pawn) {
            let allowed = ctx.pin_line(tables, from) & ctx.evasion;

            if let Some(one) = from.offset(0, dir) {
                if !ctx.occupied.contains(one) {
                    if allowed.contains(one) {
                        push_pawn_move(ctx, from, one, false, moves);
                    }
                    if ctx.us.pawn_start_rank().contains(from) {
                        if let Some(two) = one.offset(0, dir) {
                            if !ctx.occupied.contains(two) && allowed.contains(two) {
                                moves.push(Move::new(from, two, MoveFlag::DoublePush));
                            }
                        }
                    }
                }
            }

            let attacks = tables.pawn_attacks(ctx.us, from);
            for to in attacks & ctx.enemy & allowed {
                push_pawn_move(ctx, from, to, true, moves);
            }

            if attacks.intersects(ep) {
                let to = ep.lsb();
                if self.en_passant_is_legal(tables, ctx, from, to) {
                    moves.push(Move::new(from, to, MoveFlag::EnPassant));
                }
            }
        }
    }

    /// An en passant capture removes two pawns from one rank at once, which
    /// can uncover the king in ways the pin masks do not describe. Replay the
    /// capture on the occupancy and look for slider attacks on the king.
    fn en_passant_is_legal(
        &self,
        tables: &AttackTables,
        ctx: &MoveGenContext,
        from: Square,
        to: Square,
    ) -> bool {
        let dir = ctx.us.pawn_direction() as isize;
        let Some(captured) = to.offset(0, -dir) else {
            return false;
        };
        if !self.pieces(!ctx.us, Piece::Pawn).contains(captured) {
            return false;
        }
        if !ctx.evasion.contains(to) && !ctx.checkers.contains(captured) {
            return false;
        }
        let Some(king) = ctx.king else {
            return true;
        };

        let occupancy = (ctx.occupied
            & !Bitboard::from_square(from)
            & !Bitboard::from_square(captured))
            | Bitboard::from_square(to);
        let them = !ctx.us;
        let queens = self.pieces(them, Piece::Queen);
        let orthogonal = self.pieces(them, Piece::Rook) | queens;
        let diagonal = self.pieces(them, Piece::Bishop) | queens;
        (tables.rook_attacks(king, occupancy) & orthogonal).is_empty()
            && (tables.bishop_attacks(king, occupancy) & diagonal).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::board::attack_tables::AttackTables;
    use crate::board::types::{Bitboard, Color, Move, MoveFlag, Piece, Square};
    use crate::board::Board;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn generate(board: &mut Board, color: Color) -> Vec<Move> {
        board.update_board(AttackTables::shared(), color);
        board.legal_moves().iter().copied().collect()
    }

    fn kings(board: &mut Board) {
        board.put_piece(sq("h1"), Color::White, Piece::King);
        board.put_piece(sq("h8"), Color::Black, Piece::King);
    }

    #[test]
    fn test_single_and_double_push() {
        let mut board = Board::empty();
        kings(&mut board);
        board.put_piece(sq("c2"), Color::White, Piece::Pawn);
        let moves: Vec<_> = generate(&mut board, Color::White)
            .into_iter()
            .filter(|m| m.from() == sq("c2"))
            .collect();
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&Move::new(sq("c2"), sq("c3"), MoveFlag::Quiet)));
        assert!(moves.contains(&Move::new(sq("c2"), sq("c4"), MoveFlag::DoublePush)));
    }

    #[test]
    fn test_blocked_pawn_cannot_jump() {
        let mut board = Board::empty();
        kings(&mut board);
        board.put_piece(sq("c2"), Color::White, Piece::Pawn);
        board.put_piece(sq("c3"), Color::Black, Piece::Knight);
        let moves = generate(&mut board, Color::White);
        assert!(moves.iter().all(|m| m.from() != sq("c2")));
    }

    #[test]
    fn test_black_pawns_move_down() {
        let mut board = Board::empty();
        kings(&mut board);
        board.put_piece(sq("d7"), Color::Black, Piece::Pawn);
        board.put_piece(sq("e6"), Color::White, Piece::Knight);
        let moves: Vec<_> = generate(&mut board, Color::Black)
            .into_iter()
            .filter(|m| m.from() == sq("d7"))
            .collect();
        assert_eq!(moves.len(), 3);
        assert!(moves.contains(&Move::new(sq("d7"), sq("e6"), MoveFlag::Capture)));
        assert!(moves.contains(&Move::new(sq("d7"), sq("d5"), MoveFlag::DoublePush)));
    }

    #[test]
    fn test_promotion_generates_four_moves() {
        let mut board = Board::empty();
        kings(&mut board);
        board.put_piece(sq("b7"), Color::White, Piece::Pawn);
        let moves: Vec<_> = generate(&mut board, Color::White)
            .into_iter()
            .filter(|m| m.from() == sq("b7"))
            .collect();
        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|m| m.is_promotion() && !m.is_capture()));
        let mut pieces: Vec<Piece> = moves.iter().filter_map(|m| m.promotion()).collect();
        pieces.dedup();
        assert_eq!(pieces.len(), 4);
    }

    #[test]
    fn test_capture_promotion_replaces_plain_capture() {
        let mut board = Board::empty();
        kings(&mut board);
        board.put_piece(sq("b7"), Color::White, Piece::Pawn);
        board.put_piece(sq("b8"), Color::Black, Piece::Rook);
        board.put_piece(sq("a8"), Color::Black, Piece::Knight);
        let moves: Vec<_> = generate(&mut board, Color::White)
            .into_iter()
            .filter(|m| m.from() == sq("b7"))
            .collect();
        assert_eq!(moves.len(), 4);
        assert!(moves
            .iter()
            .all(|m| m.to() == sq("a8") && m.flag().is_capture() && m.is_promotion()));
    }

    #[test]
    fn test_en_passant_offered() {
        let mut board = Board::empty();
        kings(&mut board);
        board.put_piece(sq("d5"), Color::White, Piece::Pawn);
        board.put_piece(sq("e5"), Color::Black, Piece::Pawn);
        board.en_passant[Color::White.index()] = Bitboard::from_square(sq("e6"));
        let moves = generate(&mut board, Color::White);
        assert!(moves.contains(&Move::new(sq("d5"), sq("e6"), MoveFlag::EnPassant)));
    }

    #[test]
    fn test_en_passant_discovered_check_is_rejected() {
        // King and rook share the fifth rank with both pawns between them.
        let mut board = Board::empty();
        board.put_piece(sq("a5"), Color::White, Piece::King);
        board.put_piece(sq("h8"), Color::Black, Piece::King);
        board.put_piece(sq("d5"), Color::White, Piece::Pawn);
        board.put_piece(sq("e5"), Color::Black, Piece::Pawn);
        board.put_piece(sq("h5"), Color::Black, Piece::Rook);
        board.en_passant[Color::White.index()] = Bitboard::from_square(sq("e6"));
        let moves = generate(&mut board, Color::White);
        assert!(moves.iter().all(|m| !m.is_en_passant()));
        assert!(moves.contains(&Move::new(sq("d5"), sq("d6"), MoveFlag::Quiet)));
    }

    #[test]
    fn test_en_passant_resolves_pawn_check() {
        let mut board = Board::empty();
        board.put_piece(sq("f4"), Color::White, Piece::King);
        board.put_piece(sq("h8"), Color::Black, Piece::King);
        board.put_piece(sq("d5"), Color::White, Piece::Pawn);
        board.put_piece(sq("e5"), Color::Black, Piece::Pawn);
        board.en_passant[Color::White.index()] = Bitboard::from_square(sq("e6"));
        let moves = generate(&mut board, Color::White);
        assert!(board.check(Color::White));
        assert!(moves.contains(&Move::new(sq("d5"), sq("e6"), MoveFlag::EnPassant)));
        // The pawn push does nothing about the check.
        assert!(!moves.contains(&Move::new(sq("d5"), sq("d6"), MoveFlag::Quiet)));
    }

    #[test]
    fn test_pinned_pawn_rules() {
        let mut board = Board::empty();
        board.put_piece(sq("e1"), Color::White, Piece::King);
        board.put_piece(sq("h8"), Color::Black, Piece::King);
        // Vertically pinned pawn may push but not capture.
        board.put_piece(sq("e2"), Color::White, Piece::Pawn);
        board.put_piece(sq("e7"), Color::Black, Piece::Rook);
        board.put_piece(sq("d3"), Color::Black, Piece::Bishop);
        // Diagonally pinned pawn may only capture its pinner.
        board.put_piece(sq("f2"), Color::White, Piece::Pawn);
        board.put_piece(sq("g3"), Color::Black, Piece::Bishop);
        let moves = generate(&mut board, Color::White);

        assert!(moves.contains(&Move::new(sq("e2"), sq("e3"), MoveFlag::Quiet)));
        assert!(moves.contains(&Move::new(sq("e2"), sq("e4"), MoveFlag::DoublePush)));
        assert!(!moves.contains(&Move::new(sq("e2"), sq("d3"), MoveFlag::Capture)));

        let f2: Vec<_> = moves.iter().filter(|m| m.from() == sq("f2")).collect();
        assert_eq!(f2, vec![&Move::new(sq("f2"), sq("g3"), MoveFlag::Capture)]);
    }
}
