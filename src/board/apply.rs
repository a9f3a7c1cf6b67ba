use super::types::{Bitboard, CastleSide, Color, Move, MoveFlag, Piece};
use super::Board;

impl Board {
    /// Play `mv` for `color`.
    ///
    /// `mv` must come from the legal moves of the last `update_board(color)`;
    /// nothing is validated here. Attacks, pins and legal moves are stale
    /// afterwards until `update_board` runs again.
    ///
    /// # Panics
    /// Panics if the origin square is empty.
    pub fn apply_move(&mut self, color: Color, mv: Move) {
        let from = mv.from();
        let to = mv.to();
        let flag = mv.flag();
        let piece = self.piece_lookup[from.index()]
            .unwrap_or_else(|| panic!("apply_move: no piece on {from} for {mv:?}"));

        self.castling_rights.revoke_for_square(from);
        self.castling_rights.revoke_for_square(to);

        // An en passant chance lasts exactly one reply.
        self.en_passant = [Bitboard::EMPTY; 2];

        let dir = color.pawn_direction() as isize;
        match flag {
            MoveFlag::EnPassant => {
                if let Some(captured) = to.offset(0, -dir) {
                    self.remove_piece(captured);
                }
            }
            MoveFlag::ShortCastle | MoveFlag::LongCastle => {
                let side = if flag == MoveFlag::ShortCastle {
                    CastleSide::Short
                } else {
                    CastleSide::Long
                };
                self.remove_piece(side.rook_home(color));
                self.put_piece(side.rook_target(color), color, Piece::Rook);
            }
            _ if flag.is_capture() => {
                self.remove_piece(to);
            }
            _ => {}
        }

        self.remove_piece(from);
        self.put_piece(to, color, mv.promotion().unwrap_or(piece));

        if flag == MoveFlag::DoublePush {
            if let Some(behind) = from.offset(0, dir) {
                self.en_passant[(!color).index()] = Bitboard::from_square(behind);
            }
        }
    }
}
