//! Random piece placement for property tests and benchmarks.

use rand::seq::SliceRandom;
use rand::Rng;

use super::types::{Color, Piece, Square};
use super::Board;

/// Upper bound (inclusive) on how many of each piece a side receives
const PIECE_LIMITS: [(Piece, usize); 6] = [
    (Piece::King, 1),
    (Piece::Pawn, 8),
    (Piece::Knight, 2),
    (Piece::Bishop, 2),
    (Piece::Rook, 2),
    (Piece::Queen, 1),
];

/// A board with exactly one king per side and a random number of each other
/// piece, all on distinct squares.
///
/// Nothing else is guaranteed: pawns may sit on the back ranks and the side
/// not to move may be in check. No castling rights or en passant targets.
pub fn rand_board<R: Rng + ?Sized>(rng: &mut R) -> Board {
    let mut squares: Vec<Square> = Square::all().collect();
    squares.shuffle(rng);
    let mut free = squares.into_iter();

    let mut board = Board::empty();
    for (piece, limit) in PIECE_LIMITS {
        for color in Color::BOTH {
            let count = if piece == Piece::King {
                1
            } else {
                rng.gen_range(0..=limit)
            };
            // 2 kings + 16 pawns + 12 minor/major + 2 queens never exhaust 64 squares.
            for sq in free.by_ref().take(count) {
                board.put_piece(sq, color, piece);
            }
        }
    }
    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rand_board_piece_counts() {
        let mut rng = StdRng::seed_from_u64(0xC0FFEE);
        for _ in 0..200 {
            let board = rand_board(&mut rng);
            for color in Color::BOTH {
                assert_eq!(board.pieces(color, Piece::King).popcount(), 1);
                assert!(board.pieces(color, Piece::Pawn).popcount() <= 8);
                assert!(board.pieces(color, Piece::Knight).popcount() <= 2);
                assert!(board.pieces(color, Piece::Queen).popcount() <= 1);
            }
            let white = board.pieces_all(Color::White);
            let black = board.pieces_all(Color::Black);
            assert!(!white.intersects(black));
            assert_eq!(white | black, board.total_occupancy());
        }
    }

    #[test]
    fn test_rand_board_is_deterministic_for_seed() {
        let a = rand_board(&mut StdRng::seed_from_u64(9));
        let b = rand_board(&mut StdRng::seed_from_u64(9));
        assert_eq!(a.pieces, b.pieces);
    }
}
