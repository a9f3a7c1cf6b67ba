//! Edge case tests for special chess positions and moves.

use crate::board::{AttackTables, Axis, Bitboard, Board, CastleSide, Color, MoveFlag, Piece, Square};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn play(board: &mut Board, color: Color, moves: &[&str]) -> Color {
    let tables = AttackTables::shared();
    let mut side = color;
    for notation in moves {
        board.update_board(tables, side);
        let mv = board
            .find_move(notation)
            .unwrap_or_else(|e| panic!("{notation}: {e}"));
        board.apply_move(side, mv);
        side = !side;
    }
    board.update_board(tables, side);
    side
}

#[test]
fn test_fools_mate() {
    let mut board = Board::new();
    let side = play(&mut board, Color::White, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert_eq!(side, Color::White);
    assert!(board.check(Color::White));
    assert_eq!(board.legal_moves().len(), 0);
    assert!(board.checkmate(Color::White));
    assert!(!board.stalemate(Color::White));
}

#[test]
fn test_checkmate_back_rank() {
    let (mut board, side) = Board::from_fen("3R2k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
    board.update_board(AttackTables::shared(), side);
    assert!(board.checkmate(Color::Black));
}

#[test]
fn test_stalemate_position() {
    let (mut board, side) = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    board.update_board(AttackTables::shared(), side);
    assert!(!board.check(Color::Black));
    assert!(!board.checkmate(Color::Black));
    assert!(board.stalemate(Color::Black));
    assert!(board.legal_moves().is_empty());
}

#[test]
fn test_check_without_mate() {
    let mut board = Board::new();
    play(&mut board, Color::White, &["e2e4", "f7f6", "d1h5"]);
    assert!(board.check(Color::Black));
    assert!(!board.checkmate(Color::Black));
    // g7g6 blocks; nothing else resolves the check.
    assert_eq!(board.legal_moves().len(), 1);
}

#[test]
fn test_bishop_pinned_on_e_file() {
    let mut board = Board::empty();
    board.put_piece(sq("e1"), Color::White, Piece::King);
    board.put_piece(sq("e2"), Color::White, Piece::Bishop);
    board.put_piece(sq("e8"), Color::Black, Piece::Queen);
    board.put_piece(sq("a8"), Color::Black, Piece::King);
    board.update_board(AttackTables::shared(), Color::White);

    assert_eq!(board.pins(Color::White)[Axis::Vertical], Bitboard::from_square(sq("e2")));
    assert!(board
        .legal_moves()
        .iter()
        .filter(|m| m.from() == sq("e2"))
        .all(|m| m.to().file() == 4));
}

#[test]
fn test_en_passant_after_black_double_push() {
    let mut board = Board::new();
    play(&mut board, Color::White, &["d2d4", "a7a6", "d4d5", "e7e5"]);
    assert_eq!(board.en_passant(Color::White), Bitboard::from_square(sq("e6")));
    assert!(board.en_passant(Color::White).is_single());

    let ep = board.find_move("d5e6").unwrap();
    assert_eq!(ep.flag(), MoveFlag::EnPassant);
    board.apply_move(Color::White, ep);
    assert_eq!(board.piece_on(sq("e5")), None);
    assert_eq!(board.piece_on(sq("e6")), Some(Piece::Pawn));
}

#[test]
fn test_en_passant_expires_after_one_ply() {
    let mut board = Board::new();
    play(
        &mut board,
        Color::White,
        &["d2d4", "a7a6", "d4d5", "e7e5", "g1f3", "a6a5"],
    );
    assert!(board.en_passant(Color::White).is_empty());
    assert!(board.find_move("d5e6").is_err());
}

#[test]
fn test_castling_right_lost_after_king_returns() {
    let mut board = Board::new();
    play(
        &mut board,
        Color::White,
        &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6", "e1e2", "f8c5", "e2e1", "a7a6"],
    );
    assert!(!board.castling_rights().has(Color::White, CastleSide::Short));
    assert!(board.legal_moves().iter().all(|m| !m.is_castling()));
}

#[test]
fn test_castling_both_sides_after_development() {
    let (mut board, side) =
        Board::from_fen("r3k2r/pppqbppp/2np1n2/4p3/4P3/2NP1N2/PPPQBPPP/R3K2R w KQkq - 0 1")
            .unwrap();
    board.update_board(AttackTables::shared(), side);
    let castles: Vec<MoveFlag> = board
        .legal_moves()
        .iter()
        .map(|m| m.flag())
        .filter(|f| f.is_castle())
        .collect();
    assert_eq!(castles.len(), 2);
}

#[test]
fn test_underpromotions_available() {
    let (mut board, side) = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
    board.update_board(AttackTables::shared(), side);
    for notation in ["a7a8n", "a7a8b", "a7a8r", "a7a8q"] {
        let mv = board.find_move(notation).unwrap();
        assert!(mv.is_promotion());
        assert!(!mv.is_capture());
    }
}

#[test]
fn test_pinned_rook_moves_only_on_pin_line() {
    let (mut board, side) = Board::from_fen("4r2k/8/8/8/8/8/4R3/4K3 w - - 0 1").unwrap();
    board.update_board(AttackTables::shared(), side);
    let mut targets: Vec<String> = board
        .legal_moves()
        .iter()
        .filter(|m| m.from() == sq("e2"))
        .map(|m| m.to().to_string())
        .collect();
    targets.sort();
    assert_eq!(targets, vec!["e3", "e4", "e5", "e6", "e7", "e8"]);
    assert!(board.find_move("e2e8").unwrap().is_capture());
}

#[test]
fn test_move_list_display() {
    let (mut board, side) = Board::from_fen("8/8/8/8/8/8/8/K6k w - - 0 1").unwrap();
    board.update_board(AttackTables::shared(), side);
    let text = board.legal_moves().display_moves();
    assert!(text.contains("FROM: a1\nTO: a2\nFLAG: 0\n------------\n"));
    assert_eq!(text.matches("------------").count(), 3);
}
