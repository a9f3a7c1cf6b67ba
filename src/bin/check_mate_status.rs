use std::env;
use std::process::ExitCode;

use bitboard_chess::board::{draw_bitboard, AttackTables, Board, Color};

fn main() -> ExitCode {
    let tables = AttackTables::shared();
    let mut board = Board::new();
    let mut side = Color::White;
    let mut show_bitboards = false;

    for arg in env::args().skip(1) {
        if arg == "--bitboards" {
            show_bitboards = true;
            continue;
        }
        board.update_board(tables, side);
        match board.find_move(&arg) {
            Ok(mv) => {
                board.apply_move(side, mv);
                side = !side;
            }
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        }
    }

    board.update_board(tables, side);
    println!("{board}");
    if show_bitboards {
        print!("{}", board.dump_bitboards());
        print!("{}", draw_bitboard("pinned", board.pins(side).all()));
        print!("{}", draw_bitboard("attacked", board.attacks_all(!side)));
    }
    println!("side_to_move: {side}");
    println!("legal_moves: {}", board.legal_moves().len());
    println!("check: {}", board.check(side));
    println!("checkmate: {}", board.checkmate(side));
    println!("stalemate: {}", board.stalemate(side));
    print!("{}", board.legal_moves().display_moves());
    ExitCode::SUCCESS
}
