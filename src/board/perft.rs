//! Perft: exhaustive leaf counting for move generator validation.

use super::attack_tables::AttackTables;
use super::types::{Color, Move};
use super::Board;

impl Board {
    /// Number of leaf positions `depth` plies below this one with `color` to move.
    ///
    /// Copy-make: every child is a fresh clone, so `self` is left untouched.
    #[must_use]
    pub fn perft(&self, tables: &AttackTables, color: Color, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let mut board = self.clone();
        board.update_board(tables, color);
        if depth == 1 {
            return board.legal_moves.len() as u64;
        }

        let mut nodes = 0;
        for &mv in &board.legal_moves {
            let mut child = board.clone();
            child.apply_move(color, mv);
            nodes += child.perft(tables, !color, depth - 1);
        }
        nodes
    }

    /// Perft split by root move.
    #[must_use]
    pub fn divide(&self, tables: &AttackTables, color: Color, depth: usize) -> Vec<(Move, u64)> {
        let mut board = self.clone();
        board.update_board(tables, color);
        board
            .legal_moves
            .iter()
            .map(|&mv| {
                let mut child = board.clone();
                child.apply_move(color, mv);
                let nodes = child.perft(tables, !color, depth.saturating_sub(1));
                (mv, nodes)
            })
            .collect()
    }
}
