//! Precomputed attack tables.
//!
//! Bishop and rook attacks come from magic-hash tables, knight/king/pawn
//! attacks from per-square patterns, and the ray table backs pin detection
//! and check masks. Everything is built once by [`AttackTables::new`] and
//! then only read; [`AttackTables::shared`] hands out a process-wide copy.

#![allow(clippy::inline_always)] // Performance-critical hot path functions

mod leapers;
mod magic;
mod rays;

pub use leapers::{king_attacks_set, knight_attacks_set, pawn_attacks_set};
pub use magic::{get_blockers, relevance_mask, slow_attacks, slow_ray, MagicEntry, MagicTable, Slider};
pub use rays::RayTable;

use std::time::Instant;

use once_cell::sync::Lazy;

use crate::board::types::{Axis, Bitboard, Color, Direction, Square};

static SHARED: Lazy<AttackTables> = Lazy::new(AttackTables::new);

/// Knobs for table construction.
///
/// Only the fallback multiplier search reads these; with the shipped
/// multipliers the tables come out identical for any options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableOptions {
    /// Seed for the fallback multiplier search
    pub seed: u64,
    /// Candidates tried per square before giving up
    pub max_attempts: u32,
}

impl Default for TableOptions {
    fn default() -> Self {
        TableOptions {
            seed: 0x2545_F491_4F6C_DD1D,
            max_attempts: 100_000_000,
        }
    }
}

/// All lookup tables needed for attack and move generation.
#[derive(Clone, Debug)]
pub struct AttackTables {
    knight: [Bitboard; 64],
    king: [Bitboard; 64],
    pawn: [[Bitboard; 64]; 2],
    bishop: MagicTable,
    rook: MagicTable,
    rays: RayTable,
}

impl AttackTables {
    /// Build every table with default options.
    ///
    /// # Panics
    /// See [`AttackTables::with_options`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(&TableOptions::default())
    }

    /// Build every table.
    ///
    /// # Panics
    /// Panics if some square has no collision-free multiplier within
    /// `options.max_attempts` candidates.
    #[must_use]
    pub fn with_options(options: &TableOptions) -> Self {
        let start = Instant::now();
        let tables = AttackTables {
            knight: leapers::knight_table(),
            king: leapers::king_table(),
            pawn: leapers::pawn_table(),
            bishop: MagicTable::build(Slider::Bishop, options),
            rook: MagicTable::build(Slider::Rook, options),
            rays: RayTable::new(),
        };
        engine_log!(
            debug,
            "attack tables built in {:?} ({} bishop slots, {} rook slots)",
            start.elapsed(),
            tables.bishop.len(),
            tables.rook.len()
        );
        tables
    }

    /// Process-wide tables, built on first use
    #[must_use]
    pub fn shared() -> &'static AttackTables {
        &SHARED
    }

    #[inline(always)]
    #[must_use]
    pub fn knight_attacks(&self, sq: Square) -> Bitboard {
        self.knight[sq.index()]
    }

    #[inline(always)]
    #[must_use]
    pub fn king_attacks(&self, sq: Square) -> Bitboard {
        self.king[sq.index()]
    }

    /// Squares a `color` pawn on `sq` attacks
    #[inline(always)]
    #[must_use]
    pub fn pawn_attacks(&self, color: Color, sq: Square) -> Bitboard {
        self.pawn[color.index()][sq.index()]
    }

    #[inline(always)]
    #[must_use]
    pub fn bishop_attacks(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        self.bishop.attacks(sq, occupancy)
    }

    #[inline(always)]
    #[must_use]
    pub fn rook_attacks(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        self.rook.attacks(sq, occupancy)
    }

    #[inline(always)]
    #[must_use]
    pub fn queen_attacks(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        self.bishop.attacks(sq, occupancy) | self.rook.attacks(sq, occupancy)
    }

    #[inline(always)]
    #[must_use]
    pub fn ray(&self, sq: Square, dir: Direction) -> Bitboard {
        self.rays.ray(sq, dir)
    }

    #[inline]
    #[must_use]
    pub fn between(&self, a: Square, b: Square) -> Bitboard {
        self.rays.between(a, b)
    }

    #[inline]
    #[must_use]
    pub fn line(&self, sq: Square, axis: Axis) -> Bitboard {
        self.rays.line(sq, axis)
    }

    #[must_use]
    pub fn magic_table(&self, slider: Slider) -> &MagicTable {
        match slider {
            Slider::Bishop => &self.bishop,
            Slider::Rook => &self.rook,
        }
    }
}

impl Default for AttackTables {
    fn default() -> Self {
        Self::new()
    }
}
