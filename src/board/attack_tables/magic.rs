//! Magic bitboards for bishop and rook attacks.
//!
//! For every square a relevance mask selects the occupancy bits that can
//! shorten one of the square's rays. `(occupancy & mask) * magic >> shift`
//! maps each subset of that mask to a slot holding the attack set. The
//! multipliers below ship as constants and every one is verified while the
//! table is filled; a multiplier that collides is replaced by a bounded
//! random search.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::TableOptions;
use crate::board::types::{Bitboard, Direction, Square};

/// Rook multipliers, one per square (a1 first)
const ROOK_MAGICS: [u64; 64] = [
    0x0080001020400080, 0x0040001000200040, 0x0080081000200080, 0x0080040800100080,
    0x0080020400080080, 0x0080010200040080, 0x0080008001000200, 0x0080002040800100,
    0x0000800020400080, 0x0000400020005000, 0x0000801000200080, 0x0000800800100080,
    0x0000800400080080, 0x0000800200040080, 0x0000800100020080, 0x0000800040800100,
    0x0000208000400080, 0x0000404000201000, 0x0000808010002000, 0x0000808008001000,
    0x0000808004000800, 0x0000808002000400, 0x0000010100020004, 0x0000020000408104,
    0x0000208080004000, 0x0000200040005000, 0x0000100080200080, 0x0000080080100080,
    0x0000040080080080, 0x0000020080040080, 0x0000010080800200, 0x0000800080004100,
    0x0000204000800080, 0x0000200040401000, 0x0000100080802000, 0x0000080080801000,
    0x0000040080800800, 0x0000020080800400, 0x0000020001010004, 0x0000800040800100,
    0x0000204000808000, 0x0000200040008080, 0x0000100020008080, 0x0000080010008080,
    0x0000040008008080, 0x0000020004008080, 0x0000010002008080, 0x0000004081020004,
    0x0000204000800080, 0x0000200040008080, 0x0000100020008080, 0x0000080010008080,
    0x0000040008008080, 0x0000020004008080, 0x0000800100020080, 0x0000800041000080,
    0x00FFFCDDFCED714A, 0x007FFCDDFCED714A, 0x003FFFCDFFD88096, 0x0000040810002101,
    0x0001000204080011, 0x0001000204000801, 0x0001000082000401, 0x0001FFFAABFAD1A2,
];

/// Bishop multipliers, one per square (a1 first)
const BISHOP_MAGICS: [u64; 64] = [
    0x0002020202020200, 0x0002020202020000, 0x0004010202000000, 0x0004040080000000,
    0x0001104000000000, 0x0000821040000000, 0x0000410410400000, 0x0000104104104000,
    0x0000040404040400, 0x0000020202020200, 0x0000040102020000, 0x0000040400800000,
    0x0000011040000000, 0x0000008210400000, 0x0000004104104000, 0x0000002082082000,
    0x0004000808080800, 0x0002000404040400, 0x0001000202020200, 0x0000800802004000,
    0x0000800400A00000, 0x0000200100884000, 0x0000400082082000, 0x0000200041041000,
    0x0002080010101000, 0x0001040008080800, 0x0000208004010400, 0x0000404004010200,
    0x0000840000802000, 0x0000404002011000, 0x0000808001041000, 0x0000404000820800,
    0x0001041000202000, 0x0000820800101000, 0x0000104400080800, 0x0000020080080080,
    0x0000404040040100, 0x0000808100020100, 0x0001010100020800, 0x0000808080010400,
    0x0000820820004000, 0x0000410410002000, 0x0000082088001000, 0x0000002011000800,
    0x0000080100400400, 0x0001010101000200, 0x0002020202000400, 0x0001010101000200,
    0x0000410410400000, 0x0000208208200000, 0x0000002084100000, 0x0000000020880000,
    0x0000001002020000, 0x0000040408020000, 0x0004040404040000, 0x0002020202020000,
    0x0000104104104000, 0x0000002082082000, 0x0000000020841000, 0x0000000000208800,
    0x0000000010020200, 0x0000000404080200, 0x0000040404040400, 0x0002020202020200,
];

/// The two sliding movement patterns that have their own table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slider {
    Bishop,
    Rook,
}

impl Slider {
    #[must_use]
    pub const fn directions(self) -> [Direction; 4] {
        match self {
            Slider::Bishop => Direction::DIAGONAL,
            Slider::Rook => Direction::ORTHOGONAL,
        }
    }

    const fn shipped_magics(self) -> &'static [u64; 64] {
        match self {
            Slider::Bishop => &BISHOP_MAGICS,
            Slider::Rook => &ROOK_MAGICS,
        }
    }
}

/// Walk one ray from `sq`, stopping on (and including) the first occupied square.
#[must_use]
pub fn slow_ray(sq: Square, dir: Direction, occupancy: Bitboard) -> Bitboard {
    let (df, dr) = dir.delta();
    let mut attacks = Bitboard::EMPTY;
    let mut cur = sq;
    while let Some(next) = cur.offset(df, dr) {
        attacks.set(next);
        if occupancy.contains(next) {
            break;
        }
        cur = next;
    }
    attacks
}

/// Reference attack generator: ray walking over every direction of `slider`.
#[must_use]
pub fn slow_attacks(slider: Slider, sq: Square, occupancy: Bitboard) -> Bitboard {
    slider
        .directions()
        .into_iter()
        .fold(Bitboard::EMPTY, |acc, dir| acc | slow_ray(sq, dir, occupancy))
}

/// Occupancy bits that can change the attack set of `slider` on `sq`:
/// every ray square except the one on the board edge. Edges the square
/// itself stands on stay in, since rays run along them.
#[must_use]
pub fn relevance_mask(slider: Slider, sq: Square) -> Bitboard {
    let edges = ((Bitboard::RANK_1 | Bitboard::RANK_8) & !Bitboard::rank_mask(sq.rank()))
        | ((Bitboard::FILE_A | Bitboard::FILE_H) & !Bitboard::file_mask(sq.file()));
    slow_attacks(slider, sq, Bitboard::EMPTY) & !edges
}

/// The `index`-th subset of `mask`: bit `i` of `index` selects the `i`-th
/// lowest set bit of `mask`.
#[must_use]
pub fn get_blockers(mask: Bitboard, index: usize) -> Bitboard {
    let mut blockers = Bitboard::EMPTY;
    for (i, sq) in mask.iter().enumerate() {
        if index & (1 << i) != 0 {
            blockers.set(sq);
        }
    }
    blockers
}

/// Per-square hashing parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MagicEntry {
    pub mask: Bitboard,
    pub magic: u64,
    pub shift: u32,
    pub offset: usize,
}

impl MagicEntry {
    /// Slot of `occupancy` inside this square's block
    #[inline(always)]
    #[must_use]
    pub fn index(&self, occupancy: Bitboard) -> usize {
        ((occupancy.0 & self.mask.0).wrapping_mul(self.magic) >> self.shift) as usize
    }
}

/// Perfect-hash attack table for one slider kind.
#[derive(Clone, Debug)]
pub struct MagicTable {
    slider: Slider,
    entries: [MagicEntry; 64],
    attacks: Vec<Bitboard>,
}

impl MagicTable {
    /// Fill the table for every square, verifying each multiplier.
    ///
    /// # Panics
    /// Panics if a square's shipped multiplier collides and the random search
    /// exhausts `options.max_attempts` without finding a replacement.
    #[must_use]
    pub fn build(slider: Slider, options: &TableOptions) -> Self {
        let mut entries = [MagicEntry::default(); 64];
        let mut attacks = Vec::new();
        let mut rng = StdRng::seed_from_u64(options.seed ^ slider as u64);

        for sq in Square::all() {
            let mask = relevance_mask(slider, sq);
            let bits = mask.popcount();
            let shift = 64 - bits;
            let subsets: Vec<(Bitboard, Bitboard)> = (0..1usize << bits)
                .map(|i| {
                    let blockers = get_blockers(mask, i);
                    (blockers, slow_attacks(slider, sq, blockers))
                })
                .collect();

            let shipped = slider.shipped_magics()[sq.index()];
            let (magic, block) = match fill(mask, shipped, shift, &subsets) {
                Some(block) => (shipped, block),
                None => {
                    engine_log!(
                        warn,
                        "{slider:?} multiplier for {sq} collides, searching for a replacement"
                    );
                    search(mask, shift, &subsets, &mut rng, options.max_attempts).unwrap_or_else(
                        || panic!("no collision-free {slider:?} multiplier found for {sq}"),
                    )
                }
            };

            entries[sq.index()] = MagicEntry {
                mask,
                magic,
                shift,
                offset: attacks.len(),
            };
            attacks.extend(block);
        }

        MagicTable {
            slider,
            entries,
            attacks,
        }
    }

    /// Attack set of a `slider` on `sq` given the full board occupancy
    #[inline(always)]
    #[must_use]
    pub fn attacks(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        let entry = &self.entries[sq.index()];
        self.attacks[entry.offset + entry.index(occupancy)]
    }

    #[must_use]
    pub fn entry(&self, sq: Square) -> &MagicEntry {
        &self.entries[sq.index()]
    }

    #[must_use]
    pub fn slider(&self) -> Slider {
        self.slider
    }

    /// Total number of slots over all squares
    #[must_use]
    pub fn len(&self) -> usize {
        self.attacks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attacks.is_empty()
    }
}

/// Place every subset's attack set at its hashed slot. Two subsets may share
/// a slot only when their attack sets are equal; otherwise `None`.
fn fill(
    mask: Bitboard,
    magic: u64,
    shift: u32,
    subsets: &[(Bitboard, Bitboard)],
) -> Option<Vec<Bitboard>> {
    let mut block: Vec<Option<Bitboard>> = vec![None; 1 << (64 - shift)];
    for &(blockers, attacks) in subsets {
        let idx = ((blockers.0 & mask.0).wrapping_mul(magic) >> shift) as usize;
        match block[idx] {
            None => block[idx] = Some(attacks),
            Some(existing) if existing == attacks => {}
            Some(_) => return None,
        }
    }
    // Unreached slots are never looked up; any value will do.
    Some(block.into_iter().map(Option::unwrap_or_default).collect())
}

fn search(
    mask: Bitboard,
    shift: u32,
    subsets: &[(Bitboard, Bitboard)],
    rng: &mut StdRng,
    max_attempts: u32,
) -> Option<(u64, Vec<Bitboard>)> {
    for _ in 0..max_attempts {
        let magic = rng.gen::<u64>() & rng.gen::<u64>() & rng.gen::<u64>();
        // Multipliers that spread too few mask bits into the index are hopeless.
        if (mask.0.wrapping_mul(magic) & 0xFF00_0000_0000_0000).count_ones() < 6 {
            continue;
        }
        if let Some(block) = fill(mask, magic, shift, subsets) {
            return Some((magic, block));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_relevance_mask_sizes() {
        assert_eq!(relevance_mask(Slider::Rook, Square::A1).popcount(), 12);
        assert_eq!(relevance_mask(Slider::Rook, sq("e4")).popcount(), 10);
        assert_eq!(relevance_mask(Slider::Bishop, Square::A1).popcount(), 6);
        assert_eq!(relevance_mask(Slider::Bishop, sq("d4")).popcount(), 9);
    }

    #[test]
    fn test_relevance_mask_excludes_edges() {
        let mask = relevance_mask(Slider::Rook, sq("d4"));
        assert!(!mask.contains(sq("d1")));
        assert!(!mask.contains(sq("d8")));
        assert!(!mask.contains(sq("a4")));
        assert!(!mask.contains(sq("h4")));
        assert!(mask.contains(sq("d2")));
        assert!(mask.contains(sq("g4")));
    }

    #[test]
    fn test_relevance_mask_on_edge_square() {
        let mask = relevance_mask(Slider::Rook, sq("a4"));
        assert!(mask.contains(sq("a2")));
        assert!(mask.contains(sq("a7")));
        assert!(mask.contains(sq("g4")));
        assert!(!mask.contains(sq("a1")));
        assert!(!mask.contains(sq("a8")));
        assert!(!mask.contains(sq("h4")));
        assert_eq!(mask.popcount(), 11);
    }

    #[test]
    fn test_get_blockers_enumerates_subsets() {
        let mask = Bitboard::from_square(sq("b2")) | Bitboard::from_square(sq("c3"));
        assert_eq!(get_blockers(mask, 0), Bitboard::EMPTY);
        assert_eq!(get_blockers(mask, 1), Bitboard::from_square(sq("b2")));
        assert_eq!(get_blockers(mask, 2), Bitboard::from_square(sq("c3")));
        assert_eq!(get_blockers(mask, 3), mask);
    }

    #[test]
    fn test_slow_rook_stops_on_blocker() {
        let blockers = Bitboard::from_square(sq("e6")) | Bitboard::from_square(sq("c4"));
        let attacks = slow_attacks(Slider::Rook, sq("e4"), blockers);
        assert!(attacks.contains(sq("e6")));
        assert!(!attacks.contains(sq("e7")));
        assert!(attacks.contains(sq("c4")));
        assert!(!attacks.contains(sq("b4")));
        assert!(attacks.contains(sq("h4")));
        assert!(!attacks.contains(sq("e4")));
    }

    #[test]
    fn test_fill_detects_collision() {
        let sq = sq("d4");
        let mask = relevance_mask(Slider::Rook, sq);
        let bits = mask.popcount();
        let subsets: Vec<_> = (0..1usize << bits)
            .map(|i| {
                let b = get_blockers(mask, i);
                (b, slow_attacks(Slider::Rook, sq, b))
            })
            .collect();
        // A zero multiplier sends every subset to slot 0.
        assert!(fill(mask, 0, 64 - bits, &subsets).is_none());
    }

    #[test]
    fn test_search_recovers_from_bad_multiplier() {
        let sq = Square::A1;
        let mask = relevance_mask(Slider::Bishop, sq);
        let bits = mask.popcount();
        let subsets: Vec<_> = (0..1usize << bits)
            .map(|i| {
                let b = get_blockers(mask, i);
                (b, slow_attacks(Slider::Bishop, sq, b))
            })
            .collect();
        let mut rng = StdRng::seed_from_u64(7);
        let (magic, block) = search(mask, 64 - bits, &subsets, &mut rng, 1_000_000).unwrap();
        for (blockers, attacks) in &subsets {
            let idx = (blockers.0.wrapping_mul(magic) >> (64 - bits)) as usize;
            assert_eq!(block[idx], *attacks);
        }
    }
}
