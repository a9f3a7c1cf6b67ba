//! Absolute pin detection.
//!
//! One routine covers all four axes. Walking outward from the king in each
//! direction, the nearest enemy slider that moves along that axis pins the
//! piece between them if exactly one piece stands in between and it is ours.

use super::attack_tables::AttackTables;
use super::types::{Axis, Bitboard, Pins, Square};

/// Own pieces pinned to the king on `king`, split by axis.
///
/// `orthogonal` holds enemy rooks and queens, `diagonal` enemy bishops and
/// queens.
#[must_use]
pub fn detect_pins(
    tables: &AttackTables,
    king: Square,
    own: Bitboard,
    orthogonal: Bitboard,
    diagonal: Bitboard,
    occupancy: Bitboard,
) -> Pins {
    let mut pins = Pins::new();
    for axis in Axis::ALL {
        let sliders = if axis.is_diagonal() { diagonal } else { orthogonal };
        for dir in axis.directions() {
            let ray = tables.ray(king, dir);
            let candidates = sliders & ray;
            if candidates.is_empty() {
                continue;
            }
            let attacker = if dir.is_increasing() {
                candidates.lsb()
            } else {
                candidates.msb()
            };
            let between = occupancy
                & ray
                & !tables.ray(attacker, dir)
                & !Bitboard::from_square(attacker);
            if between.is_single() && between.intersects(own) {
                pins[axis] |= between;
            }
        }
    }
    pins
}
