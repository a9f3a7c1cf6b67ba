//! Empty-board rays from every square in each of the eight directions.

use super::magic::slow_ray;
use crate::board::types::{Axis, Bitboard, Direction, Square};

/// `ray(sq, dir)` holds every square strictly beyond `sq` in `dir` up to the edge.
#[derive(Clone, Debug)]
pub struct RayTable {
    rays: [[Bitboard; 8]; 64],
}

impl RayTable {
    #[must_use]
    pub fn new() -> Self {
        let mut rays = [[Bitboard::EMPTY; 8]; 64];
        for sq in Square::all() {
            for dir in Direction::ALL {
                rays[sq.index()][dir.index()] = slow_ray(sq, dir, Bitboard::EMPTY);
            }
        }
        RayTable { rays }
    }

    #[inline(always)]
    #[must_use]
    pub fn ray(&self, sq: Square, dir: Direction) -> Bitboard {
        self.rays[sq.index()][dir.index()]
    }

    /// Full line through `sq` along `axis`, including `sq`
    #[must_use]
    pub fn line(&self, sq: Square, axis: Axis) -> Bitboard {
        let [a, b] = axis.directions();
        self.ray(sq, a) | self.ray(sq, b) | Bitboard::from_square(sq)
    }

    /// Direction leading from `from` to `to`, if the two share a line
    #[must_use]
    pub fn direction_to(&self, from: Square, to: Square) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&dir| self.ray(from, dir).contains(to))
    }

    /// Squares strictly between `a` and `b`; empty unless they share a line
    #[must_use]
    pub fn between(&self, a: Square, b: Square) -> Bitboard {
        match self.direction_to(a, b) {
            Some(dir) => self.ray(a, dir) & !self.ray(b, dir) & !Bitboard::from_square(b),
            None => Bitboard::EMPTY,
        }
    }
}

impl Default for RayTable {
    fn default() -> Self {
        Self::new()
    }
}
