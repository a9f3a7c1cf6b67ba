//! Ray directions, pin axes and the axis-indexed pin map.

use std::ops::{Index, IndexMut};

use super::bitboard::Bitboard;

/// A line through a square along which a slider can pin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Along a file
    Vertical,
    /// Along a rank
    Horizontal,
    /// a1-h8 direction (north-east / south-west)
    Diagonal1,
    /// a8-h1 direction (north-west / south-east)
    Diagonal2,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Vertical,
        Axis::Horizontal,
        Axis::Diagonal1,
        Axis::Diagonal2,
    ];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Axis::Vertical => 0,
            Axis::Horizontal => 1,
            Axis::Diagonal1 => 2,
            Axis::Diagonal2 => 3,
        }
    }

    /// The two opposite directions that make up this axis
    #[must_use]
    pub const fn directions(self) -> [Direction; 2] {
        match self {
            Axis::Vertical => [Direction::North, Direction::South],
            Axis::Horizontal => [Direction::East, Direction::West],
            Axis::Diagonal1 => [Direction::NorthEast, Direction::SouthWest],
            Axis::Diagonal2 => [Direction::NorthWest, Direction::SouthEast],
        }
    }

    /// Rooks and queens pin along files and ranks, bishops and queens along diagonals
    #[inline]
    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        matches!(self, Axis::Diagonal1 | Axis::Diagonal2)
    }
}

/// One of the eight compass directions a slider moves in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    SouthWest,
    NorthWest,
    SouthEast,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::SouthWest,
        Direction::NorthWest,
        Direction::SouthEast,
    ];

    pub const DIAGONAL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::SouthWest,
        Direction::NorthWest,
        Direction::SouthEast,
    ];

    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
            Direction::NorthEast => 4,
            Direction::SouthWest => 5,
            Direction::NorthWest => 6,
            Direction::SouthEast => 7,
        }
    }

    /// (file delta, rank delta) of a single step
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::NorthEast => (1, 1),
            Direction::SouthWest => (-1, -1),
            Direction::NorthWest => (-1, 1),
            Direction::SouthEast => (1, -1),
        }
    }

    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Direction::North | Direction::South => Axis::Vertical,
            Direction::East | Direction::West => Axis::Horizontal,
            Direction::NorthEast | Direction::SouthWest => Axis::Diagonal1,
            Direction::NorthWest | Direction::SouthEast => Axis::Diagonal2,
        }
    }

    /// True when each step raises the square index. The first square hit
    /// walking such a ray is its lowest set bit; otherwise its highest.
    #[inline]
    #[must_use]
    pub const fn is_increasing(self) -> bool {
        let (df, dr) = self.delta();
        df + 8 * dr > 0
    }

    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::NorthEast => Direction::SouthWest,
            Direction::SouthWest => Direction::NorthEast,
            Direction::NorthWest => Direction::SouthEast,
            Direction::SouthEast => Direction::NorthWest,
        }
    }
}

/// Pinned pieces of one color, split by the axis they are pinned along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pins([Bitboard; 4]);

impl Pins {
    #[must_use]
    pub const fn new() -> Self {
        Pins([Bitboard::EMPTY; 4])
    }

    /// Every pinned piece regardless of axis
    #[must_use]
    pub fn all(&self) -> Bitboard {
        self.0.iter().fold(Bitboard::EMPTY, |acc, &bb| acc | bb)
    }

    /// Axis a piece on `bb` is pinned along, if any
    #[must_use]
    pub fn axis_of(&self, bb: Bitboard) -> Option<Axis> {
        Axis::ALL.into_iter().find(|&axis| self[axis].intersects(bb))
    }
}

impl Index<Axis> for Pins {
    type Output = Bitboard;

    fn index(&self, axis: Axis) -> &Bitboard {
        &self.0[axis.index()]
    }
}

impl IndexMut<Axis> for Pins {
    fn index_mut(&mut self, axis: Axis) -> &mut Bitboard {
        &mut self.0[axis.index()]
    }
}
