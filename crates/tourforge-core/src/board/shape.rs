//! Board extents.

use std::fmt;

use super::Coord;

/// The extent of a rectangular board: `rows` x `cols`.
///
/// A shape is only a size; whether a tour exists for it is decided by the
/// solver's validity checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardShape {
    pub rows: usize,
    pub cols: usize,
}

impl BoardShape {
    #[inline]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Number of cells on the board.
    #[inline]
    pub const fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// The same board rotated a quarter turn (rows and columns swapped).
    #[inline]
    pub const fn transposed(&self) -> BoardShape {
        BoardShape::new(self.cols, self.rows)
    }

    /// Returns `true` if `coord` lies on this board.
    #[inline]
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Row-major index of `coord`, or `None` if it is off the board.
    #[inline]
    pub const fn index_of(&self, coord: Coord) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.row * self.cols + coord.col)
        } else {
            None
        }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Coord::new(row, col)))
    }
}

impl fmt::Display for BoardShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
