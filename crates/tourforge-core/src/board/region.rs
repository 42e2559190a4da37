//! Rectangular sub-boards (quadrants) placed inside a larger board.

use super::{BoardShape, Coord};

/// A sub-board with its top-left cell at `origin` in the enclosing frame.
///
/// Tours for a region are built in local coordinates and translated by
/// `origin` before they are spliced with neighbouring regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    pub origin: Coord,
    pub shape: BoardShape,
}

impl Region {
    #[inline]
    pub const fn new(origin: Coord, shape: BoardShape) -> Self {
        Self { origin, shape }
    }

    /// A region covering the whole of `shape`.
    #[inline]
    pub const fn whole(shape: BoardShape) -> Self {
        Self::new(Coord::ORIGIN, shape)
    }

    /// First row past the bottom edge.
    #[inline]
    pub const fn row_end(&self) -> usize {
        self.origin.row + self.shape.rows
    }

    /// First column past the right edge.
    #[inline]
    pub const fn col_end(&self) -> usize {
        self.origin.col + self.shape.cols
    }

    #[inline]
    pub const fn cell_count(&self) -> usize {
        self.shape.cell_count()
    }

    /// Returns `true` if the global cell `coord` lies inside this region.
    #[inline]
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.row >= self.origin.row
            && coord.row < self.row_end()
            && coord.col >= self.origin.col
            && coord.col < self.col_end()
    }

    /// Row-major index of the global cell `coord` relative to this region.
    #[inline]
    pub const fn local_index(&self, coord: Coord) -> Option<usize> {
        if self.contains(coord) {
            Some((coord.row - self.origin.row) * self.shape.cols + (coord.col - self.origin.col))
        } else {
            None
        }
    }

    /// The smallest region covering both `self` and `other`.
    pub fn union(&self, other: &Region) -> Region {
        let row = self.origin.row.min(other.origin.row);
        let col = self.origin.col.min(other.origin.col);
        let row_end = self.row_end().max(other.row_end());
        let col_end = self.col_end().max(other.col_end());
        Region::new(
            Coord::new(row, col),
            BoardShape::new(row_end - row, col_end - col),
        )
    }

    /// Global cells of this region in row-major order, restricted to rows
    /// `rows` and columns `cols` given as offsets from the region origin.
    pub fn cells_within(
        &self,
        rows: std::ops::Range<usize>,
        cols: std::ops::Range<usize>,
    ) -> impl Iterator<Item = Coord> {
        let origin = self.origin;
        rows.flat_map(move |r| {
            cols.clone()
                .map(move |c| Coord::new(origin.row + r, origin.col + c))
        })
    }
}
