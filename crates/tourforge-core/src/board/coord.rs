//! Board cells and knight-move geometry.

use std::fmt;

/// The eight knight displacements as `(row, col)` deltas.
///
/// The order is fixed; the splice search walks it when looking for a
/// crossing edge pair, so changing it changes the produced tours.
pub const KNIGHT_STEPS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// A board cell addressed by zero-based row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// The top-left cell.
    pub const ORIGIN: Coord = Coord { row: 0, col: 0 };

    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Shifts the cell by a signed delta, or `None` if it would leave the
    /// non-negative quadrant.
    #[inline]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Coord> {
        Some(Coord::new(
            self.row.checked_add_signed(d_row)?,
            self.col.checked_add_signed(d_col)?,
        ))
    }

    /// Translates a locally indexed cell into the frame whose origin is `origin`.
    #[inline]
    pub const fn translated(self, origin: Coord) -> Coord {
        Coord::new(self.row + origin.row, self.col + origin.col)
    }

    /// Swaps row and column.
    #[inline]
    pub const fn transposed(self) -> Coord {
        Coord::new(self.col, self.row)
    }

    /// Cells reachable by one knight move, in [`KNIGHT_STEPS`] order.
    ///
    /// Only the lower bound (row and column >= 0) is enforced here; callers
    /// filter against their own board or region.
    pub fn knight_neighbors(self) -> impl Iterator<Item = Coord> {
        KNIGHT_STEPS
            .into_iter()
            .filter_map(move |(dr, dc)| self.offset(dr, dc))
    }

    /// Returns the cell as a `(row, col)` pair.
    #[inline]
    pub const fn to_pair(self) -> (usize, usize) {
        (self.row, self.col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord::new(row, col)
    }
}

impl From<Coord> for (usize, usize) {
    fn from(c: Coord) -> Self {
        c.to_pair()
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Returns `true` if `a` and `b` are one knight move apart.
#[inline]
pub fn is_knight_move(a: Coord, b: Coord) -> bool {
    let dr = a.row.abs_diff(b.row);
    let dc = a.col.abs_diff(b.col);
    (dr == 1 && dc == 2) || (dr == 2 && dc == 1)
}
