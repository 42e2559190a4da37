//! Quadrant split policy for the recursive builder.
//!
//! Each side is halved with a fixed rounding rule: an even half is used as
//! is, an odd half `h` becomes `h - 1` and `h + 1`. Both parts of an even
//! side are therefore even. Splitting is only defined for near-square
//! boards (both sides even, differing by at most two), which is the family
//! the rule maps onto itself:
//!
//! - `2k x 2k` with `k` even gives four `k x k` quadrants;
//! - `2k x 2k` with `k` odd gives `(k-1)`/`(k+1)` mixes of both;
//! - `2k x (2k+2)` always gives square and `+2` quadrants.

use tourforge_core::{BoardShape, Coord, Region};

/// Splits an even side into two even parts.
///
/// Returns `None` for odd sides and for sides too short to yield two
/// non-empty parts.
pub fn halve(side: usize) -> Option<(usize, usize)> {
    if side % 2 != 0 {
        return None;
    }
    let half = side / 2;
    let parts = if half % 2 == 0 {
        (half, half)
    } else {
        (half - 1, half + 1)
    };
    (parts.0 > 0).then_some(parts)
}

/// The four quadrants of a split region, in global coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadrantSplit {
    pub top_left: Region,
    pub top_right: Region,
    pub bottom_left: Region,
    pub bottom_right: Region,
}

impl QuadrantSplit {
    /// Splits `region`, or returns `None` if it has no supported split.
    pub fn of(region: Region) -> Option<Self> {
        let BoardShape { rows, cols } = region.shape;
        if rows.abs_diff(cols) > 2 {
            return None;
        }
        let (top, bottom) = halve(rows)?;
        let (left, right) = halve(cols)?;
        let Coord { row, col } = region.origin;

        Some(Self {
            top_left: Region::new(Coord::new(row, col), BoardShape::new(top, left)),
            top_right: Region::new(Coord::new(row, col + left), BoardShape::new(top, right)),
            bottom_left: Region::new(Coord::new(row + top, col), BoardShape::new(bottom, left)),
            bottom_right: Region::new(
                Coord::new(row + top, col + left),
                BoardShape::new(bottom, right),
            ),
        })
    }

    /// Quadrants in row-major order.
    pub fn regions(&self) -> [Region; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
        ]
    }

    /// The top half: top-left and top-right together.
    pub fn top(&self) -> Region {
        self.top_left.union(&self.top_right)
    }

    /// The bottom half: bottom-left and bottom-right together.
    pub fn bottom(&self) -> Region {
        self.bottom_left.union(&self.bottom_right)
    }
}
