//! Board validity checking.
//!
//! A board is supported when repeated quadrant splitting reaches leaf boards
//! from the base tour table on every branch. The check walks the split tree
//! level by level over distinct shapes only; a level never holds more than
//! four of them, so the cost is logarithmic in the board size.

use std::collections::BTreeSet;

use tourforge_core::{BoardShape, Region, Result, TourForgeError};
use tracing::warn;

use crate::base;
use crate::partition::QuadrantSplit;

/// Returns `true` if a closed tour can be built for a `rows` x `cols` board.
///
/// # Examples
///
/// ```
/// use tourforge_solver::validity::is_valid;
///
/// assert!(is_valid(8, 8));
/// assert!(is_valid(34, 36));
/// assert!(!is_valid(40, 44));
/// assert!(!is_valid(-20, 20));
/// ```
pub fn is_valid(rows: i64, cols: i64) -> bool {
    supported_shape(rows, cols).is_some()
}

/// Validates a board request and returns its shape.
///
/// # Errors
///
/// Returns [`TourForgeError::InvalidConfiguration`] for non-positive sides,
/// boards whose cell count does not fit in memory addressing, and boards
/// with no split path down to the base tours.
pub fn check(rows: i64, cols: i64) -> Result<BoardShape> {
    supported_shape(rows, cols).ok_or_else(|| {
        warn!(event = "board_rejected", rows, cols);
        TourForgeError::InvalidConfiguration { rows, cols }
    })
}

/// Number of split levels between `shape` and its deepest leaf, or `None`
/// if some branch reaches a board that is neither a leaf nor splittable.
pub fn decomposition_depth(shape: BoardShape) -> Option<usize> {
    split_levels(shape).map(|levels| levels.len() - 1)
}

/// Distinct board shapes on each level of the split tree, starting with
/// `{shape}` itself, or `None` if `shape` has no decomposition.
///
/// Shapes within a level shrink by a factor of four from one level to the
/// next and a level holds at most four of them, so building each listed
/// shape once costs a constant multiple of the cells of `shape`.
pub fn split_levels(shape: BoardShape) -> Option<Vec<BTreeSet<BoardShape>>> {
    let mut levels = vec![BTreeSet::from([shape])];
    loop {
        let mut next = BTreeSet::new();
        if let Some(level) = levels.last() {
            for &shape in level {
                if base::is_base_shape(shape) {
                    continue;
                }
                let split = QuadrantSplit::of(Region::whole(shape))?;
                next.extend(split.regions().map(|q| q.shape));
            }
        }
        if next.is_empty() {
            return Some(levels);
        }
        levels.push(next);
    }
}

fn supported_shape(rows: i64, cols: i64) -> Option<BoardShape> {
    if rows <= 0 || cols <= 0 {
        return None;
    }
    let rows = usize::try_from(rows).ok()?;
    let cols = usize::try_from(cols).ok()?;
    rows.checked_mul(cols)?;
    let shape = BoardShape::new(rows, cols);
    decomposition_depth(shape).map(|_| shape)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_boards_are_valid() {
        for shape in base::base_shapes() {
            assert!(is_valid(shape.rows as i64, shape.cols as i64), "{shape}");
            assert_eq!(decomposition_depth(shape), Some(0));
        }
    }

    #[test]
    fn test_known_accepted_boards() {
        for (rows, cols) in [
            (12, 12),
            (14, 16),
            (24, 26),
            (34, 36),
            (38, 38),
            (40, 40),
            (48, 50),
            (70, 72),
            (76, 76),
            (150, 150),
            (696, 698),
        ] {
            assert!(is_valid(rows, cols), "{rows}x{cols} should be accepted");
            assert!(is_valid(cols, rows), "{cols}x{rows} should be accepted");
        }
    }

    #[test]
    fn test_known_rejected_boards() {
        for (rows, cols) in [
            (2, 2),
            (21, 22),
            (73, 73),
            (-20, 20),
            (40, 44),
            (0, 8),
            (1, 1),
            (4, 4),
            (4, 6),
            (5, 5),
            (12, 16),
        ] {
            let err = check(rows, cols).unwrap_err();
            assert_eq!(err, TourForgeError::InvalidConfiguration { rows, cols });
        }
    }

    #[test]
    fn test_accepts_matches_near_square_even_family() {
        for rows in 1..=80i64 {
            for cols in 1..=80i64 {
                let expected = rows >= 6
                    && cols >= 6
                    && rows % 2 == 0
                    && cols % 2 == 0
                    && (rows - cols).abs() <= 2;
                assert_eq!(is_valid(rows, cols), expected, "{rows}x{cols}");
            }
        }
    }

    #[test]
    fn test_decomposition_depth() {
        assert_eq!(decomposition_depth(BoardShape::new(12, 12)), Some(1));
        assert_eq!(decomposition_depth(BoardShape::new(14, 16)), Some(1));
        assert_eq!(decomposition_depth(BoardShape::new(34, 36)), Some(2));
        assert_eq!(decomposition_depth(BoardShape::new(40, 44)), None);
    }

    #[test]
    fn test_split_levels_stay_narrow() {
        for side in (6..=700).step_by(2) {
            for shape in [BoardShape::new(side, side), BoardShape::new(side, side + 2)] {
                let levels = split_levels(shape).unwrap();
                assert_eq!(levels[0], BTreeSet::from([shape]));
                assert!(levels.iter().all(|level| level.len() <= 4), "{shape}");

                let distinct: BTreeSet<BoardShape> = levels.into_iter().flatten().collect();
                let cells: usize = distinct.iter().map(BoardShape::cell_count).sum();
                assert!(cells <= 3 * shape.cell_count(), "{shape}: {cells} cells built");
            }
        }
        assert!(split_levels(BoardShape::new(40, 44)).is_none());
    }

    #[test]
    fn test_overflowing_board_rejected() {
        assert!(!is_valid(i64::MAX, i64::MAX));
    }
}
