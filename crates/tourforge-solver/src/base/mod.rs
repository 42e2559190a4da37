//! Precomputed closed tours for the boards where recursion stops.
//!
//! The table is built once per process from the constant tables in
//! [`tables`] and never mutated afterwards, so lookups need no locking.
//! Both orientations of every leaf board are present; the transposed entry
//! is the stored tour mirrored across the main diagonal.

mod tables;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use tourforge_core::{BoardShape, Coord, Result, Tour, TourForgeError};

static BASE_TOURS: LazyLock<BTreeMap<BoardShape, Tour>> = LazyLock::new(|| {
    let stored: [(BoardShape, &[(u8, u8)]); 6] = [
        (BoardShape::new(6, 6), &tables::TOUR_6X6),
        (BoardShape::new(6, 8), &tables::TOUR_6X8),
        (BoardShape::new(8, 8), &tables::TOUR_8X8),
        (BoardShape::new(8, 10), &tables::TOUR_8X10),
        (BoardShape::new(10, 10), &tables::TOUR_10X10),
        (BoardShape::new(10, 12), &tables::TOUR_10X12),
    ];

    let mut map = BTreeMap::new();
    for (shape, cells) in stored {
        let tour = Tour::from_cells(
            cells
                .iter()
                .map(|&(r, c)| Coord::new(r as usize, c as usize))
                .collect(),
        );
        if shape.rows != shape.cols {
            map.insert(shape.transposed(), tour.clone().transposed());
        }
        map.insert(shape, tour);
    }
    map
});

/// Returns `true` if `shape` is a leaf board with a stored tour.
pub fn is_base_shape(shape: BoardShape) -> bool {
    BASE_TOURS.contains_key(&shape)
}

/// All leaf boards, in ascending `(rows, cols)` order.
pub fn base_shapes() -> Vec<BoardShape> {
    BASE_TOURS.keys().copied().collect()
}

/// Returns the stored closed tour for a leaf board.
///
/// # Errors
///
/// A request for a shape that is not a leaf means the validity checker or
/// the split policy sent the builder somewhere the table does not cover.
/// That is reported as [`TourForgeError::InternalInconsistency`].
pub fn lookup_base(shape: BoardShape) -> Result<&'static Tour> {
    BASE_TOURS.get(&shape).ok_or_else(|| {
        TourForgeError::InternalInconsistency(format!("no base tour for {shape} board"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_shapes_cover_both_orientations() {
        let shapes = base_shapes();
        assert_eq!(shapes.len(), 9);
        for shape in &shapes {
            assert!(is_base_shape(shape.transposed()), "{shape} has no transpose");
        }
        assert_eq!(shapes[0], BoardShape::new(6, 6));
    }

    #[test]
    fn test_every_base_tour_is_closed() {
        for shape in base_shapes() {
            let tour = lookup_base(shape).unwrap();
            tour.validate(shape)
                .unwrap_or_else(|v| panic!("base tour {shape} is invalid: {v}"));
            assert_eq!(tour.at(0), Coord::ORIGIN);
        }
    }

    #[test]
    fn test_non_leaf_lookup_is_internal_error() {
        let err = lookup_base(BoardShape::new(12, 12)).unwrap_err();
        assert!(matches!(err, TourForgeError::InternalInconsistency(_)));
        assert!(!is_base_shape(BoardShape::new(6, 10)));
        assert!(!is_base_shape(BoardShape::new(4, 4)));
    }

    #[test]
    fn test_lookup_returns_same_table() {
        let a = lookup_base(BoardShape::new(8, 10)).unwrap();
        let b = lookup_base(BoardShape::new(8, 10)).unwrap();
        assert!(std::ptr::eq(a, b));
    }
}
