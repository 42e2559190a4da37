//! Tests for closed tour representation and validation.

use crate::board::{BoardShape, Coord, Region};
use crate::error::TourForgeError;
use crate::tour::{check_closed_tour, Tour, TourViolation};

/// A closed tour of the 6x6 board.
fn six_by_six() -> Vec<Coord> {
    [
        (0, 0), (2, 1), (4, 0), (5, 2), (3, 1), (5, 0), (4, 2), (5, 4), (3, 5), (1, 4), (0, 2),
        (1, 0), (2, 2), (0, 1), (2, 0), (4, 1), (3, 3), (4, 5), (5, 3), (3, 4), (5, 5), (4, 3),
        (5, 1), (3, 0), (1, 1), (2, 3), (1, 5), (0, 3), (2, 4), (0, 5), (1, 3), (3, 2), (4, 4),
        (2, 5), (0, 4), (1, 2),
    ]
    .into_iter()
    .map(Coord::from)
    .collect()
}

#[test]
fn test_valid_tour_passes() {
    let tour = Tour::from_cells(six_by_six());
    assert_eq!(tour.len(), 36);
    assert!(tour.validate(BoardShape::new(6, 6)).is_ok());
}

#[test]
fn test_wrong_length() {
    let mut cells = six_by_six();
    cells.pop();
    let err = check_closed_tour(&cells, BoardShape::new(6, 6)).unwrap_err();
    assert_eq!(
        err,
        TourViolation::WrongLength {
            shape: BoardShape::new(6, 6),
            expected: 36,
            actual: 35
        }
    );
}

#[test]
fn test_duplicate_detected() {
    let mut cells = six_by_six();
    cells[5] = cells[0];
    let err = check_closed_tour(&cells, BoardShape::new(6, 6)).unwrap_err();
    assert!(matches!(err, TourViolation::Duplicate { position: 5, .. }));
}

#[test]
fn test_out_of_bounds_detected() {
    let mut cells = six_by_six();
    cells[3] = Coord::new(6, 0);
    let err = check_closed_tour(&cells, BoardShape::new(6, 6)).unwrap_err();
    assert!(matches!(err, TourViolation::OutOfBounds { position: 3, .. }));
}

#[test]
fn test_broken_step_detected() {
    let mut cells = six_by_six();
    cells.swap(1, 2);
    let err = check_closed_tour(&cells, BoardShape::new(6, 6)).unwrap_err();
    assert!(matches!(err, TourViolation::NotKnightMove { position: 0, .. }));
}

#[test]
fn test_closing_step_checked() {
    // Reversing a suffix keeps every cell but breaks the closing step.
    let mut cells = six_by_six();
    cells[20..].reverse();
    let err = check_closed_tour(&cells, BoardShape::new(6, 6)).unwrap_err();
    assert!(matches!(err, TourViolation::NotKnightMove { .. }));
}

#[test]
fn test_successor_and_predecessor_wrap() {
    let tour = Tour::from_cells(six_by_six());
    assert_eq!(tour.successor_index(35), 0);
    assert_eq!(tour.successor_index(3), 4);
    assert_eq!(tour.predecessor_index(0), 35);
    assert_eq!(tour.predecessor_index(4), 3);
    assert_eq!(tour.at(36), tour.at(0));
}

#[test]
fn test_walk_both_directions() {
    let tour = Tour::from_cells(six_by_six());
    let forward: Vec<_> = tour.walk(10, true).collect();
    assert_eq!(forward.len(), 36);
    assert_eq!(forward[0], tour.at(10));
    assert_eq!(forward[35], tour.at(9));

    let backward: Vec<_> = tour.walk(10, false).collect();
    assert_eq!(backward[0], tour.at(10));
    assert_eq!(backward[1], tour.at(9));
    assert_eq!(backward[35], tour.at(11));
    assert!(check_closed_tour(&backward, BoardShape::new(6, 6)).is_ok());
}

#[test]
fn test_translated_tour_validates_in_region() {
    let origin = Coord::new(6, 8);
    let tour = Tour::from_cells(six_by_six()).translated(origin);
    let region = Region::new(origin, BoardShape::new(6, 6));
    assert!(tour.validate_in(&region).is_ok());
    assert!(tour.validate(BoardShape::new(6, 6)).is_err());
}

#[test]
fn test_transposed_tour_stays_valid() {
    let tour = Tour::from_cells(six_by_six()).transposed();
    assert!(tour.validate(BoardShape::new(6, 6)).is_ok());
    assert_eq!(tour.at(1), Coord::new(1, 2));
}

#[test]
fn test_rotate_to() {
    let mut tour = Tour::from_cells(six_by_six());
    let target = tour.at(17);
    assert!(tour.rotate_to(target));
    assert_eq!(tour.at(0), target);
    assert!(tour.validate(BoardShape::new(6, 6)).is_ok());
    assert!(!tour.rotate_to(Coord::new(9, 9)));
    assert_eq!(tour.at(0), target);
}

#[test]
fn test_edges_close_the_cycle() {
    let tour = Tour::from_cells(six_by_six());
    let edges: Vec<_> = tour.edges().collect();
    assert_eq!(edges.len(), 36);
    assert_eq!(edges[35], (tour.at(35), tour.at(0)));
}

#[test]
fn test_violation_becomes_internal_inconsistency() {
    let err: TourForgeError = TourViolation::OutOfBounds {
        position: 1,
        cell: Coord::new(9, 9),
    }
    .into();
    assert!(matches!(err, TourForgeError::InternalInconsistency(_)));
    assert!(!err.is_invalid_configuration());
}
