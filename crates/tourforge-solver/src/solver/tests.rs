//! Tests for the knight tour solver.

use super::*;
use tourforge_config::StartCell;
use tourforge_core::TourForgeError;
use tourforge_test::{assert_closed_tour, REJECTED_SHAPES};

#[test]
fn test_rejected_boards_fail_in_constructor() {
    for &(rows, cols) in REJECTED_SHAPES {
        let err = KnightTourSolver::new(rows, cols).unwrap_err();
        assert_eq!(err, TourForgeError::InvalidConfiguration { rows, cols });
    }
}

#[test]
fn test_lazy_construction() {
    let solver = KnightTourSolver::new(12, 12).unwrap();
    assert!(!solver.is_built());
    let tour = solver.tour().unwrap();
    assert!(solver.is_built());
    assert_closed_tour(tour.as_slice(), 12, 12);
}

#[test]
fn test_eager_construction() {
    let config = TourConfig::new().with_construction(ConstructionMode::Eager);
    let solver = KnightTourSolver::with_config(14, 16, &config).unwrap();
    assert!(solver.is_built());
    assert_eq!(solver.shape(), BoardShape::new(14, 16));
    assert_eq!(solver.tour().unwrap().len(), 224);
}

#[test]
fn test_double_materialize() {
    let solver = KnightTourSolver::new(48, 50).unwrap();
    let tour = solver.tour().unwrap();
    let first = tour.materialize();
    let second = tour.materialize();
    assert_eq!(first.len(), second.len());
    assert_eq!(first, second);
    assert_closed_tour(&first, 48, 50);
}

#[test]
fn test_repeated_tour_requests() {
    let solver = KnightTourSolver::new(40, 40).unwrap();
    let first = solver.tour().unwrap();
    let a1 = first.materialize();
    let a2 = first.materialize();
    assert_eq!(a1.len(), a2.len());

    let second = solver.tour().unwrap();
    let b1 = second.materialize();
    let b2 = second.materialize();
    assert_eq!(b1.len(), b2.len());

    // The first handle is untouched by the second request.
    assert_eq!(first.materialize(), a1);
    assert_eq!(a1, b1);
    assert!(std::ptr::eq(first.as_slice(), second.as_slice()));
}

#[test]
fn test_independent_solvers_agree() {
    let a = KnightTourSolver::new(34, 36).unwrap().tour().unwrap();
    let b = KnightTourSolver::new(34, 36).unwrap().tour().unwrap();
    assert_eq!(a.materialize(), b.materialize());
}

#[test]
fn test_concurrent_first_access_builds_once() {
    let solver = KnightTourSolver::new(64, 64).unwrap();
    let tours: Vec<KnightTour> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8).map(|_| s.spawn(|| solver.tour().unwrap())).collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let first = &tours[0];
    assert_closed_tour(first.as_slice(), 64, 64);
    for tour in &tours[1..] {
        assert!(std::ptr::eq(first.as_slice(), tour.as_slice()));
    }
}

#[test]
fn test_start_cell_setting() {
    let origin = KnightTourSolver::new(24, 26).unwrap().tour().unwrap();
    assert_eq!(origin.as_slice()[0], Coord::ORIGIN);

    let config = TourConfig::new().with_start_cell(StartCell::FirstVisited);
    let first_visited = KnightTourSolver::with_config(24, 26, &config)
        .unwrap()
        .tour()
        .unwrap();
    assert_closed_tour(first_visited.as_slice(), 24, 26);
    assert_eq!(first_visited.len(), origin.len());
}
