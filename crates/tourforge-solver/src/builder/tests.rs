//! Tests for the recursive tour builder.

use super::*;
use tourforge_test::{assert_closed_tour, ACCEPTED_SHAPES, REJECTED_SHAPES};

#[test]
fn test_base_board_is_returned_directly() {
    let tour = TourBuilder::new().build(BoardShape::new(6, 6)).unwrap();
    assert_eq!(&tour, base::lookup_base(BoardShape::new(6, 6)).unwrap());
}

#[test]
fn test_accepted_shapes_build_closed_tours() {
    let builder = TourBuilder::new().with_environment_mode(EnvironmentMode::NoAssert);
    for &(rows, cols) in ACCEPTED_SHAPES {
        let shape = BoardShape::new(rows, cols);
        let tour = builder.build(shape).unwrap();
        assert_closed_tour(tour.cells(), rows, cols);
    }
}

#[test]
fn test_every_supported_board_up_to_60() {
    let builder = TourBuilder::new().with_environment_mode(EnvironmentMode::NoAssert);
    for rows in (6..=60).step_by(2) {
        for cols in [rows - 2, rows, rows + 2] {
            let shape = BoardShape::new(rows, cols);
            if validity::decomposition_depth(shape).is_none() {
                continue;
            }
            let tour = builder.build(shape).unwrap();
            assert_closed_tour(tour.cells(), rows, cols);
        }
    }
}

#[test]
fn test_unsupported_shapes_rejected() {
    let builder = TourBuilder::new();
    for &(rows, cols) in REJECTED_SHAPES {
        if rows <= 0 || cols <= 0 {
            continue;
        }
        let err = builder
            .build(BoardShape::new(rows as usize, cols as usize))
            .unwrap_err();
        assert!(err.is_invalid_configuration(), "{rows}x{cols}: {err}");
    }
}

#[test]
fn test_origin_start_cell() {
    let tour = TourBuilder::new().build(BoardShape::new(14, 16)).unwrap();
    assert_eq!(tour.at(0), Coord::ORIGIN);
    assert_eq!(tour.len(), 224);
}

#[test]
fn test_first_visited_is_rotation_of_origin_start() {
    let shape = BoardShape::new(24, 26);
    let from_origin = TourBuilder::new().build(shape).unwrap();
    let mut first_visited = TourBuilder::new()
        .with_start_cell(StartCell::FirstVisited)
        .build(shape)
        .unwrap();
    assert_closed_tour(first_visited.cells(), 24, 26);

    assert!(first_visited.rotate_to(Coord::ORIGIN));
    assert_eq!(first_visited, from_origin);
}

#[test]
fn test_build_is_deterministic() {
    let shape = BoardShape::new(38, 38);
    let a = TourBuilder::new().build(shape).unwrap();
    let b = TourBuilder::new().build(shape).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_full_assert_builds() {
    let tour = TourBuilder::new()
        .with_environment_mode(EnvironmentMode::FullAssert)
        .build(BoardShape::new(34, 36))
        .unwrap();
    assert_closed_tour(tour.cells(), 34, 36);
}

#[test]
fn test_parallel_matches_sequential() {
    let shape = BoardShape::new(128, 128);
    let sequential = TourBuilder::new().build(shape).unwrap();
    let parallel = TourBuilder::new().with_parallel(true).build(shape).unwrap();
    assert_eq!(sequential, parallel);
}

#[test]
fn test_from_config() {
    let config = TourConfig::new()
        .with_environment_mode(EnvironmentMode::FullAssert)
        .with_start_cell(StartCell::FirstVisited)
        .with_parallel(true);
    let builder = TourBuilder::from_config(&config);
    assert_eq!(
        builder,
        TourBuilder::new()
            .with_environment_mode(EnvironmentMode::FullAssert)
            .with_start_cell(StartCell::FirstVisited)
            .with_parallel(true)
    );
}

// Builds every quadrant separately, the way the split tree reads.
fn build_each_quadrant(shape: BoardShape) -> Tour {
    if base::is_base_shape(shape) {
        return base::lookup_base(shape).unwrap().clone();
    }
    let split = QuadrantSplit::of(Region::whole(shape)).unwrap();
    let place = |region: &Region| build_each_quadrant(region.shape).translated(region.origin);
    let top = splice(
        &place(&split.top_left),
        &split.top_left,
        &place(&split.top_right),
        &split.top_right,
    )
    .unwrap();
    let bottom = splice(
        &place(&split.bottom_left),
        &split.bottom_left,
        &place(&split.bottom_right),
        &split.bottom_right,
    )
    .unwrap();
    splice(&top, &split.top(), &bottom, &split.bottom()).unwrap()
}

#[test]
fn test_shared_quadrant_shapes_match_separate_builds() {
    let builder = TourBuilder::new()
        .with_environment_mode(EnvironmentMode::NoAssert)
        .with_start_cell(StartCell::FirstVisited);
    for (rows, cols) in [(12, 12), (14, 16), (24, 26), (34, 36), (48, 50), (70, 72)] {
        let shape = BoardShape::new(rows, cols);
        assert_eq!(builder.build(shape).unwrap(), build_each_quadrant(shape), "{shape}");
    }
}
