//! TourForge Core - Board and tour types for closed knight's tours
//!
//! This crate provides the fundamental abstractions for TourForge:
//! - Board geometry: cells, board shapes, quadrant regions, knight moves
//! - Tours: flat cyclic cell sequences with O(1) successor lookup
//! - The closed-tour predicate used by assertion modes and tests
//! - The error taxonomy shared by every TourForge crate

pub mod board;
pub mod error;
pub mod tour;

#[cfg(test)]
mod tour_tests;

pub use board::{is_knight_move, BoardShape, Coord, Region, KNIGHT_STEPS};
pub use error::{Result, TourForgeError};
pub use tour::{check_closed_tour, Tour, TourViolation};
