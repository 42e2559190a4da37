//! TourForge Solver Engine
//!
//! This crate builds closed knight's tours by divide and conquer:
//! - Validity checking of board shapes
//! - The base tour table for leaf boards
//! - Quadrant splitting and cycle splicing
//! - The recursive tour builder
//! - The solver instance and the tour handle it serves

pub mod base;
pub mod builder;
pub mod container;
pub mod partition;
pub mod solver;
pub mod splice;
pub mod validity;

pub use builder::TourBuilder;
pub use container::KnightTour;
pub use partition::QuadrantSplit;
pub use solver::KnightTourSolver;
pub use validity::is_valid;
