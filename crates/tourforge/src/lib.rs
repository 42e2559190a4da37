//! TourForge - Closed knight's tours in Rust
//!
//! Ask for a board, get back a cycle that visits every square once with
//! knight moves and returns to its start.
//!
//! # Example
//!
//! ```rust
//! use tourforge::prelude::*;
//!
//! let tour = knight_tour(8, 8).unwrap();
//! assert_eq!(tour.len(), 64);
//! assert!(tour.edges().all(|(a, b)| is_knight_move(a, b)));
//!
//! // Boards without a supported decomposition are refused up front.
//! let err = knight_tour(40, 44).unwrap_err();
//! assert!(err.is_invalid_configuration());
//! ```

// Core types
pub use tourforge_core::{
    check_closed_tour, is_knight_move, BoardShape, Coord, Region, Result, Tour, TourForgeError,
    TourViolation, KNIGHT_STEPS,
};

// Configuration
pub use tourforge_config::{
    BoardConfig, ConfigError, ConstructionMode, EnvironmentMode, StartCell, TourConfig,
};

// Construction
pub use tourforge_solver::{is_valid, KnightTour, KnightTourSolver, TourBuilder};

#[cfg(feature = "console")]
pub mod console;

mod solve;
pub use solve::{knight_tour, knight_tour_from_config, knight_tour_with_config};

pub mod prelude {
    pub use super::{knight_tour, knight_tour_from_config, knight_tour_with_config};
    pub use super::{is_knight_move, is_valid, BoardShape, Coord};
    pub use super::{KnightTour, KnightTourSolver, TourConfig, TourForgeError};
}
