//! One-call entry points that hide the solver instance.

use tourforge_config::TourConfig;
use tourforge_core::{Result, TourForgeError};
use tourforge_solver::{KnightTour, KnightTourSolver};

/// Builds a closed tour of a `rows` x `cols` board with default settings.
pub fn knight_tour(rows: i64, cols: i64) -> Result<KnightTour> {
    knight_tour_with_config(rows, cols, &TourConfig::default())
}

/// Builds a closed tour of a `rows` x `cols` board using `config`.
pub fn knight_tour_with_config(rows: i64, cols: i64, config: &TourConfig) -> Result<KnightTour> {
    KnightTourSolver::with_config(rows, cols, config)?.tour()
}

/// Builds a closed tour of the board named in `config`.
///
/// # Errors
///
/// [`TourForgeError::Config`] if `config` has no board section, otherwise
/// whatever [`knight_tour_with_config`] returns.
pub fn knight_tour_from_config(config: &TourConfig) -> Result<KnightTour> {
    let board = config
        .board
        .ok_or_else(|| TourForgeError::Config("no [board] section".to_string()))?;
    knight_tour_with_config(board.rows, board.cols, config)
}
