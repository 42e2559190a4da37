//! Algorithm instance: a validated board with its tour built at most once.

use std::sync::{Arc, OnceLock};

use tourforge_config::{ConstructionMode, TourConfig};
use tourforge_core::{BoardShape, Coord, Result};
use tracing::trace;

use crate::builder::TourBuilder;
use crate::container::KnightTour;
use crate::validity;

/// Builds and serves a closed knight tour for one board.
///
/// The board is validated in the constructor, so an instance only exists
/// for supported boards. The tour is built on the first [`tour`](Self::tour)
/// call (or in the constructor with [`ConstructionMode::Eager`]) and cached;
/// concurrent first calls still build it exactly once.
///
/// # Examples
///
/// ```
/// use tourforge_solver::KnightTourSolver;
///
/// let solver = KnightTourSolver::new(8, 8).unwrap();
/// let tour = solver.tour().unwrap();
/// assert_eq!(tour.materialize().len(), 64);
///
/// let err = KnightTourSolver::new(40, 44).unwrap_err();
/// assert!(err.is_invalid_configuration());
/// ```
#[derive(Debug)]
pub struct KnightTourSolver {
    shape: BoardShape,
    builder: TourBuilder,
    cells: OnceLock<Result<Arc<[Coord]>>>,
}

impl KnightTourSolver {
    /// Creates a solver for a `rows` x `cols` board with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`TourForgeError::InvalidConfiguration`] if the board is not
    /// supported. Nothing is built in that case.
    ///
    /// [`TourForgeError::InvalidConfiguration`]: tourforge_core::TourForgeError::InvalidConfiguration
    pub fn new(rows: i64, cols: i64) -> Result<Self> {
        Self::with_config(rows, cols, &TourConfig::default())
    }

    /// Creates a solver using the construction settings in `config`.
    ///
    /// The board section of `config`, if any, is ignored; `rows` and `cols`
    /// decide the board.
    pub fn with_config(rows: i64, cols: i64, config: &TourConfig) -> Result<Self> {
        let shape = validity::check(rows, cols)?;
        let solver = Self {
            shape,
            builder: TourBuilder::from_config(config),
            cells: OnceLock::new(),
        };
        if config.construction == ConstructionMode::Eager {
            solver.cached()?;
        }
        Ok(solver)
    }

    /// The board this solver builds for.
    pub fn shape(&self) -> BoardShape {
        self.shape
    }

    /// Returns `true` once the tour has been built (successfully or not).
    pub fn is_built(&self) -> bool {
        self.cells.get().is_some()
    }

    /// Returns a handle to the tour, building it on first use.
    ///
    /// Every call returns a handle over the same cells; earlier handles stay
    /// valid.
    ///
    /// # Errors
    ///
    /// Only [`TourForgeError::InternalInconsistency`], which a supported
    /// board never produces. A failed build is cached like a successful one.
    ///
    /// [`TourForgeError::InternalInconsistency`]: tourforge_core::TourForgeError::InternalInconsistency
    pub fn tour(&self) -> Result<KnightTour> {
        let cells = self.cached()?;
        trace!(event = "tour_handle", rows = self.shape.rows, cols = self.shape.cols);
        Ok(KnightTour::new(self.shape, Arc::clone(cells)))
    }

    fn cached(&self) -> Result<&Arc<[Coord]>> {
        self.cells
            .get_or_init(|| {
                self.builder
                    .build(self.shape)
                    .map(|tour| Arc::from(tour.into_cells()))
            })
            .as_ref()
            .map_err(Clone::clone)
    }
}

#[cfg(test)]
mod tests;
