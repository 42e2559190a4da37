//! Recursive divide-and-conquer tour construction.
//!
//! A board that is not a leaf is split into four quadrants, each quadrant
//! tour is built in local coordinates and translated into place, and the
//! four cycles are folded into one by three splices: top-left with
//! top-right, bottom-left with bottom-right, then top with bottom.
//!
//! Quadrant tours depend only on their shape, so the builder works bottom-up
//! over the distinct shapes of each split level. Every level costs a fixed
//! fraction of the level above it, and the whole build is linear in the
//! number of cells.

use std::collections::{BTreeMap, BTreeSet};
use std::time::Instant;

use tourforge_config::{EnvironmentMode, StartCell, TourConfig};
use tourforge_core::{BoardShape, Coord, Region, Result, Tour, TourForgeError};
use tracing::{debug, info};

use crate::base;
use crate::partition::QuadrantSplit;
use crate::splice::splice;
use crate::validity;

/// Boards at least this large build their halves on the rayon pool when
/// parallel construction is enabled.
const PARALLEL_CELL_THRESHOLD: usize = 64 * 64;

/// Builds closed knight tours for supported boards.
///
/// The builder holds only settings; every call to [`build`](Self::build)
/// is independent and produces the same tour for the same shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TourBuilder {
    environment_mode: EnvironmentMode,
    start_cell: StartCell,
    parallel: bool,
}

impl Default for TourBuilder {
    fn default() -> Self {
        Self::from_config(&TourConfig::default())
    }
}

impl TourBuilder {
    /// Creates a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder from the construction-related parts of `config`.
    pub fn from_config(config: &TourConfig) -> Self {
        Self {
            environment_mode: config.environment_mode,
            start_cell: config.start_cell,
            parallel: config.parallel,
        }
    }

    pub fn with_environment_mode(mut self, mode: EnvironmentMode) -> Self {
        self.environment_mode = mode;
        self
    }

    pub fn with_start_cell(mut self, start_cell: StartCell) -> Self {
        self.start_cell = start_cell;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Builds a closed tour of `shape`.
    ///
    /// # Errors
    ///
    /// [`TourForgeError::InvalidConfiguration`] if the validity checker
    /// rejects `shape`; [`TourForgeError::InternalInconsistency`] if
    /// construction breaks down on a shape it accepted.
    pub fn build(&self, shape: BoardShape) -> Result<Tour> {
        let levels =
            validity::split_levels(shape).ok_or(TourForgeError::InvalidConfiguration {
                rows: shape.rows as i64,
                cols: shape.cols as i64,
            })?;
        let depth = levels.len() - 1;

        let start = Instant::now();
        info!(
            event = "build_start",
            rows = shape.rows,
            cols = shape.cols,
            depth = depth,
        );

        let mut tour = self.build_levels(shape, &levels)?;
        if self.start_cell == StartCell::Origin && !tour.rotate_to(Coord::ORIGIN) {
            return Err(TourForgeError::InternalInconsistency(format!(
                "tour of {shape} board does not visit the origin"
            )));
        }
        if self.environment_mode.asserts_result() {
            tour.validate(shape)?;
        }

        info!(
            event = "build_end",
            rows = shape.rows,
            cols = shape.cols,
            cells = tour.len() as u64,
            depth = depth,
            duration_ms = start.elapsed().as_millis() as u64,
        );
        Ok(tour)
    }

    /// Builds every distinct shape of the split tree once, deepest level
    /// first, each in its own coordinate frame.
    ///
    /// Quadrants of the same shape get the same tour wherever they sit, so a
    /// level costs only as much as its few distinct shapes.
    fn build_levels(&self, shape: BoardShape, levels: &[BTreeSet<BoardShape>]) -> Result<Tour> {
        let mut built: BTreeMap<BoardShape, Tour> = BTreeMap::new();
        for (depth, level) in levels.iter().enumerate().rev() {
            for &s in level {
                if built.contains_key(&s) {
                    continue;
                }
                let tour = if base::is_base_shape(s) {
                    base::lookup_base(s)?.clone()
                } else {
                    self.merge_quadrants(s, depth, &built)?
                };
                built.insert(s, tour);
            }
        }
        built.remove(&shape).ok_or_else(|| {
            TourForgeError::InternalInconsistency(format!("{shape} board was never built"))
        })
    }

    /// Places the tours of the four quadrants of `shape` and splices them.
    fn merge_quadrants(
        &self,
        shape: BoardShape,
        depth: usize,
        built: &BTreeMap<BoardShape, Tour>,
    ) -> Result<Tour> {
        let whole = Region::whole(shape);
        let split = QuadrantSplit::of(whole).ok_or_else(|| {
            TourForgeError::InternalInconsistency(format!(
                "{shape} board is neither a base board nor splittable"
            ))
        })?;
        debug!(
            event = "quadrant_split",
            depth = depth,
            rows = shape.rows,
            cols = shape.cols,
            top = split.top_left.shape.rows,
            left = split.top_left.shape.cols,
        );

        let (top, bottom) = if self.parallel && shape.cell_count() >= PARALLEL_CELL_THRESHOLD {
            rayon::join(
                || self.merge_pair(&split.top_left, &split.top_right, built),
                || self.merge_pair(&split.bottom_left, &split.bottom_right, built),
            )
        } else {
            (
                self.merge_pair(&split.top_left, &split.top_right, built),
                self.merge_pair(&split.bottom_left, &split.bottom_right, built),
            )
        };

        let tour = splice(&top?, &split.top(), &bottom?, &split.bottom())?;
        if self.environment_mode.asserts_merges() {
            tour.validate_in(&whole)?;
        }
        Ok(tour)
    }

    /// Splices two horizontally adjacent quadrants.
    fn merge_pair(
        &self,
        left: &Region,
        right: &Region,
        built: &BTreeMap<BoardShape, Tour>,
    ) -> Result<Tour> {
        let tour = splice(
            &placed(built, left)?,
            left,
            &placed(built, right)?,
            right,
        )?;
        if self.environment_mode.asserts_merges() {
            tour.validate_in(&left.union(right))?;
        }
        Ok(tour)
    }
}

/// The built tour for `region`'s shape, moved to `region`'s origin.
fn placed(built: &BTreeMap<BoardShape, Tour>, region: &Region) -> Result<Tour> {
    let tour = built.get(&region.shape).ok_or_else(|| {
        TourForgeError::InternalInconsistency(format!(
            "{} quadrant was not built before its parent",
            region.shape
        ))
    })?;
    Ok(tour.clone().translated(region.origin))
}

#[cfg(test)]
mod tests;
