//! Read-only view of a finished tour.

use std::fmt::Write as _;
use std::sync::Arc;

use tourforge_core::{BoardShape, Coord};

/// A closed knight tour handed out by [`KnightTourSolver::tour`].
///
/// Handles share one immutable cell buffer; cloning a handle or asking the
/// solver for another never copies or changes the tour.
///
/// [`KnightTourSolver::tour`]: crate::KnightTourSolver::tour
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnightTour {
    shape: BoardShape,
    cells: Arc<[Coord]>,
}

impl KnightTour {
    pub(crate) fn new(shape: BoardShape, cells: Arc<[Coord]>) -> Self {
        Self { shape, cells }
    }

    /// The board this tour covers.
    pub fn shape(&self) -> BoardShape {
        self.shape
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in visiting order.
    pub fn as_slice(&self) -> &[Coord] {
        &self.cells
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coord> {
        self.cells.iter()
    }

    /// Copies the tour into a new vector, one cell per board square in
    /// cycle order. Every call returns an equal vector.
    pub fn materialize(&self) -> Vec<Coord> {
        self.cells.to_vec()
    }

    /// Like [`materialize`](Self::materialize), as `(row, col)` pairs.
    pub fn to_pairs(&self) -> Vec<(usize, usize)> {
        self.cells.iter().map(|c| c.to_pair()).collect()
    }

    /// Knight moves of the cycle, ending with the step back to the start.
    pub fn edges(&self) -> impl Iterator<Item = (Coord, Coord)> + '_ {
        let len = self.cells.len();
        (0..len).map(move |i| (self.cells[i], self.cells[(i + 1) % len]))
    }

    /// Position of `coord` in visiting order.
    pub fn position_of(&self, coord: Coord) -> Option<usize> {
        self.cells.iter().position(|&c| c == coord)
    }

    /// Renders the board as a grid of 1-based visiting steps.
    pub fn render(&self) -> String {
        let BoardShape { rows, cols } = self.shape;
        let mut steps = vec![0usize; rows * cols];
        for (i, c) in self.cells.iter().enumerate() {
            steps[c.row * cols + c.col] = i + 1;
        }

        let width = self.cells.len().to_string().len();
        let mut out = String::with_capacity(rows * cols * (width + 1));
        for row in steps.chunks(cols) {
            for (i, step) in row.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                let _ = write!(out, "{step:>width$}");
            }
            out.push('\n');
        }
        out
    }
}

impl<'a> IntoIterator for &'a KnightTour {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
