//! Closed knight tours as flat, position-indexed cycles.
//!
//! A [`Tour`] stores its cells in visiting order. The cycle closes from the
//! last cell back to the first, so successor and predecessor lookups are
//! index arithmetic modulo the length.

use thiserror::Error;

use crate::board::{is_knight_move, BoardShape, Coord, Region};
use crate::error::TourForgeError;

/// Why a cell sequence is not a closed knight tour of a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourViolation {
    #[error("tour has {actual} cells, board {shape} has {expected}")]
    WrongLength {
        shape: BoardShape,
        expected: usize,
        actual: usize,
    },

    #[error("cell {cell} at position {position} lies outside the board")]
    OutOfBounds { position: usize, cell: Coord },

    #[error("cell {cell} is visited twice (second time at position {position})")]
    Duplicate { position: usize, cell: Coord },

    #[error("step from position {position} ({from} -> {to}) is not a knight move")]
    NotKnightMove {
        position: usize,
        from: Coord,
        to: Coord,
    },
}

impl From<TourViolation> for TourForgeError {
    fn from(violation: TourViolation) -> Self {
        TourForgeError::InternalInconsistency(violation.to_string())
    }
}

/// Checks that `cells` visit every cell of `region` exactly once with knight
/// moves, including the closing step from the last cell to the first.
pub fn check_closed_tour_in(cells: &[Coord], region: &Region) -> Result<(), TourViolation> {
    let expected = region.cell_count();
    if cells.len() != expected {
        return Err(TourViolation::WrongLength {
            shape: region.shape,
            expected,
            actual: cells.len(),
        });
    }

    let mut seen = vec![false; expected];
    for (position, &cell) in cells.iter().enumerate() {
        let Some(idx) = region.local_index(cell) else {
            return Err(TourViolation::OutOfBounds { position, cell });
        };
        if std::mem::replace(&mut seen[idx], true) {
            return Err(TourViolation::Duplicate { position, cell });
        }
    }

    for position in 0..cells.len() {
        let from = cells[position];
        let to = cells[(position + 1) % cells.len()];
        if !is_knight_move(from, to) {
            return Err(TourViolation::NotKnightMove { position, from, to });
        }
    }
    Ok(())
}

/// Checks that `cells` form a closed knight tour of the whole board `shape`.
///
/// # Examples
///
/// ```
/// use tourforge_core::board::{BoardShape, Coord};
/// use tourforge_core::tour::{check_closed_tour, TourViolation};
///
/// let cells = vec![Coord::new(0, 0), Coord::new(1, 2)];
/// let err = check_closed_tour(&cells, BoardShape::new(6, 6)).unwrap_err();
/// assert!(matches!(err, TourViolation::WrongLength { expected: 36, .. }));
/// ```
pub fn check_closed_tour(cells: &[Coord], shape: BoardShape) -> Result<(), TourViolation> {
    check_closed_tour_in(cells, &Region::whole(shape))
}

/// A cyclic sequence of cells, each consecutive pair joined by a knight move.
///
/// Construction does not validate; call [`Tour::validate`] when the source
/// of the cells is not already trusted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tour {
    cells: Vec<Coord>,
}

impl Tour {
    /// Wraps cells given in visiting order.
    pub fn from_cells(cells: Vec<Coord>) -> Self {
        Self { cells }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in visiting order.
    #[inline]
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<Coord> {
        self.cells
    }

    /// Cell at `position`, wrapping around the cycle.
    #[inline]
    pub fn at(&self, position: usize) -> Coord {
        self.cells[position % self.cells.len()]
    }

    /// Position following `position` on the cycle.
    #[inline]
    pub fn successor_index(&self, position: usize) -> usize {
        if position + 1 == self.cells.len() {
            0
        } else {
            position + 1
        }
    }

    /// Position preceding `position` on the cycle.
    #[inline]
    pub fn predecessor_index(&self, position: usize) -> usize {
        if position == 0 {
            self.cells.len() - 1
        } else {
            position - 1
        }
    }

    /// Walks the whole cycle starting at `start`, forwards or backwards.
    ///
    /// Yields exactly `len()` cells.
    pub fn walk(&self, start: usize, forward: bool) -> impl Iterator<Item = Coord> + '_ {
        let len = self.cells.len();
        (0..len).map(move |k| {
            let position = if forward {
                (start + k) % len
            } else {
                (start + len - k) % len
            };
            self.cells[position]
        })
    }

    /// Moves every cell by `origin`, taking a locally indexed tour into the
    /// enclosing board's frame.
    pub fn translated(mut self, origin: Coord) -> Tour {
        if origin != Coord::ORIGIN {
            for cell in &mut self.cells {
                *cell = cell.translated(origin);
            }
        }
        self
    }

    /// Mirrors the tour across the main diagonal.
    pub fn transposed(mut self) -> Tour {
        for cell in &mut self.cells {
            *cell = cell.transposed();
        }
        self
    }

    /// Rotates the cycle so it starts at `start`, keeping its direction.
    ///
    /// Returns `false` and leaves the tour untouched if `start` is not on it.
    pub fn rotate_to(&mut self, start: Coord) -> bool {
        match self.cells.iter().position(|&c| c == start) {
            Some(position) => {
                self.cells.rotate_left(position);
                true
            }
            None => false,
        }
    }

    /// Cyclically consecutive cell pairs, ending with the closing step.
    pub fn edges(&self) -> impl Iterator<Item = (Coord, Coord)> + '_ {
        let len = self.cells.len();
        (0..len).map(move |i| (self.cells[i], self.cells[(i + 1) % len]))
    }

    /// Checks this tour against the whole board `shape`.
    pub fn validate(&self, shape: BoardShape) -> Result<(), TourViolation> {
        check_closed_tour(&self.cells, shape)
    }

    /// Checks this tour against a region placed in a larger board.
    pub fn validate_in(&self, region: &Region) -> Result<(), TourViolation> {
        check_closed_tour_in(&self.cells, region)
    }
}

impl From<Tour> for Vec<Coord> {
    fn from(tour: Tour) -> Self {
        tour.cells
    }
}
