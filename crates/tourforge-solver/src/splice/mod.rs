//! Joining two disjoint cycles on adjacent regions into one cycle.
//!
//! The splice removes one edge `(u, v)` from the first cycle and one edge
//! `(x, y)` from the second, where `u -> x` and `v -> y` are knight moves
//! across the shared boundary, and reconnects the two open paths through
//! the new edges. On the flat representation this is a concatenation of the
//! first cycle read from `v` back to `u` and the second read from `x` to `y`,
//! the second run reversed when `y` follows `x`.
//!
//! Candidates are scanned deterministically: cells `u` in the two rows or
//! columns of the first region next to the boundary in row-major order, then
//! `v` as successor before predecessor, then `x` in knight step order, then
//! `y` as successor before predecessor. The first match wins.

use tourforge_core::{is_knight_move, Coord, Region, Result, Tour, TourForgeError};
use tracing::trace;

/// Where the second region sits relative to the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Right,
    Below,
}

/// A crossing edge pair found by [`find_splice`], as positions in the two cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplicePoint {
    /// Position of `u` in the first cycle.
    pub first_at: usize,
    /// Position of `v`, the neighbour of `u` whose edge is removed.
    pub first_next: usize,
    /// Position of `x` in the second cycle.
    pub second_at: usize,
    /// Position of `y`, the neighbour of `x` whose edge is removed.
    pub second_next: usize,
}

/// Merges `first` (covering `first_region`) and `second` (covering the
/// adjacent `second_region`) into a single cycle over both regions.
///
/// The result starts at `v`, the first cell of the opened first cycle.
///
/// # Errors
///
/// Returns [`TourForgeError::InternalInconsistency`] if the regions do not
/// share an edge, a cycle does not cover its region, or no crossing edge
/// pair exists.
pub fn splice(
    first: &Tour,
    first_region: &Region,
    second: &Tour,
    second_region: &Region,
) -> Result<Tour> {
    let point = find_splice(first, first_region, second, second_region)?;
    trace!(
        event = "splice",
        from = %first.at(point.first_at),
        to = %second.at(point.second_at),
        cells = first.len() + second.len(),
    );

    let first_forward = point.first_next == first.successor_index(point.first_at);
    let second_forward = point.second_next != second.successor_index(point.second_at);

    let mut cells = Vec::with_capacity(first.len() + second.len());
    cells.extend(first.walk(point.first_next, first_forward));
    cells.extend(second.walk(point.second_at, second_forward));
    Ok(Tour::from_cells(cells))
}

/// Finds the first crossing edge pair in scan order.
pub fn find_splice(
    first: &Tour,
    first_region: &Region,
    second: &Tour,
    second_region: &Region,
) -> Result<SplicePoint> {
    let side = boundary_side(first_region, second_region)?;
    let first_index = position_index(first, first_region)?;
    let second_index = position_index(second, second_region)?;

    let rows = first_region.shape.rows;
    let cols = first_region.shape.cols;
    let band = match side {
        Side::Right => first_region.cells_within(0..rows, cols.saturating_sub(2)..cols),
        Side::Below => first_region.cells_within(rows.saturating_sub(2)..rows, 0..cols),
    };

    for u in band {
        let Some(u_local) = first_region.local_index(u) else {
            continue;
        };
        let first_at = first_index[u_local];
        for first_next in [first.successor_index(first_at), first.predecessor_index(first_at)] {
            let v = first.at(first_next);
            for x in u.knight_neighbors() {
                let Some(x_local) = second_region.local_index(x) else {
                    continue;
                };
                let second_at = second_index[x_local];
                for second_next in [
                    second.successor_index(second_at),
                    second.predecessor_index(second_at),
                ] {
                    if is_knight_move(v, second.at(second_next)) {
                        return Ok(SplicePoint {
                            first_at,
                            first_next,
                            second_at,
                            second_next,
                        });
                    }
                }
            }
        }
    }

    Err(TourForgeError::InternalInconsistency(format!(
        "no crossing edge pair between {} at {} and {} at {}",
        first_region.shape, first_region.origin, second_region.shape, second_region.origin
    )))
}

fn boundary_side(first: &Region, second: &Region) -> Result<Side> {
    if second.origin.row == first.origin.row
        && second.shape.rows == first.shape.rows
        && second.origin.col == first.col_end()
    {
        Ok(Side::Right)
    } else if second.origin.col == first.origin.col
        && second.shape.cols == first.shape.cols
        && second.origin.row == first.row_end()
    {
        Ok(Side::Below)
    } else {
        Err(TourForgeError::InternalInconsistency(format!(
            "regions at {} and {} do not share a full edge",
            first.origin, second.origin
        )))
    }
}

/// Maps each cell of `region` (row-major local index) to its position in `tour`.
fn position_index(tour: &Tour, region: &Region) -> Result<Vec<usize>> {
    const UNSEEN: usize = usize::MAX;

    let mut index = vec![UNSEEN; region.cell_count()];
    for (position, &cell) in tour.cells().iter().enumerate() {
        match region.local_index(cell) {
            Some(local) if index[local] == UNSEEN => index[local] = position,
            _ => return Err(cover_error(region, cell)),
        }
    }
    if tour.len() != region.cell_count() {
        return Err(TourForgeError::InternalInconsistency(format!(
            "cycle of {} cells cannot cover {} region at {}",
            tour.len(),
            region.shape,
            region.origin
        )));
    }
    Ok(index)
}

fn cover_error(region: &Region, cell: Coord) -> TourForgeError {
    TourForgeError::InternalInconsistency(format!(
        "cell {cell} is outside or repeated in {} region at {}",
        region.shape, region.origin
    ))
}
