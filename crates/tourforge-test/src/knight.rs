//! Closed knight tour assertions.
//!
//! The checker here is written against plain `(row, col)` arithmetic rather
//! than `tourforge_core::tour`, so tests do not validate the library with
//! itself.

use tourforge_core::Coord;

fn knight_step(a: Coord, b: Coord) -> bool {
    let dr = a.row.abs_diff(b.row);
    let dc = a.col.abs_diff(b.col);
    dr * dc == 2
}

/// Describes the first problem that keeps `cells` from being a closed
/// knight tour of a `rows` x `cols` board, or `None` if there is none.
pub fn closed_tour_error(cells: &[Coord], rows: usize, cols: usize) -> Option<String> {
    if cells.len() != rows * cols {
        return Some(format!(
            "expected {} cells, got {}",
            rows * cols,
            cells.len()
        ));
    }

    let mut used = vec![vec![false; cols]; rows];
    for (i, c) in cells.iter().enumerate() {
        if c.row >= rows || c.col >= cols {
            return Some(format!("cell {i} = {c} is off the board"));
        }
        if used[c.row][c.col] {
            return Some(format!("cell {i} = {c} visited twice"));
        }
        used[c.row][c.col] = true;

        let next = cells[(i + 1) % cells.len()];
        if !knight_step(*c, next) {
            return Some(format!("step {i}: {c} -> {next} is not a knight move"));
        }
    }
    None
}

/// Panics unless `cells` is a closed knight tour of a `rows` x `cols` board.
#[track_caller]
pub fn assert_closed_tour(cells: &[Coord], rows: usize, cols: usize) {
    if let Some(problem) = closed_tour_error(cells, rows, cols) {
        panic!("not a closed knight tour of {rows}x{cols}: {problem}");
    }
}
