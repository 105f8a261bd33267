//! # Threshold Neighbor Rule
//!
//! A cell's next state depends only on how many of its eight Moore
//! neighbors are alive in the current generation:
//!
//! ```text
//!   ┌────┬────┬────┐
//!   │ NW │ N  │ NE │
//!   ├────┼────┼────┤      alive next  ⇔  neighbors ≥ 4
//!   │ W  │ ●  │ E  │
//!   ├────┼────┼────┤      (the cell's own state is ignored)
//!   │ SW │ S  │ SE │
//!   └────┴────┴────┘
//! ```
//!
//! Edges wrap: column `-1` is column `width - 1`, column `width` is column
//! `0`, and the same for rows. Because the rule ignores the center cell, a
//! dead cell with enough neighbors comes alive.

use super::buffer::Cell;

/// Minimum live neighbor count for a cell to be alive next generation.
pub const SURVIVAL_THRESHOLD: u8 = 4;

/// Moore neighborhood offsets `(dx, dy)`, center excluded.
pub const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Wraps `coord + delta` into `[0, dim)`.
///
/// `delta` is expected in `-1..=1`; larger offsets still wrap correctly.
#[inline]
#[must_use]
pub fn wrap(coord: usize, delta: isize, dim: usize) -> usize {
    match delta {
        0 => coord,
        -1 => {
            if coord == 0 {
                dim - 1
            } else {
                coord - 1
            }
        }
        1 => {
            if coord + 1 >= dim {
                0
            } else {
                coord + 1
            }
        }
        _ => (coord as isize + delta).rem_euclid(dim as isize) as usize,
    }
}

/// The eight wrapped neighbor coordinates of `(x, y)`, in [`MOORE_OFFSETS`] order.
#[must_use]
pub fn neighbor_coords(width: usize, height: usize, x: usize, y: usize) -> [(usize, usize); 8] {
    MOORE_OFFSETS.map(|(dx, dy)| (wrap(x, dx, width), wrap(y, dy, height)))
}

/// Number of live Moore neighbors of `(x, y)` in `cells`.
#[must_use]
pub fn neighbor_count(cells: &[Cell], width: usize, height: usize, x: usize, y: usize) -> u8 {
    neighbor_coords(width, height, x, y)
        .iter()
        .map(|&(nx, ny)| cells[ny * width + nx].weight())
        .sum()
}

/// Maps a neighbor count to the next state.
#[inline]
#[must_use]
pub const fn decide(neighbors: u8) -> Cell {
    Cell::from_alive(neighbors >= SURVIVAL_THRESHOLD)
}

/// Next-generation state of `(x, y)`.
#[must_use]
pub fn next_state(cells: &[Cell], width: usize, height: usize, x: usize, y: usize) -> Cell {
    decide(neighbor_count(cells, width, height, x, y))
}

/// Evaluates every cell of row `y` into `out`.
///
/// Same result as calling [`next_state`] per column, but the three source
/// rows are sliced once and only the column indices are wrapped per cell.
/// This is the unit of work handed to each worker.
pub fn evaluate_row(cells: &[Cell], width: usize, height: usize, y: usize, out: &mut [Cell]) {
    debug_assert_eq!(out.len(), width);
    debug_assert_eq!(cells.len(), width * height);

    let row_at = |r: usize| &cells[r * width..(r + 1) * width];
    let north = row_at(wrap(y, -1, height));
    let middle = row_at(y);
    let south = row_at(wrap(y, 1, height));

    for (x, slot) in out.iter_mut().enumerate() {
        let west = wrap(x, -1, width);
        let east = wrap(x, 1, width);

        let neighbors = north[west].weight()
            + north[x].weight()
            + north[east].weight()
            + middle[west].weight()
            + middle[east].weight()
            + south[west].weight()
            + south[x].weight()
            + south[east].weight();

        *slot = decide(neighbors);
    }
}
