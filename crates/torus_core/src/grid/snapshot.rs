//! # Read-Only Grid Snapshot
//!
//! What renderers are allowed to see: the committed generation, its number,
//! and how many cells are alive. Holding a snapshot borrows the grid, so no
//! step can run while one is alive.

use super::buffer::Cell;

/// Point-in-time view of a committed generation.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    cells: &'a [Cell],
    width: usize,
    height: usize,
    generation: u64,
    alive_count: usize,
}

impl<'a> Snapshot<'a> {
    pub(crate) fn new(cells: &'a [Cell], width: usize, height: usize, generation: u64) -> Self {
        let alive_count = cells.iter().filter(|c| c.is_alive()).count();
        Self {
            cells,
            width,
            height,
            generation,
            alive_count,
        }
    }

    /// Row-major cells of the generation.
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &'a [Cell] {
        self.cells
    }

    /// Cells as bytes (0 = dead, 1 = alive).
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.cells)
    }

    /// Grid width.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Generations completed since the last randomize.
    #[inline]
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of live cells.
    #[inline]
    #[must_use]
    pub const fn alive_count(&self) -> usize {
        self.alive_count
    }

    /// Live cells as a percentage of all cells.
    #[must_use]
    pub fn population_percent(&self) -> f64 {
        self.alive_count as f64 / self.cells.len() as f64 * 100.0
    }

    /// Cell at `(x, y)`, or `None` outside the grid.
    #[inline]
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x < self.width && y < self.height {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// Iterates rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &'a [Cell]> + 'a {
        self.cells.chunks_exact(self.width)
    }
}
