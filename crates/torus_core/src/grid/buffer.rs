//! # Double-Buffered Cell Storage
//!
//! Two flat, row-major arenas of identical size plus an index naming the
//! current one. The other arena is scratch space for the generation being
//! computed and is never handed out for reading.
//!
//! ```text
//!   ┌──────────────┐   ┌──────────────┐
//!   │   arena 0    │   │   arena 1    │
//!   └──────┬───────┘   └──────┬───────┘
//!          │                  │
//!          └──── current ─────┘   (0 or 1, toggled by swap)
//! ```
//!
//! Swapping is a single XOR; no cells are copied.

use bytemuck::{Pod, Zeroable};
use rand::Rng;

use crate::error::{LifeError, LifeResult};

/// State of a single cell.
///
/// One byte holding `0` (dead) or `1` (alive), so neighbor sums are plain
/// byte additions and whole buffers can be viewed as `&[u8]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct Cell(u8);

impl Cell {
    /// A dead cell.
    pub const DEAD: Self = Self(0);
    /// A living cell.
    pub const ALIVE: Self = Self(1);

    /// Builds a cell from a liveness flag.
    #[inline]
    #[must_use]
    pub const fn from_alive(alive: bool) -> Self {
        Self(alive as u8)
    }

    /// Returns whether the cell is alive.
    #[inline]
    #[must_use]
    pub const fn is_alive(self) -> bool {
        self.0 != 0
    }

    /// Contribution of this cell to a neighbor sum (0 or 1).
    #[inline]
    #[must_use]
    pub const fn weight(self) -> u8 {
        self.0
    }
}

/// Two same-sized cell arenas with an O(1) role swap.
#[derive(Debug)]
pub struct DoubleBuffer {
    /// The two arenas, each `width * height` cells.
    buffers: [Box<[Cell]>; 2],
    /// Index of the current (readable) arena. Next is `current ^ 1`.
    current: usize,
    width: usize,
    height: usize,
}

impl DoubleBuffer {
    /// Allocates both arenas with every cell dead.
    ///
    /// # Errors
    ///
    /// - [`LifeError::InvalidDimension`] if either dimension is zero.
    /// - [`LifeError::AllocationFailure`] if `width * height` overflows or
    ///   the memory cannot be reserved.
    pub fn allocate(width: usize, height: usize) -> LifeResult<Self> {
        if width == 0 || height == 0 {
            return Err(LifeError::InvalidDimension { width, height });
        }

        let len = width
            .checked_mul(height)
            .ok_or(LifeError::AllocationFailure { cells: usize::MAX })?;

        Ok(Self {
            buffers: [alloc_dead(len)?, alloc_dead(len)?],
            current: 0,
            width,
            height,
        })
    }

    /// Grid width in cells.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Cells per arena.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffers[0].len()
    }

    /// Always false: zero-sized grids are rejected at allocation.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffers[0].is_empty()
    }

    /// Index (0 or 1) of the current arena.
    #[inline]
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    /// The current generation's cells.
    #[inline]
    #[must_use]
    pub fn current(&self) -> &[Cell] {
        &self.buffers[self.current]
    }

    /// Mutable access to the current generation, for seeding and pattern loads.
    #[inline]
    pub fn current_mut(&mut self) -> &mut [Cell] {
        &mut self.buffers[self.current]
    }

    /// Splits into the frozen current arena and the writable next arena.
    ///
    /// The borrows are disjoint, so the next arena can be filled in parallel
    /// while every worker reads the current one.
    #[inline]
    pub fn split(&mut self) -> (&[Cell], &mut [Cell]) {
        let [first, second] = &mut self.buffers;
        if self.current == 0 {
            (&**first, &mut **second)
        } else {
            (&**second, &mut **first)
        }
    }

    /// Commits the next arena as current.
    ///
    /// Call exactly once per completed generation, after every cell of the
    /// next arena has been written.
    #[inline]
    pub fn swap(&mut self) {
        self.current ^= 1;
    }

    /// The current generation as raw bytes (0 = dead, 1 = alive).
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.current())
    }

    /// Sets every current cell alive with independent probability `density`.
    ///
    /// Draws one uniform `f64` in `[0, 1)` per cell, row-major.
    pub fn fill_random<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        for cell in self.current_mut() {
            *cell = Cell::from_alive(rng.gen::<f64>() < density);
        }
    }
}

fn alloc_dead(len: usize) -> LifeResult<Box<[Cell]>> {
    let mut cells = Vec::new();
    cells
        .try_reserve_exact(len)
        .map_err(|_| LifeError::AllocationFailure { cells: len })?;
    cells.resize(len, Cell::DEAD);
    Ok(cells.into_boxed_slice())
}
