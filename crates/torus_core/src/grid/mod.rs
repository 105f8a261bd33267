//! # Toroidal Grid
//!
//! The single owner of simulation state:
//!
//! ```text
//!   Grid
//!   ├── DoubleBuffer   current / next arenas, O(1) swap
//!   ├── StepScheduler  batch validation, parallel dispatch, timing
//!   └── generation     generations since the last randomize
//! ```
//!
//! Mutating operations take `&mut self` and snapshots borrow `&self`, so a
//! half-computed generation can never be observed and only one batch can be
//! in flight.

pub mod buffer;
pub mod rule;
pub mod snapshot;

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::LifeConfig;
use crate::error::{LifeError, LifeResult};
use crate::step::StepScheduler;

pub use buffer::{Cell, DoubleBuffer};
pub use snapshot::Snapshot;

/// Fraction of cells alive after a default randomize.
pub const DEFAULT_DENSITY: f64 = 0.35;

/// A fixed-size toroidal cellular automaton.
#[derive(Debug)]
pub struct Grid {
    buffers: DoubleBuffer,
    scheduler: StepScheduler,
    generation: u64,
}

impl Grid {
    /// Creates an all-dead grid stepped on rayon's global pool.
    ///
    /// # Errors
    ///
    /// - [`LifeError::InvalidDimension`] if either dimension is zero.
    /// - [`LifeError::AllocationFailure`] if the buffers cannot be allocated.
    pub fn create(width: usize, height: usize) -> LifeResult<Self> {
        Self::with_scheduler(width, height, StepScheduler::default())
    }

    /// Creates an all-dead grid with an explicit scheduler.
    ///
    /// # Errors
    ///
    /// Same as [`Grid::create`].
    pub fn with_scheduler(
        width: usize,
        height: usize,
        scheduler: StepScheduler,
    ) -> LifeResult<Self> {
        let buffers = DoubleBuffer::allocate(width, height)?;

        tracing::info!(
            width,
            height,
            threads = scheduler.thread_count(),
            "grid allocated"
        );

        Ok(Self {
            buffers,
            scheduler,
            generation: 0,
        })
    }

    /// Builds and randomizes a grid from configuration.
    ///
    /// # Errors
    ///
    /// Any validation error of [`LifeConfig::validate`], plus allocation and
    /// thread pool failures.
    pub fn from_config(config: &LifeConfig) -> LifeResult<Self> {
        config.validate()?;
        let mut grid = Self::with_scheduler(config.width, config.height, config.scheduler()?)?;
        grid.randomize(config.density)?;
        Ok(grid)
    }

    /// Creates a grid from a literal pattern, one string per row.
    ///
    /// `X` or `#` is alive, `.` or space is dead. Every row must have the
    /// same length.
    ///
    /// # Errors
    ///
    /// - [`LifeError::InvalidDimension`] for an empty pattern.
    /// - [`LifeError::PatternMismatch`] for ragged rows or unknown characters.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> LifeResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().chars().count());
        let mut grid = Self::create(width, height)?;

        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let len = row.chars().count();
            if len != width {
                return Err(LifeError::PatternMismatch {
                    expected: format!("{width} columns"),
                    found: format!("{len} columns in row {y}"),
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let alive = match ch {
                    'X' | '#' => true,
                    '.' | ' ' => false,
                    other => {
                        return Err(LifeError::PatternMismatch {
                            expected: "'X', '#', '.' or ' '".to_string(),
                            found: format!("{other:?} at ({x}, {y})"),
                        })
                    }
                };
                grid.buffers.current_mut()[y * width + x] = Cell::from_alive(alive);
            }
        }

        Ok(grid)
    }

    /// Grid width.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.buffers.width()
    }

    /// Grid height.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.buffers.height()
    }

    /// Total number of cells.
    #[inline]
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.buffers.len()
    }

    /// Generations completed since the last randomize.
    #[inline]
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Workers used to evaluate a generation.
    #[must_use]
    pub fn thread_count(&self) -> usize {
        self.scheduler.thread_count()
    }

    /// Re-seeds every cell and resets the generation counter.
    ///
    /// The generator is seeded from the wall clock in whole seconds, so two
    /// calls within the same second produce the same layout.
    ///
    /// # Errors
    ///
    /// [`LifeError::InvalidDensity`] if `density` is outside `[0, 1]`.
    pub fn randomize(&mut self, density: f64) -> LifeResult<()> {
        self.randomize_seeded(density, wall_clock_seed())
    }

    /// [`Grid::randomize`] with [`DEFAULT_DENSITY`].
    ///
    /// # Errors
    ///
    /// Never fails in practice; kept fallible to match [`Grid::randomize`].
    pub fn randomize_default(&mut self) -> LifeResult<()> {
        self.randomize(DEFAULT_DENSITY)
    }

    /// Re-seeds every cell from an explicit seed and resets the counter.
    ///
    /// # Errors
    ///
    /// [`LifeError::InvalidDensity`] if `density` is outside `[0, 1]`.
    pub fn randomize_seeded(&mut self, density: f64, seed: u64) -> LifeResult<()> {
        if !(0.0..=1.0).contains(&density) {
            return Err(LifeError::InvalidDensity(density));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        self.buffers.fill_random(&mut rng, density);
        self.generation = 0;

        tracing::info!(density, seed, "grid randomized");
        Ok(())
    }

    /// Sets one cell of the current generation.
    ///
    /// Does not touch the generation counter.
    ///
    /// # Errors
    ///
    /// [`LifeError::PatternMismatch`] if `(x, y)` lies outside the grid.
    pub fn set_alive(&mut self, x: usize, y: usize, alive: bool) -> LifeResult<()> {
        let (width, height) = (self.width(), self.height());
        if x >= width || y >= height {
            return Err(LifeError::PatternMismatch {
                expected: format!("coordinate inside {width}x{height}"),
                found: format!("({x}, {y})"),
            });
        }
        self.buffers.current_mut()[y * width + x] = Cell::from_alive(alive);
        Ok(())
    }

    /// Advances `steps` generations and returns the batch's elapsed
    /// wall-clock time in milliseconds.
    ///
    /// # Errors
    ///
    /// [`LifeError::InvalidStepCount`] unless `1 <= steps <= 10000`; the
    /// grid and counter are then left untouched.
    pub fn step(&mut self, steps: i64) -> LifeResult<f64> {
        match self
            .scheduler
            .run(&mut self.buffers, &mut self.generation, steps)
        {
            Ok(elapsed_ms) => {
                tracing::debug!(
                    steps,
                    elapsed_ms,
                    generation = self.generation,
                    "batch complete"
                );
                Ok(elapsed_ms)
            }
            Err(e) => {
                tracing::warn!(steps, "batch rejected: {e}");
                Err(e)
            }
        }
    }

    /// Read-only view of the committed generation.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(
            self.buffers.current(),
            self.width(),
            self.height(),
            self.generation,
        )
    }
}

fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}
