//! # Step Scheduler
//!
//! Drives batches of generations over a [`DoubleBuffer`]:
//!
//! ```text
//! step(n):
//!   validate n ──✗──> InvalidStepCount (nothing runs)
//!       │
//!   start clock
//!   repeat n:
//!   ┌───────────────────────────────────────────────┐
//!   │ 1. EVALUATE  rows of next ← rule(current)     │  rayon fork
//!   │ 2. BARRIER   all rows written                  │  rayon join
//!   │ 3. SWAP      next becomes current              │
//!   │ 4. COUNT     generation += 1                   │
//!   └───────────────────────────────────────────────┘
//!   stop clock ──> elapsed milliseconds for the whole batch
//! ```
//!
//! Every worker reads the frozen current arena and writes whole rows of the
//! next arena. Rows are disjoint `&mut` chunks, so no locking is needed and
//! the result does not depend on how rows are distributed.

use std::time::Instant;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::Deserialize;

use crate::error::{LifeError, LifeResult};
use crate::grid::buffer::DoubleBuffer;
use crate::grid::rule::evaluate_row;

/// Largest batch accepted by a single `step` call.
pub const MAX_STEPS_PER_CALL: i64 = 10_000;

/// How cell evaluation is dispatched within a generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Execution {
    /// Rows are evaluated on a rayon pool.
    #[default]
    Parallel,
    /// Rows are evaluated in order on the calling thread.
    Sequential,
}

/// Runs validated batches of generations.
pub struct StepScheduler {
    execution: Execution,
    /// Dedicated pool. `None` uses rayon's global pool.
    pool: Option<ThreadPool>,
}

impl std::fmt::Debug for StepScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepScheduler")
            .field("execution", &self.execution)
            .field("threads", &self.thread_count())
            .finish()
    }
}

impl Default for StepScheduler {
    fn default() -> Self {
        Self::parallel()
    }
}

impl StepScheduler {
    /// Parallel scheduler on rayon's global pool.
    #[must_use]
    pub const fn parallel() -> Self {
        Self {
            execution: Execution::Parallel,
            pool: None,
        }
    }

    /// Single-threaded scheduler.
    #[must_use]
    pub const fn sequential() -> Self {
        Self {
            execution: Execution::Sequential,
            pool: None,
        }
    }

    /// Parallel scheduler on a dedicated pool of `threads` workers.
    ///
    /// # Errors
    ///
    /// - [`LifeError::InvalidConfig`] if `threads` is zero.
    /// - [`LifeError::ThreadPool`] if the pool cannot be started.
    pub fn with_threads(threads: usize) -> LifeResult<Self> {
        if threads == 0 {
            return Err(LifeError::InvalidConfig(
                "threads must be positive".to_string(),
            ));
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("torus-step-{i}"))
            .build()
            .map_err(|e| LifeError::ThreadPool(e.to_string()))?;

        Ok(Self {
            execution: Execution::Parallel,
            pool: Some(pool),
        })
    }

    /// Dispatch mode.
    #[inline]
    #[must_use]
    pub const fn execution(&self) -> Execution {
        self.execution
    }

    /// Number of workers that evaluate a generation.
    #[must_use]
    pub fn thread_count(&self) -> usize {
        match (self.execution, &self.pool) {
            (Execution::Sequential, _) => 1,
            (Execution::Parallel, Some(pool)) => pool.current_num_threads(),
            (Execution::Parallel, None) => rayon::current_num_threads(),
        }
    }

    /// Checks a requested batch size.
    ///
    /// # Errors
    ///
    /// [`LifeError::InvalidStepCount`] unless `1 <= steps <= MAX_STEPS_PER_CALL`.
    pub fn validate(steps: i64) -> LifeResult<u32> {
        if (1..=MAX_STEPS_PER_CALL).contains(&steps) {
            Ok(steps as u32)
        } else {
            Err(LifeError::InvalidStepCount(steps))
        }
    }

    /// Advances `buffers` by `steps` generations, bumping `generation` once
    /// per committed generation.
    ///
    /// Returns wall-clock milliseconds for the whole batch. The batch is
    /// rejected before any work if `steps` is out of range; once started it
    /// always runs to completion.
    ///
    /// # Errors
    ///
    /// [`LifeError::InvalidStepCount`] for an out-of-range batch size.
    pub fn run(
        &self,
        buffers: &mut DoubleBuffer,
        generation: &mut u64,
        steps: i64,
    ) -> LifeResult<f64> {
        let steps = Self::validate(steps)?;

        let start = Instant::now();
        for _ in 0..steps {
            self.evaluate(buffers);
            buffers.swap();
            *generation += 1;
        }
        Ok(start.elapsed().as_secs_f64() * 1000.0)
    }

    /// Fills the next arena from the current one. Returns only after every
    /// row has been written.
    fn evaluate(&self, buffers: &mut DoubleBuffer) {
        let width = buffers.width();
        let height = buffers.height();
        let (current, next) = buffers.split();

        match self.execution {
            Execution::Sequential => {
                for (y, row) in next.chunks_mut(width).enumerate() {
                    evaluate_row(current, width, height, y, row);
                }
            }
            Execution::Parallel => {
                let mut work = move || {
                    next.par_chunks_mut(width)
                        .enumerate()
                        .for_each(|(y, row)| evaluate_row(current, width, height, y, row));
                };
                match &self.pool {
                    Some(pool) => pool.install(work),
                    None => work(),
                }
            }
        }
    }
}
