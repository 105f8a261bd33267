//! # TORUS Core Engine
//!
//! Double-buffered cellular automaton on a fixed-size torus:
//! - Two flat cell arenas, committed by an O(1) index swap
//! - Eight-neighbor threshold rule with wraparound edges
//! - Batched, timed, data-parallel generation stepping
//!
//! ## Architecture Rules
//!
//! 1. **No allocation inside a generation** - both arenas exist from creation
//! 2. **No partial generations** - `step` is rejected upfront or runs to completion
//! 3. **No locks** - workers read the frozen arena and write disjoint rows
//!
//! ## Example
//!
//! ```rust
//! use torus_core::Grid;
//!
//! let mut grid = Grid::create(80, 200)?;
//! grid.randomize(0.35)?;
//! let elapsed_ms = grid.step(10)?;
//!
//! let snap = grid.snapshot();
//! assert_eq!(snap.generation(), 10);
//! println!("{:.2}% alive after {elapsed_ms:.3} ms", snap.population_percent());
//! # Ok::<(), torus_core::LifeError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod config;
pub mod error;
pub mod grid;
pub mod step;

pub use config::LifeConfig;
pub use error::{LifeError, LifeResult};
pub use grid::{Cell, DoubleBuffer, Grid, Snapshot, DEFAULT_DENSITY};
pub use step::{Execution, StepScheduler, MAX_STEPS_PER_CALL};
