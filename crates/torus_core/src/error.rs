//! # Engine Error Types
//!
//! All errors that can occur while building or stepping a grid.

use thiserror::Error;

/// Errors that can occur in the generation engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LifeError {
    /// A grid dimension was zero.
    #[error("invalid dimension: {width}x{height} (both must be positive)")]
    InvalidDimension {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// Step count outside `1..=MAX_STEPS_PER_CALL`. No generation was run.
    #[error("invalid step count: {0} (must be between 1 and 10000)")]
    InvalidStepCount(i64),

    /// Cell buffers could not be allocated.
    #[error("allocation failure: cannot reserve two buffers of {cells} cells")]
    AllocationFailure {
        /// Cells requested per buffer (saturated on overflow).
        cells: usize,
    },

    /// Initial density outside `[0, 1]`.
    #[error("invalid density: {0} (must be within [0, 1])")]
    InvalidDensity(f64),

    /// Invalid configuration file or value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Dedicated worker pool could not be started.
    #[error("thread pool: {0}")]
    ThreadPool(String),

    /// Literal pattern does not match the grid shape.
    #[error("pattern mismatch: expected {expected}, found {found}")]
    PatternMismatch {
        /// What the grid requires.
        expected: String,
        /// What the pattern supplied.
        found: String,
    },
}

/// Result type for engine operations.
pub type LifeResult<T> = Result<T, LifeError>;
