//! # Grid Configuration
//!
//! Loaded once at start-up from TOML. Every field is optional; missing
//! fields take the defaults below.
//!
//! ```toml
//! width = 80
//! height = 200
//! density = 0.35
//! threads = 8            # omit to use every core
//! execution = "parallel" # or "sequential"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{LifeError, LifeResult};
use crate::grid::DEFAULT_DENSITY;
use crate::step::{Execution, StepScheduler};

/// Default grid width.
pub const DEFAULT_WIDTH: usize = 80;

/// Default grid height.
pub const DEFAULT_HEIGHT: usize = 200;

/// Grid and scheduler settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LifeConfig {
    /// Columns.
    pub width: usize,
    /// Rows.
    pub height: usize,
    /// Initial fraction of live cells.
    pub density: f64,
    /// Dedicated worker count. `None` uses rayon's global pool.
    pub threads: Option<usize>,
    /// Parallel or sequential evaluation.
    pub execution: Execution,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            density: DEFAULT_DENSITY,
            threads: None,
            execution: Execution::Parallel,
        }
    }
}

impl LifeConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// [`LifeError::InvalidConfig`] for malformed TOML or unknown keys, plus
    /// anything [`LifeConfig::validate`] rejects.
    pub fn from_toml_str(text: &str) -> LifeResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| LifeError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// [`LifeError::InvalidConfig`] if the file cannot be read, plus anything
    /// [`LifeConfig::from_toml_str`] rejects.
    pub fn load(path: impl AsRef<Path>) -> LifeResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| LifeError::InvalidConfig(format!("{}: {e}", path.display())))?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// - [`LifeError::InvalidDimension`] for a zero width or height.
    /// - [`LifeError::InvalidDensity`] for a density outside `[0, 1]`.
    /// - [`LifeError::InvalidConfig`] for zero threads, or threads combined
    ///   with sequential execution.
    pub fn validate(&self) -> LifeResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(LifeError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(LifeError::InvalidDensity(self.density));
        }
        match (self.execution, self.threads) {
            (_, Some(0)) => Err(LifeError::InvalidConfig(
                "threads must be positive".to_string(),
            )),
            (Execution::Sequential, Some(n)) if n > 1 => Err(LifeError::InvalidConfig(format!(
                "threads = {n} conflicts with sequential execution"
            ))),
            _ => Ok(()),
        }
    }

    /// Builds the scheduler these settings describe.
    ///
    /// # Errors
    ///
    /// [`LifeError::ThreadPool`] if a dedicated pool cannot be started.
    pub fn scheduler(&self) -> LifeResult<StepScheduler> {
        match (self.execution, self.threads) {
            (Execution::Sequential, _) => Ok(StepScheduler::sequential()),
            (Execution::Parallel, None) => Ok(StepScheduler::parallel()),
            (Execution::Parallel, Some(n)) => StepScheduler::with_threads(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LifeConfig::default();
        assert_eq!(config.width, 80);
        assert_eq!(config.height, 200);
        assert!((config.density - 0.35).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = LifeConfig::from_toml_str("width = 12\nexecution = \"sequential\"").unwrap();
        assert_eq!(config.width, 12);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.execution, Execution::Sequential);
        assert_eq!(config.scheduler().unwrap().thread_count(), 1);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(LifeConfig::from_toml_str("").unwrap(), LifeConfig::default());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            LifeConfig::from_toml_str("width = 0"),
            Err(LifeError::InvalidDimension { .. })
        ));
        assert!(matches!(
            LifeConfig::from_toml_str("density = 1.5"),
            Err(LifeError::InvalidDensity(_))
        ));
        assert!(matches!(
            LifeConfig::from_toml_str("threads = 0"),
            Err(LifeError::InvalidConfig(_))
        ));
        assert!(matches!(
            LifeConfig::from_toml_str("threads = 4\nexecution = \"sequential\""),
            Err(LifeError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_and_unknown() {
        assert!(matches!(
            LifeConfig::from_toml_str("width = "),
            Err(LifeError::InvalidConfig(_))
        ));
        assert!(matches!(
            LifeConfig::from_toml_str("rule = \"B3/S23\""),
            Err(LifeError::InvalidConfig(_))
        ));
        assert!(matches!(
            LifeConfig::from_toml_str("width = -3"),
            Err(LifeError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = LifeConfig::load("/nonexistent/torus.toml").unwrap_err();
        assert!(matches!(err, LifeError::InvalidConfig(msg) if msg.contains("torus.toml")));
    }

    #[test]
    fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!("torus_config_{}.toml", std::process::id()));
        std::fs::write(&path, "width = 5\nheight = 6\ndensity = 0\n").unwrap();

        let config = LifeConfig::load(&path).unwrap();
        assert_eq!((config.width, config.height), (5, 6));
        assert!(config.density.abs() < f64::EPSILON);

        std::fs::remove_file(&path).ok();
    }
}
