//! # Command-Line Arguments
//!
//! Flags override values from `--config`, which overrides the built-in
//! defaults.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use torus_core::{Execution, LifeConfig};

/// Interactive toroidal cellular automaton.
#[derive(Debug, Parser)]
#[command(name = "torus", version, about = "Toroidal threshold-rule life simulator")]
pub struct Args {
    /// TOML configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Grid width in cells.
    #[arg(long)]
    pub width: Option<usize>,

    /// Grid height in cells.
    #[arg(long)]
    pub height: Option<usize>,

    /// Initial fraction of live cells, 0 to 1.
    #[arg(long)]
    pub density: Option<f64>,

    /// Dedicated worker threads (default: every core).
    #[arg(long, conflicts_with = "sequential")]
    pub threads: Option<usize>,

    /// Evaluate generations on the calling thread only.
    #[arg(long)]
    pub sequential: bool,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Resolves the effective configuration.
    ///
    /// # Errors
    ///
    /// Unreadable or invalid configuration file, or invalid merged values.
    pub fn resolve(&self) -> Result<LifeConfig> {
        let mut config = match &self.config {
            Some(path) => LifeConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => LifeConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(density) = self.density {
            config.density = density;
        }
        if let Some(threads) = self.threads {
            config.threads = Some(threads);
            config.execution = Execution::Parallel;
        }
        if self.sequential {
            config.execution = Execution::Sequential;
            config.threads = None;
        }

        config.validate().context("invalid settings")?;
        Ok(config)
    }
}
