//! # TORUS Interactive Simulator
//!
//! Usage:
//! ```text
//! torus [--config <path>] [--width N] [--height N] [--density D]
//!       [--threads N | --sequential] [--verbose]
//! ```
//!
//! Logs go to stderr so they never interleave with the drawn grid.

use std::io;

use anyhow::Result;
use clap::Parser;
use torus::{Args, Session};
use torus_core::Grid;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = args.resolve()?;
    tracing::info!(?config, "starting");

    let grid = Grid::from_config(&config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(grid, stdin.lock(), stdout.lock()).run()
}
