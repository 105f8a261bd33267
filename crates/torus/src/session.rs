//! # Interactive Session
//!
//! Reads commands line by line, drives the grid, redraws after every change.
//! Generic over its streams so tests can script a whole session in memory.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use torus_core::Grid;

use crate::command::Command;
use crate::render;

/// Help text shown at start-up and on `h`.
pub const HELP: &str = "\
=== TORUS Game of Life ===
Rules:
  - A cell is alive next step if at least 4 of its 8 neighbors are alive
  - Otherwise it is dead, whatever its current state
  - Edges wrap around (the grid is a torus)

Commands:
  <number> - Advance by N time steps (e.g., '10' for 10 steps)
  <Enter>  - Advance by 1 time step
  r        - Reset with new random pattern
  h        - Show this help
  q        - Quit
";

/// Terminal front end over a [`Grid`].
pub struct Session<R, W> {
    grid: Grid,
    input: R,
    output: W,
    /// Emit the clear-screen escape before each redraw.
    clear: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Wraps a ready grid and a pair of streams.
    pub fn new(grid: Grid, input: R, output: W) -> Self {
        Self {
            grid,
            input,
            output,
            clear: true,
        }
    }

    /// Disables the clear-screen escape (useful for logs and tests).
    #[must_use]
    pub fn without_clear(mut self) -> Self {
        self.clear = false;
        self
    }

    /// Consumes the session, returning the grid and output stream.
    pub fn into_parts(self) -> (Grid, W) {
        (self.grid, self.output)
    }

    /// Runs until `q` or end of input.
    ///
    /// # Errors
    ///
    /// I/O failures on either stream, or an engine error.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "TORUS Game of Life - Initializing...")?;
        writeln!(self.output, "Number of threads: {}", self.grid.thread_count())?;

        self.show_help()?;
        self.redraw()?;

        loop {
            write!(self.output, "\nCommand: ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output, "\nExiting...")?;
                return Ok(());
            };

            let command = Command::parse(&line);
            tracing::debug!(?command, "command received");

            match command {
                Command::Tick => {
                    let elapsed = self.grid.step(1)?;
                    self.redraw()?;
                    writeln!(self.output, "Execution time: {elapsed:.3} ms")?;
                }
                Command::Advance(steps) => {
                    writeln!(self.output, "Advancing {steps} steps...")?;
                    let elapsed = self
                        .grid
                        .step(steps)
                        .with_context(|| format!("advancing {steps} steps"))?;
                    self.redraw()?;
                    writeln!(
                        self.output,
                        "Execution time: {elapsed:.3} ms ({:.4} ms/step)",
                        elapsed / steps as f64
                    )?;
                }
                Command::OutOfRange(_) => {
                    writeln!(self.output, "Please enter a number between 1 and 10000.")?;
                }
                Command::Reset => {
                    self.grid.randomize_default()?;
                    self.redraw()?;
                    writeln!(self.output, "Grid reset with new random pattern.")?;
                }
                Command::Help => {
                    self.show_help()?;
                    self.redraw()?;
                }
                Command::Quit => {
                    writeln!(self.output, "Exiting...")?;
                    return Ok(());
                }
                Command::Invalid => {
                    writeln!(self.output, "Invalid command. Type 'h' for help.")?;
                }
            }
        }
    }

    fn show_help(&mut self) -> Result<()> {
        writeln!(self.output)?;
        write!(self.output, "{HELP}")?;
        write!(self.output, "\nPress Enter to continue...")?;
        self.output.flush()?;
        self.read_line()?;
        Ok(())
    }

    fn redraw(&mut self) -> Result<()> {
        render::draw(&mut self.output, &self.grid.snapshot(), self.clear)?;
        Ok(())
    }

    /// Next line without its terminator, or `None` at end of input.
    ///
    /// Bytes that are not UTF-8 are replaced rather than rejected, so a
    /// garbled line parses as [`Command::Invalid`] instead of ending the loop.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut raw = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut raw)
            .context("reading command")?;
        if read == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&raw);
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}
