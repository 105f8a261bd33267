//! # Command Parsing
//!
//! One command per input line:
//!
//! | Input              | Command                 |
//! |--------------------|-------------------------|
//! | empty line         | advance one generation  |
//! | `1`..=`10000`      | advance that many       |
//! | `r` / `reset`      | new random pattern      |
//! | `h` / `help`       | show help               |
//! | `q` / `quit`       | exit                    |

use torus_core::MAX_STEPS_PER_CALL;

/// A parsed line of user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Empty line: advance one generation.
    Tick,
    /// Numeric input within range: advance a batch.
    Advance(i64),
    /// Numeric input outside `1..=MAX_STEPS_PER_CALL`.
    OutOfRange(i64),
    /// Re-randomize the grid.
    Reset,
    /// Show help.
    Help,
    /// Leave the loop.
    Quit,
    /// Anything else.
    Invalid,
}

impl Command {
    /// Parses one line, ignoring surrounding whitespace.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "" => Self::Tick,
            "q" | "quit" => Self::Quit,
            "r" | "reset" => Self::Reset,
            "h" | "help" => Self::Help,
            other => match other.parse::<i64>() {
                Ok(n) if (1..=MAX_STEPS_PER_CALL).contains(&n) => Self::Advance(n),
                Ok(n) => Self::OutOfRange(n),
                Err(_) => Self::Invalid,
            },
        }
    }
}
