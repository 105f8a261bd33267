//! # TORUS Front End
//!
//! Terminal wrapper around [`torus_core`]: argument handling, line commands,
//! ASCII drawing. All simulation work happens in the core crate.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]

pub mod cli;
pub mod command;
pub mod render;
pub mod session;

pub use cli::Args;
pub use command::Command;
pub use session::Session;
