//! Text boundary around the referee.
//!
//! The referee returns plain data. This module prompts for moves on any
//! `BufRead`, renders reports on any `Write`, and is what the binary wires
//! to stdin and stdout.

pub mod driver;
pub mod error;
pub mod render;

pub use driver::run_match;
pub use error::ConsoleError;
