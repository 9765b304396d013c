//! CLI front end
//!
//! This module contains the interactive loop that bridges terminal input
//! with the command dispatcher.

pub mod repl;

pub use repl::{parse_input, run as run_repl};
