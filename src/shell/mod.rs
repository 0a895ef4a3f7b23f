//! The floating command terminal.

pub mod commands;
pub mod interpreter;
pub mod matrix;

pub use commands::{lookup, CommandOutput};
pub use interpreter::{EntryBody, Interpreter, ScrollbackEntry};
