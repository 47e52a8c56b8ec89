//! External command execution.

pub mod command;

pub use command::{execute, CommandOutput};
