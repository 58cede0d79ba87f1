//! External command execution.

pub mod command;
pub mod mock;

pub use command::{display_command, CommandResult, CommandRunner, SystemRunner};
pub use mock::{Invocation, MockRunner};
