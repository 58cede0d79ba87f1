//! Command-line interface.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - The pre-render command and its dispatcher

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::{
    Command, CommandDispatcher, CommandResult, PreRenderCommand, PreRenderOutcome,
};
