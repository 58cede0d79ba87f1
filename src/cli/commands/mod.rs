//! CLI command implementations.
//!
//! Commands implement the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. The hook has a
//! single command, [`PreRenderCommand`], wired up by [`CommandDispatcher`].

pub mod dispatcher;
pub mod prerender;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use prerender::{PreRenderCommand, PreRenderOutcome};
