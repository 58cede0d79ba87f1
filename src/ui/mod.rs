//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for styled output on a TTY
//! - [`NonInteractiveUI`] for plain output when run by the render host
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use quarto_pip_hook::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(OutputMode::Quiet);
//! ui.message("Nothing to install");
//! ui.warning("Multiple manifests found");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, HookTheme};

/// Trait for user-facing output.
///
/// Informational output goes to stdout; errors go to stderr. Warnings and
/// errors are shown in every output mode.
pub trait UserInterface {
    /// Display an informational message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a command that is about to run, or would run.
    fn command(&mut self, cmd: &str);
}
