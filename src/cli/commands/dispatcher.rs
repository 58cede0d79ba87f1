//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for wiring parsed arguments to a command

use crate::cli::args::Cli;
use crate::config::RenderContext;
use crate::error::Result;
use crate::requirements::PipInstaller;
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

use super::prerender::PreRenderCommand;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Builds the pre-render command from parsed arguments and runs it.
pub struct CommandDispatcher<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> CommandDispatcher<'a> {
    /// Create a dispatcher whose installs go through `runner`.
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }

    /// Read the render context from the environment and dispatch.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let context = RenderContext::from_env()?;
        self.dispatch_with_context(cli, context, ui)
    }

    /// Dispatch with an already-built render context.
    pub fn dispatch_with_context(
        &self,
        cli: &Cli,
        context: RenderContext,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let installer = cli
            .python
            .as_deref()
            .map(PipInstaller::new)
            .unwrap_or_default();

        PreRenderCommand::new(context, installer, self.runner)
            .dry_run(cli.dry_run)
            .execute(ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MockRunner;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn dispatch_uses_configured_python() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("requirements.txt"), "numpy\n").unwrap();

        let runner = MockRunner::new();
        let mut ui = MockUI::new();
        let cli = Cli {
            python: Some("/opt/python/bin/python".to_string()),
            ..Default::default()
        };
        let context = RenderContext::for_files([temp.path().join("index.qmd")]);

        let result = CommandDispatcher::new(&runner)
            .dispatch_with_context(&cli, context, &mut ui)
            .unwrap();

        assert!(result.success);
        let calls = runner.invocations();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].program, "/opt/python/bin/python");
    }

    #[test]
    fn dispatch_honors_dry_run() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("requirements.txt"), "numpy\n").unwrap();

        let runner = MockRunner::new();
        let mut ui = MockUI::new();
        let cli = Cli {
            dry_run: true,
            ..Default::default()
        };
        let context = RenderContext::for_files([temp.path().join("index.qmd")]);

        CommandDispatcher::new(&runner)
            .dispatch_with_context(&cli, context, &mut ui)
            .unwrap();

        assert!(runner.is_untouched());
        assert_eq!(ui.commands().len(), 1);
    }
}
