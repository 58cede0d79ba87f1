//! Recording command runner for testing.
//!
//! `MockRunner` implements [`CommandRunner`] without spawning anything. It
//! records every invocation and answers with a pre-configured exit code.
//!
//! # Example
//!
//! ```
//! use quarto_pip_hook::shell::{CommandRunner, MockRunner};
//!
//! let runner = MockRunner::failing(2);
//! let result = runner.run("python3", &["--version".to_string()]).unwrap();
//!
//! assert!(!result.success);
//! assert_eq!(result.exit_code, Some(2));
//! assert_eq!(runner.invocations().len(), 1);
//! ```

use std::cell::RefCell;
use std::time::Duration;

use crate::error::Result;

use super::command::{CommandResult, CommandRunner};

/// One recorded call to [`MockRunner::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program that would have been executed.
    pub program: String,
    /// Arguments passed to the program.
    pub args: Vec<String>,
}

/// Command runner that records calls instead of executing them.
#[derive(Debug, Default)]
pub struct MockRunner {
    exit_code: i32,
    invocations: RefCell<Vec<Invocation>>,
}

impl MockRunner {
    /// Create a runner whose commands all succeed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner whose commands all exit with `exit_code`.
    pub fn failing(exit_code: i32) -> Self {
        Self {
            exit_code,
            ..Default::default()
        }
    }

    /// All recorded invocations, oldest first.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.borrow().clone()
    }

    /// Whether nothing has been run.
    pub fn is_untouched(&self) -> bool {
        self.invocations.borrow().is_empty()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<CommandResult> {
        self.invocations.borrow_mut().push(Invocation {
            program: program.to_string(),
            args: args.to_vec(),
        });

        if self.exit_code == 0 {
            Ok(CommandResult::success(Duration::ZERO))
        } else {
            Ok(CommandResult::failure(Some(self.exit_code), Duration::ZERO))
        }
    }
}
