//! quarto-pip-hook - install a rendered document's Python requirements.
//!
//! A Quarto pre-render hook. Before Quarto renders specific files, it looks
//! for a `requirements.txt` beside them and, when exactly one exists, runs
//! `pip install -r` on it. Whole-project renders, missing manifests and
//! conflicting manifests are all reported and skipped.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and the pre-render command
//! - [`config`] - Render context read from the host environment
//! - [`detection`] - Manifest discovery beside rendered files
//! - [`error`] - Error types and result aliases
//! - [`requirements`] - pip invocation
//! - [`shell`] - Subprocess execution behind a mockable runner
//! - [`ui`] - User-facing output
//!
//! # Example
//!
//! ```
//! use quarto_pip_hook::cli::{PreRenderCommand, PreRenderOutcome};
//! use quarto_pip_hook::config::RenderContext;
//! use quarto_pip_hook::requirements::PipInstaller;
//! use quarto_pip_hook::shell::MockRunner;
//! use quarto_pip_hook::ui::MockUI;
//!
//! let runner = MockRunner::new();
//! let mut ui = MockUI::new();
//! let context = RenderContext::for_files(["does/not/exist/index.qmd"]);
//!
//! let outcome = PreRenderCommand::new(context, PipInstaller::default(), &runner)
//!     .run(&mut ui)
//!     .unwrap();
//!
//! assert_eq!(outcome, PreRenderOutcome::NothingToInstall);
//! assert!(runner.is_untouched());
//! ```

pub mod cli;
pub mod config;
pub mod detection;
pub mod error;
pub mod requirements;
pub mod shell;
pub mod ui;

pub use error::{HookError, Result};
