//! Installing a requirements manifest with pip.

use std::path::Path;

use crate::error::{HookError, Result};
use crate::shell::{display_command, CommandRunner};

/// Environment variable the render host uses to select its Python.
pub const PYTHON_ENV_VAR: &str = "QUARTO_PYTHON";

/// Interpreter used when none is configured.
pub fn default_python() -> &'static str {
    if cfg!(target_os = "windows") {
        "python"
    } else {
        "python3"
    }
}

/// Installs requirements by running `<python> -m pip install -r <manifest>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipInstaller {
    python: String,
}

impl Default for PipInstaller {
    fn default() -> Self {
        Self::new(default_python())
    }
}

impl PipInstaller {
    /// Create an installer that runs pip through `python`.
    pub fn new(python: impl Into<String>) -> Self {
        Self {
            python: python.into(),
        }
    }

    /// The interpreter pip runs under.
    pub fn python(&self) -> &str {
        &self.python
    }

    /// Arguments passed to the interpreter for `manifest`.
    pub fn args(&self, manifest: &Path) -> Vec<String> {
        vec![
            "-m".to_string(),
            "pip".to_string(),
            "install".to_string(),
            "-r".to_string(),
            manifest.to_string_lossy().into_owned(),
        ]
    }

    /// The full install command, for display.
    pub fn command_line(&self, manifest: &Path) -> String {
        display_command(&self.python, &self.args(manifest))
    }

    /// Install `manifest`, blocking until pip exits.
    ///
    /// Fails with [`HookError::InstallationError`] if pip exits non-zero.
    pub fn install(&self, manifest: &Path, runner: &dyn CommandRunner) -> Result<()> {
        tracing::debug!(python = %self.python, manifest = %manifest.display(), "Installing requirements");

        let result = runner.run(&self.python, &self.args(manifest))?;

        if result.success {
            tracing::debug!(duration = ?result.duration, "pip install finished");
            Ok(())
        } else {
            Err(HookError::InstallationError {
                manifest: manifest.to_path_buf(),
                code: result.exit_code,
            })
        }
    }
}
