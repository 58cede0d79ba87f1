//! Error types for the pre-render hook.
//!
//! This module defines [`HookError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `HookError` for failures the render host must see as a failed step
//! - Finding several manifests is not an error; it is reported as a warning

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for hook operations.
#[derive(Debug, Error)]
pub enum HookError {
    /// A required environment variable is missing or unreadable.
    #[error("Invalid environment variable {name}: {message}")]
    ConfigurationError { name: String, message: String },

    /// The package installer exited with a non-zero status.
    #[error(
        "Failed to install requirements from {} (exit code {})",
        manifest.display(),
        code.map_or_else(|| "unknown".to_string(), |c| c.to_string())
    )]
    InstallationError {
        manifest: PathBuf,
        code: Option<i32>,
    },

    /// The installer process could not be started.
    #[error("Failed to start `{command}`: {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

impl HookError {
    /// Process exit code to report for this error.
    ///
    /// An installer failure passes its own exit code through when it fits in
    /// a process status; everything else exits with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InstallationError {
                code: Some(code), ..
            } => u8::try_from(*code).ok().filter(|c| *c != 0).unwrap_or(1),
            _ => 1,
        }
    }
}

/// Result type alias for hook operations.
pub type Result<T> = std::result::Result<T, HookError>;
