//! Render context read from the host environment.
//!
//! The render host communicates through two environment variables. They are
//! read exactly once, at process start, into a [`RenderContext`] that is then
//! handed to the decision logic.

use std::env::VarError;
use std::path::PathBuf;

use crate::error::{HookError, Result};

/// Set by the render host when the whole project is being rendered.
pub const RENDER_ALL_VAR: &str = "QUARTO_PROJECT_RENDER_ALL";

/// Newline-separated list of the files rendered in this invocation.
pub const INPUT_FILES_VAR: &str = "QUARTO_PROJECT_INPUT_FILES";

/// What the render host is about to do.
///
/// # Example
///
/// ```
/// use quarto_pip_hook::config::{RenderContext, INPUT_FILES_VAR};
/// use std::env::VarError;
///
/// let ctx = RenderContext::from_lookup(|name| {
///     if name == INPUT_FILES_VAR {
///         Ok("docs/index.qmd\ndocs/about.qmd".to_string())
///     } else {
///         Err(VarError::NotPresent)
///     }
/// })
/// .unwrap();
///
/// assert!(!ctx.render_all);
/// assert_eq!(ctx.input_files.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    /// Whether the host renders the entire project.
    pub render_all: bool,

    /// Files being rendered, in the order the host listed them.
    pub input_files: Vec<PathBuf>,
}

impl RenderContext {
    /// Create a context for rendering specific files.
    pub fn for_files<I, P>(files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            render_all: false,
            input_files: files.into_iter().map(Into::into).collect(),
        }
    }

    /// Read the context from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name))
    }

    /// Read the context through an arbitrary variable lookup.
    ///
    /// The input file list is only required when the host is not rendering
    /// the whole project; with render-all set, an absent list is empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> std::result::Result<String, VarError>,
    {
        let render_all = parse_render_all(lookup(RENDER_ALL_VAR));

        let input_files = match lookup(INPUT_FILES_VAR) {
            Ok(value) => parse_input_files(&value),
            Err(VarError::NotPresent) if render_all => Vec::new(),
            Err(VarError::NotPresent) => {
                return Err(HookError::ConfigurationError {
                    name: INPUT_FILES_VAR.to_string(),
                    message: "not set; this hook must be run by quarto as a pre-render script"
                        .to_string(),
                });
            }
            Err(VarError::NotUnicode(_)) => {
                return Err(HookError::ConfigurationError {
                    name: INPUT_FILES_VAR.to_string(),
                    message: "value is not valid unicode".to_string(),
                });
            }
        };

        tracing::debug!(
            render_all,
            input_count = input_files.len(),
            "Read render context"
        );

        Ok(Self {
            render_all,
            input_files,
        })
    }
}

/// Any non-empty value counts as set, including "0".
fn parse_render_all(value: std::result::Result<String, VarError>) -> bool {
    match value {
        Ok(v) => !v.is_empty(),
        Err(VarError::NotUnicode(_)) => true,
        Err(VarError::NotPresent) => false,
    }
}

/// Split a newline-joined list into paths, dropping empty lines.
///
/// Only line terminators are stripped; spaces are part of the path.
pub fn parse_input_files(value: &str) -> Vec<PathBuf> {
    value
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect()
}
