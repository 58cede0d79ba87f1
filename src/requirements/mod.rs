//! Python requirements installation.

pub mod installer;

pub use installer::{default_python, PipInstaller, PYTHON_ENV_VAR};
