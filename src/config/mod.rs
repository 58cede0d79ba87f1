//! Configuration handed to the hook by its render host.
//!
//! All configuration arrives through environment variables; see
//! [`RenderContext`] for the variables read and how they are parsed.

pub mod context;

pub use context::{parse_input_files, RenderContext, INPUT_FILES_VAR, RENDER_ALL_VAR};
