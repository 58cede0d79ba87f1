//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show informational messages, warnings and errors.
    #[default]
    Normal,
    /// Show warnings and errors only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows informational and success messages.
    pub fn shows_info(&self) -> bool {
        matches!(self, Self::Normal)
    }
}
