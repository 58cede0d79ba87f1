//! Plain-text UI for when the hook runs under the render host.

use super::{OutputMode, UserInterface};

/// UI implementation that writes unstyled lines.
///
/// This is the UI used in practice: the render host captures the hook's
/// stdout, so there is no terminal to style.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_info() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_info() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        println!("⚠ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn command(&mut self, cmd: &str) {
        if self.mode.shows_info() {
            println!("$ {}", cmd);
        }
    }
}
