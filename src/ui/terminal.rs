//! Styled terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, HookTheme, NonInteractiveUI, OutputMode, UserInterface};

/// UI for an interactive terminal, with colors when enabled.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: HookTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            HookTheme::new()
        } else {
            HookTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_info() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_info() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.out, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn command(&mut self, cmd: &str) {
        if self.mode.shows_info() {
            writeln!(self.out, "{}", self.theme.format_command(cmd)).ok();
        }
    }
}

/// Create the appropriate UI for where stdout goes.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    if Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
