//! Visual theme and styling.

use console::Style;

/// Styles for hook output.
#[derive(Debug, Clone)]
pub struct HookTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for the message prefix (magenta).
    pub prefix: Style,
    /// Style for commands shown in output (dim italic).
    pub command: Style,
}

impl Default for HookTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl HookTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            prefix: Style::new().magenta(),
            command: Style::new().dim().italic(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            prefix: Style::new(),
            command: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a command line.
    pub fn format_command(&self, cmd: &str) -> String {
        format!(
            "{} {}",
            self.prefix.apply_to("$"),
            self.command.apply_to(cmd)
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let msg = HookTheme::plain().format_success("Installed");
        assert_eq!(msg, "✓ Installed");
    }

    #[test]
    fn theme_formats_warning() {
        let msg = HookTheme::plain().format_warning("Caution");
        assert_eq!(msg, "⚠ Caution");
    }

    #[test]
    fn theme_formats_error() {
        let msg = HookTheme::plain().format_error("Failed");
        assert_eq!(msg, "✗ Failed");
    }

    #[test]
    fn theme_formats_command() {
        let msg = HookTheme::plain().format_command("python3 -m pip install -r requirements.txt");
        assert_eq!(msg, "$ python3 -m pip install -r requirements.txt");
    }

    #[test]
    fn default_impl_matches_new() {
        let default = HookTheme::default();
        let new = HookTheme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }
}
