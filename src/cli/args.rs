//! CLI argument definitions.
//!
//! The render host runs the hook without arguments; every flag here is
//! optional and the defaults give the standard pre-render behavior.

use clap::Parser;

use crate::requirements::PYTHON_ENV_VAR;
use crate::ui::OutputMode;

/// Install a rendered document's Python requirements before Quarto renders it.
///
/// Reads QUARTO_PROJECT_RENDER_ALL and QUARTO_PROJECT_INPUT_FILES from the
/// environment and runs `pip install -r` on the single requirements.txt
/// found beside the rendered files.
#[derive(Debug, Default, Parser)]
#[command(name = "quarto-pip-hook")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Python interpreter used to run pip
    #[arg(long, value_name = "PATH", env = PYTHON_ENV_VAR)]
    pub python: Option<String>,

    /// Show the install command without running it
    #[arg(long)]
    pub dry_run: bool,

    /// Only show warnings and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Output mode selected by the flags.
    pub fn output_mode(&self) -> OutputMode {
        if self.quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_gives_defaults() {
        let cli = Cli::try_parse_from(["quarto-pip-hook"]).unwrap();
        assert!(!cli.dry_run);
        assert!(!cli.quiet);
        assert!(!cli.debug);
        assert_eq!(cli.output_mode(), OutputMode::Normal);
    }

    #[test]
    fn parses_python_and_dry_run() {
        let cli = Cli::try_parse_from([
            "quarto-pip-hook",
            "--python",
            "/usr/bin/python3.12",
            "--dry-run",
        ])
        .unwrap();
        assert_eq!(cli.python.as_deref(), Some("/usr/bin/python3.12"));
        assert!(cli.dry_run);
    }

    #[test]
    fn quiet_selects_quiet_mode() {
        let cli = Cli::try_parse_from(["quarto-pip-hook", "-q"]).unwrap();
        assert_eq!(cli.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["quarto-pip-hook", "extra"]).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
