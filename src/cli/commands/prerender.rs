//! The pre-render command: install the requirements beside rendered files.

use std::path::{Path, PathBuf};

use crate::config::RenderContext;
use crate::detection::{ManifestDetector, ManifestDiscovery};
use crate::error::Result;
use crate::requirements::PipInstaller;
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// What the pre-render command decided to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreRenderOutcome {
    /// The whole project is being rendered; nothing was installed.
    SkippedRenderAll,
    /// No manifest exists beside the rendered files.
    NothingToInstall,
    /// More than one manifest exists; nothing was installed.
    Ambiguous(Vec<PathBuf>),
    /// The manifest would have been installed, but this is a dry run.
    DryRun(PathBuf),
    /// The manifest was installed.
    Installed(PathBuf),
}

/// The pre-render command implementation.
pub struct PreRenderCommand<'a, F = fn(&Path) -> bool> {
    context: RenderContext,
    detector: ManifestDetector<F>,
    installer: PipInstaller,
    runner: &'a dyn CommandRunner,
    dry_run: bool,
}

impl<'a> PreRenderCommand<'a> {
    /// Create the command, checking the real filesystem for manifests.
    pub fn new(
        context: RenderContext,
        installer: PipInstaller,
        runner: &'a dyn CommandRunner,
    ) -> Self {
        Self::with_detector(context, ManifestDetector::new(), installer, runner)
    }
}

impl<'a, F> PreRenderCommand<'a, F>
where
    F: Fn(&Path) -> bool,
{
    /// Create the command with a custom manifest detector.
    pub fn with_detector(
        context: RenderContext,
        detector: ManifestDetector<F>,
        installer: PipInstaller,
        runner: &'a dyn CommandRunner,
    ) -> Self {
        Self {
            context,
            detector,
            installer,
            runner,
            dry_run: false,
        }
    }

    /// Only report the install command instead of running it.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Decide what to do, report it, and install if appropriate.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<PreRenderOutcome> {
        if self.context.render_all {
            ui.message(
                "Not rendering a specific file, so will not install requirements. Exiting.",
            );
            return Ok(PreRenderOutcome::SkippedRenderAll);
        }

        match self.detector.detect(&self.context.input_files) {
            ManifestDiscovery::NotFound => {
                ui.message("No python requirements to be installed. Exiting.");
                Ok(PreRenderOutcome::NothingToInstall)
            }
            ManifestDiscovery::Ambiguous(manifests) => {
                let listed: Vec<String> = manifests
                    .iter()
                    .map(|m| m.display().to_string())
                    .collect();
                ui.warning(&format!(
                    "Multiple python requirements files found ({}). Installing all of them might cause conflicts, so none will be installed. Exiting.",
                    listed.join(", ")
                ));
                Ok(PreRenderOutcome::Ambiguous(manifests))
            }
            ManifestDiscovery::Found(manifest) => self.install(manifest, ui),
        }
    }

    fn install(&self, manifest: PathBuf, ui: &mut dyn UserInterface) -> Result<PreRenderOutcome> {
        let command_line = self.installer.command_line(&manifest);

        if self.dry_run {
            ui.message(&format!(
                "Would install requirements from {} (dry run)",
                manifest.display()
            ));
            ui.command(&command_line);
            return Ok(PreRenderOutcome::DryRun(manifest));
        }

        ui.message(&format!(
            "Installing requirements from {}",
            manifest.display()
        ));
        ui.command(&command_line);

        self.installer.install(&manifest, self.runner)?;

        ui.success(&format!(
            "Installed requirements from {}",
            manifest.display()
        ));
        Ok(PreRenderOutcome::Installed(manifest))
    }
}

impl<F> Command for PreRenderCommand<'_, F>
where
    F: Fn(&Path) -> bool,
{
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let outcome = self.run(ui)?;
        tracing::debug!(?outcome, "Pre-render hook finished");
        Ok(CommandResult::success())
    }
}
