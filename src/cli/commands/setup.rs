//! Setup command implementation.
//!
//! The `toolbox setup` command installs the `shell-init` line into the
//! user's shell rc file so every new shell picks up the project tools.

use std::path::{Path, PathBuf};

use anyhow::anyhow;

use crate::cli::args::SetupArgs;
use crate::config::{ensure_prefix, load_config, resolve_prefix, ToolboxConfig};
use crate::error::Result;
use crate::prompt::Theme;
use crate::shell::{init_line, prefix_dirs, Dialect, RcFile, RcUpdate};
use crate::ui::{Prompt, PromptOption, PromptType, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The setup command implementation.
pub struct SetupCommand {
    project_root: Option<PathBuf>,
    args: SetupArgs,
    prefix: Option<PathBuf>,
    binary: Option<PathBuf>,
}

impl SetupCommand {
    /// Create a new setup command.
    pub fn new(project_root: Option<&Path>, args: SetupArgs) -> Self {
        Self {
            project_root: project_root.map(Path::to_path_buf),
            args,
            prefix: None,
            binary: None,
        }
    }

    /// Use `prefix` instead of the configured install prefix.
    pub fn with_prefix(mut self, prefix: Option<PathBuf>) -> Self {
        self.prefix = prefix;
        self
    }

    /// Use `binary` in the rc line instead of the running executable.
    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = Some(binary.into());
        self
    }

    fn binary(&self) -> Result<PathBuf> {
        match &self.binary {
            Some(binary) => Ok(binary.clone()),
            None => Ok(std::env::current_exe()?),
        }
    }

    fn rc_file(&self, dialect: Dialect) -> Result<RcFile> {
        match &self.args.rc_file {
            Some(path) => Ok(RcFile::new(path)),
            None => RcFile::for_dialect(dialect),
        }
    }

    fn choose_theme(&self, ui: &mut dyn UserInterface, config: &ToolboxConfig) -> Result<Theme> {
        if let Some(theme) = self.args.theme {
            return Ok(theme);
        }
        if !ui.is_interactive() {
            return Ok(config.theme);
        }

        let options = Theme::ALL
            .iter()
            .map(|theme| PromptOption {
                label: theme.name().to_string(),
                value: theme.name().to_string(),
            })
            .collect();

        let answer = ui.prompt(&Prompt {
            key: "theme".to_string(),
            question: "Prompt theme".to_string(),
            prompt_type: PromptType::Select { options },
            default: Some(config.theme.name().to_string()),
        })?;

        Ok(answer.as_string().parse().unwrap_or(config.theme))
    }

    fn confirm(&self, ui: &mut dyn UserInterface, rc: &RcFile) -> Result<bool> {
        if self.args.yes {
            return Ok(true);
        }

        let answer = ui.prompt(&Prompt {
            key: "confirm_setup".to_string(),
            question: format!("Add toolbox to {}?", rc.path().display()),
            prompt_type: PromptType::Confirm,
            default: Some("yes".to_string()),
        })?;

        Ok(answer.as_bool().unwrap_or(false))
    }
}

impl Command for SetupCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let root = self
            .project_root
            .as_deref()
            .ok_or_else(|| anyhow!("Cannot determine the project root; pass --project <dir>"))?;

        let config = load_config(root)?;
        let theme = self.choose_theme(ui, &config)?;
        let dialect = self.args.shell.unwrap_or_else(Dialect::detect);
        let rc = self.rc_file(dialect)?;

        let prefix = match &self.prefix {
            Some(prefix) => resolve_prefix(root, &prefix.to_string_lossy()),
            None => resolve_prefix(root, &config.prefix),
        };
        ensure_prefix(&prefix)?;
        let prefix_bin = prefix.join("bin");
        if !prefix_dirs(root).contains(&prefix_bin) {
            ui.warning(&format!(
                "{} is not added to PATH by shell-init; link its tools into {}",
                prefix_bin.display(),
                root.join(".tools").join("bin").display()
            ));
        }

        let line = init_line(&self.binary()?, root, dialect, theme);
        tracing::debug!("Setup line for {}: {}", dialect, line);
        if ui.output_mode().shows_detail() {
            ui.message(&format!("Shell: {}", dialect));
            ui.message(&format!("Rc file: {}", rc.path().display()));
            ui.message(&format!("Line: {}", line));
        }

        if rc.contains_line(&line)? {
            ui.success(&format!("{} is already set up", rc.path().display()));
            return Ok(CommandResult::success());
        }

        if !self.confirm(ui, &rc)? {
            ui.warning(&format!(
                "Setup cancelled; {} was not changed",
                rc.path().display()
            ));
            return Ok(CommandResult::success());
        }

        let update = rc.install(&line)?;
        if let Some(backup) = update.backup() {
            ui.message(&format!("Backed up to {}", backup.display()));
        }
        match update {
            RcUpdate::AlreadyPresent => {
                ui.success(&format!("{} is already set up", rc.path().display()));
            }
            RcUpdate::Replaced { .. } => {
                ui.success(&format!("Updated toolbox line in {}", rc.path().display()));
            }
            RcUpdate::Appended { .. } => {
                ui.success(&format!("Added toolbox to {}", rc.path().display()));
            }
        }
        ui.show_hint(&format!(
            "Open a new shell or run: source {}",
            rc.path().display()
        ));

        Ok(CommandResult::success())
    }
}
