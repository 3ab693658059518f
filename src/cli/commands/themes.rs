//! Themes command implementation.
//!
//! The `toolbox themes` command previews every prompt theme.

use std::path::{Path, PathBuf};

use crate::cli::args::ThemesArgs;
use crate::config::{load_config, ToolboxConfig};
use crate::error::Result;
use crate::prompt::{render, Theme};
use crate::shell::Dialect;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The themes command implementation.
pub struct ThemesCommand {
    project_root: Option<PathBuf>,
    args: ThemesArgs,
}

impl ThemesCommand {
    /// Create a new themes command.
    pub fn new(project_root: Option<&Path>, args: ThemesArgs) -> Self {
        Self {
            project_root: project_root.map(Path::to_path_buf),
            args,
        }
    }

    fn configured_theme(&self) -> Theme {
        let Some(root) = &self.project_root else {
            return ToolboxConfig::default().theme;
        };
        match load_config(root) {
            Ok(config) => config.theme,
            Err(e) => {
                tracing::warn!("Ignoring config: {}", e);
                ToolboxConfig::default().theme
            }
        }
    }
}

impl Command for ThemesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let dialect = self.args.shell.unwrap_or_else(Dialect::detect);
        let current = self.configured_theme();

        ui.show_header(&format!("Prompt themes ({})", dialect));

        for theme in Theme::ALL {
            let marker = if theme == current { "*" } else { " " };
            ui.message(&format!(
                "{} {:<14} {}",
                marker,
                theme.name(),
                render(theme, dialect)
            ));
        }

        ui.show_hint("Use one with: toolbox setup --theme <name>");
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn lists_every_theme() {
        let cmd = ThemesCommand::new(
            None,
            ThemesArgs {
                shell: Some(Dialect::Zsh),
            },
        );
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.messages().len(), 4);
        for theme in Theme::ALL {
            assert!(ui.has_message(theme.name()));
        }
        assert!(ui.has_message("%n"));
        assert!(ui.messages()[0].starts_with("* minimal"));
    }

    #[test]
    fn marks_configured_theme() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(".config")).unwrap();
        fs::write(
            temp.path().join(".config/toolbox.json"),
            r#"{"theme": "vivid"}"#,
        )
        .unwrap();

        let cmd = ThemesCommand::new(
            Some(temp.path()),
            ThemesArgs {
                shell: Some(Dialect::Bash),
            },
        );
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        assert!(ui.messages()[1].starts_with("* vivid"));
        assert!(ui.messages()[0].starts_with("  minimal"));
    }

    #[test]
    fn broken_config_falls_back_to_default() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(".config")).unwrap();
        fs::write(temp.path().join(".config/toolbox.json"), "{").unwrap();

        let cmd = ThemesCommand::new(Some(temp.path()), ThemesArgs::default());
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.messages()[0].starts_with("* minimal"));
    }
}
