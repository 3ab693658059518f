//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: Option<PathBuf>,
    prefix: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    ///
    /// The root is `None` when it could not be resolved; commands that need
    /// it report an error, `shell-init` degrades to a prompt-only setup.
    pub fn new(project_root: Option<PathBuf>) -> Self {
        Self {
            project_root,
            prefix: None,
        }
    }

    /// Override the configured install prefix.
    pub fn with_prefix(mut self, prefix: Option<PathBuf>) -> Self {
        self.prefix = prefix;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> Option<&Path> {
        self.project_root.as_deref()
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let root = self.project_root();
        match &cli.command {
            Commands::ShellInit(args) => {
                let cmd = super::shell_init::ShellInitCommand::new(root, args.clone());
                cmd.execute(ui)
            }
            Commands::Setup(args) => {
                let cmd = super::setup::SetupCommand::new(root, args.clone())
                    .with_prefix(self.prefix.clone());
                cmd.execute(ui)
            }
            Commands::Themes(args) => {
                let cmd = super::themes::ThemesCommand::new(root, args.clone());
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn dispatcher_creation() {
        let dispatcher = CommandDispatcher::new(Some(PathBuf::from("/test")));
        assert_eq!(dispatcher.project_root(), Some(Path::new("/test")));
    }

    #[test]
    fn dispatches_themes_without_root() {
        let cli = Cli::parse_from(["toolbox", "themes", "--shell", "bash"]);
        let dispatcher = CommandDispatcher::new(None);
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();
        assert!(result.success);
        assert!(ui.has_message("high-contrast"));
    }
}
