//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::prompt::Theme;
use crate::shell::Dialect;

/// Toolbox - project-local developer tools on your PATH.
#[derive(Debug, Parser)]
#[command(name = "toolbox")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides the binary's location)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Install prefix (overrides `prefix` in .config/toolbox.json)
    #[arg(long, global = true)]
    pub prefix: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print shell code that puts project tools on PATH and sets the prompt
    #[command(disable_help_flag = true, disable_version_flag = true)]
    ShellInit(ShellInitArgs),

    /// Add the shell-init line to your shell rc file
    Setup(SetupArgs),

    /// Preview the available prompt themes
    Themes(ThemesArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `shell-init` command.
///
/// Collected raw and scanned leniently so that an unexpected flag never
/// breaks shell startup.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ShellInitArgs {
    /// Options such as `--theme <name>` and `--shell <bash|zsh>`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Arguments for the `setup` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SetupArgs {
    /// Prompt theme to install (defaults to the configured theme)
    #[arg(long, value_enum)]
    pub theme: Option<Theme>,

    /// Shell to configure (detected when omitted)
    #[arg(long, value_enum)]
    pub shell: Option<Dialect>,

    /// Rc file to update instead of ~/.bashrc or ~/.zshrc
    #[arg(long)]
    pub rc_file: Option<PathBuf>,

    /// Write without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `themes` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ThemesArgs {
    /// Render prompts for this shell (detected when omitted)
    #[arg(long, value_enum)]
    pub shell: Option<Dialect>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["toolbox", "themes", "--project", "/proj", "--debug"]);
        assert_eq!(cli.project, Some(PathBuf::from("/proj")));
        assert!(cli.debug);
        assert!(matches!(cli.command, Commands::Themes(_)));
    }

    #[test]
    fn shell_init_collects_unknown_flags() {
        let cli = Cli::parse_from(["toolbox", "shell-init", "--color", "--theme", "vivid"]);
        match cli.command {
            Commands::ShellInit(args) => {
                assert_eq!(args.args, vec!["--color", "--theme", "vivid"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn shell_init_accepts_dangling_theme() {
        let cli = Cli::parse_from(["toolbox", "shell-init", "--theme"]);
        match cli.command {
            Commands::ShellInit(args) => assert_eq!(args.args, vec!["--theme"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn shell_init_passes_help_through() {
        let cli = Cli::parse_from(["toolbox", "shell-init", "--help", "-V"]);
        match cli.command {
            Commands::ShellInit(args) => assert_eq!(args.args, vec!["--help", "-V"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn prefix_is_global() {
        let cli = Cli::parse_from(["toolbox", "setup", "--prefix", "/opt/tools"]);
        assert_eq!(cli.prefix, Some(PathBuf::from("/opt/tools")));
    }

    #[test]
    fn setup_parses_theme_names() {
        let cli = Cli::parse_from([
            "toolbox",
            "setup",
            "--theme",
            "dark-contrast",
            "--shell",
            "zsh",
            "--yes",
        ]);
        match cli.command {
            Commands::Setup(args) => {
                assert_eq!(args.theme, Some(Theme::DarkContrast));
                assert_eq!(args.shell, Some(Dialect::Zsh));
                assert!(args.yes);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn setup_rejects_unknown_theme() {
        let result = Cli::try_parse_from(["toolbox", "setup", "--theme", "neon"]);
        assert!(result.is_err());
    }
}
