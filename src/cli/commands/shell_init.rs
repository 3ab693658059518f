//! Shell init command implementation.
//!
//! The `toolbox shell-init` command prints shell code for the caller to
//! `eval`. It never fails: stdout always carries a usable `PATH` and
//! prompt, and diagnostics go to stderr through tracing.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::ShellInitArgs;
use crate::error::Result;
use crate::shell::{InitOptions, Initializer, ShellEnv};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The shell-init command implementation.
pub struct ShellInitCommand {
    project_root: Option<PathBuf>,
    args: ShellInitArgs,
}

impl ShellInitCommand {
    /// Create a new shell-init command.
    pub fn new(project_root: Option<&Path>, args: ShellInitArgs) -> Self {
        Self {
            project_root: project_root.map(Path::to_path_buf),
            args,
        }
    }

    /// Apply initialization to `env` and return the shell code.
    pub fn render(&self, mut env: ShellEnv) -> String {
        let options = InitOptions::scan(&self.args.args);
        tracing::debug!("shell-init options: {:?}", options);

        Initializer::new(self.project_root.clone()).run(&mut env, &options);
        env.render_exports()
    }
}

impl Command for ShellInitCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let script = self.render(ShellEnv::from_process());

        let mut stdout = std::io::stdout().lock();
        if let Err(e) = stdout.write_all(script.as_bytes()).and_then(|_| stdout.flush()) {
            tracing::warn!("Failed to write shell code: {}", e);
        }

        Ok(CommandResult::success())
    }
}
