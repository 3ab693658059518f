//! Shell session state.
//!
//! [`ShellEnv`] stands in for the interactive shell's environment. The
//! initializer mutates it and [`ShellEnv::render_exports`] turns the result
//! into shell code for the user's rc file to `eval`.

use std::path::{Path, PathBuf};

use crate::prompt::Theme;

use super::platform::Dialect;
use super::search_path::SearchPath;

/// Variable that carries the resolved project root.
pub const ROOT_VAR: &str = "TOOLBOX_ROOT";

/// Environment of one interactive shell session.
#[derive(Debug, Clone, Default)]
pub struct ShellEnv {
    search_path: SearchPath,
    project_root: Option<PathBuf>,
    dialect: Dialect,
    theme: Theme,
    prompt: Option<String>,
}

impl ShellEnv {
    /// Create a session from explicit values.
    pub fn new(search_path: impl Into<SearchPath>, dialect: Dialect) -> Self {
        Self {
            search_path: search_path.into(),
            dialect,
            ..Default::default()
        }
    }

    /// Capture `PATH` and the shell dialect from the current process.
    pub fn from_process() -> Self {
        let path = std::env::var("PATH").unwrap_or_default();
        Self::new(SearchPath::new(path), Dialect::detect())
    }

    pub fn search_path(&self) -> &SearchPath {
        &self.search_path
    }

    pub fn search_path_mut(&mut self) -> &mut SearchPath {
        &mut self.search_path
    }

    pub fn project_root(&self) -> Option<&Path> {
        self.project_root.as_deref()
    }

    pub fn set_project_root(&mut self, root: PathBuf) {
        self.project_root = Some(root);
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn set_dialect(&mut self, dialect: Dialect) {
        self.dialect = dialect;
    }

    /// Theme currently in force.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Prompt string, once one has been applied.
    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    pub fn set_prompt(&mut self, prompt: String) {
        self.prompt = Some(prompt);
    }

    /// Render the session as shell assignments.
    ///
    /// The prompt variable is assigned but not exported so child shells
    /// keep their own prompt.
    pub fn render_exports(&self) -> String {
        let mut out = String::new();

        if let Some(root) = &self.project_root {
            out.push_str(&format!(
                "export {}={}\n",
                ROOT_VAR,
                single_quote(&root.to_string_lossy())
            ));
        }

        out.push_str(&format!(
            "export PATH={}\n",
            single_quote(self.search_path.as_str())
        ));

        if let Some(prompt) = &self.prompt {
            out.push_str(&format!(
                "{}={}\n",
                self.dialect.prompt_var(),
                single_quote(prompt)
            ));
        }

        out
    }
}

/// Quote `value` for POSIX-style shells.
///
/// Embedded single quotes become `'\''`.
pub fn single_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
