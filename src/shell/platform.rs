//! Shell dialect detection.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Interactive shell dialects with their own prompt syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Dialect {
    #[default]
    Bash,
    Zsh,
}

impl Dialect {
    /// Parse a dialect from a shell executable path.
    ///
    /// Any executable whose name contains `zsh` (`zsh5`, `zsh-5.9`) is zsh.
    /// Anything else renders with bash syntax.
    pub fn from_executable(exe: &str) -> Self {
        let name = Path::new(exe)
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_lowercase();

        if name.contains("zsh") {
            Dialect::Zsh
        } else {
            Dialect::Bash
        }
    }

    /// Detect the dialect using `lookup` for environment variables.
    ///
    /// Checks the marker each shell sets for itself before falling back
    /// to the login shell in `SHELL`.
    pub fn detect_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        if lookup("ZSH_VERSION").is_some_and(|v| !v.is_empty()) {
            return Dialect::Zsh;
        }
        if lookup("BASH_VERSION").is_some_and(|v| !v.is_empty()) {
            return Dialect::Bash;
        }
        lookup("SHELL")
            .map(|shell| Self::from_executable(&shell))
            .unwrap_or_default()
    }

    /// Detect the dialect from the process environment.
    pub fn detect() -> Self {
        Self::detect_with(|key| std::env::var(key).ok())
    }

    /// Name as used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Bash => "bash",
            Dialect::Zsh => "zsh",
        }
    }

    /// The interactive rc file for this dialect under `home`.
    pub fn rc_file(&self, home: &Path) -> PathBuf {
        match self {
            Dialect::Bash => home.join(".bashrc"),
            Dialect::Zsh => home.join(".zshrc"),
        }
    }

    /// Variable holding the primary prompt.
    pub fn prompt_var(&self) -> &'static str {
        match self {
            Dialect::Bash => "PS1",
            Dialect::Zsh => "PROMPT",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bash" => Ok(Dialect::Bash),
            "zsh" => Ok(Dialect::Zsh),
            _ => Err(format!("unknown shell: {}", s)),
        }
    }
}

/// Check if running in a CI environment.
///
/// Used to force non-interactive mode in `main()`.
/// Checks common CI environment variables: `CI`, `GITHUB_ACTIONS`,
/// `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}
