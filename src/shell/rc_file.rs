//! Shell rc file integration.
//!
//! Installs the single `eval` line that runs `shell-init` at shell startup.
//! An older toolbox line is replaced in place rather than duplicated, and
//! the previous file is copied aside before it is rewritten.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::{Result, ToolboxError};
use crate::prompt::Theme;

use super::env::single_quote;
use super::platform::Dialect;

/// Opening of every line [`init_line`] writes.
const EVAL_PREFIX: &str = "eval \"$(";

/// Build the rc line that initializes a shell for `root`.
///
/// The dialect is written out because `shell-init` runs as a child of the
/// shell and cannot see its unexported `BASH_VERSION`/`ZSH_VERSION`.
pub fn init_line(binary: &Path, root: &Path, dialect: Dialect, theme: Theme) -> String {
    format!(
        "{}{} --project {} shell-init --shell {} --theme {})\"",
        EVAL_PREFIX,
        single_quote(&binary.to_string_lossy()),
        single_quote(&root.to_string_lossy()),
        dialect,
        theme
    )
}

/// Whether `line` is a toolbox init line, current or stale.
///
/// Only `eval "$(... toolbox ... shell-init ...)"` lines qualify; aliases
/// and comments that mention the command are user content.
fn is_init_line(line: &str) -> bool {
    line.trim_start().starts_with(EVAL_PREFIX)
        && line.contains("toolbox")
        && line.contains("shell-init")
}

/// What [`RcFile::install`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RcUpdate {
    /// The exact line was already present.
    AlreadyPresent,
    /// A stale toolbox line was replaced.
    Replaced { backup: Option<PathBuf> },
    /// The line was appended.
    Appended { backup: Option<PathBuf> },
}

impl RcUpdate {
    pub fn backup(&self) -> Option<&Path> {
        match self {
            RcUpdate::AlreadyPresent => None,
            RcUpdate::Replaced { backup } | RcUpdate::Appended { backup } => backup.as_deref(),
        }
    }
}

/// Compute new rc contents with `line` installed.
///
/// Returns `None` when the exact line is already present, otherwise the new
/// contents and whether an existing line was replaced.
pub fn with_init_line(content: &str, line: &str) -> Option<(String, bool)> {
    if content.lines().any(|l| l == line) {
        return None;
    }

    let mut replaced = false;
    let mut lines: Vec<&str> = Vec::new();
    for existing in content.lines() {
        if is_init_line(existing) && !replaced {
            lines.push(line);
            replaced = true;
        } else if is_init_line(existing) {
            continue;
        } else {
            lines.push(existing);
        }
    }

    if !replaced {
        lines.push(line);
    }

    let mut updated = lines.join("\n");
    updated.push('\n');
    Some((updated, replaced))
}

/// A shell rc file on disk.
#[derive(Debug, Clone)]
pub struct RcFile {
    path: PathBuf,
}

impl RcFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The rc file for `dialect` in the user's home directory.
    pub fn for_dialect(dialect: super::Dialect) -> Result<Self> {
        let home = dirs::home_dir().ok_or(ToolboxError::HomeDirNotFound)?;
        Ok(Self::new(dialect.rc_file(&home)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current contents, empty when the file does not exist.
    pub fn read(&self) -> Result<String> {
        if !self.path.exists() {
            return Ok(String::new());
        }
        Ok(fs::read_to_string(&self.path)?)
    }

    /// Check whether `line` is already installed verbatim.
    pub fn contains_line(&self, line: &str) -> Result<bool> {
        Ok(self.read()?.lines().any(|l| l == line))
    }

    /// Copy the file to `<name>.bak-<timestamp>` if it exists.
    pub fn backup(&self) -> Result<Option<PathBuf>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stamp = Local::now().format("%Y%m%d%H%M%S");
        let backup = self.path.with_file_name(format!("{}.bak-{}", name, stamp));

        fs::copy(&self.path, &backup).map_err(|e| self.update_error(e))?;
        tracing::debug!("Backed up {} to {}", self.path.display(), backup.display());
        Ok(Some(backup))
    }

    /// Install `line`, replacing a stale toolbox line if there is one.
    pub fn install(&self, line: &str) -> Result<RcUpdate> {
        let content = self.read()?;
        let Some((updated, replaced)) = with_init_line(&content, line) else {
            return Ok(RcUpdate::AlreadyPresent);
        };

        let backup = self.backup()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.update_error(e))?;
        }
        fs::write(&self.path, updated).map_err(|e| self.update_error(e))?;

        Ok(if replaced {
            RcUpdate::Replaced { backup }
        } else {
            RcUpdate::Appended { backup }
        })
    }

    fn update_error(&self, e: std::io::Error) -> ToolboxError {
        ToolboxError::RcFileUpdate {
            path: self.path.clone(),
            message: e.to_string(),
        }
    }
}
