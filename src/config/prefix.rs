//! Install prefix layout.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Subdirectories every prefix carries.
pub const PREFIX_SUBDIRS: [&str; 2] = ["bin", "tmp"];

/// Resolve the configured prefix against the project root.
pub fn resolve_prefix(project_root: &Path, prefix: &str) -> PathBuf {
    let prefix = Path::new(prefix);
    if prefix.is_absolute() {
        return prefix.to_path_buf();
    }

    let mut resolved = project_root.to_path_buf();
    for component in prefix.components() {
        match component {
            std::path::Component::CurDir => {}
            other => resolved.push(other),
        }
    }
    resolved
}

/// Create the prefix subdirectories if they are missing.
pub fn ensure_prefix(prefix: &Path) -> Result<()> {
    for subdir in PREFIX_SUBDIRS {
        let dir = prefix.join(subdir);
        if !dir.is_dir() {
            tracing::debug!("Creating {}", dir.display());
            fs::create_dir_all(&dir)?;
        }
    }
    Ok(())
}
