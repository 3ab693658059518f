//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::ToolboxConfig;
use crate::error::{Result, ToolboxError};

/// Location of the config file for a project.
pub fn config_path(project_root: &Path) -> PathBuf {
    project_root.join(".config").join("toolbox.json")
}

/// Load the project config, falling back to defaults when there is none.
///
/// # Errors
///
/// Returns `ConfigParseError` if the file exists but is not valid JSON
/// for [`ToolboxConfig`], and `ConfigValidationError` for an empty prefix.
pub fn load_config(project_root: &Path) -> Result<ToolboxConfig> {
    let path = config_path(project_root);
    if !path.exists() {
        tracing::debug!("No config at {}; using defaults", path.display());
        return Ok(ToolboxConfig::default());
    }

    let content = fs::read_to_string(&path)?;
    let config = parse_config(&content, &path)?;
    validate(&config)?;
    Ok(config)
}

/// Parse JSON content into a [`ToolboxConfig`].
///
/// # Arguments
///
/// * `content` - The JSON content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<ToolboxConfig> {
    serde_json::from_str(content).map_err(|e| ToolboxError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

fn validate(config: &ToolboxConfig) -> Result<()> {
    if config.prefix.trim().is_empty() {
        return Err(ToolboxError::ConfigValidationError {
            message: "prefix must not be empty".to_string(),
        });
    }
    Ok(())
}
