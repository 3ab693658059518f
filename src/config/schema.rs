//! Configuration schema.

use serde::{Deserialize, Serialize};

use crate::prompt::Theme;

/// Default install prefix, relative to the project root.
pub const DEFAULT_PREFIX: &str = "./.tools";

/// Contents of `.config/toolbox.json`.
///
/// Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolboxConfig {
    /// Install prefix; relative paths are resolved against the project root.
    pub prefix: String,

    /// Enable colored output.
    pub color: bool,

    /// Theme `setup` writes when none is given.
    pub theme: Theme,
}

impl Default for ToolboxConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            color: true,
            theme: Theme::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ToolboxConfig::default();
        assert_eq!(config.prefix, "./.tools");
        assert!(config.color);
        assert_eq!(config.theme, Theme::Minimal);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config: ToolboxConfig = serde_json::from_str(r#"{"color": false}"#).unwrap();
        assert!(!config.color);
        assert_eq!(config.prefix, DEFAULT_PREFIX);
        assert_eq!(config.theme, Theme::Minimal);
    }

    #[test]
    fn parses_all_fields() {
        let json = r#"{"prefix": "/opt/tools", "color": true, "theme": "high-contrast"}"#;
        let config: ToolboxConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.prefix, "/opt/tools");
        assert_eq!(config.theme, Theme::HighContrast);
    }

    #[test]
    fn unknown_theme_is_rejected() {
        let result: Result<ToolboxConfig, _> = serde_json::from_str(r#"{"theme": "neon"}"#);
        assert!(result.is_err());
    }
}
