//! Project configuration.
//!
//! - Schema definitions in [`schema`]
//! - File loading in [`loader`]
//! - Install prefix layout in [`prefix`]
//!
//! # Example
//!
//! ```
//! use toolbox::config::{load_config, resolve_prefix};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::create_dir_all(temp.path().join(".config")).unwrap();
//! fs::write(temp.path().join(".config/toolbox.json"), r#"{"theme": "vivid"}"#).unwrap();
//!
//! let config = load_config(temp.path()).unwrap();
//! assert_eq!(config.theme.name(), "vivid");
//! assert_eq!(resolve_prefix(temp.path(), &config.prefix), temp.path().join(".tools"));
//! ```
//!
//! # Configuration File Location
//!
//! `<project root>/.config/toolbox.json`. A missing file means defaults.

pub mod loader;
pub mod prefix;
pub mod schema;

pub use loader::{config_path, load_config, parse_config};
pub use prefix::{ensure_prefix, resolve_prefix, PREFIX_SUBDIRS};
pub use schema::{ToolboxConfig, DEFAULT_PREFIX};
