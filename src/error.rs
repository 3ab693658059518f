//! Error types for toolbox operations.
//!
//! This module defines [`ToolboxError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Shell initialization never returns an error: bad input falls back to
//!   defaults so that a broken rc file cannot abort shell startup
//! - Use `ToolboxError` for the commands that touch the file system
//! - Use `anyhow::Error` (via `ToolboxError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for toolbox operations.
#[derive(Debug, Error)]
pub enum ToolboxError {
    /// Failed to parse the toolbox config file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Config file parsed but holds an unusable value.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The user's home directory could not be determined.
    #[error("Could not determine home directory")]
    HomeDirNotFound,

    /// Writing shell integration into an rc file failed.
    #[error("Failed to update {path}: {message}")]
    RcFileUpdate { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for toolbox operations.
pub type Result<T> = std::result::Result<T, ToolboxError>;
