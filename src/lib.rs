//! Toolbox - project-local developer tools for interactive shells.
//!
//! Toolbox puts a project's `bin/` and `.tools/bin/` directories on `PATH`
//! and gives the shell a themed prompt. The binary prints shell code that
//! the user's rc file evaluates at startup.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Project configuration loading and prefix layout
//! - [`error`] - Error types and result aliases
//! - [`prompt`] - Prompt themes and their bash/zsh rendering
//! - [`shell`] - PATH registration, session state, and rc file setup
//! - [`ui`] - Interactive prompts and terminal output
//!
//! # Example
//!
//! ```
//! use std::path::PathBuf;
//! use toolbox::shell::{Dialect, InitOptions, Initializer, ShellEnv};
//!
//! let mut env = ShellEnv::new("/usr/bin", Dialect::Bash);
//! let options = InitOptions::scan(["--theme", "vivid"]);
//! Initializer::new(Some(PathBuf::from("/proj"))).run(&mut env, &options);
//!
//! assert_eq!(env.search_path().as_str(), "/proj/.tools/bin:/proj/bin:/usr/bin");
//! assert!(env.render_exports().contains("PS1="));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod prompt;
pub mod shell;
pub mod ui;

pub use error::{Result, ToolboxError};
