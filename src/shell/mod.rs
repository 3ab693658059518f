//! Shell integration: `PATH` registration, session state, and rc files.

pub mod env;
pub mod initializer;
pub mod platform;
pub mod rc_file;
pub mod search_path;

pub use env::{single_quote, ShellEnv, ROOT_VAR};
pub use initializer::{absolutize, current_root, root_from_executable, InitOptions, Initializer};
pub use platform::{is_ci, Dialect};
pub use rc_file::{init_line, RcFile, RcUpdate};
pub use search_path::{prefix_dirs, register, SearchPath, PATH_SEPARATOR};
