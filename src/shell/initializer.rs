//! Shell startup initialization.
//!
//! Runs once per interactive shell: resolves the project root, registers
//! its directories on `PATH` and applies the prompt theme. Nothing here
//! can fail; bad input falls back to defaults so shell startup is never
//! interrupted.

use std::path::{Path, PathBuf};

use crate::prompt::{self, Theme};

use super::env::ShellEnv;
use super::platform::Dialect;
use super::search_path;

/// Options picked out of the `shell-init` arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOptions {
    /// Requested theme name, validated only when applied.
    pub theme: String,
    /// Explicit dialect, overriding detection.
    pub dialect: Option<Dialect>,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            theme: Theme::default().name().to_string(),
            dialect: None,
        }
    }
}

impl InitOptions {
    /// Scan arguments left to right.
    ///
    /// Recognizes `--theme <name>` and `--shell <dialect>`; the flag consumes
    /// whatever follows it. A `--theme` with nothing after it means the
    /// default theme. Anything else is skipped.
    ///
    /// # Example
    ///
    /// ```
    /// use toolbox::shell::InitOptions;
    ///
    /// let opts = InitOptions::scan(["--color", "--theme", "vivid"]);
    /// assert_eq!(opts.theme, "vivid");
    /// ```
    pub fn scan<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "--theme" => {
                    options.theme = args
                        .next()
                        .map(|v| v.as_ref().to_string())
                        .unwrap_or_else(|| Theme::default().name().to_string());
                }
                "--shell" => match args.next().map(|v| v.as_ref().parse::<Dialect>()) {
                    Some(Ok(dialect)) => options.dialect = Some(dialect),
                    Some(Err(e)) => tracing::debug!("{}; detecting instead", e),
                    None => {}
                },
                other => tracing::debug!("Ignoring shell-init argument: {}", other),
            }
        }

        options
    }
}

/// Project root for a binary installed at `<root>/bin/<name>`.
///
/// Returns the canonical parent of the binary's directory.
pub fn root_from_executable(exe: &Path) -> Option<PathBuf> {
    let exe = exe.canonicalize().unwrap_or_else(|_| exe.to_path_buf());
    let root = exe.parent()?.parent()?;
    if root.as_os_str().is_empty() {
        return None;
    }
    Some(absolutize(root))
}

/// Project root derived from the running binary, if it can be located.
pub fn current_root() -> Option<PathBuf> {
    match std::env::current_exe() {
        Ok(exe) => root_from_executable(&exe),
        Err(e) => {
            tracing::warn!("Cannot locate the toolbox binary: {}", e);
            None
        }
    }
}

/// Resolve `path` to an absolute path, canonical when it exists.
pub fn absolutize(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Composes path registration and prompt theming.
#[derive(Debug, Clone, Default)]
pub struct Initializer {
    root: Option<PathBuf>,
}

impl Initializer {
    /// Create an initializer for the given project root.
    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Apply root, `PATH` and prompt to `env`.
    pub fn run(&self, env: &mut ShellEnv, options: &InitOptions) {
        if let Some(root) = &self.root {
            env.set_project_root(root.clone());
        }
        if let Some(dialect) = options.dialect {
            env.set_dialect(dialect);
        }

        let added = search_path::register(env.search_path_mut(), self.root.as_deref());
        tracing::debug!("Registered {} PATH entries", added.len());

        let theme = prompt::set_theme(env, &options.theme);
        tracing::debug!("Applied {} theme for {}", theme, env.dialect());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::render;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn scan_defaults_to_minimal() {
        let opts = InitOptions::scan(Vec::<String>::new());
        assert_eq!(opts.theme, "minimal");
        assert_eq!(opts.dialect, None);
    }

    #[test]
    fn scan_reads_theme() {
        let opts = InitOptions::scan(["--theme", "dark-contrast"]);
        assert_eq!(opts.theme, "dark-contrast");
    }

    #[test]
    fn scan_missing_value_means_default() {
        let opts = InitOptions::scan(["--theme"]);
        assert_eq!(opts.theme, "minimal");
    }

    #[test]
    fn scan_last_theme_wins() {
        let opts = InitOptions::scan(["--theme", "vivid", "--theme", "high-contrast"]);
        assert_eq!(opts.theme, "high-contrast");
    }

    #[test]
    fn scan_skips_unknown_arguments() {
        let opts = InitOptions::scan(["-x", "stray", "--theme", "vivid", "--loud"]);
        assert_eq!(opts.theme, "vivid");
    }

    #[test]
    fn scan_reads_shell() {
        let opts = InitOptions::scan(["--shell", "zsh"]);
        assert_eq!(opts.dialect, Some(Dialect::Zsh));

        let opts = InitOptions::scan(["--shell", "tcsh"]);
        assert_eq!(opts.dialect, None);
    }

    #[test]
    fn root_is_parent_of_bin_dir() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        fs::create_dir_all(&bin).unwrap();
        let exe = bin.join("toolbox");
        fs::write(&exe, "").unwrap();

        let root = root_from_executable(&exe).unwrap();
        assert_eq!(root, temp.path().canonicalize().unwrap());
    }

    #[test]
    fn root_of_bare_name_is_none() {
        assert_eq!(root_from_executable(Path::new("toolbox")), None);
    }

    #[test]
    fn absolutize_keeps_missing_absolute_paths() {
        let path = Path::new("/definitely/not/here");
        assert_eq!(absolutize(path), path.to_path_buf());
    }

    #[test]
    fn absolutize_makes_relative_absolute() {
        assert!(absolutize(Path::new("some/relative/dir")).is_absolute());
    }

    #[test]
    fn run_registers_and_themes() {
        let mut env = ShellEnv::new("/usr/bin", Dialect::Bash);
        let init = Initializer::new(Some(PathBuf::from("/proj")));
        let opts = InitOptions::scan(["--theme", "vivid"]);

        init.run(&mut env, &opts);

        assert_eq!(env.project_root(), Some(Path::new("/proj")));
        assert_eq!(
            env.search_path().as_str(),
            "/proj/.tools/bin:/proj/bin:/usr/bin"
        );
        assert_eq!(env.theme(), Theme::Vivid);
        assert_eq!(
            env.prompt(),
            Some(render(Theme::Vivid, Dialect::Bash).as_str())
        );
    }

    #[test]
    fn run_without_root_still_sets_prompt() {
        let mut env = ShellEnv::new("/usr/bin", Dialect::Zsh);
        Initializer::new(None).run(&mut env, &InitOptions::default());

        assert!(env.project_root().is_none());
        assert_eq!(env.search_path().as_str(), "/usr/bin");
        assert_eq!(
            env.prompt(),
            Some(render(Theme::Minimal, Dialect::Zsh).as_str())
        );
    }

    #[test]
    fn run_honours_explicit_dialect() {
        let mut env = ShellEnv::new("", Dialect::Bash);
        let opts = InitOptions::scan(["--shell", "zsh"]);
        Initializer::new(None).run(&mut env, &opts);
        assert_eq!(env.dialect(), Dialect::Zsh);
        assert!(env.prompt().unwrap().ends_with("%# "));
    }

    #[test]
    fn run_twice_is_idempotent() {
        let mut env = ShellEnv::new("/usr/bin", Dialect::Bash);
        let init = Initializer::new(Some(PathBuf::from("/proj")));
        let opts = InitOptions::default();

        init.run(&mut env, &opts);
        let first = env.render_exports();
        init.run(&mut env, &opts);

        assert_eq!(env.render_exports(), first);
    }
}
