//! Executable search path registration.
//!
//! The project root contributes two directories to `PATH`: `bin/` for
//! scripts checked into the repository and `.tools/bin/` for binaries
//! installed into the portable prefix. Registration only ever prepends,
//! and only when the directory is not already present.

use std::fmt;
use std::path::{Path, PathBuf};

/// Separator used in the external `PATH` representation.
pub const PATH_SEPARATOR: char = ':';

/// An ordered, colon-delimited list of directories.
///
/// # Example
///
/// ```
/// use toolbox::shell::SearchPath;
///
/// let mut path = SearchPath::new("/usr/bin");
/// assert!(path.prepend("/opt/bin"));
/// assert!(!path.prepend("/usr/bin"));
/// assert_eq!(path.as_str(), "/opt/bin:/usr/bin");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    value: String,
}

impl SearchPath {
    /// Wrap an existing `PATH` value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The raw colon-delimited value.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Iterate the non-empty entries in order.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.value
            .split(PATH_SEPARATOR)
            .filter(|entry| !entry.is_empty())
    }

    /// Check whether `dir` is one of the entries.
    ///
    /// Both sides are padded with separators so `/opt/bin` never matches
    /// inside `/opt/bin2` or `/x/opt/bin`.
    pub fn contains(&self, dir: &str) -> bool {
        let haystack = format!("{PATH_SEPARATOR}{}{PATH_SEPARATOR}", self.value);
        let needle = format!("{PATH_SEPARATOR}{dir}{PATH_SEPARATOR}");
        haystack.contains(&needle)
    }

    /// Put `dir` at the front unless it is already present.
    ///
    /// Returns `true` if the path changed.
    pub fn prepend(&mut self, dir: &str) -> bool {
        if dir.is_empty() || self.contains(dir) {
            return false;
        }

        self.value = if self.value.is_empty() {
            dir.to_string()
        } else {
            format!("{dir}{PATH_SEPARATOR}{}", self.value)
        };
        true
    }
}

impl fmt::Display for SearchPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl From<&str> for SearchPath {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Directories a project root contributes, in the order they are prepended.
///
/// The last one ends up first on `PATH`.
pub fn prefix_dirs(root: &Path) -> [PathBuf; 2] {
    [root.join("bin"), root.join(".tools").join("bin")]
}

/// Register a project root's directories on the search path.
///
/// An unset or empty root is a no-op. Returns the entries that were added,
/// in the order they were prepended.
pub fn register(path: &mut SearchPath, root: Option<&Path>) -> Vec<String> {
    let Some(root) = root.filter(|r| !r.as_os_str().is_empty()) else {
        tracing::debug!("No project root; leaving PATH untouched");
        return Vec::new();
    };

    let mut added = Vec::new();
    for dir in prefix_dirs(root) {
        let dir = dir.to_string_lossy();
        if path.prepend(&dir) {
            tracing::debug!("Prepended {} to PATH", dir);
            added.push(dir.into_owned());
        }
    }
    added
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registered(initial: &str, root: &str) -> String {
        let mut path = SearchPath::new(initial);
        register(&mut path, Some(Path::new(root)));
        path.to_string()
    }

    #[test]
    fn registers_into_empty_path() {
        assert_eq!(registered("", "/proj"), "/proj/.tools/bin:/proj/bin");
    }

    #[test]
    fn skips_entry_already_present() {
        assert_eq!(
            registered("/proj/bin:/usr/bin", "/proj"),
            "/proj/.tools/bin:/proj/bin:/usr/bin"
        );
    }

    #[test]
    fn registering_twice_matches_once() {
        let once = registered("/usr/bin:/bin", "/proj");
        let twice = registered(&once, "/proj");
        assert_eq!(once, twice);
    }

    #[test]
    fn entry_at_end_is_detected() {
        assert_eq!(
            registered("/usr/bin:/proj/.tools/bin", "/proj"),
            "/proj/bin:/usr/bin:/proj/.tools/bin"
        );
    }

    #[test]
    fn partial_segment_is_not_a_match() {
        let path = SearchPath::new("/proj/bin2:/x/proj/bin");
        assert!(!path.contains("/proj/bin"));
        assert_eq!(
            registered("/proj/bin2:/x/proj/bin", "/proj"),
            "/proj/.tools/bin:/proj/bin:/proj/bin2:/x/proj/bin"
        );
    }

    #[test]
    fn unset_root_is_noop() {
        let mut path = SearchPath::new("/usr/bin");
        let added = register(&mut path, None);
        assert!(added.is_empty());
        assert_eq!(path.as_str(), "/usr/bin");
    }

    #[test]
    fn empty_root_is_noop() {
        let mut path = SearchPath::new("/usr/bin");
        let added = register(&mut path, Some(Path::new("")));
        assert!(added.is_empty());
        assert_eq!(path.as_str(), "/usr/bin");
    }

    #[test]
    fn register_reports_added_entries() {
        let mut path = SearchPath::new("/proj/bin");
        let added = register(&mut path, Some(Path::new("/proj")));
        assert_eq!(added, vec!["/proj/.tools/bin".to_string()]);
    }

    #[test]
    fn entries_skip_empty_segments() {
        let path = SearchPath::new("/a::/b:");
        let entries: Vec<_> = path.entries().collect();
        assert_eq!(entries, vec!["/a", "/b"]);
    }

    #[test]
    fn prepend_rejects_empty_dir() {
        let mut path = SearchPath::new("/usr/bin");
        assert!(!path.prepend(""));
        assert_eq!(path.as_str(), "/usr/bin");
    }

    #[test]
    fn root_with_trailing_slash() {
        assert_eq!(registered("", "/proj/"), "/proj/.tools/bin:/proj/bin");
    }
}
