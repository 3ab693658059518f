//! Visual theme and styling for toolbox's own output.
//!
//! Not to be confused with [`crate::prompt::Theme`], which styles the
//! user's shell prompt.

use console::Style;

/// Styles for messages printed by toolbox commands.
#[derive(Debug, Clone)]
pub struct ToolboxTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (yellow).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
    /// Style for contextual hints (magenta dim).
    pub hint: Style,
}

impl Default for ToolboxTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolboxTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            header: Style::new().bold().cyan(),
            hint: Style::new().magenta().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
            hint: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in yellow).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let theme = ToolboxTheme::plain();
        let msg = theme.format_success("Complete");
        assert_eq!(msg, "✓ Complete");
    }

    #[test]
    fn theme_formats_warning() {
        let theme = ToolboxTheme::plain();
        assert_eq!(theme.format_warning("Caution"), "⚠ Caution");
    }

    #[test]
    fn theme_formats_error() {
        let theme = ToolboxTheme::plain();
        assert_eq!(theme.format_error("Failed"), "✗ Failed");
    }

    #[test]
    fn theme_formats_header() {
        let theme = ToolboxTheme::plain();
        assert_eq!(theme.format_header("Themes"), "Themes");
    }

    #[test]
    fn default_impl_matches_new() {
        let default = ToolboxTheme::default();
        let new = ToolboxTheme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }
}
