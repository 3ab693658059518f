//! Interactive user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use toolbox::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("toolbox");
//! ui.success("Shell setup complete");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use prompts::prompt_user;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, ToolboxTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a prompt and get user input.
    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult>;

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show a contextual hint.
    fn show_hint(&mut self, hint: &str);

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// A prompt to show to the user.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key for the prompt (used for overrides and test lookup).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// The type of prompt.
    pub prompt_type: PromptType,
    /// Default value if user just presses enter.
    pub default: Option<String>,
}

/// The type of prompt.
#[derive(Debug, Clone)]
pub enum PromptType {
    /// Yes/no confirmation.
    Confirm,
    /// Select one from a list of options.
    Select { options: Vec<PromptOption> },
}

/// An option in a select prompt.
#[derive(Debug, Clone)]
pub struct PromptOption {
    /// Display label.
    pub label: String,
    /// Value returned when selected.
    pub value: String,
}

/// Result of a prompt.
#[derive(Debug, Clone)]
pub enum PromptResult {
    /// Boolean result from confirm.
    Bool(bool),
    /// String result from select.
    String(String),
}

impl PromptResult {
    /// Get as string.
    pub fn as_string(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::String(s) => s.clone(),
        }
    }

    /// Get as bool if this is a Bool result.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// Interpret a textual answer to a confirm prompt.
pub(crate) fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.to_lowercase().as_str(),
        "true" | "yes" | "y" | "1"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_result_as_string_bool() {
        assert_eq!(PromptResult::Bool(true).as_string(), "true");
        assert_eq!(PromptResult::Bool(false).as_string(), "false");
    }

    #[test]
    fn prompt_result_as_string_string() {
        assert_eq!(
            PromptResult::String("vivid".to_string()).as_string(),
            "vivid"
        );
    }

    #[test]
    fn prompt_result_as_bool() {
        assert_eq!(PromptResult::Bool(true).as_bool(), Some(true));
        assert_eq!(PromptResult::String("test".to_string()).as_bool(), None);
    }

    #[test]
    fn affirmative_answers() {
        for answer in ["true", "yes", "Y", "1"] {
            assert!(is_affirmative(answer), "{answer}");
        }
        for answer in ["false", "no", "", "maybe"] {
            assert!(!is_affirmative(answer), "{answer}");
        }
    }

    #[test]
    fn prompt_type_select_stores_options() {
        let options = vec![
            PromptOption {
                label: "Minimal".to_string(),
                value: "minimal".to_string(),
            },
            PromptOption {
                label: "Vivid".to_string(),
                value: "vivid".to_string(),
            },
        ];

        let prompt_type = PromptType::Select {
            options: options.clone(),
        };

        if let PromptType::Select { options: stored } = prompt_type {
            assert_eq!(stored.len(), 2);
            assert_eq!(stored[0].value, "minimal");
        } else {
            panic!("Expected Select variant");
        }
    }
}
