//! Shell prompt theming.
//!
//! - [`theme`] - The four named palettes
//! - [`syntax`] - Bash and zsh escape syntax for a palette
//! - [`selector`] - Applying a theme by name to a shell session

pub mod selector;
pub mod syntax;
pub mod theme;

pub use selector::set_theme;
pub use syntax::{render, syntax_for, BashSyntax, PromptSyntax, ZshSyntax};
pub use theme::{FieldStyle, Palette, PromptColor, PromptField, Theme};
