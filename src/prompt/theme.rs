//! Prompt themes and their palettes.
//!
//! A theme assigns a [`FieldStyle`] to each semantic prompt field. The
//! table here is dialect-neutral; [`super::syntax`] turns it into escape
//! sequences.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Named prompt palettes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    Minimal,
    Vivid,
    HighContrast,
    DarkContrast,
}

impl Theme {
    /// Every theme, in display order.
    pub const ALL: [Theme; 4] = [
        Theme::Minimal,
        Theme::Vivid,
        Theme::HighContrast,
        Theme::DarkContrast,
    ];

    /// Name accepted on the command line and in config.
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Minimal => "minimal",
            Theme::Vivid => "vivid",
            Theme::HighContrast => "high-contrast",
            Theme::DarkContrast => "dark-contrast",
        }
    }

    /// Styles for each prompt field.
    pub fn palette(&self) -> Palette {
        use PromptColor::*;

        match self {
            Theme::Minimal => Palette {
                user: FieldStyle::fg(White),
                host: FieldStyle::fg(Cyan),
                time: FieldStyle::fg(Gray),
                directory: FieldStyle::fg(Yellow),
            },
            Theme::Vivid => Palette {
                user: FieldStyle::fg(Green),
                host: FieldStyle::fg(Blue),
                time: FieldStyle::fg(Magenta),
                directory: FieldStyle::fg(Yellow),
            },
            Theme::HighContrast => Palette {
                user: FieldStyle::fg(BrightWhite).bold(),
                host: FieldStyle::fg(BrightYellow).bold(),
                time: FieldStyle::fg(BrightRed).bold(),
                directory: FieldStyle::fg(BrightCyan).bold(),
            },
            Theme::DarkContrast => Palette {
                user: FieldStyle::fg(Green).on_dark(),
                host: FieldStyle::fg(Magenta).on_dark(),
                time: FieldStyle::fg(Violet).on_dark(),
                directory: FieldStyle::fg(Gold).on_dark(),
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = String;

    /// Names are matched exactly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.name() == s)
            .ok_or_else(|| format!("unknown theme: {}", s))
    }
}

/// Foreground colors used by the palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptColor {
    White,
    Cyan,
    Gray,
    Yellow,
    Green,
    Blue,
    Magenta,
    BrightWhite,
    BrightYellow,
    BrightRed,
    BrightCyan,
    Violet,
    Gold,
}

/// How one prompt field is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldStyle {
    pub color: PromptColor,
    pub bold: bool,
    /// Paint the field on the shared dark background.
    pub dark_background: bool,
}

impl FieldStyle {
    /// Plain foreground color.
    pub const fn fg(color: PromptColor) -> Self {
        Self {
            color,
            bold: false,
            dark_background: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn on_dark(mut self) -> Self {
        self.dark_background = true;
        self
    }
}

/// Semantic fields of the prompt, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptField {
    User,
    Host,
    Time,
    Directory,
}

impl PromptField {
    pub const ALL: [PromptField; 4] = [
        PromptField::User,
        PromptField::Host,
        PromptField::Time,
        PromptField::Directory,
    ];
}

/// Per-field styles for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub user: FieldStyle,
    pub host: FieldStyle,
    pub time: FieldStyle,
    pub directory: FieldStyle,
}

impl Palette {
    pub fn style(&self, field: PromptField) -> FieldStyle {
        match field {
            PromptField::User => self.user,
            PromptField::Host => self.host,
            PromptField::Time => self.time,
            PromptField::Directory => self.directory,
        }
    }
}
