//! Dialect-specific prompt syntax.
//!
//! Bash expands backslash escapes in `PS1` and needs non-printing
//! sequences wrapped in `\[ \]`. Zsh expands `%` escapes in `PROMPT` and
//! tracks widths itself. Both render the same [`Palette`].

use crate::shell::Dialect;

use super::theme::{FieldStyle, Palette, PromptColor, PromptField, Theme};

/// 256-color index of the shared dark background.
const DARK_BACKGROUND: u8 = 236;

/// Formatting strategy for one shell dialect.
pub trait PromptSyntax {
    /// Escape that expands to the field's live value.
    fn placeholder(&self, field: PromptField) -> &'static str;

    /// Wrap `text` in the escapes for `style`.
    fn paint(&self, text: &str, style: FieldStyle) -> String;

    /// Trailing prompt character (`$`/`#` style).
    fn terminator(&self) -> &'static str;
}

/// `PS1` escapes for bash.
#[derive(Debug, Clone, Copy, Default)]
pub struct BashSyntax;

impl BashSyntax {
    fn color_code(color: PromptColor) -> &'static str {
        match color {
            PromptColor::White => "37",
            PromptColor::Cyan => "36",
            PromptColor::Gray => "90",
            PromptColor::Yellow => "33",
            PromptColor::Green => "32",
            PromptColor::Blue => "34",
            PromptColor::Magenta => "35",
            PromptColor::BrightWhite => "97",
            PromptColor::BrightYellow => "93",
            PromptColor::BrightRed => "91",
            PromptColor::BrightCyan => "96",
            PromptColor::Violet => "38;5;141",
            PromptColor::Gold => "38;5;220",
        }
    }
}

impl PromptSyntax for BashSyntax {
    fn placeholder(&self, field: PromptField) -> &'static str {
        match field {
            PromptField::User => r"\u",
            PromptField::Host => r"\h",
            PromptField::Time => r"\t",
            PromptField::Directory => r"\w",
        }
    }

    fn paint(&self, text: &str, style: FieldStyle) -> String {
        let mut codes = Vec::new();
        if style.bold {
            codes.push("1".to_string());
        }
        if style.dark_background {
            codes.push(format!("48;5;{}", DARK_BACKGROUND));
        }
        codes.push(Self::color_code(style.color).to_string());

        format!(r"\[\e[{}m\]{}\[\e[0m\]", codes.join(";"), text)
    }

    fn terminator(&self) -> &'static str {
        r"\$"
    }
}

/// `PROMPT` escapes for zsh.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZshSyntax;

impl ZshSyntax {
    fn color_name(color: PromptColor) -> &'static str {
        match color {
            PromptColor::White => "white",
            PromptColor::Cyan => "cyan",
            PromptColor::Gray => "8",
            PromptColor::Yellow => "yellow",
            PromptColor::Green => "green",
            PromptColor::Blue => "blue",
            PromptColor::Magenta => "magenta",
            PromptColor::BrightWhite => "15",
            PromptColor::BrightYellow => "11",
            PromptColor::BrightRed => "9",
            PromptColor::BrightCyan => "14",
            PromptColor::Violet => "141",
            PromptColor::Gold => "220",
        }
    }
}

impl PromptSyntax for ZshSyntax {
    fn placeholder(&self, field: PromptField) -> &'static str {
        match field {
            PromptField::User => "%n",
            PromptField::Host => "%m",
            PromptField::Time => "%*",
            PromptField::Directory => "%~",
        }
    }

    fn paint(&self, text: &str, style: FieldStyle) -> String {
        let mut out = String::new();

        // Opening escapes
        if style.bold {
            out.push_str("%B");
        }
        if style.dark_background {
            out.push_str(&format!("%K{{{}}}", DARK_BACKGROUND));
        }
        out.push_str(&format!("%F{{{}}}", Self::color_name(style.color)));

        out.push_str(text);

        // Closing escapes (in reverse order)
        out.push_str("%f");
        if style.dark_background {
            out.push_str("%k");
        }
        if style.bold {
            out.push_str("%b");
        }
        out
    }

    fn terminator(&self) -> &'static str {
        "%#"
    }
}

/// The formatting strategy for a dialect.
pub fn syntax_for(dialect: Dialect) -> &'static dyn PromptSyntax {
    match dialect {
        Dialect::Bash => &BashSyntax,
        Dialect::Zsh => &ZshSyntax,
    }
}

/// Assemble the prompt: user, `@`, host, time, directory, terminator.
pub fn render_with(palette: &Palette, syntax: &dyn PromptSyntax) -> String {
    let field = |f: PromptField| syntax.paint(syntax.placeholder(f), palette.style(f));

    format!(
        "{}@{} {} {}{} ",
        field(PromptField::User),
        field(PromptField::Host),
        field(PromptField::Time),
        field(PromptField::Directory),
        syntax.terminator()
    )
}

/// Render `theme` for `dialect`.
pub fn render(theme: Theme, dialect: Dialect) -> String {
    render_with(&theme.palette(), syntax_for(dialect))
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    fn positions(prompt: &str, syntax: &dyn PromptSyntax) -> Vec<usize> {
        PromptField::ALL
            .iter()
            .map(|f| prompt.find(syntax.placeholder(*f)).unwrap())
            .collect()
    }

    #[test]
    fn bash_plain_color() {
        let actual = BashSyntax.paint("x", FieldStyle::fg(PromptColor::Cyan));
        assert_eq!(actual, r"\[\e[36m\]x\[\e[0m\]");
    }

    #[test]
    fn bash_bold_on_dark() {
        let style = FieldStyle::fg(PromptColor::Gold).bold().on_dark();
        let actual = BashSyntax.paint("x", style);
        assert_eq!(actual, r"\[\e[1;48;5;236;38;5;220m\]x\[\e[0m\]");
    }

    #[test]
    fn zsh_plain_color() {
        let actual = ZshSyntax.paint("x", FieldStyle::fg(PromptColor::Cyan));
        assert_eq!(actual, "%F{cyan}x%f");
    }

    #[test]
    fn zsh_bold_on_dark() {
        let style = FieldStyle::fg(PromptColor::Violet).bold().on_dark();
        let actual = ZshSyntax.paint("x", style);
        assert_eq!(actual, "%B%K{236}%F{141}x%f%k%b");
    }

    #[test]
    fn bash_minimal_prompt() {
        assert_snapshot!(
            render(Theme::Minimal, Dialect::Bash),
            @r"\[\e[37m\]\u\[\e[0m\]@\[\e[36m\]\h\[\e[0m\] \[\e[90m\]\t\[\e[0m\] \[\e[33m\]\w\[\e[0m\]\$"
        );
    }

    #[test]
    fn zsh_high_contrast_prompt() {
        assert_snapshot!(
            render(Theme::HighContrast, Dialect::Zsh),
            @"%B%F{15}%n%f%b@%B%F{11}%m%f%b %B%F{9}%*%f%b %B%F{14}%~%f%b%#"
        );
    }

    #[test]
    fn every_theme_renders_fields_in_order() {
        for dialect in [Dialect::Bash, Dialect::Zsh] {
            let syntax = syntax_for(dialect);
            for theme in Theme::ALL {
                let prompt = render(theme, dialect);
                let pos = positions(&prompt, syntax);
                assert!(
                    pos.windows(2).all(|w| w[0] < w[1]),
                    "{theme} / {dialect}: {prompt}"
                );
                assert!(prompt.contains('@'));
                assert!(prompt.ends_with(&format!("{} ", syntax.terminator())));
            }
        }
    }

    #[test]
    fn themes_render_differently() {
        let rendered: Vec<_> = Theme::ALL
            .iter()
            .map(|t| render(*t, Dialect::Zsh))
            .collect();
        for (i, a) in rendered.iter().enumerate() {
            for b in &rendered[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn dialects_render_differently() {
        assert_ne!(
            render(Theme::Vivid, Dialect::Bash),
            render(Theme::Vivid, Dialect::Zsh)
        );
    }
}
