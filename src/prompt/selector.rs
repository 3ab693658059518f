//! Applying a theme to a shell session.

use crate::shell::ShellEnv;

use super::syntax::render;
use super::theme::Theme;

/// Select a theme by name and re-apply the session prompt.
///
/// Unknown names keep the theme already in force; the prompt is still
/// rendered so the session always ends up with one. Returns the theme
/// that was applied.
///
/// # Example
///
/// ```
/// use toolbox::prompt::{set_theme, Theme};
/// use toolbox::shell::{Dialect, ShellEnv};
///
/// let mut env = ShellEnv::new("", Dialect::Zsh);
/// assert_eq!(set_theme(&mut env, "vivid"), Theme::Vivid);
/// assert_eq!(set_theme(&mut env, "neon"), Theme::Vivid);
/// assert!(env.prompt().unwrap().contains("%F{green}%n"));
/// ```
pub fn set_theme(env: &mut ShellEnv, name: &str) -> Theme {
    match name.parse::<Theme>() {
        Ok(theme) => env.set_theme(theme),
        Err(e) => tracing::debug!("{}; keeping {}", e, env.theme()),
    }

    let theme = env.theme();
    env.set_prompt(render(theme, env.dialect()));
    theme
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::Dialect;

    #[test]
    fn known_theme_is_applied() {
        let mut env = ShellEnv::new("", Dialect::Bash);
        let applied = set_theme(&mut env, "high-contrast");
        assert_eq!(applied, Theme::HighContrast);
        assert_eq!(
            env.prompt(),
            Some(render(Theme::HighContrast, Dialect::Bash).as_str())
        );
    }

    #[test]
    fn unknown_theme_keeps_default() {
        let mut env = ShellEnv::new("", Dialect::Bash);
        let applied = set_theme(&mut env, "solarized");
        assert_eq!(applied, Theme::Minimal);
        assert_eq!(
            env.prompt(),
            Some(render(Theme::Minimal, Dialect::Bash).as_str())
        );
    }

    #[test]
    fn unknown_theme_keeps_previous_selection() {
        let mut env = ShellEnv::new("", Dialect::Zsh);
        set_theme(&mut env, "dark-contrast");
        let before = env.prompt().map(str::to_string);

        set_theme(&mut env, "not-a-theme");

        assert_eq!(env.theme(), Theme::DarkContrast);
        assert_eq!(env.prompt().map(str::to_string), before);
    }

    #[test]
    fn prompt_follows_session_dialect() {
        let mut env = ShellEnv::new("", Dialect::Zsh);
        set_theme(&mut env, "minimal");
        assert!(env.prompt().unwrap().ends_with("%# "));

        env.set_dialect(Dialect::Bash);
        set_theme(&mut env, "minimal");
        assert!(env.prompt().unwrap().ends_with(r"\$ "));
    }
}
