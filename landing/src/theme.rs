//! Light/dark theme toggling.
//!
//! The theme is a class on `<html>`. It starts from the visitor's
//! `prefers-color-scheme` and is never stored.

use leptos::prelude::*;

use crate::error::{LandingError, Result};

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Glyph for the toggle button: the theme you would switch *to*.
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            Theme::Light => "☾",
            Theme::Dark => "☀",
        }
    }
}

/// Theme requested by the browser. Dark when it cannot be determined.
pub fn preferred_theme() -> Theme {
    let prefers_dark = web_sys::window()
        .and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
        .map(|query| query.matches());
    match prefers_dark {
        Some(dark) => Theme::from_prefers_dark(dark),
        None => Theme::Dark,
    }
}

/// Set the `dark` class on the document element to match `theme`.
pub fn apply_theme(theme: Theme) -> Result<()> {
    let document = web_sys::window()
        .ok_or(LandingError::NoWindow)?
        .document()
        .ok_or(LandingError::NoDocument)?;
    let root = document
        .document_element()
        .ok_or_else(|| LandingError::MissingElement { id: "html".into() })?;
    root.class_list()
        .toggle_with_force(Theme::Dark.class_name(), theme.is_dark())?;
    Ok(())
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let (theme, set_theme) = signal(preferred_theme());

    Effect::new(move || {
        let current = theme.get();
        match apply_theme(current) {
            Ok(()) => tracing::info!(theme = current.class_name(), "theme applied"),
            Err(err) => tracing::warn!("theme not applied: {}", err),
        }
    });

    view! {
        <button
            class="theme-toggle"
            aria-label="Toggle dark mode"
            on:click=move |_| set_theme.update(|t| *t = t.toggled())
        >
            {move || theme.get().toggle_glyph()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn follows_media_preference() {
        assert_eq!(Theme::from_prefers_dark(true), Theme::Dark);
        assert_eq!(Theme::from_prefers_dark(false), Theme::Light);
    }

    #[test]
    fn glyph_points_at_the_other_theme() {
        assert_eq!(Theme::Dark.toggle_glyph(), "☀");
        assert_eq!(Theme::Light.toggle_glyph(), "☾");
    }
}
