use leptos::prelude::*;

pub const STORAGE_KEY: &str = "theme-preference";

/// Closed set of color-scheme preferences. Anything else found in
/// storage falls back to the default instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    pub fn parse(value: &str) -> Theme {
        match value {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            "system" => Theme::System,
            _ => Theme::default(),
        }
    }

    /// Next preference in the toggle cycle.
    pub fn next(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::System,
            Theme::System => Theme::Light,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Theme::Light => "\u{2600}",  // ☀
            Theme::Dark => "\u{263E}",   // ☾
            Theme::System => "\u{25D1}", // ◑
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self.next() {
            Theme::Light => "Switch to light mode",
            Theme::Dark => "Switch to dark mode",
            Theme::System => "Follow system color scheme",
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: ReadSignal<Theme>,
    pub set_theme: WriteSignal<Theme>,
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Last persisted preference, or the default when storage is missing or
/// holds an unrecognized value.
pub fn load_theme() -> Theme {
    local_storage()
        .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
        .map(|v| Theme::parse(&v))
        .unwrap_or_default()
}

/// Persist the preference. Storage failures (private browsing, quota)
/// are ignored; the theme still applies for the current visit.
pub fn store_theme(theme: Theme) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(STORAGE_KEY, theme.as_str());
    }
}

/// Apply the theme by setting or removing the `data-theme` attribute on
/// `<html>`.
/// - "light" → forces light
/// - "dark" → forces dark
/// - "system" → removes attribute, CSS @media handles it
pub fn apply_theme(theme: Theme) {
    if let Some(window) = web_sys::window() {
        if let Some(doc) = window.document() {
            if let Some(html) = doc.document_element() {
                match theme {
                    Theme::Light => {
                        let _ = html.set_attribute("data-theme", "light");
                    }
                    Theme::Dark => {
                        let _ = html.set_attribute("data-theme", "dark");
                    }
                    Theme::System => {
                        let _ = html.remove_attribute("data-theme");
                    }
                }
            }
        }
    }
}
