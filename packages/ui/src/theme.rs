use std::rc::Rc;

use dioxus::prelude::*;
use store::RecordStorage;

use crate::icons::{FaMoon, FaSun};
use crate::storage::make_storage;
use crate::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Saved theme preference, or `fallback` when none (or an unreadable one) is stored.
pub fn load_theme_from_storage(storage: &impl RecordStorage, key: &str, fallback: Theme) -> Theme {
    match storage.read(key) {
        Ok(Some(value)) => Theme::parse(&value).unwrap_or(fallback),
        Ok(None) => fallback,
        Err(e) => {
            tracing::warn!("Could not read theme preference: {}", e);
            fallback
        }
    }
}

pub fn save_theme(storage: &impl RecordStorage, key: &str, theme: Theme) {
    if let Err(e) = storage.write(key, theme.as_str()) {
        tracing::warn!("Could not save theme preference: {}", e);
    }
}

/// Set `data-theme` on the root element; the stylesheet keys its palette off it.
pub fn apply_theme(theme: Theme) {
    let _ = document::eval(&format!(
        "document.documentElement.setAttribute('data-theme', '{}');",
        theme.as_str()
    ));
}

/// Current theme plus the record key it persists under.
#[derive(Clone, PartialEq)]
pub struct ThemeHandle {
    theme: Signal<Theme>,
    key: Rc<str>,
}

impl ThemeHandle {
    pub fn current(&self) -> Theme {
        (self.theme)()
    }

    pub fn toggle(&self) {
        let next = self.current().toggled();
        save_theme(&make_storage(), &self.key, next);
        let mut theme = self.theme;
        theme.set(next);
    }
}

pub fn use_theme() -> ThemeHandle {
    use_context::<ThemeHandle>()
}

#[component]
pub fn ThemeProvider(
    #[props(default = "portfolio-theme".to_string())] theme_key: String,
    #[props(default = "dark".to_string())] default_theme: String,
    children: Element,
) -> Element {
    let theme = use_signal(|| {
        let fallback = Theme::parse(&default_theme).unwrap_or(Theme::Dark);
        load_theme_from_storage(&make_storage(), &theme_key, fallback)
    });
    use_context_provider(|| ThemeHandle {
        theme,
        key: Rc::from(theme_key.as_str()),
    });

    use_effect(move || apply_theme(theme()));

    rsx! {
        {children}
    }
}

#[component]
pub fn ThemeToggle() -> Element {
    let handle = use_theme();
    let dark = handle.current() == Theme::Dark;

    rsx! {
        button {
            class: "theme-toggle",
            title: "Toggle theme",
            onclick: move |_| handle.toggle(),
            if dark {
                Icon { icon: FaSun, width: 18, height: 18 }
            } else {
                Icon { icon: FaMoon, width: 18, height: 18 }
            }
        }
    }
}
