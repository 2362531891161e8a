//! Theme persistence and `<html>` class application.
//!
//! Reads the user's preference from `localStorage` and applies the
//! `.dark-mode` class to the `<html>` element. Requires a browser
//! environment; off-browser every call is a no-op.

#[cfg(test)]
#[path = "theme_storage_test.rs"]
mod theme_storage_test;

use crate::state::theme::ThemeMode;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "libdesk_theme";

/// Read the stored theme, falling back to the system preference.
pub fn read_preference() -> ThemeMode {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return ThemeMode::Light;
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                if let Some(mode) = ThemeMode::parse(&val) {
                    return mode;
                }
            }
        }

        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());
        if prefers_dark { ThemeMode::Dark } else { ThemeMode::Light }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ThemeMode::Light
    }
}

/// Apply or remove the `.dark-mode` class on the `<html>` element.
pub fn apply(mode: ThemeMode) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let class_list = el.class_list();
            let _ = match mode {
                ThemeMode::Dark => class_list.add_1("dark-mode"),
                ThemeMode::Light => class_list.remove_1("dark-mode"),
            };
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}

/// Toggle the theme, apply it, and persist the new preference.
pub fn toggle(current: ThemeMode) -> ThemeMode {
    let next = current.toggled();
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, next.as_str());
            }
        }
    }
    next
}
