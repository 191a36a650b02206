//! Theme application on the document root.
//!
//! Writes the session's theme to the `data-theme` attribute of `<html>`.
//! Persistence belongs to the session gate; this module only reflects the
//! current value into the DOM. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! SSR paths no-op to keep server rendering deterministic; the first client
//! effect after hydration applies the stored theme.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::Theme;

/// Attribute on `<html>` that stylesheets key off.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Apply `theme` to the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute(THEME_ATTRIBUTE, theme.as_str());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}
