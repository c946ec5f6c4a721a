//! Global stylesheet registry.
//!
//! The injection target for theme stylesheets: a map keyed by theme id with
//! replace-on-reinject semantics, so re-injecting an id never duplicates a
//! sheet. [`StyleOutlet`] renders the combined registry; mount it once at
//! the app root.

use std::collections::BTreeMap;

use dioxus::prelude::*;

use crate::css::theme_css;
use crate::schema::SandboxTheme;

/// Id-keyed stylesheet store.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleRegistry {
    sheets: BTreeMap<String, String>,
}

impl StyleRegistry {
    /// Insert or replace the sheet for an id. Returns true when an existing
    /// sheet was replaced.
    pub fn inject(&mut self, id: &str, css: String) -> bool {
        self.sheets.insert(id.to_string(), css).is_some()
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.sheets.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// All sheets joined in id order.
    pub fn combined(&self) -> String {
        self.sheets.values().cloned().collect::<Vec<_>>().join("\n")
    }
}

/// Registry for every injected theme stylesheet.
pub static STYLESHEETS: GlobalSignal<StyleRegistry> = GlobalSignal::new(StyleRegistry::default);

/// Generate and register the stylesheet for a theme under its id.
pub fn inject_theme_stylesheet(theme: &SandboxTheme, id: &str) {
    let css = theme_css(theme, id);
    // Skip the write when nothing changed; a provider resolves on every
    // render and must not loop the registry subscribers.
    if STYLESHEETS.peek().get(id) == Some(css.as_str()) {
        return;
    }
    tracing::debug!("injecting theme stylesheet: {id}");
    STYLESHEETS.write().inject(id, css);
}

/// Renders every registered theme stylesheet.
#[component]
pub fn StyleOutlet() -> Element {
    let css = STYLESHEETS.read().combined();

    rsx! {
        style { "{css}" }
    }
}
