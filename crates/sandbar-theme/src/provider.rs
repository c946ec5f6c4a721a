//! Theme provider and consumer hook.

use dioxus::prelude::*;

use crate::resolve::{ResolvedTheme, ThemeSpec, resolve};
use crate::stylesheet::inject_theme_stylesheet;

/// Resolves a theme spec and exposes the result to all descendants.
///
/// When a spec is explicitly supplied, the matching scoped stylesheet is
/// registered globally; with no spec, descendants see the default theme and
/// nothing is injected. Children are wrapped in `div.sb-wrapper.<id>` so the
/// scoped custom properties apply. Nested providers shadow outer ones.
#[component]
pub fn ThemeProvider(theme: Option<ThemeSpec>, children: Element) -> Element {
    let resolved = resolve(theme.as_ref());

    if theme.is_some() {
        inject_theme_stylesheet(&resolved.theme, &resolved.id);
    }

    let mut shared = use_context_provider(|| Signal::new(resolved.clone()));
    if *shared.peek() != resolved {
        shared.set(resolved.clone());
    }

    rsx! {
        div { class: "sb-wrapper {resolved.id}", {children} }
    }
}

/// The resolved theme provided by the nearest [`ThemeProvider`], or the
/// built-in default when no provider is in scope.
pub fn use_theme() -> ResolvedTheme {
    match try_consume_context::<Signal<ResolvedTheme>>() {
        Some(shared) => shared(),
        None => ResolvedTheme::default(),
    }
}
