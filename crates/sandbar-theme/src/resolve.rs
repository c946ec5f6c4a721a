//! Theme resolution.
//!
//! Turns a caller-supplied [`ThemeSpec`] (or none at all) into an immutable
//! `{id, theme}` pair with every theme field populated.

use crate::presets::ThemePreset;
use crate::schema::{PartialTheme, SandboxTheme};

/// Desired theme, as supplied by the widget embedder.
#[derive(Clone, Debug, PartialEq)]
pub enum ThemeSpec {
    /// One of the built-in themes.
    Preset(ThemePreset),
    /// Field-level overrides merged over the default theme.
    Partial(PartialTheme),
}

/// A resolved theme: stylesheet-scoping identifier plus the full theme
/// object.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedTheme {
    pub id: String,
    pub theme: SandboxTheme,
}

impl Default for ResolvedTheme {
    fn default() -> Self {
        resolve(None)
    }
}

/// Resolve a spec into a complete theme and identifier.
///
/// With no spec the default preset is returned under its own id. A preset
/// resolves to its built-in theme with the preset id. A partial override is
/// merged over the default theme and gets a content-derived id, so equal
/// overrides share an id and distinct overrides get distinct scoped
/// stylesheets.
pub fn resolve(spec: Option<&ThemeSpec>) -> ResolvedTheme {
    match spec {
        None => ResolvedTheme {
            id: ThemePreset::default().id().to_string(),
            theme: ThemePreset::default().theme(),
        },
        Some(ThemeSpec::Preset(preset)) => ResolvedTheme {
            id: preset.id().to_string(),
            theme: preset.theme(),
        },
        Some(ThemeSpec::Partial(partial)) => {
            let theme = partial.merge_over(&ThemePreset::default().theme());
            let id = custom_theme_id(&theme);
            ResolvedTheme { id, theme }
        }
    }
}

/// Content-derived identifier for merged custom themes.
fn custom_theme_id(theme: &SandboxTheme) -> String {
    let canonical = serde_json::to_vec(theme).expect("theme serialization is infallible");
    let hash = blake3::hash(&canonical);
    format!("custom-{}", &hash.to_hex().as_str()[..8])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::PartialPalette;

    fn accent_override(color: &str) -> ThemeSpec {
        ThemeSpec::Partial(PartialTheme {
            palette: Some(PartialPalette {
                accent: Some(color.to_string()),
                ..Default::default()
            }),
            ..Default::default()
        })
    }

    #[test]
    fn test_absent_spec_resolves_to_default() {
        let resolved = resolve(None);
        assert_eq!(resolved.id, "sandbar-light");
        assert_eq!(resolved.theme, ThemePreset::SandbarLight.theme());
    }

    #[test]
    fn test_absent_spec_is_idempotent() {
        assert_eq!(resolve(None), resolve(None));
        assert_eq!(resolve(None), ResolvedTheme::default());
    }

    #[test]
    fn test_preset_resolves_under_its_name() {
        let resolved = resolve(Some(&ThemeSpec::Preset(ThemePreset::NightOwl)));
        assert_eq!(resolved.id, "night-owl");
        assert_eq!(resolved.theme, ThemePreset::NightOwl.theme());
    }

    #[test]
    fn test_partial_overrides_one_field_keeps_the_rest() {
        let resolved = resolve(Some(&accent_override("#ff00ff")));
        let default_theme = ThemePreset::SandbarLight.theme();

        assert_eq!(resolved.theme.palette.accent, "#ff00ff");
        assert_eq!(
            resolved.theme.palette.default_text,
            default_theme.palette.default_text
        );
        assert_eq!(resolved.theme.syntax, default_theme.syntax);
        assert_eq!(resolved.theme.typography, default_theme.typography);
    }

    #[test]
    fn test_custom_id_is_deterministic() {
        let first = resolve(Some(&accent_override("#ff00ff")));
        let second = resolve(Some(&accent_override("#ff00ff")));
        assert_eq!(first.id, second.id);
        assert!(first.id.starts_with("custom-"));
    }

    #[test]
    fn test_custom_ids_differ_per_content() {
        let magenta = resolve(Some(&accent_override("#ff00ff")));
        let teal = resolve(Some(&accent_override("#00ffff")));
        assert_ne!(magenta.id, teal.id);
    }
}
