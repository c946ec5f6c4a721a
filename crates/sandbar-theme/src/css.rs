//! Scoped stylesheet generation.
//!
//! Each resolved theme becomes one CSS rule set under `.sb-wrapper.<id>`,
//! exposing every theme value as a custom property so widget styling can
//! reference `var(--sb-...)` regardless of which theme is active.

use std::fmt::Write;

use crate::schema::SandboxTheme;

/// Render the stylesheet for a theme scoped to its identifier.
pub fn theme_css(theme: &SandboxTheme, id: &str) -> String {
    let mut css = String::new();
    let _ = writeln!(css, ".sb-wrapper.{id} {{");

    let palette = &theme.palette;
    for (name, value) in [
        ("active-text", &palette.active_text),
        ("default-text", &palette.default_text),
        ("inactive-text", &palette.inactive_text),
        ("active-background", &palette.active_background),
        ("default-background", &palette.default_background),
        ("input-background", &palette.input_background),
        ("accent", &palette.accent),
        ("error-background", &palette.error_background),
        ("error-foreground", &palette.error_foreground),
    ] {
        let _ = writeln!(css, "  --sb-palette-{name}: {value};");
    }

    let syntax = &theme.syntax;
    for (name, value) in [
        ("plain", &syntax.plain),
        ("comment", &syntax.comment),
        ("keyword", &syntax.keyword),
        ("tag", &syntax.tag),
        ("punctuation", &syntax.punctuation),
        ("definition", &syntax.definition),
        ("property", &syntax.property),
        ("static", &syntax.static_token),
        ("string", &syntax.string),
    ] {
        let _ = writeln!(css, "  --sb-syntax-{name}: {value};");
    }

    let typography = &theme.typography;
    for (name, value) in [
        ("body-font", &typography.body_font),
        ("mono-font", &typography.mono_font),
        ("font-size", &typography.font_size),
        ("line-height", &typography.line_height),
    ] {
        let _ = writeln!(css, "  --sb-typography-{name}: {value};");
    }

    let _ = writeln!(css, "  font-family: var(--sb-typography-body-font);");
    let _ = writeln!(css, "  font-size: var(--sb-typography-font-size);");
    let _ = writeln!(css, "  background-color: var(--sb-palette-default-background);");
    let _ = writeln!(css, "  color: var(--sb-palette-default-text);");
    let _ = writeln!(css, "}}");
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::ThemePreset;

    #[test]
    fn test_css_is_scoped_to_the_id() {
        let css = theme_css(&ThemePreset::NightOwl.theme(), "night-owl");
        assert!(css.starts_with(".sb-wrapper.night-owl {"));
        assert!(css.trim_end().ends_with('}'));
    }

    #[test]
    fn test_css_carries_theme_values() {
        let theme = ThemePreset::NightOwl.theme();
        let css = theme_css(&theme, "night-owl");
        assert!(css.contains(&format!("--sb-palette-accent: {};", theme.palette.accent)));
        assert!(css.contains(&format!("--sb-syntax-keyword: {};", theme.syntax.keyword)));
        assert!(css.contains(&format!(
            "--sb-typography-mono-font: {};",
            theme.typography.mono_font
        )));
    }
}
