//! Theme object schema.
//!
//! A full [`SandboxTheme`] always has every field populated; callers that
//! only want to tweak a few values supply a [`PartialTheme`], which merges
//! over a base theme field by field.

use serde::{Deserialize, Serialize};

/// Interface color roles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub active_text: String,
    pub default_text: String,
    pub inactive_text: String,
    pub active_background: String,
    pub default_background: String,
    pub input_background: String,
    pub accent: String,
    pub error_background: String,
    pub error_foreground: String,
}

/// Syntax highlighting color roles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxColors {
    pub plain: String,
    pub comment: String,
    pub keyword: String,
    pub tag: String,
    pub punctuation: String,
    pub definition: String,
    pub property: String,
    pub static_token: String,
    pub string: String,
}

/// Font stacks and sizing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Typography {
    pub body_font: String,
    pub mono_font: String,
    pub font_size: String,
    pub line_height: String,
}

/// A fully-populated theme for the embeddable sandbox widget.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SandboxTheme {
    pub palette: Palette,
    pub syntax: SyntaxColors,
    pub typography: Typography,
}

/// Palette overrides.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialPalette {
    pub active_text: Option<String>,
    pub default_text: Option<String>,
    pub inactive_text: Option<String>,
    pub active_background: Option<String>,
    pub default_background: Option<String>,
    pub input_background: Option<String>,
    pub accent: Option<String>,
    pub error_background: Option<String>,
    pub error_foreground: Option<String>,
}

/// Syntax color overrides.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialSyntaxColors {
    pub plain: Option<String>,
    pub comment: Option<String>,
    pub keyword: Option<String>,
    pub tag: Option<String>,
    pub punctuation: Option<String>,
    pub definition: Option<String>,
    pub property: Option<String>,
    pub static_token: Option<String>,
    pub string: Option<String>,
}

/// Typography overrides.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialTypography {
    pub body_font: Option<String>,
    pub mono_font: Option<String>,
    pub font_size: Option<String>,
    pub line_height: Option<String>,
}

/// A sparse theme: only the fields a caller wants to change.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialTheme {
    pub palette: Option<PartialPalette>,
    pub syntax: Option<PartialSyntaxColors>,
    pub typography: Option<PartialTypography>,
}

fn pick(over: &Option<String>, base: &str) -> String {
    over.clone().unwrap_or_else(|| base.to_string())
}

impl PartialPalette {
    fn merge_over(&self, base: &Palette) -> Palette {
        Palette {
            active_text: pick(&self.active_text, &base.active_text),
            default_text: pick(&self.default_text, &base.default_text),
            inactive_text: pick(&self.inactive_text, &base.inactive_text),
            active_background: pick(&self.active_background, &base.active_background),
            default_background: pick(&self.default_background, &base.default_background),
            input_background: pick(&self.input_background, &base.input_background),
            accent: pick(&self.accent, &base.accent),
            error_background: pick(&self.error_background, &base.error_background),
            error_foreground: pick(&self.error_foreground, &base.error_foreground),
        }
    }
}

impl PartialSyntaxColors {
    fn merge_over(&self, base: &SyntaxColors) -> SyntaxColors {
        SyntaxColors {
            plain: pick(&self.plain, &base.plain),
            comment: pick(&self.comment, &base.comment),
            keyword: pick(&self.keyword, &base.keyword),
            tag: pick(&self.tag, &base.tag),
            punctuation: pick(&self.punctuation, &base.punctuation),
            definition: pick(&self.definition, &base.definition),
            property: pick(&self.property, &base.property),
            static_token: pick(&self.static_token, &base.static_token),
            string: pick(&self.string, &base.string),
        }
    }
}

impl PartialTypography {
    fn merge_over(&self, base: &Typography) -> Typography {
        Typography {
            body_font: pick(&self.body_font, &base.body_font),
            mono_font: pick(&self.mono_font, &base.mono_font),
            font_size: pick(&self.font_size, &base.font_size),
            line_height: pick(&self.line_height, &base.line_height),
        }
    }
}

impl PartialTheme {
    /// Merge this partial over a base theme. Every field of the result is
    /// populated; unset override fields keep the base value.
    pub fn merge_over(&self, base: &SandboxTheme) -> SandboxTheme {
        SandboxTheme {
            palette: match &self.palette {
                Some(palette) => palette.merge_over(&base.palette),
                None => base.palette.clone(),
            },
            syntax: match &self.syntax {
                Some(syntax) => syntax.merge_over(&base.syntax),
                None => base.syntax.clone(),
            },
            typography: match &self.typography {
                Some(typography) => typography.merge_over(&base.typography),
                None => base.typography.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::ThemePreset;

    #[test]
    fn test_empty_partial_is_identity() {
        let base = ThemePreset::SandbarLight.theme();
        assert_eq!(PartialTheme::default().merge_over(&base), base);
    }

    #[test]
    fn test_merge_keeps_unrelated_defaults() {
        let base = ThemePreset::SandbarLight.theme();
        let partial = PartialTheme {
            palette: Some(PartialPalette {
                accent: Some("#ff00ff".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let merged = partial.merge_over(&base);
        assert_eq!(merged.palette.accent, "#ff00ff");
        assert_eq!(merged.palette.default_text, base.palette.default_text);
        assert_eq!(merged.syntax, base.syntax);
        assert_eq!(merged.typography, base.typography);
    }
}
