//! Predefined themes shipped with the widget.

use std::str::FromStr;

use thiserror::Error;

use crate::schema::{Palette, SandboxTheme, SyntaxColors, Typography};

/// Theme lookup errors.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// Name does not match any predefined theme
    #[error("unknown theme preset: {0}")]
    UnknownPreset(String),
}

/// Built-in, fully-specified themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreset {
    #[default]
    SandbarLight,
    SandbarDark,
    NightOwl,
    AquaBlue,
}

impl ThemePreset {
    /// Kebab-case identifier used for stylesheet scoping.
    pub fn id(&self) -> &'static str {
        match self {
            ThemePreset::SandbarLight => "sandbar-light",
            ThemePreset::SandbarDark => "sandbar-dark",
            ThemePreset::NightOwl => "night-owl",
            ThemePreset::AquaBlue => "aqua-blue",
        }
    }

    /// Returns the display name for the preset.
    pub fn display_name(&self) -> &'static str {
        match self {
            ThemePreset::SandbarLight => "Sandbar Light",
            ThemePreset::SandbarDark => "Sandbar Dark",
            ThemePreset::NightOwl => "Night Owl",
            ThemePreset::AquaBlue => "Aqua Blue",
        }
    }

    /// Returns all available presets.
    pub fn all() -> &'static [ThemePreset] {
        &[
            ThemePreset::SandbarLight,
            ThemePreset::SandbarDark,
            ThemePreset::NightOwl,
            ThemePreset::AquaBlue,
        ]
    }

    /// The full theme object for this preset.
    pub fn theme(&self) -> SandboxTheme {
        match self {
            ThemePreset::SandbarLight => sandbar_light(),
            ThemePreset::SandbarDark => sandbar_dark(),
            ThemePreset::NightOwl => night_owl(),
            ThemePreset::AquaBlue => aqua_blue(),
        }
    }
}

impl FromStr for ThemePreset {
    type Err = ThemeError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        ThemePreset::all()
            .iter()
            .copied()
            .find(|preset| preset.id() == name)
            .ok_or_else(|| ThemeError::UnknownPreset(name.to_string()))
    }
}

fn typography(body: &str, mono: &str) -> Typography {
    Typography {
        body_font: body.to_string(),
        mono_font: mono.to_string(),
        font_size: "14px".to_string(),
        line_height: "1.4".to_string(),
    }
}

const BODY_FONT: &str = "'Inter', -apple-system, sans-serif";
const MONO_FONT: &str = "'JetBrains Mono', 'Fira Mono', monospace";

fn sandbar_light() -> SandboxTheme {
    SandboxTheme {
        palette: Palette {
            active_text: "#1f2933".to_string(),
            default_text: "#737373".to_string(),
            inactive_text: "#e4e7eb".to_string(),
            active_background: "#e4e7eb".to_string(),
            default_background: "#f8f9fb".to_string(),
            input_background: "#ffffff".to_string(),
            accent: "#6caedd".to_string(),
            error_background: "#ffcdca".to_string(),
            error_foreground: "#811e18".to_string(),
        },
        syntax: SyntaxColors {
            plain: "#1f2933".to_string(),
            comment: "#a7b6c2".to_string(),
            keyword: "#1a56db".to_string(),
            tag: "#1a56db".to_string(),
            punctuation: "#394b59".to_string(),
            definition: "#a23dad".to_string(),
            property: "#14919b".to_string(),
            static_token: "#1a56db".to_string(),
            string: "#1992d4".to_string(),
        },
        typography: typography(BODY_FONT, MONO_FONT),
    }
}

fn sandbar_dark() -> SandboxTheme {
    SandboxTheme {
        palette: Palette {
            active_text: "#ffffff".to_string(),
            default_text: "#999999".to_string(),
            inactive_text: "#343434".to_string(),
            active_background: "#343434".to_string(),
            default_background: "#040404".to_string(),
            input_background: "#242424".to_string(),
            accent: "#6caedd".to_string(),
            error_background: "#ffcdca".to_string(),
            error_foreground: "#811e18".to_string(),
        },
        syntax: SyntaxColors {
            plain: "#f0fdaf".to_string(),
            comment: "#757575".to_string(),
            keyword: "#64d2ff".to_string(),
            tag: "#86d9ca".to_string(),
            punctuation: "#ffffff".to_string(),
            definition: "#fac863".to_string(),
            property: "#86d9ca".to_string(),
            static_token: "#64d2ff".to_string(),
            string: "#f9cc6c".to_string(),
        },
        typography: typography(BODY_FONT, MONO_FONT),
    }
}

fn night_owl() -> SandboxTheme {
    SandboxTheme {
        palette: Palette {
            active_text: "#d6deeb".to_string(),
            default_text: "#8ba7a7".to_string(),
            inactive_text: "#2c3043".to_string(),
            active_background: "#2c3043".to_string(),
            default_background: "#011627".to_string(),
            input_background: "#0b2942".to_string(),
            accent: "#7fdbca".to_string(),
            error_background: "#ef5350".to_string(),
            error_foreground: "#ffffff".to_string(),
        },
        syntax: SyntaxColors {
            plain: "#d6deeb".to_string(),
            comment: "#637777".to_string(),
            keyword: "#c792ea".to_string(),
            tag: "#7fdbca".to_string(),
            punctuation: "#7fdbca".to_string(),
            definition: "#82aaff".to_string(),
            property: "#addb67".to_string(),
            static_token: "#f78c6c".to_string(),
            string: "#ecc48d".to_string(),
        },
        typography: typography(BODY_FONT, MONO_FONT),
    }
}

fn aqua_blue() -> SandboxTheme {
    SandboxTheme {
        palette: Palette {
            active_text: "#1f2933".to_string(),
            default_text: "#504f54".to_string(),
            inactive_text: "#e4e7eb".to_string(),
            active_background: "#e4e7eb".to_string(),
            default_background: "#f1f3f5".to_string(),
            input_background: "#ffffff".to_string(),
            accent: "#2e7692".to_string(),
            error_background: "#ffcdca".to_string(),
            error_foreground: "#811e18".to_string(),
        },
        syntax: SyntaxColors {
            plain: "#1f2933".to_string(),
            comment: "#a0a4a8".to_string(),
            keyword: "#2e7692".to_string(),
            tag: "#085c74".to_string(),
            punctuation: "#394b59".to_string(),
            definition: "#086f7c".to_string(),
            property: "#2e7692".to_string(),
            static_token: "#086f7c".to_string(),
            string: "#2f8861".to_string(),
        },
        typography: typography(BODY_FONT, MONO_FONT),
    }
}
