//! Theming for the embeddable Sandbar widget.
//!
//! Resolves a theme spec (predefined name, partial override, or nothing)
//! into a complete theme plus a stable identifier, generates the scoped
//! stylesheet for it, and provides the result to a component subtree.

pub mod css;
pub mod presets;
pub mod provider;
pub mod resolve;
pub mod schema;
pub mod stylesheet;

pub use css::theme_css;
pub use presets::{ThemeError, ThemePreset};
pub use provider::{ThemeProvider, use_theme};
pub use resolve::{ResolvedTheme, ThemeSpec, resolve};
pub use schema::{
    Palette, PartialPalette, PartialSyntaxColors, PartialTheme, PartialTypography, SandboxTheme,
    SyntaxColors, Typography,
};
pub use stylesheet::{STYLESHEETS, StyleOutlet, StyleRegistry, inject_theme_stylesheet};
