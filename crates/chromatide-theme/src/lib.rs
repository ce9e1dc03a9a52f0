// ABOUTME: Brand palette generation, semantic design tokens, and theme state
// ABOUTME: Layer 2: depends on chromatide-types and chromatide-logging only

pub mod generator;
pub mod palettes;
pub mod store;
pub mod theme;
pub mod tokens;

pub use generator::{closest_palette, generate_theme_colors, is_standard_color, neutral_colors};
pub use store::{SubscriptionId, ThemePreference, ThemeStore};
pub use theme::{DesignTokenSet, Theme};
pub use tokens::{
    AccentColors, BlackColors, BrandColors, ColorPalettes, ColorTokens, FontSpec, FontWeight,
    NeutralColors, RadiusTokens, Shadow, ShadowTokens, SpaceTokens, TypographyTokens, WhiteColors,
};

// The color primitives travel with the tokens that use them.
pub use chromatide_types::{Color, Hsl, ThemeMode, hex_to_hsl, hsl_to_hex};
