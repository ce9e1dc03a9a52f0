// ABOUTME: Theme and DesignTokenSet models plus the built-in light/dark themes
// ABOUTME: Identity is the id string; token contents never participate in equality

use serde::Serialize;

use chromatide_types::ThemeMode;

use crate::tokens::{
    ColorTokens, RadiusTokens, ShadowTokens, SpaceTokens, TypographyTokens,
};

pub const DEFAULT_FONT_FAMILY: &str = "PingFangSC";

/// A complete, named set of design tokens.
#[derive(Debug, Clone, Serialize)]
pub struct DesignTokenSet {
    pub id: String,
    pub display_name: String,
    pub color: ColorTokens,
    pub space: SpaceTokens,
    pub radius: RadiusTokens,
    pub typography: TypographyTokens,
    pub shadows: ShadowTokens,
    pub is_enabled: bool,
}

impl PartialEq for DesignTokenSet {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl DesignTokenSet {
    pub fn light_tokens() -> Self {
        Self::light_branded(ColorTokens::DEFAULT_LIGHT_SEED)
    }

    pub fn dark_tokens() -> Self {
        Self::dark_branded(ColorTokens::DEFAULT_DARK_SEED)
    }

    /// Light token set with the primary ramp reseeded from a brand color.
    pub fn light_branded(seed: &str) -> Self {
        Self {
            id: "light-tokens".to_string(),
            display_name: "Light Tokens".to_string(),
            color: ColorTokens::light(seed),
            space: SpaceTokens::standard(),
            radius: RadiusTokens::standard(),
            typography: TypographyTokens::new(Some(DEFAULT_FONT_FAMILY.to_string())),
            shadows: ShadowTokens::standard(),
            is_enabled: true,
        }
    }

    /// Dark token set with the primary ramp reseeded from a brand color.
    /// Dark surfaces take the stronger shadow pair.
    pub fn dark_branded(seed: &str) -> Self {
        Self {
            id: "dark-tokens".to_string(),
            display_name: "Dark Tokens".to_string(),
            color: ColorTokens::dark(seed),
            space: SpaceTokens::standard(),
            radius: RadiusTokens::standard(),
            typography: TypographyTokens::new(Some(DEFAULT_FONT_FAMILY.to_string())),
            shadows: ShadowTokens::strong(),
            is_enabled: true,
        }
    }
}

/// A theme: an identity wrapped around one token set.
#[derive(Debug, Clone, Serialize)]
pub struct Theme {
    pub id: String,
    pub display_name: String,
    pub mode: ThemeMode,
    pub tokens: DesignTokenSet,
}

impl PartialEq for Theme {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Theme {
    pub fn light() -> Self {
        Self {
            id: "light".to_string(),
            display_name: "Light".to_string(),
            mode: ThemeMode::Light,
            tokens: DesignTokenSet::light_tokens(),
        }
    }

    pub fn dark() -> Self {
        Self {
            id: "dark".to_string(),
            display_name: "Dark".to_string(),
            mode: ThemeMode::Dark,
            tokens: DesignTokenSet::dark_tokens(),
        }
    }

    /// Light theme whose primary ramp derives from a brand seed color.
    pub fn light_branded(seed: &str) -> Self {
        Self {
            id: format!("light-{}", seed.trim_start_matches('#').to_lowercase()),
            display_name: "Light (Branded)".to_string(),
            mode: ThemeMode::Light,
            tokens: DesignTokenSet::light_branded(seed),
        }
    }

    /// Dark theme whose primary ramp derives from a brand seed color.
    pub fn dark_branded(seed: &str) -> Self {
        Self {
            id: format!("dark-{}", seed.trim_start_matches('#').to_lowercase()),
            display_name: "Dark (Branded)".to_string(),
            mode: ThemeMode::Dark,
            tokens: DesignTokenSet::dark_branded(seed),
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    pub fn color(&self) -> &ColorTokens {
        &self.tokens.color
    }

    pub fn space(&self) -> &SpaceTokens {
        &self.tokens.space
    }

    pub fn radius(&self) -> &RadiusTokens {
        &self.tokens.radius
    }

    pub fn typography(&self) -> &TypographyTokens {
        &self.tokens.typography
    }

    pub fn shadows(&self) -> &ShadowTokens {
        &self.tokens.shadows
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_themes_carry_their_mode() {
        assert_eq!(Theme::light().mode, ThemeMode::Light);
        assert!(!Theme::light().is_dark());
        assert_eq!(Theme::dark().mode, ThemeMode::Dark);
        assert!(Theme::dark().is_dark());
    }

    #[test]
    fn equality_is_by_id() {
        let mut relabeled = Theme::light();
        relabeled.display_name = "Something else".to_string();
        assert_eq!(relabeled, Theme::light());
        assert_ne!(Theme::light(), Theme::dark());
    }

    #[test]
    fn branded_themes_reseed_only_the_primary_ramp() {
        let branded = Theme::light_branded("#7B2FBE");
        let stock = Theme::light();

        assert_ne!(
            branded.color().button_primary_default,
            stock.color().button_primary_default
        );
        assert_eq!(branded.color().text_error, stock.color().text_error);
        assert_eq!(branded.id, "light-7b2fbe");
    }

    #[test]
    fn dark_theme_uses_strong_shadows() {
        let dark = Theme::dark();
        assert!((dark.shadows().small.color.a - 0.3).abs() < 1e-6);

        let light = Theme::light();
        assert!((light.shadows().small.color.a - 0.12).abs() < 1e-6);
    }

    #[test]
    fn for_mode_picks_the_matching_built_in() {
        assert_eq!(Theme::for_mode(ThemeMode::Light), Theme::light());
        assert_eq!(Theme::for_mode(ThemeMode::Dark), Theme::dark());
    }

    #[test]
    fn token_sets_compare_by_id() {
        assert_eq!(DesignTokenSet::light_tokens(), DesignTokenSet::light_branded("#c81e1e"));
        assert_ne!(DesignTokenSet::light_tokens(), DesignTokenSet::dark_tokens());
    }
}
