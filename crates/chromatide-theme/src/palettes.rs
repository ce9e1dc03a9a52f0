// ABOUTME: Curated brand ramps, HSL adjustment recipes, and fixed neutral grays
// ABOUTME: All ramp generation ultimately resolves against these tables

use chromatide_types::ThemeMode;

/// Per-step saturation/lightness delta applied to a seed color when a ramp is
/// derived dynamically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjustment {
    pub s: f64,
    pub l: f64,
}

impl Adjustment {
    const fn new(s: f64, l: f64) -> Self {
        Self { s, l }
    }
}

/// A hand-tuned 10-step ramp for one brand hue, with separate light and dark
/// curves. Step indices run 1..=10 (array index + 1); step 6 is the base.
#[derive(Debug, Clone, Copy)]
pub struct RampPalette {
    pub name: &'static str,
    pub light: [&'static str; 10],
    pub dark: [&'static str; 10],
}

impl RampPalette {
    pub fn steps(&self, mode: ThemeMode) -> &[&'static str; 10] {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }

    /// The curated base color. Seed classification always measures against
    /// the light-mode step 6, regardless of the requested mode.
    pub fn base(&self) -> &'static str {
        self.light[5]
    }
}

pub static BLUE_PALETTE: RampPalette = RampPalette {
    name: "blue",
    light: [
        "#ebf3ff", "#cce2ff", "#adcfff", "#7aafff", "#4588f5", "#1c66e5", "#0d49bf", "#033099",
        "#001f73", "#00124d",
    ],
    dark: [
        "#1c2333", "#243047", "#2f4875", "#305ba6", "#2b6ad6", "#4086ff", "#5c9dff", "#78b0ff",
        "#9cc7ff", "#c2deff",
    ],
};

pub static GREEN_PALETTE: RampPalette = RampPalette {
    name: "green",
    light: [
        "#dcfae9", "#b6f0d1", "#84e3b5", "#5ad69e", "#3cc98c", "#0abf77", "#09a768", "#078f59",
        "#067049", "#044d37",
    ],
    dark: [
        "#1a2620", "#22352c", "#2f4f3f", "#377355", "#368f65", "#38a673", "#62b58b", "#8bc7a9",
        "#a9d4bd", "#c8e5d5",
    ],
};

pub static RED_PALETTE: RampPalette = RampPalette {
    name: "red",
    light: [
        "#ffe7e6", "#fcc9c7", "#faaeac", "#f58989", "#e86666", "#e54545", "#c93439", "#ad2934",
        "#8f222d", "#6b1a27",
    ],
    dark: [
        "#2b1c1f", "#422324", "#613234", "#8a4242", "#c2544e", "#e6594c", "#e57a6e", "#f3a599",
        "#facbc3", "#fae4de",
    ],
};

pub static ORANGE_PALETTE: RampPalette = RampPalette {
    name: "orange",
    light: [
        "#ffeedb", "#ffd6b2", "#ffbe85", "#ffa455", "#ff8b2b", "#ff7200", "#e05d00", "#bf4900",
        "#8f370b", "#662200",
    ],
    dark: [
        "#211a19", "#35231a", "#462e1f", "#653c21", "#96562a", "#e37f32", "#e39552", "#eead72",
        "#f7cfa4", "#f9e9d1",
    ],
};

/// Classification order matters: ties in distance resolve to the earlier
/// entry, blue first.
pub static BASE_PALETTES: [&RampPalette; 4] = [
    &BLUE_PALETTE,
    &GREEN_PALETTE,
    &RED_PALETTE,
    &ORANGE_PALETTE,
];

/// (Δs, Δl) recipe per step for light mode. Step 6 is the identity.
pub const LIGHT_ADJUSTMENTS: [Adjustment; 10] = [
    Adjustment::new(-40.0, 45.0),
    Adjustment::new(-30.0, 35.0),
    Adjustment::new(-20.0, 25.0),
    Adjustment::new(-10.0, 15.0),
    Adjustment::new(-5.0, 5.0),
    Adjustment::new(0.0, 0.0),
    Adjustment::new(5.0, -10.0),
    Adjustment::new(10.0, -20.0),
    Adjustment::new(15.0, -30.0),
    Adjustment::new(20.0, -40.0),
];

/// (Δs, Δl) recipe per step for dark mode. Step 6 is the identity.
pub const DARK_ADJUSTMENTS: [Adjustment; 10] = [
    Adjustment::new(-60.0, -35.0),
    Adjustment::new(-50.0, -25.0),
    Adjustment::new(-40.0, -15.0),
    Adjustment::new(-30.0, -5.0),
    Adjustment::new(-20.0, 5.0),
    Adjustment::new(0.0, 0.0),
    Adjustment::new(-10.0, 15.0),
    Adjustment::new(-20.0, 30.0),
    Adjustment::new(-30.0, 45.0),
    Adjustment::new(-40.0, 60.0),
];

pub fn adjustments(mode: ThemeMode) -> &'static [Adjustment; 10] {
    match mode {
        ThemeMode::Light => &LIGHT_ADJUSTMENTS,
        ThemeMode::Dark => &DARK_ADJUSTMENTS,
    }
}

/// Fixed 14-step neutral gray ramp, lightest to darkest. Shared by both modes
/// and independent of any seed.
pub const NEUTRAL_GRAYS: [&str; 14] = [
    "#F9FAFC", "#F0F2F7", "#E6E9F0", "#D1D4DE", "#C0C3CC", "#B3B6BE", "#A5A9B0", "#676A70",
    "#54565C", "#48494F", "#3A3C42", "#2B2C30", "#1F2024", "#131417",
];

#[cfg(test)]
mod tests {
    use super::*;
    use chromatide_types::Color;

    #[test]
    fn every_ramp_entry_parses() {
        for palette in BASE_PALETTES {
            for hex in palette.light.iter().chain(palette.dark.iter()) {
                assert!(
                    Color::from_hex(hex).is_some(),
                    "{} palette holds unparsable entry {hex}",
                    palette.name
                );
            }
        }
        for hex in NEUTRAL_GRAYS {
            assert!(Color::from_hex(hex).is_some());
        }
    }

    #[test]
    fn step_six_is_identity_in_both_modes() {
        assert_eq!(LIGHT_ADJUSTMENTS[5], Adjustment::new(0.0, 0.0));
        assert_eq!(DARK_ADJUSTMENTS[5], Adjustment::new(0.0, 0.0));
    }

    #[test]
    fn base_is_light_step_six() {
        assert_eq!(BLUE_PALETTE.base(), "#1c66e5");
        assert_eq!(GREEN_PALETTE.base(), "#0abf77");
        assert_eq!(RED_PALETTE.base(), "#e54545");
        assert_eq!(ORANGE_PALETTE.base(), "#ff7200");
    }
}
