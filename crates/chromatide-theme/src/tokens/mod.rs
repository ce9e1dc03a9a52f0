// ABOUTME: Design token structs: raw palettes, semantic colors, spacing, radii, type, shadows
// ABOUTME: Semantic tokens are assembled from palettes; they never hold literal hex values

use serde::Serialize;

use chromatide_types::{Color, ThemeMode};

use crate::generator;


// ---------------------------------------------------------------------------
// Raw palettes (bottom layer)
// ---------------------------------------------------------------------------

/// 10-step brand ramp generated from a seed color.
///
/// Steps are named `color_1` (lightest in light mode) through `color_10`;
/// `color_6` carries the base brand color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BrandColors {
    pub color_1: Color,
    pub color_2: Color,
    pub color_3: Color,
    pub color_4: Color,
    pub color_5: Color,
    pub color_6: Color,
    pub color_7: Color,
    pub color_8: Color,
    pub color_9: Color,
    pub color_10: Color,
}

impl BrandColors {
    pub fn generate(seed: &str, mode: ThemeMode) -> Self {
        let c = generator::generate_theme_colors(seed, mode);
        Self {
            color_1: c[0],
            color_2: c[1],
            color_3: c[2],
            color_4: c[3],
            color_5: c[4],
            color_6: c[5],
            color_7: c[6],
            color_8: c[7],
            color_9: c[8],
            color_10: c[9],
        }
    }

    /// Step accessor for 1-based step numbers; out-of-range returns the base.
    pub fn step(&self, step: u8) -> Color {
        match step {
            1 => self.color_1,
            2 => self.color_2,
            3 => self.color_3,
            4 => self.color_4,
            5 => self.color_5,
            7 => self.color_7,
            8 => self.color_8,
            9 => self.color_9,
            10 => self.color_10,
            _ => self.color_6,
        }
    }
}

/// 14-step neutral gray ramp, split into a light band and a dark band.
///
/// The dark fields count downward so `gray_dark_1` is the darkest gray, the
/// mirror image of `gray_light_1` being the lightest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NeutralColors {
    pub gray_light_1: Color,
    pub gray_light_2: Color,
    pub gray_light_3: Color,
    pub gray_light_4: Color,
    pub gray_light_5: Color,
    pub gray_light_6: Color,
    pub gray_light_7: Color,

    pub gray_dark_7: Color,
    pub gray_dark_6: Color,
    pub gray_dark_5: Color,
    pub gray_dark_4: Color,
    pub gray_dark_3: Color,
    pub gray_dark_2: Color,
    pub gray_dark_1: Color,
}

impl NeutralColors {
    pub fn generate() -> Self {
        let g = generator::neutral_colors();
        Self {
            gray_light_1: g[0],
            gray_light_2: g[1],
            gray_light_3: g[2],
            gray_light_4: g[3],
            gray_light_5: g[4],
            gray_light_6: g[5],
            gray_light_7: g[6],
            gray_dark_7: g[7],
            gray_dark_6: g[8],
            gray_dark_5: g[9],
            gray_dark_4: g[10],
            gray_dark_3: g[11],
            gray_dark_2: g[12],
            gray_dark_1: g[13],
        }
    }
}

/// Black at the standard opacity steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BlackColors {
    pub black_1: Color,
    pub black_2: Color,
    pub black_3: Color,
    pub black_4: Color,
    pub black_5: Color,
    pub black_6: Color,
    pub black_7: Color,
    pub black_8: Color,
}

impl BlackColors {
    pub fn standard() -> Self {
        Self {
            black_1: Color::BLACK.with_alpha(1.0),
            black_2: Color::BLACK.with_alpha(0.9),
            black_3: Color::BLACK.with_alpha(0.72),
            black_4: Color::BLACK.with_alpha(0.55),
            black_5: Color::BLACK.with_alpha(0.4),
            black_6: Color::BLACK.with_alpha(0.25),
            black_7: Color::BLACK.with_alpha(0.12),
            black_8: Color::BLACK.with_alpha(0.06),
        }
    }
}

/// White at the standard opacity steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WhiteColors {
    pub white_1: Color,
    pub white_2: Color,
    pub white_3: Color,
    pub white_4: Color,
    pub white_5: Color,
    pub white_6: Color,
    pub white_7: Color,
}

impl WhiteColors {
    pub fn standard() -> Self {
        Self {
            white_1: Color::WHITE.with_alpha(1.0),
            white_2: Color::WHITE.with_alpha(0.93),
            white_3: Color::WHITE.with_alpha(0.75),
            white_4: Color::WHITE.with_alpha(0.55),
            white_5: Color::WHITE.with_alpha(0.42),
            white_6: Color::WHITE.with_alpha(0.30),
            white_7: Color::WHITE.with_alpha(0.14),
        }
    }
}

/// Fixed accent hues used for tags and other categorical coloring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AccentColors {
    pub turquoise_light: Color,
    pub purple_light: Color,
    pub magenta_light: Color,
    pub orange_light: Color,

    pub turquoise_dark: Color,
    pub purple_dark: Color,
    pub magenta_dark: Color,
    pub orange_dark: Color,
}

impl AccentColors {
    pub fn standard() -> Self {
        Self {
            turquoise_light: accent("#00ABD6"),
            purple_light: accent("#8157FF"),
            magenta_light: accent("#F5457F"),
            orange_light: accent("#FF6A4C"),
            turquoise_dark: accent("#008FB2"),
            purple_dark: accent("#693CF0"),
            magenta_dark: accent("#C22F56"),
            orange_dark: accent("#F25B35"),
        }
    }
}

fn accent(hex: &str) -> Color {
    Color::from_hex(hex).unwrap_or(Color::BLACK)
}

/// Complete set of raw palettes for one theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorPalettes {
    pub primary: BrandColors,
    pub success: BrandColors,
    pub error: BrandColors,
    pub warning: BrandColors,
    pub neutral: NeutralColors,
    pub white: WhiteColors,
    pub black: BlackColors,
    pub accent: AccentColors,
}

impl ColorPalettes {
    /// Light-mode palettes; only the primary ramp varies with the seed, the
    /// status ramps stay on their curated base hues.
    pub fn light(primary_seed: &str) -> Self {
        Self {
            primary: BrandColors::generate(primary_seed, ThemeMode::Light),
            success: BrandColors::generate("#0ABF77", ThemeMode::Light),
            error: BrandColors::generate("#E54545", ThemeMode::Light),
            warning: BrandColors::generate("#FF7200", ThemeMode::Light),
            neutral: NeutralColors::generate(),
            white: WhiteColors::standard(),
            black: BlackColors::standard(),
            accent: AccentColors::standard(),
        }
    }

    /// Dark-mode palettes; the status seeds are the dark-curve base colors.
    pub fn dark(primary_seed: &str) -> Self {
        Self {
            primary: BrandColors::generate(primary_seed, ThemeMode::Dark),
            success: BrandColors::generate("#38A673", ThemeMode::Dark),
            error: BrandColors::generate("#E6594C", ThemeMode::Dark),
            warning: BrandColors::generate("#E37F32", ThemeMode::Dark),
            neutral: NeutralColors::generate(),
            white: WhiteColors::standard(),
            black: BlackColors::standard(),
            accent: AccentColors::standard(),
        }
    }
}

// ---------------------------------------------------------------------------
// Semantic color tokens
// ---------------------------------------------------------------------------

/// Semantic color tokens, the layer components are supposed to read from.
///
/// Every field resolves to a palette slot; the mapping differs between light
/// and dark mode and is fixed per mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorTokens {
    // text & icon
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,
    pub text_disabled: Color,
    pub text_button: Color,
    pub text_button_disabled: Color,
    pub text_link: Color,
    pub text_link_hover: Color,
    pub text_link_active: Color,
    pub text_link_disabled: Color,
    pub text_anti_primary: Color,
    pub text_anti_secondary: Color,
    pub text_warning: Color,
    pub text_success: Color,
    pub text_error: Color,
    // background
    pub bg_top_bar: Color,
    pub bg_operate: Color,
    pub bg_dialog: Color,
    pub bg_dialog_module: Color,
    pub bg_entry_card: Color,
    pub bg_function: Color,
    pub bg_bottom_bar: Color,
    pub bg_input: Color,
    pub bg_bubble_reciprocal: Color,
    pub bg_bubble_own: Color,
    pub bg_default: Color,
    pub bg_tag_mask: Color,
    pub bg_element_mask: Color,
    pub bg_mask: Color,
    pub bg_mask_disappeared: Color,
    pub bg_mask_begin: Color,
    pub bg_avatar: Color,
    // border
    pub stroke_primary: Color,
    pub stroke_secondary: Color,
    pub stroke_module: Color,
    // shadow
    pub shadow: Color,
    // list states
    pub list_default: Color,
    pub list_hover: Color,
    pub list_focused: Color,
    // button
    pub button_primary_default: Color,
    pub button_primary_hover: Color,
    pub button_primary_active: Color,
    pub button_primary_disabled: Color,
    pub button_secondary_default: Color,
    pub button_secondary_hover: Color,
    pub button_secondary_active: Color,
    pub button_secondary_disabled: Color,
    pub button_accept: Color,
    pub button_hangup_default: Color,
    pub button_hangup_disabled: Color,
    pub button_hangup_hover: Color,
    pub button_hangup_active: Color,
    pub button_on: Color,
    pub button_off: Color,
    // dropdown
    pub dropdown_default: Color,
    pub dropdown_hover: Color,
    pub dropdown_active: Color,
    // scrollbar
    pub scrollbar_default: Color,
    pub scrollbar_hover: Color,
    // floating panels
    pub floating_default: Color,
    pub floating_operate: Color,
    // checkbox
    pub checkbox_selected: Color,
    // toast
    pub toast_warning: Color,
    pub toast_success: Color,
    pub toast_error: Color,
    pub toast_default: Color,
    // tag
    pub tag_level_1: Color,
    pub tag_level_2: Color,
    pub tag_level_3: Color,
    pub tag_level_4: Color,
    // switch
    pub switch_off: Color,
    pub switch_on: Color,
    pub switch_button: Color,
    // slider
    pub slider_filled: Color,
    pub slider_empty: Color,
    pub slider_button: Color,
    // tab
    pub tab_selected: Color,
    pub tab_unselected: Color,
    pub tab_option: Color,
    // clear
    pub clear: Color,
}

impl ColorTokens {
    pub const DEFAULT_LIGHT_SEED: &'static str = "#1C66E5";
    pub const DEFAULT_DARK_SEED: &'static str = "#4086FF";

    pub fn light_default() -> Self {
        Self::light(Self::DEFAULT_LIGHT_SEED)
    }

    pub fn dark_default() -> Self {
        Self::dark(Self::DEFAULT_DARK_SEED)
    }

    /// Light-mode semantic mapping over palettes seeded with `primary_seed`.
    pub fn light(primary_seed: &str) -> Self {
        let p = ColorPalettes::light(primary_seed);
        Self {
            // text & icon
            text_primary: p.black.black_2,
            text_secondary: p.black.black_4,
            text_tertiary: p.black.black_5,
            text_disabled: p.black.black_6,
            text_button: p.white.white_1,
            text_button_disabled: p.white.white_1,
            text_link: p.primary.color_6,
            text_link_hover: p.primary.color_5,
            text_link_active: p.primary.color_7,
            text_link_disabled: p.primary.color_2,
            text_anti_primary: p.black.black_2,
            text_anti_secondary: p.black.black_4,
            text_warning: p.warning.color_6,
            text_success: p.success.color_6,
            text_error: p.error.color_6,
            // background
            bg_top_bar: p.neutral.gray_light_1,
            bg_operate: p.white.white_1,
            bg_dialog: p.white.white_1,
            bg_dialog_module: p.neutral.gray_light_2,
            bg_entry_card: p.neutral.gray_light_2,
            bg_function: p.neutral.gray_light_2,
            bg_bottom_bar: p.white.white_1,
            bg_input: p.neutral.gray_light_2,
            bg_bubble_reciprocal: p.neutral.gray_light_2,
            bg_bubble_own: p.primary.color_2,
            bg_default: p.neutral.gray_light_2,
            bg_tag_mask: p.white.white_4,
            bg_element_mask: p.black.black_6,
            bg_mask: p.black.black_4,
            bg_mask_disappeared: p.white.white_7,
            bg_mask_begin: p.white.white_1,
            bg_avatar: p.primary.color_2,
            // border
            stroke_primary: p.neutral.gray_light_3,
            stroke_secondary: p.neutral.gray_light_2,
            stroke_module: p.neutral.gray_light_3,
            // shadow
            shadow: p.black.black_8,
            // list states
            list_default: p.white.white_1,
            list_hover: p.neutral.gray_light_1,
            list_focused: p.primary.color_1,
            // button
            button_primary_default: p.primary.color_6,
            button_primary_hover: p.primary.color_5,
            button_primary_active: p.primary.color_7,
            button_primary_disabled: p.primary.color_2,
            button_secondary_default: p.neutral.gray_light_2,
            button_secondary_hover: p.neutral.gray_light_1,
            button_secondary_active: p.neutral.gray_light_3,
            button_secondary_disabled: p.neutral.gray_light_1,
            button_accept: p.success.color_6,
            button_hangup_default: p.error.color_6,
            button_hangup_disabled: p.error.color_2,
            button_hangup_hover: p.error.color_5,
            button_hangup_active: p.error.color_7,
            button_on: p.white.white_1,
            button_off: p.black.black_5,
            // dropdown
            dropdown_default: p.white.white_1,
            dropdown_hover: p.neutral.gray_light_1,
            dropdown_active: p.primary.color_1,
            // scrollbar
            scrollbar_default: p.black.black_7,
            scrollbar_hover: p.black.black_6,
            // floating panels
            floating_default: p.white.white_1,
            floating_operate: p.neutral.gray_light_2,
            // checkbox
            checkbox_selected: p.primary.color_6,
            // toast
            toast_warning: p.warning.color_1,
            toast_success: p.success.color_1,
            toast_error: p.error.color_1,
            toast_default: p.primary.color_1,
            // tag
            tag_level_1: p.accent.turquoise_light,
            tag_level_2: p.primary.color_5,
            tag_level_3: p.accent.purple_light,
            tag_level_4: p.accent.magenta_light,
            // switch
            switch_off: p.neutral.gray_light_4,
            switch_on: p.primary.color_6,
            switch_button: p.white.white_1,
            // slider
            slider_filled: p.primary.color_6,
            slider_empty: p.neutral.gray_light_3,
            slider_button: p.white.white_1,
            // tab
            tab_selected: p.neutral.gray_light_2,
            tab_unselected: p.neutral.gray_light_2,
            tab_option: p.neutral.gray_light_3,
            // clear
            clear: Color::TRANSPARENT,
        }
    }

    /// Dark-mode semantic mapping over palettes seeded with `primary_seed`.
    pub fn dark(primary_seed: &str) -> Self {
        let p = ColorPalettes::dark(primary_seed);
        Self {
            // text & icon
            text_primary: p.white.white_2,
            text_secondary: p.white.white_4,
            text_tertiary: p.white.white_6,
            text_disabled: p.white.white_7,
            text_button: p.white.white_1,
            text_button_disabled: p.white.white_5,
            text_link: p.primary.color_6,
            text_link_hover: p.primary.color_5,
            text_link_active: p.primary.color_7,
            text_link_disabled: p.primary.color_2,
            text_anti_primary: p.black.black_2,
            text_anti_secondary: p.black.black_4,
            text_warning: p.warning.color_6,
            text_success: p.success.color_6,
            text_error: p.error.color_6,
            // background
            bg_top_bar: p.neutral.gray_dark_1,
            bg_operate: p.neutral.gray_dark_2,
            bg_dialog: p.neutral.gray_dark_2,
            bg_dialog_module: p.neutral.gray_dark_1,
            bg_entry_card: p.neutral.gray_dark_3,
            bg_function: p.neutral.gray_dark_4,
            bg_bottom_bar: p.neutral.gray_dark_3,
            bg_input: p.neutral.gray_dark_3,
            bg_bubble_reciprocal: p.neutral.gray_dark_3,
            bg_bubble_own: p.primary.color_7,
            bg_default: p.neutral.gray_dark_1,
            bg_tag_mask: p.black.black_4,
            bg_element_mask: p.black.black_6,
            bg_mask: p.black.black_4,
            bg_mask_disappeared: p.black.black_2,
            bg_mask_begin: p.black.black_2,
            bg_avatar: p.primary.color_2,
            // border
            stroke_primary: p.neutral.gray_dark_4,
            stroke_secondary: p.neutral.gray_dark_3,
            stroke_module: p.neutral.gray_dark_5,
            // shadow
            shadow: p.black.black_8,
            // list states
            list_default: p.neutral.gray_dark_2,
            list_hover: p.neutral.gray_dark_3,
            list_focused: p.primary.color_2,
            // button
            button_primary_default: p.primary.color_6,
            button_primary_hover: p.primary.color_5,
            button_primary_active: p.primary.color_7,
            button_primary_disabled: p.primary.color_2,
            button_secondary_default: p.neutral.gray_dark_4,
            button_secondary_hover: p.neutral.gray_dark_3,
            button_secondary_active: p.neutral.gray_dark_5,
            button_secondary_disabled: p.neutral.gray_dark_3,
            button_accept: p.success.color_6,
            button_hangup_default: p.error.color_6,
            button_hangup_disabled: p.error.color_2,
            button_hangup_hover: p.error.color_5,
            button_hangup_active: p.error.color_7,
            button_on: p.white.white_1,
            button_off: p.black.black_5,
            // dropdown
            dropdown_default: p.neutral.gray_dark_3,
            dropdown_hover: p.neutral.gray_dark_4,
            dropdown_active: p.neutral.gray_dark_2,
            // scrollbar
            scrollbar_default: p.white.white_7,
            scrollbar_hover: p.white.white_6,
            // floating panels
            floating_default: p.neutral.gray_dark_3,
            floating_operate: p.neutral.gray_dark_4,
            // checkbox
            checkbox_selected: p.primary.color_5,
            // toast
            toast_warning: p.warning.color_2,
            toast_success: p.success.color_2,
            toast_error: p.error.color_2,
            toast_default: p.primary.color_2,
            // tag
            tag_level_1: p.accent.turquoise_dark,
            tag_level_2: p.primary.color_5,
            tag_level_3: p.accent.purple_dark,
            tag_level_4: p.accent.magenta_dark,
            // switch
            switch_off: p.neutral.gray_dark_4,
            switch_on: p.primary.color_5,
            switch_button: p.white.white_1,
            // slider
            slider_filled: p.primary.color_5,
            slider_empty: p.neutral.gray_dark_5,
            slider_button: p.white.white_1,
            // tab
            tab_selected: p.neutral.gray_dark_5,
            tab_unselected: p.neutral.gray_dark_4,
            tab_option: p.neutral.gray_dark_4,
            // clear
            clear: Color::TRANSPARENT,
        }
    }
}

// ---------------------------------------------------------------------------
// Non-color tokens
// ---------------------------------------------------------------------------

/// Spacing scale in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpaceTokens {
    pub space_4: f32,
    pub space_8: f32,
    pub space_16: f32,
    pub space_20: f32,
    pub space_24: f32,
    pub space_32: f32,
    pub space_40: f32,
}

impl SpaceTokens {
    pub fn standard() -> Self {
        Self {
            space_4: 4.0,
            space_8: 8.0,
            space_16: 16.0,
            space_20: 20.0,
            space_24: 24.0,
            space_32: 32.0,
            space_40: 40.0,
        }
    }
}

/// Corner radius scale; `circle` is an oversized value that rounds any
/// realistic rectangle into a pill.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RadiusTokens {
    pub none: f32,
    pub radius_4: f32,
    pub radius_6: f32,
    pub radius_8: f32,
    pub radius_12: f32,
    pub radius_16: f32,
    pub radius_20: f32,
    pub circle: f32,
}

impl RadiusTokens {
    pub fn standard() -> Self {
        Self {
            none: 0.0,
            radius_4: 4.0,
            radius_6: 6.0,
            radius_8: 8.0,
            radius_12: 12.0,
            radius_16: 16.0,
            radius_20: 20.0,
            circle: 9999.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Regular,
    Medium,
    Bold,
}

/// A resolved font request: an optional face name plus size and weight.
/// Consumers without the named face fall back to their platform font.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FontSpec {
    pub name: Option<String>,
    pub size: f32,
    pub weight: FontWeight,
}

/// Typography tokens. The family is optional; without one every request
/// resolves to the consumer's system font at the given size and weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypographyTokens {
    pub font_family: Option<String>,
}

impl TypographyTokens {
    pub fn new(font_family: Option<String>) -> Self {
        Self { font_family }
    }

    pub fn font(&self, size: f32, weight: FontWeight) -> FontSpec {
        let name = self
            .font_family
            .as_deref()
            .filter(|family| !family.is_empty())
            .map(|family| font_name(family, weight));
        FontSpec { name, size, weight }
    }

    pub fn regular(&self, size: f32) -> FontSpec {
        self.font(size, FontWeight::Regular)
    }

    pub fn medium(&self, size: f32) -> FontSpec {
        self.font(size, FontWeight::Medium)
    }

    pub fn bold(&self, size: f32) -> FontSpec {
        self.font(size, FontWeight::Bold)
    }
}

// Bold intentionally maps to the Semibold face.
fn font_name(family: &str, weight: FontWeight) -> String {
    match weight {
        FontWeight::Regular => format!("{family}-Regular"),
        FontWeight::Medium => format!("{family}-Medium"),
        FontWeight::Bold => format!("{family}-Semibold"),
    }
}

/// One drop shadow: color, blur, offset, opacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Shadow {
    pub color: Color,
    pub blur_radius: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub opacity: f32,
}

/// Shadow pair used across elevations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShadowTokens {
    pub small: Shadow,
    pub medium: Shadow,
}

impl ShadowTokens {
    /// Light-surface shadows.
    pub fn standard() -> Self {
        Self {
            small: Shadow {
                color: Color::BLACK.with_alpha(0.12),
                blur_radius: 4.0,
                offset_x: 0.0,
                offset_y: 2.0,
                opacity: 1.0,
            },
            medium: Shadow {
                color: Color::BLACK.with_alpha(0.16),
                blur_radius: 8.0,
                offset_x: 0.0,
                offset_y: 4.0,
                opacity: 1.0,
            },
        }
    }

    /// Stronger shadows for dark surfaces, where subtle ones disappear.
    pub fn strong() -> Self {
        Self {
            small: Shadow {
                color: Color::BLACK.with_alpha(0.3),
                blur_radius: 4.0,
                offset_x: 0.0,
                offset_y: 2.0,
                opacity: 1.0,
            },
            medium: Shadow {
                color: Color::BLACK.with_alpha(0.4),
                blur_radius: 8.0,
                offset_x: 0.0,
                offset_y: 4.0,
                opacity: 1.0,
            },
        }
    }
}
