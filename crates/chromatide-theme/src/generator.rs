// ABOUTME: Ramp generation from a seed color: curated lookup or dynamic HSL derivation
// ABOUTME: Classification decides which path a seed takes; both are deterministic

use chromatide_logging::{debug, warn};
use chromatide_types::{Color, ThemeMode, hex_to_hsl, hsl_to_hex};

use crate::palettes::{self, BASE_PALETTES, BLUE_PALETTE, NEUTRAL_GRAYS, RampPalette};

/// Generate the 10-step brand ramp for a seed color.
///
/// Seeds close to one of the curated base hues get that palette's hand-tuned
/// ramp; everything else is derived from the seed's HSL with per-step
/// adjustments. Step 6 of a dynamic ramp is always the seed itself.
pub fn generate_theme_colors(seed: &str, mode: ThemeMode) -> [Color; 10] {
    if is_standard_color(seed) {
        let palette = closest_palette(seed);
        debug!(seed, mode = %mode, palette = palette.name, "seed resolved to curated palette");
        let mut ramp = [Color::WHITE; 10];
        for (slot, hex) in ramp.iter_mut().zip(palette.steps(mode)) {
            *slot = Color::from_hex(hex).unwrap_or(Color::WHITE);
        }
        return ramp;
    }

    dynamic_color_variations(seed, mode)
}

/// The fixed 14-step neutral gray ramp, lightest to darkest.
pub fn neutral_colors() -> [Color; 14] {
    let mut grays = [Color::rgb(0x80, 0x80, 0x80); 14];
    for (slot, hex) in grays.iter_mut().zip(NEUTRAL_GRAYS) {
        *slot = Color::from_hex(hex).unwrap_or(Color::rgb(0x80, 0x80, 0x80));
    }
    grays
}

/// Whether a seed is close enough to a curated base hue to use its palette.
///
/// All three axes must be within the gate at once; hue distance is circular.
/// Comparison is always against the light-mode base colors.
pub fn is_standard_color(seed: &str) -> bool {
    let input = hex_to_hsl(seed);
    BASE_PALETTES.iter().any(|palette| {
        let standard = hex_to_hsl(palette.base());
        let dh = hue_distance(input.h, standard.h);
        let ds = (input.s - standard.s).abs();
        let dl = (input.l - standard.l).abs();
        dh < 30.0 && ds < 30.0 && dl < 30.0
    })
}

/// The curated palette whose base color is nearest the seed, by Euclidean
/// distance in HSL. Ties keep the earlier palette in declaration order.
pub fn closest_palette(seed: &str) -> &'static RampPalette {
    let input = hex_to_hsl(seed);
    let mut best: &'static RampPalette = &BLUE_PALETTE;
    let mut best_distance = f64::INFINITY;
    for palette in BASE_PALETTES {
        let target = hex_to_hsl(palette.base());
        let dh = hue_distance(input.h, target.h);
        let ds = input.s - target.s;
        let dl = input.l - target.l;
        let distance = (dh * dh + ds * ds + dl * dl).sqrt();
        if distance < best_distance {
            best_distance = distance;
            best = palette;
        }
    }
    best
}

fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs();
    d.min(360.0 - d)
}

fn dynamic_color_variations(seed: &str, mode: ThemeMode) -> [Color; 10] {
    if !seed_is_well_formed(seed) {
        warn!(seed, "malformed seed color, ramp degrades to black base");
    }
    let base = hex_to_hsl(seed);

    let saturation_factor = correction_factor(base.s);
    let lightness_factor = correction_factor(base.l);
    debug!(
        seed,
        mode = %mode,
        h = base.h,
        s = base.s,
        l = base.l,
        saturation_factor,
        lightness_factor,
        "deriving dynamic ramp"
    );

    let mut ramp = [Color::WHITE; 10];
    for (slot, adjustment) in ramp.iter_mut().zip(palettes::adjustments(mode)) {
        // Clamp after the scaled add; extremes saturate at the range edges.
        let s = (base.s + adjustment.s * saturation_factor).clamp(0.0, 100.0);
        let l = (base.l + adjustment.l * lightness_factor).clamp(0.0, 100.0);
        let hex = hsl_to_hex(base.h, s, l);
        *slot = Color::from_hex(&hex).unwrap_or(Color::WHITE);
    }
    ramp
}

/// Adjustment scale: damped near the range ceiling, amplified near the floor.
fn correction_factor(value: f64) -> f64 {
    if value > 70.0 {
        0.8
    } else if value < 30.0 {
        1.2
    } else {
        1.0
    }
}

fn seed_is_well_formed(seed: &str) -> bool {
    let hex = seed.replace('#', "");
    hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palettes::{GREEN_PALETTE, ORANGE_PALETTE, RED_PALETTE};

    #[test]
    fn curated_seed_returns_curated_ramp() {
        // Uppercase and lowercase spellings resolve identically.
        let ramp = generate_theme_colors("#1C66E5", ThemeMode::Light);
        for (color, expected) in ramp.iter().zip(BLUE_PALETTE.light) {
            assert_eq!(color.to_hex(), expected);
        }

        let ramp = generate_theme_colors("#0abf77", ThemeMode::Dark);
        for (color, expected) in ramp.iter().zip(GREEN_PALETTE.dark) {
            assert_eq!(color.to_hex(), expected);
        }
    }

    #[test]
    fn closest_palette_picks_nearest_base_hue() {
        assert_eq!(closest_palette("#1c66e5").name, "blue");
        assert_eq!(closest_palette("#ff0000").name, "red");
        assert_eq!(closest_palette("#11c281").name, "green");
        assert_eq!(closest_palette("#f08030").name, "orange");
    }

    #[test]
    fn classification_gate_is_circular_in_hue() {
        let base = hex_to_hsl(BLUE_PALETTE.base());

        let near = hsl_to_hex(base.h + 29.0, base.s, base.l);
        assert!(is_standard_color(&near), "{near} should sit inside the gate");

        // 31 degrees off blue, and far from every other base hue.
        let far = hsl_to_hex(base.h + 31.0, base.s, base.l);
        assert!(!is_standard_color(&far), "{far} should fall outside the gate");
    }

    #[test]
    fn classification_gate_bounds_saturation_and_lightness() {
        // The blue base hue is remote from the other three, so once one of
        // the other axes leaves the gate no palette classifies the seed.
        let base = hex_to_hsl(BLUE_PALETTE.base());

        let inside_s = hsl_to_hex(base.h, base.s - 29.0, base.l);
        assert!(
            is_standard_color(&inside_s),
            "{inside_s} should sit inside the saturation gate"
        );
        let outside_s = hsl_to_hex(base.h, base.s - 31.0, base.l);
        assert!(
            !is_standard_color(&outside_s),
            "{outside_s} should fall outside the saturation gate"
        );

        let inside_l = hsl_to_hex(base.h, base.s, base.l - 29.0);
        assert!(
            is_standard_color(&inside_l),
            "{inside_l} should sit inside the lightness gate"
        );
        let outside_l = hsl_to_hex(base.h, base.s, base.l - 31.0);
        assert!(
            !is_standard_color(&outside_l),
            "{outside_l} should fall outside the lightness gate"
        );
    }

    #[test]
    fn dynamic_ramp_keeps_seed_at_step_six() {
        let seed = "#7b2fbe";
        assert!(!is_standard_color(seed));

        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            let ramp = generate_theme_colors(seed, mode);
            let base = hex_to_hsl(seed);
            assert_eq!(ramp[5].to_hex(), hsl_to_hex(base.h, base.s, base.l));
        }
    }

    #[test]
    fn generation_is_deterministic() {
        for seed in ["#7b2fbe", "#1c66e5", "#c8b900"] {
            for mode in [ThemeMode::Light, ThemeMode::Dark] {
                assert_eq!(
                    generate_theme_colors(seed, mode),
                    generate_theme_colors(seed, mode)
                );
            }
        }
    }

    #[test]
    fn saturation_clamps_at_range_ceiling() {
        // Saturation 95 with a +20 step lands past 100 and must clamp there.
        let seed = hsl_to_hex(290.0, 95.0, 50.0);
        assert!(!is_standard_color(&seed));

        let base = hex_to_hsl(&seed);
        assert!(base.s > 70.0, "seed saturation should trip the 0.8 factor");

        let ramp = generate_theme_colors(&seed, ThemeMode::Light);
        let deepest = ramp[9].to_hsl();
        assert!(deepest.s <= 100.0 && deepest.s > 98.0);

        for color in ramp {
            let hsl = color.to_hsl();
            assert!((0.0..=100.0).contains(&hsl.s));
            assert!((0.0..=100.0).contains(&hsl.l));
        }
    }

    #[test]
    fn malformed_seed_degrades_to_achromatic_ramp() {
        for seed in ["", "notahex", "#12 456", "#1c66e5ff"] {
            let ramp = generate_theme_colors(seed, ThemeMode::Light);
            for color in ramp {
                assert_eq!(color.r, color.g);
                assert_eq!(color.g, color.b);
            }
        }
    }

    #[test]
    fn neutral_ramp_is_fixed() {
        let grays = neutral_colors();
        assert_eq!(grays[0].to_hex(), "#f9fafc");
        assert_eq!(grays[7].to_hex(), "#676a70");
        assert_eq!(grays[13].to_hex(), "#131417");
    }

    #[test]
    fn every_curated_base_classifies_as_standard() {
        for palette in [&BLUE_PALETTE, &GREEN_PALETTE, &RED_PALETTE, &ORANGE_PALETTE] {
            assert!(is_standard_color(palette.base()), "{}", palette.name);
        }
    }
}
