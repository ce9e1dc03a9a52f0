// ABOUTME: Color value type with hex serialization plus the RGB<->HSL converter
// ABOUTME: Conversion arithmetic is shared by the ramp generator and must stay stable

use serde::{Deserialize, Serialize};

/// An sRGB color with 8-bit channels and a floating-point alpha.
///
/// Serialized as a hex string: `#rrggbb` when fully opaque, `#aarrggbb`
/// otherwise. Parsing accepts `#RGB`, `#RRGGBB` and `#AARRGGBB` with an
/// optional leading `#`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0.0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a hex color string. Accepts 3-digit (`#rgb`), 6-digit
    /// (`#rrggbb`) and 8-digit (`#aarrggbb`) forms, `#` optional.
    pub fn from_hex(input: &str) -> Option<Self> {
        let hex = input.strip_prefix('#').unwrap_or(input);
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            3 => {
                let mut it = hex.chars();
                let r = it.next()?.to_digit(16)? as u8;
                let g = it.next()?.to_digit(16)? as u8;
                let b = it.next()?.to_digit(16)? as u8;
                Some(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::rgb(r, g, b))
            }
            8 => {
                let a = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let r = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let g = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let b = u8::from_str_radix(&hex[6..8], 16).ok()?;
                Some(Self::rgba(r, g, b, a as f32 / 255.0))
            }
            _ => None,
        }
    }

    /// Lowercase `#rrggbb` form; alpha is not encoded.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Lowercase `#aarrggbb` form.
    pub fn to_hex_argb(&self) -> String {
        let a = (self.a.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}{:02x}", a, self.r, self.g, self.b)
    }

    /// The same color with a different opacity.
    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self {
            a: alpha.clamp(0.0, 1.0),
            ..*self
        }
    }

    /// Weighted per-channel mix: `ratio` of `self`, the rest of `other`.
    pub fn blend(&self, other: Color, ratio: f32) -> Self {
        let ratio = ratio.clamp(0.0, 1.0);
        let mix = |x: u8, y: u8| -> u8 {
            (x as f32 * ratio + y as f32 * (1.0 - ratio)).round() as u8
        };
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: self.a * ratio + other.a * (1.0 - ratio),
        }
    }

    pub fn to_hsl(&self) -> Hsl {
        rgb_to_hsl(self.r, self.g, self.b)
    }

    pub fn from_hsl(hsl: Hsl) -> Self {
        let (r, g, b) = hsl_to_rgb(hsl.h, hsl.s, hsl.l);
        Self::rgb(r, g, b)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if self.a < 1.0 {
            serializer.serialize_str(&self.to_hex_argb())
        } else {
            serializer.serialize_str(&self.to_hex())
        }
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Color, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex color: {s}")))
    }
}

/// HSL triple with CSS-style ranges: hue `[0,360)`, saturation and lightness
/// `[0,100]`. Derived from RGB on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const ZERO: Hsl = Hsl {
        h: 0.0,
        s: 0.0,
        l: 0.0,
    };

    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

/// Convert a 6-digit hex color to HSL.
///
/// Every `#` is stripped first; anything that is not exactly 6 hex digits
/// afterwards degrades to `Hsl::ZERO` (black). Callers that care should
/// validate the input before converting.
pub fn hex_to_hsl(hex_input: &str) -> Hsl {
    let hex = hex_input.replace('#', "");
    if hex.len() != 6 || !hex.is_ascii() {
        return Hsl::ZERO;
    }
    let (Ok(r), Ok(g), Ok(b)) = (
        u8::from_str_radix(&hex[0..2], 16),
        u8::from_str_radix(&hex[2..4], 16),
        u8::from_str_radix(&hex[4..6], 16),
    ) else {
        return Hsl::ZERO;
    };
    rgb_to_hsl(r, g, b)
}

fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    let mut h = 0.0;
    let mut s = 0.0;
    let l = (max + min) / 2.0;

    if max != min {
        let d = max - min;
        s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        // Max-channel branch order matters when channels tie: r, then g, then b.
        h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        h /= 6.0;
    }

    Hsl::new(h * 360.0, s * 100.0, l * 100.0)
}

/// Convert HSL back to a lowercase `#rrggbb` string, each channel rounded to
/// the nearest integer.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    let (r, g, b) = hsl_to_rgb(h, s, l);
    format!("#{r:02x}{g:02x}{b:02x}")
}

// W3C "a,k,f" construction; shared by hsl_to_hex and Color::from_hsl so the
// string and value paths cannot drift apart.
fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let l = l / 100.0;
    let a = s * l.min(1.0 - l) / 100.0;

    let f = |n: f64| -> u8 {
        let k = (n + h / 30.0) % 12.0;
        let sub = (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        (255.0 * (l - a * sub)).round() as u8
    };

    (f(0.0), f(8.0), f(4.0))
}
