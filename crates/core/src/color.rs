//! Color types and conversions between hex, RGB and HSL.
//!
//! `Rgb` holds 8-bit channels, so every value is a valid 24-bit color and
//! hex encoding is lossless. `Hsl` holds floats: hue in degrees [0, 360),
//! saturation and lightness as percentages [0, 100]. The free functions
//! mirror the string-in/string-out API the palette generators use; parsing
//! failures come back as `ColorError::InvalidColor`, never a panic.

use crate::error::ColorError;
use crate::prng::RandomSource;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An sRGB color with 8-bit channels.
///
/// Serializes as a lowercase hex string `"#rrggbb"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A color in hue/saturation/lightness form.
///
/// `h` is in degrees, `s` and `l` are percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a hex color string like "#ff00aa" or "ff00aa" (case insensitive).
    ///
    /// Returns `ColorError::InvalidColor` unless the input is exactly six hex
    /// digits after an optional `#`.
    pub fn from_hex(hex: &str) -> Result<Rgb, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            log::trace!("rejected color {hex:?}");
            return Err(ColorError::InvalidColor(hex.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|e| ColorError::InvalidColor(format!("{hex}: {e}")))
        };
        Ok(Rgb {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Converts the color to a lowercase hex string like `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Converts to HSL without rounding.
    ///
    /// Achromatic colors get hue and saturation 0.
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl {
                h: 0.0,
                s: 0.0,
                l: l * 100.0,
            };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        // Sextant of the hue circle, in units of 60 degrees.
        let sextant = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl {
            h: normalize_hue(sextant / 6.0 * 360.0),
            s: s * 100.0,
            l: l * 100.0,
        }
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Rounds each component to the nearest integer, wrapping a hue of 360 to 0.
    pub fn rounded(self) -> Hsl {
        Hsl {
            h: normalize_hue(self.h.round()),
            s: self.s.round(),
            l: self.l.round(),
        }
    }

    /// Converts to 8-bit RGB.
    ///
    /// Hue wraps into [0, 360); saturation and lightness are clamped to
    /// [0, 100] so ramps that overshoot still land on a real color.
    pub fn to_rgb(self) -> Rgb {
        let h = normalize_hue(self.h) / 360.0;
        let s = self.s.clamp(0.0, 100.0) / 100.0;
        let l = self.l.clamp(0.0, 100.0) / 100.0;

        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (
                hue_to_channel(p, q, h + 1.0 / 3.0),
                hue_to_channel(p, q, h),
                hue_to_channel(p, q, h - 1.0 / 3.0),
            )
        };

        Rgb {
            r: unit_to_byte(r),
            g: unit_to_byte(g),
            b: unit_to_byte(b),
        }
    }

    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }
}

/// Piecewise hue-to-channel helper of the HSL to RGB transform.
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Scales a [0, 1] channel to a byte. NaN maps to 0.
fn unit_to_byte(c: f64) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Normalizes a hue angle to [0, 360).
pub fn normalize_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Parses a hex color into its RGB channels.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    Rgb::from_hex(hex)
}

/// Encodes RGB channels as `#rrggbb`.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    Rgb::new(r, g, b).to_hex()
}

/// Parses a hex color and converts it to HSL, rounding each component to an integer.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ColorError> {
    Ok(Rgb::from_hex(hex)?.to_hsl().rounded())
}

/// Converts HSL (degrees, percent, percent) to `#rrggbb`.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    Hsl::new(h, s, l).to_hex()
}

/// Draws a uniformly random 24-bit color.
pub fn random_hex(rng: &mut dyn RandomSource) -> String {
    let v = (rng.next_f64() * 16_777_216.0) as u32;
    rgb_to_hex((v >> 16) as u8, (v >> 8) as u8, v as u8)
}
