//! Palettes and the harmony generators that build them.
//!
//! Every generator works in HSL and emits `#rrggbb` strings. Two styles
//! are offered because the two classic formulations disagree:
//!
//! - [`PaletteStyle::Seeded`] keeps the base color's saturation and
//!   lightness and derives everything from it.
//! - [`PaletteStyle::Vivid`] draws a fresh random hue and uses fixed,
//!   punchier saturation values.
//!
//! All randomness flows through the caller's [`RandomSource`].

use crate::color::{hex_to_hsl, normalize_hue, random_hex, Hsl, Rgb};
use crate::error::ColorError;
use crate::prng::RandomSource;
use serde::{Deserialize, Serialize};

/// Palette size used when the caller does not ask for one.
pub const DEFAULT_COUNT: usize = 5;

/// Hue step between neighbouring analogous colors, in degrees.
const ANALOGOUS_STEP: f64 = 30.0;

/// Lightness used for a one-color monochromatic palette.
const MONOCHROME_SINGLE_LIGHTNESS: f64 = 50.0;

const SCHEME_NAMES: &[&str] = &[
    "analogous",
    "monochromatic",
    "complementary",
    "triadic",
    "random",
];

const STYLE_NAMES: &[&str] = &["seeded", "vivid"];

/// Color-harmony scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    Analogous,
    Monochromatic,
    Complementary,
    Triadic,
    /// Independent uniformly random colors.
    Random,
}

impl Scheme {
    /// Looks up a scheme by name.
    ///
    /// Returns `ColorError::UnknownScheme` for unrecognized names.
    pub fn from_name(name: &str) -> Result<Self, ColorError> {
        match name {
            "analogous" => Ok(Scheme::Analogous),
            "monochromatic" => Ok(Scheme::Monochromatic),
            "complementary" => Ok(Scheme::Complementary),
            "triadic" => Ok(Scheme::Triadic),
            "random" => Ok(Scheme::Random),
            _ => Err(ColorError::UnknownScheme(name.to_string())),
        }
    }

    pub fn list_names() -> &'static [&'static str] {
        SCHEME_NAMES
    }

    pub fn name(self) -> &'static str {
        match self {
            Scheme::Analogous => "analogous",
            Scheme::Monochromatic => "monochromatic",
            Scheme::Complementary => "complementary",
            Scheme::Triadic => "triadic",
            Scheme::Random => "random",
        }
    }
}

/// Which formulation of the generators to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteStyle {
    /// Derive hue, saturation and lightness from the base color.
    #[default]
    Seeded,
    /// Random base hue with fixed saturation; the base color is not used.
    Vivid,
}

impl PaletteStyle {
    /// Looks up a style by name.
    ///
    /// Returns `ColorError::UnknownStyle` for unrecognized names.
    pub fn from_name(name: &str) -> Result<Self, ColorError> {
        match name {
            "seeded" => Ok(PaletteStyle::Seeded),
            "vivid" => Ok(PaletteStyle::Vivid),
            _ => Err(ColorError::UnknownStyle(name.to_string())),
        }
    }

    pub fn list_names() -> &'static [&'static str] {
        STYLE_NAMES
    }

    pub fn name(self) -> &'static str {
        match self {
            PaletteStyle::Seeded => "seeded",
            PaletteStyle::Vivid => "vivid",
        }
    }
}

/// An ordered list of `#rrggbb` colors. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    /// Builds a palette from hex strings, normalizing each to lowercase `#rrggbb`.
    ///
    /// Fails with `ColorError::InvalidColor` on the first malformed entry.
    pub fn new<S: AsRef<str>>(colors: &[S]) -> Result<Self, ColorError> {
        let colors = colors
            .iter()
            .map(|c| Rgb::from_hex(c.as_ref()).map(Rgb::to_hex))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { colors })
    }

    /// Encodes HSL swatches as a palette.
    pub fn from_hsl(swatches: &[Hsl]) -> Self {
        Self {
            colors: swatches.iter().map(|hsl| hsl.to_hex()).collect(),
        }
    }

    pub(crate) fn from_hex_unchecked(colors: Vec<String>) -> Self {
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.colors.get(index).map(String::as_str)
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.colors.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.colors
    }
}

/// Generates a palette of `count` colors.
///
/// With [`PaletteStyle::Seeded`] the base color anchors the palette; when
/// `base` is `None` a random base is drawn first. [`PaletteStyle::Vivid`]
/// only validates `base` and then starts from a random hue. `count == 0`
/// yields an empty palette.
pub fn generate(
    scheme: Scheme,
    style: PaletteStyle,
    base: Option<&str>,
    count: usize,
    rng: &mut dyn RandomSource,
) -> Result<Palette, ColorError> {
    let palette = match scheme {
        Scheme::Random => {
            if let Some(hex) = base {
                Rgb::from_hex(hex)?;
            }
            random(count, rng)
        }
        Scheme::Analogous => {
            let anchor = anchor(style, base, rng)?;
            Palette::from_hsl(&analogous(anchor, count, style, rng))
        }
        Scheme::Monochromatic => {
            Palette::from_hsl(&monochromatic(anchor(style, base, rng)?, count, style))
        }
        Scheme::Complementary => {
            Palette::from_hsl(&complementary(anchor(style, base, rng)?, count, style))
        }
        Scheme::Triadic => Palette::from_hsl(&triadic(anchor(style, base, rng)?, count, style)),
    };
    log::debug!(
        "generated {} {} palette: {:?}",
        style.name(),
        scheme.name(),
        palette.colors
    );
    Ok(palette)
}

/// Resolves the HSL anchor a scheme builds around.
fn anchor(
    style: PaletteStyle,
    base: Option<&str>,
    rng: &mut dyn RandomSource,
) -> Result<Hsl, ColorError> {
    let seeded = match base {
        Some(hex) => Some(hex_to_hsl(hex)?),
        None => None,
    };
    match (style, seeded) {
        (PaletteStyle::Seeded, Some(hsl)) => Ok(hsl),
        (PaletteStyle::Seeded, None) => hex_to_hsl(&random_hex(rng)),
        (PaletteStyle::Vivid, _) => Ok(Hsl::new(rng.next_range(0.0, 360.0), 70.0, 50.0)),
    }
}

/// Analogous swatches: hues 30 degrees apart, centred on the anchor hue.
///
/// Seeded jitters the anchor's saturation and lightness by up to 10 points,
/// clamped to [30, 100] and [20, 80]. Vivid draws saturation from [60, 90)
/// and lightness from [40, 70).
pub fn analogous(
    anchor: Hsl,
    count: usize,
    style: PaletteStyle,
    rng: &mut dyn RandomSource,
) -> Vec<Hsl> {
    let mid = (count / 2) as f64;
    (0..count)
        .map(|i| {
            let h = normalize_hue(anchor.h + (i as f64 - mid) * ANALOGOUS_STEP);
            match style {
                PaletteStyle::Seeded => {
                    let s = (anchor.s + rng.next_range(-10.0, 10.0)).clamp(30.0, 100.0);
                    let l = (anchor.l + rng.next_range(-10.0, 10.0)).clamp(20.0, 80.0);
                    Hsl::new(h, s, l)
                }
                PaletteStyle::Vivid => {
                    let s = 60.0 + rng.next_range(0.0, 30.0);
                    let l = 40.0 + rng.next_range(0.0, 30.0);
                    Hsl::new(h, s, l)
                }
            }
        })
        .collect()
}

/// Monochromatic swatches: one hue, lightness ramped from 20 to 80.
///
/// A single swatch sits at lightness 50.
pub fn monochromatic(anchor: Hsl, count: usize, style: PaletteStyle) -> Vec<Hsl> {
    let s = match style {
        PaletteStyle::Seeded => anchor.s,
        PaletteStyle::Vivid => 50.0,
    };
    (0..count)
        .map(|i| Hsl::new(normalize_hue(anchor.h), s, lightness_ramp(i, count)))
        .collect()
}

fn lightness_ramp(i: usize, count: usize) -> f64 {
    if count <= 1 {
        MONOCHROME_SINGLE_LIGHTNESS
    } else {
        20.0 + i as f64 * (60.0 / (count - 1) as f64)
    }
}

/// Complementary swatches: alternating between the anchor hue and its opposite.
///
/// Lightness climbs by 10 per slot from 30. Seeded keeps the anchor itself
/// in slot 0.
pub fn complementary(anchor: Hsl, count: usize, style: PaletteStyle) -> Vec<Hsl> {
    let hue = normalize_hue(anchor.h);
    let opposite = normalize_hue(anchor.h + 180.0);
    let s = match style {
        PaletteStyle::Seeded => anchor.s,
        PaletteStyle::Vivid => 70.0,
    };
    (0..count)
        .map(|i| {
            if i == 0 && style == PaletteStyle::Seeded {
                return Hsl::new(hue, anchor.s, anchor.l);
            }
            let h = if i % 2 == 0 { hue } else { opposite };
            Hsl::new(h, s, 30.0 + i as f64 * 10.0)
        })
        .collect()
}

/// Triadic swatches: hues cycle through anchor, +120 and +240 degrees.
///
/// Slot 0 has lightness 50, later slots `40 + 5i`.
pub fn triadic(anchor: Hsl, count: usize, style: PaletteStyle) -> Vec<Hsl> {
    let s = match style {
        PaletteStyle::Seeded => anchor.s,
        PaletteStyle::Vivid => 70.0,
    };
    (0..count)
        .map(|i| {
            let h = normalize_hue(anchor.h + i as f64 * 120.0);
            let l = if i == 0 { 50.0 } else { 40.0 + i as f64 * 5.0 };
            Hsl::new(h, s, l)
        })
        .collect()
}

/// `count` independent random colors.
pub fn random(count: usize, rng: &mut dyn RandomSource) -> Palette {
    Palette::from_hex_unchecked((0..count).map(|_| random_hex(rng)).collect())
}
