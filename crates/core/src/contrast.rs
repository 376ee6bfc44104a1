//! WCAG relative luminance, contrast ratio and level classification.
//!
//! Luminance follows the WCAG 2.0 definition, including its 0.03928
//! linearization threshold. Contrast ratios land in [1, 21]:
//!
//! - below 3: insufficient
//! - 3 or more: AA for large text
//! - 4.5 or more: AA
//! - 7 or more: AAA

use crate::color::Rgb;
use crate::error::ColorError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum ratio for AA large text.
pub const AA_LARGE_RATIO: f64 = 3.0;
/// Minimum ratio for AA normal text.
pub const AA_RATIO: f64 = 4.5;
/// Minimum ratio for AAA normal text.
pub const AAA_RATIO: f64 = 7.0;

/// WCAG conformance level reached by a contrast ratio, ordered worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContrastLevel {
    Insufficient,
    AaLarge,
    Aa,
    Aaa,
}

impl ContrastLevel {
    /// Classifies a ratio. Thresholds are inclusive.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= AAA_RATIO {
            ContrastLevel::Aaa
        } else if ratio >= AA_RATIO {
            ContrastLevel::Aa
        } else if ratio >= AA_LARGE_RATIO {
            ContrastLevel::AaLarge
        } else {
            ContrastLevel::Insufficient
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            ContrastLevel::Insufficient => "insufficient",
            ContrastLevel::AaLarge => "AA large text",
            ContrastLevel::Aa => "AA (good)",
            ContrastLevel::Aaa => "AAA (excellent)",
        }
    }
}

impl fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of checking a pair of colors.
///
/// `ratio` is rounded to two decimals for display; `meets_aa` and
/// `meets_aaa` come from the unrounded ratio, so a ratio of 4.496 reports
/// as 4.5 but does not meet AA.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastResult {
    pub ratio: f64,
    pub level: ContrastLevel,
    pub meets_aa: bool,
    pub meets_aaa: bool,
}

impl ContrastResult {
    /// Builds a result from an unrounded ratio.
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            ratio: (ratio * 100.0).round() / 100.0,
            level: ContrastLevel::from_ratio(ratio),
            meets_aa: ratio >= AA_RATIO,
            meets_aaa: ratio >= AAA_RATIO,
        }
    }
}

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

impl Rgb {
    /// Relative luminance in [0, 1].
    pub fn luminance(self) -> f64 {
        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }
}

/// Contrast ratio between two parsed colors, in [1, 21]. Argument order does not matter.
pub fn contrast_ratio_rgb(a: Rgb, b: Rgb) -> f64 {
    let la = a.luminance();
    let lb = b.luminance();
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Relative luminance of a hex color.
pub fn luminance(hex: &str) -> Result<f64, ColorError> {
    Ok(Rgb::from_hex(hex)?.luminance())
}

/// Contrast ratio between two hex colors.
pub fn contrast_ratio(a: &str, b: &str) -> Result<f64, ColorError> {
    Ok(contrast_ratio_rgb(Rgb::from_hex(a)?, Rgb::from_hex(b)?))
}

/// Contrast ratio plus WCAG classification for two hex colors.
pub fn check_contrast(a: &str, b: &str) -> Result<ContrastResult, ColorError> {
    contrast_ratio(a, b).map(ContrastResult::from_ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // -- Luminance --

    #[test]
    fn luminance_black_is_zero() {
        assert_eq!(luminance("#000000").unwrap(), 0.0);
    }

    #[test]
    fn luminance_white_is_one() {
        let lum = luminance("#ffffff").unwrap();
        assert!(approx_eq(lum, 1.0, 1e-12), "white luminance: {lum}");
    }

    #[test]
    fn luminance_primaries_match_weights() {
        assert!(approx_eq(luminance("#ff0000").unwrap(), 0.2126, 1e-12));
        assert!(approx_eq(luminance("#00ff00").unwrap(), 0.7152, 1e-12));
        assert!(approx_eq(luminance("#0000ff").unwrap(), 0.0722, 1e-12));
    }

    #[test]
    fn luminance_uses_linear_segment_for_dark_channels() {
        // 10/255 = 0.0392 sits under the 0.03928 threshold.
        let lum = luminance("#0a0a0a").unwrap();
        assert!(approx_eq(lum, 10.0 / 255.0 / 12.92, 1e-12), "got {lum}");
    }

    #[test]
    fn luminance_rejects_malformed_input() {
        assert!(matches!(luminance("#12"), Err(ColorError::InvalidColor(_))));
    }

    // -- Contrast ratio --

    #[test]
    fn contrast_black_white_is_21() {
        let ratio = contrast_ratio("#000000", "#ffffff").unwrap();
        assert!(approx_eq(ratio, 21.0, 1e-9), "B/W contrast: {ratio}");
    }

    #[test]
    fn self_contrast_is_one() {
        for hex in ["#000000", "#ffffff", "#777777", "#3366cc"] {
            assert_eq!(contrast_ratio(hex, hex).unwrap(), 1.0, "{hex}");
        }
    }

    #[test]
    fn contrast_is_symmetric() {
        let ab = contrast_ratio("#ff0000", "#ffffff").unwrap();
        let ba = contrast_ratio("#ffffff", "#ff0000").unwrap();
        assert_eq!(ab, ba);
    }

    #[test]
    fn contrast_known_pairs() {
        let gray = contrast_ratio("#767676", "#ffffff").unwrap();
        assert!(approx_eq(gray, 4.54, 0.01), "#767676 on white: {gray}");
        let red = contrast_ratio("#ff0000", "#ffffff").unwrap();
        assert!(approx_eq(red, 4.0, 0.01), "red on white: {red}");
    }

    #[test]
    fn contrast_propagates_parse_errors() {
        assert!(contrast_ratio("#000000", "bogus").is_err());
        assert!(check_contrast("bogus", "#000000").is_err());
    }

    // -- Classification --

    #[test]
    fn identical_gray_is_insufficient() {
        let result = check_contrast("#777777", "#777777").unwrap();
        assert_eq!(result.ratio, 1.0);
        assert_eq!(result.level, ContrastLevel::Insufficient);
        assert!(!result.meets_aa);
        assert!(!result.meets_aaa);
    }

    #[test]
    fn black_on_white_is_aaa_and_reports_21() {
        let result = check_contrast("#000000", "#ffffff").unwrap();
        assert_eq!(result.ratio, 21.0);
        assert_eq!(result.level, ContrastLevel::Aaa);
        assert!(result.meets_aa && result.meets_aaa);
    }

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(ContrastLevel::from_ratio(2.99), ContrastLevel::Insufficient);
        assert_eq!(ContrastLevel::from_ratio(3.0), ContrastLevel::AaLarge);
        assert_eq!(ContrastLevel::from_ratio(4.5), ContrastLevel::Aa);
        assert_eq!(ContrastLevel::from_ratio(7.0), ContrastLevel::Aaa);
    }

    #[test]
    fn higher_thresholds_override_lower_ones() {
        assert_eq!(ContrastLevel::from_ratio(8.0), ContrastLevel::Aaa);
        let result = ContrastResult::from_ratio(8.0);
        assert!(result.meets_aa && result.meets_aaa);
    }

    #[test]
    fn flags_use_unrounded_ratio() {
        let result = ContrastResult::from_ratio(4.496);
        assert_eq!(result.ratio, 4.5);
        assert_eq!(result.level, ContrastLevel::AaLarge);
        assert!(!result.meets_aa);
    }

    #[test]
    fn gray_777_on_white_is_aa_large_only() {
        let result = check_contrast("#777777", "#ffffff").unwrap();
        assert_eq!(result.ratio, 4.48);
        assert_eq!(result.level, ContrastLevel::AaLarge);
        assert!(!result.meets_aa);
    }

    #[test]
    fn levels_are_ordered() {
        assert!(ContrastLevel::Insufficient < ContrastLevel::AaLarge);
        assert!(ContrastLevel::AaLarge < ContrastLevel::Aa);
        assert!(ContrastLevel::Aa < ContrastLevel::Aaa);
    }

    #[test]
    fn level_labels() {
        assert_eq!(ContrastLevel::Insufficient.to_string(), "insufficient");
        assert_eq!(ContrastLevel::AaLarge.to_string(), "AA large text");
        assert_eq!(ContrastLevel::Aa.to_string(), "AA (good)");
        assert_eq!(ContrastLevel::Aaa.to_string(), "AAA (excellent)");
    }

    #[test]
    fn result_serializes_level_in_snake_case() {
        let result = check_contrast("#000000", "#ffffff").unwrap();
        let v = serde_json::to_value(result).unwrap();
        assert_eq!(v["level"], "aaa");
        assert_eq!(v["meets_aa"], true);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn luminance_in_unit_interval(r: u8, g: u8, b: u8) {
                let lum = Rgb::new(r, g, b).luminance();
                prop_assert!((0.0..=1.0 + 1e-12).contains(&lum), "luminance {lum}");
            }

            #[test]
            fn ratio_bounded_and_symmetric(a: (u8, u8, u8), b: (u8, u8, u8)) {
                let a = Rgb::new(a.0, a.1, a.2);
                let b = Rgb::new(b.0, b.1, b.2);
                let ab = contrast_ratio_rgb(a, b);
                prop_assert!((1.0..=21.0 + 1e-9).contains(&ab), "ratio {ab}");
                prop_assert_eq!(ab, contrast_ratio_rgb(b, a));
            }
        }
    }
}
