#![deny(unsafe_code)]
//! Core color math for the hueforge palette toolkit.
//!
//! Provides `Rgb`/`Hsl` color types and hex conversions, WCAG luminance and
//! contrast checks, the harmony palette generators (`Scheme`, `PaletteStyle`),
//! caller-owned `PinSet`s, the `Xorshift64` PRNG behind the `RandomSource`
//! seam, and the reproducible `Seed` recipe.

pub mod color;
pub mod contrast;
pub mod error;
pub mod palette;
pub mod pins;
pub mod prng;
pub mod seed;

pub use color::{hex_to_hsl, hex_to_rgb, hsl_to_hex, random_hex, rgb_to_hex, Hsl, Rgb};
pub use contrast::{check_contrast, contrast_ratio, luminance, ContrastLevel, ContrastResult};
pub use error::ColorError;
pub use palette::{generate, Palette, PaletteStyle, Scheme, DEFAULT_COUNT};
pub use pins::{regenerate, PinSet};
pub use prng::{RandomSource, Xorshift64};
pub use seed::Seed;
