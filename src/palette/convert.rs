//! Color-space conversion entry points used by the front-ends.

use crate::models::{Contrast, HslColor, RgbColor};

/// Converts an HSL triple to a lowercase `#rrggbb` string.
///
/// # Examples
///
/// ```
/// use huegrid::models::HslColor;
/// use huegrid::palette::hsl_to_hex;
///
/// assert_eq!(hsl_to_hex(&HslColor::new(120.0, 100.0, 50.0)), "#00ff00");
/// ```
#[must_use]
pub fn hsl_to_hex(color: &HslColor) -> String {
    color.to_hex()
}

/// Picks black or white text for a background given as a hex string.
///
/// Input that does not parse as a 6-digit hex color gets white text.
#[must_use]
pub fn contrast_color(hex: &str) -> Contrast {
    RgbColor::from_hex(hex).map_or(Contrast::White, |rgb| rgb.contrast())
}
