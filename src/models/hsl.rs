//! HSL color triple.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::RgbColor;

/// A hue/saturation/lightness triple.
///
/// Hue is in degrees and conceptually lives in [0, 360), but values outside
/// that range are accepted; conversion treats hue as periodic. Saturation
/// and lightness are percentages in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HslColor {
    /// Hue in degrees
    pub h: f64,
    /// Saturation percentage
    pub s: f64,
    /// Lightness percentage
    pub l: f64,
}

impl HslColor {
    /// Creates a new HSL triple.
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Converts to RGB.
    #[must_use]
    pub fn to_rgb(&self) -> RgbColor {
        RgbColor::from_hsl(*self)
    }

    /// Converts to a lowercase `#rrggbb` string.
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.to_rgb().to_hex()
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H:{} S:{}% L:{}%", self.h, self.s, self.l)
    }
}
