//! RGB color handling with hex parsing, HSL conversion and contrast decisions.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::HslColor;

/// Luma threshold (on the 0-255 scale) at or above which dark text is used.
const LUMA_THRESHOLD: u32 = 128;

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Supports parsing from hex strings (#rrggbb) and serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

/// Foreground color chosen to stay legible on a given background.
///
/// Serializes as its hex string, so JSON output carries `"#000000"` or
/// `"#ffffff"` like every other color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Contrast {
    /// Black text (`#000000`), used on light backgrounds
    #[serde(rename = "#000000")]
    Black,
    /// White text (`#ffffff`), used on dark backgrounds
    #[serde(rename = "#ffffff")]
    White,
}

impl Contrast {
    /// Returns the hex string of this contrast color.
    #[must_use]
    pub const fn hex(&self) -> &'static str {
        match self {
            Self::Black => "#000000",
            Self::White => "#ffffff",
        }
    }

    /// Returns the contrast color as an `RgbColor`.
    #[must_use]
    pub const fn to_rgb(&self) -> RgbColor {
        match self {
            Self::Black => RgbColor::new(0, 0, 0),
            Self::White => RgbColor::new(255, 255, 255),
        }
    }
}

impl fmt::Display for Contrast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb"
    ///
    /// # Examples
    ///
    /// ```
    /// use huegrid::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#ff0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    ///
    /// let color = RgbColor::from_hex("00FF00").unwrap();
    /// assert_eq!(color, RgbColor::new(0, 255, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 || !hex.is_ascii() {
            anyhow::bail!("Invalid hex color format '{hex}'. Expected 6 hex digits (rrggbb)");
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .context(format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .context(format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .context(format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Converts the color to a hex string in the format "#rrggbb" (lowercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use huegrid::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::new(255, 0, 0).to_hex(), "#ff0000");
    /// assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "#0080ff");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Converts the color to a Ratatui Color for terminal rendering.
    #[cfg(feature = "ratatui")]
    #[must_use]
    pub const fn to_ratatui_color(&self) -> ratatui::style::Color {
        ratatui::style::Color::Rgb(self.r, self.g, self.b)
    }

    /// Creates an `RgbColor` from an HSL triple.
    ///
    /// Uses the closed-form HSL transform: with `l' = l/100` and
    /// `a = s/100 * min(l', 1 - l')`, each channel with offset `n`
    /// (red 0, green 8, blue 4) is `l' - a * max(min(k - 3, 9 - k, 1), -1)`
    /// where `k = (n + h/30) mod 12`. `k` is taken with a Euclidean modulus,
    /// so negative and out-of-range hues wrap like any other angle.
    ///
    /// # Examples
    ///
    /// ```
    /// use huegrid::models::{HslColor, RgbColor};
    ///
    /// let red = RgbColor::from_hsl(HslColor::new(0.0, 100.0, 50.0));
    /// assert_eq!(red, RgbColor::new(255, 0, 0));
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard HSL color model uses single-char names
    pub fn from_hsl(color: HslColor) -> Self {
        let l = color.l / 100.0;
        let a = color.s * l.min(1.0 - l) / 100.0;

        let channel = |n: f64| -> u8 {
            let k = (n + color.h / 30.0).rem_euclid(12.0);
            let value = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
            round_half_up(255.0 * value).clamp(0.0, 255.0) as u8
        };

        Self {
            r: channel(0.0),
            g: channel(8.0),
            b: channel(4.0),
        }
    }

    /// Perceived brightness using the YIQ luma weights, scaled by 1000.
    ///
    /// Divide by 1000 for the 0-255 luma value. Kept as an integer so the
    /// threshold comparison is exact.
    #[must_use]
    pub const fn luma_millis(&self) -> u32 {
        self.r as u32 * 299 + self.g as u32 * 587 + self.b as u32 * 114
    }

    /// Returns the text color that stays legible on this background.
    ///
    /// Black when luma >= 128, white otherwise.
    #[must_use]
    pub const fn contrast(&self) -> Contrast {
        if self.luma_millis() >= LUMA_THRESHOLD * 1000 {
            Contrast::Black
        } else {
            Contrast::White
        }
    }
}

/// Rounds half-way values toward positive infinity.
///
/// `f64::round` rounds half away from zero, which differs for negative
/// halves (-2.5 -> -3 instead of -2).
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for RgbColor {
    /// Default color is white (#ffffff).
    fn default() -> Self {
        Self::new(255, 255, 255)
    }
}
