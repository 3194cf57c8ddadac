//! Grid configuration: the complete parameter set behind a palette.
//!
//! A `GridConfig` *is* the palette: generation is deterministic, so saving,
//! loading and model-suggested themes all exchange this shape only.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Slider bounds for the base hue (degrees).
pub const HUE_BOUNDS: RangeInclusive<f64> = 0.0..=360.0;
/// Slider bounds for base saturation and lightness (percent).
pub const PERCENT_BOUNDS: RangeInclusive<f64> = 0.0..=100.0;
/// Slider bounds for the per-row hue step (degrees).
pub const HUE_STEP_BOUNDS: RangeInclusive<f64> = -60.0..=60.0;
/// Slider bounds for the per-column saturation/lightness step (percent).
pub const COLUMN_STEP_BOUNDS: RangeInclusive<f64> = -20.0..=20.0;
/// Bounds for the grid dimensions.
pub const DIMENSION_BOUNDS: RangeInclusive<i32> = 1..=20;
/// Largest row or column count a grid is generated with.
pub const MAX_GRID_DIMENSION: i32 = 256;

/// Which parameter varies across columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnMode {
    /// Columns step lightness; saturation stays at the base value
    #[default]
    Lightness,
    /// Columns step saturation; lightness stays at the base value
    Saturation,
}

impl ColumnMode {
    /// Returns the wire name of the mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lightness => "lightness",
            Self::Saturation => "saturation",
        }
    }

    /// Returns the other mode.
    #[must_use]
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Lightness => Self::Saturation,
            Self::Saturation => Self::Lightness,
        }
    }
}

impl fmt::Display for ColumnMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lightness" | "light" | "l" => Ok(Self::Lightness),
            "saturation" | "sat" | "s" => Ok(Self::Saturation),
            other => anyhow::bail!(
                "Invalid column mode '{other}'. Must be 'lightness' or 'saturation'"
            ),
        }
    }
}

/// The complete parameter set for one palette grid.
///
/// Both `sat_step` and `light_step` are always stored; `column_mode`
/// selects which one is applied, so toggling the mode back and forth
/// loses nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfig {
    /// Hue of the first row (degrees)
    pub base_hue: f64,
    /// Saturation of the first column (percent)
    pub base_sat: f64,
    /// Lightness of the first column (percent)
    pub base_light: f64,
    /// Hue change per row (degrees, signed)
    pub hue_step: f64,
    /// Saturation change per column in saturation mode (percent, signed)
    pub sat_step: f64,
    /// Lightness change per column in lightness mode (percent, signed)
    pub light_step: f64,
    /// Number of rows
    pub rows: i32,
    /// Number of columns
    pub cols: i32,
    /// Which parameter varies across columns
    pub column_mode: ColumnMode,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            base_hue: 200.0,
            base_sat: 70.0,
            base_light: 50.0,
            hue_step: 15.0,
            sat_step: 10.0,
            light_step: 8.0,
            rows: 8,
            cols: 8,
            column_mode: ColumnMode::Lightness,
        }
    }
}

impl GridConfig {
    /// Returns the column step selected by `column_mode`.
    #[must_use]
    pub const fn active_column_step(&self) -> f64 {
        match self.column_mode {
            ColumnMode::Lightness => self.light_step,
            ColumnMode::Saturation => self.sat_step,
        }
    }

    /// Checks that the grid is small enough to generate.
    ///
    /// Dimensions at or below zero pass; they generate an empty grid.
    ///
    /// # Errors
    ///
    /// Returns an error if `rows` or `cols` exceeds [`MAX_GRID_DIMENSION`].
    pub fn check_size(&self) -> anyhow::Result<()> {
        if self.rows > MAX_GRID_DIMENSION || self.cols > MAX_GRID_DIMENSION {
            anyhow::bail!(
                "rows and cols must not exceed {MAX_GRID_DIMENSION} (got {} x {})",
                self.rows,
                self.cols
            );
        }
        Ok(())
    }

    /// Returns a copy forced into the interactive control bounds.
    ///
    /// Hue wraps into [0, 360); everything else is clamped. Non-finite
    /// values fall back to the default for that field. Generation itself
    /// never needs this; it exists for untrusted input such as model output.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let finite = |value: f64, fallback: f64| if value.is_finite() { value } else { fallback };
        let clamp = |value: f64, fallback: f64, bounds: &RangeInclusive<f64>| {
            finite(value, fallback).clamp(*bounds.start(), *bounds.end())
        };

        Self {
            base_hue: wrap_hue(finite(self.base_hue, defaults.base_hue)),
            base_sat: clamp(self.base_sat, defaults.base_sat, &PERCENT_BOUNDS),
            base_light: clamp(self.base_light, defaults.base_light, &PERCENT_BOUNDS),
            hue_step: clamp(self.hue_step, defaults.hue_step, &HUE_STEP_BOUNDS),
            sat_step: clamp(self.sat_step, defaults.sat_step, &COLUMN_STEP_BOUNDS),
            light_step: clamp(self.light_step, defaults.light_step, &COLUMN_STEP_BOUNDS),
            rows: self.rows.clamp(*DIMENSION_BOUNDS.start(), *DIMENSION_BOUNDS.end()),
            cols: self.cols.clamp(*DIMENSION_BOUNDS.start(), *DIMENSION_BOUNDS.end()),
            column_mode: self.column_mode,
        }
    }
}

/// Wraps a hue into [0, 360).
///
/// `rem_euclid` rounds tiny negative inputs up to exactly 360.
fn wrap_hue(hue: f64) -> f64 {
    let wrapped = hue.rem_euclid(*HUE_BOUNDS.end());
    if wrapped >= *HUE_BOUNDS.end() {
        0.0
    } else {
        wrapped
    }
}
