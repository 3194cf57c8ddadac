//! Grid derivation: hue varies by row, lightness or saturation by column.

// Row/column counts are small and non-negative once checked
#![allow(clippy::cast_sign_loss)]

use crate::models::rgb::round_half_up;
use crate::models::{ColumnMode, GridConfig, HslColor};

/// A rows x cols matrix of colors, indexed `[row][col]`.
pub type Grid = Vec<Vec<HslColor>>;

/// Generates the palette grid for the given parameters.
///
/// Row `r` has hue `(base_hue + r * hue_step) mod 360`, normalized into
/// [0, 360). Column `c` steps either lightness or saturation (per
/// `column_mode`) from its base value, clamped to [0, 100]; the other
/// parameter stays at its base value unmodified. Every component is rounded
/// half-up. Non-positive `rows` or `cols` produce an empty grid or empty
/// rows; no input is rejected.
///
/// # Examples
///
/// ```
/// use huegrid::models::ColumnMode;
/// use huegrid::palette::generate_grid_colors;
///
/// let grid = generate_grid_colors(350.0, 70.0, 50.0, 20.0, 10.0, 8.0, 2, 1, ColumnMode::Lightness);
/// assert_eq!(grid[1][0].h, 10.0);
/// ```
#[must_use]
pub fn generate_grid_colors(
    base_hue: f64,
    base_sat: f64,
    base_light: f64,
    hue_step: f64,
    sat_step: f64,
    light_step: f64,
    rows: i32,
    cols: i32,
    column_mode: ColumnMode,
) -> Grid {
    let rows = rows.max(0);
    let cols = cols.max(0);

    let mut grid = Vec::with_capacity(rows as usize);
    for r in 0..rows {
        let mut hue = (base_hue + f64::from(r) * hue_step) % 360.0;
        if hue < 0.0 {
            hue += 360.0;
        }

        let mut row = Vec::with_capacity(cols as usize);
        for c in 0..cols {
            let offset = f64::from(c);
            let (sat, light) = match column_mode {
                ColumnMode::Lightness => (base_sat, (base_light + offset * light_step).clamp(0.0, 100.0)),
                ColumnMode::Saturation => ((base_sat + offset * sat_step).clamp(0.0, 100.0), base_light),
            };

            row.push(HslColor::new(
                round_half_up(hue),
                round_half_up(sat),
                round_half_up(light),
            ));
        }
        grid.push(row);
    }

    grid
}

impl GridConfig {
    /// Generates the grid described by this configuration.
    #[must_use]
    pub fn generate(&self) -> Grid {
        generate_grid_colors(
            self.base_hue,
            self.base_sat,
            self.base_light,
            self.hue_step,
            self.sat_step,
            self.light_step,
            self.rows,
            self.cols,
            self.column_mode,
        )
    }
}
