//! Display-ready grid cells: each color with its hex code and label color.

use serde::Serialize;

use super::Grid;
use crate::models::{Contrast, HslColor};

/// One rendered grid cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Swatch {
    /// Hue (degrees)
    pub h: f64,
    /// Saturation (percent)
    pub s: f64,
    /// Lightness (percent)
    pub l: f64,
    /// Background color, `#rrggbb`
    pub hex: String,
    /// Label color that stays legible on `hex`
    pub contrast: Contrast,
}

impl From<&HslColor> for Swatch {
    fn from(color: &HslColor) -> Self {
        let rgb = color.to_rgb();
        Self {
            h: color.h,
            s: color.s,
            l: color.l,
            hex: rgb.to_hex(),
            contrast: rgb.contrast(),
        }
    }
}

/// A grid converted to swatches, with its dimensions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedGrid {
    /// Number of rows
    pub rows: usize,
    /// Number of columns (0 for an empty grid)
    pub cols: usize,
    /// Cells indexed `[row][col]`
    pub cells: Vec<Vec<Swatch>>,
}

impl RenderedGrid {
    /// Converts every cell of `grid`.
    #[must_use]
    pub fn from_grid(grid: &Grid) -> Self {
        let cells: Vec<Vec<Swatch>> = grid
            .iter()
            .map(|row| row.iter().map(Swatch::from).collect())
            .collect();

        Self {
            rows: cells.len(),
            cols: cells.first().map_or(0, Vec::len),
            cells,
        }
    }

    /// Renders the grid as CSS custom properties (`--grid-<row>-<col>`).
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (r, row) in self.cells.iter().enumerate() {
            for (c, swatch) in row.iter().enumerate() {
                css.push_str(&format!("  --grid-{r}-{c}: {};\n", swatch.hex));
            }
        }
        css.push('}');
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GridConfig;

    #[test]
    fn test_swatch_from_color() {
        let swatch = Swatch::from(&HslColor::new(0.0, 0.0, 100.0));
        assert_eq!(swatch.hex, "#ffffff");
        assert_eq!(swatch.contrast, Contrast::Black);
    }

    #[test]
    fn test_swatch_serializes_contrast_as_hex() {
        let dark = serde_json::to_value(Swatch::from(&HslColor::new(0.0, 0.0, 10.0))).unwrap();
        assert_eq!(dark["contrast"], "#ffffff");

        let light = serde_json::to_value(Swatch::from(&HslColor::new(0.0, 0.0, 90.0))).unwrap();
        assert_eq!(light["contrast"], "#000000");

        let parsed: Contrast = serde_json::from_str("\"#000000\"").unwrap();
        assert_eq!(parsed, Contrast::Black);
    }

    #[test]
    fn test_rendered_grid_dimensions() {
        let config = GridConfig {
            rows: 3,
            cols: 5,
            ..GridConfig::default()
        };
        let rendered = RenderedGrid::from_grid(&config.generate());
        assert_eq!(rendered.rows, 3);
        assert_eq!(rendered.cols, 5);
        assert_eq!(rendered.cells[0][0].hex, "#269dd9");
    }

    #[test]
    fn test_empty_grid() {
        let rendered = RenderedGrid::from_grid(&Vec::new());
        assert_eq!(rendered.rows, 0);
        assert_eq!(rendered.cols, 0);
        assert_eq!(rendered.to_css(), ":root {\n}");
    }

    #[test]
    fn test_css_output() {
        let config = GridConfig {
            rows: 1,
            cols: 2,
            ..GridConfig::default()
        };
        let css = RenderedGrid::from_grid(&config.generate()).to_css();
        assert!(css.starts_with(":root {\n  --grid-0-0: #269dd9;\n"));
        assert!(css.contains("--grid-0-1: #"));
        assert!(css.ends_with('}'));
    }
}
