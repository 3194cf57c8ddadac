//! Parameter panel for editing the grid configuration.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::grid_config::{
    COLUMN_STEP_BOUNDS, DIMENSION_BOUNDS, HUE_BOUNDS, HUE_STEP_BOUNDS, PERCENT_BOUNDS,
};
use crate::models::{ColumnMode, GridConfig};
use crate::tui::Theme;

/// Editable configuration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamField {
    /// Hue of the first row
    BaseHue,
    /// Saturation of the first column
    BaseSat,
    /// Lightness of the first column
    BaseLight,
    /// Hue change per row
    HueStep,
    /// Saturation change per column
    SatStep,
    /// Lightness change per column
    LightStep,
    /// Row count
    Rows,
    /// Column count
    Cols,
    /// Column mode
    Mode,
}

impl ParamField {
    /// All fields in display order.
    pub const ALL: [Self; 9] = [
        Self::BaseHue,
        Self::BaseSat,
        Self::BaseLight,
        Self::HueStep,
        Self::SatStep,
        Self::LightStep,
        Self::Rows,
        Self::Cols,
        Self::Mode,
    ];

    /// Get the next field, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Get the previous field, wrapping around.
    #[must_use]
    pub fn previous(self) -> Self {
        let index = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Get the field label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BaseHue => "Base Hue",
            Self::BaseSat => "Base Sat",
            Self::BaseLight => "Base Light",
            Self::HueStep => "Hue Step",
            Self::SatStep => "Sat Step",
            Self::LightStep => "Light Step",
            Self::Rows => "Rows",
            Self::Cols => "Cols",
            Self::Mode => "Mode",
        }
    }

    /// Increment applied per key press; `coarse` is used with Shift.
    const fn increment(self, coarse: bool) -> f64 {
        match (self, coarse) {
            (Self::BaseHue, true) => 15.0,
            (Self::BaseSat | Self::BaseLight | Self::HueStep, true) => 5.0,
            (Self::SatStep | Self::LightStep, true) => 2.0,
            _ => 1.0,
        }
    }

    /// Formats the field's current value.
    #[must_use]
    pub fn format_value(self, config: &GridConfig) -> String {
        match self {
            Self::BaseHue => format!("{}°", config.base_hue),
            Self::BaseSat => format!("{}%", config.base_sat),
            Self::BaseLight => format!("{}%", config.base_light),
            Self::HueStep => format!("{:+}°", config.hue_step),
            Self::SatStep => format!("{:+}%", config.sat_step),
            Self::LightStep => format!("{:+}%", config.light_step),
            Self::Rows => config.rows.to_string(),
            Self::Cols => config.cols.to_string(),
            Self::Mode => config.column_mode.to_string(),
        }
    }

    /// Whether the field has no effect under the current column mode.
    #[must_use]
    pub const fn is_inactive(self, config: &GridConfig) -> bool {
        matches!(
            (self, config.column_mode),
            (Self::SatStep, ColumnMode::Lightness) | (Self::LightStep, ColumnMode::Saturation)
        )
    }
}

/// Adjusts one field by `direction` increments and keeps it in control bounds.
///
/// Base hue wraps around the color wheel; everything else saturates at its
/// bounds. The mode field toggles regardless of direction.
pub fn adjust(config: &mut GridConfig, field: ParamField, direction: i32, coarse: bool) {
    let delta = f64::from(direction) * field.increment(coarse);
    let clamp = |value: f64, bounds: &std::ops::RangeInclusive<f64>| {
        value.clamp(*bounds.start(), *bounds.end())
    };
    // Dimensions use the integer increment directly
    let step = if coarse { 2 } else { 1 } * direction;

    match field {
        ParamField::BaseHue => {
            config.base_hue = (config.base_hue + delta).rem_euclid(*HUE_BOUNDS.end());
        }
        ParamField::BaseSat => config.base_sat = clamp(config.base_sat + delta, &PERCENT_BOUNDS),
        ParamField::BaseLight => {
            config.base_light = clamp(config.base_light + delta, &PERCENT_BOUNDS);
        }
        ParamField::HueStep => config.hue_step = clamp(config.hue_step + delta, &HUE_STEP_BOUNDS),
        ParamField::SatStep => {
            config.sat_step = clamp(config.sat_step + delta, &COLUMN_STEP_BOUNDS);
        }
        ParamField::LightStep => {
            config.light_step = clamp(config.light_step + delta, &COLUMN_STEP_BOUNDS);
        }
        ParamField::Rows => {
            config.rows = (config.rows + step).clamp(*DIMENSION_BOUNDS.start(), *DIMENSION_BOUNDS.end());
        }
        ParamField::Cols => {
            config.cols = (config.cols + step).clamp(*DIMENSION_BOUNDS.start(), *DIMENSION_BOUNDS.end());
        }
        ParamField::Mode => config.column_mode = config.column_mode.toggled(),
    }
}

/// Renders the parameter panel.
pub fn render(
    f: &mut Frame,
    area: Rect,
    config: &GridConfig,
    selected: ParamField,
    focused: bool,
    theme: &Theme,
) {
    let lines: Vec<Line> = ParamField::ALL
        .iter()
        .map(|&field| {
            let is_selected = focused && field == selected;
            let marker = if is_selected { "▶ " } else { "  " };
            let label_style = if is_selected {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else if field.is_inactive(config) {
                Style::default().fg(theme.text_muted)
            } else {
                Style::default().fg(theme.text_secondary)
            };
            let value_style = if field.is_inactive(config) {
                Style::default().fg(theme.text_muted)
            } else {
                Style::default().fg(theme.text)
            };

            Line::from(vec![
                Span::styled(marker, Style::default().fg(theme.accent)),
                Span::styled(format!("{:<11}", field.label()), label_style),
                Span::styled(field.format_value(config), value_style),
            ])
        })
        .collect();

    let border_style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.primary)
    };

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" Parameters ")
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(panel, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_cycle_wraps() {
        assert_eq!(ParamField::BaseHue.previous(), ParamField::Mode);
        assert_eq!(ParamField::Mode.next(), ParamField::BaseHue);
        assert_eq!(ParamField::BaseSat.next(), ParamField::BaseLight);
    }

    #[test]
    fn test_adjust_hue_wraps() {
        let mut config = GridConfig {
            base_hue: 359.0,
            ..GridConfig::default()
        };
        adjust(&mut config, ParamField::BaseHue, 1, false);
        assert!(config.base_hue.abs() < f64::EPSILON);

        adjust(&mut config, ParamField::BaseHue, -1, true);
        assert!((config.base_hue - 345.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_adjust_clamps_to_bounds() {
        let mut config = GridConfig {
            base_light: 99.0,
            hue_step: -59.0,
            rows: 20,
            ..GridConfig::default()
        };
        adjust(&mut config, ParamField::BaseLight, 1, true);
        adjust(&mut config, ParamField::HueStep, -1, true);
        adjust(&mut config, ParamField::Rows, 1, false);

        assert!((config.base_light - 100.0).abs() < f64::EPSILON);
        assert!((config.hue_step - -60.0).abs() < f64::EPSILON);
        assert_eq!(config.rows, 20);

        config.cols = 1;
        adjust(&mut config, ParamField::Cols, -1, false);
        assert_eq!(config.cols, 1);
    }

    #[test]
    fn test_adjust_mode_toggles() {
        let mut config = GridConfig::default();
        adjust(&mut config, ParamField::Mode, -1, false);
        assert_eq!(config.column_mode, ColumnMode::Saturation);
        adjust(&mut config, ParamField::Mode, 1, false);
        assert_eq!(config.column_mode, ColumnMode::Lightness);
    }

    #[test]
    fn test_inactive_step_follows_mode() {
        let config = GridConfig::default();
        assert!(ParamField::SatStep.is_inactive(&config));
        assert!(!ParamField::LightStep.is_inactive(&config));
    }
}
