//! Color grid widget.
//!
//! Each cell is filled with its own color and labelled with its hex code in
//! the contrasting text color. The selected cell is marked, and shows
//! "Copied!" while a copy flash is active on it.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, GridCursor};
use crate::models::HslColor;
use crate::palette::Swatch;

/// Grid widget
pub struct GridView;

impl GridView {
    /// Render the color grid.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let border_style = if state.focus == super::Focus::Grid {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.primary)
        };

        let block = Block::default()
            .title(format!(
                " {} × {} · {} ",
                state.grid.rows, state.grid.cols, state.grid_config.column_mode
            ))
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(theme.background));
        let inner = block.inner(area);
        f.render_widget(block, area);

        if state.grid.rows == 0 || state.grid.cols == 0 {
            let empty = Paragraph::new("Empty grid")
                .style(Style::default().fg(theme.text_muted))
                .alignment(Alignment::Center);
            f.render_widget(empty, inner);
            return;
        }

        let row_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Ratio(1, state.grid.rows as u32); state.grid.rows])
            .split(inner);

        for (r, row) in state.grid.cells.iter().enumerate() {
            let cell_areas = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, row.len() as u32); row.len()])
                .split(row_areas[r]);

            for (c, swatch) in row.iter().enumerate() {
                let position = GridCursor { row: r, col: c };
                render_cell(f, cell_areas[c], swatch, position, state);
            }
        }
    }
}

fn render_cell(f: &mut Frame, area: Rect, swatch: &Swatch, position: GridCursor, state: &AppState) {
    let background = HslColor::new(swatch.h, swatch.s, swatch.l)
        .to_rgb()
        .to_ratatui_color();
    let foreground = swatch.contrast.to_rgb().to_ratatui_color();
    let is_selected = state.focus == super::Focus::Grid && state.cursor == position;

    let label = if state.copy_flash_at(position) {
        "Copied!".to_string()
    } else if area.width as usize >= swatch.hex.len() + 2 {
        swatch.hex.clone()
    } else {
        String::new()
    };

    let mut style = Style::default().bg(background).fg(foreground);
    if is_selected {
        style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }

    // Vertically center the label
    let padding = area.height.saturating_sub(1) / 2;
    let mut lines: Vec<Line> = (0..padding).map(|_| Line::from("")).collect();
    lines.push(Line::from(label));

    let cell = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(cell, area);
}
