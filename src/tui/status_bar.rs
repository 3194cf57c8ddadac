//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Focus, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with the selected cell, status and key hints.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let mut lines: Vec<Line> = Vec::new();

        let status = if let Some(prompt) = state.generation.prompt() {
            Line::from(vec![
                Span::styled("Generating: ", Style::default().fg(theme.warning)),
                Span::styled(format!("\"{prompt}\"..."), Style::default().fg(theme.text)),
            ])
        } else {
            Line::from(Span::styled(
                state.status_message.as_str(),
                Style::default().fg(theme.text),
            ))
        };
        lines.push(status);

        if let Some(swatch) = state.selected_swatch() {
            lines.push(Line::from(vec![
                Span::styled("Cell: ", Style::default().fg(theme.primary)),
                Span::styled(
                    format!("{} ", swatch.hex),
                    Style::default()
                        .fg(theme.text)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("H:{} S:{}% L:{}%", swatch.h, swatch.s, swatch.l),
                    Style::default().fg(theme.text_secondary),
                ),
            ]));
        } else {
            lines.push(Line::from(""));
        }

        lines.push(Self::help_line(state, theme));

        let widget = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .style(Style::default().bg(theme.background)),
        );
        f.render_widget(widget, area);
    }

    fn help_line<'a>(state: &AppState, theme: &Theme) -> Line<'a> {
        let bindings: &[(&str, &str)] = match state.focus {
            Focus::Grid => &[
                ("←↑↓→", "move"),
                ("Enter/c", "copy"),
                ("Tab", "params"),
                ("m", "mode"),
                ("r", "random"),
                ("s", "save"),
                ("l", "library"),
                ("g", "generate"),
                ("?", "help"),
                ("q", "quit"),
            ],
            Focus::Params => &[
                ("↑↓", "field"),
                ("←→", "adjust"),
                ("Shift", "coarse"),
                ("Tab", "grid"),
                ("m", "mode"),
                ("r", "random"),
                ("?", "help"),
                ("q", "quit"),
            ],
        };

        let mut spans = Vec::new();
        for (key, action) in bindings {
            spans.push(Span::styled(
                *key,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(" {action}  "),
                Style::default().fg(theme.text_muted),
            ));
        }
        Line::from(spans)
    }
}
