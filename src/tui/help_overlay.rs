//! Keyboard shortcut reference overlay.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::component::{Component, ComponentEvent};
use super::{centered_rect, Theme};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Grid",
        &[
            ("Arrows", "Move the cursor"),
            ("Enter / c", "Copy the cell's hex code"),
            ("Tab", "Switch to the parameter panel"),
        ],
    ),
    (
        "Parameters",
        &[
            ("Up / Down", "Select a parameter"),
            ("Left / Right", "Adjust the value"),
            ("Shift+Left / Shift+Right", "Adjust in larger steps"),
        ],
    ),
    (
        "Palette",
        &[
            ("m", "Toggle lightness / saturation columns"),
            ("r", "Randomize the configuration"),
            ("s", "Save to the theme library"),
            ("l", "Open the theme library"),
            ("g", "Generate a theme from a description"),
        ],
    ),
    ("General", &[("?", "Toggle this help"), ("q / Ctrl+C", "Quit")]),
];

/// Help overlay component
#[derive(Debug, Clone, Copy, Default)]
pub struct HelpOverlay;

impl Component for HelpOverlay {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?' | 'q') | KeyCode::Enter => {
                Some(ComponentEvent::Cancelled)
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let area = centered_rect(60, 80, area);
        f.render_widget(Clear, area);

        let mut lines = Vec::new();
        for (title, bindings) in SECTIONS {
            lines.push(Line::from(Span::styled(
                *title,
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )));
            for (key, action) in *bindings {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {key:<26}"), Style::default().fg(theme.accent)),
                    Span::styled(*action, Style::default().fg(theme.text)),
                ]));
            }
            lines.push(Line::from(""));
        }

        let help = Paragraph::new(lines).block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .style(Style::default().bg(theme.background)),
        );
        f.render_widget(help, area);
    }
}
