//! Text-entry dialogs: saving a theme and describing a mood for generation.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::component::{Component, ComponentEvent};
use super::{centered_rect, Theme};

/// Field in the save dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveField {
    /// Theme name
    Name,
    /// Theme description
    Description,
}

impl SaveField {
    const fn toggled(self) -> Self {
        match self {
            Self::Name => Self::Description,
            Self::Description => Self::Name,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Description => "Description",
        }
    }
}

/// Dialog asking for a name and description before saving.
#[derive(Debug, Clone)]
pub struct SaveDialog {
    /// Currently active field
    pub active_field: SaveField,
    /// Name field value
    pub name: String,
    /// Description field value
    pub description: String,
    /// Validation message from the last submit
    pub error: Option<String>,
}

impl SaveDialog {
    /// Creates a dialog pre-filled with the current theme's name and description.
    #[must_use]
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            active_field: SaveField::Name,
            name: name.to_string(),
            description: description.to_string(),
            error: None,
        }
    }

    const fn active_field_mut(&mut self) -> &mut String {
        match self.active_field {
            SaveField::Name => &mut self.name,
            SaveField::Description => &mut self.description,
        }
    }
}

impl Component for SaveDialog {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => Some(ComponentEvent::Cancelled),
            (KeyCode::Enter, _) => {
                let name = self.name.trim();
                if name.is_empty() {
                    self.error = Some("Name cannot be empty".to_string());
                    return None;
                }
                Some(ComponentEvent::SaveRequested {
                    name: name.to_string(),
                    description: self.description.trim().to_string(),
                })
            }
            (KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down, _) => {
                self.active_field = self.active_field.toggled();
                None
            }
            (KeyCode::Backspace, _) => {
                self.active_field_mut().pop();
                None
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.error = None;
                self.active_field_mut().push(c);
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let area = centered_rect(60, 50, area);
        f.render_widget(Clear, area);

        let block = Block::default()
            .title(" Save Theme ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Name
                Constraint::Length(3), // Description
                Constraint::Min(1),    // Error
                Constraint::Length(1), // Controls
            ])
            .margin(1)
            .split(inner);

        for (field, value, chunk) in [
            (SaveField::Name, &self.name, chunks[0]),
            (SaveField::Description, &self.description, chunks[1]),
        ] {
            render_input(f, chunk, field.label(), value, field == self.active_field, theme);
        }

        if let Some(error) = &self.error {
            let error = Paragraph::new(error.as_str()).style(Style::default().fg(theme.error));
            f.render_widget(error, chunks[2]);
        }

        f.render_widget(
            controls(theme, &[("Enter", "save"), ("Tab", "next field"), ("Esc", "cancel")]),
            chunks[3],
        );
    }
}

/// Dialog asking for a mood or concept to generate a theme from.
#[derive(Debug, Clone, Default)]
pub struct PromptDialog {
    /// Prompt text
    pub prompt: String,
}

impl PromptDialog {
    /// Creates an empty prompt dialog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            prompt: String::new(),
        }
    }
}

impl Component for PromptDialog {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => Some(ComponentEvent::Cancelled),
            // Empty prompts are ignored rather than sent
            (KeyCode::Enter, _) if self.prompt.trim().is_empty() => None,
            (KeyCode::Enter, _) => Some(ComponentEvent::PromptSubmitted(
                self.prompt.trim().to_string(),
            )),
            (KeyCode::Backspace, _) => {
                self.prompt.pop();
                None
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.prompt.push(c);
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let area = centered_rect(60, 40, area);
        f.render_widget(Clear, area);

        let block = Block::default()
            .title(" Generate Theme ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Hint
                Constraint::Min(3),    // Prompt
                Constraint::Length(1), // Controls
            ])
            .margin(1)
            .split(inner);

        let hint = Paragraph::new("Describe a mood or concept, e.g. \"foggy harbor at dawn\".")
            .style(Style::default().fg(theme.text_secondary))
            .wrap(Wrap { trim: true });
        f.render_widget(hint, chunks[0]);

        render_input(f, chunks[1], "Prompt", &self.prompt, true, theme);

        f.render_widget(
            controls(theme, &[("Enter", "generate"), ("Esc", "cancel")]),
            chunks[2],
        );
    }
}

/// Render a single labelled input box.
fn render_input(f: &mut Frame, area: Rect, label: &str, value: &str, is_active: bool, theme: &Theme) {
    let (style, border_style) = if is_active {
        (
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(theme.accent),
        )
    } else {
        (
            Style::default().fg(theme.text),
            Style::default().fg(theme.text_muted),
        )
    };

    // Display value with cursor if active
    let display_value = if is_active {
        format!("{value}_")
    } else {
        value.to_string()
    };

    let paragraph = Paragraph::new(display_value)
        .style(style)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(label)
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    f.render_widget(paragraph, area);
}

/// Builds a centered "key action" hint line.
pub fn controls<'a>(theme: &Theme, bindings: &[(&'a str, &'a str)]) -> Paragraph<'a> {
    let mut spans = Vec::new();
    for (key, action) in bindings {
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {action}  ")));
    }
    Paragraph::new(Line::from(spans))
        .style(Style::default().fg(theme.text))
        .alignment(Alignment::Center)
}
