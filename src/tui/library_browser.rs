//! Saved theme browser popup.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::component::{Component, ComponentEvent};
use super::text_dialog::controls;
use super::{centered_rect, Theme};
use crate::models::{GridConfig, SavedTheme};

/// Browser over the theme library snapshot taken when it was opened.
#[derive(Debug, Clone)]
pub struct LibraryBrowser {
    /// Saved themes, newest first
    pub themes: Vec<SavedTheme>,
    /// Currently selected index
    pub selected: usize,
    /// Whether a delete is waiting for confirmation
    pub confirm_delete: bool,
}

impl LibraryBrowser {
    /// Creates a browser over `themes`.
    #[must_use]
    pub const fn new(themes: Vec<SavedTheme>) -> Self {
        Self {
            themes,
            selected: 0,
            confirm_delete: false,
        }
    }

    /// Gets the currently selected theme (if any).
    #[must_use]
    pub fn selected_theme(&self) -> Option<&SavedTheme> {
        self.themes.get(self.selected)
    }

    /// Removes a theme from the snapshot after it was deleted from the store.
    pub fn remove(&mut self, id: &str) {
        self.themes.retain(|theme| theme.id != id);
        if self.selected >= self.themes.len() {
            self.selected = self.themes.len().saturating_sub(1);
        }
    }

    const fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    fn select_next(&mut self) {
        if self.selected + 1 < self.themes.len() {
            self.selected += 1;
        }
    }
}

impl Component for LibraryBrowser {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        if self.confirm_delete {
            self.confirm_delete = false;
            return match key.code {
                KeyCode::Char('y' | 'Y') => self
                    .selected_theme()
                    .map(|theme| ComponentEvent::ThemeDeleted(theme.id.clone())),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q' | 'l') => Some(ComponentEvent::Cancelled),
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                None
            }
            KeyCode::Enter => self.selected_theme().cloned().map(ComponentEvent::ThemeLoaded),
            KeyCode::Char('d') | KeyCode::Delete if self.selected_theme().is_some() => {
                self.confirm_delete = true;
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let area = centered_rect(70, 70, area);
        f.render_widget(Clear, area);

        let block = Block::default()
            .title(format!(" Theme Library ({}) ", self.themes.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),    // List
                Constraint::Length(4), // Details
                Constraint::Length(1), // Controls
            ])
            .split(inner);

        if self.themes.is_empty() {
            let empty = Paragraph::new("No saved themes yet. Press s in the main view to save one.")
                .style(Style::default().fg(theme.text_muted))
                .wrap(Wrap { trim: true });
            f.render_widget(empty, chunks[0]);
        } else {
            let items: Vec<ListItem> = self.themes.iter().map(|t| theme_item(t, theme)).collect();
            let list = List::new(items)
                .highlight_style(
                    Style::default()
                        .bg(theme.highlight_bg)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("▶ ");
            let mut list_state = ListState::default().with_selected(Some(self.selected));
            f.render_stateful_widget(list, chunks[0], &mut list_state);
        }

        let details = if self.confirm_delete {
            Paragraph::new(Line::from(Span::styled(
                "Delete this theme? (y/N)",
                Style::default().fg(theme.warning).add_modifier(Modifier::BOLD),
            )))
        } else {
            let description = self
                .selected_theme()
                .map(|t| t.description.as_str())
                .unwrap_or_default();
            Paragraph::new(description)
                .style(Style::default().fg(theme.text_secondary))
                .wrap(Wrap { trim: true })
        };
        f.render_widget(
            details.block(Block::default().borders(Borders::TOP)),
            chunks[1],
        );

        f.render_widget(
            controls(theme, &[("Enter", "load"), ("d", "delete"), ("Esc", "close")]),
            chunks[2],
        );
    }
}

/// One list row: a strip of the theme's first-row colors, then its name and date.
fn theme_item<'a>(saved: &'a SavedTheme, theme: &Theme) -> ListItem<'a> {
    let strip = GridConfig {
        rows: saved.config.rows.min(1),
        cols: saved.config.cols.min(8),
        ..saved.config
    };
    let mut spans: Vec<Span> = strip
        .generate()
        .first()
        .into_iter()
        .flatten()
        .take(8)
        .map(|color| Span::styled("  ", Style::default().bg(color.to_rgb().to_ratatui_color())))
        .collect();

    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        saved.name.as_str(),
        Style::default().fg(theme.text),
    ));
    if let Some(created) = saved.created() {
        spans.push(Span::styled(
            format!("  {}", created.format("%Y-%m-%d %H:%M")),
            Style::default().fg(theme.text_muted),
        ));
    }
    ListItem::new(Line::from(spans))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GridConfig;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn saved(id: &str) -> SavedTheme {
        SavedTheme {
            id: id.to_string(),
            name: format!("Theme {id}"),
            description: String::new(),
            config: GridConfig::default(),
            created_at: 0,
        }
    }

    #[test]
    fn test_enter_loads_selected_theme() {
        let mut browser = LibraryBrowser::new(vec![saved("a"), saved("b")]);
        browser.handle_input(key(KeyCode::Down));
        browser.handle_input(key(KeyCode::Down));
        assert_eq!(browser.selected, 1);

        match browser.handle_input(key(KeyCode::Enter)) {
            Some(ComponentEvent::ThemeLoaded(theme)) => assert_eq!(theme.id, "b"),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut browser = LibraryBrowser::new(vec![saved("a")]);
        assert_eq!(browser.handle_input(key(KeyCode::Char('d'))), None);
        assert!(browser.confirm_delete);
        assert_eq!(browser.handle_input(key(KeyCode::Char('n'))), None);
        assert!(!browser.confirm_delete);

        browser.handle_input(key(KeyCode::Char('d')));
        assert_eq!(
            browser.handle_input(key(KeyCode::Char('y'))),
            Some(ComponentEvent::ThemeDeleted("a".to_string()))
        );
    }

    #[test]
    fn test_remove_keeps_selection_in_range() {
        let mut browser = LibraryBrowser::new(vec![saved("a"), saved("b")]);
        browser.selected = 1;
        browser.remove("b");
        assert_eq!(browser.selected, 0);
        browser.remove("a");
        assert!(browser.selected_theme().is_none());
        assert_eq!(browser.handle_input(key(KeyCode::Enter)), None);
    }
}
