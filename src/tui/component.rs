//! Component trait pattern for TUI popups.
//!
//! Popups own their state, handle their own input and report back to
//! `AppState` through events.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::models::SavedTheme;
use crate::tui::Theme;

/// A component that can be rendered and handle input.
pub trait Component {
    /// Event type this component can emit
    type Event;

    /// Handle keyboard input.
    ///
    /// Returns `Some(Event)` if the component wants to signal something to the parent.
    /// Returns `None` if input was handled internally without needing parent action.
    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event>;

    /// Render the component within the provided area.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Events emitted by popup components.
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentEvent {
    /// Save the current configuration under a name
    SaveRequested {
        /// Theme name
        name: String,
        /// Theme description
        description: String,
    },
    /// Send a prompt to the theme generator
    PromptSubmitted(String),
    /// Load a saved theme
    ThemeLoaded(SavedTheme),
    /// Delete a saved theme by ID
    ThemeDeleted(String),
    /// Component was closed without an action
    Cancelled,
}
