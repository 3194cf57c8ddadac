//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]

pub mod clipboard;
pub mod component;
pub mod generation;
pub mod grid_view;
pub mod help_overlay;
pub mod library_browser;
pub mod param_panel;
pub mod status_bar;
pub mod text_dialog;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::config::Config;
use crate::constants::UNTITLED_THEME_NAME;
use crate::models::{GridConfig, SavedTheme, ThemeSuggestion};
use crate::palette::{random_config, RenderedGrid, Swatch};
use crate::services::{GeminiAdapter, JsonThemeLibrary, PromptToThemeAdapter, ThemeLibraryStore};

pub use clipboard::CopyFlash;
pub use component::{Component, ComponentEvent};
pub use generation::GenerationJob;
pub use grid_view::GridView;
pub use help_overlay::HelpOverlay;
pub use library_browser::LibraryBrowser;
pub use param_panel::ParamField;
pub use status_bar::StatusBar;
pub use text_dialog::{PromptDialog, SaveDialog};
pub use theme::Theme;

/// Which main-view pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Color grid
    Grid,
    /// Parameter panel
    Params,
}

/// Cell position in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridCursor {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
}

/// Active popup component
pub enum ActiveComponent {
    /// Save dialog
    SaveDialog(SaveDialog),
    /// Prompt dialog
    PromptDialog(PromptDialog),
    /// Theme library browser
    LibraryBrowser(LibraryBrowser),
    /// Help overlay
    HelpOverlay(HelpOverlay),
}

impl ActiveComponent {
    fn handle_input(&mut self, key: KeyEvent) -> Option<ComponentEvent> {
        match self {
            Self::SaveDialog(c) => c.handle_input(key),
            Self::PromptDialog(c) => c.handle_input(key),
            Self::LibraryBrowser(c) => c.handle_input(key),
            Self::HelpOverlay(c) => c.handle_input(key),
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        match self {
            Self::SaveDialog(c) => c.render(f, area, theme),
            Self::PromptDialog(c) => c.render(f, area, theme),
            Self::LibraryBrowser(c) => c.render(f, area, theme),
            Self::HelpOverlay(c) => c.render(f, area, theme),
        }
    }
}

/// Application state - single source of truth
///
/// All UI components read from this state immutably.
/// Only event handlers modify state explicitly.
pub struct AppState {
    // Palette
    /// Current grid configuration
    pub grid_config: GridConfig,
    /// Grid rendered from `grid_config`
    pub grid: RenderedGrid,
    /// Name of the loaded, saved or generated theme (empty when custom)
    pub theme_name: String,
    /// Description of the current theme
    pub theme_description: String,

    // UI state
    /// Current UI theme
    pub theme: Theme,
    /// Pane receiving navigation keys
    pub focus: Focus,
    /// Selected grid cell
    pub cursor: GridCursor,
    /// Selected parameter
    pub selected_param: ParamField,
    /// Currently active popup (if any)
    pub active_component: Option<ActiveComponent>,
    /// Status bar message
    pub status_message: String,
    /// Current error message (if any)
    pub error_message: Option<String>,
    /// Copy confirmation on a cell
    pub copy_flash: Option<CopyFlash>,

    // Services
    /// Theme library
    pub library: Box<dyn ThemeLibraryStore>,
    /// Prompt-to-theme adapter; `None` when no API key is configured
    pub adapter: Option<Arc<dyn PromptToThemeAdapter>>,
    /// Why the adapter is unavailable
    pub adapter_unavailable: Option<String>,
    /// In-flight generation request
    pub generation: GenerationJob,
    /// Application configuration
    pub config: Config,

    // Control flags
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates a new `AppState` from the application configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the theme library location cannot be resolved
    pub fn new(config: Config) -> Result<Self> {
        let library = JsonThemeLibrary::from_config(&config)
            .context("Failed to locate theme library")?;

        let (adapter, adapter_unavailable) = match GeminiAdapter::from_config(&config.generator) {
            Ok(adapter) => (Some(Arc::new(adapter) as Arc<dyn PromptToThemeAdapter>), None),
            Err(e) => {
                debug!("Theme generation disabled: {e}");
                (None, Some(e.to_string()))
            }
        };

        let mut state = Self::with_services(config, Box::new(library), adapter);
        state.adapter_unavailable = adapter_unavailable;
        Ok(state)
    }

    /// Creates a new `AppState` with explicit services.
    #[must_use]
    pub fn with_services(
        config: Config,
        library: Box<dyn ThemeLibraryStore>,
        adapter: Option<Arc<dyn PromptToThemeAdapter>>,
    ) -> Self {
        let grid_config = if config.ui.start_with_random {
            random_config()
        } else {
            GridConfig::default()
        };

        Self {
            grid: RenderedGrid::from_grid(&grid_config.generate()),
            grid_config,
            theme_name: String::new(),
            theme_description: String::new(),
            theme: Theme::from_mode(config.ui.theme_mode),
            focus: Focus::Grid,
            cursor: GridCursor::default(),
            selected_param: ParamField::BaseHue,
            active_component: None,
            status_message: "Press ? for help".to_string(),
            error_message: None,
            copy_flash: None,
            library,
            adapter,
            adapter_unavailable: None,
            generation: GenerationJob::new(),
            config,
            should_quit: false,
        }
    }

    /// Replaces the grid configuration and regenerates the grid.
    pub fn set_grid_config(&mut self, config: GridConfig) {
        self.grid_config = config;
        self.grid = RenderedGrid::from_grid(&config.generate());
        self.copy_flash = None;
        self.cursor.row = self.cursor.row.min(self.grid.rows.saturating_sub(1));
        self.cursor.col = self.cursor.col.min(self.grid.cols.saturating_sub(1));
    }

    /// Header title: the theme name, or a placeholder for custom palettes.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.theme_name.is_empty() {
            UNTITLED_THEME_NAME
        } else {
            &self.theme_name
        }
    }

    /// Swatch under the cursor.
    #[must_use]
    pub fn selected_swatch(&self) -> Option<&Swatch> {
        self.grid.cells.get(self.cursor.row)?.get(self.cursor.col)
    }

    /// Whether the "Copied!" flash is showing on `position`.
    #[must_use]
    pub fn copy_flash_at(&self, position: GridCursor) -> bool {
        self.copy_flash
            .is_some_and(|flash| flash.position == position && flash.is_active_at(Instant::now()))
    }

    /// Replaces the configuration with a random one.
    ///
    /// The result no longer matches any named theme, so the name is cleared.
    pub fn randomize(&mut self) {
        self.set_grid_config(random_config());
        self.theme_name.clear();
        self.theme_description.clear();
        self.set_status("Randomized palette");
    }

    /// Toggles the column mode.
    pub fn toggle_column_mode(&mut self) {
        let mut config = self.grid_config;
        config.column_mode = config.column_mode.toggled();
        self.set_grid_config(config);
        self.set_status(format!("Columns vary {}", config.column_mode));
    }

    /// Adjusts the selected parameter.
    pub fn adjust_selected_param(&mut self, direction: i32, coarse: bool) {
        let mut config = self.grid_config;
        param_panel::adjust(&mut config, self.selected_param, direction, coarse);
        self.set_grid_config(config);
    }

    /// Loads a saved theme. Oversized grids are refused with an error.
    pub fn load_theme(&mut self, theme: &SavedTheme) {
        if let Err(e) = theme.config.check_size() {
            self.set_error(format!("Cannot load '{}': {e}", theme.name));
            return;
        }
        self.set_grid_config(theme.config);
        self.theme_name.clone_from(&theme.name);
        self.theme_description.clone_from(&theme.description);
        self.set_status(format!("Loaded '{}'", theme.name));
    }

    /// Applies a generated theme, clamped to the control bounds.
    pub fn apply_suggestion(&mut self, suggestion: ThemeSuggestion) {
        let suggestion = suggestion.sanitized();
        self.set_grid_config(suggestion.config);
        self.set_status(format!("Generated '{}'", suggestion.name));
        self.theme_name = suggestion.name;
        self.theme_description = suggestion.description;
    }

    /// Copies the selected cell's hex code to the system clipboard.
    pub fn copy_selected(&mut self) {
        let Some(hex) = self.selected_swatch().map(|swatch| swatch.hex.clone()) else {
            return;
        };

        match clipboard::copy_text(&hex) {
            Ok(()) => {
                self.copy_flash = Some(CopyFlash::new(self.cursor));
                self.set_status(format!("Copied {hex}"));
            }
            Err(e) => self.set_error(format!("Failed to copy to clipboard: {e:#}")),
        }
    }

    /// Moves the grid cursor, staying inside the grid.
    pub fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let clamp = |value: usize, delta: isize, len: usize| {
            value
                .saturating_add_signed(delta)
                .min(len.saturating_sub(1))
        };
        self.cursor.row = clamp(self.cursor.row, d_row, self.grid.rows);
        self.cursor.col = clamp(self.cursor.col, d_col, self.grid.cols);
    }

    /// Opens the prompt dialog unless generation is unavailable or busy.
    pub fn open_prompt_dialog(&mut self) {
        if self.generation.is_running() {
            self.set_status("A theme is already being generated");
            return;
        }
        if self.adapter.is_none() {
            let reason = self
                .adapter_unavailable
                .clone()
                .unwrap_or_else(|| "Theme generation is not configured".to_string());
            self.set_error(reason);
            return;
        }
        self.active_component = Some(ActiveComponent::PromptDialog(PromptDialog::new()));
    }

    /// Opens the library browser over a fresh snapshot of the library.
    pub fn open_library(&mut self) {
        match self.library.list() {
            Ok(themes) => {
                self.active_component =
                    Some(ActiveComponent::LibraryBrowser(LibraryBrowser::new(themes)));
            }
            Err(e) => self.set_error(format!("Failed to read theme library: {e:#}")),
        }
    }

    /// Starts a generation request. Ignored while one is already in flight.
    pub fn start_generation(&mut self, prompt: String) {
        if self.generation.is_running() {
            return;
        }
        let Some(adapter) = self.adapter.clone() else {
            return;
        };
        match self.generation.start(adapter, prompt) {
            Ok(()) => self.set_status("Generating theme..."),
            Err(e) => self.set_error(format!("{e:#}")),
        }
    }

    /// Applies the result of a finished generation request, if any.
    ///
    /// A failed request leaves the current configuration untouched.
    pub fn poll_generation(&mut self) {
        match self.generation.poll() {
            Some(Ok(suggestion)) => self.apply_suggestion(suggestion),
            Some(Err(e)) => self.set_error(format!("Theme generation failed: {e}")),
            None => {}
        }
    }

    /// Handles an event emitted by the active component.
    pub fn handle_component_event(&mut self, event: ComponentEvent) {
        match event {
            ComponentEvent::Cancelled => self.active_component = None,
            ComponentEvent::SaveRequested { name, description } => {
                self.active_component = None;
                match self.library.save(&name, &description, self.grid_config) {
                    Ok(theme) => {
                        self.theme_name = theme.name;
                        self.theme_description = theme.description;
                        self.set_status(format!("Saved '{name}'"));
                    }
                    Err(e) => self.set_error(format!("Failed to save theme: {e:#}")),
                }
            }
            ComponentEvent::PromptSubmitted(prompt) => {
                self.active_component = None;
                self.start_generation(prompt);
            }
            ComponentEvent::ThemeLoaded(theme) => {
                self.active_component = None;
                self.load_theme(&theme);
            }
            ComponentEvent::ThemeDeleted(id) => match self.library.delete(&id) {
                Ok(()) => {
                    if let Some(ActiveComponent::LibraryBrowser(browser)) = &mut self.active_component {
                        browser.remove(&id);
                    }
                    self.set_status("Theme deleted");
                }
                Err(e) => self.set_error(format!("Failed to delete theme: {e:#}")),
            },
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Expire the copy flash
        if state
            .copy_flash
            .is_some_and(|flash| !flash.is_active_at(Instant::now()))
        {
            state.copy_flash = None;
        }

        state.poll_generation();

        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            // Resize events need no handling; the next draw picks up the new size
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key_event(state, key)? {
                    break;
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0], state);

    let main = RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(20)])
        .split(chunks[1]);

    param_panel::render(
        f,
        main[0],
        &state.grid_config,
        state.selected_param,
        state.focus == Focus::Params,
        &state.theme,
    );
    GridView::render(f, main[1], state);

    StatusBar::render(f, chunks[2], state, &state.theme);

    if let Some(component) = &state.active_component {
        component.render(f, f.area(), &state.theme);
    }

    // Render error overlay on top of everything if error is present
    if let Some(ref error) = state.error_message {
        render_error_overlay(f, error, &state.theme);
    }
}

/// Render header with theme name and description
fn render_header(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let lines = vec![
        Line::from(Span::styled(
            state.display_name(),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            state.theme_description.as_str(),
            Style::default().fg(theme.text_secondary),
        )),
    ];

    let header = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" {} ", crate::constants::APP_NAME))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(header, area);
}

/// Render error overlay on top of all other UI elements
fn render_error_overlay(f: &mut Frame, error: &str, theme: &Theme) {
    let area = centered_rect(70, 40, f.area());

    // Clear the background area first
    f.render_widget(Clear, area);

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(3),    // Error message
            Constraint::Length(3), // Help text
        ])
        .split(area);

    let title = Paragraph::new("ERROR")
        .style(
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(theme.error).bg(theme.background)),
        );
    f.render_widget(title, chunks[0]);

    let error_text = Paragraph::new(error)
        .style(Style::default().fg(theme.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Details ")
                .style(Style::default().bg(theme.background)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(error_text, chunks[1]);

    let help = Paragraph::new(vec![Line::from(vec![
        Span::styled(
            "Enter/Esc",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Dismiss"),
    ])])
    .style(Style::default().fg(theme.text).bg(theme.background))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(help, chunks[2]);
}

/// Create a centered rect with the given percentage width and height.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Handle keyboard input events
///
/// Returns `Ok(true)` when the application should quit.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    // If error overlay is shown, allow dismissing with Enter or Esc
    if state.error_message.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            state.clear_error();
        }
        // Block all other input while error is shown
        return Ok(false);
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    // Route to popup component if one is active
    if let Some(component) = &mut state.active_component {
        if let Some(event) = component.handle_input(key) {
            state.handle_component_event(event);
        }
        return Ok(false);
    }

    handle_main_input(state, key)
}

/// Handle input for the main view
fn handle_main_input(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') => state.should_quit = true,
        KeyCode::Char('?') => {
            state.active_component = Some(ActiveComponent::HelpOverlay(HelpOverlay));
        }
        KeyCode::Tab | KeyCode::BackTab => {
            state.focus = match state.focus {
                Focus::Grid => Focus::Params,
                Focus::Params => Focus::Grid,
            };
        }
        KeyCode::Char('m') => state.toggle_column_mode(),
        KeyCode::Char('r') => state.randomize(),
        KeyCode::Char('s') => {
            let dialog = SaveDialog::new(&state.theme_name, &state.theme_description);
            state.active_component = Some(ActiveComponent::SaveDialog(dialog));
        }
        KeyCode::Char('l') => state.open_library(),
        KeyCode::Char('g') => state.open_prompt_dialog(),
        _ => match state.focus {
            Focus::Grid => handle_grid_input(state, key),
            Focus::Params => handle_params_input(state, key),
        },
    }
    Ok(false)
}

fn handle_grid_input(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Up => state.move_cursor(-1, 0),
        KeyCode::Down => state.move_cursor(1, 0),
        KeyCode::Left => state.move_cursor(0, -1),
        KeyCode::Right => state.move_cursor(0, 1),
        KeyCode::Enter | KeyCode::Char('c') => state.copy_selected(),
        _ => {}
    }
}

fn handle_params_input(state: &mut AppState, key: KeyEvent) {
    let coarse = key.modifiers.contains(KeyModifiers::SHIFT);
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.selected_param = state.selected_param.previous(),
        KeyCode::Down | KeyCode::Char('j') => state.selected_param = state.selected_param.next(),
        KeyCode::Left | KeyCode::Char('-') => state.adjust_selected_param(-1, coarse),
        KeyCode::Right | KeyCode::Char('+' | '=') => state.adjust_selected_param(1, coarse),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColumnMode;
    use crate::services::GenerationError;
    use async_trait::async_trait;

    #[derive(Default)]
    struct MemoryLibrary {
        themes: Vec<SavedTheme>,
        next_id: usize,
    }

    impl ThemeLibraryStore for MemoryLibrary {
        fn list(&self) -> Result<Vec<SavedTheme>> {
            Ok(self.themes.clone())
        }

        fn save(&mut self, name: &str, description: &str, config: GridConfig) -> Result<SavedTheme> {
            self.next_id += 1;
            let theme = SavedTheme {
                id: self.next_id.to_string(),
                name: name.to_string(),
                description: description.to_string(),
                config,
                created_at: 0,
            };
            self.themes.insert(0, theme.clone());
            Ok(theme)
        }

        fn delete(&mut self, id: &str) -> Result<()> {
            self.themes.retain(|theme| theme.id != id);
            Ok(())
        }
    }

    struct SlowAdapter;

    #[async_trait]
    impl PromptToThemeAdapter for SlowAdapter {
        async fn generate(&self, _prompt: &str) -> Result<ThemeSuggestion, GenerationError> {
            std::thread::sleep(Duration::from_millis(200));
            Err(GenerationError::EmptyResponse)
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_state() -> AppState {
        let mut config = Config::default();
        config.ui.start_with_random = false;
        AppState::with_services(config, Box::new(MemoryLibrary::default()), None)
    }

    #[test]
    fn test_starts_with_default_config_when_random_disabled() {
        let state = test_state();
        assert_eq!(state.grid_config, GridConfig::default());
        assert_eq!(state.grid.rows, 8);
        assert_eq!(state.display_name(), UNTITLED_THEME_NAME);
    }

    #[test]
    fn test_mode_key_regenerates_grid() {
        let mut state = test_state();
        handle_key_event(&mut state, key(KeyCode::Char('m'))).unwrap();
        assert_eq!(state.grid_config.column_mode, ColumnMode::Saturation);
        assert_eq!(state.grid, RenderedGrid::from_grid(&state.grid_config.generate()));
    }

    #[test]
    fn test_cursor_clamps_when_grid_shrinks() {
        let mut state = test_state();
        state.move_cursor(10, 10);
        assert_eq!(state.cursor, GridCursor { row: 7, col: 7 });

        state.set_grid_config(GridConfig {
            rows: 3,
            cols: 2,
            ..GridConfig::default()
        });
        assert_eq!(state.cursor, GridCursor { row: 2, col: 1 });

        state.move_cursor(-5, -5);
        assert_eq!(state.cursor, GridCursor::default());
    }

    #[test]
    fn test_param_panel_adjusts_selected_field() {
        let mut state = test_state();
        handle_key_event(&mut state, key(KeyCode::Tab)).unwrap();
        assert_eq!(state.focus, Focus::Params);

        handle_key_event(&mut state, key(KeyCode::Down)).unwrap();
        assert_eq!(state.selected_param, ParamField::BaseSat);
        handle_key_event(&mut state, key(KeyCode::Right)).unwrap();
        assert!((state.grid_config.base_sat - 71.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_save_dialog_stores_theme_and_names_palette() {
        let mut state = test_state();
        handle_key_event(&mut state, key(KeyCode::Char('s'))).unwrap();
        for c in "Dusk".chars() {
            handle_key_event(&mut state, key(KeyCode::Char(c))).unwrap();
        }
        handle_key_event(&mut state, key(KeyCode::Enter)).unwrap();

        assert!(state.active_component.is_none());
        assert_eq!(state.display_name(), "Dusk");
        let themes = state.library.list().unwrap();
        assert_eq!(themes.len(), 1);
        assert_eq!(themes[0].config, state.grid_config);
    }

    #[test]
    fn test_library_load_and_delete() {
        let mut state = test_state();
        let config = GridConfig {
            base_hue: 10.0,
            rows: 4,
            ..GridConfig::default()
        };
        state.library.save("Ember", "hot", config).unwrap();

        handle_key_event(&mut state, key(KeyCode::Char('l'))).unwrap();
        handle_key_event(&mut state, key(KeyCode::Enter)).unwrap();
        assert_eq!(state.grid_config, config);
        assert_eq!(state.theme_name, "Ember");
        assert_eq!(state.theme_description, "hot");

        handle_key_event(&mut state, key(KeyCode::Char('l'))).unwrap();
        handle_key_event(&mut state, key(KeyCode::Char('d'))).unwrap();
        handle_key_event(&mut state, key(KeyCode::Char('y'))).unwrap();
        assert!(state.library.list().unwrap().is_empty());
    }

    #[test]
    fn test_oversized_theme_is_not_loaded() {
        let mut state = test_state();
        let theme = SavedTheme {
            id: "huge".to_string(),
            name: "Huge".to_string(),
            description: String::new(),
            config: GridConfig {
                rows: 2_000_000_000,
                ..GridConfig::default()
            },
            created_at: 0,
        };

        state.load_theme(&theme);
        assert!(state.error_message.is_some());
        assert_eq!(state.grid_config, GridConfig::default());
        assert_eq!(state.display_name(), UNTITLED_THEME_NAME);
    }

    #[test]
    fn test_grid_letter_keys_do_not_move_cursor() {
        let mut state = test_state();
        state.move_cursor(2, 2);
        for c in ['h', 'j', 'k'] {
            handle_key_event(&mut state, key(KeyCode::Char(c))).unwrap();
        }
        assert_eq!(state.cursor, GridCursor { row: 2, col: 2 });
    }

    #[test]
    fn test_randomize_clears_name() {
        let mut state = test_state();
        state.theme_name = "Ember".to_string();
        handle_key_event(&mut state, key(KeyCode::Char('r'))).unwrap();
        assert_eq!(state.display_name(), UNTITLED_THEME_NAME);
        assert_eq!(state.grid_config.rows, 8);
    }

    #[test]
    fn test_generate_without_adapter_shows_error() {
        let mut state = test_state();
        handle_key_event(&mut state, key(KeyCode::Char('g'))).unwrap();
        assert!(state.error_message.is_some());
        assert!(state.active_component.is_none());

        // Error overlay swallows keys until dismissed
        handle_key_event(&mut state, key(KeyCode::Char('m'))).unwrap();
        assert_eq!(state.grid_config.column_mode, ColumnMode::Lightness);
        handle_key_event(&mut state, key(KeyCode::Esc)).unwrap();
        assert!(state.error_message.is_none());
    }

    #[test]
    fn test_prompt_ignored_while_generating() {
        let mut config = Config::default();
        config.ui.start_with_random = false;
        let mut state = AppState::with_services(
            config,
            Box::new(MemoryLibrary::default()),
            Some(Arc::new(SlowAdapter)),
        );

        state.start_generation("first".to_string());
        assert!(state.generation.is_running());
        state.start_generation("second".to_string());
        assert_eq!(state.generation.prompt(), Some("first"));

        handle_key_event(&mut state, key(KeyCode::Char('g'))).unwrap();
        assert!(state.active_component.is_none());

        // A failed generation leaves the configuration untouched
        let deadline = Instant::now() + Duration::from_secs(5);
        while state.generation.is_running() {
            assert!(Instant::now() < deadline, "generation did not finish");
            state.poll_generation();
            std::thread::sleep(Duration::from_millis(10));
        }
        assert!(state.error_message.is_some());
        assert_eq!(state.grid_config, GridConfig::default());
    }

    #[test]
    fn test_suggestion_is_clamped_and_named() {
        let mut state = test_state();
        state.apply_suggestion(ThemeSuggestion {
            name: "Neon".to_string(),
            description: "bright".to_string(),
            config: GridConfig {
                base_hue: 400.0,
                rows: 50,
                ..GridConfig::default()
            },
        });
        assert_eq!(state.display_name(), "Neon");
        assert!((state.grid_config.base_hue - 40.0).abs() < f64::EPSILON);
        assert_eq!(state.grid.rows, 20);
    }
}
