//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event routing,
//! and all UI widgets using Ratatui.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod book_form;
pub mod book_list;
pub mod component;
pub mod handlers;
pub mod help_overlay;
pub mod progress_view;
pub mod search_view;
pub mod sidebar;
pub mod status_bar;
pub mod theme;
pub mod title_picker;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
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
use std::time::Duration;

use crate::config::Config;
use crate::models::{Book, ReadingProgress};
use crate::services::{books, BookStore};

// Re-export TUI components
pub use book_form::{BookForm, BookFormEvent};
pub use book_list::{BookList, BookListEvent};
pub use component::{Component, ContextualComponent};
pub use help_overlay::HelpOverlay;
pub use progress_view::{ProgressEvent, ProgressView};
pub use search_view::{SearchEvent, SearchView};
pub use sidebar::{MenuItem, Sidebar};
pub use status_bar::StatusBar;
pub use theme::Theme;
pub use title_picker::{TitlePicker, TitlePickerEvent};

/// Which pane receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The view selector
    Sidebar,
    /// The active view's content
    View,
}

/// Severity of the status line message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Neutral information
    Info,
    /// Operation completed
    Success,
    /// Nothing changed, user attention needed
    Warning,
}

/// Update Book flow: pick a title, then edit it.
#[derive(Debug, Clone)]
pub enum UpdateView {
    /// Choosing which book to edit
    Picking(TitlePicker),
    /// Editing the chosen book
    Editing(BookForm),
}

/// The view currently shown next to the sidebar.
///
/// Holds only per-view input state; the collection itself lives in
/// [`AppState::books`].
#[derive(Debug, Clone)]
pub enum ActiveView {
    /// View Books
    Books(BookList),
    /// Add Book
    Add(BookForm),
    /// Search Book
    Search(SearchView),
    /// Update Book
    Update(UpdateView),
    /// Delete Book
    Delete(TitlePicker),
    /// Reading Progress
    Progress(ProgressView),
}

impl ActiveView {
    /// Fresh view state for a menu item.
    #[must_use]
    pub fn for_menu(item: MenuItem, books: &[Book]) -> Self {
        match item {
            MenuItem::ViewBooks => Self::Books(BookList::new()),
            MenuItem::AddBook => Self::Add(BookForm::new_add()),
            MenuItem::SearchBook => Self::Search(SearchView::new()),
            MenuItem::UpdateBook => Self::Update(UpdateView::Picking(TitlePicker::new(
                books::titles(books),
                "update",
            ))),
            MenuItem::DeleteBook => {
                Self::Delete(TitlePicker::confirming(books::titles(books), "delete"))
            }
            MenuItem::ReadingProgress => Self::Progress(ProgressView),
        }
    }
}

/// Application state - single source of truth
///
/// All UI components read from this state immutably.
/// Only event handlers modify state explicitly.
pub struct AppState {
    // Core data
    /// Handle to the persisted book file
    pub store: BookStore,
    /// Collection as loaded at the start of the current interaction cycle
    pub books: Vec<Book>,
    /// Application configuration
    pub config: Config,

    // UI state
    /// Current UI theme
    pub theme: Theme,
    /// Selected sidebar item
    pub menu: MenuItem,
    /// Pane receiving input
    pub focus: Focus,
    /// State of the view for `menu`
    pub view: ActiveView,
    /// Status bar message
    pub status_message: String,
    /// Severity of `status_message`
    pub status_kind: StatusKind,
    /// Current error message (if any), shown as an overlay
    pub error_message: Option<String>,
    /// Whether the help overlay is shown
    pub show_help: bool,
    /// Whether the application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates the state and loads the collection.
    pub fn new(store: BookStore, config: Config) -> Result<Self> {
        let books = store.load()?;
        let theme = Theme::from_mode(config.ui.theme_mode);
        let menu = MenuItem::default();
        let view = ActiveView::for_menu(menu, &books);

        Ok(Self {
            store,
            books,
            config,
            theme,
            menu,
            focus: Focus::Sidebar,
            view,
            status_message: String::new(),
            status_kind: StatusKind::Info,
            error_message: None,
            show_help: false,
            should_quit: false,
        })
    }

    /// Re-reads the collection from disk.
    pub fn reload(&mut self) -> Result<()> {
        self.books = self.store.load()?;
        Ok(())
    }

    /// Switches to `item`, starting a new interaction cycle.
    ///
    /// The collection is reloaded so the view shows persisted state.
    pub fn select_menu(&mut self, item: MenuItem) -> Result<()> {
        tracing::debug!(view = item.label(), "switching view");
        self.menu = item;
        self.reload()?;
        self.view = ActiveView::for_menu(item, &self.books);
        self.clear_status();
        Ok(())
    }

    /// Reading progress of the loaded collection.
    #[must_use]
    pub fn progress(&self) -> ReadingProgress {
        books::progress(&self.books)
    }

    /// Gives key input to the active view.
    pub fn focus_view(&mut self) {
        self.focus = Focus::View;
    }

    /// Gives key input back to the sidebar.
    pub fn focus_sidebar(&mut self) {
        self.focus = Focus::Sidebar;
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.set_status_with_kind(message, StatusKind::Info);
    }

    /// Set status message with a severity
    pub fn set_status_with_kind(&mut self, message: impl Into<String>, kind: StatusKind) {
        self.status_message = message.into();
        self.status_kind = kind;
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message.clear();
        self.status_kind = StatusKind::Info;
    }

    /// Set error message (shown as an overlay)
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
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key_event(state, key)? {
                    break;
                }
            }
            // Resize and other events re-render on the next loop
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
pub fn render(f: &mut Frame, state: &AppState) {
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(10),   // Sidebar + view
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);

    let main = RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(20)])
        .split(chunks[1]);

    Sidebar::render(
        f,
        main[0],
        state.menu,
        state.focus == Focus::Sidebar,
        &state.theme,
    );
    render_view(f, main[1], state);

    StatusBar::render(f, chunks[2], state, &state.theme);

    if state.show_help {
        HelpOverlay::render(f, f.area(), &state.theme);
    }

    // Render error overlay on top of everything if error is present
    if let Some(ref error) = state.error_message {
        render_error_overlay(f, error, &state.theme);
    }
}

/// Render title bar with the store path and book count
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let title = Line::from(vec![
        Span::styled(
            " 📚 Book Collection Manager",
            Style::default()
                .fg(state.theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "  {} ({} books)",
                state.store.path().display(),
                state.books.len()
            ),
            Style::default().fg(state.theme.text_muted),
        ),
    ]);

    let title_widget = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(state.theme.background)),
    );

    f.render_widget(title_widget, area);
}

/// Render the active view inside a bordered pane
fn render_view(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let border_color = if state.focus == Focus::View {
        theme.active
    } else {
        theme.inactive
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", state.menu.heading()))
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    match &state.view {
        ActiveView::Books(list) => list.render(f, inner, theme, &state.books),
        ActiveView::Add(form) => form.render(f, inner, theme),
        ActiveView::Search(search) => search.render(f, inner, theme),
        ActiveView::Update(UpdateView::Picking(picker)) | ActiveView::Delete(picker) => {
            picker.render(f, inner, theme);
        }
        ActiveView::Update(UpdateView::Editing(form)) => form.render(f, inner, theme),
        ActiveView::Progress(view) => view.render(f, inner, theme, &state.progress()),
    }
}

/// Render error overlay on top of all other UI elements
fn render_error_overlay(f: &mut Frame, error: &str, theme: &Theme) {
    let area = centered_rect(70, 40, f.area());

    f.render_widget(Clear, area);
    let background = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(background, area);

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

    let help = Paragraph::new(Line::from(vec![
        Span::styled(
            "Enter/Esc",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Dismiss"),
    ]))
    .style(Style::default().fg(theme.text).bg(theme.background))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(help, chunks[2]);
}

/// Helper to create a centered rectangle
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

/// Handle one key press.
///
/// Returns `Ok(true)` when the application should exit. Failures inside a
/// handler (for example a store that cannot be written) abort the current
/// interaction and are shown in the error overlay.
pub fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    use crossterm::event::KeyCode;

    // If error overlay is shown, allow dismissing with Enter or Esc
    if state.error_message.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            state.clear_error();
        }
        // Block all other input while error is shown
        return Ok(false);
    }

    match handlers::handle_input(state, key) {
        Ok(quit) => Ok(quit),
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "interaction failed");
            state.set_error(format!("{e:#}"));
            Ok(false)
        }
    }
}
