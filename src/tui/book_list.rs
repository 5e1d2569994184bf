//! Scrollable book listing used by the View Books and Search views.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::models::Book;
use crate::tui::{ContextualComponent, Theme};

/// Events emitted by the book list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookListEvent {
    /// User left the list (focus returns to the sidebar)
    Back,
}

/// View Books component state
#[derive(Debug, Clone, Default)]
pub struct BookList {
    /// Highlighted row
    selected: usize,
}

impl BookList {
    /// Creates a list with the first row highlighted.
    #[must_use]
    pub const fn new() -> Self {
        Self { selected: 0 }
    }

    /// Currently highlighted row.
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// Moves the highlight, clamped to `len`.
    pub fn move_selection(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.selected = 0;
            return;
        }
        let max = len - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(max);
    }
}

impl ContextualComponent for BookList {
    type Context = Vec<Book>;
    type Event = BookListEvent;

    fn handle_input(&mut self, key: KeyEvent, books: &Self::Context) -> Option<Self::Event> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1, books.len()),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1, books.len()),
            KeyCode::PageUp => self.move_selection(-10, books.len()),
            KeyCode::PageDown => self.move_selection(10, books.len()),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = books.len().saturating_sub(1),
            KeyCode::Esc | KeyCode::Left | KeyCode::BackTab => return Some(BookListEvent::Back),
            _ => {}
        }
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, books: &Self::Context) {
        render_books(
            f,
            area,
            theme,
            books,
            Some(self.selected),
            " Books ",
            "No books in your collection.",
        );
    }
}

/// Styled summary line for one book.
pub fn book_line(book: &Book, theme: &Theme) -> Line<'static> {
    let status_color = if book.read { theme.success } else { theme.warning };
    Line::from(vec![
        Span::styled(
            book.title.clone(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" by {} ({}) - {} | ", book.author, book.year, book.genre),
            Style::default().fg(theme.text_secondary),
        ),
        Span::styled(book.status_label(), Style::default().fg(status_color)),
    ])
}

/// Renders `books` as a bordered list, or `empty_message` as a warning.
pub fn render_books(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    books: &[Book],
    selected: Option<usize>,
    title: &str,
    empty_message: &str,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("{title}({}) ", books.len()))
        .style(Style::default().bg(theme.background));

    if books.is_empty() {
        let warning = Paragraph::new(empty_message.to_string())
            .style(Style::default().fg(theme.warning))
            .block(block);
        f.render_widget(warning, area);
        return;
    }

    let items: Vec<ListItem> = books
        .iter()
        .map(|book| ListItem::new(book_line(book, theme)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(theme.highlight_bg))
        .highlight_symbol("› ");

    let mut list_state = ListState::default().with_selected(selected);
    f.render_stateful_widget(list, area, &mut list_state);
}
