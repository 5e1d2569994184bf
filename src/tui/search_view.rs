//! Search Book view: query input plus a result list.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Book;
use crate::tui::book_list::render_books;
use crate::tui::{Component, Theme};

/// Events emitted by the search view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// User pressed the Search button with this query
    Search(String),
    /// User left the view
    Back,
}

/// Search view state
#[derive(Debug, Clone, Default)]
pub struct SearchView {
    query: String,
    /// None until the first search has run
    results: Option<Vec<Book>>,
    selected: usize,
}

impl SearchView {
    /// Creates an empty search view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Results of the last search, if one has run.
    #[must_use]
    pub fn results(&self) -> Option<&[Book]> {
        self.results.as_deref()
    }

    /// Stores the results of a search.
    pub fn set_results(&mut self, results: Vec<Book>) {
        self.results = Some(results);
        self.selected = 0;
    }
}

impl Component for SearchView {
    type Event = SearchEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return None;
        }

        let result_count = self.results.as_ref().map_or(0, Vec::len);
        match key.code {
            KeyCode::Enter => return Some(SearchEvent::Search(self.query.clone())),
            KeyCode::Esc => return Some(SearchEvent::Back),
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => {
                if self.selected + 1 < result_count {
                    self.selected += 1;
                }
            }
            KeyCode::Backspace => {
                self.query.pop();
            }
            KeyCode::Char(c) => self.query.push(c),
            _ => {}
        }
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3)])
            .split(area);

        let input = Paragraph::new(format!("{}█", self.query))
            .style(Style::default().fg(theme.accent))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Enter title or author to search: ")
                    .style(Style::default().bg(theme.background)),
            );
        f.render_widget(input, chunks[0]);

        match &self.results {
            Some(results) => render_books(
                f,
                chunks[1],
                theme,
                results,
                Some(self.selected),
                " Results ",
                "No matching books found.",
            ),
            None => {
                let hint = Paragraph::new("Press Enter to search.")
                    .style(Style::default().fg(theme.text_muted))
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title(" Results ")
                            .style(Style::default().bg(theme.background)),
                    );
                f.render_widget(hint, chunks[1]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_enter_emits_query() {
        let mut view = SearchView::new();
        for c in "dune".chars() {
            assert_eq!(view.handle_input(key(KeyCode::Char(c))), None);
        }
        assert_eq!(
            view.handle_input(key(KeyCode::Enter)),
            Some(SearchEvent::Search("dune".to_string()))
        );
    }

    #[test]
    fn test_results_navigation() {
        let mut view = SearchView::new();
        assert!(view.results().is_none());

        view.set_results(vec![
            Book::new("A", "X", "1", "G", false),
            Book::new("B", "Y", "2", "G", true),
        ]);
        view.handle_input(key(KeyCode::Down));
        view.handle_input(key(KeyCode::Down));
        assert_eq!(view.selected, 1);
        view.handle_input(key(KeyCode::Up));
        assert_eq!(view.selected, 0);
    }

    #[test]
    fn test_backspace_and_escape() {
        let mut view = SearchView::new();
        view.handle_input(key(KeyCode::Char('a')));
        view.handle_input(key(KeyCode::Backspace));
        assert_eq!(view.query(), "");
        assert_eq!(view.handle_input(key(KeyCode::Esc)), Some(SearchEvent::Back));
    }
}
