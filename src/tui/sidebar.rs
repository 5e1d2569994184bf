//! Sidebar menu selecting the active view.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use super::Theme;

/// The six views reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MenuItem {
    /// List every book
    #[default]
    ViewBooks,
    /// Add a new book
    AddBook,
    /// Search by title or author
    SearchBook,
    /// Edit an existing book
    UpdateBook,
    /// Remove a book
    DeleteBook,
    /// Read/unread statistics
    ReadingProgress,
}

impl MenuItem {
    /// All items in display order.
    pub const ALL: [Self; 6] = [
        Self::ViewBooks,
        Self::AddBook,
        Self::SearchBook,
        Self::UpdateBook,
        Self::DeleteBook,
        Self::ReadingProgress,
    ];

    /// Menu label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ViewBooks => "View Books",
            Self::AddBook => "Add Book",
            Self::SearchBook => "Search Book",
            Self::UpdateBook => "Update Book",
            Self::DeleteBook => "Delete Book",
            Self::ReadingProgress => "Reading Progress",
        }
    }

    /// Heading shown above the view content.
    #[must_use]
    pub const fn heading(&self) -> &'static str {
        match self {
            Self::ViewBooks => "📖 Your Book Collection",
            Self::AddBook => "➕ Add a New Book",
            Self::SearchBook => "🔍 Search for a Book",
            Self::UpdateBook => "✏️ Update a Book",
            Self::DeleteBook => "🗑️ Delete a Book",
            Self::ReadingProgress => "📊 Your Reading Progress",
        }
    }

    /// Position in [`MenuItem::ALL`].
    #[must_use]
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|item| item == self).unwrap_or(0)
    }

    /// Next item (wraps around)
    #[must_use]
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous item (wraps around)
    #[must_use]
    pub fn previous(&self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }

    /// Looks up an item by its menu label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|item| item.label() == label)
    }
}

/// Sidebar widget
pub struct Sidebar;

impl Sidebar {
    /// Render the menu, highlighting `selected`.
    pub fn render(f: &mut Frame, area: Rect, selected: MenuItem, focused: bool, theme: &Theme) {
        let items: Vec<ListItem> = MenuItem::ALL
            .iter()
            .map(|item| ListItem::new(Line::from(Span::raw(item.label()))))
            .collect();

        let border_color = if focused { theme.active } else { theme.inactive };

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Select an option ")
                    .border_style(Style::default().fg(border_color))
                    .style(Style::default().bg(theme.background)),
            )
            .style(Style::default().fg(theme.text))
            .highlight_style(
                Style::default()
                    .fg(theme.accent)
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let mut list_state = ListState::default().with_selected(Some(selected.index()));
        f.render_stateful_widget(list, area, &mut list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_wraps() {
        assert_eq!(MenuItem::ViewBooks.previous(), MenuItem::ReadingProgress);
        assert_eq!(MenuItem::ReadingProgress.next(), MenuItem::ViewBooks);
        assert_eq!(MenuItem::AddBook.next(), MenuItem::SearchBook);
    }

    #[test]
    fn test_labels_match_menu() {
        let labels: Vec<&str> = MenuItem::ALL.iter().map(MenuItem::label).collect();
        assert_eq!(
            labels,
            [
                "View Books",
                "Add Book",
                "Search Book",
                "Update Book",
                "Delete Book",
                "Reading Progress"
            ]
        );
    }

    #[test]
    fn test_from_label() {
        assert_eq!(
            MenuItem::from_label("Delete Book"),
            Some(MenuItem::DeleteBook)
        );
        assert_eq!(MenuItem::from_label("Export"), None);
    }
}
