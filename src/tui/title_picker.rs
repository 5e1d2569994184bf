//! Title selector for the Update Book and Delete Book views.
//!
//! Lists the titles of the collection in order. Duplicate titles appear once
//! per record but always resolve to the first match.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::tui::{Component, Theme};

/// Events emitted by the title picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitlePickerEvent {
    /// A title was chosen
    Selected(String),
    /// A title was chosen and the action confirmed (confirming pickers only)
    Confirmed(String),
    /// User left the view
    Back,
}

/// Title picker component state
#[derive(Debug, Clone)]
pub struct TitlePicker {
    titles: Vec<String>,
    selected: usize,
    /// Label of the action, e.g. "update" or "delete"
    action: &'static str,
    /// Whether a choice needs a second confirmation step
    requires_confirmation: bool,
    /// Title awaiting confirmation
    confirming: Option<String>,
}

impl TitlePicker {
    /// Picker that emits `Selected` as soon as a title is chosen.
    #[must_use]
    pub fn new(titles: Vec<String>, action: &'static str) -> Self {
        Self {
            titles,
            selected: 0,
            action,
            requires_confirmation: false,
            confirming: None,
        }
    }

    /// Picker that asks for confirmation and then emits `Confirmed`.
    #[must_use]
    pub fn confirming(titles: Vec<String>, action: &'static str) -> Self {
        Self {
            requires_confirmation: true,
            ..Self::new(titles, action)
        }
    }

    /// Replaces the offered titles, keeping the highlight in range.
    pub fn set_titles(&mut self, titles: Vec<String>) {
        self.titles = titles;
        self.selected = self.selected.min(self.titles.len().saturating_sub(1));
        self.confirming = None;
    }

    /// Offered titles.
    #[must_use]
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Highlighted title.
    #[must_use]
    pub fn selected_title(&self) -> Option<&str> {
        self.titles.get(self.selected).map(String::as_str)
    }

    /// Title waiting for confirmation.
    #[must_use]
    pub fn pending_confirmation(&self) -> Option<&str> {
        self.confirming.as_deref()
    }

    fn choose(&mut self) -> Option<TitlePickerEvent> {
        let title = self.selected_title()?.to_string();
        if self.requires_confirmation {
            self.confirming = Some(title);
            None
        } else {
            Some(TitlePickerEvent::Selected(title))
        }
    }

    fn handle_confirmation(&mut self, key: KeyEvent) -> Option<TitlePickerEvent> {
        match key.code {
            KeyCode::Enter | KeyCode::Char('y' | 'Y') => {
                self.confirming.take().map(TitlePickerEvent::Confirmed)
            }
            KeyCode::Esc | KeyCode::Char('n' | 'N') => {
                self.confirming = None;
                None
            }
            _ => None,
        }
    }
}

impl Component for TitlePicker {
    type Event = TitlePickerEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        if self.confirming.is_some() {
            return self.handle_confirmation(key);
        }

        let count = self.titles.len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < count {
                    self.selected += 1;
                }
            }
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = count.saturating_sub(1),
            KeyCode::Enter => return self.choose(),
            KeyCode::Esc | KeyCode::Left | KeyCode::BackTab => {
                return Some(TitlePickerEvent::Back);
            }
            _ => {}
        }
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Select a book to {} ", self.action))
            .style(Style::default().bg(theme.background));

        if self.titles.is_empty() {
            let empty = Paragraph::new("No books in your collection.")
                .style(Style::default().fg(theme.warning))
                .block(block);
            f.render_widget(empty, area);
            return;
        }

        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(3)])
            .split(area);

        let items: Vec<ListItem> = self
            .titles
            .iter()
            .map(|title| ListItem::new(title.as_str()))
            .collect();
        let list = List::new(items)
            .block(block)
            .style(Style::default().fg(theme.text))
            .highlight_style(
                Style::default()
                    .fg(theme.accent)
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        let mut list_state = ListState::default().with_selected(Some(self.selected));
        f.render_stateful_widget(list, chunks[0], &mut list_state);

        let key_style = Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD);
        let footer = if let Some(title) = &self.confirming {
            Paragraph::new(Line::from(vec![
                Span::styled(
                    format!("{} '{title}'? ", capitalize(self.action)),
                    Style::default().fg(theme.error),
                ),
                Span::styled("Enter/y", key_style),
                Span::raw(" Confirm  "),
                Span::styled("Esc/n", key_style),
                Span::raw(" Cancel"),
            ]))
        } else {
            Paragraph::new(Line::from(vec![
                Span::styled("↑/↓", key_style),
                Span::raw(" Select  "),
                Span::styled("Enter", key_style),
                Span::raw(format!(" {}  ", capitalize(self.action))),
                Span::styled("Esc", key_style),
                Span::raw(" Back"),
            ]))
        };
        f.render_widget(
            footer.style(Style::default().fg(theme.text).bg(theme.background)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .style(Style::default().bg(theme.background)),
            ),
            chunks[1],
        );
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn titles() -> Vec<String> {
        vec!["Dune".to_string(), "Emma".to_string()]
    }

    #[test]
    fn test_select_emits_immediately() {
        let mut picker = TitlePicker::new(titles(), "update");
        picker.handle_input(key(KeyCode::Down));
        assert_eq!(
            picker.handle_input(key(KeyCode::Enter)),
            Some(TitlePickerEvent::Selected("Emma".to_string()))
        );
    }

    #[test]
    fn test_confirmation_flow() {
        let mut picker = TitlePicker::confirming(titles(), "delete");
        assert_eq!(picker.handle_input(key(KeyCode::Enter)), None);
        assert_eq!(picker.pending_confirmation(), Some("Dune"));

        assert_eq!(
            picker.handle_input(key(KeyCode::Char('y'))),
            Some(TitlePickerEvent::Confirmed("Dune".to_string()))
        );
        assert_eq!(picker.pending_confirmation(), None);
    }

    #[test]
    fn test_confirmation_can_be_cancelled() {
        let mut picker = TitlePicker::confirming(titles(), "delete");
        picker.handle_input(key(KeyCode::Enter));
        assert_eq!(picker.handle_input(key(KeyCode::Esc)), None);
        assert_eq!(picker.pending_confirmation(), None);
        // Esc outside confirmation leaves the view
        assert_eq!(
            picker.handle_input(key(KeyCode::Esc)),
            Some(TitlePickerEvent::Back)
        );
    }

    #[test]
    fn test_empty_picker_never_selects() {
        let mut picker = TitlePicker::new(Vec::new(), "update");
        assert_eq!(picker.handle_input(key(KeyCode::Enter)), None);
        assert_eq!(picker.selected_title(), None);
    }

    #[test]
    fn test_set_titles_clamps_selection() {
        let mut picker = TitlePicker::new(titles(), "delete");
        picker.handle_input(key(KeyCode::End));
        assert_eq!(picker.selected_title(), Some("Emma"));

        picker.set_titles(vec!["Dune".to_string()]);
        assert_eq!(picker.selected_title(), Some("Dune"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("delete"), "Delete");
        assert_eq!(capitalize(""), "");
    }
}
