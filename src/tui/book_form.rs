//! Book form used by the Add Book and Update Book views.
//!
//! Shows the four text fields, the read checkbox and a submit button in one
//! form. Typing edits the focused text field directly.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::Book;
use crate::tui::theme::Theme;
use crate::tui::Component;

/// Events emitted by the book form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookFormEvent {
    /// User submitted the draft (with the title being edited, if any)
    Save(Book, Option<String>),
    /// User cancelled the form
    Cancel,
}

/// Form row selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRow {
    /// Title text field
    Title,
    /// Author text field
    Author,
    /// Year text field
    Year,
    /// Genre text field
    Genre,
    /// Read checkbox
    Read,
    /// Submit button
    Submit,
}

impl FormRow {
    /// Get next row (wraps around)
    const fn next(&self) -> Self {
        match self {
            Self::Title => Self::Author,
            Self::Author => Self::Year,
            Self::Year => Self::Genre,
            Self::Genre => Self::Read,
            Self::Read => Self::Submit,
            Self::Submit => Self::Title,
        }
    }

    /// Get previous row (wraps around)
    const fn previous(&self) -> Self {
        match self {
            Self::Title => Self::Submit,
            Self::Author => Self::Title,
            Self::Year => Self::Author,
            Self::Genre => Self::Year,
            Self::Read => Self::Genre,
            Self::Submit => Self::Read,
        }
    }

    const fn is_text(&self) -> bool {
        matches!(self, Self::Title | Self::Author | Self::Year | Self::Genre)
    }
}

/// Book form component state
#[derive(Debug, Clone)]
pub struct BookForm {
    /// Draft book being created/edited
    draft: Book,
    /// Title of the book being edited (None = creating new)
    editing_title: Option<String>,
    /// Currently selected row
    selected_row: FormRow,
    /// Error message (if the last submit was rejected)
    error: Option<String>,
}

impl BookForm {
    /// Creates an empty form for adding a book
    #[must_use]
    pub fn new_add() -> Self {
        Self {
            draft: Book::default(),
            editing_title: None,
            selected_row: FormRow::Title,
            error: None,
        }
    }

    /// Creates a form prefilled with an existing book
    #[must_use]
    pub fn new_edit(book: Book) -> Self {
        Self {
            editing_title: Some(book.title.clone()),
            draft: book,
            selected_row: FormRow::Title,
            error: None,
        }
    }

    /// Current draft values.
    #[must_use]
    pub const fn draft(&self) -> &Book {
        &self.draft
    }

    /// Title of the book being edited, if this is an update form.
    #[must_use]
    pub fn editing_title(&self) -> Option<&str> {
        self.editing_title.as_deref()
    }

    /// Currently focused row.
    #[must_use]
    pub const fn selected_row(&self) -> FormRow {
        self.selected_row
    }

    /// Validation or submit error being displayed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Shows an error under the fields.
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
    }

    /// Empties every field and returns focus to the title.
    pub fn clear(&mut self) {
        self.draft = Book::default();
        self.selected_row = FormRow::Title;
        self.error = None;
    }

    fn field_mut(&mut self, row: FormRow) -> Option<&mut String> {
        match row {
            FormRow::Title => Some(&mut self.draft.title),
            FormRow::Author => Some(&mut self.draft.author),
            FormRow::Year => Some(&mut self.draft.year),
            FormRow::Genre => Some(&mut self.draft.genre),
            FormRow::Read | FormRow::Submit => None,
        }
    }

    fn submit(&self) -> BookFormEvent {
        BookFormEvent::Save(self.draft.clone(), self.editing_title.clone())
    }

    fn labels(&self) -> [&'static str; 5] {
        if self.editing_title.is_some() {
            ["New Title", "New Author", "New Year", "New Genre", "Have you read this book?"]
        } else {
            [
                "Book Title",
                "Author",
                "Publication Year",
                "Genre",
                "Have you read this book?",
            ]
        }
    }

    /// Label of the submit button.
    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.editing_title.is_some() {
            "Update Book"
        } else {
            "Add Book"
        }
    }

    fn row_style(&self, row: FormRow, theme: &Theme) -> Style {
        if self.selected_row == row {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.text)
        }
    }
}

impl Component for BookForm {
    type Event = BookFormEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('s') {
                return Some(self.submit());
            }
            return None;
        }

        match key.code {
            KeyCode::Esc => return Some(BookFormEvent::Cancel),
            KeyCode::Up | KeyCode::BackTab => {
                self.selected_row = self.selected_row.previous();
            }
            KeyCode::Down | KeyCode::Tab => {
                self.selected_row = self.selected_row.next();
            }
            KeyCode::Enter => match self.selected_row {
                FormRow::Submit => return Some(self.submit()),
                FormRow::Read => self.draft.read = !self.draft.read,
                _ => self.selected_row = self.selected_row.next(),
            },
            KeyCode::Char(' ') if self.selected_row == FormRow::Read => {
                self.draft.read = !self.draft.read;
            }
            KeyCode::Char(c) if self.selected_row.is_text() => {
                if let Some(field) = self.field_mut(self.selected_row) {
                    field.push(c);
                    self.error = None;
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.field_mut(self.selected_row) {
                    field.pop();
                    self.error = None;
                }
            }
            _ => {}
        }
        None
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Author
                Constraint::Length(3), // Year
                Constraint::Length(3), // Genre
                Constraint::Length(3), // Read checkbox
                Constraint::Length(3), // Submit button
                Constraint::Min(0),    // Error message (if any)
                Constraint::Length(1), // Help
            ])
            .split(area);

        let labels = self.labels();
        let text_rows = [
            (FormRow::Title, &self.draft.title),
            (FormRow::Author, &self.draft.author),
            (FormRow::Year, &self.draft.year),
            (FormRow::Genre, &self.draft.genre),
        ];

        for (i, (row, value)) in text_rows.into_iter().enumerate() {
            let focused = self.selected_row == row;
            let text = if focused {
                format!("{value}█")
            } else {
                value.clone()
            };
            let label = if focused {
                format!(" {} ▶ ", labels[i])
            } else {
                format!(" {} ", labels[i])
            };
            let field = Paragraph::new(text).style(self.row_style(row, theme)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(label)
                    .style(Style::default().bg(theme.background)),
            );
            frame.render_widget(field, chunks[i]);
        }

        // Read checkbox
        let checkbox = if self.draft.read { "[x]" } else { "[ ]" };
        let read = Paragraph::new(format!("{checkbox} {}", labels[4]))
            .style(self.row_style(FormRow::Read, theme))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .style(Style::default().bg(theme.background)),
            );
        frame.render_widget(read, chunks[4]);

        // Submit button
        let button_style = if self.selected_row == FormRow::Submit {
            Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(theme.success)
        };
        let button = Paragraph::new(format!("[ {} ]", self.submit_label()))
            .style(button_style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .style(Style::default().bg(theme.background)),
            );
        frame.render_widget(button, chunks[5]);

        if let Some(ref error) = self.error {
            let error_widget = Paragraph::new(error.as_str())
                .style(Style::default().fg(theme.error))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Error ")
                        .style(Style::default().bg(theme.background)),
                )
                .wrap(Wrap { trim: true });
            frame.render_widget(error_widget, chunks[6]);
        }

        let key_style = Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD);
        let help = Paragraph::new(Line::from(vec![
            Span::styled("↑/↓/Tab", key_style),
            Span::raw(" Field  "),
            Span::styled("Space", key_style),
            Span::raw(" Toggle read  "),
            Span::styled("Ctrl+S", key_style),
            Span::raw(" Submit  "),
            Span::styled("Esc", key_style),
            Span::raw(" Back"),
        ]))
        .style(Style::default().fg(theme.text_muted).bg(theme.background));
        frame.render_widget(help, chunks[7]);
    }
}
