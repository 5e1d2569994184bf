//! Book record and its validation rules.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// A single entry in the collection.
///
/// Serialized exactly as the persisted JSON object:
/// `{"title", "author", "year", "genre", "read"}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Book {
    /// Book title, also used as the selection key in update/delete flows
    pub title: String,
    /// Author name
    pub author: String,
    /// Publication year (freeform text)
    pub year: String,
    /// Genre
    pub genre: String,
    /// Whether the book has been read
    pub read: bool,
}

/// Required text fields of a [`Book`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookField {
    /// Title field
    Title,
    /// Author field
    Author,
    /// Year field
    Year,
    /// Genre field
    Genre,
}

impl BookField {
    /// Lowercase field name as it appears in the persisted file.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Year => "year",
            Self::Genre => "genre",
        }
    }
}

impl Display for BookField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rejection of a book that is missing required data.
///
/// This is signalled to the caller and shown to the user; it never aborts
/// an interaction cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field is empty
    EmptyField(BookField),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "{field} must not be empty"),
        }
    }
}

impl Error for ValidationError {}

impl Book {
    /// Creates a book from its five fields.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
        genre: impl Into<String>,
        read: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year: year.into(),
            genre: genre.into(),
            read,
        }
    }

    /// Checks that every required text field is filled in.
    ///
    /// Fields are checked in display order, so the error names the first
    /// empty one.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            (BookField::Title, &self.title),
            (BookField::Author, &self.author),
            (BookField::Year, &self.year),
            (BookField::Genre, &self.genre),
        ];

        for (field, value) in fields {
            if value.is_empty() {
                return Err(ValidationError::EmptyField(field));
            }
        }

        Ok(())
    }

    /// Read status label used in listings.
    #[must_use]
    pub const fn status_label(&self) -> &'static str {
        if self.read {
            "✅ Read"
        } else {
            "❌ Unread"
        }
    }

    /// One-line summary: `Title by Author (Year) - Genre | ✅ Read`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} by {} ({}) - {} | {}",
            self.title,
            self.author,
            self.year,
            self.genre,
            self.status_label()
        )
    }

    /// Case-insensitive substring match against title or author.
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle) || self.author.to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> Book {
        Book::new("Dune", "Frank Herbert", "1965", "SciFi", false)
    }

    #[test]
    fn test_validate_complete_book() {
        assert!(dune().validate().is_ok());
    }

    #[test]
    fn test_validate_reports_first_empty_field() {
        let mut book = dune();
        book.author.clear();
        book.genre.clear();
        assert_eq!(
            book.validate(),
            Err(ValidationError::EmptyField(BookField::Author))
        );
    }

    #[test]
    fn test_validate_accepts_whitespace() {
        let mut book = dune();
        book.year = "   ".to_string();
        assert_eq!(book.validate(), Ok(()));

        book.year = String::new();
        assert_eq!(
            book.validate(),
            Err(ValidationError::EmptyField(BookField::Year))
        );
    }

    #[test]
    fn test_validation_error_message() {
        let err = ValidationError::EmptyField(BookField::Genre);
        assert_eq!(err.to_string(), "genre must not be empty");
    }

    #[test]
    fn test_summary_format() {
        assert_eq!(
            dune().summary(),
            "Dune by Frank Herbert (1965) - SciFi | ❌ Unread"
        );

        let mut read = dune();
        read.read = true;
        assert!(read.summary().ends_with("| ✅ Read"));
    }

    #[test]
    fn test_matches_query_case_insensitive() {
        let book = dune();
        assert!(book.matches_query("dune"));
        assert!(book.matches_query("HERB"));
        assert!(book.matches_query(""));
        assert!(!book.matches_query("asimov"));
    }

    #[test]
    fn test_serialized_keys() {
        let json = serde_json::to_value(dune()).unwrap();
        let object = json.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["author", "genre", "read", "title", "year"]);
        assert_eq!(json["read"], serde_json::Value::Bool(false));
    }
}
