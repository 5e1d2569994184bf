//! Collection operations over an in-memory book sequence.
//!
//! These functions never touch the disk. Handlers load through
//! [`crate::services::BookStore`], call one operation, then save.
//!
//! Titles act as the selection key. Uniqueness is not enforced: lookups and
//! updates use the first exact match, deletion removes every exact match.

use crate::models::{Book, ReadingProgress, ValidationError};

/// Appends a book after validating its required fields.
///
/// On error the collection is left unchanged.
pub fn add(books: &mut Vec<Book>, book: Book) -> Result<(), ValidationError> {
    book.validate()?;
    tracing::debug!(title = %book.title, "adding book");
    books.push(book);
    Ok(())
}

/// Returns the first book whose title matches exactly.
#[must_use]
pub fn find_by_title<'a>(books: &'a [Book], title: &str) -> Option<&'a Book> {
    books.iter().find(|book| book.title == title)
}

/// Replaces the fields of the first book titled `title`.
///
/// Returns `false` when nothing matched; the collection is then untouched.
pub fn update(books: &mut [Book], title: &str, fields: Book) -> bool {
    match books.iter_mut().find(|book| book.title == title) {
        Some(book) => {
            tracing::debug!(title, new_title = %fields.title, "updating book");
            *book = fields;
            true
        }
        None => {
            tracing::debug!(title, "update target not found");
            false
        }
    }
}

/// Returns a new collection without any book titled `title`.
#[must_use]
pub fn delete(books: &[Book], title: &str) -> Vec<Book> {
    books
        .iter()
        .filter(|book| book.title != title)
        .cloned()
        .collect()
}

/// Books whose title or author contains `query`, ignoring case.
#[must_use]
pub fn search(books: &[Book], query: &str) -> Vec<Book> {
    books
        .iter()
        .filter(|book| book.matches_query(query))
        .cloned()
        .collect()
}

/// Total, read count and completion percent.
#[must_use]
pub fn progress(books: &[Book]) -> ReadingProgress {
    ReadingProgress::from_books(books)
}

/// Titles in collection order, as offered by the update/delete selectors.
#[must_use]
pub fn titles(books: &[Book]) -> Vec<String> {
    books.iter().map(|book| book.title.clone()).collect()
}
