//! Book file I/O service.
//!
//! The whole collection lives in one JSON file. Every interaction loads the
//! full sequence, mutates it in memory and writes it back.

use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::models::Book;

/// Handle to the persisted book file.
///
/// The store holds no records itself; callers compose `load`, an operation
/// from [`crate::services::books`], and `save`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookStore {
    path: PathBuf,
}

impl BookStore {
    /// Creates a store backed by the file at `path`.
    ///
    /// The file does not need to exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the persisted file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the collection.
    ///
    /// A missing file or malformed content yields an empty collection.
    /// Any other I/O failure is returned as an error.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use lazybooks::services::BookStore;
    ///
    /// let store = BookStore::new("books_data.json");
    /// let books = store.load()?;
    /// println!("{} books", books.len());
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(&self) -> Result<Vec<Book>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "book file not found, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read book file: {}", self.path.display())
                });
            }
        };

        match serde_json::from_str::<Vec<Book>>(&content) {
            Ok(books) => {
                tracing::debug!(path = %self.path.display(), count = books.len(), "loaded books");
                Ok(books)
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "book file is malformed, treating as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    /// Overwrites the file with the full collection.
    ///
    /// Writes to a sibling temp file first and renames it into place, so a
    /// crash mid-write leaves the previous file intact.
    pub fn save(&self, books: &[Book]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory: {}", parent.display())
                })?;
            }
        }

        let content = to_json_pretty(books)?;
        let temp_path = self.temp_path();

        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp book file: {}", temp_path.display())
        })?;

        fs::rename(&temp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename temp book file to: {}",
                self.path.display()
            )
        })?;

        tracing::info!(path = %self.path.display(), count = books.len(), "saved books");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "books_data.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Serializes with 4-space indentation, the established `books_data.json`
/// layout.
fn to_json_pretty(books: &[Book]) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    serde::Serialize::serialize(books, &mut serializer).context("Failed to serialize books")?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Vec<Book> {
        vec![
            Book::new("Dune", "Frank Herbert", "1965", "SciFi", false),
            Book::new("Emma", "Jane Austen", "1815", "Classic", true),
        ]
    }

    #[test]
    fn test_load_missing_file_is_empty() -> Result<()> {
        let dir = TempDir::new()?;
        let store = BookStore::new(dir.path().join("books.json"));
        assert!(store.load()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_round_trip() -> Result<()> {
        let dir = TempDir::new()?;
        let store = BookStore::new(dir.path().join("books.json"));
        let books = sample();

        store.save(&books)?;
        assert_eq!(store.load()?, books);
        Ok(())
    }

    #[test]
    fn test_load_invalid_json_is_empty() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("books.json");
        fs::write(&path, "{ not json ]")?;

        let store = BookStore::new(&path);
        assert!(store.load()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_load_wrong_shape_is_empty() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("books.json");
        fs::write(&path, r#"[{"title": "Dune", "read": "yes"}]"#)?;

        assert!(BookStore::new(&path).load()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_load_directory_is_error() -> Result<()> {
        let dir = TempDir::new()?;
        let store = BookStore::new(dir.path());
        assert!(store.load().is_err());
        Ok(())
    }

    #[test]
    fn test_save_uses_four_space_indent() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("books.json");
        BookStore::new(&path).save(&sample())?;

        let content = fs::read_to_string(&path)?;
        assert!(content.starts_with("[\n    {\n        \"title\": \"Dune\""));
        Ok(())
    }

    #[test]
    fn test_save_creates_parent_and_leaves_no_temp() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("nested").join("books.json");
        let store = BookStore::new(&path);

        store.save(&sample())?;

        assert!(path.exists());
        assert!(!dir.path().join("nested").join("books.json.tmp").exists());
        Ok(())
    }

    #[test]
    fn test_loads_hand_indented_file() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("books_data.json");
        fs::write(
            &path,
            r#"[
    {
        "title": "Dune",
        "author": "Frank Herbert",
        "year": "1965",
        "genre": "SciFi",
        "read": true
    }
]"#,
        )?;

        let books = BookStore::new(&path).load()?;
        assert_eq!(books.len(), 1);
        assert!(books[0].read);
        assert_eq!(books[0].year, "1965");
        Ok(())
    }
}
