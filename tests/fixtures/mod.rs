//! Shared test fixtures for integration and E2E CLI tests.
#![allow(dead_code)] // Each test binary uses a different subset

use lazybooks::models::Book;
use lazybooks::services::BookStore;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Three books, one of them read.
pub fn sample_books() -> Vec<Book> {
    vec![
        Book::new("Dune", "Frank Herbert", "1965", "SciFi", true),
        Book::new("Emma", "Jane Austen", "1815", "Romance", false),
        Book::new("Neuromancer", "William Gibson", "1984", "SciFi", false),
    ]
}

/// Writes `books` to a fresh store file inside a temp directory.
///
/// Keep the returned `TempDir` alive for the duration of the test.
pub fn create_temp_store(books: &[Book]) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("books_data.json");
    BookStore::new(&path)
        .save(books)
        .expect("Failed to write store");
    (path, temp_dir)
}

/// Store path inside a temp directory, without creating the file.
pub fn missing_store() -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("books_data.json");
    (path, temp_dir)
}

/// Reads the store file back.
pub fn read_store(path: &Path) -> Vec<Book> {
    BookStore::new(path).load().expect("Failed to read store")
}

/// Path to the lazybooks binary (set by cargo at compile time)
pub fn lazybooks_bin() -> &'static str {
    env!("CARGO_BIN_EXE_lazybooks")
}

/// Command with an isolated config directory.
pub fn isolated_command(config_dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new(lazybooks_bin());
    cmd.env("LAZYBOOKS_CONFIG_DIR", config_dir);
    cmd.env_remove("LAZYBOOKS_LOG");
    cmd.args(args);
    cmd
}
