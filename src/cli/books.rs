//! Book collection commands: list, add, search, update, delete, progress.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{print_json, CliError, CliResult};
use crate::models::{Book, ReadingProgress};
use crate::services::{books, BookStore};

/// JSON shape for `list` and `search`
#[derive(Serialize, Debug)]
struct BooksOutput<'a> {
    books: &'a [Book],
    count: usize,
}

fn load(store: &BookStore) -> CliResult<Vec<Book>> {
    store
        .load()
        .map_err(|e| CliError::io(format!("Failed to load books: {e:#}")))
}

fn save(store: &BookStore, collection: &[Book]) -> CliResult<()> {
    store
        .save(collection)
        .map_err(|e| CliError::io(format!("Failed to save books: {e:#}")))
}

fn print_books(collection: &[Book], json: bool, empty_message: &str) -> CliResult<()> {
    if json {
        return print_json(&BooksOutput {
            books: collection,
            count: collection.len(),
        });
    }

    if collection.is_empty() {
        println!("{empty_message}");
    }
    for book in collection {
        println!("{}", book.summary());
    }
    Ok(())
}

/// List every book
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl ListArgs {
    /// Execute list command
    pub fn execute(&self, store: &BookStore) -> CliResult<()> {
        let collection = load(store)?;
        print_books(&collection, self.json, "No books in your collection.")
    }
}

/// Add a new book
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Book title
    #[arg(long)]
    title: String,

    /// Author name
    #[arg(long)]
    author: String,

    /// Publication year
    #[arg(long)]
    year: String,

    /// Genre
    #[arg(long)]
    genre: String,

    /// Mark the book as read
    #[arg(long)]
    read: bool,
}

impl AddArgs {
    /// Execute add command
    pub fn execute(&self, store: &BookStore) -> CliResult<()> {
        let book = Book::new(
            self.title.as_str(),
            self.author.as_str(),
            self.year.as_str(),
            self.genre.as_str(),
            self.read,
        );

        let mut collection = load(store)?;
        books::add(&mut collection, book)
            .map_err(|e| CliError::validation(format!("Please fill in all fields: {e}")))?;
        save(store, &collection)?;

        println!("Book added successfully!");
        Ok(())
    }
}

/// Search by title or author
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Case-insensitive text matched against title and author
    #[arg(value_name = "QUERY", default_value = "")]
    query: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl SearchArgs {
    /// Execute search command
    pub fn execute(&self, store: &BookStore) -> CliResult<()> {
        let collection = load(store)?;
        let results = books::search(&collection, &self.query);
        print_books(&results, self.json, "No matching books found.")
    }
}

/// Update the first book with a given title
///
/// Fields that are not given keep their current value.
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Title of the book to update
    #[arg(long)]
    title: String,

    /// Replacement title
    #[arg(long, value_name = "TITLE")]
    new_title: Option<String>,

    /// Replacement author
    #[arg(long)]
    author: Option<String>,

    /// Replacement year
    #[arg(long)]
    year: Option<String>,

    /// Replacement genre
    #[arg(long)]
    genre: Option<String>,

    /// Read status (true or false)
    #[arg(long, value_name = "BOOL")]
    read: Option<bool>,
}

impl UpdateArgs {
    /// Execute update command
    pub fn execute(&self, store: &BookStore) -> CliResult<()> {
        let mut collection = load(store)?;
        let current = books::find_by_title(&collection, &self.title)
            .cloned()
            .ok_or_else(|| CliError::not_found(&self.title))?;

        let updated = self.apply(current);
        if !books::update(&mut collection, &self.title, updated) {
            return Err(CliError::not_found(&self.title));
        }
        save(store, &collection)?;

        println!("Book updated successfully!");
        Ok(())
    }

    fn apply(&self, mut book: Book) -> Book {
        if let Some(title) = &self.new_title {
            book.title.clone_from(title);
        }
        if let Some(author) = &self.author {
            book.author.clone_from(author);
        }
        if let Some(year) = &self.year {
            book.year.clone_from(year);
        }
        if let Some(genre) = &self.genre {
            book.genre.clone_from(genre);
        }
        if let Some(read) = self.read {
            book.read = read;
        }
        book
    }
}

/// Delete every book with a given title
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Title of the book to delete
    #[arg(long)]
    title: String,
}

impl DeleteArgs {
    /// Execute delete command
    pub fn execute(&self, store: &BookStore) -> CliResult<()> {
        let collection = load(store)?;
        let remaining = books::delete(&collection, &self.title);
        if remaining.len() == collection.len() {
            return Err(CliError::not_found(&self.title));
        }
        save(store, &remaining)?;

        println!("Book deleted successfully!");
        Ok(())
    }
}

/// Show reading statistics
#[derive(Args, Debug)]
pub struct ProgressArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl ProgressArgs {
    /// Execute progress command
    pub fn execute(&self, store: &BookStore) -> CliResult<()> {
        let collection = load(store)?;
        let progress = books::progress(&collection);

        if self.json {
            return print_json(&progress);
        }
        print_progress(&progress);
        Ok(())
    }
}

fn print_progress(progress: &ReadingProgress) {
    println!("Total Books: {}", progress.total);
    println!("Books Read: {}", progress.read_count);
    println!("Reading Completion: {}", progress.percent_label());
}
