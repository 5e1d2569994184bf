#![allow(missing_docs)]
//! Record store behavior through the public library API.

mod fixtures;
use fixtures::*;

use lazybooks::models::{Book, BookField, ValidationError};
use lazybooks::services::{books, BookStore};
use std::fs;

#[test]
fn test_round_trip_preserves_order_and_fields() {
    let (path, _temp_dir) = create_temp_store(&sample_books());
    assert_eq!(read_store(&path), sample_books());
}

#[test]
fn test_invalid_json_loads_as_empty() {
    let (path, _temp_dir) = missing_store();
    fs::write(&path, "{ this is not json").unwrap();

    let loaded = BookStore::new(&path).load().unwrap();
    assert!(loaded.is_empty());
}

#[test]
fn test_missing_file_loads_as_empty() {
    let (path, _temp_dir) = missing_store();
    assert!(BookStore::new(&path).load().unwrap().is_empty());
    assert!(!path.exists(), "load must not create the file");
}

#[test]
fn test_reads_file_written_by_other_tools() {
    let (path, _temp_dir) = missing_store();
    fs::write(
        &path,
        r#"[{"title": "Dune", "author": "Herbert", "year": "1965", "genre": "SciFi", "read": true}]"#,
    )
    .unwrap();

    let loaded = read_store(&path);
    assert_eq!(
        loaded,
        vec![Book::new("Dune", "Herbert", "1965", "SciFi", true)]
    );
}

#[test]
fn test_add_then_search_then_delete() {
    let (path, _temp_dir) = missing_store();
    let store = BookStore::new(&path);

    let mut collection = store.load().unwrap();
    books::add(
        &mut collection,
        Book::new("Dune", "Herbert", "1965", "SciFi", false),
    )
    .unwrap();
    store.save(&collection).unwrap();

    let collection = store.load().unwrap();
    let found = books::search(&collection, "dune");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].author, "Herbert");

    let remaining = books::delete(&collection, "Dune");
    store.save(&remaining).unwrap();
    let collection = store.load().unwrap();
    assert!(books::find_by_title(&collection, "Dune").is_none());
}

#[test]
fn test_add_rejects_empty_field_without_touching_store() {
    let (path, _temp_dir) = create_temp_store(&sample_books());
    let store = BookStore::new(&path);

    let mut collection = store.load().unwrap();
    let result = books::add(
        &mut collection,
        Book::new("Solaris", "Stanislaw Lem", "", "SciFi", false),
    );

    assert_eq!(result, Err(ValidationError::EmptyField(BookField::Year)));
    assert_eq!(collection.len(), 3);
    assert_eq!(read_store(&path), sample_books());
}

#[test]
fn test_update_only_changes_target() {
    let (path, _temp_dir) = create_temp_store(&sample_books());
    let store = BookStore::new(&path);

    let mut collection = store.load().unwrap();
    let replacement = Book::new("Emma", "Jane Austen", "1816", "Classic", true);
    assert!(books::update(&mut collection, "Emma", replacement.clone()));
    store.save(&collection).unwrap();

    let loaded = read_store(&path);
    let expected = sample_books();
    assert_eq!(loaded[0], expected[0]);
    assert_eq!(loaded[1], replacement);
    assert_eq!(loaded[2], expected[2]);
}

#[test]
fn test_progress_of_stored_collection() {
    let (path, _temp_dir) = create_temp_store(&sample_books());
    let progress = books::progress(&read_store(&path));

    assert_eq!(progress.total, 3);
    assert_eq!(progress.read_count, 1);
    assert_eq!(progress.percent_label(), "33.33%");
}
