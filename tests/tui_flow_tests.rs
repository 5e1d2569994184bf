#![allow(missing_docs)]
//! Drive the terminal UI state with key events, without a terminal.

mod fixtures;
use fixtures::*;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use lazybooks::config::{Config, ThemeMode};
use lazybooks::models::Book;
use lazybooks::services::BookStore;
use lazybooks::tui::{handle_key_event, ActiveView, AppState, Focus, MenuItem, UpdateView};
use std::path::Path;

fn app(path: &Path) -> AppState {
    let mut config = Config::default();
    config.ui.theme_mode = ThemeMode::Dark;
    AppState::new(BookStore::new(path), config).expect("Failed to create app state")
}

fn press(state: &mut AppState, code: KeyCode) -> bool {
    handle_key_event(state, KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
}

fn ctrl(state: &mut AppState, c: char) -> bool {
    handle_key_event(state, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)).unwrap()
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        press(state, KeyCode::Char(c));
    }
}

#[test]
fn test_starts_on_view_books_with_sidebar_focus() {
    let (path, _temp_dir) = create_temp_store(&sample_books());
    let state = app(&path);

    assert_eq!(state.menu, MenuItem::ViewBooks);
    assert_eq!(state.focus, Focus::Sidebar);
    assert_eq!(state.books.len(), 3);
    assert!(matches!(state.view, ActiveView::Books(_)));
}

#[test]
fn test_sidebar_navigation_and_quit() {
    let (path, _temp_dir) = create_temp_store(&sample_books());
    let mut state = app(&path);

    press(&mut state, KeyCode::Down);
    assert_eq!(state.menu, MenuItem::AddBook);
    press(&mut state, KeyCode::Up);
    press(&mut state, KeyCode::Up);
    assert_eq!(state.menu, MenuItem::ReadingProgress);

    press(&mut state, KeyCode::Enter);
    assert_eq!(state.focus, Focus::View);
    press(&mut state, KeyCode::Esc);
    assert_eq!(state.focus, Focus::Sidebar);

    assert!(press(&mut state, KeyCode::Char('q')));
    assert!(state.should_quit);
}

#[test]
fn test_ctrl_c_quits_from_a_form() {
    let (path, _temp_dir) = missing_store();
    let mut state = app(&path);

    press(&mut state, KeyCode::Char('2'));
    // 'q' is text inside the form
    assert!(!press(&mut state, KeyCode::Char('q')));
    assert!(ctrl(&mut state, 'c'));
}

#[test]
fn test_add_book_flow() {
    let (path, _temp_dir) = missing_store();
    let mut state = app(&path);

    press(&mut state, KeyCode::Char('2'));
    assert_eq!(state.menu, MenuItem::AddBook);
    assert_eq!(state.focus, Focus::View);

    type_text(&mut state, "Dune");
    press(&mut state, KeyCode::Tab);
    type_text(&mut state, "Herbert");
    press(&mut state, KeyCode::Tab);
    type_text(&mut state, "1965");
    press(&mut state, KeyCode::Tab);
    type_text(&mut state, "SciFi");
    press(&mut state, KeyCode::Tab);
    press(&mut state, KeyCode::Char(' '));
    ctrl(&mut state, 's');

    assert_eq!(state.status_message, "Book added successfully!");
    assert_eq!(
        read_store(&path),
        vec![Book::new("Dune", "Herbert", "1965", "SciFi", true)]
    );
    assert_eq!(state.books.len(), 1);

    // Form is cleared for the next entry
    let ActiveView::Add(form) = &state.view else {
        panic!("expected add form");
    };
    assert_eq!(form.draft(), &Book::default());
}

#[test]
fn test_add_with_missing_field_does_not_save() {
    let (path, _temp_dir) = missing_store();
    let mut state = app(&path);

    press(&mut state, KeyCode::Char('2'));
    type_text(&mut state, "Dune");
    ctrl(&mut state, 's');

    assert_eq!(state.status_message, "Please fill in all fields.");
    assert!(!path.exists());
    let ActiveView::Add(form) = &state.view else {
        panic!("expected add form");
    };
    assert!(form.error().unwrap().contains("author must not be empty"));
    assert_eq!(form.draft().title, "Dune");
}

#[test]
fn test_search_flow() {
    let (path, _temp_dir) = create_temp_store(&sample_books());
    let mut state = app(&path);

    press(&mut state, KeyCode::Char('3'));
    type_text(&mut state, "austen");
    press(&mut state, KeyCode::Enter);

    let ActiveView::Search(search) = &state.view else {
        panic!("expected search view");
    };
    let results = search.results().expect("search should have run");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Emma");
}

#[test]
fn test_update_flow() {
    let (path, _temp_dir) = create_temp_store(&sample_books());
    let mut state = app(&path);

    press(&mut state, KeyCode::Char('4'));
    press(&mut state, KeyCode::Down);
    press(&mut state, KeyCode::Enter);

    let ActiveView::Update(UpdateView::Editing(form)) = &state.view else {
        panic!("expected update form");
    };
    assert_eq!(form.editing_title(), Some("Emma"));
    assert_eq!(form.draft().author, "Jane Austen");

    // Move to the year row and replace it
    press(&mut state, KeyCode::Down);
    press(&mut state, KeyCode::Down);
    for _ in 0..4 {
        press(&mut state, KeyCode::Backspace);
    }
    type_text(&mut state, "1816");
    ctrl(&mut state, 's');

    assert_eq!(state.status_message, "Book updated successfully!");
    assert!(matches!(
        state.view,
        ActiveView::Update(UpdateView::Picking(_))
    ));

    let loaded = read_store(&path);
    assert_eq!(loaded[1].year, "1816");
    assert_eq!(loaded[0], sample_books()[0]);
    assert_eq!(loaded[2], sample_books()[2]);
}

#[test]
fn test_update_cancel_returns_to_picker() {
    let (path, _temp_dir) = create_temp_store(&sample_books());
    let mut state = app(&path);

    press(&mut state, KeyCode::Char('4'));
    press(&mut state, KeyCode::Enter);
    type_text(&mut state, " changed");
    press(&mut state, KeyCode::Esc);

    assert!(matches!(
        state.view,
        ActiveView::Update(UpdateView::Picking(_))
    ));
    assert_eq!(read_store(&path), sample_books());
}

#[test]
fn test_delete_flow_requires_confirmation() {
    let (path, _temp_dir) = create_temp_store(&sample_books());
    let mut state = app(&path);

    press(&mut state, KeyCode::Char('5'));
    press(&mut state, KeyCode::Enter);
    // Nothing removed until confirmed
    assert_eq!(read_store(&path).len(), 3);

    press(&mut state, KeyCode::Char('y'));
    assert_eq!(state.status_message, "Book deleted successfully!");

    let titles: Vec<String> = read_store(&path).into_iter().map(|b| b.title).collect();
    assert_eq!(titles, ["Emma", "Neuromancer"]);

    let ActiveView::Delete(picker) = &state.view else {
        panic!("expected delete picker");
    };
    assert_eq!(picker.titles(), ["Emma", "Neuromancer"]);
}

#[test]
fn test_entering_a_view_reloads_from_disk() {
    let (path, _temp_dir) = create_temp_store(&sample_books());
    let mut state = app(&path);

    // Another writer changes the file
    BookStore::new(&path).save(&sample_books()[..1]).unwrap();

    press(&mut state, KeyCode::Char('6'));
    assert_eq!(state.progress().total, 1);
    assert_eq!(state.progress().read_count, 1);
}

#[test]
fn test_io_failure_shows_error_overlay() {
    let (path, temp_dir) = create_temp_store(&sample_books());
    let mut state = app(&path);

    state.store = BookStore::new(temp_dir.path());
    let quit = press(&mut state, KeyCode::Char('r'));

    assert!(!quit);
    assert!(state.error_message.is_some());

    // Input is blocked until dismissed
    press(&mut state, KeyCode::Char('q'));
    assert!(!state.should_quit);
    press(&mut state, KeyCode::Esc);
    assert!(state.error_message.is_none());
}

#[test]
fn test_help_overlay_toggles() {
    let (path, _temp_dir) = missing_store();
    let mut state = app(&path);

    press(&mut state, KeyCode::Char('?'));
    assert!(state.show_help);
    // Keys do not reach the sidebar while help is open
    press(&mut state, KeyCode::Down);
    assert_eq!(state.menu, MenuItem::ViewBooks);
    press(&mut state, KeyCode::Esc);
    assert!(!state.show_help);
}
