//! Input handlers for the six views.
//!
//! Every mutation reloads the store, applies one operation, saves, and then
//! replaces the in-memory snapshot with what was written.

use anyhow::Result;
use crossterm::event::KeyEvent;

use crate::models::Book;
use crate::services::books;
use crate::tui::{
    ActiveView, AppState, BookForm, BookFormEvent, BookListEvent, Component, ContextualComponent,
    ProgressEvent, SearchEvent, StatusKind, TitlePicker, TitlePickerEvent, UpdateView,
};

/// Handle input while the active view has focus
pub fn handle_view_input(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    match &state.view {
        ActiveView::Books(_) => handle_book_list(state, key),
        ActiveView::Add(_) => handle_add_form(state, key),
        ActiveView::Search(_) => handle_search(state, key),
        ActiveView::Update(UpdateView::Picking(_)) => handle_update_picker(state, key),
        ActiveView::Update(UpdateView::Editing(_)) => handle_update_form(state, key),
        ActiveView::Delete(_) => handle_delete_picker(state, key),
        ActiveView::Progress(_) => handle_progress(state, key),
    }
}

fn handle_book_list(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    let ActiveView::Books(list) = &mut state.view else {
        return Ok(false);
    };
    if let Some(BookListEvent::Back) = list.handle_input(key, &state.books) {
        state.focus_sidebar();
    }
    Ok(false)
}

fn handle_add_form(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    let ActiveView::Add(form) = &mut state.view else {
        return Ok(false);
    };
    match form.handle_input(key) {
        Some(BookFormEvent::Save(book, _)) => add_book(state, book)?,
        Some(BookFormEvent::Cancel) => state.focus_sidebar(),
        None => {}
    }
    Ok(false)
}

/// Validate and persist a new book.
fn add_book(state: &mut AppState, book: Book) -> Result<()> {
    let mut collection = state.store.load()?;
    match books::add(&mut collection, book) {
        Ok(()) => {
            state.store.save(&collection)?;
            state.books = collection;
            if let ActiveView::Add(form) = &mut state.view {
                form.clear();
            }
            state.set_status_with_kind("Book added successfully!", StatusKind::Success);
        }
        Err(e) => {
            tracing::debug!(error = %e, "add rejected");
            if let ActiveView::Add(form) = &mut state.view {
                form.set_error(format!("Please fill in all fields. ({e})"));
            }
            state.set_status_with_kind("Please fill in all fields.", StatusKind::Warning);
        }
    }
    Ok(())
}

fn handle_search(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    let ActiveView::Search(search) = &mut state.view else {
        return Ok(false);
    };
    match search.handle_input(key) {
        Some(SearchEvent::Search(query)) => {
            state.reload()?;
            let results = books::search(&state.books, &query);
            tracing::debug!(%query, matches = results.len(), "search");
            if let ActiveView::Search(search) = &mut state.view {
                search.set_results(results);
            }
        }
        Some(SearchEvent::Back) => state.focus_sidebar(),
        None => {}
    }
    Ok(false)
}

fn handle_update_picker(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    let ActiveView::Update(UpdateView::Picking(picker)) = &mut state.view else {
        return Ok(false);
    };
    match picker.handle_input(key) {
        Some(TitlePickerEvent::Selected(title)) => {
            state.reload()?;
            if let Some(book) = books::find_by_title(&state.books, &title) {
                let form = BookForm::new_edit(book.clone());
                state.view = ActiveView::Update(UpdateView::Editing(form));
            } else {
                // Removed by another writer since the picker was built
                show_update_picker(state);
                state.set_status_with_kind(
                    format!("No book titled '{title}'"),
                    StatusKind::Warning,
                );
            }
        }
        Some(TitlePickerEvent::Back) => state.focus_sidebar(),
        Some(TitlePickerEvent::Confirmed(_)) | None => {}
    }
    Ok(false)
}

fn handle_update_form(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    let ActiveView::Update(UpdateView::Editing(form)) = &mut state.view else {
        return Ok(false);
    };
    match form.handle_input(key) {
        Some(BookFormEvent::Save(book, Some(original_title))) => {
            update_book(state, &original_title, book)?;
        }
        Some(BookFormEvent::Save(_, None)) => {}
        Some(BookFormEvent::Cancel) => show_update_picker(state),
        None => {}
    }
    Ok(false)
}

/// Replace the record titled `original_title` and return to the selector.
fn update_book(state: &mut AppState, original_title: &str, book: Book) -> Result<()> {
    let mut collection = state.store.load()?;
    if books::update(&mut collection, original_title, book) {
        state.store.save(&collection)?;
        state.books = collection;
        show_update_picker(state);
        state.set_status_with_kind("Book updated successfully!", StatusKind::Success);
    } else {
        state.books = collection;
        show_update_picker(state);
        state.set_status_with_kind(
            format!("No book titled '{original_title}'"),
            StatusKind::Warning,
        );
    }
    Ok(())
}

fn show_update_picker(state: &mut AppState) {
    state.view = ActiveView::Update(UpdateView::Picking(TitlePicker::new(
        books::titles(&state.books),
        "update",
    )));
}

fn handle_delete_picker(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    let ActiveView::Delete(picker) = &mut state.view else {
        return Ok(false);
    };
    match picker.handle_input(key) {
        Some(TitlePickerEvent::Confirmed(title)) => delete_book(state, &title)?,
        Some(TitlePickerEvent::Back) => state.focus_sidebar(),
        Some(TitlePickerEvent::Selected(_)) | None => {}
    }
    Ok(false)
}

/// Remove every record titled `title`.
fn delete_book(state: &mut AppState, title: &str) -> Result<()> {
    let collection = state.store.load()?;
    let remaining = books::delete(&collection, title);

    if remaining.len() == collection.len() {
        state.books = collection;
        state.set_status_with_kind(format!("No book titled '{title}'"), StatusKind::Warning);
    } else {
        state.store.save(&remaining)?;
        state.books = remaining;
        state.set_status_with_kind("Book deleted successfully!", StatusKind::Success);
    }

    if let ActiveView::Delete(picker) = &mut state.view {
        picker.set_titles(books::titles(&state.books));
    }
    Ok(())
}

fn handle_progress(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    let progress = state.progress();
    let ActiveView::Progress(view) = &mut state.view else {
        return Ok(false);
    };
    if let Some(ProgressEvent::Back) = view.handle_input(key, &progress) {
        state.focus_sidebar();
    }
    Ok(false)
}
