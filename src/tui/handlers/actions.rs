//! Action dispatch for sidebar and global shortcuts.

use anyhow::Result;

use crate::shortcuts::Action;
use crate::tui::{ActiveView, AppState};

/// Apply a shortcut action. Returns `Ok(true)` when the app should exit.
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    match action {
        Action::SelectPrevious => {
            state.select_menu(state.menu.previous())?;
        }
        Action::SelectNext => {
            state.select_menu(state.menu.next())?;
        }
        Action::JumpTo(item) => {
            state.select_menu(item)?;
            state.focus_view();
        }
        Action::FocusView => state.focus_view(),
        Action::Reload => {
            state.reload()?;
            state.view = ActiveView::for_menu(state.menu, &state.books);
            tracing::info!(count = state.books.len(), "reloaded collection");
            state.set_status(format!("Reloaded {} books", state.books.len()));
        }
        Action::ToggleHelp => state.show_help = !state.show_help,
        Action::Quit => {
            state.should_quit = true;
            return Ok(true);
        }
    }
    Ok(false)
}
