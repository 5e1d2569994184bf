//! Input handlers for the sidebar and each view.

pub mod actions;
pub mod main;
pub mod views;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::shortcuts::{contexts, ShortcutRegistry};
use crate::tui::{AppState, Focus};

// Re-export handler functions
pub use actions::dispatch_action;
pub use main::handle_main_input;
pub use views::handle_view_input;

/// Route a key press to the global shortcuts, the help overlay, or the
/// focused pane.
pub fn handle_input(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    let registry = ShortcutRegistry::new();

    if let Some(action) = registry.lookup(contexts::GLOBAL, key) {
        return dispatch_action(state, action);
    }

    if state.show_help {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?' | 'q')
        ) {
            state.show_help = false;
        }
        return Ok(false);
    }

    match state.focus {
        Focus::Sidebar => handle_main_input(state, key, &registry),
        Focus::View => handle_view_input(state, key),
    }
}
