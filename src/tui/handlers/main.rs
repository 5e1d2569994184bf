//! Sidebar input handler.

use anyhow::Result;
use crossterm::event;

use crate::shortcuts::{contexts, ShortcutRegistry};
use crate::tui::AppState;

/// Handle input while the sidebar has focus
pub fn handle_main_input(
    state: &mut AppState,
    key: event::KeyEvent,
    registry: &ShortcutRegistry,
) -> Result<bool> {
    if let Some(action) = registry.lookup(contexts::SIDEBAR, key) {
        super::dispatch_action(state, action)
    } else {
        // No action mapped - ignore key
        Ok(false)
    }
}
