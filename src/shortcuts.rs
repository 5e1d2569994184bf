//! Centralized shortcut and action system.
//!
//! Sidebar and global key bindings are declared here and looked up by the
//! input handlers. Views handle their own keys (text entry would otherwise
//! collide with single-letter shortcuts).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use crate::tui::MenuItem;

/// Context names used for lookups.
pub mod contexts {
    /// Active everywhere, checked before any other context
    pub const GLOBAL: &str = "global";
    /// Active while the sidebar has focus
    pub const SIDEBAR: &str = "sidebar";
}

/// Actions reachable through shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Highlight the previous menu item
    SelectPrevious,
    /// Highlight the next menu item
    SelectNext,
    /// Jump straight to a view
    JumpTo(MenuItem),
    /// Move focus into the current view
    FocusView,
    /// Reload the collection from disk
    Reload,
    /// Show or hide the help overlay
    ToggleHelp,
    /// Leave the application
    Quit,
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code
    pub code: KeyCode,
    /// Required modifiers
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

/// Maps `(context, key binding)` to an [`Action`].
pub struct ShortcutRegistry {
    bindings: HashMap<(&'static str, KeyBinding), Action>,
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };

        registry.register_global_shortcuts();
        registry.register_sidebar_shortcuts();
        registry
    }

    fn register_global_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = contexts::GLOBAL;
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
        self.register(ctx, K::Char('q'), M::CONTROL, Action::Quit);
    }

    fn register_sidebar_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = contexts::SIDEBAR;

        // === NAVIGATION ===
        self.register(ctx, K::Up, M::NONE, Action::SelectPrevious);
        self.register(ctx, K::Down, M::NONE, Action::SelectNext);
        self.register(ctx, K::Char('k'), M::NONE, Action::SelectPrevious);
        self.register(ctx, K::Char('j'), M::NONE, Action::SelectNext);

        for (i, item) in MenuItem::ALL.into_iter().enumerate() {
            if let Some(digit) = char::from_digit(u32::try_from(i + 1).unwrap_or(0), 10) {
                self.register(ctx, K::Char(digit), M::NONE, Action::JumpTo(item));
            }
        }

        // === FOCUS ===
        self.register(ctx, K::Enter, M::NONE, Action::FocusView);
        self.register(ctx, K::Right, M::NONE, Action::FocusView);
        self.register(ctx, K::Tab, M::NONE, Action::FocusView);
        self.register(ctx, K::Char('l'), M::NONE, Action::FocusView);

        // === GENERAL ===
        self.register(ctx, K::Char('r'), M::NONE, Action::Reload);
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);
        self.register(ctx, K::Char('?'), M::SHIFT, Action::ToggleHelp);
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
    }

    /// Register a shortcut binding.
    fn register(
        &mut self,
        context: &'static str,
        code: KeyCode,
        modifiers: KeyModifiers,
        action: Action,
    ) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context, binding), action);
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: &'static str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context, binding)).copied()
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
