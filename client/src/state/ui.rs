//! Local UI chrome state for the dashboard shell.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns (drawer, collapse, menus) out of
//! session state so layout controls can evolve independently.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Layout state for the sidebar, mobile drawer and user menu.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Mobile drawer visibility.
    pub sidebar_open: bool,
    /// Desktop icon-only mode.
    pub sidebar_collapsed: bool,
    pub user_menu_open: bool,
}

impl UiState {
    pub fn toggle_collapsed(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn open_drawer(&mut self) {
        self.sidebar_open = true;
    }

    pub fn close_drawer(&mut self) {
        self.sidebar_open = false;
    }

    pub fn toggle_user_menu(&mut self) {
        self.user_menu_open = !self.user_menu_open;
    }

    /// A sidebar entry was chosen: the drawer and menus close, collapse
    /// mode is kept.
    pub fn after_navigate(&mut self) {
        self.sidebar_open = false;
        self.user_menu_open = false;
    }
}
