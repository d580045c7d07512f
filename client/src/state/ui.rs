//! Local UI chrome state (mobile navigation menu).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the volunteer form state so
//! layout controls can evolve independently of the application data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Open/closed state of the mobile navigation menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Flip between open and closed (menu button click).
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        };
    }

    /// Close the menu (a navigation link was activated).
    pub fn close(&mut self) {
        *self = Self::Closed;
    }
}

/// UI state shared through context by the layout components.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub menu: MenuState,
}
