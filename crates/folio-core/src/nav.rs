//! Navigation bar state.

use crate::profile::Section;

/// Visibility of the collapsible (mobile) nav list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Class for the nav list
    pub fn menu_class(&self) -> &'static str {
        if self.open {
            "nav-menu open"
        } else {
            "nav-menu"
        }
    }

    /// Class for the hamburger button
    pub fn toggle_class(&self) -> &'static str {
        if self.open {
            "nav-toggle active"
        } else {
            "nav-toggle"
        }
    }
}

/// Class for a nav link given the highlighted section
pub fn link_class(section: Section, active: Option<Section>) -> &'static str {
    if active == Some(section) {
        "nav-link active"
    } else {
        "nav-link"
    }
}
