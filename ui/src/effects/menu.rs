//! Mobile navigation menu.

use crate::view::View;

/// Glyph drawn inside the menu toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    Hamburger,
    Close,
}

impl MenuIcon {
    /// SVG path data (24×24 viewBox).
    pub fn path(self) -> &'static str {
        match self {
            MenuIcon::Hamburger => "M3 18h18v-2H3v2zm0-5h18v-2H3v2zm0-7v2h18V6H3z",
            MenuIcon::Close => {
                "M19 6.41L17.59 5 12 10.59 6.41 5 5 6.41 10.59 12 5 17.59 6.41 19 12 13.41 17.59 19 19 17.59 13.41 12z"
            }
        }
    }

    fn for_state(open: bool) -> Self {
        if open {
            MenuIcon::Close
        } else {
            MenuIcon::Hamburger
        }
    }
}

pub fn toggle_menu<V: View + ?Sized>(view: &V) {
    let open = !view.is_menu_open();
    view.set_menu_open(open);
    view.set_menu_icon(MenuIcon::for_state(open));
}

/// Called when a navigation link is followed.
pub fn close_menu<V: View + ?Sized>(view: &V) {
    if view.is_menu_open() {
        view.set_menu_open(false);
        view.set_menu_icon(MenuIcon::Hamburger);
    }
}
