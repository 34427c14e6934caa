//! Navigation drawer: a full-screen sheet on phones, a rail that expands into
//! a panel on larger screens.

pub const MOBILE_QUERY: &str = "(max-width: 640px)";
pub const PANEL_WIDTH: u32 = 420;
pub const RAIL_WIDTH: u32 = 80;
/// Rightward drag that dismisses the mobile sheet.
pub const SWIPE_CLOSE_PX: f64 = 80.0;
/// Height of the sticky navbar, subtracted when scrolling to an anchor.
pub const NAV_OFFSET_PX: f64 = 72.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerWidth {
    FullScreen,
    Px(u32),
}

impl DrawerWidth {
    pub fn css(self) -> String {
        match self {
            DrawerWidth::FullScreen => "100vw".to_string(),
            DrawerWidth::Px(px) => format!("{px}px"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Drawer {
    open: bool,
    expanded: bool,
    mobile: bool,
}

impl Drawer {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_mobile(&self) -> bool {
        self.mobile
    }

    /// The rail is only a thing on wide screens.
    pub fn shows_rail(&self) -> bool {
        !self.mobile
    }

    pub fn shows_panel(&self) -> bool {
        self.mobile || self.expanded
    }

    /// Body scrolling is locked while the drawer covers the page.
    pub fn locks_scroll(&self) -> bool {
        self.open
    }

    pub fn width(&self) -> DrawerWidth {
        if self.mobile {
            DrawerWidth::FullScreen
        } else if self.expanded {
            DrawerWidth::Px(PANEL_WIDTH)
        } else {
            DrawerWidth::Px(RAIL_WIDTH)
        }
    }

    pub fn set_mobile(&mut self, mobile: bool) {
        self.mobile = mobile;
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn expand(&mut self) {
        self.expanded = true;
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Returns whether the key was consumed.
    pub fn on_key(&mut self, key: &str) -> bool {
        if self.open && key == "Escape" {
            self.close();
            return true;
        }
        false
    }

    /// A nav item was picked: widen a collapsed rail, then close once the
    /// page scrolls to the anchor.
    pub fn on_anchor(&mut self) {
        if !self.mobile && !self.expanded {
            self.expanded = true;
        }
        self.close();
    }

    pub fn on_drag_end(&mut self, offset_x: f64) {
        if self.mobile && offset_x > SWIPE_CLOSE_PX {
            self.close();
        }
    }
}

/// Scroll target for an in-page anchor, leaving room for the navbar.
pub fn anchor_scroll_top(element_top: f64, scroll_y: f64) -> f64 {
    (element_top + scroll_y - NAV_OFFSET_PX).max(0.0)
}
