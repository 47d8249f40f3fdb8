//! Navigation shell.
//!
//! The shell owns the only state shared between views: whether the user has
//! logged in and which page is selected. It also tracks how the navigation
//! menu is presented for the current viewport width.

use serde::Serialize;
use tracing::{debug, info};

use mediscan_contracts::page::{LayoutMode, Page, View};

#[derive(Debug, Clone, Serialize)]
pub struct Shell {
    authenticated: bool,
    page: Page,
    layout: LayoutMode,
    menu_open: bool,
    width_px: u32,
    sidebar_min_width_px: u32,
}

impl Shell {
    /// A logged-out shell on the overview page, laid out for `width_px`.
    pub fn new(width_px: u32, sidebar_min_width_px: u32) -> Self {
        Self {
            authenticated: false,
            page: Page::default(),
            layout: layout_for(width_px, sidebar_min_width_px),
            menu_open: false,
            width_px,
            sidebar_min_width_px,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Latch the session. Returns true only on the first call.
    pub fn login(&mut self) -> bool {
        if self.authenticated {
            return false;
        }
        self.authenticated = true;
        info!(page = %self.page, "session authenticated");
        true
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Select `page`. Reselecting the current page is a no-op apart from
    /// closing the overlay menu.
    pub fn navigate(&mut self, page: Page) {
        if self.page != page {
            debug!(from = %self.page, to = %page, "navigate");
        }
        self.page = page;
        self.menu_open = false;
    }

    /// The login screen until the session is latched, then the selected page.
    pub fn visible_view(&self) -> View {
        if self.authenticated {
            View::Page(self.page)
        } else {
            View::Login
        }
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    /// Record a new viewport width and recompute the layout mode.
    pub fn resize(&mut self, width_px: u32) {
        self.width_px = width_px;
        let layout = layout_for(width_px, self.sidebar_min_width_px);
        if layout != self.layout {
            debug!(width_px, ?layout, "layout changed");
            self.layout = layout;
            if layout == LayoutMode::Sidebar {
                self.menu_open = false;
            }
        }
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Open or close the overlay menu. Has no effect in sidebar mode, where the
    /// menu is always shown.
    pub fn toggle_menu(&mut self) {
        if self.layout == LayoutMode::Overlay {
            self.menu_open = !self.menu_open;
        }
    }

    /// Whether the page list should be drawn.
    pub fn menu_visible(&self) -> bool {
        self.layout == LayoutMode::Sidebar || self.menu_open
    }
}

fn layout_for(width_px: u32, sidebar_min_width_px: u32) -> LayoutMode {
    if width_px >= sidebar_min_width_px {
        LayoutMode::Sidebar
    } else {
        LayoutMode::Overlay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell() -> Shell {
        Shell::new(1280, 700)
    }

    #[test]
    fn starts_logged_out_on_login_view() {
        let s = shell();
        assert!(!s.is_authenticated());
        assert_eq!(s.visible_view(), View::Login);
    }

    #[test]
    fn login_latches_exactly_once() {
        let mut s = shell();
        assert!(s.login());
        assert!(!s.login());
        assert!(s.is_authenticated());
        assert_eq!(s.visible_view(), View::Page(Page::Overview));
    }

    #[test]
    fn navigating_while_logged_out_still_shows_login() {
        let mut s = shell();
        s.navigate(Page::Chat);
        assert_eq!(s.visible_view(), View::Login);
        s.login();
        assert_eq!(s.visible_view(), View::Page(Page::Chat));
    }

    #[test]
    fn every_page_renders_itself_when_authenticated() {
        let mut s = shell();
        s.login();
        for page in Page::ALL {
            s.navigate(page);
            assert_eq!(s.visible_view(), View::Page(page));
        }
    }

    #[test]
    fn navigate_is_idempotent() {
        let mut s = shell();
        s.login();
        s.navigate(Page::Settings);
        s.navigate(Page::Settings);
        assert_eq!(s.page(), Page::Settings);
    }

    #[test]
    fn crossing_the_threshold_switches_layout_but_not_page() {
        let mut s = shell();
        s.login();
        s.navigate(Page::ReportUpload);
        assert_eq!(s.layout(), LayoutMode::Sidebar);

        s.resize(699);
        assert_eq!(s.layout(), LayoutMode::Overlay);
        assert_eq!(s.page(), Page::ReportUpload);

        s.resize(700);
        assert_eq!(s.layout(), LayoutMode::Sidebar);
        assert_eq!(s.page(), Page::ReportUpload);
    }

    #[test]
    fn overlay_menu_opens_and_closes_on_navigation() {
        let mut s = Shell::new(400, 700);
        s.login();
        assert!(!s.menu_visible());

        s.toggle_menu();
        assert!(s.is_menu_open());
        assert!(s.menu_visible());

        s.navigate(Page::Chat);
        assert!(!s.is_menu_open());
    }

    #[test]
    fn widening_closes_the_overlay_menu() {
        let mut s = Shell::new(400, 700);
        s.toggle_menu();
        s.resize(900);
        assert!(!s.is_menu_open());
        assert!(s.menu_visible());

        // Toggling is ignored while the sidebar is shown.
        s.toggle_menu();
        assert!(!s.is_menu_open());
    }
}
