//! Navbar view model

use crate::SectionAnchor;

/// Vertical offset (px) from which the navbar switches to its opaque panel
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Something that can bring page elements into view.
///
/// The browser implementation smooth-scrolls real DOM elements; tests use an
/// in-memory page.
pub trait Viewport {
    /// Smooth-scroll the element with `id` into view.
    ///
    /// Returns `false` without scrolling if no such element exists.
    fn scroll_into_view(&self, id: &str) -> bool;

    /// Smooth-scroll back to the top of the page
    fn scroll_to_top(&self);
}

/// Scroll `anchor` into view without touching any navbar state
pub fn scroll_to(anchor: SectionAnchor, viewport: &impl Viewport) -> bool {
    viewport.scroll_into_view(anchor.id())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    menu_open: bool,
    scrolled: bool,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Whether `offset` is far enough down the page for the opaque style
    pub fn is_scrolled_at(offset: f64) -> bool {
        offset >= SCROLL_THRESHOLD_PX
    }

    /// Record the current vertical scroll offset. Returns whether the
    /// scrolled flag changed.
    pub fn observe_scroll(&mut self, offset: f64) -> bool {
        let scrolled = Self::is_scrolled_at(offset);
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Follow a navigation link.
    ///
    /// The menu closes only when the target exists; a missing target leaves
    /// both the scroll position and the menu untouched.
    pub fn follow_link(&mut self, anchor: SectionAnchor, viewport: &impl Viewport) -> bool {
        if !scroll_to(anchor, viewport) {
            tracing::debug!(anchor = %anchor, "navigation target not found");
            return false;
        }
        self.menu_open = false;
        true
    }

    /// Navbar container classes for the current scroll state
    pub fn panel_classes(&self) -> &'static str {
        if self.scrolled {
            "glass-panel border-b border-white/5 shadow-lg"
        } else {
            "bg-transparent border-transparent"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::{Cell, RefCell};

    /// In-memory page with a fixed set of element ids
    struct FakePage {
        ids: Vec<&'static str>,
        scrolled_to: RefCell<Vec<String>>,
        at_top: Cell<bool>,
    }

    impl FakePage {
        fn with(ids: &[&'static str]) -> Self {
            Self {
                ids: ids.to_vec(),
                scrolled_to: RefCell::new(Vec::new()),
                at_top: Cell::new(false),
            }
        }
    }

    impl Viewport for FakePage {
        fn scroll_into_view(&self, id: &str) -> bool {
            if !self.ids.iter().any(|known| *known == id) {
                return false;
            }
            self.scrolled_to.borrow_mut().push(id.to_string());
            true
        }

        fn scroll_to_top(&self) {
            self.at_top.set(true);
        }
    }

    #[test]
    fn test_initial_state_is_closed_and_transparent() {
        let nav = NavigationState::new();
        assert!(!nav.is_menu_open());
        assert!(!nav.is_scrolled());
        assert_eq!(nav.panel_classes(), "bg-transparent border-transparent");
    }

    #[test]
    fn test_observe_scroll_reports_changes_only() {
        let mut nav = NavigationState::new();
        assert!(!nav.observe_scroll(5.0));
        assert!(nav.observe_scroll(20.0));
        assert!(!nav.observe_scroll(400.0));
        assert!(nav.is_scrolled());
        assert!(nav.panel_classes().contains("glass-panel"));
        assert!(nav.observe_scroll(19.9));
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn test_follow_link_scrolls_and_closes_menu() {
        let page = FakePage::with(&["problem", "register"]);
        let mut nav = NavigationState::new();
        nav.toggle_menu();

        assert!(nav.follow_link(SectionAnchor::Register, &page));
        assert!(!nav.is_menu_open());
        assert_eq!(*page.scrolled_to.borrow(), vec!["register".to_string()]);
    }

    #[test]
    fn test_follow_link_to_missing_anchor_is_noop() {
        let page = FakePage::with(&["problem"]);
        let mut nav = NavigationState::new();
        nav.toggle_menu();
        nav.observe_scroll(120.0);
        let before = nav;

        assert!(!nav.follow_link(SectionAnchor::Roadmap, &page));
        assert_eq!(nav, before);
        assert!(page.scrolled_to.borrow().is_empty());
    }

    #[test]
    fn test_scroll_to_leaves_no_state_behind() {
        let page = FakePage::with(&["suppliers"]);
        assert!(scroll_to(SectionAnchor::Suppliers, &page));
        assert!(!scroll_to(SectionAnchor::Manufacturers, &page));
        page.scroll_to_top();
        assert!(page.at_top.get());
    }

    proptest! {
        #[test]
        fn scrolled_flag_follows_threshold(offset in 0.0f64..10_000.0) {
            let mut nav = NavigationState::new();
            nav.observe_scroll(offset);
            prop_assert_eq!(nav.is_scrolled(), offset >= SCROLL_THRESHOLD_PX);
        }

        #[test]
        fn toggle_parity_decides_menu_state(toggles in 0usize..64) {
            let mut nav = NavigationState::new();
            for _ in 0..toggles {
                nav.toggle_menu();
            }
            prop_assert_eq!(nav.is_menu_open(), toggles % 2 == 1);
        }
    }
}
