//! Browser viewport

use leptos::{document, window};
use procure_core::Viewport;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

/// Smooth-scrolls the live document. Only used from event handlers, which
/// never run during server rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomViewport;

impl Viewport for DomViewport {
    fn scroll_into_view(&self, id: &str) -> bool {
        let Some(element) = document().get_element_by_id(id) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn scroll_to_top(&self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);
    }
}
