//! Section wrapper

use leptos::*;
use procure_core::style::{section_classes, SECTION_INNER};
use procure_core::{SectionAnchor, SectionBackground};

#[component]
pub fn Section(
    /// Element id navigation links target
    #[prop(optional)] anchor: Option<SectionAnchor>,
    #[prop(optional)] background: SectionBackground,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=anchor.map(SectionAnchor::id) class=section_classes(background, &class)>
            <div class=SECTION_INNER>{children()}</div>
        </section>
    }
}
