//! Product roadmap

use leptos::*;
use procure_core::content::{Icon, RoadmapPhase};
use procure_core::{SectionAnchor, SectionBackground};
use crate::components::{Eyebrow, RoadmapCard, Section};

#[component]
pub fn Roadmap(phases: &'static [RoadmapPhase]) -> impl IntoView {
    view! {
        <Section anchor=SectionAnchor::Roadmap background=SectionBackground::Dark>
            <div class="text-center mb-16">
                <Eyebrow icon=Icon::Calendar label="Future Vision" color="text-blue-400"/>
                <h2 class="text-3xl font-bold text-white">"Product Roadmap"</h2>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                {phases.iter().enumerate().map(|(position, phase)| view! {
                    <RoadmapCard phase=phase position=position/>
                }).collect::<Vec<_>>()}
            </div>
        </Section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use procure_core::SiteContent;

    #[test]
    fn test_renders_four_phases_in_order() {
        let phases = SiteContent::shared().roadmap.as_slice();
        let html = leptos::ssr::render_to_string(move || view! { <Roadmap phases=phases/> });

        assert_eq!(html.matches("data-roadmap-phase").count(), 4);
        let positions: Vec<_> = ["MVP", "Supplier Onboarding", "Ontario Launch", "Canada-wide"]
            .iter()
            .map(|title| html.find(title))
            .collect();
        assert!(positions.iter().all(Option::is_some));
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_highlights_only_active_phase() {
        let phases = SiteContent::shared().roadmap.as_slice();
        let html = leptos::ssr::render_to_string(move || view! { <Roadmap phases=phases/> });
        assert_eq!(html.matches("animate-ping").count(), 1);
    }
}
