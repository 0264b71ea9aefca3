//! The solution: feature grid

use leptos::*;
use procure_core::content::{ContentItem, Icon};
use procure_core::{SectionAnchor, SectionBackground};
use crate::components::{Eyebrow, FeatureCard, Section};

#[component]
pub fn Solution(features: &'static [ContentItem]) -> impl IntoView {
    view! {
        <Section anchor=SectionAnchor::Solution background=SectionBackground::Gradient>
            <div class="text-center max-w-3xl mx-auto mb-20">
                <Eyebrow icon=Icon::Bot label="The Solution" color="text-cyan-400"/>
                <h2 class="text-4xl font-bold text-white mb-6">"Built for Enterprise Efficiency"</h2>
                <p class="text-slate-400 text-lg">
                    "Procure AI acts as your intelligent procurement layer, automating the tedious parts "
                    "of sourcing so you can focus on operations."
                </p>
            </div>

            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                {features.iter().map(|item| view! { <FeatureCard item=item/> }).collect::<Vec<_>>()}
            </div>
        </Section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use procure_core::SiteContent;

    #[test]
    fn test_renders_one_card_per_feature() {
        let features = SiteContent::shared().features.as_slice();
        let html = leptos::ssr::render_to_string(move || view! { <Solution features=features/> });
        assert_eq!(html.matches("data-feature").count(), 6);
        assert!(html.contains("Instant RFQ Broadcast"));
    }
}
