//! Landing page

use leptos::*;
use procure_core::SiteContent;
use crate::sections::*;

#[component]
pub fn LandingPage() -> impl IntoView {
    let content = SiteContent::shared();

    view! {
        <Hero hero=&content.hero dashboard=&content.dashboard/>
        <Problem points=content.problems.as_slice()/>
        <Solution features=content.features.as_slice()/>
        <AudienceSplit audiences=&content.audiences/>
        <RegionalPilot phases=content.pilot_phases.as_slice()/>
        <Roadmap phases=content.roadmap.as_slice()/>
        <Registration perks=content.registration_perks.as_slice()/>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_sections_render_in_page_order() {
        let html = leptos::ssr::render_to_string(|| view! { <LandingPage/> });
        let order: Vec<_> = ["problem", "solution", "manufacturers", "suppliers", "regional", "roadmap", "register"]
            .iter()
            .map(|id| html.find(&format!("id=\"{}\"", id)))
            .collect();
        assert!(order.iter().all(Option::is_some));
        assert!(order.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
