//! Hero

use leptos::*;
use procure_core::content::{DashboardContent, HeroContent};
use procure_core::navigation::scroll_to;
use procure_core::{ButtonSize, ButtonVariant, SectionAnchor};
use crate::components::{Button, DashboardMockup};
use crate::viewport::DomViewport;

#[component]
pub fn Hero(hero: &'static HeroContent, dashboard: &'static DashboardContent) -> impl IntoView {
    view! {
        <div class="relative pt-32 pb-20 lg:pt-48 lg:pb-40 overflow-hidden">
            <div class="absolute inset-0 bg-hero-glow opacity-30 pointer-events-none mix-blend-screen"></div>
            <div class="absolute inset-0 grid-bg pointer-events-none"></div>

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10 text-center">
                <div class="inline-flex items-center space-x-2 px-3 py-1 rounded-full border border-blue-500/20 bg-blue-500/5 text-blue-300 text-xs font-medium mb-8 animate-fade-in-up">
                    <span class="relative flex h-2 w-2">
                        <span class="animate-ping absolute inline-flex h-full w-full rounded-full bg-blue-400 opacity-75"></span>
                        <span class="relative inline-flex rounded-full h-2 w-2 bg-blue-500"></span>
                    </span>
                    <span>{hero.badge.as_str()}</span>
                </div>

                <h1 class="text-5xl md:text-7xl font-bold tracking-tight text-white mb-6 leading-[1.1]">
                    {hero.headline.as_str()}
                    " "
                    <br class="hidden md:block"/>
                    <span class="text-gradient-primary">{hero.highlight.as_str()}</span>
                </h1>

                <p class="text-lg md:text-xl text-slate-400 mb-10 max-w-2xl mx-auto leading-relaxed">
                    {hero.lede.as_str()}
                </p>

                <div class="flex flex-col sm:flex-row gap-4 justify-center items-center mb-16">
                    <Button
                        size=ButtonSize::Lg
                        on_click=move |_: ev::MouseEvent| {
                            scroll_to(SectionAnchor::Register, &DomViewport);
                        }
                    >
                        "Request Early Access"
                        <span class="ml-2">"›"</span>
                    </Button>
                    <Button
                        size=ButtonSize::Lg
                        variant=ButtonVariant::Outline
                        on_click=move |_: ev::MouseEvent| {
                            scroll_to(SectionAnchor::Suppliers, &DomViewport);
                        }
                    >
                        "Supplier Pre-Registration"
                    </Button>
                </div>

                <DashboardMockup dashboard=dashboard/>
            </div>
        </div>
    }
}
