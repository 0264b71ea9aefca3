//! Side-by-side pitch for manufacturers and suppliers

use leptos::*;
use procure_core::content::{AudiencePitch, Audiences, Icon};
use procure_core::navigation::scroll_to;
use procure_core::{ButtonVariant, SectionAnchor};
use crate::components::{BenefitList, Button};
use crate::viewport::DomViewport;

/// Full class names per accent colour; Tailwind only sees literal strings
#[derive(Debug)]
struct Accent {
    glow: &'static str,
    badge: &'static str,
    tagline: &'static str,
    check: &'static str,
}

const BLUE: Accent = Accent {
    glow: "bg-blue-900/5",
    badge: "bg-blue-600/10",
    tagline: "text-blue-500",
    check: "text-blue-500",
};

const CYAN: Accent = Accent {
    glow: "bg-cyan-900/5",
    badge: "bg-cyan-600/10",
    tagline: "text-cyan-500",
    check: "text-cyan-500",
};

#[component]
pub fn AudienceSplit(audiences: &'static Audiences) -> impl IntoView {
    view! {
        <div class="grid lg:grid-cols-2 min-h-[600px]">
            <AudiencePanel
                anchor=SectionAnchor::Manufacturers
                pitch=&audiences.manufacturers
                icon=Icon::Factory
                cta_variant=ButtonVariant::Outline
                panel_class="border-b lg:border-b-0 lg:border-r border-white/5 bg-[#020617]"
                accent=&BLUE
            />
            <AudiencePanel
                anchor=SectionAnchor::Suppliers
                pitch=&audiences.suppliers
                icon=Icon::Cpu
                cta_variant=ButtonVariant::Secondary
                panel_class="bg-[#060b19]"
                accent=&CYAN
            />
        </div>
    }
}

#[component]
fn AudiencePanel(
    anchor: SectionAnchor,
    pitch: &'static AudiencePitch,
    icon: Icon,
    cta_variant: ButtonVariant,
    panel_class: &'static str,
    accent: &'static Accent,
) -> impl IntoView {
    let heading_margin = if pitch.tagline.is_some() { "mb-2" } else { "mb-6" };

    view! {
        <div
            id=anchor.id()
            class=format!(
                "relative p-12 lg:p-24 flex flex-col justify-center overflow-hidden group {}",
                panel_class,
            )
        >
            <div class=format!(
                "absolute inset-0 {} opacity-0 group-hover:opacity-100 transition-opacity duration-700",
                accent.glow,
            )></div>
            <div class="relative z-10">
                <div class=format!(
                    "w-12 h-12 {} rounded-xl flex items-center justify-center mb-6 text-2xl",
                    accent.badge,
                )>
                    {icon.glyph()}
                </div>
                <h2 class=format!("text-3xl font-bold text-white {}", heading_margin)>
                    {pitch.heading.as_str()}
                </h2>
                {pitch.tagline.as_deref().map(|tagline| view! {
                    <span class=format!(
                        "{} font-medium text-sm mb-6 block uppercase tracking-wider",
                        accent.tagline,
                    )>
                        {tagline}
                    </span>
                })}
                <p class="text-slate-400 mb-8 leading-relaxed">{pitch.pitch.as_str()}</p>
                <BenefitList benefits=pitch.benefits.as_slice() check_color=accent.check/>
                <Button
                    variant=cta_variant
                    class="w-fit"
                    on_click=move |_: ev::MouseEvent| {
                        scroll_to(SectionAnchor::Register, &DomViewport);
                    }
                >
                    {pitch.cta.as_str()}
                    <span class="ml-2">{Icon::ArrowRight.glyph()}</span>
                </Button>
            </div>
        </div>
    }
}
