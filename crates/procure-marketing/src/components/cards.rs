//! Card components for the landing page

use leptos::*;
use procure_core::content::{ContentItem, Icon, PilotPhase, RoadmapPhase};

/// Small uppercase label above a section heading
#[component]
pub fn Eyebrow(icon: Icon, label: &'static str, color: &'static str) -> impl IntoView {
    view! {
        <div class=format!(
            "inline-flex items-center space-x-2 {} font-semibold mb-4 tracking-wide uppercase text-sm",
            color,
        )>
            <span>{icon.glyph()}</span>
            <span>{label}</span>
        </div>
    }
}

#[component]
pub fn ProblemPoint(item: &'static ContentItem) -> impl IntoView {
    view! {
        <div class="flex items-start space-x-4" data-problem>
            <div class="bg-slate-800 p-2 rounded-lg text-slate-300 shrink-0 mt-1">
                <span class="text-xl">{item.icon.glyph()}</span>
            </div>
            <div>
                <h4 class="text-white font-semibold">{item.title.as_str()}</h4>
                <p class="text-slate-500 text-sm mt-1">{item.description.as_str()}</p>
            </div>
        </div>
    }
}

#[component]
pub fn FeatureCard(item: &'static ContentItem) -> impl IntoView {
    view! {
        <div
            class="glass-panel p-8 rounded-xl hover:bg-slate-800/50 transition-all duration-300 group border border-white/5 hover:border-blue-500/30"
            data-feature
        >
            <div class="w-12 h-12 bg-slate-800 rounded-lg flex items-center justify-center text-blue-400 mb-6 group-hover:scale-110 group-hover:bg-blue-600 group-hover:text-white transition-all duration-300">
                <span class="text-2xl">{item.icon.glyph()}</span>
            </div>
            <h3 class="text-xl font-semibold text-white mb-3">{item.title.as_str()}</h3>
            <p class="text-slate-400 text-sm leading-relaxed">{item.description.as_str()}</p>
        </div>
    }
}

/// Checked list of audience benefits
#[component]
pub fn BenefitList(benefits: &'static [String], check_color: &'static str) -> impl IntoView {
    view! {
        <ul class="space-y-4 mb-8">
            {benefits.iter().map(|benefit| view! {
                <li class="flex items-center text-slate-300" data-benefit>
                    <span class=format!("w-5 h-5 mr-3 shrink-0 {}", check_color)>{Icon::Check.glyph()}</span>
                    {benefit.as_str()}
                </li>
            }).collect::<Vec<_>>()}
        </ul>
    }
}

/// One step of the regional rollout timeline
#[component]
pub fn PhaseStep(phase: &'static PilotPhase, last: bool) -> impl IntoView {
    let active = phase.status.is_active();
    let (dot, title, label) = if active {
        (
            "w-4 h-4 rounded-full bg-blue-500 border-4 border-blue-500/30 group-hover:scale-110 transition-transform",
            "text-white font-bold text-lg",
            "text-sm text-blue-400 font-mono mt-1",
        )
    } else {
        (
            "w-4 h-4 rounded-full bg-cyan-500/50 border-4 border-cyan-500/20",
            "text-slate-300 font-bold text-lg group-hover:text-white transition-colors",
            "text-sm text-cyan-500/70 font-mono mt-1",
        )
    };
    let body = if last { "" } else { "pb-8" };

    view! {
        <div class="flex group" data-pilot-phase>
            <div class="flex flex-col items-center mr-4">
                <div class=dot></div>
                {(!last).then(|| view! { <div class="w-0.5 h-full bg-blue-500/30 my-2"></div> })}
            </div>
            <div class=body>
                <h4 class=title>{phase.title.as_str()}</h4>
                <p class=label>{phase.status_label.as_str()}</p>
                <p class="text-slate-500 text-sm mt-2">{phase.locations.as_str()}</p>
            </div>
        </div>
    }
}

#[component]
pub fn RoadmapCard(phase: &'static RoadmapPhase, position: usize) -> impl IntoView {
    let active = phase.status.is_active();
    let (card, year) = if active {
        ("bg-blue-900/10 border-blue-500/50", "text-blue-400")
    } else {
        ("bg-slate-900/40 border-slate-800", "text-slate-600")
    };

    view! {
        <div
            class=format!("relative p-6 rounded-xl border transition-all {}", card)
            data-roadmap-phase=position
        >
            {active.then(|| view! {
                <span class="absolute top-4 right-4 flex h-3 w-3">
                    <span class="animate-ping absolute inline-flex h-full w-full rounded-full bg-blue-400 opacity-75"></span>
                    <span class="relative inline-flex rounded-full h-3 w-3 bg-blue-500"></span>
                </span>
            })}
            <div class=format!("text-2xl font-bold mb-2 {}", year)>{phase.year.as_str()}</div>
            <h3 class="text-white font-semibold mb-2">{phase.title.as_str()}</h3>
            <p class="text-slate-400 text-sm leading-relaxed">{phase.description.as_str()}</p>
        </div>
    }
}
