//! Regional pilot rollout

use leptos::*;
use procure_core::content::{Icon, PilotPhase};
use procure_core::SectionAnchor;
use crate::components::{PhaseStep, Section};

#[component]
pub fn RegionalPilot(phases: &'static [PilotPhase]) -> impl IntoView {
    let last = phases.len().saturating_sub(1);

    view! {
        <Section anchor=SectionAnchor::Regional class="relative">
            <div class="absolute inset-0 bg-[radial-gradient(ellipse_at_top_right,_var(--tw-gradient-stops))] from-blue-900/20 via-[#020617] to-[#020617] pointer-events-none"></div>
            <div class="flex flex-col md:flex-row gap-12 items-center">
                <div class="flex-1 space-y-8">
                    <div>
                        <h2 class="text-3xl font-bold text-white mb-4">"Expanding Across Ontario"</h2>
                        <p class="text-slate-400 text-lg">
                            "Our pilot program is live in the Quinte Region, connecting local manufacturers "
                            "with regional suppliers to strengthen the local supply chain."
                        </p>
                    </div>
                    <div class="space-y-6">
                        {phases.iter().enumerate().map(|(i, phase)| view! {
                            <PhaseStep phase=phase last={i == last}/>
                        }).collect::<Vec<_>>()}
                    </div>
                </div>

                <ConnectivityMap/>
            </div>
        </Section>
    }
}

#[component]
fn ConnectivityMap() -> impl IntoView {
    view! {
        <div class="flex-1 w-full h-80 relative rounded-2xl overflow-hidden border border-slate-700 bg-slate-900/50 shadow-2xl">
            <div class="absolute inset-0 opacity-40 dot-grid"></div>

            <div class="absolute top-1/2 left-1/2 transform -translate-x-1/2 -translate-y-1/2">
                <div class="relative">
                    // Hub
                    <div class="absolute -top-6 -left-6 w-12 h-12 bg-blue-500/20 rounded-full animate-ping"></div>
                    <span class="text-3xl drop-shadow-[0_0_10px_rgba(59,130,246,0.8)]">{Icon::MapPin.glyph()}</span>

                    // Satellites
                    <div class="absolute top-[-80px] left-[60px]">
                        <div class="w-3 h-3 bg-cyan-400 rounded-full shadow-[0_0_10px_#22d3ee]"></div>
                        <div class="h-[80px] w-[1px] bg-gradient-to-t from-transparent via-cyan-500/30 to-transparent absolute top-3 -left-1.5 rotate-45 transform origin-top-left"></div>
                    </div>
                    <div class="absolute bottom-[-50px] left-[-90px]">
                        <div class="w-3 h-3 bg-cyan-400 rounded-full shadow-[0_0_10px_#22d3ee]"></div>
                    </div>
                    <div class="absolute top-[-40px] left-[-80px]">
                        <div class="w-3 h-3 bg-cyan-400 rounded-full shadow-[0_0_10px_#22d3ee]"></div>
                    </div>
                </div>
            </div>

            <div class="absolute bottom-4 left-4 bg-black/50 backdrop-blur px-3 py-1 rounded border border-white/10 text-xs font-mono text-slate-400">
                "CONNECTIVITY_LAYER: ON"
            </div>
        </div>
    }
}
