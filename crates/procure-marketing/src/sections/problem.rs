//! The problem: MRO procurement today

use leptos::*;
use procure_core::content::{ContentItem, Icon};
use procure_core::SectionAnchor;
use crate::components::{Eyebrow, ProblemPoint, Section};

#[component]
pub fn Problem(points: &'static [ContentItem]) -> impl IntoView {
    view! {
        <Section anchor=SectionAnchor::Problem class="bg-[#020617]">
            <div class="grid md:grid-cols-2 gap-16 items-center">
                <div>
                    <Eyebrow icon=Icon::AlertCircle label="The Bottleneck" color="text-red-400"/>
                    <h2 class="text-3xl md:text-4xl font-bold text-white mb-6 leading-tight">
                        "MRO Procurement Is "
                        <br/>
                        <span class="text-slate-500">"Slow, Fragmented, Costly."</span>
                    </h2>
                    <p class="text-slate-400 text-lg mb-8 leading-relaxed">
                        "Manufacturing teams waste countless hours on manual RFQ emails, chasing suppliers, "
                        "and comparing disorganized quotes while machines sit idle."
                    </p>
                    <div class="space-y-6">
                        {points.iter().map(|item| view! { <ProblemPoint item=item/> }).collect::<Vec<_>>()}
                    </div>
                </div>

                <div class="relative">
                    <div class="absolute inset-0 bg-red-500/10 blur-[100px] rounded-full"></div>
                    <div class="glass-card p-8 rounded-2xl relative border border-white/5">
                        // Email thread sketch
                        <div class="space-y-4 opacity-80 pointer-events-none select-none">
                            <div class="bg-slate-900/80 p-4 rounded border border-slate-700/50">
                                <div class="h-2 w-20 bg-slate-700 rounded mb-2"></div>
                                <div class="h-2 w-full bg-slate-800 rounded"></div>
                            </div>
                            <div class="bg-slate-900/80 p-4 rounded border border-slate-700/50 ml-8">
                                <div class="h-2 w-20 bg-blue-900/50 rounded mb-2"></div>
                                <div class="h-2 w-full bg-slate-800 rounded"></div>
                            </div>
                            <div class="bg-slate-900/80 p-4 rounded border border-slate-700/50">
                                <div class="h-2 w-20 bg-slate-700 rounded mb-2"></div>
                                <div class="h-2 w-3/4 bg-slate-800 rounded"></div>
                            </div>
                        </div>
                        <div class="absolute inset-0 flex items-center justify-center">
                            <div class="bg-red-500/90 text-white px-6 py-3 rounded-full font-bold shadow-[0_0_30px_rgba(239,68,68,0.5)] transform -rotate-12 border border-white/20 backdrop-blur-sm">
                                "Inefficient"
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </Section>
    }
}
