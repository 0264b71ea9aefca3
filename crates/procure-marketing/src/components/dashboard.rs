//! Illustrative product dashboard shown under the hero

use leptos::*;
use procure_core::content::{DashboardContent, DashboardStat, Icon, RequirementRow};
use procure_core::{ButtonSize, ButtonVariant};
use crate::components::Button;

const PLATFORM_ICONS: [Icon; 4] = [Icon::BarChart, Icon::Mail, Icon::Globe, Icon::TrendingUp];

#[component]
pub fn DashboardMockup(dashboard: &'static DashboardContent) -> impl IntoView {
    view! {
        <div class="relative mx-auto max-w-5xl mt-16 perspective-1000 text-left">
            // Glow
            <div class="absolute -inset-1 bg-gradient-to-r from-blue-600 via-cyan-500 to-blue-600 rounded-2xl blur-xl opacity-20 animate-pulse"></div>

            <div class="relative bg-[#0f172a] border border-slate-700/50 rounded-xl shadow-2xl overflow-hidden ring-1 ring-white/10">
                // Window controls
                <div class="h-10 bg-[#1e293b] border-b border-slate-700/50 flex items-center px-4 space-x-2">
                    <div class="w-3 h-3 rounded-full bg-red-500/20 border border-red-500/50"></div>
                    <div class="w-3 h-3 rounded-full bg-yellow-500/20 border border-yellow-500/50"></div>
                    <div class="w-3 h-3 rounded-full bg-green-500/20 border border-green-500/50"></div>
                    <div class="mx-auto bg-slate-800/50 px-32 py-1 rounded-md border border-slate-700/50">
                        <div class="w-32 h-2 bg-slate-700/50 rounded-full"></div>
                    </div>
                </div>

                <div class="flex h-[500px] relative">
                    <Sidebar dashboard=dashboard/>

                    <div class="flex-1 bg-[#0b1120] p-6 overflow-hidden">
                        <div class="flex justify-between items-center mb-8">
                            <div>
                                <h2 class="text-xl font-semibold text-white">"Procurement Overview"</h2>
                                <p class="text-sm text-slate-400">"Welcome back, system operational."</p>
                            </div>
                            <Button size=ButtonSize::Sm variant=ButtonVariant::Primary>"New RFQ +"</Button>
                        </div>

                        <div class="grid grid-cols-3 gap-4 mb-8">
                            {dashboard.stats.iter().map(|stat| view! { <StatTile stat=stat/> }).collect::<Vec<_>>()}
                        </div>

                        <div class="bg-[#1e293b]/30 border border-slate-800 rounded-xl overflow-hidden">
                            <div class="px-4 py-3 border-b border-slate-800 flex justify-between items-center bg-slate-900/50">
                                <h3 class="text-sm font-medium text-white">"Recent Requirements"</h3>
                                <span class="text-xs text-blue-400 cursor-pointer">"View All"</span>
                            </div>
                            <div class="divide-y divide-slate-800/50">
                                {dashboard.requirements.iter().map(|row| view! { <RequirementLine row=row/> }).collect::<Vec<_>>()}
                            </div>
                        </div>

                        // Insight toast
                        <div class="absolute bottom-6 right-6 w-72 bg-slate-800/90 backdrop-blur border border-blue-500/30 shadow-2xl rounded-xl p-4 animate-float">
                            <div class="flex items-start space-x-3">
                                <div class="w-8 h-8 rounded-lg bg-blue-600 flex items-center justify-center shrink-0">
                                    {Icon::Bot.glyph()}
                                </div>
                                <div>
                                    <h4 class="text-sm font-semibold text-white mb-1">"Procure AI Insight"</h4>
                                    <p class="text-xs text-slate-300 leading-relaxed">{dashboard.insight.as_str()}</p>
                                    <div class="mt-2 flex space-x-2">
                                        <button type="button" class="text-xs bg-blue-600 hover:bg-blue-500 text-white px-3 py-1 rounded transition-colors">"Accept"</button>
                                        <button type="button" class="text-xs bg-transparent hover:bg-white/10 text-slate-400 px-3 py-1 rounded transition-colors">"Dismiss"</button>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Sidebar(dashboard: &'static DashboardContent) -> impl IntoView {
    view! {
        <div class="w-60 bg-[#0f172a] border-r border-slate-800 p-4 flex-col hidden md:flex">
            <div class="space-y-6">
                <div class="space-y-1">
                    <div class="px-3 py-2 text-xs font-semibold text-slate-500 uppercase tracking-wider">"Platform"</div>
                    {dashboard.platform_items.iter().enumerate().map(|(i, item)| {
                        let class = if i == 0 {
                            "bg-blue-600/10 text-blue-400"
                        } else {
                            "text-slate-400 hover:text-slate-200 hover:bg-white/5"
                        };
                        view! {
                            <div data-sidebar-item class=format!("flex items-center space-x-3 px-3 py-2 rounded-lg text-sm font-medium cursor-pointer {}", class)>
                                <span class="text-xs">{PLATFORM_ICONS.get(i).map(|icon| icon.glyph())}</span>
                                <span>{item.as_str()}</span>
                            </div>
                        }
                    }).collect::<Vec<_>>()}
                </div>
                <div class="space-y-1">
                    <div class="px-3 py-2 text-xs font-semibold text-slate-500 uppercase tracking-wider">"Workflow"</div>
                    {dashboard.workflow_items.iter().map(|item| view! {
                        <div data-sidebar-item class="flex items-center space-x-3 px-3 py-2 rounded-lg text-sm font-medium text-slate-400 hover:text-slate-200 hover:bg-white/5 cursor-pointer">
                            <div class="w-4 h-4 rounded bg-slate-800"></div>
                            <span>{item.as_str()}</span>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </div>

            <div class="mt-auto pt-4 border-t border-slate-800">
                <div class="flex items-center space-x-3 px-2">
                    <div class="w-8 h-8 rounded-full bg-gradient-to-tr from-blue-500 to-cyan-500"></div>
                    <div class="text-xs">
                        <div class="text-white font-medium">"Acme Mfg."</div>
                        <div class="text-slate-500">"Enterprise Plan"</div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn StatTile(stat: &'static DashboardStat) -> impl IntoView {
    view! {
        <div data-stat-tile class="bg-[#1e293b]/50 border border-slate-700/50 p-4 rounded-xl">
            <div class="flex justify-between items-start mb-2">
                <span class="text-xs text-slate-400 font-medium">{stat.label.as_str()}</span>
                <span class="text-xs text-slate-500">{stat.icon.glyph()}</span>
            </div>
            <div class=format!("text-2xl font-bold {}", stat.tone.text_class())>{stat.value.as_str()}</div>
        </div>
    }
}

#[component]
fn RequirementLine(row: &'static RequirementRow) -> impl IntoView {
    view! {
        <div data-requirement=row.id.as_str() class="px-4 py-3 flex items-center justify-between hover:bg-white/5 transition-colors cursor-pointer group">
            <div class="flex items-center space-x-3">
                <div class="w-8 h-8 rounded bg-slate-800 flex items-center justify-center text-slate-400 group-hover:text-blue-400 transition-colors">
                    {Icon::Factory.glyph()}
                </div>
                <div>
                    <div class="text-sm text-slate-200 font-medium">{row.item.as_str()}</div>
                    <div class="text-xs text-slate-500">{row.id.as_str()}</div>
                </div>
            </div>
            <div class="flex items-center space-x-4">
                <span class=format!("text-xs px-2 py-1 rounded border {}", row.badge_classes())>{row.status.as_str()}</span>
                <span class="text-xs text-slate-600 font-mono">{row.age.as_str()}</span>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use procure_core::SiteContent;

    fn render() -> String {
        let dashboard = &SiteContent::shared().dashboard;
        leptos::ssr::render_to_string(move || view! { <DashboardMockup dashboard=dashboard/> }).to_string()
    }

    #[test]
    fn test_renders_one_tile_per_stat() {
        let dashboard = &SiteContent::shared().dashboard;
        let html = render();
        assert_eq!(html.matches("data-stat-tile").count(), dashboard.stats.len());
        assert!(html.contains("$14.2k"));
        assert!(html.contains("text-green-400"));
    }

    #[test]
    fn test_renders_one_line_per_requirement() {
        let dashboard = &SiteContent::shared().dashboard;
        let html = render();
        assert_eq!(html.matches("data-requirement=").count(), dashboard.requirements.len());
        for row in &dashboard.requirements {
            assert!(html.contains(&format!("data-requirement=\"{}\"", row.id)));
        }
    }

    #[test]
    fn test_sidebar_lists_platform_and_workflow_items() {
        let dashboard = &SiteContent::shared().dashboard;
        let html = render();
        assert_eq!(
            html.matches("data-sidebar-item").count(),
            dashboard.platform_items.len() + dashboard.workflow_items.len()
        );
        assert!(html.contains("Supplier Network"));
        assert!(html.contains("Invoices"));
    }
}
