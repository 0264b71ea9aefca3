//! Site footer

use leptos::*;
use procure_core::content::FooterContent;
use crate::components::Logo;

#[component]
pub fn Footer(footer: &'static FooterContent) -> impl IntoView {
    view! {
        <footer class="bg-[#020617] border-t border-slate-800 pt-20 pb-10 px-4 sm:px-6 lg:px-8">
            <div class="max-w-7xl mx-auto">
                <div class="grid grid-cols-2 md:grid-cols-4 gap-8 mb-16">
                    <div class="col-span-2 md:col-span-1">
                        <div class="flex items-center space-x-3 mb-4">
                            <Logo class="w-8 h-8"/>
                            <span class="font-bold text-xl text-white">"Procure AI"</span>
                        </div>
                        <p class="text-slate-500 text-sm leading-relaxed mb-6">{footer.tagline.as_str()}</p>
                        // Social placeholders
                        <div class="flex space-x-4">
                            <div class="w-8 h-8 rounded-full bg-slate-800 hover:bg-slate-700 cursor-pointer"></div>
                            <div class="w-8 h-8 rounded-full bg-slate-800 hover:bg-slate-700 cursor-pointer"></div>
                            <div class="w-8 h-8 rounded-full bg-slate-800 hover:bg-slate-700 cursor-pointer"></div>
                        </div>
                    </div>

                    {footer.columns.iter().map(|column| view! {
                        <div data-footer-column>
                            <h4 class="text-white font-semibold mb-4">{column.heading.as_str()}</h4>
                            <ul class="space-y-2 text-sm text-slate-400">
                                {column.links.iter().map(|link| view! {
                                    <li class="hover:text-blue-400 cursor-pointer">{link.as_str()}</li>
                                }).collect::<Vec<_>>()}
                            </ul>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>

                <div class="pt-8 border-t border-slate-900 flex flex-col md:flex-row justify-between items-center gap-4">
                    <div class="text-slate-600 text-xs">
                        "© " {footer.copyright_year} " " {footer.company.as_str()} " All rights reserved."
                    </div>
                    <div class="flex items-center space-x-2 text-xs text-slate-600">
                        <div class="w-2 h-2 rounded-full bg-green-500"></div>
                        <span>"Systems Operational"</span>
                    </div>
                </div>
            </div>
        </footer>
    }
}
