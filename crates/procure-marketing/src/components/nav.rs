//! Fixed navigation bar

use leptos::*;
use procure_core::navigation::NavigationState;
use procure_core::{ButtonSize, SectionAnchor, Subscription, Viewport};
use crate::components::{Button, Logo};
use crate::viewport::DomViewport;

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = create_rw_signal(NavigationState::new());

    // Subscribers are only notified when the flag flips
    let sync_scroll = move || {
        let offset = window().scroll_y().unwrap_or_default();
        let mut next = nav.get_untracked();
        if next.observe_scroll(offset) {
            nav.set(next);
        }
    };

    let scroll_listener = window_event_listener(ev::scroll, move |_| sync_scroll());
    let subscription = Subscription::new(move || scroll_listener.remove());
    on_cleanup(move || subscription.release());

    // A page restored mid-scroll gets the right panel before the first scroll event
    create_effect(move |_| sync_scroll());

    let follow = move |anchor: SectionAnchor| {
        nav.update(|state| {
            state.follow_link(anchor, &DomViewport);
        });
    };

    view! {
        <nav class=move || format!(
            "fixed top-0 w-full z-50 transition-all duration-300 {}",
            nav.with(NavigationState::panel_classes),
        )>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-20">
                    // Brand
                    <div
                        class="flex items-center space-x-3 cursor-pointer group"
                        on:click=move |_| DomViewport.scroll_to_top()
                    >
                        <div class="relative group-hover:scale-105 transition-transform duration-300">
                            <Logo class="w-10 h-10 shadow-lg shadow-blue-500/20"/>
                        </div>
                        <div class="flex flex-col">
                            <span class="font-bold text-lg leading-none text-white tracking-tight">
                                "Procure"<span class="text-cyan-400">"AI"</span>
                            </span>
                            <span class="text-[10px] text-slate-400 uppercase tracking-widest leading-none mt-1">
                                "Enterprise"
                            </span>
                        </div>
                    </div>

                    // Desktop Nav
                    <div class="hidden md:flex items-center space-x-1">
                        {SectionAnchor::DESKTOP_LINKS.into_iter().map(|anchor| view! {
                            <button
                                type="button"
                                data-nav-link=anchor.id()
                                class="px-4 py-2 text-slate-400 hover:text-white text-sm font-medium transition-colors hover:bg-white/5 rounded-lg"
                                on:click=move |_| follow(anchor)
                            >
                                {anchor.label()}
                            </button>
                        }).collect::<Vec<_>>()}
                    </div>

                    <div class="hidden md:flex items-center space-x-4">
                        <button
                            type="button"
                            class="text-slate-300 hover:text-white text-sm font-medium transition-colors"
                            on:click=move |_| follow(SectionAnchor::Register)
                        >
                            "Sign In"
                        </button>
                        <Button size=ButtonSize::Sm on_click=move |_: ev::MouseEvent| follow(SectionAnchor::Register)>
                            "Get Early Access"
                        </Button>
                    </div>

                    // Mobile menu button
                    <div class="md:hidden">
                        <button
                            type="button"
                            aria-label="Toggle menu"
                            class="text-slate-300 hover:text-white p-2 hover:bg-white/5 rounded-lg"
                            on:click=move |_| nav.update(NavigationState::toggle_menu)
                        >
                            <Show
                                when=move || nav.with(NavigationState::is_menu_open)
                                fallback=|| view! {
                                    <svg class="w-6 h-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                                    </svg>
                                }
                            >
                                <svg class="w-6 h-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                                </svg>
                            </Show>
                        </button>
                    </div>
                </div>
            </div>

            // Mobile menu
            <Show when=move || nav.with(NavigationState::is_menu_open)>
                <div class="md:hidden glass-panel border-b border-white/10 absolute w-full">
                    <div class="px-4 pt-4 pb-6 space-y-2">
                        {SectionAnchor::MOBILE_LINKS.into_iter().map(|anchor| view! {
                            <button
                                type="button"
                                data-mobile-link=anchor.id()
                                class="block w-full text-left px-4 py-3 text-base font-medium text-slate-300 hover:text-white hover:bg-white/5 rounded-lg"
                                on:click=move |_| follow(anchor)
                            >
                                {anchor.label()}
                            </button>
                        }).collect::<Vec<_>>()}
                        <div class="pt-4 mt-4 border-t border-white/10">
                            <Button full_width=true on_click=move |_: ev::MouseEvent| follow(SectionAnchor::Register)>
                                "Get Early Access"
                            </Button>
                        </div>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
