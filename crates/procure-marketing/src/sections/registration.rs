//! Early-access registration form

use leptos::*;
use procure_core::registration::{Acknowledgement, LocalAcknowledger, RegistrationState, RegistrationTab};
use procure_core::{ButtonVariant, SectionAnchor, SectionBackground};
use crate::components::{Button, Section};

const LABEL: &str = "text-xs font-semibold text-slate-400 uppercase";
const INPUT: &str = "w-full bg-slate-800/50 border border-slate-700 rounded px-3 py-2 text-white focus:outline-none focus:ring-1 transition-colors placeholder-slate-600";
const INPUT_FOCUS: &str = "focus:border-blue-500 focus:ring-blue-500";

#[component]
pub fn Registration(perks: &'static [String]) -> impl IntoView {
    let state = create_rw_signal(RegistrationState::new());
    let acknowledgement = create_rw_signal(None::<Acknowledgement>);
    // Memoized so typing into a field does not rebuild the tab-specific input
    let tab = create_memo(move |_| state.with(RegistrationState::tab));

    let select = move |next: RegistrationTab| {
        tracing::debug!(tab = %next, "registration tab selected");
        state.update(|s| s.select_tab(next));
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match state.with_untracked(|s| s.submit(&LocalAcknowledger)) {
            Ok(ack) => acknowledgement.set(Some(ack)),
            Err(err) => tracing::error!(error = %err, "registration was not accepted"),
        }
    };

    let reset = move |_: ev::MouseEvent| {
        state.set(RegistrationState::new());
        acknowledgement.set(None);
    };

    view! {
        <Section anchor=SectionAnchor::Register background=SectionBackground::Gradient>
            <div class="max-w-4xl mx-auto">
                <div class="glass-panel rounded-2xl overflow-hidden border border-white/10 shadow-2xl relative">
                    <div class="absolute top-0 left-0 w-full h-1 bg-gradient-to-r from-blue-500 via-cyan-400 to-blue-500"></div>

                    <div class="grid md:grid-cols-5 min-h-[500px]">
                        <Perks perks=perks/>

                        // Form
                        <div class="col-span-3 p-8 md:p-10 bg-[#0f172a]">
                            <div class="text-center mb-8">
                                <h2 class="text-2xl font-bold text-white">"Get Early Access"</h2>
                            </div>

                            <Show
                                when=move || acknowledgement.with(Option::is_none)
                                fallback=move || view! {
                                    <div class="text-center py-12" role="status" data-acknowledgement>
                                        <div class="text-5xl mb-4 text-cyan-400">"✓"</div>
                                        <h3 class="text-2xl font-bold text-white mb-2">"Thank You!"</h3>
                                        <p class="text-slate-400 mb-6">
                                            {move || acknowledgement.with(|ack| ack.as_ref().map(|ack| ack.message.clone()))}
                                        </p>
                                        <Button variant=ButtonVariant::Ghost on_click=reset>
                                            "Register another company"
                                        </Button>
                                    </div>
                                }
                            >
                                <div class="flex p-1 bg-slate-800 rounded-lg mb-8" role="tablist">
                                    {RegistrationTab::ALL.into_iter().map(|option| view! {
                                        <button
                                            type="button"
                                            role="tab"
                                            aria-selected=move || (tab.get() == option).to_string()
                                            class=move || format!(
                                                "flex-1 py-2 text-sm font-medium rounded-md transition-all {}",
                                                option.selector_classes(tab.get()),
                                            )
                                            on:click=move |_| select(option)
                                        >
                                            {option.label()}
                                        </button>
                                    }).collect::<Vec<_>>()}
                                </div>

                                <form class="space-y-5" on:submit=on_submit>
                                    <div class="space-y-4">
                                        <div class="grid grid-cols-2 gap-4">
                                            <div class="space-y-1">
                                                <label for="company_name" class=LABEL>"Company"</label>
                                                <input
                                                    id="company_name"
                                                    type="text"
                                                    class=format!("{} {}", INPUT, INPUT_FOCUS)
                                                    placeholder="Acme Inc."
                                                    on:input=move |ev| state.update(|s| s.form_mut().company_name = event_target_value(&ev))
                                                    prop:value=move || state.with(|s| s.form().company_name.clone())
                                                />
                                            </div>
                                            <div class="space-y-1">
                                                <label for="contact_name" class=LABEL>"Contact Name"</label>
                                                <input
                                                    id="contact_name"
                                                    type="text"
                                                    class=format!("{} {}", INPUT, INPUT_FOCUS)
                                                    placeholder="Jane Smith"
                                                    on:input=move |ev| state.update(|s| s.form_mut().contact_name = event_target_value(&ev))
                                                    prop:value=move || state.with(|s| s.form().contact_name.clone())
                                                />
                                            </div>
                                        </div>

                                        <div class="space-y-1">
                                            <label for="email" class=LABEL>"Work Email"</label>
                                            <input
                                                id="email"
                                                type="email"
                                                class=format!("{} {}", INPUT, INPUT_FOCUS)
                                                placeholder="jane@company.com"
                                                on:input=move |ev| state.update(|s| s.form_mut().email = event_target_value(&ev))
                                                prop:value=move || state.with(|s| s.form().email.clone())
                                            />
                                        </div>
                                    </div>

                                    {move || view! { <AudienceFields tab=tab.get() state=state/> }}
                                </form>
                            </Show>
                        </div>
                    </div>
                </div>
            </div>
        </Section>
    }
}

/// The audience-specific input and the matching submit button
#[component]
fn AudienceFields(tab: RegistrationTab, state: RwSignal<RegistrationState>) -> impl IntoView {
    let field = tab.audience_field();

    view! {
        <div class="space-y-1" data-audience-field=field.name>
            <label for=field.name class=LABEL>{field.label}</label>
            <input
                id=field.name
                type="text"
                class=format!("{} {}", INPUT, field.focus_classes)
                placeholder=field.placeholder
                on:input=move |ev| state.update(|s| {
                    s.form_mut().set_audience_value(tab, event_target_value(&ev));
                })
                prop:value=move || state.with(|s| s.form().audience_value(tab).to_string())
            />
        </div>

        <Button submit=true full_width=true variant=tab.submit_variant() class="mt-6">
            {tab.submit_label()}
        </Button>
    }
}

/// "Why Join Now?" side panel
#[component]
fn Perks(perks: &'static [String]) -> impl IntoView {
    view! {
        <div class="hidden md:block col-span-2 bg-slate-900/50 p-8 border-r border-white/5 relative overflow-hidden">
            <div class="absolute top-0 right-0 -mr-16 -mt-16 w-64 h-64 bg-blue-500/20 blur-[80px] rounded-full pointer-events-none"></div>
            <div class="relative z-10 h-full flex flex-col justify-between">
                <div>
                    <h3 class="text-xl font-bold text-white mb-4">"Why Join Now?"</h3>
                    <ul class="space-y-4">
                        {perks.iter().map(|perk| view! {
                            <li class="flex items-start space-x-3 text-slate-300 text-sm">
                                <div class="mt-1 w-1.5 h-1.5 rounded-full bg-blue-400"></div>
                                <span>{perk.as_str()}</span>
                            </li>
                        }).collect::<Vec<_>>()}
                    </ul>
                </div>
                <div class="text-xs text-slate-500">"Trusted by 50+ companies in the Quinte Region."</div>
            </div>
        </div>
    }
}
