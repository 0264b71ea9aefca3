//! Button component

use leptos::*;
use procure_core::style::button_classes;
use procure_core::{ButtonSize, ButtonVariant};

#[component]
pub fn Button(
    #[prop(optional, into)] variant: MaybeSignal<ButtonVariant>,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] full_width: bool,
    /// Render as a form submit button
    #[prop(optional)] submit: bool,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] on_click: Option<Callback<ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let classes = move || button_classes(variant.get(), size, full_width, &class);

    view! {
        <button
            type=if submit { "submit" } else { "button" }
            class=classes
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
