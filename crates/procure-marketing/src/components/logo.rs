//! Brand mark

use leptos::*;

#[component]
pub fn Logo(#[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <svg class=class viewBox="0 0 40 40" fill="none" xmlns="http://www.w3.org/2000/svg">
            <rect width="40" height="40" rx="12" fill="url(#logo_gradient)"/>
            <path d="M20 11L29 16.1962V26.5885L20 31.7846L11 26.5885V16.1962L20 11Z" stroke="white" stroke-width="2" stroke-opacity="0.5"/>
            <path d="M20 14V22M20 22L26 18M20 22L14 18M20 25.5V26.5" stroke="white" stroke-width="2.5" stroke-linecap="round" stroke-linejoin="round"/>
            <circle cx="20" cy="27.5" r="1.5" fill="white"/>
            <defs>
                <linearGradient id="logo_gradient" x1="0" y1="0" x2="40" y2="40" gradientUnits="userSpaceOnUse">
                    <stop stop-color="#2563EB"/>
                    <stop offset="1" stop-color="#06B6D4"/>
                </linearGradient>
            </defs>
        </svg>
    }
}
