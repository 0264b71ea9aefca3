//! Procure AI Marketing Site
//!
//! Single-page Leptos site. Built with `ssr` for the axum server and with
//! `hydrate` for the browser bundle.

pub mod app;
pub mod components;
pub mod pages;
pub mod sections;
pub mod viewport;

#[cfg(feature = "ssr")]
mod error;
#[cfg(feature = "ssr")]
mod settings;

#[cfg(feature = "ssr")]
pub use error::ServerError;
#[cfg(feature = "ssr")]
pub use settings::SiteSettings;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    leptos::mount_to_body(app::App);
}
