//! Procure AI Marketing Site
//!
//! A Leptos SSR marketing website.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), procure_marketing::ServerError> {
    use axum::Router;
    use leptos::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use procure_core::SiteContent;
    use procure_marketing::app::App;
    use procure_marketing::{ServerError, SiteSettings};
    use tower_http::services::ServeDir;
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let settings = SiteSettings::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&settings.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Refuse to serve a page built from broken content
    let content = SiteContent::embedded()?;
    tracing::info!(
        features = content.features.len(),
        roadmap_phases = content.roadmap.len(),
        "Site content loaded"
    );

    let conf = get_configuration(None)
        .await
        .map_err(|err| ServerError::Config(err.to_string()))?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, App)
        .nest_service("/assets", ServeDir::new(&settings.assets_dir))
        .fallback(leptos_axum::file_and_error_handler(App))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    tracing::info!("Marketing site listening on http://{}", addr);
    axum::serve(listener, app.into_make_service())
        .await
        .map_err(ServerError::Serve)?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // The browser bundle starts from `procure_marketing::hydrate`.
}
