//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The portfolio page is rendered by Leptos SSR at `/`; the hydrate bundle
//! is served from `/pkg`. Anything else falls through to the public
//! directory, which is where the résumé lives. A missing résumé is a plain
//! 404 from `ServeDir`.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::config::LeptosOptions;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Full application router: health check, SSR page, bundle and public files.
pub fn app(leptos_options: LeptosOptions, public_dir: &Path) -> Router {
    let routes = generate_route_list(client::app::App);

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    let pkg_dir = site_root.join(leptos_options.site_pkg_dir.as_ref());

    Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .fallback_service(ServeDir::new(public_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
