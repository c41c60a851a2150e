//! Router configuration for the web server.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use super::handlers;
use super::AppState;

/// Create the main router with all routes, mounted under the configured base path.
pub fn create_router(state: AppState) -> Router {
    let base_path = state.settings.base_path.clone();

    let site = Router::new()
        // Pages
        .route("/", get(handlers::home))
        .route("/artifacts", get(handlers::list_artifacts))
        .route("/artifacts/:id", get(handlers::artifact_detail))
        .route("/about", get(handlers::about))
        .route("/contact", get(handlers::contact))
        // Old bookmarks pointed at the single-project page
        .route("/project", get(handlers::legacy_project))
        // JSON API
        .route("/api/artifacts", get(handlers::api_artifacts))
        .route("/api/artifacts/:id", get(handlers::api_artifact))
        // Static assets (CSS/JS)
        .route("/static/style.css", get(handlers::serve_css))
        .route("/static/site.js", get(handlers::serve_js))
        .layer(CorsLayer::permissive());

    if base_path.is_empty() {
        site.with_state(state)
    } else {
        // A nested "/" only matches the bare prefix, so the trailing-slash
        // form of the home page is registered on the outer router.
        Router::new()
            .route(&format!("{}/", base_path), get(handlers::home))
            .nest(&base_path, site)
            .with_state(state)
    }
}
