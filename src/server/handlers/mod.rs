//! HTTP request handlers for the web server.

mod api;
mod artifacts;
mod pages;
mod static_files;

// Re-export handlers for use by the router
pub use api::{api_artifact, api_artifacts};
pub use artifacts::{artifact_detail, list_artifacts};
pub use pages::{about, contact, home, legacy_project};
pub use static_files::{serve_css, serve_js};

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// Turn a rendered page into a response, logging template failures.
fn html_page(status: StatusCode, rendered: askama::Result<String>) -> Response {
    match rendered {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Failed to render page: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(format!("<p>Failed to render page: {}</p>", e)),
            )
                .into_response()
        }
    }
}
