//! Profile pages and the legacy redirect.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

use super::super::views;
use super::super::AppState;
use super::html_page;

/// Landing page.
pub async fn home(State(state): State<AppState>) -> Response {
    html_page(StatusCode::OK, views::home_page(&state.settings, &state.catalog))
}

pub async fn about(State(state): State<AppState>) -> Response {
    html_page(StatusCode::OK, views::about_page(&state.settings, &state.catalog))
}

pub async fn contact(State(state): State<AppState>) -> Response {
    html_page(StatusCode::OK, views::contact_page(&state.settings, &state.catalog))
}

/// `/project` moved to `/artifacts`.
pub async fn legacy_project(State(state): State<AppState>) -> impl IntoResponse {
    Redirect::permanent(&state.settings.url("/artifacts"))
}
