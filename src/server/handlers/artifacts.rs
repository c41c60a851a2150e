//! Artifact catalog and detail handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
};
use serde::Deserialize;

use super::super::views;
use super::super::AppState;
use super::html_page;
use crate::catalog::SortOrder;
use crate::models::SectionState;

/// Query params for the catalog page.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CatalogParams {
    pub sort: Option<String>,
}

impl CatalogParams {
    /// Requested order, or `fallback` when absent or unrecognised.
    pub fn order(&self, fallback: SortOrder) -> SortOrder {
        match self.sort.as_deref() {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::debug!("{}; using {}", e, fallback.as_str());
                fallback
            }),
            None => fallback,
        }
    }
}

/// Query params for the detail page: comma-separated expanded sections.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct DetailParams {
    pub open: Option<String>,
}

/// Artifact catalog grid.
pub async fn list_artifacts(
    State(state): State<AppState>,
    Query(params): Query<CatalogParams>,
) -> Response {
    let order = params.order(state.settings.catalog_order);
    html_page(
        StatusCode::OK,
        views::catalog_page(&state.settings, &state.catalog, order),
    )
}

/// Artifact detail page.
pub async fn artifact_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<DetailParams>,
) -> Response {
    let artifact = match state.catalog.get_by_param(&id) {
        Some(a) => a,
        None => {
            tracing::debug!("No artifact for id {:?}", id);
            return html_page(StatusCode::NOT_FOUND, views::not_found_page(&state.settings));
        }
    };

    let sections = params
        .open
        .as_deref()
        .map(SectionState::from_query)
        .unwrap_or_default();

    html_page(
        StatusCode::OK,
        views::artifact_page(&state.settings, artifact, &sections),
    )
}
