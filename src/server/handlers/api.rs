//! JSON API handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use super::super::views::detail_url;
use super::super::AppState;
use super::artifacts::CatalogParams;
use crate::models::{Artifact, ArtifactKind, SectionId};

/// Catalog entry in the list response.
#[derive(Debug, Serialize)]
pub struct ArtifactSummary<'a> {
    pub id: u32,
    pub title: &'a str,
    pub icon: &'a str,
    #[serde(rename = "type")]
    pub kind: ArtifactKind,
    pub description: &'a str,
    pub technologies: &'a [String],
    pub url: String,
}

/// Full artifact plus the sections its detail page shows.
#[derive(Debug, Serialize)]
pub struct ArtifactResponse<'a> {
    #[serde(flatten)]
    pub artifact: &'a Artifact,
    pub sections: Vec<SectionId>,
    pub url: String,
}

/// List artifacts in catalog order.
pub async fn api_artifacts(
    State(state): State<AppState>,
    Query(params): Query<CatalogParams>,
) -> Response {
    let order = params.order(state.settings.catalog_order);
    let items: Vec<ArtifactSummary> = state
        .catalog
        .list(order)
        .into_iter()
        .map(|a| ArtifactSummary {
            id: a.id,
            title: &a.title,
            icon: &a.icon,
            kind: a.kind,
            description: &a.description,
            technologies: &a.technologies,
            url: detail_url(&state.settings, a.id),
        })
        .collect();

    Json(items).into_response()
}

/// One artifact by id.
pub async fn api_artifact(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.catalog.get_by_param(&id) {
        Some(artifact) => Json(ArtifactResponse {
            artifact,
            sections: artifact.sections(),
            url: detail_url(&state.settings, artifact.id),
        })
        .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({
                "error": format!("Artifact not found: {}", id),
            })),
        )
            .into_response(),
    }
}
