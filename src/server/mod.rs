//! Web server for browsing the portfolio.
//!
//! Serves the home, catalog, detail, about and contact pages, a small
//! read-only JSON API, and the bundled CSS/JS assets.

mod assets;
mod handlers;
mod routes;
mod template_structs;
pub mod views;

pub use assets::{CSS, JS};
pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Settings;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(settings: Settings, catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            settings: Arc::new(settings),
        }
    }
}

/// Start the web server.
pub async fn serve(state: AppState, host: &str, port: u16) -> anyhow::Result<()> {
    let artifact_count = state.catalog.len();
    let home = views::home_url(&state.settings);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!(
        "Starting server at http://{}{} ({} artifacts)",
        addr,
        home,
        artifact_count
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn setup_test_app() -> axum::Router {
        setup_test_app_with(Settings::default())
    }

    fn setup_test_app_with(settings: Settings) -> axum::Router {
        let catalog = Catalog::builtin().unwrap();
        create_router(AppState::new(settings, catalog))
    }

    /// Text as askama's HTML escaper writes it.
    fn askama_escaped(s: &str) -> String {
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&#x27;")
    }

    async fn get(app: axum::Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_home_page() {
        let (status, html) = get(setup_test_app(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Sugyeong Hong"));
        assert!(html.contains("Technical Skills"));
    }

    #[tokio::test]
    async fn test_every_artifact_has_a_detail_page() {
        let catalog = Catalog::builtin().unwrap();
        for artifact in catalog.list(crate::catalog::SortOrder::Listed) {
            let (status, html) =
                get(setup_test_app(), &format!("/artifacts/{}", artifact.id)).await;
            assert_eq!(status, StatusCode::OK, "artifact {}", artifact.id);
            let heading = format!(
                "<h1 class=\"artifact-detail-title\">{}</h1>",
                askama_escaped(&artifact.title)
            );
            assert!(html.contains(&heading), "artifact {} missing title", artifact.id);
            assert!(html.contains(&format!(
                "<title>{} - Portfolio</title>",
                askama_escaped(&artifact.title)
            )));
            for tech in &artifact.technologies {
                assert!(
                    html.contains(&format!("<span class=\"tech-tag\">{}</span>", tech)),
                    "artifact {} missing tag {}",
                    artifact.id,
                    tech
                );
            }
        }
    }

    #[tokio::test]
    async fn test_unknown_artifact_is_not_found() {
        for uri in ["/artifacts/999", "/artifacts/abc", "/artifacts/-1", "/artifacts/02"] {
            let (status, html) = get(setup_test_app(), uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
            assert!(html.contains("Artifact Not Found"));
            assert!(html.contains("href=\"/artifacts\""));
        }
    }

    #[tokio::test]
    async fn test_catalog_sorting() {
        let (status, html) = get(setup_test_app(), "/artifacts?sort=desc").await;
        assert_eq!(status, StatusCode::OK);
        let six = html.find("data-id=\"6\"").unwrap();
        let one = html.find("data-id=\"1\"").unwrap();
        assert!(six < one);

        let (_, html) = get(setup_test_app(), "/artifacts?sort=asc").await;
        let six = html.find("data-id=\"6\"").unwrap();
        let one = html.find("data-id=\"1\"").unwrap();
        assert!(one < six);
    }

    #[tokio::test]
    async fn test_invalid_sort_falls_back_to_default() {
        let (status, html) = get(setup_test_app(), "/artifacts?sort=sideways").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("data-id=\"1\""));
    }

    #[tokio::test]
    async fn test_sections_start_collapsed() {
        let (_, html) = get(setup_test_app(), "/artifacts/1").await;
        assert!(html.contains("id=\"section-introduction\""));
        assert!(html.contains("<div class=\"section-body\" hidden>"));
        assert!(html.contains("href=\"/artifacts/1?open=introduction#section-introduction\""));
    }

    #[tokio::test]
    async fn test_open_query_expands_one_section() {
        let (_, html) = get(setup_test_app(), "/artifacts/1?open=lab-log").await;
        // The lab log body is rendered visible, everything else stays hidden.
        let lab_log = html.find("id=\"section-lab-log\"").unwrap();
        let rest = &html[lab_log..];
        let body = rest.find("<div class=\"section-body\"").unwrap();
        assert!(rest[body..].starts_with("<div class=\"section-body\">"));
        assert!(html.contains("<table class=\"lab-log-table\">"));

        // Its toggle collapses it again; another section's toggle adds to the set.
        assert!(html.contains("href=\"/artifacts/1#section-lab-log\""));
        assert!(html.contains("?open=introduction%2Clab-log#section-introduction"));
    }

    #[tokio::test]
    async fn test_unknown_open_slugs_are_ignored() {
        let (status, html) = get(setup_test_app(), "/artifacts/2?open=bogus,comparison").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Machine Learning vs Deep Learning"));
        assert!(html.contains("<td class=\"aspect-cell\">"));
    }

    #[tokio::test]
    async fn test_report_link_label() {
        let (_, html) = get(setup_test_app(), "/artifacts/2").await;
        assert!(html.contains("View Full Report →"));
        let (_, html) = get(setup_test_app(), "/artifacts/1").await;
        assert!(html.contains("View Full Project →"));
    }

    #[tokio::test]
    async fn test_legacy_project_redirect() {
        let response = setup_test_app()
            .oneshot(Request::builder().uri("/project").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/artifacts");
    }

    #[tokio::test]
    async fn test_about_and_contact() {
        let (status, html) = get(setup_test_app(), "/about").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("About Sugyeong Hong"));

        let (status, html) = get(setup_test_app(), "/contact").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("<h1>Contact</h1>"));
    }

    #[tokio::test]
    async fn test_api_artifacts() {
        let (status, body) = get(setup_test_app(), "/api/artifacts?sort=desc").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        let items = json.as_array().unwrap();
        assert_eq!(items.len(), 6);
        assert_eq!(items[0]["id"], 6);
        assert_eq!(items[0]["url"], "/artifacts/6");
    }

    #[tokio::test]
    async fn test_api_artifact_detail() {
        let (status, body) = get(setup_test_app(), "/api/artifacts/2").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["type"], "report");
        assert!(json["sections"]
            .as_array()
            .unwrap()
            .iter()
            .any(|s| s == "comparison"));

        let (status, body) = get(setup_test_app(), "/api/artifacts/42").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(json["error"].as_str().unwrap().contains("42"));
    }

    #[tokio::test]
    async fn test_static_assets() {
        let response = setup_test_app()
            .oneshot(
                Request::builder()
                    .uri("/static/style.css")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css");

        let (status, js) = get(setup_test_app(), "/static/site.js").await;
        assert_eq!(status, StatusCode::OK);
        assert!(js.contains("section-toggle"));
    }

    #[tokio::test]
    async fn test_base_path_prefixes_routes_and_links() {
        let settings = Settings {
            base_path: "/portfolio".to_string(),
            ..Settings::default()
        };
        let app = || setup_test_app_with(settings.clone());

        let (status, html) = get(app(), "/portfolio/artifacts").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("href=\"/portfolio/artifacts/1\""));
        assert!(html.contains("href=\"/portfolio/static/style.css\""));

        // The home nav link targets the bare prefix; both forms serve home.
        assert!(html.contains("href=\"/portfolio\" class=\"nav-link\""));
        for uri in ["/portfolio", "/portfolio/"] {
            let (status, html) = get(app(), uri).await;
            assert_eq!(status, StatusCode::OK, "{}", uri);
            assert!(html.contains("Sugyeong Hong"));
        }

        let (status, _) = get(setup_test_app_with(settings), "/artifacts").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
