//! Askama template structs for the web interface.
//!
//! Each struct corresponds to an HTML template in the templates/ directory.
//! Askama provides compile-time verification that templates are valid.

use askama::Template;

use crate::models::Profile;
use crate::render::SectionView;

/// Fields every page passes to `base.html`.
pub struct Layout {
    pub site_title: String,
    pub page_title: String,
    /// Base path prefix for links ("" at the site root).
    pub base: String,
    /// Home page URL: "/" at the site root, otherwise the bare base path.
    pub home: String,
    /// Nav entry to highlight.
    pub active: &'static str,
}

/// Helper struct for artifact cards in the catalog grid.
pub struct ArtifactCard {
    pub id: u32,
    pub title: String,
    pub icon: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub href: String,
}

/// Helper struct for the external link button on the detail page.
pub struct ExternalLink {
    pub label: &'static str,
    pub url: String,
}

/// Landing page with the profile summary.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate<'a> {
    pub layout: Layout,
    pub profile: &'a Profile,
    pub bio_html: String,
    pub education_html: Option<String>,
}

/// Artifact catalog grid.
#[derive(Template)]
#[template(path = "artifacts.html")]
pub struct ArtifactsTemplate {
    pub layout: Layout,
    pub cards: Vec<ArtifactCard>,
    pub order: &'static str,
}

/// Artifact detail page.
#[derive(Template)]
#[template(path = "artifact_detail.html")]
pub struct ArtifactDetailTemplate<'a> {
    pub layout: Layout,
    pub id: u32,
    pub kind: &'static str,
    pub title: &'a str,
    pub icon: &'a str,
    pub technologies: &'a [String],
    pub external_link: Option<ExternalLink>,
    pub sections: Vec<SectionView>,
}

/// Shown for unknown artifact ids.
#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub layout: Layout,
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate<'a> {
    pub layout: Layout,
    pub profile: &'a Profile,
    pub about_html: String,
}

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate<'a> {
    pub layout: Layout,
    pub profile: &'a Profile,
}
