//! Page rendering shared by the HTTP handlers and the static export.

use askama::Template;

use super::template_structs::{
    AboutTemplate, ArtifactCard, ArtifactDetailTemplate, ArtifactsTemplate, ContactTemplate,
    ExternalLink, HomeTemplate, Layout, NotFoundTemplate,
};
use crate::catalog::{Catalog, SortOrder};
use crate::config::Settings;
use crate::models::{Artifact, SectionState};
use crate::render::{markdown_html, render_section};

fn layout(settings: &Settings, page_title: impl Into<String>, active: &'static str) -> Layout {
    Layout {
        site_title: settings.site_title.clone(),
        page_title: page_title.into(),
        base: settings.base_path.clone(),
        home: home_url(settings),
        active,
    }
}

/// URL of the home page. Under a base path this is the path itself, no trailing slash.
pub fn home_url(settings: &Settings) -> String {
    if settings.base_path.is_empty() {
        "/".to_string()
    } else {
        settings.base_path.clone()
    }
}

/// Site-relative URL of an artifact's detail page.
pub fn detail_url(settings: &Settings, id: u32) -> String {
    settings.url(&format!("/artifacts/{}", id))
}

pub fn home_page(settings: &Settings, catalog: &Catalog) -> askama::Result<String> {
    let profile = catalog.profile();
    HomeTemplate {
        layout: layout(settings, "Home", "home"),
        profile,
        bio_html: markdown_html(&profile.bio),
        education_html: profile.education.as_deref().map(markdown_html),
    }
    .render()
}

pub fn catalog_page(
    settings: &Settings,
    catalog: &Catalog,
    order: SortOrder,
) -> askama::Result<String> {
    let cards = catalog
        .list(order)
        .into_iter()
        .map(|a| ArtifactCard {
            id: a.id,
            title: a.title.clone(),
            icon: a.icon.clone(),
            description: a.description.clone(),
            technologies: a.technologies.clone(),
            href: detail_url(settings, a.id),
        })
        .collect();

    ArtifactsTemplate {
        layout: layout(settings, "Artifacts", "artifacts"),
        cards,
        order: order.as_str(),
    }
    .render()
}

/// Detail page for one artifact with the given sections expanded.
pub fn artifact_page(
    settings: &Settings,
    artifact: &Artifact,
    state: &SectionState,
) -> askama::Result<String> {
    let url = detail_url(settings, artifact.id);
    let sections = artifact
        .sections()
        .into_iter()
        .map(|section| render_section(artifact, section, state, &url))
        .collect();

    let external_link = match (artifact.kind.link_label(), artifact.link.as_ref()) {
        (Some(label), Some(link)) if !link.trim().is_empty() => Some(ExternalLink {
            label,
            url: link.clone(),
        }),
        _ => None,
    };

    ArtifactDetailTemplate {
        layout: layout(settings, artifact.title.as_str(), "artifacts"),
        id: artifact.id,
        kind: artifact.kind.as_str(),
        title: &artifact.title,
        icon: &artifact.icon,
        technologies: &artifact.technologies,
        external_link,
        sections,
    }
    .render()
}

pub fn not_found_page(settings: &Settings) -> askama::Result<String> {
    NotFoundTemplate {
        layout: layout(settings, "Artifact Not Found", "artifacts"),
    }
    .render()
}

pub fn about_page(settings: &Settings, catalog: &Catalog) -> askama::Result<String> {
    let profile = catalog.profile();
    AboutTemplate {
        layout: layout(settings, "About", "about"),
        profile,
        about_html: markdown_html(profile.about_text()),
    }
    .render()
}

pub fn contact_page(settings: &Settings, catalog: &Catalog) -> askama::Result<String> {
    ContactTemplate {
        layout: layout(settings, "Contact", "contact"),
        profile: catalog.profile(),
    }
    .render()
}
