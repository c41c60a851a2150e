//! Static site export.
//!
//! Renders every page the server would serve into a directory tree of
//! `index.html` files plus the bundled assets.

use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::config::Settings;
use crate::models::SectionState;
use crate::server::{views, CSS, JS};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to render page: {0}")]
    Render(#[from] askama::Error),
}

/// What an export wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub pages: usize,
    pub assets: usize,
}

fn write_file(path: &Path, contents: &str) -> Result<(), ExportError> {
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, contents).map_err(io_err)?;
    tracing::debug!("Wrote {}", path.display());
    Ok(())
}

/// Write the whole site under `out_dir`.
///
/// Detail pages are written with every section collapsed; the bundled
/// script applies `?open=` in the browser.
pub fn export_site(
    settings: &Settings,
    catalog: &Catalog,
    out_dir: &Path,
) -> Result<ExportSummary, ExportError> {
    let mut summary = ExportSummary::default();

    let mut page = |relative: &str, html: String| -> Result<(), ExportError> {
        write_file(&out_dir.join(relative).join("index.html"), &html)?;
        summary.pages += 1;
        Ok(())
    };

    page("", views::home_page(settings, catalog)?)?;
    page(
        "artifacts",
        views::catalog_page(settings, catalog, settings.catalog_order)?,
    )?;
    let collapsed = SectionState::collapsed();
    for artifact in catalog.list(settings.catalog_order) {
        page(
            &format!("artifacts/{}", artifact.id),
            views::artifact_page(settings, artifact, &collapsed)?,
        )?;
    }
    page("about", views::about_page(settings, catalog)?)?;
    page("contact", views::contact_page(settings, catalog)?)?;

    let static_dir = out_dir.join("static");
    write_file(&static_dir.join("style.css"), CSS)?;
    write_file(&static_dir.join("site.js"), JS)?;
    summary.assets = 2;

    tracing::info!(
        "Exported {} pages and {} assets to {}",
        summary.pages,
        summary.assets,
        out_dir.display()
    );
    Ok(summary)
}
