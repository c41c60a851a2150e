//! Static export command.

use std::path::Path;

use console::style;

use crate::catalog::Catalog;
use crate::config::Settings;
use crate::export::export_site;

/// Write the rendered site to `dir`.
pub fn cmd_export(settings: &Settings, catalog: &Catalog, dir: &Path) -> anyhow::Result<()> {
    println!(
        "{} Exporting {} artifacts to {}",
        style("→").cyan(),
        catalog.len(),
        dir.display()
    );

    let summary = export_site(settings, catalog, dir)?;

    println!(
        "  {} Wrote {} pages and {} assets",
        style("✓").green(),
        summary.pages,
        summary.assets
    );
    if !settings.base_path.is_empty() {
        println!(
            "  Links are prefixed with {}; serve the directory at that path",
            style(&settings.base_path).bold()
        );
    }

    Ok(())
}
