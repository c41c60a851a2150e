//! Dataset validation command.

use std::collections::BTreeMap;

use console::style;

use crate::catalog::Catalog;
use crate::config::Settings;
use crate::models::Artifact;

/// Problems that don't stop the site from rendering.
fn warnings(artifact: &Artifact) -> Vec<String> {
    let mut out = Vec::new();
    if artifact.description.trim().is_empty() {
        out.push("empty catalog description".to_string());
    }
    if artifact.technologies.is_empty() {
        out.push("no technology tags".to_string());
    }
    if artifact.sections().is_empty() {
        out.push("no detail sections".to_string());
    }
    if artifact.kind.link_label().is_some() && artifact.link.is_none() {
        out.push(format!("{} artifact without a link", artifact.kind));
    }
    if artifact.kind.link_label().is_none() && artifact.link.is_some() {
        out.push(format!("link is never shown for {} artifacts", artifact.kind));
    }
    out
}

/// Print a summary of the loaded dataset.
pub fn cmd_check(settings: &Settings, catalog: &Catalog) -> anyhow::Result<()> {
    let source = settings
        .content_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "builtin content".to_string());
    println!("{} Dataset OK ({})", style("✓").green(), source);
    println!("  Profile:   {}", catalog.profile().name);
    println!("  Artifacts: {}", catalog.len());

    let mut by_kind: BTreeMap<&str, usize> = BTreeMap::new();
    for artifact in catalog.list(Default::default()) {
        *by_kind.entry(artifact.kind.as_str()).or_default() += 1;
    }
    for (kind, count) in &by_kind {
        println!("    {:<11} {}", kind, count);
    }

    let mut warned = 0;
    for artifact in catalog.list(Default::default()) {
        for warning in warnings(artifact) {
            println!(
                "  {} #{} {}: {}",
                style("!").yellow(),
                artifact.id,
                artifact.title,
                warning
            );
            warned += 1;
        }
    }
    if warned == 0 {
        println!("  {} No warnings", style("✓").green());
    }

    Ok(())
}
