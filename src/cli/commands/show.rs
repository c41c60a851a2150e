//! Single artifact command.

use console::style;

use crate::catalog::Catalog;
use crate::config::Settings;
use crate::server::views::detail_url;

/// Print an artifact's header and its detail sections.
pub fn cmd_show(settings: &Settings, catalog: &Catalog, id: &str) -> anyhow::Result<()> {
    let Some(artifact) = catalog.get_by_param(id) else {
        eprintln!("{} Artifact Not Found: {}", style("✗").red(), id);
        anyhow::bail!("no artifact with id {:?}", id);
    };

    println!("\n{} {}", artifact.icon, style(&artifact.title).bold());
    println!("  {:<13} {}", "Type:", artifact.kind);
    println!("  {:<13} {}", "Page:", detail_url(settings, artifact.id));
    if !artifact.technologies.is_empty() {
        println!("  {:<13} {}", "Technologies:", artifact.technologies.join(", "));
    }
    if let (Some(label), Some(link)) = (artifact.kind.link_label(), artifact.link.as_ref()) {
        println!("  {:<13} {}", label.trim_end_matches(" →"), style(link).underlined());
    }

    let sections = artifact.sections();
    if sections.is_empty() {
        println!("\n  {} No detail sections.", style("!").yellow());
        return Ok(());
    }

    println!("\n{}", style("Sections").bold());
    for section in sections {
        println!(
            "  {} {:<18} {}",
            style("•").cyan(),
            section.slug(),
            artifact.section_title(section)
        );
    }

    Ok(())
}
