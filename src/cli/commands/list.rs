//! Catalog listing command.

use console::style;

use crate::catalog::{Catalog, SortOrder};

/// Print one line per artifact.
pub fn cmd_list(catalog: &Catalog, desc: bool) -> anyhow::Result<()> {
    if catalog.is_empty() {
        println!("{} No artifacts in the catalog.", style("!").yellow());
        return Ok(());
    }

    let order = if desc { SortOrder::Desc } else { SortOrder::Asc };

    println!("\n{}", style("Artifacts").bold());
    println!("{}", "-".repeat(72));
    println!("{:<4} {:<11} {:<42} Technologies", "ID", "Type", "Title");
    println!("{}", "-".repeat(72));

    for artifact in catalog.list(order) {
        println!(
            "{:<4} {:<11} {} {:<40} {}",
            artifact.id,
            artifact.kind.as_str(),
            artifact.icon,
            truncate(&artifact.title, 39),
            style(artifact.technologies.join(", ")).dim()
        );
    }

    Ok(())
}

/// Truncate to `max` characters, adding an ellipsis.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
