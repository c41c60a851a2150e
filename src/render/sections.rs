//! Section body markup for the artifact detail view.

use crate::models::{
    Artifact, Comparison, LabLogEntry, Objective, Process, ProcessSection, SectionId,
    SectionState,
};

use super::{html_escape, markdown_html};

/// Everything the detail template needs to draw one section.
#[derive(Debug, Clone)]
pub struct SectionView {
    pub slug: &'static str,
    pub title: String,
    pub collapsed: bool,
    /// Link that toggles this section and nothing else.
    pub toggle_href: String,
    pub body_html: String,
}

/// Build the view of one section under the given collapse state.
pub fn render_section(
    artifact: &Artifact,
    section: SectionId,
    state: &SectionState,
    detail_url: &str,
) -> SectionView {
    SectionView {
        slug: section.slug(),
        title: artifact.section_title(section),
        collapsed: state.is_collapsed(section),
        toggle_href: section_href(detail_url, &state.toggled(section), section),
        body_html: render_section_body(artifact, section),
    }
}

/// URL of the detail view with `state` applied, anchored at `section`.
pub fn section_href(detail_url: &str, state: &SectionState, section: SectionId) -> String {
    let open = state.to_query();
    if open.is_empty() {
        format!("{}#section-{}", detail_url, section.slug())
    } else {
        format!(
            "{}?open={}#section-{}",
            detail_url,
            urlencoding::encode(&open),
            section.slug()
        )
    }
}

/// Inner HTML of a section. Empty when the backing field is absent.
pub fn render_section_body(artifact: &Artifact, section: SectionId) -> String {
    match section {
        SectionId::Introduction => paragraph(artifact.introduction.as_deref()),
        SectionId::Objective => artifact
            .objective
            .as_ref()
            .map(render_objective)
            .unwrap_or_default(),
        SectionId::Overview => render_overview(artifact),
        SectionId::Process => render_process(artifact),
        SectionId::Tools => paragraph(artifact.tools_and_technologies.as_deref()),
        SectionId::ValueProposition => paragraph(artifact.value_proposition.as_deref()),
        SectionId::LabLog => render_lab_log_table(&artifact.lab_log),
        SectionId::Comparison => artifact
            .comparison
            .as_ref()
            .map(render_comparison_table)
            .unwrap_or_default(),
        SectionId::Learnings => bullet_list(&artifact.learnings),
        SectionId::References => render_references(artifact),
        SectionId::ValueStatement => render_value_statement(artifact),
        SectionId::Strategies => render_strategies(artifact),
        SectionId::AiDisclosure => paragraph(artifact.ai_disclosure.as_deref()),
        SectionId::Timeline => render_timeline(artifact),
    }
}

fn paragraph(text: Option<&str>) -> String {
    match text {
        Some(t) if !t.trim().is_empty() => {
            format!(r#"<p class="artifact-overview">{}</p>"#, markdown_html(t))
        }
        _ => String::new(),
    }
}

fn bullet_list(items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let mut html = String::from(r#"<ul class="artifact-list">"#);
    for item in items {
        html.push_str(&format!("<li>{}</li>", html_escape(item)));
    }
    html.push_str("</ul>");
    html
}

fn render_objective(objective: &Objective) -> String {
    match objective {
        Objective::Text(text) => format!("<p>{}</p>", markdown_html(text)),
        Objective::Structured { intro, items } => {
            let mut html = String::new();
            if !intro.trim().is_empty() {
                html.push_str(&format!("<p>{}</p>", markdown_html(intro)));
            }
            if !items.is_empty() {
                html.push_str(r#"<ol class="artifact-list">"#);
                for item in items {
                    html.push_str(&format!("<li>{}</li>", markdown_html(item)));
                }
                html.push_str("</ol>");
            }
            html
        }
    }
}

fn render_overview(artifact: &Artifact) -> String {
    let mut html = paragraph(artifact.detailed_description.as_deref());
    if !artifact.features.is_empty() {
        html.push_str(r#"<div class="subsection"><h3 class="subsection-title">Key Features</h3>"#);
        html.push_str(&bullet_list(&artifact.features));
        html.push_str("</div>");
    }
    html
}

fn render_process_section(section: &ProcessSection) -> String {
    let mut html = format!(
        r#"<div class="process-section"><h3 class="process-section-title">{}</h3>"#,
        html_escape(&section.title)
    );

    if let Some(content) = section.content.as_deref().filter(|c| !c.trim().is_empty()) {
        html.push_str(&format!(
            r#"<p class="process-section-content">{}</p>"#,
            markdown_html(content)
        ));
    }

    if !section.items.is_empty() {
        html.push_str(r#"<ol class="process-list">"#);
        for item in &section.items {
            html.push_str(&format!(
                r#"<li class="process-list-item"><strong>{}:</strong> {}"#,
                html_escape(&item.title),
                html_escape(&item.description)
            ));
            if !item.sub_items.is_empty() {
                html.push_str(r#"<ul class="process-sublist">"#);
                for sub in &item.sub_items {
                    html.push_str(&format!("<li>{}</li>", html_escape(sub)));
                }
                html.push_str("</ul>");
            }
            html.push_str("</li>");
        }
        html.push_str("</ol>");
    }

    html.push_str("</div>");
    html
}

fn render_process(artifact: &Artifact) -> String {
    let mut html = String::new();

    match &artifact.process {
        Some(Process::Text(text)) => html.push_str(&paragraph(Some(text.as_str()))),
        Some(Process::Outline(outline)) => {
            html.push_str(r#"<div class="process-content">"#);
            html.push_str(&paragraph(Some(outline.intro.as_str())));
            for section in &outline.sections {
                html.push_str(&render_process_section(section));
            }
            html.push_str("</div>");
        }
        None => {}
    }

    if !artifact.challenges.is_empty() {
        html.push_str(
            r#"<div class="subsection"><h3 class="subsection-title">Challenges Encountered</h3>"#,
        );
        html.push_str(&bullet_list(&artifact.challenges));
        html.push_str("</div>");
    }

    html
}

/// Four-column lab log table, one row per entry in input order.
pub fn render_lab_log_table(entries: &[LabLogEntry]) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let mut rows = String::new();
    for entry in entries {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            entry.iteration,
            html_escape(&entry.instruction),
            html_escape(&entry.results),
            html_escape(&entry.change)
        ));
    }

    format!(
        concat!(
            r#"<div class="table-wrapper"><table class="lab-log-table"><thead><tr>"#,
            "<th>Iteration</th><th>Instruction</th><th>Results</th><th>Change</th>",
            "</tr></thead><tbody>{}</tbody></table></div>",
        ),
        rows
    )
}

/// Three-column comparison table, one row per entry in input order.
pub fn render_comparison_table(comparison: &Comparison) -> String {
    if comparison.rows.is_empty() {
        return String::new();
    }

    let mut rows = String::new();
    for row in &comparison.rows {
        rows.push_str(&format!(
            r#"<tr><td class="aspect-cell">{}</td><td>{}</td><td>{}</td></tr>"#,
            html_escape(&row.aspect),
            html_escape(&row.column_a),
            html_escape(&row.column_b)
        ));
    }

    format!(
        concat!(
            r#"<div class="table-wrapper"><table class="comparison-table"><thead><tr>"#,
            "<th>Aspect</th><th>{}</th><th>{}</th>",
            "</tr></thead><tbody>{}</tbody></table></div>",
        ),
        html_escape(&comparison.column_a_label),
        html_escape(&comparison.column_b_label),
        rows
    )
}

fn render_references(artifact: &Artifact) -> String {
    if artifact.references.is_empty() {
        return String::new();
    }

    let mut html = String::from(r#"<ul class="references-list">"#);
    for reference in &artifact.references {
        html.push_str(&format!(
            concat!(
                r#"<li class="reference-item"><a href="{}" target="_blank" "#,
                r#"rel="noopener noreferrer" class="reference-link">{}</a>"#,
            ),
            html_escape(&reference.url),
            html_escape(&reference.title)
        ));
        if !reference.description.trim().is_empty() {
            html.push_str(&format!(
                r#"<p class="reference-description">{}</p>"#,
                html_escape(&reference.description)
            ));
        }
        html.push_str("</li>");
    }
    html.push_str("</ul>");
    html
}

fn render_value_statement(artifact: &Artifact) -> String {
    match &artifact.value_statement {
        Some(value) => format!(
            r#"<div class="artifact-overview"><p><strong>Field:</strong> {}</p><p>{}</p></div>"#,
            html_escape(&value.field),
            markdown_html(&value.statement)
        ),
        None => String::new(),
    }
}

fn render_strategies(artifact: &Artifact) -> String {
    if artifact.strategies.is_empty() {
        return String::new();
    }

    let mut html = String::from(r#"<div class="process-content">"#);
    for strategy in &artifact.strategies {
        html.push_str(&format!(
            r#"<div class="process-section"><h3 class="process-section-title">{}</h3>"#,
            html_escape(&strategy.title)
        ));
        if !strategy.items.is_empty() {
            html.push_str(r#"<ul class="artifact-list">"#);
            for item in &strategy.items {
                html.push_str(&format!(
                    r#"<li class="process-list-item"><strong>{}:</strong> {}</li>"#,
                    html_escape(&item.title),
                    html_escape(&item.description)
                ));
            }
            html.push_str("</ul>");
        }
        html.push_str("</div>");
    }
    html.push_str("</div>");
    html
}

fn render_timeline(artifact: &Artifact) -> String {
    if artifact.timeline.is_empty() {
        return String::new();
    }

    let mut html = String::from(r#"<ol class="timeline-list">"#);
    for entry in &artifact.timeline {
        html.push_str(&format!(
            concat!(
                r#"<li class="timeline-entry"><div class="timeline-heading">"#,
                r#"<span class="timeline-era">{}</span> "#,
                r#"<span class="timeline-dates">{}</span></div>"#,
            ),
            html_escape(&entry.era),
            html_escape(&entry.date_range)
        ));
        if !entry.description.trim().is_empty() {
            html.push_str(&format!("<p>{}</p>", markdown_html(&entry.description)));
        }
        html.push_str("</li>");
    }
    html.push_str("</ol>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ArtifactKind, ComparisonRow, ProcessItem, ProcessOutline, Reference, TimelineEntry,
    };

    fn comparison(rows: &[(&str, &str, &str)]) -> Comparison {
        Comparison {
            column_a_label: "Machine Learning".to_string(),
            column_b_label: "Deep Learning".to_string(),
            rows: rows
                .iter()
                .map(|(aspect, a, b)| ComparisonRow {
                    aspect: aspect.to_string(),
                    column_a: a.to_string(),
                    column_b: b.to_string(),
                })
                .collect(),
        }
    }

    fn tbody(html: &str) -> &str {
        let start = html.find("<tbody>").unwrap() + "<tbody>".len();
        let end = html.find("</tbody>").unwrap();
        &html[start..end]
    }

    #[test]
    fn test_comparison_rows_preserve_order() {
        let html = render_comparison_table(&comparison(&[("X", "A1", "B1"), ("Y", "A2", "B2")]));
        let body = tbody(&html);
        assert_eq!(body.matches("<tr>").count(), 2);
        assert_eq!(
            body,
            concat!(
                r#"<tr><td class="aspect-cell">X</td><td>A1</td><td>B1</td></tr>"#,
                r#"<tr><td class="aspect-cell">Y</td><td>A2</td><td>B2</td></tr>"#
            )
        );
        assert!(html.contains("<th>Machine Learning</th><th>Deep Learning</th>"));
    }

    #[test]
    fn test_lab_log_table_has_four_columns() {
        let entries = vec![
            LabLogEntry {
                iteration: 1,
                instruction: "Ask for job type".to_string(),
                results: "Too broad".to_string(),
                change: "-".to_string(),
            },
            LabLogEntry {
                iteration: 2,
                instruction: "Ask for YoE".to_string(),
                results: "Better".to_string(),
                change: "Added YoE".to_string(),
            },
        ];
        let html = render_lab_log_table(&entries);
        let body = tbody(&html);
        assert_eq!(body.matches("<tr>").count(), 2);
        assert_eq!(body.matches("<td>").count(), 8);
        assert!(body.find("Ask for job type").unwrap() < body.find("Ask for YoE").unwrap());
        assert!(
            html.contains("<th>Iteration</th><th>Instruction</th><th>Results</th><th>Change</th>")
        );
    }

    #[test]
    fn test_empty_tables_render_nothing() {
        assert_eq!(render_lab_log_table(&[]), "");
        assert_eq!(render_comparison_table(&comparison(&[])), "");
    }

    #[test]
    fn test_objective_variants() {
        let mut artifact = Artifact::new(1, "T", "i");
        artifact.objective = Some(Objective::Text("Find **jobs**".to_string()));
        assert_eq!(
            render_section_body(&artifact, SectionId::Objective),
            "<p>Find <strong>jobs</strong></p>"
        );

        artifact.objective = Some(Objective::Structured {
            intro: "We aimed to:".to_string(),
            items: vec!["first".to_string(), "second".to_string()],
        });
        let html = render_section_body(&artifact, SectionId::Objective);
        assert!(html.starts_with("<p>We aimed to:</p><ol"));
        assert!(html.find("first").unwrap() < html.find("second").unwrap());

        artifact.objective = Some(Objective::Structured {
            intro: String::new(),
            items: vec!["**Find** jobs".to_string(), "a < b".to_string()],
        });
        assert_eq!(
            render_section_body(&artifact, SectionId::Objective),
            r#"<ol class="artifact-list"><li><strong>Find</strong> jobs</li><li>a &lt; b</li></ol>"#
        );
    }

    #[test]
    fn test_process_outline_with_sub_items() {
        let mut artifact = Artifact::new(1, "T", "i");
        artifact.process = Some(Process::Outline(ProcessOutline {
            intro: "Phases:".to_string(),
            sections: vec![ProcessSection {
                title: "Methodology".to_string(),
                content: None,
                items: vec![ProcessItem {
                    title: "Refine".to_string(),
                    description: "Iterate".to_string(),
                    sub_items: vec!["Design".to_string(), "Test".to_string()],
                }],
            }],
        }));
        artifact.challenges = vec!["Links".to_string()];

        let html = render_section_body(&artifact, SectionId::Process);
        assert!(html.contains(r#"<h3 class="process-section-title">Methodology</h3>"#));
        assert!(html.contains("<strong>Refine:</strong> Iterate"));
        assert!(html.contains(r#"<ul class="process-sublist"><li>Design</li><li>Test</li></ul>"#));
        assert!(html.contains("Challenges Encountered"));
        assert!(!html.contains("process-section-content"));
    }

    #[test]
    fn test_references_open_in_new_context() {
        let mut artifact = Artifact::new(1, "T", "i");
        artifact.references = vec![Reference {
            title: "Paper".to_string(),
            url: "https://example.com/a?b=1&c=2".to_string(),
            description: "A paper".to_string(),
        }];
        let html = render_section_body(&artifact, SectionId::References);
        assert!(html.contains(r#"href="https://example.com/a?b=1&amp;c=2""#));
        assert!(html.contains(r#"target="_blank" rel="noopener noreferrer""#));
        assert!(html.contains(r#"<p class="reference-description">A paper</p>"#));
    }

    #[test]
    fn test_timeline_entries_in_order() {
        let mut artifact = Artifact::new(1, "T", "i");
        artifact.kind = ArtifactKind::Timeline;
        artifact.timeline = vec![
            TimelineEntry {
                era: "Early".to_string(),
                date_range: "1950s".to_string(),
                description: String::new(),
            },
            TimelineEntry {
                era: "Late".to_string(),
                date_range: "2020s".to_string(),
                description: "Now".to_string(),
            },
        ];
        let html = render_section_body(&artifact, SectionId::Timeline);
        assert_eq!(html.matches("timeline-entry").count(), 2);
        assert!(html.find("Early").unwrap() < html.find("Late").unwrap());
    }

    #[test]
    fn test_section_href_toggles_only_target() {
        let state = SectionState::from_query("learnings");
        let href = section_href(
            "/artifacts/1",
            &state.toggled(SectionId::Introduction),
            SectionId::Introduction,
        );
        assert_eq!(
            href,
            "/artifacts/1?open=introduction%2Clearnings#section-introduction"
        );

        let closed = section_href(
            "/artifacts/1",
            &state.toggled(SectionId::Learnings),
            SectionId::Learnings,
        );
        assert_eq!(closed, "/artifacts/1#section-learnings");
    }

    #[test]
    fn test_render_section_reports_state() {
        let mut artifact = Artifact::new(1, "T", "i");
        artifact.introduction = Some("Hello".to_string());
        artifact.learnings = vec!["one".to_string()];

        let state = SectionState::from_query("introduction");
        let intro = render_section(&artifact, SectionId::Introduction, &state, "/artifacts/1");
        let learn = render_section(&artifact, SectionId::Learnings, &state, "/artifacts/1");

        assert!(!intro.collapsed);
        assert!(learn.collapsed);
        assert_eq!(intro.title, "Introduction");
        assert_eq!(learn.title, "Key Learnings");
        assert!(intro.body_html.contains("Hello"));
    }
}
