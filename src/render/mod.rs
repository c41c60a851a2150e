//! HTML fragment rendering for artifact content.
//!
//! - `markdown`: the `**bold**`/line-break text helper
//! - `sections`: body markup for each detail-view section

mod markdown;
mod sections;

pub use markdown::{lines_to_html, markdown_html, render_markdown_text, Line, Span};
pub use sections::{
    render_comparison_table, render_lab_log_table, render_section, render_section_body,
    section_href, SectionView,
};

/// Escape HTML special characters for safe rendering in text and attributes.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
