//! Restricted markdown: `**bold**` spans and newline-separated lines.
//!
//! A bold span is a `**` pair enclosing at least one character and no `*`.
//! Anything else, including unmatched or empty markers, stays literal.

use super::html_escape;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text(String),
    Bold(String),
}

/// One input line, split into spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    /// Concatenated text of all spans, markers removed.
    pub fn plain_text(&self) -> String {
        self.spans
            .iter()
            .map(|s| match s {
                Span::Text(t) | Span::Bold(t) => t.as_str(),
            })
            .collect()
    }
}

const MARKER: &str = "**";

/// Split `text` into lines of plain and bold spans.
pub fn render_markdown_text(text: &str) -> Vec<Line> {
    text.split('\n').map(parse_line).collect()
}

fn parse_line(line: &str) -> Line {
    let mut spans = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;

    while let Some(offset) = line[pos..].find(MARKER) {
        let open = pos + offset;
        let inner_start = open + MARKER.len();
        let rest = &line[inner_start..];

        // Inner text runs to the next '*', which must begin the closing marker.
        let closed = rest
            .find('*')
            .filter(|&len| len > 0 && rest[len..].starts_with(MARKER));

        match closed {
            Some(len) => {
                if open > plain_start {
                    spans.push(Span::Text(line[plain_start..open].to_string()));
                }
                spans.push(Span::Bold(rest[..len].to_string()));
                pos = inner_start + len + MARKER.len();
                plain_start = pos;
            }
            // '*' is one byte, so stepping past it stays on a char boundary.
            None => pos = open + 1,
        }
    }

    if plain_start < line.len() {
        spans.push(Span::Text(line[plain_start..].to_string()));
    }

    Line { spans }
}

/// Render lines as escaped HTML, separated by `<br>`.
pub fn lines_to_html(lines: &[Line]) -> String {
    lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| match span {
                    Span::Text(t) => html_escape(t),
                    Span::Bold(t) => format!("<strong>{}</strong>", html_escape(t)),
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("<br>")
}

/// Convenience: parse and render in one step.
pub fn markdown_html(text: &str) -> String {
    lines_to_html(&render_markdown_text(text))
}
