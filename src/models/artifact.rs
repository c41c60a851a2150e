//! Artifact model.
//!
//! An artifact is a single portfolio entry (project, report, reflection or
//! timeline). Only `id`, `title`, `icon` and `technologies` are required;
//! every narrative field is independently optional and an empty string or
//! empty list counts as absent.

use serde::{Deserialize, Serialize};

use super::section::SectionId;

/// Category of an artifact. Selects the section layout of the detail view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    #[default]
    Default,
    Report,
    Reflection,
    Timeline,
}

impl ArtifactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Default => "default",
            ArtifactKind::Report => "report",
            ArtifactKind::Reflection => "reflection",
            ArtifactKind::Timeline => "timeline",
        }
    }

    /// Ordered candidate sections for this kind.
    pub fn layout(&self) -> &'static [SectionId] {
        use SectionId::*;
        match self {
            ArtifactKind::Default => &[
                Introduction,
                Objective,
                Overview,
                Process,
                Tools,
                ValueProposition,
                LabLog,
                Learnings,
                References,
            ],
            ArtifactKind::Report => &[
                Introduction,
                Objective,
                Overview,
                Process,
                Tools,
                ValueProposition,
                Comparison,
                Learnings,
                References,
            ],
            ArtifactKind::Reflection => &[
                Introduction,
                ValueStatement,
                Strategies,
                AiDisclosure,
                Learnings,
            ],
            ArtifactKind::Timeline => &[Introduction, Objective, Timeline, Learnings, References],
        }
    }

    /// Label for the outbound link button, if the kind shows one.
    pub fn link_label(&self) -> Option<&'static str> {
        match self {
            ArtifactKind::Default => Some("View Full Project →"),
            ArtifactKind::Report => Some("View Full Report →"),
            ArtifactKind::Reflection | ArtifactKind::Timeline => None,
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Objective: plain text, or an intro followed by an ordered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Objective {
    Text(String),
    Structured {
        #[serde(default)]
        intro: String,
        #[serde(default)]
        items: Vec<String>,
    },
}

impl Objective {
    pub fn is_empty(&self) -> bool {
        match self {
            Objective::Text(text) => text.trim().is_empty(),
            Objective::Structured { intro, items } => intro.trim().is_empty() && items.is_empty(),
        }
    }
}

/// Process: plain text, or an intro followed by named subsections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Process {
    Text(String),
    Outline(ProcessOutline),
}

impl Process {
    pub fn is_empty(&self) -> bool {
        match self {
            Process::Text(text) => text.trim().is_empty(),
            Process::Outline(outline) => {
                outline.intro.trim().is_empty() && outline.sections.is_empty()
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessOutline {
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub sections: Vec<ProcessSection>,
}

/// A named process subsection with optional prose and an optional ordered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSection {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ProcessItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessItem {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_items: Vec<String>,
}

/// One row of a lab log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabLogEntry {
    pub iteration: u32,
    pub instruction: String,
    pub results: String,
    pub change: String,
}

/// Two-column comparison with its column labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub column_a_label: String,
    pub column_b_label: String,
    #[serde(default)]
    pub rows: Vec<ComparisonRow>,
}

impl Comparison {
    /// Section heading, e.g. "Machine Learning vs Deep Learning".
    pub fn title(&self) -> String {
        format!("{} vs {}", self.column_a_label, self.column_b_label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub aspect: String,
    pub column_a: String,
    pub column_b: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub era: String,
    pub date_range: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueStatement {
    pub field: String,
    pub statement: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strategy {
    pub title: String,
    #[serde(default)]
    pub items: Vec<StrategyItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyItem {
    pub title: String,
    pub description: String,
}

/// A portfolio entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub id: u32,
    pub title: String,
    pub icon: String,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "type")]
    pub kind: ArtifactKind,
    /// External link to the full project or report.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objective: Option<Objective>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process: Option<Process>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub challenges: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools_and_technologies: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_proposition: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lab_log: Vec<LabLogEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison: Option<Comparison>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub learnings: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub timeline: Vec<TimelineEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_statement: Option<ValueStatement>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strategies: Vec<Strategy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_disclosure: Option<String>,
}

fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.trim().is_empty())
}

impl Artifact {
    /// Minimal artifact with only the required fields set.
    pub fn new(id: u32, title: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            icon: icon.into(),
            technologies: Vec::new(),
            description: String::new(),
            kind: ArtifactKind::Default,
            link: None,
            introduction: None,
            objective: None,
            detailed_description: None,
            features: Vec::new(),
            process: None,
            challenges: Vec::new(),
            tools_and_technologies: None,
            value_proposition: None,
            lab_log: Vec::new(),
            comparison: None,
            learnings: Vec::new(),
            references: Vec::new(),
            timeline: Vec::new(),
            value_statement: None,
            strategies: Vec::new(),
            ai_disclosure: None,
        }
    }

    /// Whether the backing field(s) of a section carry any content.
    pub fn has_section(&self, section: SectionId) -> bool {
        match section {
            SectionId::Introduction => has_text(&self.introduction),
            SectionId::Objective => self.objective.as_ref().is_some_and(|o| !o.is_empty()),
            SectionId::Overview => {
                has_text(&self.detailed_description) || !self.features.is_empty()
            }
            SectionId::Process => {
                self.process.as_ref().is_some_and(|p| !p.is_empty()) || !self.challenges.is_empty()
            }
            SectionId::Tools => has_text(&self.tools_and_technologies),
            SectionId::ValueProposition => has_text(&self.value_proposition),
            SectionId::LabLog => !self.lab_log.is_empty(),
            SectionId::Comparison => self.comparison.as_ref().is_some_and(|c| !c.rows.is_empty()),
            SectionId::Learnings => !self.learnings.is_empty(),
            SectionId::References => !self.references.is_empty(),
            SectionId::ValueStatement => self
                .value_statement
                .as_ref()
                .is_some_and(|v| !v.statement.trim().is_empty()),
            SectionId::Strategies => !self.strategies.is_empty(),
            SectionId::AiDisclosure => has_text(&self.ai_disclosure),
            SectionId::Timeline => !self.timeline.is_empty(),
        }
    }

    /// Sections to render, in layout order, skipping those without content.
    pub fn sections(&self) -> Vec<SectionId> {
        self.kind
            .layout()
            .iter()
            .copied()
            .filter(|s| self.has_section(*s))
            .collect()
    }

    /// Heading shown for a section of this artifact.
    pub fn section_title(&self, section: SectionId) -> String {
        match (section, self.kind) {
            (SectionId::Overview, ArtifactKind::Report) => "Report Overview".to_string(),
            (SectionId::Overview, _) => "Project Overview".to_string(),
            (SectionId::Strategies, _) => "Strategies to Fulfill This Value".to_string(),
            (SectionId::Comparison, _) => self
                .comparison
                .as_ref()
                .map(|c| c.title())
                .unwrap_or_else(|| section.default_title().to_string()),
            _ => section.default_title().to_string(),
        }
    }
}
