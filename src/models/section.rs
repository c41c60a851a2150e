//! Section identifiers and per-view collapse state.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A named, independently collapsible block of an artifact's detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
    Introduction,
    Objective,
    Overview,
    Process,
    Tools,
    ValueProposition,
    LabLog,
    Comparison,
    Learnings,
    References,
    ValueStatement,
    Strategies,
    AiDisclosure,
    Timeline,
}

impl SectionId {
    pub const ALL: [SectionId; 14] = [
        SectionId::Introduction,
        SectionId::Objective,
        SectionId::Overview,
        SectionId::Process,
        SectionId::Tools,
        SectionId::ValueProposition,
        SectionId::LabLog,
        SectionId::Comparison,
        SectionId::Learnings,
        SectionId::References,
        SectionId::ValueStatement,
        SectionId::Strategies,
        SectionId::AiDisclosure,
        SectionId::Timeline,
    ];

    /// Stable slug used in URLs and element ids.
    pub fn slug(&self) -> &'static str {
        match self {
            SectionId::Introduction => "introduction",
            SectionId::Objective => "objective",
            SectionId::Overview => "overview",
            SectionId::Process => "process",
            SectionId::Tools => "tools",
            SectionId::ValueProposition => "value-proposition",
            SectionId::LabLog => "lab-log",
            SectionId::Comparison => "comparison",
            SectionId::Learnings => "learnings",
            SectionId::References => "references",
            SectionId::ValueStatement => "value-statement",
            SectionId::Strategies => "strategies",
            SectionId::AiDisclosure => "ai-disclosure",
            SectionId::Timeline => "timeline",
        }
    }

    /// Heading used when the artifact does not override it.
    pub fn default_title(&self) -> &'static str {
        match self {
            SectionId::Introduction => "Introduction",
            SectionId::Objective => "Objective",
            SectionId::Overview => "Overview",
            SectionId::Process => "Process",
            SectionId::Tools => "Tools & Technologies",
            SectionId::ValueProposition => "Value Proposition",
            SectionId::LabLog => "Lab Log",
            SectionId::Comparison => "Comparison",
            SectionId::Learnings => "Key Learnings",
            SectionId::References => "References",
            SectionId::ValueStatement => "Personal Value Statement",
            SectionId::Strategies => "Strategies",
            SectionId::AiDisclosure => "AI Disclosure",
            SectionId::Timeline => "Timeline",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .iter()
            .copied()
            .find(|id| id.slug() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Collapsed/expanded state of the sections of one detail view.
///
/// Every section starts collapsed; only expanded sections are stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionState {
    expanded: BTreeSet<SectionId>,
}

impl SectionState {
    /// All sections collapsed.
    pub fn collapsed() -> Self {
        Self::default()
    }

    pub fn is_collapsed(&self, section: SectionId) -> bool {
        !self.expanded.contains(&section)
    }

    pub fn is_expanded(&self, section: SectionId) -> bool {
        self.expanded.contains(&section)
    }

    pub fn toggle(&mut self, section: SectionId) {
        if !self.expanded.remove(&section) {
            self.expanded.insert(section);
        }
    }

    /// Copy of this state with one section toggled.
    pub fn toggled(&self, section: SectionId) -> Self {
        let mut next = self.clone();
        next.toggle(section);
        next
    }

    pub fn expanded(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.expanded.iter().copied()
    }

    /// Parse a comma-separated list of expanded section slugs.
    ///
    /// Unknown names are skipped.
    pub fn from_query(value: &str) -> Self {
        let expanded = value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| match s.parse::<SectionId>() {
                Ok(id) => Some(id),
                Err(e) => {
                    tracing::debug!("{}", e);
                    None
                }
            })
            .collect();
        Self { expanded }
    }

    /// Comma-separated slugs of the expanded sections.
    pub fn to_query(&self) -> String {
        self.expanded
            .iter()
            .map(|s| s.slug())
            .collect::<Vec<_>>()
            .join(",")
    }
}
