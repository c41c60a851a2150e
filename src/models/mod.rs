//! Data models for the portfolio.

mod artifact;
mod profile;
mod section;

pub use artifact::{
    Artifact, ArtifactKind, Comparison, ComparisonRow, LabLogEntry, Objective, Process,
    ProcessItem, ProcessOutline, ProcessSection, Reference, Strategy, StrategyItem,
    TimelineEntry, ValueStatement,
};
pub use profile::{ContactInfo, Profile, ProfileLink, SkillGroup};
pub use section::{SectionId, SectionState, UnknownSection};
