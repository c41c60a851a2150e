//! Immutable artifact catalog.
//!
//! The catalog is built once at startup from a versioned content dataset
//! (the builtin `content/site.toml`, or an override file) and shared
//! read-only for the lifetime of the process.

mod dataset;

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Artifact, Profile};

pub use dataset::{Dataset, SCHEMA_VERSION};

/// Content dataset compiled into the binary.
pub const BUILTIN_CONTENT: &str = include_str!("../../content/site.toml");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read content file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse content: {0}")]
    Parse(String),

    #[error("Unsupported content schema version {found} (expected {expected})")]
    SchemaVersion { found: u32, expected: u32 },

    #[error("Duplicate artifact id: {0}")]
    DuplicateId(u32),
}

/// Ordering of the catalog listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Order in which artifacts appear in the dataset.
    #[default]
    Listed,
    /// Ascending by id.
    Asc,
    /// Descending by id.
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Listed => "listed",
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "listed" => Ok(SortOrder::Listed),
            "asc" | "ascending" => Ok(SortOrder::Asc),
            "desc" | "descending" => Ok(SortOrder::Desc),
            other => Err(format!("unknown sort order: {}", other)),
        }
    }
}

impl prefer::FromValue for SortOrder {
    fn from_value(value: &prefer::ConfigValue) -> prefer::Result<Self> {
        match value.as_str() {
            Some(s) => s
                .parse()
                .map_err(|e: String| prefer::Error::ConversionError {
                    key: String::new(),
                    type_name: "SortOrder".to_string(),
                    source: e.into(),
                }),
            None => Err(prefer::Error::ConversionError {
                key: String::new(),
                type_name: "SortOrder".to_string(),
                source: "expected string".into(),
            }),
        }
    }
}

/// Profile plus artifacts, indexed by id.
#[derive(Debug, Clone)]
pub struct Catalog {
    profile: Profile,
    artifacts: Vec<Artifact>,
    index: HashMap<u32, usize>,
}

impl Catalog {
    /// Build a catalog from a parsed dataset, validating ids and version.
    pub fn from_dataset(dataset: Dataset) -> Result<Self, CatalogError> {
        if dataset.schema_version != SCHEMA_VERSION {
            return Err(CatalogError::SchemaVersion {
                found: dataset.schema_version,
                expected: SCHEMA_VERSION,
            });
        }

        let mut index = HashMap::with_capacity(dataset.artifacts.len());
        for (pos, artifact) in dataset.artifacts.iter().enumerate() {
            if index.insert(artifact.id, pos).is_some() {
                return Err(CatalogError::DuplicateId(artifact.id));
            }
        }

        Ok(Self {
            profile: dataset.profile,
            artifacts: dataset.artifacts,
            index,
        })
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_dataset(Dataset::from_toml_str(BUILTIN_CONTENT)?)
    }

    /// Load a dataset file; format is chosen by extension (toml, yaml/yml, json).
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");
        let dataset = match ext {
            "yaml" | "yml" => Dataset::from_yaml_str(&contents)?,
            "json" => Dataset::from_json_str(&contents)?,
            _ => Dataset::from_toml_str(&contents)?,
        };
        let catalog = Self::from_dataset(dataset)?;
        tracing::info!("Loaded {} artifacts from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Load from `path` when given, otherwise use the builtin content.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(p) => Self::load(p),
            None => Self::builtin(),
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn get(&self, id: u32) -> Option<&Artifact> {
        self.index.get(&id).map(|&pos| &self.artifacts[pos])
    }

    /// Look up an id taken verbatim from a route segment.
    ///
    /// Only the canonical decimal form matches: "2" does, "02", "+2" and " 2" don't.
    pub fn get_by_param(&self, raw: &str) -> Option<&Artifact> {
        raw.parse::<u32>()
            .ok()
            .filter(|id| id.to_string() == raw)
            .and_then(|id| self.get(id))
    }

    /// All artifacts in the requested order.
    pub fn list(&self, order: SortOrder) -> Vec<&Artifact> {
        let mut items: Vec<&Artifact> = self.artifacts.iter().collect();
        match order {
            SortOrder::Listed => {}
            SortOrder::Asc => items.sort_by_key(|a| a.id),
            SortOrder::Desc => items.sort_by(|a, b| b.id.cmp(&a.id)),
        }
        items
    }

    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.artifacts.iter().map(|a| a.id)
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}
