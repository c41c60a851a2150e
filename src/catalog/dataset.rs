//! Versioned content dataset.

use serde::{Deserialize, Serialize};

use super::CatalogError;
use crate::models::{Artifact, Profile};

/// Current content schema version.
pub const SCHEMA_VERSION: u32 = 1;

/// On-disk shape of the site content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub schema_version: u32,
    pub profile: Profile,
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
}

impl Dataset {
    pub fn from_toml_str(contents: &str) -> Result<Self, CatalogError> {
        toml::from_str(contents).map_err(|e| CatalogError::Parse(format!("TOML: {}", e)))
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, CatalogError> {
        serde_yaml::from_str(contents).map_err(|e| CatalogError::Parse(format!("YAML: {}", e)))
    }

    pub fn from_json_str(contents: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(contents).map_err(|e| CatalogError::Parse(format!("JSON: {}", e)))
    }
}
