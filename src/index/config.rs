//! Builder and indexer configuration
//!
//! Loaded from YAML the same way tenant settings are, every field optional.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Reading the config file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed YAML
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Document builder settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Reject quads whose graph differs from the graph component of the key.
    /// Off: graphs are collected into `graph_uri` instead.
    pub enforce_graph_consistency: bool,
}

impl BuilderConfig {
    pub fn strict() -> Self {
        Self {
            enforce_graph_consistency: true,
        }
    }
}

/// Settings for the quad indexing pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexerConfig {
    /// Builder settings
    pub builder: BuilderConfig,
    /// Skip subjects whose document cannot be built instead of aborting
    pub skip_invalid_documents: bool,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            builder: BuilderConfig::default(),
            skip_invalid_documents: true,
        }
    }
}

impl IndexerConfig {
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn to_yaml_string(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
