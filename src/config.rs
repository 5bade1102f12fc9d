//! Analysis configuration
//!
//! Defaults reproduce a plain run over `CleanedLinkedInData/` that samples walks
//! from `adjacency_list.json`. Any field can be overridden from a YAML file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Random-walk sampling settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Upper bound on steps per walk
    pub max_steps: usize,
    /// Number of trials per batch
    pub num_examples: usize,
    /// Fixed RNG seed (None = seeded from entropy)
    pub seed: Option<u64>,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            max_steps: 15,
            num_examples: 50,
            seed: None,
        }
    }
}

/// Full pipeline configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Directory of per-owner CSV exports
    pub input_dir: PathBuf,
    /// Snapshot to sample walks from (None = sample the freshly built graph)
    pub snapshot_path: Option<PathBuf>,
    /// Where to write the built graph as a snapshot
    pub emit_snapshot: Option<PathBuf>,
    /// Degree thresholds to count nodes above
    pub thresholds: Vec<usize>,
    /// How many companies to rank
    pub top_companies: usize,
    pub sampling: SamplingConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("CleanedLinkedInData"),
            snapshot_path: Some(PathBuf::from("adjacency_list.json")),
            emit_snapshot: None,
            thresholds: vec![1000, 2000, 3000, 4000],
            top_companies: 10,
            sampling: SamplingConfig::default(),
        }
    }
}

impl AnalysisConfig {
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }
}
