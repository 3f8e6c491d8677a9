//! Game configuration
//!
//! Loaded from YAML; every field has a default so a partial file (or none at
//! all) is valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config syntax: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Where the three source files live
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSources {
    /// `id|name` records for people
    pub people: PathBuf,
    /// `id|title` records for works
    pub works: PathBuf,
    /// `work id|person id` records
    pub casts: PathBuf,
}

impl DataSources {
    /// The conventional file names inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            people: dir.join("actors.txt"),
            works: dir.join("movies.txt"),
            casts: dir.join("movie-actors.txt"),
        }
    }
}

impl Default for DataSources {
    fn default() -> Self {
        Self::in_dir("inputs")
    }
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub sources: DataSources,
    /// Initial center of the universe
    pub center: String,
    /// Default number of suggestions for rankings
    pub top_k: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            sources: DataSources::default(),
            center: "Kevin Bacon".to_string(),
            top_k: 5,
        }
    }
}

impl GameConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.center.trim().is_empty() {
            return Err(ConfigError::Invalid("center must not be empty".to_string()));
        }
        if self.top_k == 0 {
            return Err(ConfigError::Invalid("top_k must be at least 1".to_string()));
        }
        Ok(())
    }
}
