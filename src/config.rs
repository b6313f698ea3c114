use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::signal::Signal;

pub const DEFAULT_SECONDS_PER_ID: u64 = 5;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse TOML file at {path}: {source}")]
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Settings deserialized from the optional config file
#[derive(Deserialize, Clone, Debug, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct HeartbeatConfig {
    /// Seconds slept between beats per unit of process id
    pub seconds_per_id: u64,
    /// Stop after this many beats. Unbounded when unset
    pub max_beats: Option<u64>,
    /// Signals that stop the loop
    pub shutdown_signals: Vec<Signal>,
}

impl Default for HeartbeatConfig {
    fn default() -> Self {
        Self {
            seconds_per_id: DEFAULT_SECONDS_PER_ID,
            max_beats: None,
            shutdown_signals: vec![Signal::SIGINT, Signal::SIGTERM],
        }
    }
}

impl HeartbeatConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config_string = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&config_string).map_err(|source| ConfigError::TomlParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn with_max_beats(mut self, max_beats: Option<u64>) -> Self {
        if max_beats.is_some() {
            self.max_beats = max_beats;
        }
        self
    }
}
