use std::path::PathBuf;

use learn_core::ConfigError;
use thiserror::Error;

/// Errors surfaced while loading learning content.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    #[error("content file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML in content file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("content file is empty")]
    Empty,

    #[error("no modules defined in content")]
    NoModules,

    #[error("module keys must be strings")]
    InvalidModuleKey,

    #[error("module '{key}': {source}")]
    Module {
        key: String,
        #[source]
        source: ConfigError,
    },

    #[error("module '{key}' not found (available: {})", available.join(", "))]
    UnknownModule { key: String, available: Vec<String> },

    #[error("display setting '{field}' must be three components in 0..=255")]
    InvalidDisplayColor { field: &'static str },

    #[error("display setting '{field}' must be > 0")]
    InvalidDisplaySize { field: &'static str },
}

impl ContentError {
    pub(crate) fn module(key: &str, source: ConfigError) -> Self {
        Self::Module {
            key: key.to_owned(),
            source,
        }
    }
}
