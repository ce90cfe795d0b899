//! Error types for scriptlist-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from loading or saving a [`GeneratorConfig`](crate::config::GeneratorConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying I/O failure (permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error (save path).
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// YAML parse error on load, with file path and line context from serde_yaml.
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The config file did not exist at the given path.
    #[error("config not found at {path}")]
    NotFound { path: PathBuf },
}
