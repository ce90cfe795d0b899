//! Error types for scriptlist-sync.

use std::path::PathBuf;

use thiserror::Error;

use scriptlist_core::ConfigError;
use scriptlist_renderer::RenderError;

/// Failure to retrieve a registry document. Always fatal for a run.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Non-success status or transport failure.
    #[error("failed to fetch {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    /// The response body could not be read as text.
    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: std::io::Error,
    },

    /// A local registry file could not be read.
    #[error("failed to read registry file {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// All errors that can arise from a generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Fetching one of the registries failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// An error from the rendering engine.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// An error loading the generator config.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`GenerateError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> GenerateError {
    GenerateError::Io {
        path: path.into(),
        source,
    }
}
