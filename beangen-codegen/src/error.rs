use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, GenerateError>;

/// A template that failed to render.
///
/// Engine-agnostic: the concrete engine's diagnostics are flattened into a
/// message so the rendering mechanism stays swappable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("template '{name}' failed to render: {message}")]
pub struct TemplateError {
    /// Which template failed ("bean" or "sql map").
    pub name: String,
    /// Diagnostic text from the underlying engine.
    pub message: String,
}

/// Failure taxonomy for one generation run.
///
/// All variants surface to the caller as a single tagged result; none are
/// retried here. Artifacts materialized before a failure stay on disk.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Required configuration is missing or the template engine could not be
    /// initialized. Raised before any file write.
    #[error("invalid generator configuration: {message}")]
    Configuration { message: String },

    /// A template is malformed or references unknown context entries.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// The underlying storage write failed.
    #[error("failed to write '{path}'")]
    Materialization {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
