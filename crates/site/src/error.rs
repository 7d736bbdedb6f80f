//! Error types for the site generator.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for site generation.
pub type Result<T> = std::result::Result<T, SiteError>;

/// Errors that can occur while generating the static site.
#[derive(Debug, Error)]
pub enum SiteError {
    /// Writing an output file failed
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A built-in template failed to compile
    #[error("Template error: {0}")]
    Template(#[from] Box<handlebars::TemplateError>),

    /// Rendering a page failed
    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),

    /// Structured data could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The configured base URL is unusable
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl SiteError {
    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SiteError::Write {
            path: path.into(),
            source,
        }
    }
}
