//! Coded errors for catalog and configuration failures
//!
//! Loading `festival.toml` or the JSON fixtures reports an [`Error`] whose
//! [`ErrorCode`] places it in an [`ErrorCategory`]. The CLI maps the category
//! to its process exit status and prints the suggestion, if any, under the
//! message.

use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Numbered failure kinds. The thousands digit is the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    IoError = 2000,
    FileNotFound = 2001,
    PermissionDenied = 2002,

    ConfigError = 3000,
    ConfigNotFound = 3001,
    ConfigParseError = 3002,
    ConfigValidationError = 3003,

    CatalogParseError = 4001,
    RecordNotFound = 4002,
}

/// Where a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Config,
    Catalog,
}

impl ErrorCategory {
    /// Process exit status the CLI reports for this category
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorCategory::Io => 1,
            ErrorCategory::Config => 3,
            ErrorCategory::Catalog => 4,
        }
    }
}

impl ErrorCode {
    pub fn code(&self) -> u32 {
        *self as u32
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ErrorCode::IoError | ErrorCode::FileNotFound | ErrorCode::PermissionDenied => {
                ErrorCategory::Io
            }
            ErrorCode::ConfigError
            | ErrorCode::ConfigNotFound
            | ErrorCode::ConfigParseError
            | ErrorCode::ConfigValidationError => ErrorCategory::Config,
            ErrorCode::CatalogParseError | ErrorCode::RecordNotFound => ErrorCategory::Catalog,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

/// A coded failure with an optional note on what was being loaded and a hint
/// for fixing it.
#[derive(Error, Debug)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub context: Option<String>,
    pub suggestion: Option<String>,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ctx) = &self.context {
            write!(f, "\n  While: {}", ctx)?;
        }
        if let Some(hint) = &self.suggestion {
            write!(f, "\n  Hint: {}", hint)?;
        }
        Ok(())
    }
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: None,
            suggestion: None,
            source: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn file_not_found(path: impl AsRef<Path>) -> Self {
        Self::new(
            ErrorCode::FileNotFound,
            format!("File not found: {}", path.as_ref().display()),
        )
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    pub fn config_not_found(path: impl AsRef<Path>) -> Self {
        Self::new(
            ErrorCode::ConfigNotFound,
            format!("Configuration file not found: {}", path.as_ref().display()),
        )
        .with_suggestion("Create a festival.toml file or pass --config with a path")
    }

    /// A `festival.toml` value that parsed but cannot drive the catalog
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigValidationError, message)
    }

    /// A fixture file that is not a JSON list of records
    pub fn catalog(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::CatalogParseError,
            format!("{}: {}", path.as_ref().display(), message.into()),
        )
        .with_suggestion("Catalog files must hold a JSON array or an object wrapping one")
    }

    pub fn record_not_found(id: impl fmt::Display) -> Self {
        Self::new(ErrorCode::RecordNotFound, format!("No catalog record with id {}", id))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let code = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::FileNotFound,
            std::io::ErrorKind::PermissionDenied => ErrorCode::PermissionDenied,
            _ => ErrorCode::IoError,
        };
        Error::new(code, err.to_string()).with_source(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::new(ErrorCode::CatalogParseError, format!("JSON parse error: {}", err))
            .with_source(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::new(ErrorCode::ConfigParseError, format!("TOML parse error: {}", err))
            .with_source(err)
    }
}

/// Attach a "while loading ..." note to a failed catalog or config step.
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::FileNotFound.to_string(), "E2001");
        assert_eq!(ErrorCode::RecordNotFound.to_string(), "E4002");
    }

    #[test]
    fn test_category_exit_codes() {
        assert_eq!(ErrorCode::PermissionDenied.category().exit_code(), 1);
        assert_eq!(ErrorCode::ConfigParseError.category().exit_code(), 3);
        assert_eq!(ErrorCode::ConfigNotFound.category(), ErrorCategory::Config);
        assert_eq!(ErrorCode::RecordNotFound.category().exit_code(), 4);
    }

    #[test]
    fn test_catalog_error_has_suggestion() {
        let err = Error::catalog("data/projects.json", "expected an array")
            .with_context("loading the project catalog");

        assert_eq!(err.code, ErrorCode::CatalogParseError);
        let shown = err.to_string();
        assert!(shown.contains("data/projects.json"));
        assert!(shown.contains("While: loading the project catalog"));
        assert!(shown.contains("Hint: "));
    }

    #[test]
    fn test_io_error_maps_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert_eq!(err.code, ErrorCode::FileNotFound);
        assert!(err.source.is_some());
    }

    #[test]
    fn test_context_keeps_code() {
        let failed: Result<()> = Err(Error::invalid_config("navigator.stages must not be empty"));
        let err = failed.context("validating festival.toml").unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigValidationError);
        assert_eq!(err.context.as_deref(), Some("validating festival.toml"));
    }
}
