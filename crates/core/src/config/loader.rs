//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Configuration wrapper
#[derive(Debug, Clone)]
pub struct Config {
    pub schema: ConfigSchema,
    pub path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema: ConfigSchema::default(),
            path: None,
        }
    }
}

impl Config {
    /// Load configuration from a file path or use defaults.
    ///
    /// An explicit path must exist; otherwise the standard locations are
    /// tried in order and defaults are used when none is found.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) if !p.exists() => return Err(Error::config_not_found(p)),
            Some(p) => Some(p.to_path_buf()),
            None => find_config_file(),
        };

        let schema = match &config_path {
            Some(p) => load_config_file(p)?,
            None => ConfigSchema::default(),
        };

        let config = Self {
            schema,
            path: config_path,
        };
        config.validate()?;

        tracing::debug!(path = ?config.path, "Configuration loaded");
        Ok(config)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        let config = Self {
            schema: toml::from_str(content)?,
            path: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject values the navigator and search engine cannot work with
    pub fn validate(&self) -> Result<()> {
        let nav = &self.schema.navigator;

        if nav.stages.is_empty() {
            return Err(Error::invalid_config("navigator.stages must not be empty"));
        }
        for (i, stage) in nav.stages.iter().enumerate() {
            if nav.stages[..i].contains(stage) {
                return Err(Error::invalid_config(format!(
                    "navigator.stages lists \"{}\" more than once",
                    stage
                ))
                .with_suggestion("Each stage name must be unique"));
            }
        }
        if !(nav.transition_ms >= 0.0) {
            return Err(Error::invalid_config("navigator.transition_ms must be >= 0"));
        }
        if !(nav.distance_threshold_px > 0.0) || !(nav.velocity_threshold > 0.0) {
            return Err(Error::invalid_config(
                "navigator swipe thresholds must be positive",
            ));
        }
        if !(nav.boundary_damping > 0.0 && nav.boundary_damping <= 1.0) {
            return Err(Error::invalid_config(
                "navigator.boundary_damping must be in (0, 1]",
            ));
        }
        if self.schema.search.max_results == 0 {
            return Err(Error::invalid_config("search.max_results must be at least 1"));
        }

        Ok(())
    }

    /// Render the effective configuration back to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(&self.schema)
            .map_err(|e| Error::config(format!("Failed to serialize config: {}", e)))
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<PathBuf> {
    let candidates = ["festival.toml", ".festival.toml", ".config/festival.toml"];

    candidates
        .iter()
        .map(PathBuf::from)
        .find(|candidate| candidate.exists())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::config(format!("Failed to read config file {}: {}", path.display(), e))
    })?;

    toml::from_str(&content).map_err(|e| {
        Error::new(
            crate::ErrorCode::ConfigParseError,
            format!("Failed to parse config file {}: {}", path.display(), e),
        )
    })
}
