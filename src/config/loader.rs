//! Configuration loading from disk and the environment.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::EdgeConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Values supplied on the command line or through the environment.
///
/// Each `Some` replaces the corresponding file value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub bind_address: Option<String>,
    pub backend_origin: Option<String>,
    pub assets_root: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl EdgeConfig {
    /// Layer CLI/env values on top of this configuration.
    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(bind) = &overrides.bind_address {
            self.listener.bind_address = bind.clone();
        }
        if let Some(origin) = &overrides.backend_origin {
            self.backend.origin = origin.clone();
        }
        if let Some(root) = &overrides.assets_root {
            self.assets.root = root.clone();
        }
        if let Some(level) = &overrides.log_level {
            self.observability.log_level = level.clone();
        }
    }
}

/// Parse a configuration file without validating it.
pub fn read_config(path: &Path) -> Result<EdgeConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<EdgeConfig, ConfigError> {
    let config = read_config(path)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Build the effective configuration: optional file, then overrides, then validation.
pub fn resolve_config(
    path: Option<&Path>,
    overrides: &Overrides,
) -> Result<EdgeConfig, ConfigError> {
    let mut config = match path {
        Some(path) => read_config(path)?,
        None => EdgeConfig::default(),
    };
    config.apply_overrides(overrides);
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
