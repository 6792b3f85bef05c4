//! wl-project: canonical session configuration format and validation.

pub mod migrate;
pub mod schema;
pub mod validate;

use std::path::Path;

pub use migrate::{LATEST_VERSION, migrate_to_latest};
pub use schema::*;
pub use validate::{ValidationError, validate_config};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Migration error: {what}")]
    Migration { what: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk encoding, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    /// `.json` is JSON; everything else is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Yaml,
        }
    }
}

pub fn parse_yaml(content: &str) -> ProjectResult<SessionConfig> {
    let config: SessionConfig = serde_yaml::from_str(content)?;
    finish_load(config)
}

pub fn parse_json(content: &str) -> ProjectResult<SessionConfig> {
    let config: SessionConfig = serde_json::from_str(content)?;
    finish_load(config)
}

fn finish_load(config: SessionConfig) -> ProjectResult<SessionConfig> {
    let config = migrate_to_latest(config)?;
    validate_config(&config)?;
    Ok(config)
}

pub fn load_yaml(path: &Path) -> ProjectResult<SessionConfig> {
    let content = std::fs::read_to_string(path)?;
    parse_yaml(&content)
}

pub fn save_yaml(path: &Path, config: &SessionConfig) -> ProjectResult<()> {
    validate_config(config)?;
    let content = serde_yaml::to_string(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<SessionConfig> {
    let content = std::fs::read_to_string(path)?;
    parse_json(&content)
}

pub fn save_json(path: &Path, config: &SessionConfig) -> ProjectResult<()> {
    validate_config(config)?;
    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load(path: &Path) -> ProjectResult<SessionConfig> {
    match ConfigFormat::from_path(path) {
        ConfigFormat::Yaml => load_yaml(path),
        ConfigFormat::Json => load_json(path),
    }
}

pub fn save(path: &Path, config: &SessionConfig) -> ProjectResult<()> {
    match ConfigFormat::from_path(path) {
        ConfigFormat::Yaml => save_yaml(path, config),
        ConfigFormat::Json => save_json(path, config),
    }
}
