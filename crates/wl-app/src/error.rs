//! Error types for the wl-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates
/// and gives front ends one error interface.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Load error: {0}")]
    Load(String),

    #[error("Well not found: {0}")]
    WellNotFound(String),

    #[error("Track error: {0}")]
    Track(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read folder: {path}")]
    FolderRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for wl-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<wl_wells::LoadError> for AppError {
    fn from(err: wl_wells::LoadError) -> Self {
        AppError::Load(err.to_string())
    }
}

impl From<wl_wells::RegistryError> for AppError {
    fn from(err: wl_wells::RegistryError) -> Self {
        match err {
            wl_wells::RegistryError::NotFound(name) => AppError::WellNotFound(name),
        }
    }
}

impl From<wl_tracks::TrackError> for AppError {
    fn from(err: wl_tracks::TrackError) -> Self {
        AppError::Track(err.to_string())
    }
}

impl From<wl_project::ProjectError> for AppError {
    fn from(err: wl_project::ProjectError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<wl_core::WlError> for AppError {
    fn from(err: wl_core::WlError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}
