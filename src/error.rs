use thiserror::Error;

use crate::config::ConfigError;
use crate::local_storage::StorageError;
use crate::services::auth_service::AuthError;
use crate::services::scanner_service::ScanError;
use crate::store::StoreError;

/// Application-level error, aggregating the per-component failures.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, AppError>;
