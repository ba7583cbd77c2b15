use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the sqlite file backing the storage slots.
    pub storage_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let storage_path =
            env::var("STORAGE_PATH").unwrap_or_else(|_| "data/logistics.db".to_string());
        if storage_path.trim().is_empty() {
            return Err(ConfigError::EmptyStoragePath);
        }

        Ok(Self { storage_path })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("STORAGE_PATH must not be empty")]
    EmptyStoragePath,
}
