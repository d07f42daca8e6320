//! Storage abstraction trait
//!
//! This module defines the Storage trait that image storage backends implement.

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Listing failed: {0}")]
    ListFailed(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Filesystem metadata for one stored image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredEntry {
    pub name: String,
    pub size: u64,
    /// Last modification time, unix seconds
    pub modified_unix: i64,
}

/// Storage abstraction trait
///
/// Keys are bare filenames in a single flat namespace; there are no
/// sub-directories and no sidecar metadata.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Write `data` under `filename`, replacing any existing file of that name.
    async fn write(&self, filename: &str, data: Vec<u8>) -> StorageResult<()>;

    /// Enumerate stored files (directories are skipped), sorted by name.
    async fn list(&self) -> StorageResult<Vec<StoredEntry>>;

    /// Root directory the files live in, for static serving
    fn base_path(&self) -> &Path;
}
