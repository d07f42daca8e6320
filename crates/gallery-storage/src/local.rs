use crate::traits::{Storage, StorageError, StorageResult, StoredEntry};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Local filesystem storage implementation
#[derive(Clone, Debug)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage instance, creating the directory if needed
    ///
    /// # Arguments
    /// * `base_path` - Directory holding the uploaded images (e.g., "./uploads")
    pub async fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalStorage { base_path })
    }

    /// Convert a filename to its path inside the storage directory
    ///
    /// Keys are flat: a key must be a single normal path component, so nothing
    /// can address a file outside the base directory or inside a sub-directory.
    fn key_to_path(&self, filename: &str) -> StorageResult<PathBuf> {
        if filename.is_empty() {
            return Err(StorageError::InvalidKey("Filename is empty".to_string()));
        }

        if filename == "."
            || filename == ".."
            || filename.contains('/')
            || filename.contains('\\')
            || filename.contains('\0')
        {
            return Err(StorageError::InvalidKey(format!(
                "Filename contains invalid characters: {}",
                filename
            )));
        }

        Ok(self.base_path.join(filename))
    }
}

fn unix_seconds(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs() as i64,
        Err(e) => -(e.duration().as_secs() as i64),
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn write(&self, filename: &str, data: Vec<u8>) -> StorageResult<()> {
        let path = self.key_to_path(filename)?;
        let size = data.len();
        let start = std::time::Instant::now();

        let mut file = fs::File::create(&path).await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        file.write_all(&data).await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        tracing::debug!(
            path = %path.display(),
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage write successful"
        );

        Ok(())
    }

    async fn list(&self) -> StorageResult<Vec<StoredEntry>> {
        let mut dir = fs::read_dir(&self.base_path).await.map_err(|e| {
            StorageError::ListFailed(format!(
                "Failed to read directory {}: {}",
                self.base_path.display(),
                e
            ))
        })?;

        let mut entries = Vec::new();
        loop {
            let entry = match dir.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    return Err(StorageError::ListFailed(format!(
                        "Failed to read directory {}: {}",
                        self.base_path.display(),
                        e
                    )))
                }
            };

            let path = entry.path();
            let metadata = match fs::metadata(&path).await {
                Ok(metadata) => metadata,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Skipping entry whose metadata cannot be read"
                    );
                    continue;
                }
            };

            if metadata.is_dir() {
                continue;
            }

            let modified_unix = match metadata.modified() {
                Ok(time) => unix_seconds(time),
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Modification time unavailable, reporting 0"
                    );
                    0
                }
            };

            entries.push(StoredEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                size: metadata.len(),
                modified_unix,
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(entries)
    }

    fn base_path(&self) -> &Path {
        &self.base_path
    }
}
